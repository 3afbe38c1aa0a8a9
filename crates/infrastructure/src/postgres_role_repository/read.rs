use std::collections::HashMap;

use super::*;

impl PostgresRoleRepository {
    pub(super) async fn list_roles_impl(&self) -> AppResult<Vec<Role>> {
        let rows = sqlx::query_as::<_, RoleRow>(
            r#"
            SELECT id, name, description, is_system, is_super, user_count, created_at
            FROM roles
            ORDER BY created_at, name
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|error| AppError::Internal(format!("failed to list roles: {error}")))?;

        self.attach_permissions(rows).await
    }

    pub(super) async fn find_role_impl(&self, role_id: &str) -> AppResult<Option<Role>> {
        let row = sqlx::query_as::<_, RoleRow>(
            r#"
            SELECT id, name, description, is_system, is_super, user_count, created_at
            FROM roles
            WHERE id = $1
            "#,
        )
        .bind(role_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|error| AppError::Internal(format!("failed to find role '{role_id}': {error}")))?;

        self.attach_single(row).await
    }

    pub(super) async fn find_role_by_name_impl(&self, name: &str) -> AppResult<Option<Role>> {
        let row = sqlx::query_as::<_, RoleRow>(
            r#"
            SELECT id, name, description, is_system, is_super, user_count, created_at
            FROM roles
            WHERE name = $1
            "#,
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await
        .map_err(|error| {
            AppError::Internal(format!("failed to find role named '{name}': {error}"))
        })?;

        self.attach_single(row).await
    }

    async fn attach_single(&self, row: Option<RoleRow>) -> AppResult<Option<Role>> {
        let Some(row) = row else {
            return Ok(None);
        };

        Ok(self.attach_permissions(vec![row]).await?.into_iter().next())
    }

    async fn attach_permissions(&self, rows: Vec<RoleRow>) -> AppResult<Vec<Role>> {
        if rows.is_empty() {
            return Ok(Vec::new());
        }

        let role_ids: Vec<String> = rows.iter().map(|row| row.id.clone()).collect();
        let permission_rows = sqlx::query_as::<_, PermissionRow>(
            r#"
            SELECT role_id, page, can_view, can_edit, can_create, can_delete
            FROM role_permissions
            WHERE role_id = ANY($1)
            ORDER BY role_id, position
            "#,
        )
        .bind(role_ids)
        .fetch_all(&self.pool)
        .await
        .map_err(|error| {
            AppError::Internal(format!("failed to load role permissions: {error}"))
        })?;

        let mut by_role: HashMap<String, Vec<PermissionRecord>> = HashMap::new();
        for row in permission_rows {
            by_role.entry(row.role_id).or_default().push(PermissionRecord {
                page: row.page,
                view: row.can_view,
                edit: row.can_edit,
                create: row.can_create,
                delete: row.can_delete,
            });
        }

        rows.into_iter()
            .map(|row| {
                let permissions = by_role.remove(&row.id).unwrap_or_default();
                role_from_row(row, permissions)
            })
            .collect()
    }
}
