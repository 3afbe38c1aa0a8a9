use tracing::debug;

use super::*;

impl PostgresRoleRepository {
    pub(super) async fn insert_role_impl(&self, role: Role) -> AppResult<()> {
        let mut transaction =
            self.pool.begin().await.map_err(|error| {
                AppError::Internal(format!("failed to begin transaction: {error}"))
            })?;

        sqlx::query(
            r#"
            INSERT INTO roles (id, name, description, is_system, is_super, user_count, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(role.id().as_str())
        .bind(role.name())
        .bind(role.description())
        .bind(role.is_system())
        .bind(role.is_super())
        .bind(stored_user_count(&role)?)
        .bind(role.created_at())
        .execute(&mut *transaction)
        .await
        .map_err(|error| map_role_conflict(error, role.name()))?;

        write_permissions(&mut transaction, &role).await?;

        transaction.commit().await.map_err(|error| {
            AppError::Internal(format!("failed to commit transaction: {error}"))
        })?;

        debug!(role_id = %role.id(), "inserted role row");
        Ok(())
    }

    pub(super) async fn save_role_impl(&self, role: Role) -> AppResult<()> {
        let mut transaction =
            self.pool.begin().await.map_err(|error| {
                AppError::Internal(format!("failed to begin transaction: {error}"))
            })?;

        let updated = sqlx::query(
            r#"
            UPDATE roles
            SET name = $2, description = $3, user_count = $4
            WHERE id = $1
            "#,
        )
        .bind(role.id().as_str())
        .bind(role.name())
        .bind(role.description())
        .bind(stored_user_count(&role)?)
        .execute(&mut *transaction)
        .await
        .map_err(|error| map_role_conflict(error, role.name()))?;

        if updated.rows_affected() == 0 {
            return Err(AppError::NotFound(format!(
                "role '{}' was not found",
                role.id()
            )));
        }

        sqlx::query("DELETE FROM role_permissions WHERE role_id = $1")
            .bind(role.id().as_str())
            .execute(&mut *transaction)
            .await
            .map_err(|error| {
                AppError::Internal(format!("failed to clear role permissions: {error}"))
            })?;

        write_permissions(&mut transaction, &role).await?;

        transaction.commit().await.map_err(|error| {
            AppError::Internal(format!("failed to commit transaction: {error}"))
        })?;

        Ok(())
    }

    pub(super) async fn delete_role_impl(&self, role_id: &str) -> AppResult<bool> {
        let deleted = sqlx::query("DELETE FROM roles WHERE id = $1")
            .bind(role_id)
            .execute(&self.pool)
            .await
            .map_err(|error| {
                AppError::Internal(format!("failed to delete role '{role_id}': {error}"))
            })?;

        Ok(deleted.rows_affected() > 0)
    }
}

async fn write_permissions(
    transaction: &mut Transaction<'_, Postgres>,
    role: &Role,
) -> AppResult<()> {
    for (position, record) in role.permissions().iter().enumerate() {
        let position = i32::try_from(position).map_err(|error| {
            AppError::Internal(format!("permission position out of range: {error}"))
        })?;

        sqlx::query(
            r#"
            INSERT INTO role_permissions (
                role_id,
                page,
                position,
                can_view,
                can_edit,
                can_create,
                can_delete
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(role.id().as_str())
        .bind(record.page.as_str())
        .bind(position)
        .bind(record.view)
        .bind(record.edit)
        .bind(record.create)
        .bind(record.delete)
        .execute(&mut **transaction)
        .await
        .map_err(|error| {
            AppError::Internal(format!("failed to persist role permission: {error}"))
        })?;
    }

    Ok(())
}

fn stored_user_count(role: &Role) -> AppResult<i32> {
    i32::try_from(role.user_count()).map_err(|error| {
        AppError::Validation(format!(
            "user count for role '{}' is out of range: {error}",
            role.name()
        ))
    })
}
