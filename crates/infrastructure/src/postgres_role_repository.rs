use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, Transaction};

use adminhub_application::RoleRepository;
use adminhub_core::{AppError, AppResult};
use adminhub_domain::{PermissionRecord, Role, RoleInput};

mod read;
mod write;


/// PostgreSQL-backed role repository.
///
/// Roles live in `roles`; every page flag lives in `role_permissions`, one
/// row per catalog page with all four flags stored explicitly.
#[derive(Clone)]
pub struct PostgresRoleRepository {
    pool: PgPool,
}

impl PostgresRoleRepository {
    /// Creates a repository with the provided connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct RoleRow {
    id: String,
    name: String,
    description: String,
    is_system: bool,
    is_super: bool,
    user_count: i32,
    created_at: DateTime<Utc>,
}

#[derive(Debug, FromRow)]
struct PermissionRow {
    role_id: String,
    page: String,
    can_view: bool,
    can_edit: bool,
    can_create: bool,
    can_delete: bool,
}

#[async_trait]
impl RoleRepository for PostgresRoleRepository {
    async fn list_roles(&self) -> AppResult<Vec<Role>> {
        self.list_roles_impl().await
    }

    async fn find_role(&self, role_id: &str) -> AppResult<Option<Role>> {
        self.find_role_impl(role_id).await
    }

    async fn find_role_by_name(&self, name: &str) -> AppResult<Option<Role>> {
        self.find_role_by_name_impl(name).await
    }

    async fn insert_role(&self, role: Role) -> AppResult<()> {
        self.insert_role_impl(role).await
    }

    async fn save_role(&self, role: Role) -> AppResult<()> {
        self.save_role_impl(role).await
    }

    async fn delete_role(&self, role_id: &str) -> AppResult<bool> {
        self.delete_role_impl(role_id).await
    }
}

fn role_from_row(row: RoleRow, permissions: Vec<PermissionRecord>) -> AppResult<Role> {
    let user_count = u32::try_from(row.user_count).map_err(|error| {
        AppError::Internal(format!(
            "invalid stored user count for role '{}': {error}",
            row.id
        ))
    })?;
    let role_id = row.id.clone();

    Role::new(RoleInput {
        id: row.id,
        name: row.name,
        description: row.description,
        permissions,
        is_system: row.is_system,
        is_super: row.is_super,
        user_count,
        created_at: row.created_at,
    })
    .map_err(|error| AppError::Internal(format!("invalid stored role '{role_id}': {error}")))
}

fn map_role_conflict(error: sqlx::Error, role_name: &str) -> AppError {
    if let sqlx::Error::Database(database_error) = &error
        && database_error.code().as_deref() == Some("23505")
    {
        return AppError::Validation(format!("role name '{role_name}' is already in use"));
    }

    AppError::Internal(format!("failed to persist role: {error}"))
}
