use async_trait::async_trait;

use adminhub_core::AppResult;
use adminhub_domain::Role;

/// Persistence port for roles.
///
/// Every write replaces a whole role atomically. Validation stays in the role
/// store; implementations only guard storage-level uniqueness.
#[async_trait]
pub trait RoleRepository: Send + Sync {
    /// Lists every stored role.
    async fn list_roles(&self) -> AppResult<Vec<Role>>;

    /// Finds a role by identifier.
    async fn find_role(&self, role_id: &str) -> AppResult<Option<Role>>;

    /// Finds a role by its unique name (case-sensitive exact match).
    async fn find_role_by_name(&self, name: &str) -> AppResult<Option<Role>>;

    /// Inserts a new role, failing when its id or name is already stored.
    async fn insert_role(&self, role: Role) -> AppResult<()>;

    /// Replaces an existing role, failing with `NotFound` when it is absent.
    async fn save_role(&self, role: Role) -> AppResult<()>;

    /// Deletes a role, returning whether it existed.
    async fn delete_role(&self, role_id: &str) -> AppResult<bool>;
}
