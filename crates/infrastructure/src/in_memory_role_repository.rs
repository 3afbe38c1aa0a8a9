use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use adminhub_application::RoleRepository;
use adminhub_core::{AppError, AppResult};
use adminhub_domain::Role;


/// In-memory role repository implementation.
///
/// Each write swaps a whole role under one write guard, so readers never
/// observe a partially updated permission matrix.
#[derive(Debug, Default)]
pub struct InMemoryRoleRepository {
    roles: RwLock<HashMap<String, Role>>,
}

impl InMemoryRoleRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self {
            roles: RwLock::new(HashMap::new()),
        }
    }
}

#[async_trait]
impl RoleRepository for InMemoryRoleRepository {
    async fn list_roles(&self) -> AppResult<Vec<Role>> {
        let roles = self.roles.read().await;
        Ok(roles.values().cloned().collect())
    }

    async fn find_role(&self, role_id: &str) -> AppResult<Option<Role>> {
        Ok(self.roles.read().await.get(role_id).cloned())
    }

    async fn find_role_by_name(&self, name: &str) -> AppResult<Option<Role>> {
        let roles = self.roles.read().await;
        Ok(roles.values().find(|role| role.name() == name).cloned())
    }

    async fn insert_role(&self, role: Role) -> AppResult<()> {
        let mut roles = self.roles.write().await;

        if roles.contains_key(role.id().as_str()) {
            return Err(AppError::Validation(format!(
                "role id '{}' already exists",
                role.id()
            )));
        }
        ensure_unique_name(&roles, &role)?;

        roles.insert(role.id().as_str().to_owned(), role);
        Ok(())
    }

    async fn save_role(&self, role: Role) -> AppResult<()> {
        let mut roles = self.roles.write().await;

        if !roles.contains_key(role.id().as_str()) {
            return Err(AppError::NotFound(format!(
                "role '{}' was not found",
                role.id()
            )));
        }
        ensure_unique_name(&roles, &role)?;

        roles.insert(role.id().as_str().to_owned(), role);
        Ok(())
    }

    async fn delete_role(&self, role_id: &str) -> AppResult<bool> {
        Ok(self.roles.write().await.remove(role_id).is_some())
    }
}

fn ensure_unique_name(roles: &HashMap<String, Role>, role: &Role) -> AppResult<()> {
    let taken = roles
        .values()
        .any(|stored| stored.name() == role.name() && stored.id() != role.id());

    if taken {
        return Err(AppError::Validation(format!(
            "role name '{}' is already in use",
            role.name()
        )));
    }

    Ok(())
}
