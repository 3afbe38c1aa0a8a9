use std::sync::Arc;

use adminhub_core::{AppError, AppResult, NonEmptyString};
use adminhub_domain::{Action, PageCatalog, PermissionRecord, Role};
use chrono::Utc;
use tokio::sync::Mutex;
use tracing::info;

use crate::role_ports::{RoleRepository, UpdateRoleInput};

mod lifecycle;
mod permissions;


/// Owns the role set and enforces matrix-consistency invariants.
///
/// Mutations are serialized through one async gate so validation and the
/// write that follows it form a single unit. Reads go straight to the
/// repository, which replaces whole roles atomically.
#[derive(Clone)]
pub struct RoleStore {
    catalog: PageCatalog,
    repository: Arc<dyn RoleRepository>,
    mutation_gate: Arc<Mutex<()>>,
}

impl RoleStore {
    /// Creates a role store over a repository implementation.
    #[must_use]
    pub fn new(catalog: PageCatalog, repository: Arc<dyn RoleRepository>) -> Self {
        Self {
            catalog,
            repository,
            mutation_gate: Arc::new(Mutex::new(())),
        }
    }

    /// Returns the page catalog roles are checked against.
    #[must_use]
    pub fn catalog(&self) -> &PageCatalog {
        &self.catalog
    }

    /// Lists roles ordered by creation time, then name.
    pub async fn list_roles(&self) -> AppResult<Vec<Role>> {
        let mut roles = self.repository.list_roles().await?;
        roles.sort_by(|left, right| {
            left.created_at()
                .cmp(&right.created_at())
                .then_with(|| left.name().cmp(right.name()))
        });
        Ok(roles)
    }

    /// Returns one role or `NotFound`.
    pub async fn find_role(&self, role_id: &str) -> AppResult<Role> {
        self.repository
            .find_role(role_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("role '{role_id}' was not found")))
    }

    async fn ensure_name_available(&self, name: &str, owner_id: Option<&str>) -> AppResult<()> {
        let existing = self.repository.find_role_by_name(name).await?;
        match existing {
            Some(role) if Some(role.id().as_str()) != owner_id => Err(AppError::Validation(
                format!("role name '{name}' is already in use"),
            )),
            _ => Ok(()),
        }
    }

    /// Loads a role for mutation, padding records for pages added to the
    /// catalog since it was stored.
    async fn load_for_mutation(&self, role_id: &str) -> AppResult<Role> {
        let mut role = self.find_role(role_id).await?;
        role.align_with_catalog(&self.catalog);
        Ok(role)
    }
}

fn validated_name(name: &str) -> AppResult<NonEmptyString> {
    NonEmptyString::new(name.trim())
        .map_err(|_| AppError::Validation("role name must not be empty".to_owned()))
}

fn reject_super_role_edit(role: &Role) -> AppResult<()> {
    if role.is_super() {
        return Err(AppError::ProtectedRole(format!(
            "permissions of super role '{}' cannot be edited",
            role.name()
        )));
    }

    Ok(())
}
