use async_trait::async_trait;
use tokio::sync::Mutex;

use adminhub_core::{AppError, AppResult};
use adminhub_domain::{PageCatalog, Role, RoleInput, standard_system_roles};

use crate::{AuditEvent, AuditLogEntry, AuditLogQuery, AuditLogRepository, AuditRepository};
use crate::RoleRepository;

#[derive(Default)]
pub(crate) struct FakeRoleRepository {
    pub(crate) roles: Mutex<Vec<Role>>,
}

impl FakeRoleRepository {
    pub(crate) fn with_roles(roles: Vec<Role>) -> Self {
        Self {
            roles: Mutex::new(roles),
        }
    }
}

#[async_trait]
impl RoleRepository for FakeRoleRepository {
    async fn list_roles(&self) -> AppResult<Vec<Role>> {
        Ok(self.roles.lock().await.clone())
    }

    async fn find_role(&self, role_id: &str) -> AppResult<Option<Role>> {
        Ok(self
            .roles
            .lock()
            .await
            .iter()
            .find(|role| role.id().as_str() == role_id)
            .cloned())
    }

    async fn find_role_by_name(&self, name: &str) -> AppResult<Option<Role>> {
        Ok(self
            .roles
            .lock()
            .await
            .iter()
            .find(|role| role.name() == name)
            .cloned())
    }

    async fn insert_role(&self, role: Role) -> AppResult<()> {
        let mut roles = self.roles.lock().await;
        if roles
            .iter()
            .any(|stored| stored.id() == role.id() || stored.name() == role.name())
        {
            return Err(AppError::Validation(format!(
                "role '{}' already exists",
                role.name()
            )));
        }
        roles.push(role);
        Ok(())
    }

    async fn save_role(&self, role: Role) -> AppResult<()> {
        let mut roles = self.roles.lock().await;
        let Some(stored) = roles.iter_mut().find(|stored| stored.id() == role.id()) else {
            return Err(AppError::NotFound(format!("role '{}' was not found", role.id())));
        };
        *stored = role;
        Ok(())
    }

    async fn delete_role(&self, role_id: &str) -> AppResult<bool> {
        let mut roles = self.roles.lock().await;
        let before = roles.len();
        roles.retain(|role| role.id().as_str() != role_id);
        Ok(roles.len() != before)
    }
}

/// Repository whose every call fails, used to check fail-closed resolution.
pub(crate) struct FailingRoleRepository;

#[async_trait]
impl RoleRepository for FailingRoleRepository {
    async fn list_roles(&self) -> AppResult<Vec<Role>> {
        Err(AppError::Internal("role storage unavailable".to_owned()))
    }

    async fn find_role(&self, _role_id: &str) -> AppResult<Option<Role>> {
        Err(AppError::Internal("role storage unavailable".to_owned()))
    }

    async fn find_role_by_name(&self, _name: &str) -> AppResult<Option<Role>> {
        Err(AppError::Internal("role storage unavailable".to_owned()))
    }

    async fn insert_role(&self, _role: Role) -> AppResult<()> {
        Err(AppError::Internal("role storage unavailable".to_owned()))
    }

    async fn save_role(&self, _role: Role) -> AppResult<()> {
        Err(AppError::Internal("role storage unavailable".to_owned()))
    }

    async fn delete_role(&self, _role_id: &str) -> AppResult<bool> {
        Err(AppError::Internal("role storage unavailable".to_owned()))
    }
}

#[derive(Default)]
pub(crate) struct FakeAuditRepository {
    pub(crate) events: Mutex<Vec<AuditEvent>>,
}

#[async_trait]
impl AuditRepository for FakeAuditRepository {
    async fn append_event(&self, event: AuditEvent) -> AppResult<()> {
        self.events.lock().await.push(event);
        Ok(())
    }
}

#[async_trait]
impl AuditLogRepository for FakeAuditRepository {
    async fn list_recent_entries(&self, query: AuditLogQuery) -> AppResult<Vec<AuditLogEntry>> {
        let events = self.events.lock().await;
        Ok(events
            .iter()
            .enumerate()
            .rev()
            .filter(|(_, event)| query.action.is_none_or(|action| action == event.action))
            .skip(query.offset)
            .take(query.limit)
            .map(|(index, event)| AuditLogEntry {
                event_id: index.to_string(),
                subject: event.subject.clone(),
                action: event.action.as_str().to_owned(),
                resource_type: event.resource_type.clone(),
                resource_id: event.resource_id.clone(),
                detail: event.detail.clone(),
                created_at: "2024-01-01T00:00:00Z".to_owned(),
            })
            .collect())
    }
}

pub(crate) fn seeded_roles() -> Vec<Role> {
    match standard_system_roles(&PageCatalog::standard()) {
        Ok(roles) => roles,
        Err(error) => panic!("failed to build seed roles: {error}"),
    }
}

/// Builds a role from a list of `(page, view, edit, create, delete)` grants;
/// unlisted pages stay all-false.
pub(crate) fn role_with_grants(
    id: &str,
    name: &str,
    is_super: bool,
    grants: &[(&str, bool, bool, bool, bool)],
) -> Role {
    let catalog = PageCatalog::standard();
    let permissions = catalog
        .default_permissions(false)
        .into_iter()
        .map(|mut record| {
            if let Some((_, view, edit, create, delete)) =
                grants.iter().find(|grant| grant.0 == record.page)
            {
                record.view = *view;
                record.edit = *edit;
                record.create = *create;
                record.delete = *delete;
            }
            record
        })
        .collect();

    match Role::new(RoleInput {
        id: id.to_owned(),
        name: name.to_owned(),
        description: String::new(),
        permissions,
        is_system: is_super,
        is_super,
        user_count: 0,
        created_at: chrono::Utc::now(),
    }) {
        Ok(role) => role,
        Err(error) => panic!("invalid test role: {error}"),
    }
}
