use std::sync::Arc;

use adminhub_core::{AppResult, Identity};
use adminhub_domain::{Action, AuditAction, PermissionRecord, Role};

use crate::{
    AuditEvent, AuditLogEntry, AuditLogQuery, AuditLogRepository, AuditRepository,
    AuthorizationService, RoleStore, UpdateRoleInput,
};

mod audit;
mod roles;


const ROLES_PAGE: &str = "roles";
const ACTIVITY_PAGE: &str = "activity";
const ROLE_RESOURCE_TYPE: &str = "rbac_role";

/// Administrative surface over the role store.
///
/// Every operation is checked against the acting identity's permissions on
/// the `roles` page and every committed mutation is recorded in the audit log.
#[derive(Clone)]
pub struct RoleAdminService {
    authorization_service: AuthorizationService,
    role_store: RoleStore,
    audit_repository: Arc<dyn AuditRepository>,
    audit_log_repository: Arc<dyn AuditLogRepository>,
}

impl RoleAdminService {
    /// Creates a role administration service.
    #[must_use]
    pub fn new(
        authorization_service: AuthorizationService,
        role_store: RoleStore,
        audit_repository: Arc<dyn AuditRepository>,
        audit_log_repository: Arc<dyn AuditLogRepository>,
    ) -> Self {
        Self {
            authorization_service,
            role_store,
            audit_repository,
            audit_log_repository,
        }
    }

    async fn require_roles_permission(&self, actor: &Identity, action: Action) -> AppResult<()> {
        self.authorization_service
            .require_action(Some(actor), ROLES_PAGE, action)
            .await
    }

    async fn append_role_event(
        &self,
        actor: &Identity,
        action: AuditAction,
        role_id: &str,
        detail: String,
    ) -> AppResult<()> {
        self.audit_repository
            .append_event(AuditEvent {
                subject: actor.actor_label().to_owned(),
                action,
                resource_type: ROLE_RESOURCE_TYPE.to_owned(),
                resource_id: role_id.to_owned(),
                detail: Some(detail),
            })
            .await
    }
}
