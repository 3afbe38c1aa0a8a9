use super::*;

impl RoleAdminService {
    /// Lists audit log entries, newest first, with paging bounded the same
    /// way for every backend.
    pub async fn list_audit_log(
        &self,
        actor: &Identity,
        query: AuditLogQuery,
    ) -> AppResult<Vec<AuditLogEntry>> {
        self.authorization_service
            .require_action(Some(actor), ACTIVITY_PAGE, Action::View)
            .await?;

        self.audit_log_repository
            .list_recent_entries(query.bounded())
            .await
    }
}
