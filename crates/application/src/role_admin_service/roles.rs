use super::*;

impl RoleAdminService {
    /// Returns all roles for administrative users.
    pub async fn list_roles(&self, actor: &Identity) -> AppResult<Vec<Role>> {
        self.require_roles_permission(actor, Action::View).await?;
        self.role_store.list_roles().await
    }

    /// Returns one role for administrative users.
    pub async fn find_role(&self, actor: &Identity, role_id: &str) -> AppResult<Role> {
        self.require_roles_permission(actor, Action::View).await?;
        self.role_store.find_role(role_id).await
    }

    /// Creates a custom role and emits an audit event.
    pub async fn create_role(
        &self,
        actor: &Identity,
        name: &str,
        description: &str,
    ) -> AppResult<Role> {
        self.require_roles_permission(actor, Action::Create).await?;

        let role = self.role_store.create_role(name, description).await?;

        self.append_role_event(
            actor,
            AuditAction::SecurityRoleCreated,
            role.id().as_str(),
            format!("created role '{}'", role.name()),
        )
        .await?;

        Ok(role)
    }

    /// Updates role metadata and emits an audit event.
    ///
    /// An empty update changes nothing and is not audited.
    pub async fn update_role(
        &self,
        actor: &Identity,
        role_id: &str,
        input: UpdateRoleInput,
    ) -> AppResult<Role> {
        self.require_roles_permission(actor, Action::Edit).await?;

        let unchanged = input.is_empty();
        let role = self.role_store.update_role(role_id, input).await?;
        if unchanged {
            return Ok(role);
        }

        self.append_role_event(
            actor,
            AuditAction::SecurityRoleUpdated,
            role_id,
            format!("updated role '{}'", role.name()),
        )
        .await?;

        Ok(role)
    }

    /// Deletes a custom role and emits an audit event.
    pub async fn delete_role(&self, actor: &Identity, role_id: &str) -> AppResult<()> {
        self.require_roles_permission(actor, Action::Delete).await?;

        self.role_store.delete_role(role_id).await?;

        self.append_role_event(
            actor,
            AuditAction::SecurityRoleDeleted,
            role_id,
            format!("deleted role '{role_id}'"),
        )
        .await
    }

    /// Sets one permission flag and emits an audit event.
    pub async fn set_permission(
        &self,
        actor: &Identity,
        role_id: &str,
        page: &str,
        action: Action,
        value: bool,
    ) -> AppResult<Role> {
        self.require_roles_permission(actor, Action::Edit).await?;

        let role = self
            .role_store
            .set_permission(role_id, page, action, value)
            .await?;

        self.append_role_event(
            actor,
            AuditAction::SecurityRolePermissionChanged,
            role_id,
            format!(
                "set '{page}:{}' to {value} on role '{}'",
                action.as_str(),
                role.name()
            ),
        )
        .await?;

        Ok(role)
    }

    /// Replaces a role's permission matrix and emits an audit event.
    pub async fn replace_permissions(
        &self,
        actor: &Identity,
        role_id: &str,
        records: Vec<PermissionRecord>,
    ) -> AppResult<Role> {
        self.require_roles_permission(actor, Action::Edit).await?;

        let role = self
            .role_store
            .replace_permissions(role_id, records)
            .await?;

        self.append_role_event(
            actor,
            AuditAction::SecurityRolePermissionsReplaced,
            role_id,
            format!("replaced permissions of role '{}'", role.name()),
        )
        .await?;

        Ok(role)
    }
}
