use super::*;

impl RoleStore {
    /// Sets one action flag on one page of a role.
    pub async fn set_permission(
        &self,
        role_id: &str,
        page: &str,
        action: Action,
        value: bool,
    ) -> AppResult<Role> {
        self.catalog.require_page(page)?;
        let _guard = self.mutation_gate.lock().await;

        let mut role = self.load_for_mutation(role_id).await?;
        reject_super_role_edit(&role)?;

        role.set_permission(page, action, value)?;
        self.repository.save_role(role.clone()).await?;

        info!(
            role_id,
            page,
            action = action.as_str(),
            value,
            "role permission changed"
        );
        Ok(role)
    }

    /// Replaces the whole permission matrix of a role.
    ///
    /// The supplied pages must equal the catalog exactly.
    pub async fn replace_permissions(
        &self,
        role_id: &str,
        records: Vec<PermissionRecord>,
    ) -> AppResult<Role> {
        self.catalog.validate_complete(&records)?;
        let _guard = self.mutation_gate.lock().await;

        let mut role = self.find_role(role_id).await?;
        reject_super_role_edit(&role)?;

        role.replace_permissions(self.catalog.in_catalog_order(records));
        self.repository.save_role(role.clone()).await?;

        info!(role_id, "role permissions replaced");
        Ok(role)
    }
}
