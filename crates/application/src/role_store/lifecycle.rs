use super::*;

impl RoleStore {
    /// Creates a custom role with no access on any page.
    pub async fn create_role(&self, name: &str, description: &str) -> AppResult<Role> {
        let name = validated_name(name)?;
        let _guard = self.mutation_gate.lock().await;

        self.ensure_name_available(name.as_str(), None).await?;

        let role = Role::custom(name, description, &self.catalog, Utc::now());
        self.repository.insert_role(role.clone()).await?;

        info!(role_id = %role.id(), role_name = role.name(), "role created");
        Ok(role)
    }

    /// Applies a partial metadata update.
    pub async fn update_role(&self, role_id: &str, input: UpdateRoleInput) -> AppResult<Role> {
        let name = input.name.as_deref().map(validated_name).transpose()?;
        let _guard = self.mutation_gate.lock().await;

        let mut role = self.load_for_mutation(role_id).await?;
        if input.is_empty() {
            return Ok(role);
        }

        if let Some(name) = name {
            self.ensure_name_available(name.as_str(), Some(role_id))
                .await?;
            role.rename(name);
        }
        if let Some(description) = input.description {
            role.set_description(description);
        }
        if let Some(user_count) = input.user_count {
            role.set_user_count(user_count);
        }

        self.repository.save_role(role.clone()).await?;

        info!(role_id = %role.id(), role_name = role.name(), "role updated");
        Ok(role)
    }

    /// Deletes a custom role. System roles are protected.
    pub async fn delete_role(&self, role_id: &str) -> AppResult<()> {
        let _guard = self.mutation_gate.lock().await;

        let role = self.find_role(role_id).await?;
        if role.is_system() {
            return Err(AppError::ProtectedRole(format!(
                "system role '{}' cannot be deleted",
                role.name()
            )));
        }

        if !self.repository.delete_role(role_id).await? {
            return Err(AppError::NotFound(format!("role '{role_id}' was not found")));
        }

        info!(role_id, role_name = role.name(), "role deleted");
        Ok(())
    }

    /// Inserts seeded system roles whose ids are not stored yet.
    ///
    /// Stored roles are never overwritten. Returns the number inserted.
    pub async fn seed_system_roles(&self, roles: Vec<Role>) -> AppResult<usize> {
        let _guard = self.mutation_gate.lock().await;

        let mut inserted = 0;
        for role in roles {
            if !role.is_system() {
                return Err(AppError::Validation(format!(
                    "seeded role '{}' must be a system role",
                    role.name()
                )));
            }
            self.catalog.validate_complete(role.permissions())?;

            if self.repository.find_role(role.id().as_str()).await?.is_some() {
                continue;
            }
            self.ensure_name_available(role.name(), None).await?;

            info!(role_id = %role.id(), role_name = role.name(), "seeding system role");
            self.repository.insert_role(role).await?;
            inserted += 1;
        }

        Ok(inserted)
    }
}
