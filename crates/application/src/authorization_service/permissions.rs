use super::*;

impl AuthorizationService {
    /// Returns the effective permission records of an identity.
    pub async fn resolve(&self, identity: Option<&Identity>) -> Vec<PermissionRecord> {
        match self.resolve_grant(identity).await {
            Resolution::FullAccess => self.catalog.default_permissions(true),
            Resolution::Stored(records) => records,
            Resolution::Denied => self.catalog.default_permissions(false),
        }
    }

    /// Returns whether the identity may perform an action on a page.
    ///
    /// Pages missing from the resolved records are denied.
    pub async fn can(&self, identity: Option<&Identity>, page: &str, action: Action) -> bool {
        let allowed = grants(&self.resolve(identity).await, page, action);

        if !allowed {
            debug!(
                role_name = identity.map(Identity::role_name),
                page,
                action = action.as_str(),
                "permission check denied"
            );
        }
        allowed
    }

    /// Returns whether the identity may see a page.
    pub async fn can_view(&self, identity: Option<&Identity>, page: &str) -> bool {
        self.can(identity, page, Action::View).await
    }

    /// Ensures the identity may perform an action on a page.
    pub async fn require_action(
        &self,
        identity: Option<&Identity>,
        page: &str,
        action: Action,
    ) -> AppResult<()> {
        let Some(actor) = identity else {
            return Err(AppError::Unauthorized(
                "an authenticated identity is required".to_owned(),
            ));
        };

        if self.can(identity, page, action).await {
            return Ok(());
        }

        Err(AppError::Forbidden(format!(
            "'{}' is missing permission '{}:{}'",
            actor.actor_label(),
            page,
            action.as_str()
        )))
    }

    /// Ensures the identity may open a page.
    pub async fn require_page(&self, identity: Option<&Identity>, page: &str) -> AppResult<()> {
        self.require_action(identity, page, Action::View).await
    }

    async fn resolve_grant(&self, identity: Option<&Identity>) -> Resolution {
        let Some(identity) = identity else {
            return Resolution::Denied;
        };

        if identity.is_superuser() {
            return Resolution::FullAccess;
        }

        match self.repository.find_role_by_name(identity.role_name()).await {
            Ok(Some(role)) if role.is_super() => Resolution::FullAccess,
            Ok(Some(role)) => Resolution::Stored(role.permissions().to_vec()),
            Ok(None) => {
                debug!(
                    role_name = identity.role_name(),
                    "identity role is not defined"
                );
                Resolution::Denied
            }
            Err(error) => {
                warn!(
                    role_name = identity.role_name(),
                    error = %error,
                    "role lookup failed, denying access"
                );
                Resolution::Denied
            }
        }
    }
}
