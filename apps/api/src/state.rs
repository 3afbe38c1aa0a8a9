use adminhub_application::{AuthorizationService, RoleAdminService};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub authorization_service: AuthorizationService,
    pub role_admin_service: RoleAdminService,
}
