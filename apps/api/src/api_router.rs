use adminhub_core::AppError;
use axum::Router;
use axum::middleware::from_fn;
use axum::routing::{get, put};
use tower_http::trace::TraceLayer;

use crate::state::AppState;
use crate::{handlers, middleware};

mod cors;

#[cfg(test)]
mod tests;

pub fn build_router(app_state: AppState, frontend_url: &str) -> Result<Router, AppError> {
    let access_routes = Router::new()
        .route(
            "/api/access/navigation",
            get(handlers::access::navigation_handler),
        )
        .route(
            "/api/access/pages/{page}",
            get(handlers::access::page_access_handler),
        );

    let role_routes = Router::new()
        .route(
            "/api/roles",
            get(handlers::roles::list_roles_handler).post(handlers::roles::create_role_handler),
        )
        .route(
            "/api/roles/{role_id}",
            get(handlers::roles::get_role_handler)
                .patch(handlers::roles::update_role_handler)
                .delete(handlers::roles::delete_role_handler),
        )
        .route(
            "/api/roles/{role_id}/permissions",
            put(handlers::roles::replace_permissions_handler),
        )
        .route(
            "/api/roles/{role_id}/permissions/{page}/{action}",
            put(handlers::roles::set_permission_handler),
        )
        .route(
            "/api/audit-log",
            get(handlers::audit::list_audit_log_handler),
        );

    Ok(Router::new()
        .route("/health", get(handlers::health::health_handler))
        .merge(
            access_routes
                .merge(role_routes)
                .layer(from_fn(middleware::attach_identity)),
        )
        .layer(cors::build_cors_layer(frontend_url)?)
        .layer(TraceLayer::new_for_http())
        .with_state(app_state))
}
