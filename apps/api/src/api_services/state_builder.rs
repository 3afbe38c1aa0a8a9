use std::sync::Arc;

use adminhub_application::{
    AuditLogRepository, AuditRepository, AuthorizationService, RoleAdminService, RoleRepository,
    RoleStore,
};
use adminhub_core::AppError;
use adminhub_domain::{PageCatalog, standard_system_roles};
use adminhub_infrastructure::{
    InMemoryAuditRepository, InMemoryRoleRepository, PostgresRoleAuditRepository,
    PostgresRoleRepository,
};
use tracing::info;

use crate::api_config::{ApiConfig, RoleStoreBackend};
use crate::state::AppState;

use super::connect_and_migrate;

/// Repository set backing the role store and audit trail.
pub struct RoleBackends {
    pub roles: Arc<dyn RoleRepository>,
    pub audit: Arc<dyn AuditRepository>,
    pub audit_log: Arc<dyn AuditLogRepository>,
}

impl RoleBackends {
    pub fn in_memory() -> Self {
        let audit = Arc::new(InMemoryAuditRepository::new());
        Self {
            roles: Arc::new(InMemoryRoleRepository::new()),
            audit: audit.clone(),
            audit_log: audit,
        }
    }
}

pub async fn build_app_state(config: &ApiConfig) -> Result<AppState, AppError> {
    let backends = match config.role_store_backend {
        RoleStoreBackend::Memory => RoleBackends::in_memory(),
        RoleStoreBackend::Postgres => {
            let pool = connect_and_migrate(config.required_database_url()?).await?;
            let history = Arc::new(PostgresRoleAuditRepository::new(pool.clone()));
            RoleBackends {
                roles: Arc::new(PostgresRoleRepository::new(pool)),
                audit: history.clone(),
                audit_log: history,
            }
        }
    };

    info!(
        backend = ?config.role_store_backend,
        pages = config.page_catalog.list_pages().len(),
        "role store configured"
    );

    assemble_app_state(
        config.page_catalog.clone(),
        backends,
        config.seed_system_roles,
    )
    .await
}

pub async fn assemble_app_state(
    catalog: PageCatalog,
    backends: RoleBackends,
    seed_system_roles: bool,
) -> Result<AppState, AppError> {
    let role_store = RoleStore::new(catalog.clone(), backends.roles.clone());

    if seed_system_roles {
        let inserted = role_store
            .seed_system_roles(standard_system_roles(&catalog)?)
            .await?;
        info!(inserted, "standard system roles seeded");
    }

    let authorization_service = AuthorizationService::new(catalog, backends.roles);
    let role_admin_service = RoleAdminService::new(
        authorization_service.clone(),
        role_store,
        backends.audit,
        backends.audit_log,
    );

    Ok(AppState {
        authorization_service,
        role_admin_service,
    })
}
