//! Application services and ports.

#![forbid(unsafe_code)]

mod authorization_service;
mod role_admin_service;
mod role_ports;
mod role_store;

#[cfg(test)]
mod test_support;

pub use authorization_service::AuthorizationService;
pub use role_admin_service::RoleAdminService;
pub use role_ports::{
    AuditEvent, AuditLogEntry, AuditLogQuery, AuditLogRepository, AuditRepository,
    IdentityProvider, PageCapabilities, RoleRepository, UpdateRoleInput,
};
pub use role_store::RoleStore;
