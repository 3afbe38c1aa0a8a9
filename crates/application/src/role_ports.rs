mod audit;
mod identity;
mod inputs;
mod repository;

pub use audit::{AuditEvent, AuditLogEntry, AuditLogQuery, AuditLogRepository, AuditRepository};
pub use identity::IdentityProvider;
pub use inputs::{PageCapabilities, UpdateRoleInput};
pub use repository::RoleRepository;
