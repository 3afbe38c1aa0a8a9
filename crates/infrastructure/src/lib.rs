//! Infrastructure adapters for application ports.

#![forbid(unsafe_code)]

mod in_memory_audit_repository;
mod in_memory_role_repository;
mod postgres_role_audit_repository;
mod postgres_role_repository;

pub use in_memory_audit_repository::InMemoryAuditRepository;
pub use in_memory_role_repository::InMemoryRoleRepository;
pub use postgres_role_audit_repository::PostgresRoleAuditRepository;
pub use postgres_role_repository::PostgresRoleRepository;
