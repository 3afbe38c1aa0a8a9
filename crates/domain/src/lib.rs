//! Domain entities and invariants.

#![forbid(unsafe_code)]

mod catalog;
mod role;
mod security;
mod seed;

pub use catalog::{Action, PageCatalog, PermissionRecord, STANDARD_PAGES};
pub use role::{Role, RoleId, RoleInput};
pub use security::AuditAction;
pub use seed::{SUPER_ADMIN_ROLE_ID, standard_system_roles};
