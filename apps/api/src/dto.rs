mod access;
mod audit;
mod common;
mod roles;

pub use access::{NavigationResponse, PageAccessResponse};
pub use audit::{AuditLogEntryResponse, AuditLogQueryParams};
pub use common::HealthResponse;
pub use roles::{
    CreateRoleRequest, PermissionRecordDto, ReplacePermissionsRequest, RoleResponse,
    SetPermissionRequest, UpdateRoleRequest,
};
