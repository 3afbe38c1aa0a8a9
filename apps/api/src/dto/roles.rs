use adminhub_application::UpdateRoleInput;
use adminhub_domain::{PermissionRecord, Role};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Per-page grant of the four actions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(
    export,
    export_to = "../../../../packages/api-types/src/generated/permission-record.ts"
)]
pub struct PermissionRecordDto {
    pub page: String,
    pub view: bool,
    pub edit: bool,
    pub create: bool,
    pub delete: bool,
}

impl From<&PermissionRecord> for PermissionRecordDto {
    fn from(value: &PermissionRecord) -> Self {
        Self {
            page: value.page.clone(),
            view: value.view,
            edit: value.edit,
            create: value.create,
            delete: value.delete,
        }
    }
}

impl From<PermissionRecordDto> for PermissionRecord {
    fn from(value: PermissionRecordDto) -> Self {
        Self {
            page: value.page,
            view: value.view,
            edit: value.edit,
            create: value.create,
            delete: value.delete,
        }
    }
}

/// API representation of a role and its permission matrix.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../../packages/api-types/src/generated/role-response.ts"
)]
pub struct RoleResponse {
    pub role_id: String,
    pub name: String,
    pub description: String,
    pub permissions: Vec<PermissionRecordDto>,
    pub is_system: bool,
    pub is_super: bool,
    pub user_count: u32,
    pub created_at: String,
}

impl From<Role> for RoleResponse {
    fn from(value: Role) -> Self {
        Self {
            role_id: value.id().to_string(),
            name: value.name().to_owned(),
            description: value.description().to_owned(),
            permissions: value
                .permissions()
                .iter()
                .map(PermissionRecordDto::from)
                .collect(),
            is_system: value.is_system(),
            is_super: value.is_super(),
            user_count: value.user_count(),
            created_at: value.created_at().to_rfc3339(),
        }
    }
}

/// Incoming payload for custom role creation.
#[derive(Debug, Deserialize, TS)]
#[ts(
    export,
    export_to = "../../../../packages/api-types/src/generated/create-role-request.ts"
)]
pub struct CreateRoleRequest {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

/// Incoming payload for partial role updates.
#[derive(Debug, Default, Deserialize, TS)]
#[ts(
    export,
    export_to = "../../../../packages/api-types/src/generated/update-role-request.ts"
)]
pub struct UpdateRoleRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub user_count: Option<u32>,
}

impl From<UpdateRoleRequest> for UpdateRoleInput {
    fn from(value: UpdateRoleRequest) -> Self {
        Self {
            name: value.name,
            description: value.description,
            user_count: value.user_count,
        }
    }
}

/// Incoming payload replacing a whole permission matrix.
#[derive(Debug, Deserialize, TS)]
#[ts(
    export,
    export_to = "../../../../packages/api-types/src/generated/replace-permissions-request.ts"
)]
pub struct ReplacePermissionsRequest {
    pub permissions: Vec<PermissionRecordDto>,
}

/// Incoming payload toggling one action flag.
#[derive(Debug, Deserialize, TS)]
#[ts(
    export,
    export_to = "../../../../packages/api-types/src/generated/set-permission-request.ts"
)]
pub struct SetPermissionRequest {
    pub value: bool,
}
