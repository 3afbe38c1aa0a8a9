use std::str::FromStr;

use adminhub_core::AppError;
use serde::{Deserialize, Serialize};

/// Stable audit actions emitted by role administration use-cases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditAction {
    /// Emitted when a custom role is created.
    SecurityRoleCreated,
    /// Emitted when role metadata changes.
    SecurityRoleUpdated,
    /// Emitted when a custom role is deleted.
    SecurityRoleDeleted,
    /// Emitted when one page/action flag changes.
    SecurityRolePermissionChanged,
    /// Emitted when the whole permission matrix is replaced.
    SecurityRolePermissionsReplaced,
}

impl AuditAction {
    /// Returns a stable storage value for this action.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SecurityRoleCreated => "security.role.created",
            Self::SecurityRoleUpdated => "security.role.updated",
            Self::SecurityRoleDeleted => "security.role.deleted",
            Self::SecurityRolePermissionChanged => "security.role.permission_changed",
            Self::SecurityRolePermissionsReplaced => "security.role.permissions_replaced",
        }
    }
}

impl FromStr for AuditAction {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "security.role.created" => Ok(Self::SecurityRoleCreated),
            "security.role.updated" => Ok(Self::SecurityRoleUpdated),
            "security.role.deleted" => Ok(Self::SecurityRoleDeleted),
            "security.role.permission_changed" => Ok(Self::SecurityRolePermissionChanged),
            "security.role.permissions_replaced" => Ok(Self::SecurityRolePermissionsReplaced),
            _ => Err(AppError::Validation(format!(
                "unknown audit action value '{value}'"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::AuditAction;

    #[test]
    fn audit_action_roundtrip_storage_value() {
        let action = AuditAction::SecurityRolePermissionChanged;
        let restored = AuditAction::from_str(action.as_str());
        assert_eq!(restored.ok(), Some(action));
    }

    #[test]
    fn unknown_audit_action_is_rejected() {
        assert!(AuditAction::from_str("security.role.renamed").is_err());
    }
}
