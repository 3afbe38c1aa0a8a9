use std::str::FromStr;

use adminhub_application::{AuditLogEntry, AuditLogQuery};
use adminhub_core::AppError;
use adminhub_domain::AuditAction;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// API representation of one audit log entry.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../../packages/api-types/src/generated/audit-log-entry-response.ts"
)]
pub struct AuditLogEntryResponse {
    pub event_id: String,
    pub subject: String,
    pub action: String,
    pub resource_type: String,
    pub resource_id: String,
    pub detail: Option<String>,
    pub created_at: String,
}

impl From<AuditLogEntry> for AuditLogEntryResponse {
    fn from(value: AuditLogEntry) -> Self {
        Self {
            event_id: value.event_id,
            subject: value.subject,
            action: value.action,
            resource_type: value.resource_type,
            resource_id: value.resource_id,
            detail: value.detail,
            created_at: value.created_at,
        }
    }
}

/// Query string for audit log listing.
#[derive(Debug, Default, Deserialize)]
pub struct AuditLogQueryParams {
    pub limit: Option<usize>,
    pub offset: Option<usize>,
    pub action: Option<String>,
    pub role_id: Option<String>,
}

impl TryFrom<AuditLogQueryParams> for AuditLogQuery {
    type Error = AppError;

    fn try_from(value: AuditLogQueryParams) -> Result<Self, Self::Error> {
        let defaults = Self::default();
        let action = value
            .action
            .filter(|action| !action.trim().is_empty())
            .map(|action| AuditAction::from_str(action.trim()))
            .transpose()?;

        Ok(Self {
            limit: value.limit.unwrap_or(defaults.limit),
            offset: value.offset.unwrap_or(defaults.offset),
            action,
            role_id: value
                .role_id
                .map(|role_id| role_id.trim().to_owned())
                .filter(|role_id| !role_id.is_empty()),
        }
        .bounded())
    }
}
