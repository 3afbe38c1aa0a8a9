use async_trait::async_trait;

use adminhub_core::AppResult;
use adminhub_domain::AuditAction;

/// Immutable audit event payload emitted by application services.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditEvent {
    /// Subject that performed the action.
    pub subject: String,
    /// Stable audit action identifier.
    pub action: AuditAction,
    /// Resource type label.
    pub resource_type: String,
    /// Resource identifier.
    pub resource_id: String,
    /// Optional audit detail payload.
    pub detail: Option<String>,
}

/// Port for persisting append-only audit events.
#[async_trait]
pub trait AuditRepository: Send + Sync {
    /// Persists one audit event.
    async fn append_event(&self, event: AuditEvent) -> AppResult<()>;
}

/// Audit log entry projection for administrative views.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditLogEntry {
    /// Stable event identifier.
    pub event_id: String,
    /// Actor subject.
    pub subject: String,
    /// Stable action identifier.
    pub action: String,
    /// Event resource type.
    pub resource_type: String,
    /// Event resource identifier.
    pub resource_id: String,
    /// Optional event detail.
    pub detail: Option<String>,
    /// Event timestamp in RFC3339.
    pub created_at: String,
}

/// Query parameters for audit log listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditLogQuery {
    /// Maximum rows returned.
    pub limit: usize,
    /// Number of rows skipped for offset pagination.
    pub offset: usize,
    /// Optional action filter.
    pub action: Option<AuditAction>,
    /// Optional filter narrowing the log to one role's history.
    pub role_id: Option<String>,
}

/// Largest page size served by audit log listing.
pub const MAX_AUDIT_LOG_LIMIT: usize = 200;

/// Deepest offset served by audit log listing.
pub const MAX_AUDIT_LOG_OFFSET: usize = 5_000;

impl AuditLogQuery {
    /// Clamps paging into the range every audit log backend serves.
    #[must_use]
    pub fn bounded(self) -> Self {
        Self {
            limit: self.limit.clamp(1, MAX_AUDIT_LOG_LIMIT),
            offset: self.offset.min(MAX_AUDIT_LOG_OFFSET),
            ..self
        }
    }
}

impl Default for AuditLogQuery {
    fn default() -> Self {
        Self {
            limit: 50,
            offset: 0,
            action: None,
            role_id: None,
        }
    }
}

/// Repository port for reading audit logs.
#[async_trait]
pub trait AuditLogRepository: Send + Sync {
    /// Lists audit entries, newest first.
    async fn list_recent_entries(&self, query: AuditLogQuery) -> AppResult<Vec<AuditLogEntry>>;
}
