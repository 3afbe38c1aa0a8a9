use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use adminhub_application::{
    AuditEvent, AuditLogEntry, AuditLogQuery, AuditLogRepository, AuditRepository,
};
use adminhub_core::AppResult;

/// In-memory append-only audit log.
#[derive(Debug, Default)]
pub struct InMemoryAuditRepository {
    entries: RwLock<Vec<AuditLogEntry>>,
}

impl InMemoryAuditRepository {
    /// Creates an empty audit log.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(Vec::new()),
        }
    }
}

#[async_trait]
impl AuditRepository for InMemoryAuditRepository {
    async fn append_event(&self, event: AuditEvent) -> AppResult<()> {
        let entry = AuditLogEntry {
            event_id: Uuid::new_v4().to_string(),
            subject: event.subject,
            action: event.action.as_str().to_owned(),
            resource_type: event.resource_type,
            resource_id: event.resource_id,
            detail: event.detail,
            created_at: Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string(),
        };

        self.entries.write().await.push(entry);
        Ok(())
    }
}

#[async_trait]
impl AuditLogRepository for InMemoryAuditRepository {
    async fn list_recent_entries(&self, query: AuditLogQuery) -> AppResult<Vec<AuditLogEntry>> {
        let entries = self.entries.read().await;
        let action = query.action.map(|action| action.as_str());
        let role_id = query.role_id.as_deref();

        Ok(entries
            .iter()
            .rev()
            .filter(|entry| action.is_none_or(|action| entry.action == action))
            .filter(|entry| role_id.is_none_or(|role_id| entry.resource_id == role_id))
            .skip(query.offset)
            .take(query.limit)
            .cloned()
            .collect())
    }
}
