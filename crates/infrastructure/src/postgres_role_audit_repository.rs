use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use adminhub_application::{
    AuditEvent, AuditLogEntry, AuditLogQuery, AuditLogRepository, AuditRepository,
};
use adminhub_core::{AppError, AppResult};

#[cfg(test)]
mod tests;

/// PostgreSQL-backed role history.
///
/// One table serves both the append port used by role administration and the
/// read port behind the activity page.
#[derive(Clone)]
pub struct PostgresRoleAuditRepository {
    pool: PgPool,
}

impl PostgresRoleAuditRepository {
    /// Creates a repository with the provided connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct RoleAuditRow {
    event_id: Uuid,
    actor: String,
    action: String,
    resource_type: String,
    role_id: String,
    detail: Option<String>,
    recorded_at: DateTime<Utc>,
}

impl From<RoleAuditRow> for AuditLogEntry {
    fn from(row: RoleAuditRow) -> Self {
        Self {
            event_id: row.event_id.to_string(),
            subject: row.actor,
            action: row.action,
            resource_type: row.resource_type,
            resource_id: row.role_id,
            detail: row.detail,
            created_at: row.recorded_at.to_rfc3339_opts(SecondsFormat::Secs, true),
        }
    }
}

#[async_trait]
impl AuditRepository for PostgresRoleAuditRepository {
    async fn append_event(&self, event: AuditEvent) -> AppResult<()> {
        sqlx::query(
            r#"
            INSERT INTO role_audit_events
                (event_id, actor, action, resource_type, role_id, detail)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(event.subject.as_str())
        .bind(event.action.as_str())
        .bind(event.resource_type.as_str())
        .bind(event.resource_id.as_str())
        .bind(event.detail.as_deref())
        .execute(&self.pool)
        .await
        .map_err(|error| {
            AppError::Internal(format!(
                "failed to record '{}' for role '{}': {error}",
                event.action.as_str(),
                event.resource_id
            ))
        })?;

        Ok(())
    }
}

#[async_trait]
impl AuditLogRepository for PostgresRoleAuditRepository {
    async fn list_recent_entries(&self, query: AuditLogQuery) -> AppResult<Vec<AuditLogEntry>> {
        let AuditLogQuery {
            limit,
            offset,
            action,
            role_id,
        } = query.bounded();

        let rows = sqlx::query_as::<_, RoleAuditRow>(
            r#"
            SELECT event_id, actor, action, resource_type, role_id, detail, recorded_at
            FROM role_audit_events
            WHERE ($1::TEXT IS NULL OR action = $1)
              AND ($2::TEXT IS NULL OR role_id = $2)
            ORDER BY recorded_at DESC, sequence DESC
            LIMIT $3
            OFFSET $4
            "#,
        )
        .bind(action.map(|action| action.as_str()))
        .bind(role_id.as_deref())
        .bind(limit as i64)
        .bind(offset as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|error| AppError::Internal(format!("failed to read role history: {error}")))?;

        Ok(rows.into_iter().map(AuditLogEntry::from).collect())
    }
}
