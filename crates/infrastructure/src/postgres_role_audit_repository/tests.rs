use adminhub_application::{AuditEvent, AuditLogQuery, AuditLogRepository, AuditRepository};
use adminhub_domain::AuditAction;
use sqlx::PgPool;
use sqlx::migrate::Migrator;
use sqlx::postgres::PgPoolOptions;

use super::PostgresRoleAuditRepository;

static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

async fn test_pool() -> Option<PgPool> {
    let Ok(database_url) = std::env::var("DATABASE_URL") else {
        return None;
    };

    let pool = match PgPoolOptions::new()
        .max_connections(2)
        .connect(database_url.as_str())
        .await
    {
        Ok(pool) => pool,
        Err(error) => panic!("failed to connect to DATABASE_URL in test: {error}"),
    };

    if let Err(error) = MIGRATOR.run(&pool).await {
        panic!("failed to run migrations for postgres role history tests: {error}");
    }

    Some(pool)
}

fn role_event(role_id: &str, action: AuditAction) -> AuditEvent {
    AuditEvent {
        subject: "alice".to_owned(),
        action,
        resource_type: "rbac_role".to_owned(),
        resource_id: role_id.to_owned(),
        detail: Some(format!("{} test", action.as_str())),
    }
}

#[tokio::test]
async fn role_history_is_filtered_by_action_and_role() {
    let Some(pool) = test_pool().await else {
        return;
    };

    let repository = PostgresRoleAuditRepository::new(pool);
    let role_id = uuid::Uuid::new_v4().to_string();
    let other_role_id = uuid::Uuid::new_v4().to_string();

    for event in [
        role_event(role_id.as_str(), AuditAction::SecurityRoleCreated),
        role_event(role_id.as_str(), AuditAction::SecurityRolePermissionChanged),
        role_event(other_role_id.as_str(), AuditAction::SecurityRolePermissionChanged),
    ] {
        assert!(repository.append_event(event).await.is_ok());
    }

    let history = repository
        .list_recent_entries(AuditLogQuery {
            role_id: Some(role_id.clone()),
            ..AuditLogQuery::default()
        })
        .await
        .unwrap_or_default();
    let actions: Vec<&str> = history.iter().map(|entry| entry.action.as_str()).collect();
    assert_eq!(
        actions,
        vec!["security.role.permission_changed", "security.role.created"]
    );
    assert!(history.iter().all(|entry| entry.subject == "alice"));
    assert!(history.iter().all(|entry| entry.created_at.ends_with('Z')));

    let changes = repository
        .list_recent_entries(AuditLogQuery {
            action: Some(AuditAction::SecurityRolePermissionChanged),
            role_id: Some(other_role_id.clone()),
            ..AuditLogQuery::default()
        })
        .await
        .unwrap_or_default();
    assert_eq!(changes.len(), 1);
    assert_eq!(changes[0].resource_id, other_role_id);
}

#[tokio::test]
async fn paging_is_bounded_before_querying() {
    let Some(pool) = test_pool().await else {
        return;
    };

    let repository = PostgresRoleAuditRepository::new(pool);
    let role_id = uuid::Uuid::new_v4().to_string();
    assert!(
        repository
            .append_event(role_event(role_id.as_str(), AuditAction::SecurityRoleCreated))
            .await
            .is_ok()
    );

    let page = repository
        .list_recent_entries(AuditLogQuery {
            limit: 0,
            role_id: Some(role_id),
            ..AuditLogQuery::default()
        })
        .await;
    assert_eq!(page.map(|entries| entries.len()).ok(), Some(1));
}
