use adminhub_domain::PageCatalog;
use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Method, Request, StatusCode};
use serde_json::{Value, json};
use tower::ServiceExt;

use crate::api_services::{RoleBackends, assemble_app_state};
use crate::middleware::{ROLE_HEADER, SUBJECT_HEADER, SUPERUSER_HEADER};

use super::build_router;

async fn test_router() -> Router {
    let Ok(state) =
        assemble_app_state(PageCatalog::standard(), RoleBackends::in_memory(), true).await
    else {
        panic!("failed to assemble in-memory state");
    };
    let Ok(router) = build_router(state, "http://localhost:3000") else {
        panic!("failed to build router");
    };
    router
}

fn request(method: Method, uri: &str, role: Option<&str>, body: Option<Value>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(role) = role {
        builder = builder
            .header(ROLE_HEADER, role)
            .header(SUBJECT_HEADER, "alice");
    }

    let body = match body {
        Some(value) => {
            builder = builder.header("content-type", "application/json");
            Body::from(value.to_string())
        }
        None => Body::empty(),
    };

    match builder.body(body) {
        Ok(request) => request,
        Err(error) => panic!("invalid test request: {error}"),
    }
}

async fn send(router: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let Ok(response) = router.clone().oneshot(request).await else {
        panic!("router failed to respond");
    };
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap_or_default();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

#[tokio::test]
async fn health_is_public() {
    let router = test_router().await;

    let (status, body) = send(&router, request(Method::GET, "/health", None, None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "ok" }));
}

#[tokio::test]
async fn navigation_lists_visible_pages_for_role() {
    let router = test_router().await;

    let (status, body) = send(
        &router,
        request(Method::GET, "/api/access/navigation", Some("Viewer"), None),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "pages": ["dashboard", "analytics", "reports", "products", "orders"] })
    );

    let (status, body) = send(
        &router,
        request(Method::GET, "/api/access/navigation", None, None),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "pages": [] }));
}

#[tokio::test]
async fn page_guard_returns_capabilities_or_forbidden() {
    let router = test_router().await;

    let (status, body) = send(
        &router,
        request(Method::GET, "/api/access/pages/content", Some("Editor"), None),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["can_view"], json!(true));
    assert_eq!(body["can_edit"], json!(true));
    assert_eq!(body["can_delete"], json!(false));

    let (status, _) = send(
        &router,
        request(Method::GET, "/api/access/pages/users", Some("Editor"), None),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn superuser_header_grants_every_page() {
    let router = test_router().await;
    let request = match Request::builder()
        .uri("/api/access/pages/security")
        .header(ROLE_HEADER, "Ghost")
        .header(SUPERUSER_HEADER, "true")
        .body(Body::empty())
    {
        Ok(request) => request,
        Err(error) => panic!("invalid test request: {error}"),
    };

    let (status, body) = send(&router, request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["can_delete"], json!(true));
}

#[tokio::test]
async fn role_routes_require_identity() {
    let router = test_router().await;

    let (status, _) = send(&router, request(Method::GET, "/api/roles", None, None)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn role_lifecycle_over_http() {
    let router = test_router().await;

    let (status, created) = send(
        &router,
        request(
            Method::POST,
            "/api/roles",
            Some("Admin"),
            Some(json!({ "name": "Support", "description": "Ticket desk" })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let role_id = created["role_id"].as_str().unwrap_or_default().to_owned();
    assert_eq!(created["permissions"].as_array().map(Vec::len), Some(21));

    let (status, updated) = send(
        &router,
        request(
            Method::PUT,
            &format!("/api/roles/{role_id}/permissions/support/view"),
            Some("Admin"),
            Some(json!({ "value": true })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let support = updated["permissions"]
        .as_array()
        .and_then(|records| records.iter().find(|record| record["page"] == "support"))
        .cloned()
        .unwrap_or(Value::Null);
    assert_eq!(support["view"], json!(true));

    let (status, navigation) = send(
        &router,
        request(Method::GET, "/api/access/navigation", Some("Support"), None),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(navigation, json!({ "pages": ["support"] }));

    let (status, _) = send(
        &router,
        request(
            Method::DELETE,
            &format!("/api/roles/{role_id}"),
            Some("Admin"),
            None,
        ),
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, audit) = send(
        &router,
        request(Method::GET, "/api/audit-log?limit=10", Some("Admin"), None),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(audit.as_array().map(Vec::len), Some(3));
    assert_eq!(audit[0]["action"], json!("security.role.deleted"));

    let (status, history) = send(
        &router,
        request(
            Method::GET,
            &format!("/api/audit-log?role_id={role_id}&action=security.role.permission_changed"),
            Some("Admin"),
            None,
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(history.as_array().map(Vec::len), Some(1));
    assert_eq!(history[0]["resource_id"], json!(role_id));
}

#[tokio::test]
async fn protected_roles_map_to_conflict() {
    let router = test_router().await;

    let (status, _) = send(
        &router,
        request(Method::DELETE, "/api/roles/super-admin", Some("Admin"), None),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, _) = send(
        &router,
        request(
            Method::PUT,
            "/api/roles/super-admin/permissions/users/view",
            Some("Admin"),
            Some(json!({ "value": false })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn invalid_inputs_map_to_bad_request_and_not_found() {
    let router = test_router().await;

    let (status, _) = send(
        &router,
        request(
            Method::PUT,
            "/api/roles/editor/permissions/users/approve",
            Some("Admin"),
            Some(json!({ "value": true })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(
        &router,
        request(
            Method::PUT,
            "/api/roles/editor/permissions",
            Some("Admin"),
            Some(json!({ "permissions": [] })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(
        &router,
        request(Method::GET, "/api/roles/ghost", Some("Admin"), None),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(
        &router,
        request(
            Method::GET,
            "/api/audit-log?action=security.role.renamed",
            Some("Admin"),
            None,
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn viewer_cannot_administer_roles() {
    let router = test_router().await;

    let (status, _) = send(
        &router,
        request(
            Method::PATCH,
            "/api/roles/viewer",
            Some("Viewer"),
            Some(json!({ "description": "changed" })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}
