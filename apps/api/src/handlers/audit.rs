use axum::Json;
use axum::extract::{Extension, Query, State};

use adminhub_application::AuditLogQuery;

use crate::dto::{AuditLogEntryResponse, AuditLogQueryParams};
use crate::error::ApiResult;
use crate::middleware::RequestIdentity;
use crate::state::AppState;

pub async fn list_audit_log_handler(
    State(state): State<AppState>,
    Extension(identity): Extension<RequestIdentity>,
    Query(params): Query<AuditLogQueryParams>,
) -> ApiResult<Json<Vec<AuditLogEntryResponse>>> {
    let query = AuditLogQuery::try_from(params)?;

    let entries = state
        .role_admin_service
        .list_audit_log(identity.require()?, query)
        .await?
        .into_iter()
        .map(AuditLogEntryResponse::from)
        .collect();

    Ok(Json(entries))
}
