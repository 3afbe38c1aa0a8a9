use adminhub_application::IdentityProvider;
use axum::Json;
use axum::extract::{Extension, Path, State};

use crate::dto::{NavigationResponse, PageAccessResponse};
use crate::error::ApiResult;
use crate::middleware::RequestIdentity;
use crate::state::AppState;

pub async fn navigation_handler(
    State(state): State<AppState>,
    Extension(identity): Extension<RequestIdentity>,
) -> Json<NavigationResponse> {
    let identity = identity.current_identity();
    let pages = state
        .authorization_service
        .visible_pages(identity.as_ref())
        .await;

    Json(NavigationResponse { pages })
}

pub async fn page_access_handler(
    State(state): State<AppState>,
    Extension(identity): Extension<RequestIdentity>,
    Path(page): Path<String>,
) -> ApiResult<Json<PageAccessResponse>> {
    let identity = identity.current_identity();
    state
        .authorization_service
        .require_page(identity.as_ref(), page.as_str())
        .await?;

    let capabilities = state
        .authorization_service
        .page_capabilities(identity.as_ref(), page.as_str())
        .await;

    Ok(Json(PageAccessResponse::new(page, capabilities)))
}
