use axum::Json;
use axum::extract::{Extension, Path, State};
use axum::http::StatusCode;

use adminhub_domain::{Action, PermissionRecord};

use crate::dto::{
    CreateRoleRequest, ReplacePermissionsRequest, RoleResponse, SetPermissionRequest,
    UpdateRoleRequest,
};
use crate::error::ApiResult;
use crate::middleware::RequestIdentity;
use crate::state::AppState;

pub async fn list_roles_handler(
    State(state): State<AppState>,
    Extension(identity): Extension<RequestIdentity>,
) -> ApiResult<Json<Vec<RoleResponse>>> {
    let roles = state
        .role_admin_service
        .list_roles(identity.require()?)
        .await?
        .into_iter()
        .map(RoleResponse::from)
        .collect();

    Ok(Json(roles))
}

pub async fn get_role_handler(
    State(state): State<AppState>,
    Extension(identity): Extension<RequestIdentity>,
    Path(role_id): Path<String>,
) -> ApiResult<Json<RoleResponse>> {
    let role = state
        .role_admin_service
        .find_role(identity.require()?, role_id.as_str())
        .await?;

    Ok(Json(RoleResponse::from(role)))
}

pub async fn create_role_handler(
    State(state): State<AppState>,
    Extension(identity): Extension<RequestIdentity>,
    Json(payload): Json<CreateRoleRequest>,
) -> ApiResult<(StatusCode, Json<RoleResponse>)> {
    let role = state
        .role_admin_service
        .create_role(
            identity.require()?,
            payload.name.as_str(),
            payload.description.as_str(),
        )
        .await?;

    Ok((StatusCode::CREATED, Json(RoleResponse::from(role))))
}

pub async fn update_role_handler(
    State(state): State<AppState>,
    Extension(identity): Extension<RequestIdentity>,
    Path(role_id): Path<String>,
    Json(payload): Json<UpdateRoleRequest>,
) -> ApiResult<Json<RoleResponse>> {
    let role = state
        .role_admin_service
        .update_role(identity.require()?, role_id.as_str(), payload.into())
        .await?;

    Ok(Json(RoleResponse::from(role)))
}

pub async fn delete_role_handler(
    State(state): State<AppState>,
    Extension(identity): Extension<RequestIdentity>,
    Path(role_id): Path<String>,
) -> ApiResult<StatusCode> {
    state
        .role_admin_service
        .delete_role(identity.require()?, role_id.as_str())
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

pub async fn replace_permissions_handler(
    State(state): State<AppState>,
    Extension(identity): Extension<RequestIdentity>,
    Path(role_id): Path<String>,
    Json(payload): Json<ReplacePermissionsRequest>,
) -> ApiResult<Json<RoleResponse>> {
    let records = payload
        .permissions
        .into_iter()
        .map(PermissionRecord::from)
        .collect();

    let role = state
        .role_admin_service
        .replace_permissions(identity.require()?, role_id.as_str(), records)
        .await?;

    Ok(Json(RoleResponse::from(role)))
}

pub async fn set_permission_handler(
    State(state): State<AppState>,
    Extension(identity): Extension<RequestIdentity>,
    Path((role_id, page, action)): Path<(String, String, String)>,
    Json(payload): Json<SetPermissionRequest>,
) -> ApiResult<Json<RoleResponse>> {
    let action = Action::from_transport(action.as_str())?;

    let role = state
        .role_admin_service
        .set_permission(
            identity.require()?,
            role_id.as_str(),
            page.as_str(),
            action,
            payload.value,
        )
        .await?;

    Ok(Json(RoleResponse::from(role)))
}
