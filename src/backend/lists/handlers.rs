//! List HTTP Handlers
//!
//! Thin adapters between Axum extractors and the operations in `service`.
//! Bodies and path ids go through `JsonBody` / `PathParam`, so extraction
//! failures come back as 400 JSON errors.

use axum::{extract::State, http::StatusCode, Json};

use super::service;
use crate::backend::error::BackendError;
use crate::backend::middleware::{AuthUser, JsonBody, PathParam};
use crate::backend::server::state::AppState;
use crate::shared::lists::{LikeRequest, ListWithElements, ListWriteRequest, ListWriteResponse, ToggleLikeResponse};

/// `POST /api/lists`
pub async fn create_list(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    JsonBody(request): JsonBody<ListWriteRequest>,
) -> Result<(StatusCode, Json<ListWriteResponse>), BackendError> {
    let created = service::create_list_with_elements(state.store.as_ref(), &user, request).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// `GET /api/lists/{list_id}`, no authentication
pub async fn get_list(
    State(state): State<AppState>,
    PathParam(list_id): PathParam<i64>,
) -> Result<Json<ListWithElements>, BackendError> {
    service::get_list_with_elements(state.store.as_ref(), list_id).await.map(Json)
}

/// `PUT /api/lists/{list_id}`
pub async fn update_list(
    State(state): State<AppState>,
    PathParam(list_id): PathParam<i64>,
    AuthUser(user): AuthUser,
    JsonBody(request): JsonBody<ListWriteRequest>,
) -> Result<Json<ListWriteResponse>, BackendError> {
    service::update_list(state.store.as_ref(), &user, list_id, request).await.map(Json)
}

/// `DELETE /api/lists/{list_id}`
pub async fn delete_list(
    State(state): State<AppState>,
    PathParam(list_id): PathParam<i64>,
    AuthUser(user): AuthUser,
) -> Result<StatusCode, BackendError> {
    service::delete_list(state.store.as_ref(), &user, list_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// `POST /api/lists/{list_id}/like`
pub async fn toggle_like(
    State(state): State<AppState>,
    PathParam(list_id): PathParam<i64>,
    AuthUser(user): AuthUser,
) -> Result<Json<ToggleLikeResponse>, BackendError> {
    service::toggle_like(state.store.as_ref(), &user, list_id).await.map(Json)
}

/// `POST /api/lists/like` with `{"list_id": n}` or `{"list": {"id": n}}`
pub async fn toggle_like_by_body(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    JsonBody(request): JsonBody<LikeRequest>,
) -> Result<Json<ToggleLikeResponse>, BackendError> {
    let list_id = request
        .target()
        .ok_or_else(|| BackendError::bad_request("list_id is required"))?;
    service::toggle_like(state.store.as_ref(), &user, list_id).await.map(Json)
}

/// Any method other than POST on a like route
pub async fn invalid_like_method() -> BackendError {
    BackendError::bad_request("Invalid request")
}
