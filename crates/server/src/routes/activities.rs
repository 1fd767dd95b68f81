use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use common::types::StatusReply;
use service::activity::domain::{Activity, ActivityInput};
use tracing::info;

use crate::{errors::ApiError, state::AppState};

fn parse_id(raw: &str) -> Result<i32, ApiError> {
    raw.parse::<i32>()
        .map_err(|_| ApiError::bad_request(format!("invalid activity id `{raw}`")))
}

#[utoipa::path(
    get, path = "/activities", tag = "activities",
    responses(
        (status = 201, description = "All activities (legacy status code)", body = [crate::openapi::ActivityDoc]),
        (status = 200, description = "All activities", body = [crate::openapi::ActivityDoc]),
        (status = 500, description = "Query Failed", body = crate::openapi::MessageDoc)
    )
)]
pub async fn list(State(state): State<AppState>) -> Result<(StatusCode, Json<Vec<Activity>>), ApiError> {
    let rows = state
        .activities
        .list()
        .await
        .map_err(|e| ApiError::from_service(e, state.legacy_status_codes))?;
    info!(count = rows.len(), "list activities");
    let status = if state.legacy_status_codes { StatusCode::CREATED } else { StatusCode::OK };
    Ok((status, Json(rows)))
}

#[utoipa::path(
    post, path = "/activities", tag = "activities",
    request_body = crate::openapi::ActivityInputDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::StatusDoc),
        (status = 400, description = "Malformed or invalid payload", body = crate::openapi::MessageDoc),
        (status = 500, description = "Insert Failed", body = crate::openapi::MessageDoc)
    )
)]
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<ActivityInput>, JsonRejection>,
) -> Result<(StatusCode, Json<StatusReply>), ApiError> {
    let Json(input) = payload?;
    let created = state
        .activities
        .create(input)
        .await
        .map_err(|e| ApiError::from_service(e, state.legacy_status_codes))?;
    Ok((StatusCode::CREATED, Json(StatusReply::success_with_id(created.id))))
}

#[utoipa::path(
    put, path = "/activities/{id}", tag = "activities",
    params(("id" = i32, Path, description = "Activity ID")),
    request_body = crate::openapi::ActivityInputDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::StatusDoc),
        (status = 400, description = "Malformed or invalid payload", body = crate::openapi::MessageDoc),
        (status = 404, description = "Not Found (legacy mode answers 500)", body = crate::openapi::MessageDoc),
        (status = 500, description = "Update Failed", body = crate::openapi::MessageDoc)
    )
)]
pub async fn update(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    payload: Result<Json<ActivityInput>, JsonRejection>,
) -> Result<Json<StatusReply>, ApiError> {
    let id = parse_id(&raw_id)?;
    let Json(input) = payload?;
    let id = state
        .activities
        .update(id, input)
        .await
        .map_err(|e| ApiError::from_service(e, state.legacy_status_codes))?;
    Ok(Json(StatusReply::success_with_id(id)))
}

#[utoipa::path(
    delete, path = "/activities/{id}", tag = "activities",
    params(("id" = i32, Path, description = "Activity ID")),
    responses(
        (status = 200, description = "Deleted, or nothing to delete", body = crate::openapi::StatusDoc),
        (status = 400, description = "Invalid id", body = crate::openapi::MessageDoc),
        (status = 500, description = "Delete Failed", body = crate::openapi::MessageDoc)
    )
)]
pub async fn delete(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<StatusReply>, ApiError> {
    let id = parse_id(&raw_id)?;
    state
        .activities
        .delete(id)
        .await
        .map_err(|e| ApiError::from_service(e, state.legacy_status_codes))?;
    Ok(Json(StatusReply::success()))
}
