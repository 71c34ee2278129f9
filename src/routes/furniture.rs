//! Furniture placement routes.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::services::furniture::{self, FurnitureError};
use crate::state::{AppState, FurnitureMap, FurnitureRecord};

#[derive(Deserialize)]
pub struct MoveBody {
    pub id: Option<String>,
    pub x: Option<f64>,
    pub y: Option<f64>,
}

#[derive(Deserialize)]
pub struct RotateBody {
    pub id: Option<String>,
    pub angle: Option<f64>,
}

#[derive(Deserialize)]
pub struct ColorBody {
    pub id: Option<String>,
    pub color: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct UpdateResponse {
    pub success: bool,
    pub state: FurnitureRecord,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

pub type ApiError = (StatusCode, Json<ErrorResponse>);

fn updated(record: FurnitureRecord) -> Json<UpdateResponse> {
    Json(UpdateResponse { success: true, state: record })
}

/// `POST /api/furniture/move` — set x and y.
pub async fn move_furniture(
    State(state): State<AppState>,
    body: Result<Json<MoveBody>, JsonRejection>,
) -> Result<Json<UpdateResponse>, ApiError> {
    let Json(body) = body.map_err(json_rejection_response)?;
    furniture::move_furniture(&state, body.id.as_deref(), body.x, body.y)
        .await
        .map(updated)
        .map_err(furniture_error_response)
}

/// `POST /api/furniture/rotate` — set angle.
pub async fn rotate_furniture(
    State(state): State<AppState>,
    body: Result<Json<RotateBody>, JsonRejection>,
) -> Result<Json<UpdateResponse>, ApiError> {
    let Json(body) = body.map_err(json_rejection_response)?;
    furniture::rotate_furniture(&state, body.id.as_deref(), body.angle)
        .await
        .map(updated)
        .map_err(furniture_error_response)
}

/// `POST /api/furniture/color` — set color.
pub async fn set_color(
    State(state): State<AppState>,
    body: Result<Json<ColorBody>, JsonRejection>,
) -> Result<Json<UpdateResponse>, ApiError> {
    let Json(body) = body.map_err(json_rejection_response)?;
    furniture::set_color(&state, body.id.as_deref(), body.color.as_deref())
        .await
        .map(updated)
        .map_err(furniture_error_response)
}

/// `GET /api/furniture` — every record keyed by id.
pub async fn list_furniture(State(state): State<AppState>) -> Json<FurnitureMap> {
    Json(furniture::list_furniture(&state).await)
}

/// `GET /api/furniture/:id` — one record.
pub async fn get_furniture(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<FurnitureRecord>, ApiError> {
    furniture::get_furniture(&state, &id)
        .await
        .map(Json)
        .map_err(furniture_error_response)
}

pub(crate) fn furniture_error_response(err: FurnitureError) -> ApiError {
    let status = if err.is_invalid_input() {
        StatusCode::BAD_REQUEST
    } else {
        StatusCode::NOT_FOUND
    };
    debug!(error = %err, %status, "furniture request rejected");
    (status, Json(ErrorResponse { error: err.to_string() }))
}

/// Axum rejects unreadable bodies (wrong content type, bad syntax, wrong
/// field types) before the service runs. Keep its status, answer in JSON.
pub(crate) fn json_rejection_response(rejection: JsonRejection) -> ApiError {
    let status = rejection.status();
    let error = rejection.body_text();
    debug!(%error, %status, "furniture request body rejected");
    (status, Json(ErrorResponse { error }))
}

#[cfg(test)]
#[path = "furniture_test.rs"]
mod tests;
