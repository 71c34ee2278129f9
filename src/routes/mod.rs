//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Binds the furniture placement API and a health probe under a single Axum
//! router. Any origin may call the API; every request passes through the
//! HTTP trace layer.

pub mod furniture;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the application router around `state`.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/furniture", get(furniture::list_furniture))
        .route("/api/furniture/move", post(furniture::move_furniture))
        .route("/api/furniture/rotate", post(furniture::rotate_furniture))
        .route("/api/furniture/color", post(furniture::set_color))
        .route("/api/furniture/{id}", get(furniture::get_furniture))
        .route("/healthz", get(healthz))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
