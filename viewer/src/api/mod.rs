//! HTTP API routes for the session viewer.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::json;

pub mod page;
pub mod session;
pub mod steps;

use crate::app_state::AppState;

/// Configure all routes.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(page::index))
        .route("/get_step/{step_id}", get(steps::get_step))
        .route("/load", post(session::load_log))
        .route("/health", get(health_check))
}

/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(json!({
            "status": "healthy",
            "service": "viewer",
            "version": env!("CARGO_PKG_VERSION")
        })),
    )
}
