//! Load/replace endpoint for the session slot.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::app_state::AppState;

#[derive(Debug, Deserialize)]
pub struct LoadLogRequest {
    /// Path of a recorded session log on the local filesystem
    pub path: String,
}

#[derive(Debug, Serialize)]
pub struct LoadLogResponse {
    pub success: bool,
    pub problem: String,
    pub uuid: String,
    pub total_steps: usize,
}

/// `POST /load`
///
/// Loads a new log file, fully replacing the previous session. A file
/// that fails to load leaves the previous session in place.
pub async fn load_log(
    State(state): State<AppState>,
    Json(request): Json<LoadLogRequest>,
) -> impl IntoResponse {
    match session_log::load_session(&request.path) {
        Ok(loaded) => {
            let response = LoadLogResponse {
                success: true,
                problem: loaded.problem.clone(),
                uuid: loaded.uuid.clone(),
                total_steps: loaded.total_steps(),
            };
            state.replace_session(loaded).await;
            tracing::info!(
                path = %request.path,
                total_steps = response.total_steps,
                "session log loaded"
            );
            (StatusCode::OK, Json(json!(response))).into_response()
        }
        Err(err) => {
            tracing::warn!(path = %request.path, error = %err, "rejected session log");
            (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": err.to_string() })),
            )
                .into_response()
        }
    }
}
