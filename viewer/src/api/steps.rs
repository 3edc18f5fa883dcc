//! Step-data endpoint backing the details panel.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;
use serde_json::json;

use session_log::{PromptResponsePair, StepRecord};

use crate::app_state::AppState;

/// Step fields served to the details panel.
///
/// Absent optionals serialize as explicit `null`, never by omission, so
/// the client renders a fixed label for every section.
#[derive(Debug, Serialize)]
pub struct StepResponse {
    pub step_id: usize,
    pub action: Option<String>,
    pub obs: String,
    pub rewrite_consumed: Option<String>,
    pub prompt_response_pairs: Option<Vec<PromptResponsePair>>,
    pub token_usage: Option<u64>,
}

impl From<&StepRecord> for StepResponse {
    fn from(step: &StepRecord) -> Self {
        Self {
            step_id: step.step_id,
            action: step.action.clone(),
            obs: step.obs.clone(),
            rewrite_consumed: step.rewrite_consumed.clone(),
            prompt_response_pairs: step.prompt_response_pairs.clone(),
            token_usage: step.token_usage,
        }
    }
}

/// `GET /get_step/{step_id}`
///
/// An out-of-range index gets a structured 404, never a partial or
/// default record; the client keeps its current panel on that answer.
pub async fn get_step(
    State(state): State<AppState>,
    Path(step_id): Path<usize>,
) -> impl IntoResponse {
    let Some(session) = state.session().await else {
        return (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": "no log loaded" })),
        )
            .into_response();
    };

    match session.step(step_id) {
        Some(step) => (StatusCode::OK, Json(StepResponse::from(step))).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": "step not found" })),
        )
            .into_response(),
    }
}
