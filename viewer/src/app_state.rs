//! Process-wide state: the one "currently loaded session" slot.

use std::sync::Arc;

use session_log::SessionLog;
use tokio::sync::RwLock;

/// Shared handle to the session slot.
///
/// The slot is a single global, not per-HTTP-session: the viewer is a
/// single-user local tool, and loading a new log file fully replaces the
/// previous session and its derived step count.
#[derive(Clone, Default)]
pub struct AppState {
    inner: Arc<RwLock<Option<Arc<SessionLog>>>>,
}

impl AppState {
    /// Empty slot; the page renders a file-selection prompt until a log
    /// is loaded.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_session(session: SessionLog) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Some(Arc::new(session)))),
        }
    }

    /// Clone the current session out of the lock, so handlers never hold
    /// it across a render.
    pub async fn session(&self) -> Option<Arc<SessionLog>> {
        self.inner.read().await.clone()
    }

    pub async fn replace_session(&self, session: SessionLog) {
        *self.inner.write().await = Some(Arc::new(session));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn session(problem: &str, steps: usize) -> SessionLog {
        serde_json::from_value(json!({
            "problem": problem,
            "config": {},
            "uuid": "test-uuid",
            "success": false,
            "log": (0..steps)
                .map(|i| json!({"step_id": i, "obs": format!("obs{i}")}))
                .collect::<Vec<_>>(),
        }))
        .expect("test session")
    }

    #[tokio::test]
    async fn test_empty_slot_returns_none() {
        let state = AppState::new();
        assert!(state.session().await.is_none());
    }

    #[tokio::test]
    async fn test_replace_supersedes_previous_session() {
        let state = AppState::with_session(session("first", 2));
        assert_eq!(state.session().await.unwrap().total_steps(), 2);

        state.replace_session(session("second", 5)).await;
        let current = state.session().await.unwrap();
        assert_eq!(current.problem, "second");
        assert_eq!(current.total_steps(), 5);
    }
}
