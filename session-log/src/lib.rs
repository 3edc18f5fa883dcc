//! Shared types for recorded debugging-agent sessions
//!
//! One `SessionLog` is one complete recorded run: metadata (problem, run
//! identifier, success flag, configuration) plus an ordered sequence of
//! step records. Everything here is read-only after load; the viewer never
//! mutates a session.
//!
//! Serializable with serde for JSON over HTTP.

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};

pub mod cursor;
pub mod store;

pub use cursor::StepCursor;
pub use store::{load_session, LogError};

// ============================================================================
// Session
// ============================================================================

/// One complete recorded run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionLog {
    /// Problem statement the agent was asked to solve
    pub problem: String,

    /// Run configuration, rendered verbatim by the viewer
    pub config: serde_json::Value,

    /// Opaque run identifier assigned by the recorder
    pub uuid: String,

    /// Whether the environment marked the run as solved
    pub success: bool,

    /// Ordered step records; a step's position is its index
    pub log: Vec<StepRecord>,
}

impl SessionLog {
    pub fn total_steps(&self) -> usize {
        self.log.len()
    }

    /// Step at `index`, or `None` when the index is out of range.
    pub fn step(&self, index: usize) -> Option<&StepRecord> {
        self.log.get(index)
    }
}

// ============================================================================
// Steps
// ============================================================================

/// One recorded unit of agent activity: an action, the resulting
/// observation, and whatever the recorder captured alongside them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StepRecord {
    /// Zero-based position within the session
    pub step_id: usize,

    /// Action the agent took; `None` on the initial observation step
    #[serde(default)]
    pub action: Option<String>,

    /// Environment observation recorded for this step
    pub obs: String,

    /// Rewrite text consumed when the step applied a code edit
    #[serde(default)]
    pub rewrite_consumed: Option<String>,

    /// Model exchanges recorded for this step, in order
    #[serde(default, deserialize_with = "de_prompt_response_pairs")]
    pub prompt_response_pairs: Option<Vec<PromptResponsePair>>,

    /// Token count reported by the model backend, when known
    #[serde(default)]
    pub token_usage: Option<u64>,
}

/// One exchange sent to and received from a model, stored verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptResponsePair {
    pub prompt: String,
    pub response: String,
}

/// Recorders serialize exchanges either as an ordered list of pair objects
/// or as a flat indexed map (`prompt_0`, `response_0`, `prompt_1`, ...).
/// Both shapes normalize to the ordered list.
fn de_prompt_response_pairs<'de, D>(
    deserializer: D,
) -> Result<Option<Vec<PromptResponsePair>>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Wire {
        List(Vec<PromptResponsePair>),
        Flat(serde_json::Map<String, serde_json::Value>),
    }

    match Option::<Wire>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Wire::List(pairs)) => Ok(Some(pairs)),
        Some(Wire::Flat(map)) => {
            let mut pairs = Vec::new();
            for idx in 0usize.. {
                let prompt = map.get(&format!("prompt_{idx}"));
                let response = map.get(&format!("response_{idx}"));
                match (prompt, response) {
                    (None, None) => break,
                    (Some(prompt), Some(response)) => {
                        let prompt = prompt.as_str().ok_or_else(|| {
                            de::Error::custom(format!("prompt_{idx} is not a string"))
                        })?;
                        let response = response.as_str().ok_or_else(|| {
                            de::Error::custom(format!("response_{idx} is not a string"))
                        })?;
                        pairs.push(PromptResponsePair {
                            prompt: prompt.to_string(),
                            response: response.to_string(),
                        });
                    }
                    _ => {
                        return Err(de::Error::custom(format!(
                            "unpaired prompt/response entry at index {idx}"
                        )))
                    }
                }
            }
            Ok(Some(pairs))
        }
    }
}
