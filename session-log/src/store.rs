//! Log store accessor: loads one recorded session from disk.
//!
//! Loading either yields a fully-decoded `SessionLog` or a typed error;
//! a malformed file never produces a partially-decoded session.

use std::path::Path;

use crate::SessionLog;

#[derive(Debug, thiserror::Error)]
pub enum LogError {
    /// Log file could not be read
    #[error("failed to read log file: {0}")]
    Io(#[from] std::io::Error),

    /// Log content did not decode to a valid session
    #[error("invalid log content: {0}")]
    Parse(String),
}

/// Load and validate a recorded session log.
pub fn load_session(path: impl AsRef<Path>) -> Result<SessionLog, LogError> {
    let raw = std::fs::read_to_string(path)?;
    let session: SessionLog =
        serde_json::from_str(&raw).map_err(|e| LogError::Parse(e.to_string()))?;

    // A step's recorded id must match its position; a mismatch means the
    // file was truncated or hand-edited.
    for (position, step) in session.log.iter().enumerate() {
        if step.step_id != position {
            return Err(LogError::Parse(format!(
                "step_id {} recorded at position {}",
                step.step_id, position
            )));
        }
    }

    Ok(session)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_log(content: &str) -> (tempfile::TempDir, std::path::PathBuf) {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("session.json");
        let mut file = std::fs::File::create(&path).expect("create log");
        file.write_all(content.as_bytes()).expect("write log");
        (dir, path)
    }

    #[test]
    fn test_load_valid_session() {
        let (_dir, path) = write_log(
            r#"{
                "problem": "fix off-by-one",
                "config": {"max_steps": 10},
                "uuid": "abc-123",
                "success": true,
                "log": [
                    {"step_id": 0, "obs": "obs0", "action": null},
                    {"step_id": 1, "obs": "obs1", "action": "view main.py"}
                ]
            }"#,
        );

        let session = load_session(&path).unwrap();
        assert_eq!(session.problem, "fix off-by-one");
        assert_eq!(session.uuid, "abc-123");
        assert!(session.success);
        assert_eq!(session.total_steps(), 2);
    }

    #[test]
    fn test_missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().expect("temp dir");
        let err = load_session(dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, LogError::Io(_)));
    }

    #[test]
    fn test_malformed_json_is_a_parse_error() {
        let (_dir, path) = write_log("{ not json");
        let err = load_session(&path).unwrap_err();
        assert!(matches!(err, LogError::Parse(_)));
    }

    #[test]
    fn test_missing_field_is_a_parse_error() {
        let (_dir, path) = write_log(r#"{"problem": "p", "uuid": "u", "success": false}"#);
        let err = load_session(&path).unwrap_err();
        assert!(matches!(err, LogError::Parse(_)));
    }

    #[test]
    fn test_step_id_position_mismatch_is_rejected() {
        let (_dir, path) = write_log(
            r#"{
                "problem": "p",
                "config": {},
                "uuid": "u",
                "success": false,
                "log": [
                    {"step_id": 0, "obs": "obs0"},
                    {"step_id": 3, "obs": "obs3"}
                ]
            }"#,
        );

        let err = load_session(&path).unwrap_err();
        match err {
            LogError::Parse(msg) => assert!(msg.contains("step_id 3")),
            other => panic!("expected parse error, got {other:?}"),
        }
    }
}
