//! Storage Payload
//!
//! JSON encoding of the task list. The payload is an array of
//! `{text, completed}` objects in list order; ids stay in memory.

use serde_json::Value;

use crate::models::{trim_text, StoredTask, Task};

#[derive(Debug, thiserror::Error)]
pub enum PayloadError {
    #[error("payload is not valid JSON: {0}")]
    NotJson(#[source] serde_json::Error),
    #[error("payload is not a JSON array")]
    NotArray,
    #[error("failed to encode tasks: {0}")]
    Encode(#[source] serde_json::Error),
}

/// Validated payload contents
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Decoded {
    pub tasks: Vec<StoredTask>,
    /// Entries that did not match the task shape
    pub dropped: usize,
}

pub fn encode(tasks: &[Task]) -> Result<String, PayloadError> {
    let stored: Vec<StoredTask> = tasks.iter().map(StoredTask::from).collect();
    serde_json::to_string(&stored).map_err(PayloadError::Encode)
}

/// Parse a stored payload, keeping only well-formed entries.
///
/// An entry survives when `text` is a string that is not blank and
/// `completed` is a boolean. Text is trimmed on the way in.
pub fn decode(raw: &str) -> Result<Decoded, PayloadError> {
    let value: Value = serde_json::from_str(raw).map_err(PayloadError::NotJson)?;
    let Value::Array(entries) = value else {
        return Err(PayloadError::NotArray);
    };

    let total = entries.len();
    let tasks: Vec<StoredTask> = entries
        .into_iter()
        .filter_map(|entry| serde_json::from_value::<StoredTask>(entry).ok())
        .filter_map(|task| {
            let text = trim_text(&task.text);
            (!text.is_empty()).then(|| StoredTask {
                text: text.to_string(),
                completed: task.completed,
            })
        })
        .collect();

    Ok(Decoded {
        dropped: total - tasks.len(),
        tasks,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stored(text: &str, completed: bool) -> StoredTask {
        StoredTask {
            text: text.to_string(),
            completed,
        }
    }

    #[test]
    fn test_encode_writes_text_and_completed_only() {
        let mut walk = Task::new(7, "Walk dog".to_string());
        walk.completed = true;
        let tasks = vec![Task::new(3, "Buy milk".to_string()), walk];

        let json = encode(&tasks).unwrap();
        assert_eq!(
            json,
            r#"[{"text":"Buy milk","completed":false},{"text":"Walk dog","completed":true}]"#
        );
    }

    #[test]
    fn test_encode_empty_list() {
        assert_eq!(encode(&[]).unwrap(), "[]");
    }

    #[test]
    fn test_decode_keeps_order() {
        let decoded = decode(r#"[{"text":"a","completed":true},{"text":"b","completed":false}]"#).unwrap();
        assert_eq!(decoded.tasks, vec![stored("a", true), stored("b", false)]);
        assert_eq!(decoded.dropped, 0);
    }

    #[test]
    fn test_decode_drops_invalid_entries() {
        let raw = r#"[
            {"text":"ok","completed":false},
            {"text":42,"completed":false},
            {"text":"no flag"},
            {"text":"bad flag","completed":"yes"},
            {"text":"   ","completed":true},
            "loose string",
            null
        ]"#;
        let decoded = decode(raw).unwrap();
        assert_eq!(decoded.tasks, vec![stored("ok", false)]);
        assert_eq!(decoded.dropped, 6);
    }

    #[test]
    fn test_decode_trims_and_ignores_extra_fields() {
        let decoded = decode(r#"[{"text":"  Read  ","completed":false,"id":9,"tags":[]}]"#).unwrap();
        assert_eq!(decoded.tasks, vec![stored("Read", false)]);
    }

    #[test]
    fn test_decode_drops_bom_only_text() {
        let raw = "[{\"text\":\"\u{FEFF}\",\"completed\":false},{\"text\":\"\u{FEFF}Call mom \",\"completed\":true}]";
        let decoded = decode(raw).unwrap();
        assert_eq!(decoded.tasks, vec![stored("Call mom", true)]);
        assert_eq!(decoded.dropped, 1);
    }

    #[test]
    fn test_decode_rejects_non_array() {
        assert!(matches!(decode(r#"{"text":"a","completed":false}"#), Err(PayloadError::NotArray)));
        assert!(matches!(decode("null"), Err(PayloadError::NotArray)));
    }

    #[test]
    fn test_decode_rejects_invalid_json() {
        assert!(matches!(decode("[{"), Err(PayloadError::NotJson(_))));
        assert!(matches!(decode(""), Err(PayloadError::NotJson(_))));
    }
}
