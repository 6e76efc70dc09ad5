//! Frontend Models
//!
//! In-memory task, its persisted shape, and the row rendered for it.

use serde::{Deserialize, Serialize};

/// Session-scoped task identifier. Never persisted.
pub type TaskId = u32;

/// Trim the way browser input is trimmed: Unicode whitespace plus U+FEFF
pub fn trim_text(text: &str) -> &str {
    text.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
}

/// A single to-do entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub id: TaskId,
    /// Trimmed, non-empty label
    pub text: String,
    pub completed: bool,
}

impl Task {
    /// Create a new, not yet completed task
    pub fn new(id: TaskId, text: String) -> Self {
        Self {
            id,
            text,
            completed: false,
        }
    }
}

/// Task as stored in local storage: `{"text": ..., "completed": ...}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredTask {
    pub text: String,
    pub completed: bool,
}

impl From<&Task> for StoredTask {
    fn from(task: &Task) -> Self {
        Self {
            text: task.text.clone(),
            completed: task.completed,
        }
    }
}

/// Everything one rendered row needs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskRow {
    pub id: TaskId,
    pub text: String,
    pub completed: bool,
    /// DOM id shared by the checkbox and its labels
    pub input_id: String,
}

impl From<&Task> for TaskRow {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id,
            text: task.text.clone(),
            completed: task.completed,
            input_id: format!("todo-{}", task.id),
        }
    }
}
