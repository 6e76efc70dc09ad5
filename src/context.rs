//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;
use log::{debug, error};
use web_storage::LocalStorage;

use crate::models::TaskId;
use crate::store::{StoreResult, TodoStore};

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct TodoContext {
    /// Task list and its storage binding
    pub todos: RwSignal<TodoStore<LocalStorage>>,
    /// Last storage failure shown to the user
    pub error: RwSignal<Option<String>>,
}

impl TodoContext {
    pub fn new(store: TodoStore<LocalStorage>) -> Self {
        Self {
            todos: RwSignal::new(store),
            error: RwSignal::new(None),
        }
    }

    /// Add a task from raw input.
    ///
    /// Returns true when a task was added and saved, i.e. the input can be cleared.
    pub fn add_task(&self, raw: &str) -> bool {
        let result = self.todos.try_update(|store| store.add_task(raw));
        matches!(self.settle("add task", result), Some(Some(_)))
    }

    /// Checkbox changed
    pub fn set_completed(&self, id: TaskId, completed: bool) {
        let result = self.todos.try_update(|store| store.set_completed(id, completed));
        self.settle("update task", result);
    }

    pub fn delete_task(&self, id: TaskId) {
        let result = self.todos.try_update(|store| store.delete_task(id));
        if let Some(removed) = self.settle("delete task", result) {
            debug!("removed {:?}", removed.text);
        }
    }

    /// Log a failure and show it in the banner
    pub fn report(&self, action: &str, message: impl std::fmt::Display) {
        error!("{} failed: {}", action, message);
        self.error.set(Some(format!("Could not {}: {}", action, message)));
    }

    pub fn dismiss_error(&self) {
        self.error.set(None);
    }

    /// Unwrap a store result, reporting errors. `None` when the op failed
    /// or the signal is already disposed.
    fn settle<T>(&self, action: &str, result: Option<StoreResult<T>>) -> Option<T> {
        match result? {
            Ok(value) => Some(value),
            Err(e) => {
                self.report(action, e);
                None
            }
        }
    }
}
