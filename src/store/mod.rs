//! Todo Store
//!
//! Owns the task list and keeps it in sync with the storage collaborator.
//! Every mutation writes the whole list back before returning.

use log::{debug, info, warn};
use web_storage::{KeyValueStore, StorageError};

use crate::models::{trim_text, Task, TaskId, TaskRow};
use crate::payload::{self, PayloadError};


#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("task {0} not found")]
    NotFound(TaskId),
    #[error("index {index} out of range for {len} tasks")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("saved tasks under {key:?} could not be read; changes are not saved")]
    Unsynced { key: String },
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Payload(#[from] PayloadError),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Task list bound to a storage key
#[derive(Debug, Clone)]
pub struct TodoStore<S> {
    storage: S,
    key: String,
    tasks: Vec<Task>,
    next_id: TaskId,
    /// False when the stored list was never read; writing would clobber it
    writable: bool,
}

impl<S: KeyValueStore> TodoStore<S> {
    /// Empty list; nothing is read or written
    pub fn empty(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
            tasks: Vec::new(),
            next_id: 1,
            writable: true,
        }
    }

    /// Empty list that never writes, for when the stored list could not be read.
    ///
    /// Edits stay in memory and every persist fails with `StoreError::Unsynced`.
    pub fn unsynced(storage: S, key: impl Into<String>) -> Self {
        Self {
            writable: false,
            ..Self::empty(storage, key)
        }
    }

    /// Load the list stored under `key`.
    ///
    /// A missing or malformed payload yields an empty list; invalid entries
    /// are skipped. Only a failing storage read is an error.
    pub fn load(storage: S, key: impl Into<String>) -> StoreResult<Self> {
        let mut store = Self::empty(storage, key);

        let Some(raw) = store.storage.get(&store.key)? else {
            info!("no tasks stored under {:?}", store.key);
            return Ok(store);
        };

        match payload::decode(&raw) {
            Ok(decoded) => {
                if decoded.dropped > 0 {
                    warn!("dropped {} invalid stored entries under {:?}", decoded.dropped, store.key);
                }
                for stored in decoded.tasks {
                    let id = store.allocate_id();
                    store.tasks.push(Task {
                        id,
                        text: stored.text,
                        completed: stored.completed,
                    });
                }
            }
            Err(e) => warn!("ignoring stored tasks under {:?}: {}", store.key, e),
        }

        info!("loaded {} tasks", store.tasks.len());
        Ok(store)
    }

    fn allocate_id(&mut self) -> TaskId {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    fn position(&self, id: TaskId) -> StoreResult<usize> {
        self.tasks
            .iter()
            .position(|task| task.id == id)
            .ok_or(StoreError::NotFound(id))
    }

    // ========================
    // Mutations
    // ========================

    /// Append a task with the trimmed text.
    ///
    /// Blank input is ignored and returns `Ok(None)`.
    pub fn add_task(&mut self, raw: &str) -> StoreResult<Option<TaskId>> {
        let text = trim_text(raw);
        if text.is_empty() {
            return Ok(None);
        }
        let id = self.allocate_id();
        self.tasks.push(Task::new(id, text.to_string()));
        debug!("added task {}: {:?}", id, text);
        self.persist()?;
        Ok(Some(id))
    }

    /// Set the completion flag to the checkbox's new state
    pub fn set_completed(&mut self, id: TaskId, completed: bool) -> StoreResult<()> {
        let index = self.position(id)?;
        self.tasks[index].completed = completed;
        debug!("task {} completed={}", id, completed);
        self.persist()
    }

    /// Remove a task; later tasks move up one position
    pub fn delete_task(&mut self, id: TaskId) -> StoreResult<Task> {
        let index = self.position(id)?;
        let removed = self.tasks.remove(index);
        debug!("deleted task {} at position {}", id, index);
        self.persist()?;
        Ok(removed)
    }

    /// Write the whole list under the store's key
    pub fn persist(&self) -> StoreResult<()> {
        if !self.writable {
            return Err(StoreError::Unsynced {
                key: self.key.clone(),
            });
        }
        let json = payload::encode(&self.tasks)?;
        self.storage.set(&self.key, &json)?;
        Ok(())
    }

    // ========================
    // Reads
    // ========================

    /// One row per task, in list order
    pub fn render(&self) -> Vec<TaskRow> {
        self.tasks.iter().map(TaskRow::from).collect()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Number of tasks not yet completed
    pub fn remaining(&self) -> usize {
        self.tasks.iter().filter(|task| !task.completed).count()
    }
}

// The UI binds rows by id; positional and inspection helpers serve tests and callers
// that still think in list positions.
#[cfg_attr(not(test), allow(dead_code))]
impl<S: KeyValueStore> TodoStore<S> {
    /// Flip the completion flag, returning the new value
    pub fn toggle_complete(&mut self, id: TaskId) -> StoreResult<bool> {
        let index = self.position(id)?;
        let completed = !self.tasks[index].completed;
        self.set_completed(id, completed)?;
        Ok(completed)
    }

    /// `set_completed` for the task currently at `index`
    pub fn set_completed_at(&mut self, index: usize, completed: bool) -> StoreResult<()> {
        let id = self.id_at(index)?;
        self.set_completed(id, completed)
    }

    /// `delete_task` for the task currently at `index`
    pub fn delete_task_at(&mut self, index: usize) -> StoreResult<Task> {
        let id = self.id_at(index)?;
        self.delete_task(id)
    }

    fn id_at(&self, index: usize) -> StoreResult<TaskId> {
        self.tasks
            .get(index)
            .map(|task| task.id)
            .ok_or(StoreError::IndexOutOfRange {
                index,
                len: self.tasks.len(),
            })
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn is_writable(&self) -> bool {
        self.writable
    }
}
