//! Web Storage
//!
//! Minimal key-value storage abstraction.
//! `LocalStorage` talks to `window.localStorage`; `MemoryStore` keeps
//! entries in process memory and is what host-side tests run against.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use gloo_storage::errors::StorageError as GlooStorageError;
use gloo_storage::{LocalStorage as GlooLocalStorage, Storage};
use serde_json::value::RawValue;

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Storage-level errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    #[error("storage read failed: {0}")]
    Read(String),
    #[error("storage write failed: {0}")]
    Write(String),
}

/// String key-value store
pub trait KeyValueStore {
    /// Read the value stored under `key`, `None` if absent
    fn get(&self, key: &str) -> StorageResult<Option<String>>;

    /// Write `value` under `key`, replacing any previous value
    fn set(&self, key: &str, value: &str) -> StorageResult<()>;
}

// ========================
// Browser localStorage
// ========================

/// Handle to `window.localStorage`, backed by `gloo_storage`.
///
/// Holds no JS references; the storage object is looked up on every call,
/// so the handle is `Send + Sync` and can live inside reactive signals.
/// Values are JSON documents and are stored verbatim.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

impl LocalStorage {
    /// gloo panics when there is no storage object, so check first
    fn ensure_available() -> StorageResult<()> {
        let window = web_sys::window()
            .ok_or_else(|| StorageError::Unavailable("no window".to_string()))?;
        match window.local_storage() {
            Ok(Some(_)) => Ok(()),
            Ok(None) => Err(StorageError::Unavailable("localStorage disabled".to_string())),
            Err(e) => Err(StorageError::Unavailable(format!("{:?}", e))),
        }
    }
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Self::ensure_available()?;
        match GlooLocalStorage::get::<Box<RawValue>>(key) {
            Ok(raw) => Ok(Some(raw.get().to_string())),
            Err(GlooStorageError::KeyNotFound(_)) => Ok(None),
            // Present but not JSON; hand the text back and let the caller judge it
            Err(GlooStorageError::SerdeError(_)) => GlooLocalStorage::raw()
                .get_item(key)
                .map_err(|e| StorageError::Read(format!("{:?}", e))),
            Err(e) => Err(StorageError::Read(e.to_string())),
        }
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        Self::ensure_available()?;
        let raw = raw_json(value)?;
        GlooLocalStorage::set(key, &raw).map_err(|e| StorageError::Write(e.to_string()))
    }
}

/// Wrap an already-encoded JSON document so gloo writes it byte for byte
fn raw_json(value: &str) -> StorageResult<Box<RawValue>> {
    RawValue::from_string(value.to_string())
        .map_err(|e| StorageError::Write(format!("value is not JSON: {}", e)))
}

// ========================
// In-memory store
// ========================

#[derive(Debug, Default)]
struct MemoryInner {
    entries: HashMap<String, String>,
    read_only: bool,
}

/// In-memory store. Clones share the same entries, so a clone
/// behaves like the same browser profile seen after a page reload.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    inner: Arc<Mutex<MemoryInner>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with a single entry
    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::new();
        store.lock().entries.insert(key.to_string(), value.to_string());
        store
    }

    /// When read-only, every `set` fails like a full quota would
    pub fn set_read_only(&self, read_only: bool) {
        self.lock().read_only = read_only;
    }

    /// Raw value under `key`, bypassing the trait
    pub fn raw(&self, key: &str) -> Option<String> {
        self.lock().entries.get(key).cloned()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, MemoryInner> {
        // A poisoned map is still a valid map
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.lock().entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        let mut inner = self.lock();
        if inner.read_only {
            return Err(StorageError::Write("quota exceeded".to_string()));
        }
        inner.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_key_is_none() {
        let store = MemoryStore::new();
        assert_eq!(store.get("todos").unwrap(), None);
    }

    #[test]
    fn test_set_then_get() {
        let store = MemoryStore::new();
        store.set("todos", "[]").unwrap();
        assert_eq!(store.get("todos").unwrap().as_deref(), Some("[]"));

        store.set("todos", "[1]").unwrap();
        assert_eq!(store.raw("todos").as_deref(), Some("[1]"));
    }

    #[test]
    fn test_clones_share_entries() {
        let store = MemoryStore::new();
        let reloaded = store.clone();
        store.set("todos", "x").unwrap();
        assert_eq!(reloaded.get("todos").unwrap().as_deref(), Some("x"));
    }

    #[test]
    fn test_read_only_rejects_writes() {
        let store = MemoryStore::with_entry("todos", "[]");
        store.set_read_only(true);

        let err = store.set("todos", "[{}]").unwrap_err();
        assert!(matches!(err, StorageError::Write(_)));
        // Previous value untouched
        assert_eq!(store.raw("todos").as_deref(), Some("[]"));

        store.set_read_only(false);
        assert!(store.set("todos", "[{}]").is_ok());
    }

    #[test]
    fn test_raw_json_is_written_verbatim() {
        let payload = r#"[{"text":"Buy milk","completed":false}]"#;
        let raw = raw_json(payload).unwrap();
        assert_eq!(serde_json::to_string(&raw).unwrap(), payload);
    }

    #[test]
    fn test_raw_json_rejects_non_json() {
        assert!(matches!(raw_json("[{"), Err(StorageError::Write(_))));
        assert!(matches!(raw_json(""), Err(StorageError::Write(_))));
    }
}
