//! Typed persistence wrapper over a blob store
//!
//! `PersistentStore` serializes values into a single key-value slot and
//! hydrates them back at startup. A missing or unparseable blob is never
//! an error at load time; the caller's fallback takes its place. Write
//! failures are surfaced to the caller so it can warn and keep running —
//! the in-memory state is never rolled back over a failed save.

use crate::store::blob::{BlobError, BlobStore};
use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage backend failed: {0}")]
    Blob(#[from] BlobError),
    #[error("failed to serialize value for '{key}': {source}")]
    Serialize {
        key: String,
        source: serde_json::Error,
    },
}

/// Durability layer: typed load/save over one key-value slot
#[derive(Debug)]
pub struct PersistentStore<B: BlobStore> {
    backend: B,
}

impl<B: BlobStore> PersistentStore<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Loads the value stored under `key`, or the fallback
    ///
    /// Returns the fallback when the slot was never written, when the
    /// backend cannot be read, or when the stored blob does not parse.
    /// Corruption degrades to a fresh start, never to a fatal error.
    pub fn load<T: DeserializeOwned>(&self, key: &str, fallback: T) -> T {
        let blob = match self.backend.get(key) {
            Ok(Some(blob)) => blob,
            Ok(None) => {
                log::debug!("no stored value under '{key}', using fallback");
                return fallback;
            }
            Err(err) => {
                log::warn!("could not read stored value under '{key}': {err}");
                return fallback;
            }
        };

        match serde_json::from_str(&blob) {
            Ok(value) => value,
            Err(err) => {
                log::warn!("stored value under '{key}' is corrupt, using fallback: {err}");
                fallback
            }
        }
    }

    /// Serializes `value` and writes it under `key`
    ///
    /// Overwrites the whole slot. The error is returned rather than
    /// swallowed so the caller decides how loudly to report a session
    /// running without durable persistence.
    pub fn save<T: Serialize>(&mut self, key: &str, value: &T) -> Result<(), StoreError> {
        let blob = serde_json::to_string(value).map_err(|source| StoreError::Serialize {
            key: key.to_string(),
            source,
        })?;
        self.backend.set(key, &blob)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::task::{Task, TaskListState};
    use crate::store::blob::{FileBlobStore, MemoryBlobStore};

    fn sample_state() -> TaskListState {
        TaskListState {
            tasks: vec![
                Task {
                    id: 1,
                    title: "buy milk".to_string(),
                    completed: true,
                },
                Task {
                    id: 2,
                    title: "walk the dog".to_string(),
                    completed: false,
                },
            ],
        }
    }

    #[test]
    fn load_from_empty_slot_returns_fallback() {
        let store = PersistentStore::new(MemoryBlobStore::new());
        let state = store.load("tasks", TaskListState::new());
        assert!(state.is_empty());
    }

    #[test]
    fn save_then_load_round_trips() {
        let mut store = PersistentStore::new(MemoryBlobStore::new());
        let state = sample_state();

        store.save("tasks", &state).unwrap();
        let loaded: TaskListState = store.load("tasks", TaskListState::new());
        assert_eq!(loaded, state);
    }

    #[test]
    fn corrupt_blob_falls_back() {
        let mut backend = MemoryBlobStore::new();
        backend.set("tasks", "{not json at all").unwrap();
        let store = PersistentStore::new(backend);

        let state = store.load("tasks", TaskListState::new());
        assert!(state.is_empty());
    }

    #[test]
    fn save_overwrites_previous_value() {
        let mut store = PersistentStore::new(MemoryBlobStore::new());

        store.save("tasks", &sample_state()).unwrap();
        store.save("tasks", &TaskListState::new()).unwrap();

        let loaded: TaskListState = store.load("tasks", sample_state());
        assert!(loaded.is_empty());
    }

    #[test]
    fn file_backed_round_trip_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let state = sample_state();

        {
            let mut store = PersistentStore::new(FileBlobStore::new(dir.path()));
            store.save("tasks", &state).unwrap();
        }

        // A fresh store over the same directory sees the previous session
        let store = PersistentStore::new(FileBlobStore::new(dir.path()));
        let loaded: TaskListState = store.load("tasks", TaskListState::new());
        assert_eq!(loaded, state);
    }
}
