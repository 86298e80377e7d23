//! Key-value blob store backends
//!
//! The persistence layer treats the storage medium as a flat key-value
//! store of string blobs: one `get`, one `set`, nothing else. This module
//! defines that abstraction plus the two backends — a file-per-key store
//! for real sessions and an in-memory store for tests and ephemeral runs.

use std::collections::HashMap;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BlobError {
    #[error("failed to read blob '{key}': {source}")]
    ReadFailed {
        key: String,
        source: std::io::Error,
    },
    #[error("failed to write blob '{key}': {source}")]
    WriteFailed {
        key: String,
        source: std::io::Error,
    },
}

/// Minimal key-value blob storage
///
/// Implementations only need to store and return opaque string blobs;
/// serialization and fallback handling live in the typed wrapper above
/// this trait.
pub trait BlobStore {
    /// Reads the blob stored under `key`
    ///
    /// # Returns
    /// Some(blob) if the slot has been written, None if it never was
    fn get(&self, key: &str) -> Result<Option<String>, BlobError>;

    /// Writes `blob` under `key`, overwriting any prior value
    fn set(&mut self, key: &str, blob: &str) -> Result<(), BlobError>;
}

/// File-backed blob store: one file per key under a root directory
#[derive(Debug, Clone)]
pub struct FileBlobStore {
    root: PathBuf,
}

impl FileBlobStore {
    /// Creates a store rooted at the given directory
    ///
    /// The directory is created on the first write, not here, so a
    /// read-only session against a missing directory still works.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }
}

impl BlobStore for FileBlobStore {
    fn get(&self, key: &str) -> Result<Option<String>, BlobError> {
        let path = self.path_for(key);
        match std::fs::read_to_string(&path) {
            Ok(blob) => Ok(Some(blob)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(BlobError::ReadFailed {
                key: key.to_string(),
                source,
            }),
        }
    }

    fn set(&mut self, key: &str, blob: &str) -> Result<(), BlobError> {
        std::fs::create_dir_all(&self.root).map_err(|source| BlobError::WriteFailed {
            key: key.to_string(),
            source,
        })?;
        std::fs::write(self.path_for(key), blob).map_err(|source| BlobError::WriteFailed {
            key: key.to_string(),
            source,
        })
    }
}

/// HashMap-backed blob store with no durability
#[derive(Debug, Clone, Default)]
pub struct MemoryBlobStore {
    blobs: HashMap<String, String>,
}

impl MemoryBlobStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl BlobStore for MemoryBlobStore {
    fn get(&self, key: &str) -> Result<Option<String>, BlobError> {
        Ok(self.blobs.get(key).cloned())
    }

    fn set(&mut self, key: &str, blob: &str) -> Result<(), BlobError> {
        self.blobs.insert(key.to_string(), blob.to_string());
        Ok(())
    }
}
