//! Persistence layer
//!
//! Splits durability into a dumb key-value blob abstraction and a typed
//! wrapper that owns serialization and fallback policy. The rest of the
//! application only ever sees `PersistentStore`.

pub mod blob;
pub mod persistent;

pub use blob::{BlobError, BlobStore, FileBlobStore, MemoryBlobStore};
pub use persistent::{PersistentStore, StoreError};
