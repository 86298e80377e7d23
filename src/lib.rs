//! Task list state engine with durable local persistence
//!
//! The core is a pure reducer over an ordered task list plus a typed
//! key-value persistence wrapper; everything else derives from those two.
//! The terminal front-end in [`ui`] is the only layer doing I/O beyond
//! the storage backend.

pub mod app;
pub mod domain;
pub mod store;
pub mod ui;
