//! Application orchestration layer
//!
//! This module coordinates between the domain core, the persistence
//! layer, and the front-end. It owns the state and the dispatch loop.

pub mod controller;

pub use controller::{STORAGE_KEY, TaskController};
