//! Domain logic and core data structures
//!
//! This module contains pure business logic that is independent of the
//! storage backend and the terminal front-end.

pub mod reducer;
pub mod task;
pub mod view;

pub use reducer::{Action, TaskReducer};
pub use task::{Task, TaskId, TaskListState};
pub use view::Filter;
