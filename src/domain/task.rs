//! Core task data model
//!
//! This module defines pure domain types with no knowledge of storage,
//! rendering, or terminal concerns. The state is a single ordered task
//! list; its persisted form is the bare JSON array of task records.

use serde::{Deserialize, Serialize};

/// Identifier of a task, unique within one task list.
///
/// Assigned once at creation, immutable afterwards, and never reused
/// after the task is deleted.
pub type TaskId = u64;

/// A single to-do entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub completed: bool,
}

impl Task {
    /// Creates a new, not-yet-completed task
    ///
    /// # Arguments
    /// * `id` - Unique identifier supplied by the caller
    /// * `title` - Human-readable title; blank titles are the caller's
    ///   responsibility to reject before construction
    pub fn new(id: TaskId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            completed: false,
        }
    }
}

/// The entire persisted state: tasks in creation order
///
/// Order is stable across toggles and edits; only deletion removes
/// entries. Serializes transparently as the array of task records, so the
/// stored blob round-trips field-for-field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskListState {
    pub tasks: Vec<Task>,
}

impl TaskListState {
    /// Creates an empty task list
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of tasks in the list
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Returns true if the list holds no tasks
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Looks up a task by id
    ///
    /// # Returns
    /// The task with the given id, or None if no task matches
    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    /// Returns the highest id currently in the list, or None when empty
    ///
    /// Used to seed id allocation after hydration so deleted ids are
    /// never handed out again within a stored list.
    pub fn max_id(&self) -> Option<TaskId> {
        self.tasks.iter().map(|task| task.id).max()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_task_starts_incomplete() {
        let task = Task::new(7, "water the plants");
        assert_eq!(task.id, 7);
        assert_eq!(task.title, "water the plants");
        assert!(!task.completed);
    }

    #[test]
    fn empty_state_properties() {
        let state = TaskListState::new();
        assert!(state.is_empty());
        assert_eq!(state.len(), 0);
        assert_eq!(state.get(1), None);
        assert_eq!(state.max_id(), None);
    }

    #[test]
    fn get_finds_by_id() {
        let state = TaskListState {
            tasks: vec![Task::new(1, "first"), Task::new(5, "second")],
        };
        assert_eq!(state.get(5).map(|t| t.title.as_str()), Some("second"));
        assert_eq!(state.get(2), None);
    }

    #[test]
    fn max_id_ignores_order() {
        let state = TaskListState {
            tasks: vec![Task::new(9, "a"), Task::new(3, "b")],
        };
        assert_eq!(state.max_id(), Some(9));
    }

    #[test]
    fn state_serializes_as_bare_array() {
        let state = TaskListState {
            tasks: vec![Task::new(1, "buy milk")],
        };
        let json = serde_json::to_string(&state).unwrap();
        assert_eq!(json, r#"[{"id":1,"title":"buy milk","completed":false}]"#);

        let back: TaskListState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, state);
    }
}
