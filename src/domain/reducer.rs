//! Task list state transitions
//!
//! Defines the closed action set and the pure reducer that computes the
//! next state from the current state and one action. The reducer performs
//! no I/O and never fails: actions aimed at a missing id are absorbed as
//! no-ops.

use crate::domain::task::{Task, TaskId, TaskListState};

/// One state transition instruction
///
/// This is a closed set; the reducer matches it exhaustively, so there is
/// no reachable "unknown action" path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Append a task to the end of the list.
    ///
    /// The caller supplies the id and guarantees its uniqueness; the
    /// reducer does not re-check it.
    Add(Task),
    /// Flip `completed` on the task with this id
    Toggle(TaskId),
    /// Remove the task with this id
    Delete(TaskId),
    /// Replace the title of the task matching the payload's id.
    ///
    /// The payload's `completed` flag is ignored; completion state only
    /// changes through `Toggle` and `ToggleAll`.
    Edit(Task),
    /// Remove every completed task
    Clear,
    /// Set every task's `completed` to the given value
    ToggleAll(bool),
}

/// Pure state-transition function over the task list
pub struct TaskReducer;

impl TaskReducer {
    /// Computes the next state from the current state and one action
    ///
    /// Consumes the current state and returns the next one. Matched tasks
    /// are rebuilt with struct-update syntax; untouched tasks move through
    /// unchanged, so a no-op action yields a structurally equal state.
    ///
    /// # Arguments
    /// * `state` - Current task list state
    /// * `action` - Transition to apply
    ///
    /// # Returns
    /// The new task list state
    pub fn reduce(state: TaskListState, action: Action) -> TaskListState {
        let mut tasks = state.tasks;

        match action {
            Action::Add(task) => {
                tasks.push(task);
            }

            Action::Toggle(id) => {
                tasks = tasks
                    .into_iter()
                    .map(|task| {
                        if task.id == id {
                            Task {
                                completed: !task.completed,
                                ..task
                            }
                        } else {
                            task
                        }
                    })
                    .collect();
            }

            Action::Delete(id) => {
                tasks.retain(|task| task.id != id);
            }

            Action::Edit(edited) => {
                tasks = tasks
                    .into_iter()
                    .map(|task| {
                        if task.id == edited.id {
                            Task {
                                title: edited.title.clone(),
                                ..task
                            }
                        } else {
                            task
                        }
                    })
                    .collect();
            }

            Action::Clear => {
                tasks.retain(|task| !task.completed);
            }

            Action::ToggleAll(target) => {
                tasks = tasks
                    .into_iter()
                    .map(|task| Task {
                        completed: target,
                        ..task
                    })
                    .collect();
            }
        }

        TaskListState { tasks }
    }
}
