//! Derived read-only views over the task list
//!
//! Filtering and counts are pure derivations recomputed from the state on
//! demand. Nothing here is persisted or cached, and nothing here mutates
//! the underlying list.

use crate::domain::task::{Task, TaskListState};

/// Which subset of the task list to show
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Filter {
    /// Every task
    #[default]
    All,
    /// Tasks not yet completed
    Active,
    /// Completed tasks
    Completed,
}

impl Filter {
    /// Returns true if the task belongs to this filter's view
    pub fn matches(&self, task: &Task) -> bool {
        match self {
            Filter::All => true,
            Filter::Active => !task.completed,
            Filter::Completed => task.completed,
        }
    }
}

/// Lazy view of the tasks matching a filter, in list order
///
/// The iterator borrows the state; it restarts from scratch on every call,
/// so it always reflects the current state and never goes stale.
pub fn filtered<'a>(
    state: &'a TaskListState,
    filter: Filter,
) -> impl Iterator<Item = &'a Task> + 'a {
    state.tasks.iter().filter(move |task| filter.matches(task))
}

/// Number of tasks not yet completed
pub fn remaining_count(state: &TaskListState) -> usize {
    state.tasks.iter().filter(|task| !task.completed).count()
}

/// True if every task is completed
///
/// An empty list counts as all-complete: there is nothing left to do, and
/// the toggle-all control derives its next target from the negation of
/// this value.
pub fn all_complete(state: &TaskListState) -> bool {
    state.tasks.iter().all(|task| task.completed)
}
