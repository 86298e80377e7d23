//! Application controller and coordination layer
//!
//! The controller owns the task list state and wires the reducer to the
//! persistent store: every dispatched action runs through the reducer,
//! then the complete new state is written back to storage. Dispatch is
//! synchronous and the save happens inside it, so persisted snapshots can
//! never be reordered against the sequence of actions that produced them.
//!
//! The front-end holds a read-only view of the state; all mutation goes
//! through `dispatch`.

use crate::domain::reducer::{Action, TaskReducer};
use crate::domain::task::{Task, TaskId, TaskListState};
use crate::domain::view;
use crate::store::blob::BlobStore;
use crate::store::persistent::PersistentStore;

/// Storage slot holding the serialized task list
pub const STORAGE_KEY: &str = "tasks";

/// Main application controller
///
/// Exclusive owner of the in-memory state. A write failure leaves the
/// in-memory transition in place and is reported as a warning; the
/// session keeps working without durable persistence until the next
/// successful save.
pub struct TaskController<B: BlobStore> {
    /// Current task list state
    state: TaskListState,
    /// Durability layer, written through on every transition
    store: PersistentStore<B>,
    /// Next id to hand out; ids are never reused after deletion
    next_id: TaskId,
}

impl<B: BlobStore> TaskController<B> {
    /// Creates a controller hydrated from the given backend
    ///
    /// Loads the previously persisted task list, or starts empty if the
    /// slot is missing or corrupt. Id allocation resumes past the highest
    /// hydrated id so deleted ids are not handed out again.
    pub fn new(backend: B) -> Self {
        let store = PersistentStore::new(backend);
        let state: TaskListState = store.load(STORAGE_KEY, TaskListState::new());
        let next_id = state.max_id().map_or(1, |id| id + 1);

        log::debug!("hydrated {} task(s), next id {}", state.len(), next_id);

        Self {
            state,
            store,
            next_id,
        }
    }

    /// Gets a read-only view of the current state
    pub fn state(&self) -> &TaskListState {
        &self.state
    }

    /// Applies one action and persists the resulting state
    ///
    /// The reducer always succeeds; only persistence can fail, and that
    /// failure is logged rather than propagated so the in-memory state
    /// never rolls back or blocks on storage.
    pub fn dispatch(&mut self, action: Action) {
        let current = std::mem::take(&mut self.state);
        self.state = TaskReducer::reduce(current, action);

        if let Err(err) = self.store.save(STORAGE_KEY, &self.state) {
            log::warn!("state transition not persisted: {err}");
        }
    }

    /// Creates a task with a freshly allocated id and dispatches it
    ///
    /// # Arguments
    /// * `title` - Task title; callers reject blank titles before this
    ///
    /// # Returns
    /// The id assigned to the new task
    pub fn add_task(&mut self, title: impl Into<String>) -> TaskId {
        let id = self.next_id;
        self.next_id += 1;
        self.dispatch(Action::Add(Task::new(id, title)));
        id
    }

    /// Number of tasks not yet completed
    pub fn remaining(&self) -> usize {
        view::remaining_count(&self.state)
    }

    /// True if every task is completed (vacuously true when empty)
    pub fn all_complete(&self) -> bool {
        view::all_complete(&self.state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::blob::{FileBlobStore, MemoryBlobStore};

    fn fresh_controller() -> TaskController<MemoryBlobStore> {
        TaskController::new(MemoryBlobStore::new())
    }

    #[test]
    fn starts_empty_without_stored_state() {
        let controller = fresh_controller();
        assert!(controller.state().is_empty());
        assert_eq!(controller.remaining(), 0);
        assert!(controller.all_complete());
    }

    #[test]
    fn add_task_allocates_sequential_ids() {
        let mut controller = fresh_controller();
        let first = controller.add_task("one");
        let second = controller.add_task("two");

        assert_ne!(first, second);
        assert_eq!(controller.state().len(), 2);
        assert_eq!(
            controller.state().get(second).map(|t| t.title.as_str()),
            Some("two")
        );
    }

    #[test]
    fn deleted_ids_are_not_reused() {
        let mut controller = fresh_controller();
        let id = controller.add_task("short-lived");
        controller.dispatch(Action::Delete(id));

        let next = controller.add_task("replacement");
        assert!(next > id);
    }

    #[test]
    fn transitions_survive_a_restart() {
        let dir = tempfile::tempdir().unwrap();

        {
            let mut controller = TaskController::new(FileBlobStore::new(dir.path()));
            let id = controller.add_task("buy milk");
            controller.dispatch(Action::Toggle(id));
        }

        let rehydrated = TaskController::new(FileBlobStore::new(dir.path()));
        assert_eq!(rehydrated.state().len(), 1);
        assert_eq!(rehydrated.state().tasks[0].title, "buy milk");
        assert!(rehydrated.state().tasks[0].completed);
    }

    #[test]
    fn id_allocation_resumes_past_hydrated_ids() {
        let dir = tempfile::tempdir().unwrap();

        {
            let mut first_session = TaskController::new(FileBlobStore::new(dir.path()));
            first_session.add_task("a");
            first_session.add_task("b");
        }

        let mut second_session = TaskController::new(FileBlobStore::new(dir.path()));
        assert_eq!(second_session.add_task("c"), 3);
    }

    #[test]
    fn toggle_then_clear_empties_list() {
        let mut controller = fresh_controller();
        let id = controller.add_task("buy milk");

        controller.dispatch(Action::Toggle(id));
        assert_eq!(controller.remaining(), 0);
        assert!(controller.all_complete());

        controller.dispatch(Action::Clear);
        assert!(controller.state().is_empty());
    }

    #[test]
    fn toggle_all_target_derives_from_all_complete() {
        let mut controller = fresh_controller();
        controller.add_task("a");
        controller.add_task("b");

        // Not all complete, so the toggle-all control targets true
        let target = !controller.all_complete();
        controller.dispatch(Action::ToggleAll(target));
        assert!(controller.all_complete());

        let target = !controller.all_complete();
        controller.dispatch(Action::ToggleAll(target));
        assert_eq!(controller.remaining(), 2);
    }
}
