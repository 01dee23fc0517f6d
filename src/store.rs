//! Task Screen State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity: mutations
//! touch only the fields they change, so the fetch effect (which tracks
//! the query signals) is never re-triggered by applying results.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::Task;
use crate::tasks;

/// Task screen state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct TaskState {
    /// Current page of tasks
    pub tasks: Vec<Task>,
    /// Total records on the server (stale between fetches)
    pub total: u32,
    /// Total pages reported by the last fetch
    pub pages: u32,
    /// Whether a fetch is in flight
    pub loading: bool,
}

impl TaskState {
    pub fn new() -> Self {
        Self {
            pages: 1,
            loading: true,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type TaskStore = Store<TaskState>;

// ========================
// Store Helper Functions
// ========================

/// Replace the list with a freshly fetched page.
pub fn store_apply_page(store: &TaskStore, tasks: Vec<Task>, total: u32, pages: u32) {
    store.tasks().set(tasks);
    store.total().set(total);
    store.pages().set(pages);
}

/// Prepend a newly created task to the current page.
pub fn store_prepend_task(store: &TaskStore, task: Task) {
    store.tasks().write().insert(0, task);
}

/// Rename a task in the store by ID.
pub fn store_rename_task(store: &TaskStore, id: u32, name: &str) {
    tasks::rename_in_place(&mut store.tasks().write(), id, name);
}

/// Set a task's completion flag in the store by ID.
pub fn store_set_task_done(store: &TaskStore, id: u32, done: bool) {
    tasks::set_done(&mut store.tasks().write(), id, done);
}

/// Remove a task from the store by ID.
pub fn store_remove_task(store: &TaskStore, id: u32) {
    tasks::remove(&mut store.tasks().write(), id);
}
