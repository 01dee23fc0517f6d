//! Task Screen Context
//!
//! Shared state for the task screen, provided via Leptos Context API.
//! Holds the single busy slot, the single edit slot and the refetch
//! trigger alongside the store and the alert capability.

use leptos::prelude::*;

use crate::alerts::Alerts;
use crate::models::Task;
use crate::store::TaskStore;
use crate::tasks::EditSlot;

/// Task-screen signals provided via context
#[derive(Clone, Copy)]
pub struct TasksContext {
    /// List state store
    pub store: TaskStore,
    /// Alert capability
    pub alerts: Alerts,
    /// Row with a pending mutation (its controls are disabled) - read
    pub busy_id: ReadSignal<Option<u32>>,
    set_busy_id: WriteSignal<Option<u32>>,
    /// Single-slot edit session - read
    pub edit: ReadSignal<EditSlot>,
    set_edit: WriteSignal<EditSlot>,
    /// Trigger to refetch the current page - read
    pub reload_trigger: ReadSignal<u32>,
    set_reload_trigger: WriteSignal<u32>,
}

impl TasksContext {
    pub fn new(store: TaskStore, alerts: Alerts) -> Self {
        let (busy_id, set_busy_id) = signal(None);
        let (edit, set_edit) = signal(EditSlot::default());
        let (reload_trigger, set_reload_trigger) = signal(0u32);
        Self {
            store,
            alerts,
            busy_id,
            set_busy_id,
            edit,
            set_edit,
            reload_trigger,
            set_reload_trigger,
        }
    }

    /// Trigger a refetch of the current page
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }

    /// Mark a row as having a pending mutation
    pub fn begin_busy(&self, id: u32) {
        self.set_busy_id.set(Some(id));
    }

    pub fn end_busy(&self) {
        self.set_busy_id.set(None);
    }

    /// Enter edit mode for `task`, discarding any other in-progress edit
    pub fn start_edit(&self, task: &Task) {
        self.set_edit.update(|slot| slot.start(task));
    }

    pub fn cancel_edit(&self) {
        self.set_edit.update(|slot| slot.clear());
    }

    pub fn set_edit_name(&self, name: String) {
        self.set_edit.update(|slot| slot.set_name(name));
    }
}
