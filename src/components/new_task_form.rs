//! New Task Form Component
//!
//! Collapsible form for creating tasks. A blank name never reaches the
//! network; it is rejected with a warning.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::api;
use crate::context::TasksContext;
use crate::models;
use crate::store::store_prepend_task;

/// Form for creating new tasks
#[component]
pub fn NewTaskForm(set_open: WriteSignal<bool>) -> impl IntoView {
    let ctx = use_context::<TasksContext>().expect("TasksContext should be provided");

    let (name, set_name) = signal(String::new());
    let (creating, set_creating) = signal(false);

    let create_task = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(name_value) = models::normalized_name(&name.get()) else {
            ctx.alerts.warning("Enter a name for the task");
            return;
        };

        set_creating.set(true);
        spawn_local(async move {
            match api::create_task(&name_value).await {
                Ok(created) => {
                    match created {
                        // Server echoed the record: prepend it in place
                        Some(task) => store_prepend_task(&ctx.store, task),
                        // No record in the body: refetch the page
                        None => ctx.reload(),
                    }
                    set_name.set(String::new());
                    set_open.set(false);
                    ctx.alerts.success("Task created");
                }
                Err(_) => ctx.alerts.error("Could not create the task"),
            }
            set_creating.set(false);
        });
    };

    view! {
        <form class="new-task-form" on:submit=create_task>
            <input
                type="text"
                placeholder="Task name..."
                prop:value=move || name.get()
                disabled=creating
                on:input=move |ev| {
                    let target = ev.target().unwrap();
                    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                    set_name.set(input.value());
                }
            />
            <button type="submit" disabled=creating>
                {move || if creating.get() { "Saving..." } else { "Add task" }}
            </button>
        </form>
    }
}
