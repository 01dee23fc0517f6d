//! Task Row Component
//!
//! Individual row in the task list: name (or inline edit input), status
//! chip, and the action buttons. Only the row whose mutation is pending
//! has its controls disabled.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::api;
use crate::components::DeleteConfirmButton;
use crate::context::TasksContext;
use crate::models::{self, Task};
use crate::store::{store_remove_task, store_rename_task, store_set_task_done};

/// A single task row
#[component]
pub fn TaskRow(task: Task) -> impl IntoView {
    let ctx = use_context::<TasksContext>().expect("TasksContext should be provided");

    let id = task.id;
    let done = task.done;
    let display_name = task.name.clone();

    let is_editing = move || ctx.edit.get().id() == Some(id);
    let is_busy = move || ctx.busy_id.get() == Some(id);

    let save_edit = move |_| {
        let Some(name) = models::normalized_name(ctx.edit.get_untracked().name()) else {
            ctx.alerts.warning("The name cannot be empty");
            return;
        };
        ctx.begin_busy(id);
        spawn_local(async move {
            match api::rename_task(id, &name).await {
                Ok(()) => {
                    store_rename_task(&ctx.store, id, &name);
                    ctx.cancel_edit();
                    ctx.alerts.success("Task updated");
                }
                Err(_) => ctx.alerts.error("Could not update the task"),
            }
            ctx.end_busy();
        });
    };

    // State flips only once the server acknowledges the PATCH
    let toggle_done = move |_| {
        let next = !done;
        ctx.begin_busy(id);
        spawn_local(async move {
            match api::set_task_done(id, next).await {
                Ok(()) => store_set_task_done(&ctx.store, id, next),
                Err(_) => ctx.alerts.error("Could not update the task state"),
            }
            ctx.end_busy();
        });
    };

    let remove = move || {
        ctx.begin_busy(id);
        spawn_local(async move {
            match api::delete_task(id).await {
                Ok(()) => {
                    store_remove_task(&ctx.store, id);
                    ctx.alerts.success("Task deleted");
                }
                Err(_) => ctx.alerts.error("Could not delete the task"),
            }
            ctx.end_busy();
        });
    };

    view! {
        <div class=move || if done { "task-row done" } else { "task-row" }>
            <div class="task-name">
                {move || {
                    if is_editing() {
                        view! {
                            <input
                                type="text"
                                class="edit-input"
                                prop:value=move || ctx.edit.get().name().to_string()
                                disabled=is_busy
                                on:input=move |ev| {
                                    let target = ev.target().unwrap();
                                    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                                    ctx.set_edit_name(input.value());
                                }
                            />
                        }.into_any()
                    } else {
                        view! {
                            <span class="task-text">{display_name.clone()}</span>
                        }.into_any()
                    }
                }}
            </div>

            <div class="task-status">
                <span class=move || if done { "chip done" } else { "chip pending" }>
                    {if done { "Done" } else { "Pending" }}
                </span>
            </div>

            <div class="task-actions">
                {
                    let edit_task = task.clone();
                    move || {
                        if is_editing() {
                            view! {
                                <button class="save-btn" title="Save" disabled=is_busy on:click=save_edit>
                                    "✓"
                                </button>
                                <button class="cancel-btn" title="Cancel" on:click=move |_| ctx.cancel_edit()>
                                    "✗"
                                </button>
                            }.into_any()
                        } else {
                            let edit_task = edit_task.clone();
                            view! {
                                <button
                                    class=move || if done { "toggle-btn done" } else { "toggle-btn" }
                                    title=move || if done { "Reopen" } else { "Mark done" }
                                    disabled=is_busy
                                    on:click=toggle_done
                                >
                                    {if done { "✓" } else { "○" }}
                                </button>
                                <button
                                    class="edit-btn"
                                    title="Edit"
                                    disabled=is_busy
                                    on:click=move |_| ctx.start_edit(&edit_task)
                                >
                                    "✎"
                                </button>
                                <DeleteConfirmButton
                                    button_class="delete-btn"
                                    on_confirm=Callback::new(move |_| remove())
                                    disabled=Signal::derive(is_busy)
                                />
                            }.into_any()
                        }
                    }
                }
            </div>
        </div>
    }
}
