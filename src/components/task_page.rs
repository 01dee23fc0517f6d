//! Task Screen Component
//!
//! Paginated, searchable task list with inline create/edit/delete.
//! Query state lives in plain signals; the fetched list lives in the
//! store so applying results never re-triggers the fetch effect.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;
use wasm_bindgen::JsCast;

use crate::api;
use crate::alerts::use_alerts;
use crate::components::{NewTaskForm, Pagination, TaskRow};
use crate::context::TasksContext;
use crate::store::{store_apply_page, TaskState, TaskStateStoreFields};
use crate::tasks;

/// Page size choices offered by the selector
const PAGE_SIZES: &[u32] = &[5, 10, 20];
/// Quiet period before a search keystroke triggers a refetch
const SEARCH_DEBOUNCE_MS: u32 = 400;

/// Task screen: header with search and page-size controls, collapsible
/// create form, the list itself and pagination.
#[component]
pub fn TaskPage() -> impl IntoView {
    let alerts = use_alerts();
    let store = Store::new(TaskState::new());

    // Query state
    let (page, set_page) = signal(1u32);
    let (limit, set_limit) = signal(10u32);
    let (search, set_search) = signal(String::new());
    let (search_input, set_search_input) = signal(String::new());
    let (create_open, set_create_open) = signal(false);

    let ctx = TasksContext::new(store, alerts);
    provide_context(ctx);

    // Fetch whenever the query or the reload trigger changes. In-flight
    // requests are not cancelled; the last response to resolve wins.
    Effect::new(move |_| {
        let page_now = page.get();
        let limit_now = limit.get();
        let search_now = search.get();
        let trigger = ctx.reload_trigger.get();
        web_sys::console::log_1(
            &format!(
                "[TASKS] fetch page={} limit={} search={:?} trigger={}",
                page_now, limit_now, search_now, trigger
            )
            .into(),
        );
        store.loading().set(true);
        spawn_local(async move {
            match api::list_tasks(page_now, limit_now, &search_now).await {
                Ok(response) => {
                    let (tasks, total, pages, clamped) =
                        tasks::apply_page(response, page_now, limit_now);
                    store_apply_page(&store, tasks, total, pages);
                    if clamped != page_now {
                        set_page.set(clamped);
                    }
                }
                Err(_) => alerts.error("Could not load tasks"),
            }
            store.loading().set(false);
        });
    });

    // Debounced search: one cancellable timer, rescheduled per keystroke
    let debounce = StoredValue::new_local(None::<Timeout>);
    let on_search_input = move |ev: web_sys::Event| {
        let value = event_target_value(&ev);
        set_search_input.set(value.clone());
        debounce.update_value(|slot| {
            if let Some(pending) = slot.take() {
                pending.cancel();
            }
            *slot = Some(Timeout::new(SEARCH_DEBOUNCE_MS, move || {
                if let Some(next) = tasks::search_changed(&search.get_untracked(), &value) {
                    set_search.set(next);
                    set_page.set(1);
                }
            }));
        });
    };

    let on_limit_change = move |ev: web_sys::Event| {
        let target = ev.target().unwrap();
        let select = target.dyn_ref::<web_sys::HtmlSelectElement>().unwrap();
        if let Ok(value) = select.value().parse::<u32>() {
            set_limit.set(value);
            set_page.set(1);
        }
    };

    let summary = move || {
        let total = store.total().get();
        let pending = tasks::pending_count(&store.tasks().read());
        format!("{} tasks, {} pending", total, pending)
    };

    view! {
        <div class="task-screen">
            <header class="task-header">
                <div>
                    <h1>"My tasks"</h1>
                    <p class="task-summary">{summary}</p>
                </div>
                <div class="task-toolbar">
                    <input
                        type="search"
                        class="search-input"
                        placeholder="Search tasks..."
                        prop:value=move || search_input.get()
                        on:input=on_search_input
                    />
                    <select
                        class="page-size-select"
                        prop:value=move || limit.get().to_string()
                        on:change=on_limit_change
                    >
                        {PAGE_SIZES.iter().map(|size| {
                            let size = *size;
                            view! {
                                <option value=size.to_string()>{size.to_string()}</option>
                            }
                        }).collect_view()}
                    </select>
                    <button
                        class="toggle-create-btn"
                        on:click=move |_| set_create_open.update(|open| *open = !*open)
                    >
                        {move || if create_open.get() { "Close" } else { "New task" }}
                    </button>
                </div>
            </header>

            {move || create_open.get().then(|| view! { <NewTaskForm set_open=set_create_open/> })}

            <section class="task-list-panel">
                {move || {
                    if store.loading().get() {
                        view! { <div class="loading">"Loading..."</div> }.into_any()
                    } else if store.tasks().read().is_empty() {
                        view! {
                            <div class="empty-state">
                                <p class="empty-title">"No tasks yet"</p>
                                <p class="empty-hint">"Create a new task to get started"</p>
                            </div>
                        }.into_any()
                    } else {
                        view! {
                            <div class="task-list">
                                <div class="task-list-header">
                                    <span class="task-name">"Task"</span>
                                    <span class="task-status">"Status"</span>
                                    <span class="task-actions">"Actions"</span>
                                </div>
                                <For
                                    each=move || store.tasks().get()
                                    key=|task| (task.id, task.name.clone(), task.done)
                                    children=move |task| view! { <TaskRow task=task/> }
                                />
                            </div>
                        }.into_any()
                    }
                }}
            </section>

            <Show when=move || (store.pages().get() > 1)>
                <Pagination
                    page=page
                    set_page=set_page
                    pages=Signal::derive(move || store.pages().get())
                />
            </Show>
        </div>
    }
}
