//! Alert Stack Component
//!
//! Renders the live alerts in a fixed corner stack.

use leptos::prelude::*;

use crate::alerts::use_alerts;

/// Stack of transient alerts
#[component]
pub fn AlertStack() -> impl IntoView {
    let alerts = use_alerts();

    view! {
        <div class="alert-stack">
            <For
                each=move || alerts.alerts.get()
                key=|alert| alert.id
                children=move |alert| {
                    let id = alert.id;
                    view! {
                        <div class=format!("alert {}", alert.severity.css_class())>
                            <span class="alert-message">{alert.message.clone()}</span>
                            <button class="alert-dismiss" on:click=move |_| alerts.dismiss(id)>
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
