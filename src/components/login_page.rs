//! Login Screen Component
//!
//! Two-field credential form validated against a fixed schema. The
//! submission itself is simulated: no token is stored and no redirect
//! happens on success.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::alerts::use_alerts;
use crate::models::{validate_login, LoginErrors, LoginForm};

/// Simulated network latency for the login call
const LOGIN_DELAY_MS: u32 = 5_000;

/// Login screen
#[component]
pub fn LoginPage() -> impl IntoView {
    let alerts = use_alerts();

    let (form, set_form) = signal(LoginForm::default());
    let (errors, set_errors) = signal(LoginErrors::default());
    let (pending, set_pending) = signal(false);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        let submitted = form.get_untracked();
        match validate_login(&submitted) {
            Err(validation) => {
                alerts.error(validation.message());
                // Inputs keep the submitted values; only the errors change
                set_errors.set(validation);
            }
            Ok(()) => {
                set_errors.set(LoginErrors::default());
                set_pending.set(true);
                spawn_local(async move {
                    // Stand-in for the real credential exchange
                    TimeoutFuture::new(LOGIN_DELAY_MS).await;
                    alerts.success("Welcome back");
                    set_pending.set(false);
                });
            }
        }
    };

    let username_class = move || {
        if errors.get().username.is_some() {
            "field-input invalid"
        } else {
            "field-input"
        }
    };
    let password_class = move || {
        if errors.get().password.is_some() {
            "field-input invalid"
        } else {
            "field-input"
        }
    };

    view! {
        <div class="login-screen">
            <div class="login-panel">
                <h1>"LOGIN"</h1>
                <p class="login-subtitle">"Sign in to manage your tasks"</p>

                <form class="login-form" on:submit=submit>
                    <label class="field">
                        <span class="field-label">"Username"</span>
                        <input
                            type="text"
                            autocomplete="username"
                            class=username_class
                            prop:value=move || form.get().username
                            disabled=pending
                            on:input=move |ev| {
                                let target = ev.target().unwrap();
                                let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                                let value = input.value();
                                set_form.update(|f| f.username = value);
                            }
                        />
                        {move || errors.get().username.map(|message| view! {
                            <span class="field-error">{message}</span>
                        })}
                    </label>

                    <label class="field">
                        <span class="field-label">"Password"</span>
                        <input
                            type="password"
                            autocomplete="current-password"
                            class=password_class
                            prop:value=move || form.get().password
                            disabled=pending
                            on:input=move |ev| {
                                let target = ev.target().unwrap();
                                let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                                let value = input.value();
                                set_form.update(|f| f.password = value);
                            }
                        />
                        {move || errors.get().password.map(|message| view! {
                            <span class="field-error">{message}</span>
                        })}
                    </label>

                    <button type="submit" class="login-btn" disabled=pending>
                        {move || if pending.get() { "Logging in..." } else { "Login" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
