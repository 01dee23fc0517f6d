//! Task Board Frontend App
//!
//! Application shell: provides the alert capability and maps routes to
//! the two screens.

use leptos::prelude::*;
use leptos_router::components::{Redirect, Route, Router, Routes};
use leptos_router::path;

use crate::alerts::Alerts;
use crate::components::{AlertStack, LoginPage, TaskPage};

#[component]
pub fn App() -> impl IntoView {
    provide_context(Alerts::new());

    view! {
        <Router>
            <AlertStack/>
            <main class="screen">
                <Routes fallback=|| view! { <Redirect path="/login"/> }>
                    <Route path=path!("/") view=|| view! { <Redirect path="/login"/> }/>
                    <Route path=path!("/login") view=LoginPage/>
                    <Route path=path!("/user") view=TaskPage/>
                </Routes>
            </main>
        </Router>
    }
}
