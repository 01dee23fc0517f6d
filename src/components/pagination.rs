//! Pagination Component
//!
//! Prev/next plus numbered page buttons; the current page is highlighted
//! and disabled.

use leptos::prelude::*;

/// Pagination control
#[component]
pub fn Pagination(
    page: ReadSignal<u32>,
    set_page: WriteSignal<u32>,
    #[prop(into)] pages: Signal<u32>,
) -> impl IntoView {
    view! {
        <nav class="pagination">
            <button
                class="page-btn"
                disabled=move || page.get() <= 1
                on:click=move |_| set_page.update(|p| *p = p.saturating_sub(1).max(1))
            >
                "‹"
            </button>
            <For
                each=move || 1..=pages.get()
                key=|n| *n
                children=move |n| {
                    let is_current = move || page.get() == n;
                    view! {
                        <button
                            class=move || if is_current() { "page-btn active" } else { "page-btn" }
                            disabled=is_current
                            on:click=move |_| set_page.set(n)
                        >
                            {n}
                        </button>
                    }
                }
            />
            <button
                class="page-btn"
                disabled=move || page.get() >= pages.get()
                on:click=move |_| {
                    if page.get_untracked() < pages.get_untracked() {
                        set_page.update(|p| *p += 1);
                    }
                }
            >
                "›"
            </button>
        </nav>
    }
}
