//! Pagination Controls Component

use leptos::prelude::*;

use crate::query::{next_disabled, previous_disabled};

/// Previous / page indicator / Next
#[component]
pub fn PaginationControls(
    #[prop(into)] page: Signal<u32>,
    #[prop(into)] total_pages: Signal<u32>,
    #[prop(into)] on_previous: Callback<()>,
    #[prop(into)] on_next: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="pagination-controls">
            <button
                class="btn btn-primary"
                disabled=move || previous_disabled(page.get())
                on:click=move |_| on_previous.run(())
            >
                "Previous"
            </button>
            <span class="page-info">{move || page_label(page.get(), total_pages.get())}</span>
            <button
                class="btn btn-primary"
                disabled=move || next_disabled(page.get(), total_pages.get())
                on:click=move |_| on_next.run(())
            >
                "Next"
            </button>
        </div>
    }
}

pub fn page_label(page: u32, total_pages: u32) -> String {
    format!("Page {} of {}", page + 1, total_pages.max(1))
}
