//! Records Toolbar Component
//!
//! Search box, page size, sort column and sort direction.

use leptos::prelude::*;

use crate::query::{PageSize, QueryChange, QueryState, SortDirection, SortField};

#[component]
pub fn RecordsToolbar(
    #[prop(into)] query: Signal<QueryState>,
    #[prop(into)] on_change: Callback<QueryChange>,
) -> impl IntoView {
    let on_size = move |ev: web_sys::Event| {
        let size = event_target_value(&ev)
            .parse::<u32>()
            .ok()
            .and_then(PageSize::from_u32);
        if let Some(size) = size {
            on_change.run(QueryChange::Size(size));
        }
    };

    let on_sort = move |ev: web_sys::Event| {
        if let Some(field) = SortField::parse(&event_target_value(&ev)) {
            on_change.run(QueryChange::SortBy(field));
        }
    };

    let toggle_direction = move |_| {
        let direction = query.with_untracked(|q| q.direction.toggled());
        on_change.run(QueryChange::Direction(direction));
    };

    view! {
        <div class="records-toolbar">
            <input
                type="search"
                class="form-control"
                placeholder="Search records..."
                prop:value=move || query.with(|q| q.search.clone())
                on:input=move |ev| on_change.run(QueryChange::Search(event_target_value(&ev)))
            />
            <select class="form-select" on:change=on_size>
                {PageSize::ALL.iter().map(|size| {
                    let size = *size;
                    view! {
                        <option
                            value=size.get().to_string()
                            selected=move || query.with(|q| q.size == size)
                        >
                            {format!("{} per page", size.get())}
                        </option>
                    }
                }).collect_view()}
            </select>
            <select class="form-select" on:change=on_sort>
                {SortField::ALL.iter().map(|field| {
                    let field = *field;
                    view! {
                        <option
                            value=field.as_str()
                            selected=move || query.with(|q| q.sort_by == field)
                        >
                            {format!("Sort by {}", field.label())}
                        </option>
                    }
                }).collect_view()}
            </select>
            <button type="button" class="btn btn-outline-secondary" on:click=toggle_direction>
                {move || direction_label(query.with(|q| q.direction))}
            </button>
        </div>
    }
}

fn direction_label(direction: SortDirection) -> &'static str {
    match direction {
        SortDirection::Asc => "Ascending ↑",
        SortDirection::Desc => "Descending ↓",
    }
}
