//! Operation Selector Component
//!
//! Drop-down over every calculator operation.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::models::OperationType;

/// Operation drop-down
#[component]
pub fn OperationSelector(
    current: ReadSignal<OperationType>,
    on_change: impl Fn(OperationType) + Copy + 'static,
) -> impl IntoView {
    let on_select = move |ev: web_sys::Event| {
        let selected = ev
            .target()
            .and_then(|target| target.dyn_into::<web_sys::HtmlSelectElement>().ok())
            .and_then(|select| OperationType::parse(&select.value()));
        if let Some(operation) = selected {
            on_change(operation);
        }
    };

    view! {
        <select class="form-select" on:change=on_select>
            {OperationType::ALL.iter().map(|operation| {
                let operation = *operation;
                view! {
                    <option
                        value=operation.as_str()
                        selected=move || current.get() == operation
                    >
                        {operation.label()}
                    </option>
                }
            }).collect_view()}
        </select>
    }
}
