//! Record Table Component
//!
//! Operation history rows with an inline delete action.

use chrono::{DateTime, NaiveDateTime};
use leptos::prelude::*;

use crate::models::{OperationType, Record};

const DATE_DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[component]
pub fn RecordTable(
    #[prop(into)] records: Signal<Vec<Record>>,
    #[prop(into)] on_delete: Callback<u64>,
) -> impl IntoView {
    view! {
        <table class="table">
            <thead>
                <tr>
                    <th>"ID"</th>
                    <th>"Operation Type"</th>
                    <th>"Amount"</th>
                    <th>"Response"</th>
                    <th>"Date"</th>
                    <th>"Balance"</th>
                    <th></th>
                </tr>
            </thead>
            <tbody>
                <For
                    each=move || records.get()
                    key=|record| record.id
                    children=move |record| view! { <RecordRow record=record on_delete=on_delete /> }
                />
            </tbody>
        </table>
        <Show when=move || records.with(|r| r.is_empty())>
            <p class="text-muted">"No records found."</p>
        </Show>
    }
}

/// One history row; delete asks for confirmation in place
#[component]
fn RecordRow(record: Record, on_delete: Callback<u64>) -> impl IntoView {
    let record_id = record.id;
    let (confirming, set_confirming) = signal(false);

    view! {
        <tr class=("pending-delete", move || confirming.get())>
            <td>{record.id}</td>
            <td>{operation_label(&record.operation_type)}</td>
            <td>{record.amount}</td>
            <td>{record.operation_response.unwrap_or_default()}</td>
            <td>{format_record_date(record.date.as_deref())}</td>
            <td>{record.user_balance}</td>
            <td>
                <Show
                    when=move || confirming.get()
                    fallback=move || view! {
                        <button
                            type="button"
                            class="btn btn-sm btn-outline-danger"
                            title=delete_prompt(record_id)
                            on:click=move |_| set_confirming.set(true)
                        >
                            "Delete"
                        </button>
                    }
                >
                    <span class="delete-confirm">
                        <span class="delete-confirm-text">{delete_prompt(record_id)}</span>
                        <button
                            type="button"
                            class="btn btn-sm btn-danger"
                            on:click=move |_| {
                                set_confirming.set(false);
                                on_delete.run(record_id);
                            }
                        >
                            "Yes"
                        </button>
                        <button
                            type="button"
                            class="btn btn-sm btn-secondary"
                            on:click=move |_| set_confirming.set(false)
                        >
                            "No"
                        </button>
                    </span>
                </Show>
            </td>
        </tr>
    }
}

pub fn delete_prompt(record_id: u64) -> String {
    format!("Delete record #{}?", record_id)
}

/// Friendly name for known operations, raw wire name otherwise
pub fn operation_label(raw: &str) -> String {
    OperationType::parse(raw)
        .map(|op| op.label().to_string())
        .unwrap_or_else(|| raw.to_string())
}

/// ISO timestamps become `YYYY-MM-DD HH:MM:SS`; anything else is shown verbatim
pub fn format_record_date(date: Option<&str>) -> String {
    let Some(date) = date else {
        return String::new();
    };
    if let Ok(parsed) = DateTime::parse_from_rfc3339(date) {
        return parsed.format(DATE_DISPLAY_FORMAT).to_string();
    }
    match date.parse::<NaiveDateTime>() {
        Ok(parsed) => parsed.format(DATE_DISPLAY_FORMAT).to_string(),
        Err(_) => date.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_local_timestamp() {
        assert_eq!(
            format_record_date(Some("2024-03-01T10:15:30.123456")),
            "2024-03-01 10:15:30"
        );
        assert_eq!(
            format_record_date(Some("2024-03-01T10:15:30")),
            "2024-03-01 10:15:30"
        );
    }

    #[test]
    fn test_format_offset_timestamp() {
        assert_eq!(
            format_record_date(Some("2024-03-01T10:15:30+02:00")),
            "2024-03-01 10:15:30"
        );
    }

    #[test]
    fn test_format_unparseable_date_verbatim() {
        assert_eq!(format_record_date(Some("01/03/2024")), "01/03/2024");
        assert_eq!(format_record_date(None), "");
    }

    #[test]
    fn test_delete_prompt_names_the_record() {
        assert_eq!(delete_prompt(42), "Delete record #42?");
        assert_eq!(delete_prompt(7), "Delete record #7?");
    }

    #[test]
    fn test_operation_label() {
        assert_eq!(operation_label("SQUARE_ROOT"), "Square Root");
        assert_eq!(operation_label("MODULO"), "MODULO");
    }
}
