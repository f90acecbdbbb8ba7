//! Calculator Page

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_session::use_session_store;

use crate::api::{self, ApiResponse};
use crate::components::{BalanceBanner, OperationSelector};
use crate::context::use_balance;
use crate::models::OperationType;
use crate::validation::prepare_operation;

pub const OPERATION_FAILED: &str = "Operation failed.";

/// Raw result text on 200, the generic failure message otherwise
pub fn operation_outcome(response: ApiResponse<String>) -> Result<String, &'static str> {
    match response {
        ApiResponse {
            status: 200,
            data,
        } => Ok(data.unwrap_or_default()),
        other => {
            log::error!("Operation failed: status {}", other.status);
            Err(OPERATION_FAILED)
        }
    }
}

#[component]
pub fn CalculatorPage() -> impl IntoView {
    let session = use_session_store();
    let balance = use_balance();

    let (num1, set_num1) = signal(String::new());
    let (num2, set_num2) = signal(String::new());
    let (operation, set_operation) = signal(OperationType::default());
    let (result, set_result) = signal(String::new());
    let (error, set_error) = signal(String::new());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        set_error.set(String::new());

        let request = match prepare_operation(
            operation.get_untracked(),
            &num1.get_untracked(),
            &num2.get_untracked(),
        ) {
            Ok(request) => request,
            Err(e) => {
                log::warn!("[CALC] Rejected input: {}", e);
                set_error.set(e.to_string());
                return;
            }
        };
        let Some(token) = session.with_untracked(|s| s.map(|s| s.token.clone())) else {
            return;
        };

        spawn_local(async move {
            match operation_outcome(api::perform_operation(&request, &token).await) {
                Ok(text) => {
                    set_result.set(text);
                    balance.refresh();
                }
                Err(text) => set_error.set(text.to_string()),
            }
        });
    };

    view! {
        <div>
            <BalanceBanner />
            <div class="calculator-container">
                <h1>"Calculator"</h1>
                <form on:submit=on_submit>
                    <div class="mb-3">
                        <input
                            type="number"
                            class="form-control"
                            placeholder=move || operation.get().first_operand_hint()
                            required=true
                            prop:value=move || num1.get()
                            on:input=move |ev| set_num1.set(event_target_value(&ev))
                        />
                    </div>
                    <Show when=move || operation.get().is_binary()>
                        <div class="mb-3">
                            <input
                                type="number"
                                class="form-control"
                                placeholder="Number 2"
                                required=true
                                prop:value=move || num2.get()
                                on:input=move |ev| set_num2.set(event_target_value(&ev))
                            />
                        </div>
                    </Show>
                    <div class="mb-3">
                        <OperationSelector
                            current=operation
                            on_change=move |op: OperationType| set_operation.set(op)
                        />
                    </div>
                    <button type="submit" class="btn btn-primary">"Calculate"</button>
                </form>
                <Show when=move || !error.get().is_empty()>
                    <div class="mt-3 text-danger">{move || error.get()}</div>
                </Show>
                <Show when=move || !result.get().is_empty()>
                    <div class="mt-3">"Result: " {move || result.get()}</div>
                </Show>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_outcome_success_shows_raw_text() {
        assert_eq!(
            operation_outcome(ApiResponse::ok("3.5".to_string())),
            Ok("3.5".to_string())
        );
        assert_eq!(
            operation_outcome(ApiResponse::ok("kX9pQ".to_string())),
            Ok("kX9pQ".to_string())
        );
    }

    #[test]
    fn test_operation_outcome_failure_is_generic() {
        assert_eq!(
            operation_outcome(ApiResponse::new(402, Some("Insufficient balance".to_string()))),
            Err(OPERATION_FAILED)
        );
        assert_eq!(
            operation_outcome(ApiResponse::internal_error()),
            Err(OPERATION_FAILED)
        );
    }
}
