//! Balance Banner Component
//!
//! Navigation bar with the signed-in user's balance and sign-out.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;
use leptos_session::use_session_store;

use crate::api;
use crate::app::{CALCULATOR_PATH, LOGIN_PATH, RECORDS_PATH};
use crate::context::use_balance;
use crate::models::format_money;

#[component]
pub fn BalanceBanner() -> impl IntoView {
    let session = use_session_store();
    let ctx = use_balance();
    let navigate = use_navigate();
    let (balance, set_balance) = signal(0.0_f64);

    // Load on mount and on every refresh request
    Effect::new(move |_| {
        let trigger = ctx.refresh_trigger.get();
        let Some(current) = session.session() else {
            return;
        };
        log::debug!("[BANNER] Fetching balance for {}, trigger={}", current.username, trigger);
        spawn_local(async move {
            let response = api::fetch_balance(&current.token, &current.username).await;
            match response.data {
                Some(reply) if response.is_success() => set_balance.set(reply.balance),
                _ => log::warn!("[BANNER] Balance fetch returned status {}", response.status),
            }
        });
    });

    let sign_out = move |_| {
        let navigate = navigate.clone();
        let token = session.with_untracked(|s| s.map(|s| s.token.clone()));
        spawn_local(async move {
            if let Some(token) = token {
                let response = api::logout(&token).await;
                if !response.is_success() {
                    log::error!("Error logging out: status {}", response.status);
                }
            }
            session.sign_out();
            navigate(LOGIN_PATH, Default::default());
        });
    };

    view! {
        <nav class="navbar navbar-expand-lg navbar-light bg-light menu-spacing">
            <div class="container-menu">
                <A href=CALCULATOR_PATH>"Calculator"</A>
                <A href=RECORDS_PATH>"Records"</A>
                <span class="navbar-text ms-3">
                    {move || banner_text(&session.username(), balance.get())}
                </span>
                <button class="btn btn-outline-danger ms-3" on:click=sign_out>
                    "Sign out"
                </button>
            </div>
        </nav>
    }
}

pub fn banner_text(username: &str, balance: f64) -> String {
    format!("Hello, {} | Balance: {}", username, format_money(balance))
}
