//! Calculator Frontend App
//!
//! Router, shared context and route guards.

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;
use leptos_session::{provide_session_store, Protected, SessionStore};

use crate::components::BalanceBanner;
use crate::context::BalanceContext;
use crate::pages::{CalculatorPage, LoginPage, RecordsPage};

pub const LOGIN_PATH: &str = "/login";
pub const CALCULATOR_PATH: &str = "/calculator";
pub const RECORDS_PATH: &str = "/records";

#[component]
pub fn App() -> impl IntoView {
    // One session for the whole app, seeded from localStorage
    provide_session_store(SessionStore::browser());
    provide_context(BalanceContext::new(signal(0u32)));

    view! {
        <Router>
            <main class="app-container">
                <Routes fallback=|| view! { <p class="not-found">"Page not found."</p> }>
                    <Route path=path!("/") view=LoginPage />
                    <Route path=path!("/login") view=LoginPage />
                    <Route
                        path=path!("/calculator")
                        view=|| view! { <Protected redirect_to=LOGIN_PATH><CalculatorPage /></Protected> }
                    />
                    <Route
                        path=path!("/records")
                        view=|| view! { <Protected redirect_to=LOGIN_PATH><RecordsPage /></Protected> }
                    />
                    <Route
                        path=path!("/menu")
                        view=|| view! { <Protected redirect_to=LOGIN_PATH><BalanceBanner /></Protected> }
                    />
                </Routes>
            </main>
        </Router>
    }
}
