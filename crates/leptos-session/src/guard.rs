//! Route Guard
//!
//! Wrap-and-redirect gating over the ambient session.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;

use crate::storage::Session;
use crate::store::{use_session_store, SessionStore};

/// Where `Protected` sends visitors without a session
pub const DEFAULT_REDIRECT: &str = "/login";

/// Default predicate: a non-empty token is present
pub fn has_token(session: Option<&Session>) -> bool {
    session.is_some_and(|s| !s.token.is_empty())
}

/// Compose a render callback with a predicate over the session.
///
/// The returned closure re-checks the predicate on every call and renders
/// nothing when it fails.
pub fn guard<P, F, V>(store: SessionStore, allow: P, render: F) -> impl Fn() -> Option<V>
where
    P: Fn(Option<&Session>) -> bool,
    F: Fn() -> V,
{
    move || {
        if store.with(|session| allow(session)) {
            Some(render())
        } else {
            None
        }
    }
}

/// Render children only while a session token is present.
///
/// Navigates to `redirect_to` (default `/login`) as soon as the token is
/// missing, including after a sign-out while mounted.
#[component]
pub fn Protected(
    #[prop(optional, into)] redirect_to: Option<String>,
    children: ChildrenFn,
) -> impl IntoView {
    let store = use_session_store();
    let redirect_to = redirect_to.unwrap_or_else(|| DEFAULT_REDIRECT.to_string());
    let navigate = use_navigate();

    Effect::new(move |_| {
        if !store.with(has_token) {
            log::debug!("[GUARD] No session token, redirecting to {}", redirect_to);
            navigate(
                &redirect_to,
                NavigateOptions {
                    replace: true,
                    ..Default::default()
                },
            );
        }
    });

    let render = guard(store, has_token, move || children());
    move || render()
}
