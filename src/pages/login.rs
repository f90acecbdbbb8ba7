//! Login / Register Page
//!
//! One form, two modes sharing a submit handler.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use leptos_session::{use_session_store, Session, SessionStore};

use crate::api::{self, ApiResponse};
use crate::app::CALCULATOR_PATH;
use crate::config::REGISTER_REVERT_MS;
use crate::models::RegisterReply;

pub const LOGIN_ERROR: &str = "Error logging in";
pub const REGISTER_SUCCESS: &str = "User registered successfully";
pub const REGISTER_ERROR: &str = "Error registering user";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthMode {
    #[default]
    Login,
    Register,
}

impl AuthMode {
    pub fn toggled(&self) -> Self {
        match self {
            AuthMode::Login => AuthMode::Register,
            AuthMode::Register => AuthMode::Login,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            AuthMode::Login => "Login",
            AuthMode::Register => "Register",
        }
    }

    pub fn prompt(&self) -> &'static str {
        match self {
            AuthMode::Login => "Don't have an account? ",
            AuthMode::Register => "Already have an account? ",
        }
    }

    pub fn switch_label(&self) -> &'static str {
        match self {
            AuthMode::Login => "Register here",
            AuthMode::Register => "Login here",
        }
    }
}

/// Persist the session and leave for the calculator on 200.
///
/// Any other reply leaves the session untouched.
pub fn complete_login(
    store: &SessionStore,
    response: ApiResponse<String>,
    username: &str,
    navigate: impl FnOnce(&str),
) -> Result<(), &'static str> {
    match response {
        ApiResponse {
            status: 200,
            data: Some(token),
        } => {
            store.sign_in(Session::new(token, username));
            navigate(CALCULATOR_PATH);
            Ok(())
        }
        other => {
            log::warn!("Login failed: status {}", other.status);
            Err(LOGIN_ERROR)
        }
    }
}

/// Success message, or the server's message / a generic one
pub fn register_outcome(response: ApiResponse<RegisterReply>) -> Result<&'static str, String> {
    if response.is_success() {
        Ok(REGISTER_SUCCESS)
    } else {
        log::warn!("Registration failed: status {}", response.status);
        Err(response
            .data
            .and_then(|reply| reply.message)
            .unwrap_or_else(|| REGISTER_ERROR.to_string()))
    }
}

/// Holds at most one pending revert; replacing or cancelling drops the old handle
pub struct RevertSlot<H> {
    pending: Option<H>,
}

impl<H> Default for RevertSlot<H> {
    fn default() -> Self {
        Self { pending: None }
    }
}

impl<H> RevertSlot<H> {
    pub fn replace(&mut self, handle: H) {
        self.pending = Some(handle);
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

/// Schedule the flip back to login mode and return the banner text
pub fn on_register_success(
    set_mode: impl FnOnce(AuthMode) + 'static,
    schedule: impl FnOnce(u32, Box<dyn FnOnce()>),
) -> &'static str {
    schedule(
        REGISTER_REVERT_MS,
        Box::new(move || set_mode(AuthMode::Login)),
    );
    REGISTER_SUCCESS
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = use_session_store();
    let navigate = use_navigate();

    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (message, set_message) = signal(String::new());
    let (mode, set_mode) = signal(AuthMode::Login);

    // Pending flip back to login; dropping the Timeout cancels it
    let revert_timer = StoredValue::new_local(RevertSlot::<Timeout>::default());
    on_cleanup(move || {
        revert_timer.try_update_value(|slot| slot.cancel());
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let name = username.get_untracked();
        let pass = password.get_untracked();

        match mode.get_untracked() {
            AuthMode::Login => {
                let navigate = navigate.clone();
                spawn_local(async move {
                    let response = api::login(&name, &pass).await;
                    let go = |path: &str| navigate(path, Default::default());
                    if let Err(text) = complete_login(&session, response, &name, go) {
                        set_message.set(text.to_string());
                    }
                });
            }
            AuthMode::Register => {
                spawn_local(async move {
                    match register_outcome(api::register(&name, &pass).await) {
                        Ok(_) => {
                            let text = on_register_success(
                                move |next| set_mode.set(next),
                                |delay, revert| {
                                    let timer = Timeout::new(delay, revert);
                                    revert_timer.try_update_value(|slot| slot.replace(timer));
                                },
                            );
                            set_message.set(text.to_string());
                        }
                        Err(text) => set_message.set(text),
                    }
                });
            }
        }
    };

    view! {
        <div class="container">
            <div class="login-box">
                <h1 class="text-center">{move || mode.get().title()}</h1>
                <Show when=move || !message.get().is_empty()>
                    <div class="message text-center">{move || message.get()}</div>
                </Show>
                <form on:submit=on_submit>
                    <div class="mb-3">
                        <label for="username" class="form-label">"Username:"</label>
                        <input
                            type="text"
                            id="username"
                            class="form-control"
                            required=true
                            prop:value=move || username.get()
                            on:input=move |ev| set_username.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="mb-3">
                        <label for="password" class="form-label">"Password:"</label>
                        <input
                            type="password"
                            id="password"
                            class="form-control"
                            required=true
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                        />
                    </div>
                    <button type="submit" class="btn btn-primary">
                        {move || mode.get().title()}
                    </button>
                </form>
                <div class="mt-3 text-center">
                    <span>
                        {move || mode.get().prompt()}
                        <button
                            type="button"
                            class="btn btn-link"
                            on:click=move |_| set_mode.update(|m| *m = m.toggled())
                        >
                            {move || mode.get().switch_label()}
                        </button>
                    </span>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos_session::MemorySessionStorage;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;
    use std::sync::Arc;

    struct DropFlag(Rc<Cell<bool>>);

    impl Drop for DropFlag {
        fn drop(&mut self) {
            self.0.set(true);
        }
    }

    #[test]
    fn test_login_success_persists_and_navigates() {
        let storage = Arc::new(MemorySessionStorage::default());
        let store = SessionStore::with_storage(storage.clone());
        let visited = RefCell::new(None::<String>);

        let result = complete_login(&store, ApiResponse::ok("tok-123".to_string()), "alice", |path| {
            *visited.borrow_mut() = Some(path.to_string());
        });

        assert_eq!(result, Ok(()));
        assert_eq!(storage.persisted(), Some(Session::new("tok-123", "alice")));
        assert_eq!(visited.into_inner().as_deref(), Some(CALCULATOR_PATH));
    }

    #[test]
    fn test_login_failure_persists_nothing() {
        for response in [
            ApiResponse::new(401, Some("Bad credentials".to_string())),
            ApiResponse::new(500, Some(api::LOGIN_TRANSPORT_MESSAGE.to_string())),
            ApiResponse::new(403, None),
        ] {
            let storage = Arc::new(MemorySessionStorage::default());
            let store = SessionStore::with_storage(storage.clone());
            let mut navigated = false;

            let result = complete_login(&store, response, "alice", |_| navigated = true);

            assert_eq!(result, Err(LOGIN_ERROR));
            assert!(storage.persisted().is_none());
            assert!(!store.is_signed_in());
            assert!(!navigated);
        }
    }

    #[test]
    fn test_login_failure_keeps_existing_session() {
        let storage = Arc::new(MemorySessionStorage::with_session(Session::new("old", "bob")));
        let store = SessionStore::with_storage(storage.clone());

        let result = complete_login(&store, ApiResponse::new(401, None), "alice", |_| {});

        assert!(result.is_err());
        assert_eq!(storage.persisted(), Some(Session::new("old", "bob")));
    }

    #[test]
    fn test_register_outcome() {
        assert_eq!(
            register_outcome(ApiResponse::ok(RegisterReply::default())),
            Ok("User registered successfully")
        );
        assert_eq!(
            register_outcome(ApiResponse::new(
                409,
                Some(RegisterReply {
                    message: Some("Username taken".to_string())
                })
            )),
            Err("Username taken".to_string())
        );
        assert_eq!(
            register_outcome(ApiResponse::internal_error()),
            Err(REGISTER_ERROR.to_string())
        );
    }

    #[test]
    fn test_auth_mode_toggle() {
        let mode = AuthMode::default();
        assert_eq!(mode, AuthMode::Login);
        assert_eq!(mode.toggled(), AuthMode::Register);
        assert_eq!(mode.toggled().toggled(), AuthMode::Login);
        assert_eq!(AuthMode::Register.switch_label(), "Login here");
    }

    #[test]
    fn test_register_success_reverts_to_login_after_delay() {
        let mode = Rc::new(Cell::new(AuthMode::Register));
        let scheduled = RefCell::new(None::<(u32, Box<dyn FnOnce()>)>);

        let sink = mode.clone();
        let text = on_register_success(
            move |next| sink.set(next),
            |delay, revert| *scheduled.borrow_mut() = Some((delay, revert)),
        );

        assert_eq!(text, REGISTER_SUCCESS);
        assert_eq!(mode.get(), AuthMode::Register);

        let (delay, revert) = scheduled.into_inner().expect("revert scheduled");
        assert_eq!(delay, REGISTER_REVERT_MS);
        assert_eq!(delay, 2_000);
        revert();
        assert_eq!(mode.get(), AuthMode::Login);
    }

    #[test]
    fn test_revert_slot_replace_drops_previous_handle() {
        let first = Rc::new(Cell::new(false));
        let second = Rc::new(Cell::new(false));
        let mut slot = RevertSlot::default();

        slot.replace(DropFlag(first.clone()));
        assert!(slot.is_pending());
        assert!(!first.get());

        slot.replace(DropFlag(second.clone()));
        assert!(first.get());
        assert!(!second.get());
    }

    #[test]
    fn test_revert_slot_cancel_and_drop_release_handle() {
        let cancelled = Rc::new(Cell::new(false));
        let mut slot = RevertSlot::default();
        slot.replace(DropFlag(cancelled.clone()));
        slot.cancel();
        assert!(cancelled.get());
        assert!(!slot.is_pending());

        let unmounted = Rc::new(Cell::new(false));
        let mut slot = RevertSlot::default();
        slot.replace(DropFlag(unmounted.clone()));
        drop(slot);
        assert!(unmounted.get());
    }
}
