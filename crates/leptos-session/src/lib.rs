//! Leptos Session Utilities
//!
//! A persisted, reactive session store plus a composable route guard.
//! The store is seeded once from a storage backend and notifies every
//! subscriber through a signal when the session changes.

mod guard;
mod storage;
mod store;

pub use guard::{guard, has_token, Protected, DEFAULT_REDIRECT};
pub use storage::{
    LocalSessionStorage, MemorySessionStorage, Session, SessionStorage, TOKEN_KEY, USERNAME_KEY,
};
pub use store::{provide_session_store, use_session_store, SessionStore};
