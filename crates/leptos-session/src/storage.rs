//! Session Storage Backends
//!
//! The session is persisted as two raw string keys with no schema.

use std::sync::{Mutex, PoisonError};

use gloo_storage::{LocalStorage, Storage};

/// Storage key holding the opaque session token
pub const TOKEN_KEY: &str = "authToken";
/// Storage key holding the signed-in username
pub const USERNAME_KEY: &str = "username";

/// Signed-in user credentials
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub username: String,
}

impl Session {
    pub fn new(token: impl Into<String>, username: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            username: username.into(),
        }
    }
}

/// Where a session lives between page loads
pub trait SessionStorage: Send + Sync {
    /// Read the persisted session, if a token is stored
    fn load(&self) -> Option<Session>;

    /// Persist the session, replacing any previous one
    fn save(&self, session: &Session);

    /// Remove the persisted session
    fn clear(&self);
}

/// Browser `localStorage` backend
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalSessionStorage;

impl SessionStorage for LocalSessionStorage {
    fn load(&self) -> Option<Session> {
        let storage = LocalStorage::raw();
        let token = storage
            .get_item(TOKEN_KEY)
            .ok()
            .flatten()
            .filter(|token| !token.is_empty())?;
        let username = storage
            .get_item(USERNAME_KEY)
            .ok()
            .flatten()
            .unwrap_or_default();
        Some(Session { token, username })
    }

    fn save(&self, session: &Session) {
        let storage = LocalStorage::raw();
        if let Err(e) = storage.set_item(TOKEN_KEY, &session.token) {
            log::error!("Failed to persist session token: {:?}", e);
        }
        if let Err(e) = storage.set_item(USERNAME_KEY, &session.username) {
            log::error!("Failed to persist username: {:?}", e);
        }
    }

    fn clear(&self) {
        LocalStorage::delete(TOKEN_KEY);
        LocalStorage::delete(USERNAME_KEY);
    }
}

/// In-process backend for tests and non-browser hosts
#[derive(Debug, Default)]
pub struct MemorySessionStorage {
    slot: Mutex<Option<Session>>,
}

impl MemorySessionStorage {
    pub fn with_session(session: Session) -> Self {
        Self {
            slot: Mutex::new(Some(session)),
        }
    }

    /// Snapshot of what is currently persisted
    pub fn persisted(&self) -> Option<Session> {
        self.slot
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl SessionStorage for MemorySessionStorage {
    fn load(&self) -> Option<Session> {
        self.persisted().filter(|session| !session.token.is_empty())
    }

    fn save(&self, session: &Session) {
        *self.slot.lock().unwrap_or_else(PoisonError::into_inner) = Some(session.clone());
    }

    fn clear(&self) {
        *self.slot.lock().unwrap_or_else(PoisonError::into_inner) = None;
    }
}
