//! Session Store
//!
//! Single process-wide session, provided via Leptos context.

use std::sync::Arc;

use leptos::prelude::*;

use crate::storage::{LocalSessionStorage, Session, SessionStorage};

/// Reactive session handle
///
/// Reads subscribe the calling reactive scope; `sign_in` and `sign_out`
/// write through to storage before notifying.
#[derive(Clone, Copy)]
pub struct SessionStore {
    session: RwSignal<Option<Session>>,
    storage: StoredValue<Arc<dyn SessionStorage>>,
}

impl SessionStore {
    pub fn new(storage: impl SessionStorage + 'static) -> Self {
        Self::with_storage(Arc::new(storage))
    }

    pub fn with_storage(storage: Arc<dyn SessionStorage>) -> Self {
        let initial = storage.load();
        Self {
            session: RwSignal::new(initial),
            storage: StoredValue::new(storage),
        }
    }

    /// Store backed by browser `localStorage`
    pub fn browser() -> Self {
        Self::new(LocalSessionStorage)
    }

    pub fn session(&self) -> Option<Session> {
        self.session.get()
    }

    pub fn token(&self) -> Option<String> {
        self.session
            .with(|session| session.as_ref().map(|s| s.token.clone()))
    }

    pub fn username(&self) -> String {
        self.session
            .with(|session| session.as_ref().map(|s| s.username.clone()))
            .unwrap_or_default()
    }

    pub fn is_signed_in(&self) -> bool {
        self.with(crate::guard::has_token)
    }

    /// Run `f` against the current session, tracking it
    pub fn with<R>(&self, f: impl FnOnce(Option<&Session>) -> R) -> R {
        self.session.with(|session| f(session.as_ref()))
    }

    /// Run `f` against the current session without tracking
    pub fn with_untracked<R>(&self, f: impl FnOnce(Option<&Session>) -> R) -> R {
        self.session.with_untracked(|session| f(session.as_ref()))
    }

    pub fn sign_in(&self, session: Session) {
        log::info!("Signed in as {}", session.username);
        self.storage.with_value(|storage| storage.save(&session));
        self.session.set(Some(session));
    }

    pub fn sign_out(&self) {
        log::info!("Signed out");
        self.storage.with_value(|storage| storage.clear());
        self.session.set(None);
    }
}

/// Provide a store to all children
pub fn provide_session_store(store: SessionStore) {
    provide_context(store);
}

/// Get the session store from context
pub fn use_session_store() -> SessionStore {
    expect_context::<SessionStore>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemorySessionStorage;

    #[test]
    fn test_store_seeds_from_storage() {
        let storage = MemorySessionStorage::with_session(Session::new("tok", "bob"));
        let store = SessionStore::new(storage);

        assert!(store.is_signed_in());
        assert_eq!(store.token().as_deref(), Some("tok"));
        assert_eq!(store.username(), "bob");
    }

    #[test]
    fn test_sign_in_persists_and_notifies() {
        let storage = Arc::new(MemorySessionStorage::default());
        let store = SessionStore::with_storage(storage.clone());
        assert!(!store.is_signed_in());

        store.sign_in(Session::new("abc", "alice"));

        assert_eq!(storage.persisted(), Some(Session::new("abc", "alice")));
        assert_eq!(store.session(), Some(Session::new("abc", "alice")));
    }

    #[test]
    fn test_sign_out_clears_storage() {
        let storage = Arc::new(MemorySessionStorage::with_session(Session::new("abc", "alice")));
        let store = SessionStore::with_storage(storage.clone());

        store.sign_out();

        assert!(storage.persisted().is_none());
        assert!(store.session().is_none());
        assert_eq!(store.username(), "");
    }
}
