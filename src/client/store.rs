use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex, RwLock};

use crate::client::api::TokenSource;

/// Identity of the signed-in user. Currently an unused placeholder kept for
/// the eventual profile cache; the store never populates it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserIdentity {
    pub id: uuid::Uuid,
    pub name: String,
    pub email: String,
}

/// Persisted client-side session state.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthState {
    pub access_token: Option<String>,
    pub user: Option<UserIdentity>,
}

/// Where the store writes its state after each mutation.
///
/// Writes are fire-and-forget: a failing backend loses the persisted copy
/// but never the in-memory one, and there is no transaction across fields.
pub trait StorageBackend: Send + Sync {
    fn save(&self, state: &AuthState);
    fn load(&self) -> Option<AuthState>;
}

/// Session-scoped storage: survives store re-construction within one
/// process, gone on restart.
#[derive(Default)]
pub struct InMemorySessionStorage {
    slot: Mutex<Option<String>>,
}

impl StorageBackend for InMemorySessionStorage {
    fn save(&self, state: &AuthState) {
        match serde_json::to_string(state) {
            Ok(serialized) => {
                *self.slot.lock().unwrap_or_else(|e| e.into_inner()) = Some(serialized);
            }
            Err(e) => log::warn!("Failed to persist session state: {}", e),
        }
    }

    fn load(&self) -> Option<AuthState> {
        self.slot
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .as_deref()
            .and_then(|serialized| serde_json::from_str(serialized).ok())
    }
}

/// Client-side token store.
///
/// The only mutators are `set_access_token` and `clear_access_token`; reads
/// go through the generated per-field accessors below.
pub struct SessionStore {
    state: RwLock<AuthState>,
    backend: Arc<dyn StorageBackend>,
}

impl SessionStore {
    /// Rehydrates from whatever the backend last saved.
    pub fn new(backend: Arc<dyn StorageBackend>) -> Self {
        let state = backend.load().unwrap_or_default();
        Self {
            state: RwLock::new(state),
            backend,
        }
    }

    pub fn set_access_token(&self, token: impl Into<String>) {
        self.mutate(|state| state.access_token = Some(token.into()));
    }

    pub fn clear_access_token(&self) {
        self.mutate(|state| state.access_token = None);
    }

    fn mutate(&self, apply: impl FnOnce(&mut AuthState)) {
        let mut state = self.state.write().unwrap_or_else(|e| e.into_inner());
        apply(&mut state);
        self.backend.save(&state);
    }
}

/// Generates one read accessor per field of the store's state, so the
/// selector set always mirrors the state shape instead of being maintained
/// by hand.
macro_rules! store_selectors {
    ($($field:ident: $ty:ty),+ $(,)?) => {
        impl SessionStore {
            $(
                pub fn $field(&self) -> $ty {
                    self.state
                        .read()
                        .unwrap_or_else(|e| e.into_inner())
                        .$field
                        .clone()
                }
            )+
        }
    };
}

store_selectors! {
    access_token: Option<String>,
    user: Option<UserIdentity>,
}

impl TokenSource for SessionStore {
    fn access_token(&self) -> Option<String> {
        SessionStore::access_token(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_set_then_clear_leaves_no_token() {
        let store = SessionStore::new(Arc::new(InMemorySessionStorage::default()));
        assert_eq!(store.access_token(), None);

        store.set_access_token("x");
        assert_eq!(store.access_token(), Some("x".to_string()));

        store.clear_access_token();
        assert_eq!(store.access_token(), None);
    }

    #[test]
    fn test_user_stays_unpopulated() {
        let store = SessionStore::new(Arc::new(InMemorySessionStorage::default()));
        store.set_access_token("abc123");
        assert_eq!(store.user(), None);
    }

    #[test]
    fn test_state_survives_reload_from_same_backend() {
        let backend: Arc<dyn StorageBackend> = Arc::new(InMemorySessionStorage::default());

        let store = SessionStore::new(backend.clone());
        store.set_access_token("persisted-token");
        drop(store);

        // A fresh store over the same backend sees the saved token.
        let reloaded = SessionStore::new(backend.clone());
        assert_eq!(reloaded.access_token(), Some("persisted-token".to_string()));

        // A fresh backend models a new browser session: nothing survives.
        let cold = SessionStore::new(Arc::new(InMemorySessionStorage::default()));
        assert_eq!(cold.access_token(), None);
    }

    #[test]
    fn test_each_mutation_writes_through() {
        let backend: Arc<dyn StorageBackend> = Arc::new(InMemorySessionStorage::default());
        let store = SessionStore::new(backend.clone());

        store.set_access_token("one");
        assert_eq!(
            backend.load().unwrap().access_token,
            Some("one".to_string())
        );

        store.clear_access_token();
        assert_eq!(backend.load().unwrap().access_token, None);
    }
}
