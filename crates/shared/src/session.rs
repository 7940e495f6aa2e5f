//! Persistence rules for the authenticated session.
//!
//! The session lives in a key/value store under two keys: the bearer token
//! and the JSON-encoded user. The store itself is injected, so the same rules
//! run against `localStorage`, files on disk, or memory in tests.

use std::cell::RefCell;
use std::collections::HashMap;

use crate::models::{Session, User};

pub const TOKEN_KEY: &str = "auth_token";
pub const USER_KEY: &str = "auth_user";

/// Minimal key/value storage capability, shaped like `localStorage`.
pub trait SessionStorage {
    fn get_item(&self, key: &str) -> Option<String>;
    /// Returns `true` if the value was stored.
    fn set_item(&self, key: &str, value: &str) -> bool;
    fn remove_item(&self, key: &str);
}

/// Restore a session. Both keys must be present; a corrupt user record
/// wipes the stored session.
pub fn load_session(storage: &impl SessionStorage) -> Option<Session> {
    let token = storage.get_item(TOKEN_KEY)?;
    let user_json = storage.get_item(USER_KEY)?;

    match serde_json::from_str::<User>(&user_json) {
        Ok(user) => Some(Session { token, user }),
        Err(e) => {
            tracing::warn!("discarding stored session: {e}");
            clear_session(storage);
            None
        }
    }
}

pub fn save_session(storage: &impl SessionStorage, session: &Session) -> bool {
    let Ok(user_json) = serde_json::to_string(&session.user) else {
        return false;
    };
    storage.set_item(TOKEN_KEY, &session.token) && storage.set_item(USER_KEY, &user_json)
}

pub fn clear_session(storage: &impl SessionStorage) {
    storage.remove_item(TOKEN_KEY);
    storage.remove_item(USER_KEY);
}

/// In-memory storage, for tests and hosts without persistence.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) -> bool {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        true
    }

    fn remove_item(&self, key: &str) {
        self.items.borrow_mut().remove(key);
    }
}
