use std::collections::HashMap;
use std::sync::Mutex;

pub const TOKEN_KEY: &str = "token";
pub const ROLE_KEY: &str = "role";

/// Snapshot of the persisted session, handed to the guard per navigation.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct SessionContext {
    token: Option<String>,
    role: Option<String>,
}

impl SessionContext {
    /// Empty strings are treated the same as missing values.
    pub fn new(token: Option<String>, role: Option<String>) -> Self {
        Self {
            token: token.filter(|t| !t.is_empty()),
            role: role.filter(|r| !r.is_empty()),
        }
    }

    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn role(&self) -> Option<&str> {
        self.role.as_deref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}

/// Durable key/value storage backing the session.
pub trait SessionStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);

    fn load(&self) -> SessionContext {
        SessionContext::new(self.get(TOKEN_KEY), self.get(ROLE_KEY))
    }

    fn set_token(&self, token: &str) {
        self.set(TOKEN_KEY, token);
    }

    fn set_role(&self, role: &str) {
        self.set(ROLE_KEY, role);
    }

    /// Both keys go together: a role left without a token would bounce the
    /// guard between the login and quarantine pages.
    fn clear(&self) {
        self.remove(TOKEN_KEY);
        self.remove(ROLE_KEY);
    }
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_session(token: Option<&str>, role: Option<&str>) -> Self {
        let store = Self::new();
        if let Some(token) = token {
            store.set_token(token);
        }
        if let Some(role) = role {
            store.set_role(role);
        }
        store
    }
}

impl SessionStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .get(key)
            .cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .remove(key);
    }
}

/// `window.localStorage`, looked up on every call.
#[cfg(feature = "csr")]
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalStorage;

#[cfg(feature = "csr")]
impl LocalStorage {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

#[cfg(feature = "csr")]
impl SessionStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = Self::storage() {
            if storage.set_item(key, value).is_err() {
                log::error!("localStorage rejected write for key {}", key);
            }
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            if storage.remove_item(key).is_err() {
                log::error!("localStorage rejected removal of key {}", key);
            }
        }
    }
}
