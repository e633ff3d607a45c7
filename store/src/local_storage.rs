//! # Browser session storage
//!
//! [`LocalStorage`] persists the session pair into `window.localStorage` on
//! the web platform. All operations swallow errors: blocked or unavailable
//! storage degrades to "no persisted session" rather than crashing — the
//! authoritative session check is always the `GET /api/auth/me` hydration.

use crate::storage::SessionStorage;

/// `window.localStorage` backend for the web platform.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

impl LocalStorage {
    pub fn new() -> Self {
        Self
    }

    fn backing() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl SessionStorage for LocalStorage {
    async fn get(&self, key: &str) -> Option<String> {
        Self::backing()?.get_item(key).ok().flatten()
    }

    async fn set(&self, key: &str, value: &str) {
        if let Some(storage) = Self::backing() {
            let _ = storage.set_item(key, value);
        }
    }

    async fn remove(&self, key: &str) {
        if let Some(storage) = Self::backing() {
            let _ = storage.remove_item(key);
        }
    }
}
