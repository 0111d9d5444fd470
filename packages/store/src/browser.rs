//! # Web Storage backend: browser-side sessions
//!
//! [`BrowserStorage`] is the [`SessionStorage`] implementation used on the
//! **web platform**. It maps [`SessionScope::Persistent`] to `localStorage`
//! and [`SessionScope::Session`] to `sessionStorage` through `web-sys`.
//!
//! The handle is a plain `Copy` value that looks the storage object up on
//! every call. Browsers can refuse access (private mode, disabled storage),
//! in which case reads return `None` and writes are dropped with a warning.

use crate::session::{SessionScope, SessionStorage};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BrowserStorage {
    scope: SessionScope,
}

impl BrowserStorage {
    pub fn new(scope: SessionScope) -> Self {
        Self { scope }
    }

    pub fn local() -> Self {
        Self::new(SessionScope::Persistent)
    }

    pub fn session() -> Self {
        Self::new(SessionScope::Session)
    }

    fn storage(&self) -> Option<web_sys::Storage> {
        let window = web_sys::window()?;
        let storage = match self.scope {
            SessionScope::Persistent => window.local_storage(),
            SessionScope::Session => window.session_storage(),
        };
        match storage {
            Ok(storage) => storage,
            Err(e) => {
                tracing::warn!("{} storage unavailable: {:?}", self.scope, e);
                None
            }
        }
    }
}

impl SessionStorage for BrowserStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.storage()?.get_item(key).ok().flatten()
    }

    fn set_item(&self, key: &str, value: &str) {
        if let Some(storage) = self.storage() {
            if let Err(e) = storage.set_item(key, value) {
                tracing::warn!("Failed to write {} to {} storage: {:?}", key, self.scope, e);
            }
        }
    }

    fn remove_item(&self, key: &str) {
        if let Some(storage) = self.storage() {
            if let Err(e) = storage.remove_item(key) {
                tracing::warn!("Failed to remove {} from {} storage: {:?}", key, self.scope, e);
            }
        }
    }
}
