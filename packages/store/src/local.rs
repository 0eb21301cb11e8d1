//! # `localStorage` session store — browser-side persistence
//!
//! [`LocalStorageStore`] is the [`SessionStore`] used on the **web platform**. It
//! keeps the session JSON under a single key in `window.localStorage`, so a
//! reload or a new tab starts signed in.
//!
//! The struct only remembers the key; the `Storage` handle is looked up on every
//! call because `web_sys::Storage` is not `Clone`-friendly across components.
//!
//! ## Error handling
//!
//! Private-mode browsers and disabled storage make every call fail. Reads
//! return `None`; failed writes are logged and otherwise ignored.

use web_sys::Storage;

use crate::models::Session;
use crate::session::{checked_write, decode, encode, SessionStore};

#[derive(Clone, Debug, PartialEq)]
pub struct LocalStorageStore {
    key: String,
}

impl Default for LocalStorageStore {
    fn default() -> Self {
        Self::new("user")
    }
}

impl LocalStorageStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    fn storage() -> Option<Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

impl SessionStore for LocalStorageStore {
    fn load(&self) -> Option<Session> {
        let raw = Self::storage()?.get_item(&self.key).ok()??;
        decode(&raw)
    }

    fn save(&self, session: &Session) {
        let Some(storage) = Self::storage() else {
            tracing::warn!(key = %self.key, "localStorage unavailable; session not saved");
            return;
        };
        checked_write(&self.key, "save", storage.set_item(&self.key, &encode(session)));
    }

    fn clear(&self) {
        let Some(storage) = Self::storage() else {
            tracing::warn!(key = %self.key, "localStorage unavailable; session not cleared");
            return;
        };
        checked_write(&self.key, "clear", storage.remove_item(&self.key));
    }
}
