//! # Session persistence
//!
//! The signed-in user is cached as one JSON record under a single storage key
//! (default `"user"`). [`SessionStore`] abstracts where that record lives:
//!
//! | Implementation | Used on |
//! |----------------|---------|
//! | [`crate::LocalStorageStore`] | Web (WASM + `web` feature): `window.localStorage` |
//! | [`crate::MemorySessionStore`] | Tests and native builds |
//!
//! Reads and writes never fail loudly. A missing, unreadable or corrupted record
//! is reported as "no session", which sends the user back to the login page.
//! Failed writes are logged through [`checked_write`].

use std::fmt::Debug;

use crate::models::Session;

pub trait SessionStore {
    /// Read the cached session, if any.
    fn load(&self) -> Option<Session>;
    /// Persist `session`, replacing any previous record.
    fn save(&self, session: &Session);
    /// Forget the cached session.
    fn clear(&self);
}

/// Decode a stored record. Anything that is not a session reads as `None`.
pub fn decode(raw: &str) -> Option<Session> {
    serde_json::from_str(raw).ok()
}

pub fn encode(session: &Session) -> String {
    serde_json::to_string(session).unwrap_or_default()
}

/// Log a failed storage write. Returns whether the write went through.
pub fn checked_write<E: Debug>(key: &str, action: &str, result: Result<(), E>) -> bool {
    match result {
        Ok(()) => true,
        Err(err) => {
            tracing::warn!(key, action, ?err, "session storage write failed");
            false
        }
    }
}
