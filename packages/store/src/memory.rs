use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::models::Session;
use crate::session::{decode, encode, SessionStore};

/// In-memory SessionStore for testing and native fallback.
///
/// Holds raw strings per key, like `localStorage` does, so clones share state.
#[derive(Clone, Debug)]
pub struct MemorySessionStore {
    key: String,
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl Default for MemorySessionStore {
    fn default() -> Self {
        Self::new("user")
    }
}

impl MemorySessionStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            entries: Arc::default(),
        }
    }

    /// Raw value under the session key, as a browser devtools panel would show it.
    pub fn raw(&self) -> Option<String> {
        self.entries.lock().ok()?.get(&self.key).cloned()
    }

    /// Overwrite the raw value, bypassing encoding.
    pub fn set_raw(&self, value: impl Into<String>) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.insert(self.key.clone(), value.into());
        }
    }
}

impl SessionStore for MemorySessionStore {
    fn load(&self) -> Option<Session> {
        decode(&self.raw()?)
    }

    fn save(&self, session: &Session) {
        self.set_raw(encode(session));
    }

    fn clear(&self) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.remove(&self.key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RecordId;

    fn ann() -> Session {
        Session {
            id: RecordId::from(7),
            name: "Ann".to_string(),
            email: "ann@x.com".to_string(),
        }
    }

    #[test]
    fn test_empty_store_has_no_session() {
        let store = MemorySessionStore::default();
        assert!(store.load().is_none());
        assert!(store.raw().is_none());
    }

    #[test]
    fn test_save_load_clear() {
        let store = MemorySessionStore::default();
        store.save(&ann());
        assert_eq!(store.load(), Some(ann()));

        store.clear();
        assert!(store.load().is_none());
        assert!(store.raw().is_none());
    }

    #[test]
    fn test_clones_share_state() {
        let store = MemorySessionStore::default();
        let other = store.clone();
        store.save(&ann());
        assert_eq!(other.load(), Some(ann()));
    }

    #[test]
    fn test_textual_id_keeps_its_form_after_reload() {
        let store = MemorySessionStore::default();
        let session = Session {
            id: RecordId::new("007"),
            ..ann()
        };
        store.save(&session);
        assert!(store.raw().is_some_and(|raw| raw.contains("\"007\"")));

        let loaded = store.load().unwrap();
        assert_eq!(loaded.id.as_str(), "007");
        assert!(crate::models::is_author(Some(&loaded), Some(&RecordId::new("007"))));
    }

    #[test]
    fn test_corrupted_record_reads_as_signed_out() {
        let store = MemorySessionStore::default();
        store.set_raw("{not json");
        assert!(store.load().is_none());

        store.set_raw("null");
        assert!(store.load().is_none());
    }

    #[test]
    fn test_keys_are_isolated() {
        let entries = MemorySessionStore::new("user");
        entries.save(&ann());
        let other_key = MemorySessionStore {
            key: "someone-else".to_string(),
            entries: entries.entries.clone(),
        };
        assert!(other_key.load().is_none());
    }
}
