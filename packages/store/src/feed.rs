//! # Feed — an ordered, id-keyed list of posts or comments
//!
//! Each list view owns one [`Feed`]. Entries keep the order the server returned
//! them in; entries created on this client are appended at the end. Every
//! mutation is keyed by [`RecordId`], so a list never holds two entries with the
//! same id.
//!
//! ## Reconciliation
//!
//! | Event | Method |
//! |-------|--------|
//! | Fetch or resync finished | [`replace_all`](Feed::replace_all) |
//! | Edit saved | [`replace`](Feed::replace) (in place) |
//! | Delete confirmed by the server | [`remove`](Feed::remove) |
//! | Record created and returned by the server | [`append`](Feed::append) |
//! | Optimistic insert | [`push_provisional`](Feed::push_provisional) |
//! | Server confirmed an optimistic insert | [`settle`](Feed::settle) |
//! | Server rejected an optimistic insert | [`discard`](Feed::discard) |

use crate::models::{CommentView, PostView, RecordId};

/// Anything a [`Feed`] can hold.
pub trait Entry: Clone {
    fn id(&self) -> &RecordId;
}

impl Entry for PostView {
    fn id(&self) -> &RecordId {
        &self.id
    }
}

impl Entry for CommentView {
    fn id(&self) -> &RecordId {
        &self.id
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Feed<T> {
    items: Vec<T>,
}

impl<T> Default for Feed<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: Entry> Feed<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_items(items: Vec<T>) -> Self {
        let mut feed = Self::new();
        feed.replace_all(items);
        feed
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: &RecordId) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn contains(&self, id: &RecordId) -> bool {
        self.position(id).is_some()
    }

    /// Swap in a freshly fetched listing. Later duplicates of an id are dropped.
    pub fn replace_all(&mut self, items: Vec<T>) {
        self.items.clear();
        for item in items {
            if !self.contains(item.id()) {
                self.items.push(item);
            }
        }
    }

    /// Replace the entry with the same id, keeping its position.
    /// Returns `false` when no such entry exists.
    pub fn replace(&mut self, item: T) -> bool {
        match self.position(item.id()) {
            Some(index) => {
                self.items[index] = item;
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, id: &RecordId) -> Option<T> {
        let index = self.position(id)?;
        Some(self.items.remove(index))
    }

    /// Add a server-confirmed entry at the end, or update it in place when the
    /// id is already listed.
    pub fn append(&mut self, item: T) {
        if !self.replace(item.clone()) {
            self.items.push(item);
        }
    }

    /// Add an optimistic entry at the end and return its placeholder id.
    pub fn push_provisional(&mut self, item: T) -> RecordId {
        let id = item.id().clone();
        self.items.push(item);
        id
    }

    /// Resolve a provisional entry with the record the server returned.
    ///
    /// If the confirmed id is already listed (a resync got there first), the
    /// provisional entry is dropped instead of duplicating it.
    pub fn settle(&mut self, provisional: &RecordId, confirmed: T) {
        if self.contains(confirmed.id()) {
            self.remove(provisional);
            self.replace(confirmed);
            return;
        }
        match self.position(provisional) {
            Some(index) => self.items[index] = confirmed,
            None => self.items.push(confirmed),
        }
    }

    /// Drop a provisional entry the server did not accept.
    pub fn discard(&mut self, provisional: &RecordId) -> Option<T> {
        self.remove(provisional)
    }

    fn position(&self, id: &RecordId) -> Option<usize> {
        self.items.iter().position(|item| item.id() == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Session, SyncState};
    use chrono::Utc;

    fn post(id: i64, message: &str) -> PostView {
        PostView {
            id: RecordId::from(id),
            message: message.to_string(),
            user_id: Some(RecordId::from(7)),
            user_name: "Ann".to_string(),
            user_email: None,
            created_at: Utc::now(),
            updated_at: None,
        }
    }

    fn ann() -> Session {
        Session {
            id: RecordId::from(7),
            name: "Ann".to_string(),
            email: "ann@x.com".to_string(),
        }
    }

    fn ids<T: Entry>(feed: &Feed<T>) -> Vec<String> {
        feed.items().iter().map(|i| i.id().to_string()).collect()
    }

    #[test]
    fn test_replace_all_keeps_server_order_and_dedupes() {
        let mut feed = Feed::new();
        feed.replace_all(vec![post(3, "c"), post(1, "a"), post(3, "dup"), post(2, "b")]);
        assert_eq!(ids(&feed), vec!["3", "1", "2"]);
        assert_eq!(feed.get(&RecordId::from(3)).unwrap().message, "c");
    }

    #[test]
    fn test_replace_in_place() {
        let mut feed = Feed::from_items(vec![post(1, "a"), post(2, "b"), post(3, "c")]);
        assert!(feed.replace(post(2, "edited")));
        assert_eq!(ids(&feed), vec!["1", "2", "3"]);
        assert_eq!(feed.items()[1].message, "edited");
        assert!(!feed.replace(post(9, "missing")));
        assert_eq!(feed.len(), 3);
    }

    #[test]
    fn test_remove_drops_id() {
        let mut feed = Feed::from_items(vec![post(1, "a"), post(2, "b")]);
        let removed = feed.remove(&RecordId::from(1)).unwrap();
        assert_eq!(removed.message, "a");
        assert!(!feed.contains(&RecordId::from(1)));
        assert!(feed.remove(&RecordId::from(1)).is_none());
    }

    #[test]
    fn test_append_never_duplicates() {
        let mut feed = Feed::from_items(vec![post(1, "a")]);
        feed.append(post(2, "b"));
        feed.append(post(2, "b again"));
        assert_eq!(ids(&feed), vec!["1", "2"]);
        assert_eq!(feed.items()[1].message, "b again");
    }

    #[test]
    fn test_settle_replaces_provisional_in_position() {
        let mut feed = Feed::new();
        feed.append(CommentView {
            sync: SyncState::Confirmed,
            ..CommentView::provisional(&RecordId::from(1), &ann(), "first", Utc::now())
        });
        let first_id = feed.items()[0].id.clone();

        let draft = CommentView::provisional(&RecordId::from(1), &ann(), "second", Utc::now());
        let local = feed.push_provisional(draft.clone());
        assert!(feed.items()[1].is_provisional());

        let confirmed = CommentView {
            id: RecordId::from(55),
            sync: SyncState::Confirmed,
            ..draft
        };
        feed.settle(&local, confirmed);

        assert_eq!(feed.len(), 2);
        assert_eq!(feed.items()[0].id, first_id);
        assert_eq!(feed.items()[1].id, RecordId::from(55));
        assert!(!feed.items()[1].is_provisional());
        assert!(!feed.contains(&local));
    }

    #[test]
    fn test_settle_after_resync_does_not_duplicate() {
        let draft = CommentView::provisional(&RecordId::from(1), &ann(), "hi", Utc::now());
        let mut feed = Feed::new();
        let local = feed.push_provisional(draft.clone());

        let confirmed = CommentView {
            id: RecordId::from(55),
            sync: SyncState::Confirmed,
            ..draft
        };
        // A resync already brought the server copy in.
        feed.append(confirmed.clone());
        feed.settle(&local, confirmed);

        assert_eq!(ids(&feed), vec!["55"]);
    }

    #[test]
    fn test_discard_removes_provisional() {
        let draft = CommentView::provisional(&RecordId::from(1), &ann(), "hi", Utc::now());
        let mut feed = Feed::new();
        let local = feed.push_provisional(draft);
        assert_eq!(feed.len(), 1);
        assert!(feed.discard(&local).is_some());
        assert!(feed.is_empty());
    }
}
