//! Results of list operations, applied to a [`Feed`] after the request settles.
//!
//! The async operations in [`crate::posts`] and [`crate::comments`] never touch
//! component state. They return one of these values, and the component applies
//! it to its signal once the await is over:
//!
//! ```ignore
//! let outcome = posts::delete(&client, &id, confirmed).await?;
//! feed.with_mut(|feed| outcome.apply(feed));
//! ```

use store::{Entry, Feed, RecordId};

/// Result of an edit.
#[derive(Debug, Clone, PartialEq)]
pub enum Edit<T> {
    /// The trimmed draft equals the stored message; no request was sent.
    Unchanged,
    Saved(T),
}

impl<T: Entry> Edit<T> {
    pub fn apply(self, feed: &mut Feed<T>) {
        if let Edit::Saved(item) = self {
            feed.replace(item);
        }
    }
}

impl<T> Edit<T> {
    pub fn is_saved(&self) -> bool {
        matches!(self, Edit::Saved(_))
    }
}

/// Result of a delete.
#[derive(Debug, Clone, PartialEq)]
pub enum Deletion {
    /// The user declined the confirmation; no request was sent.
    Cancelled,
    Deleted(RecordId),
}

impl Deletion {
    pub fn apply<T: Entry>(self, feed: &mut Feed<T>) {
        if let Deletion::Deleted(id) = self {
            feed.remove(&id);
        }
    }
}
