//! # View models for sessions, posts and comments
//!
//! These are the UI-facing shapes of the backend's records. The `api` crate
//! builds them once, at the HTTP boundary, so components never look at server
//! field names or guess between several spellings of an author id.
//!
//! ## Types
//!
//! | Type | Represents |
//! |------|-----------|
//! | [`RecordId`] | A server identifier, or a client-side placeholder for a provisional entry. Accepts JSON numbers and strings. |
//! | [`Session`] | The signed-in user `{id, name, email}` persisted in browser storage. |
//! | [`PostView`] | A post with its author's id and display name flattened in. |
//! | [`CommentView`] | A comment with its author's display name, plus a [`SyncState`]. |
//! | [`UserProfile`] | A user record as returned by `GET /users/:id`. |
//!
//! ## Ownership
//!
//! [`is_author`] is the single rule deciding whether edit/delete controls are
//! rendered: a session must be present and its id must equal the author id.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Display name used when the backend omits author data.
pub const UNKNOWN_AUTHOR: &str = "Unknown User";

const PROVISIONAL_PREFIX: &str = "local-";

static NEXT_PROVISIONAL: AtomicU64 = AtomicU64::new(1);

/// Identifier of a server record.
///
/// Backends disagree on whether ids are numbers or strings, so both are
/// accepted. The id remembers which one it arrived as and serializes back the
/// same way, so `"007"` stays a string. Equality only looks at the text.
#[derive(Clone, Debug)]
pub struct RecordId {
    text: String,
    numeric: bool,
}

impl RecordId {
    /// A textual id, sent back to the server as a JSON string.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            text: id.into(),
            numeric: false,
        }
    }

    /// An id taken from a URL segment. Canonical integers (`"42"`, not
    /// `"042"` or `"+42"`) are treated as numeric ids.
    pub fn parse(segment: &str) -> Self {
        let numeric = segment
            .parse::<i64>()
            .is_ok_and(|n| n.to_string() == segment);
        Self {
            text: segment.to_string(),
            numeric,
        }
    }

    /// A fresh placeholder for an entry the server has not confirmed yet.
    pub fn provisional() -> Self {
        let n = NEXT_PROVISIONAL.fetch_add(1, Ordering::Relaxed);
        Self::new(format!("{PROVISIONAL_PREFIX}{n}"))
    }

    pub fn is_provisional(&self) -> bool {
        !self.numeric && self.text.starts_with(PROVISIONAL_PREFIX)
    }

    pub fn is_numeric(&self) -> bool {
        self.numeric
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl PartialEq for RecordId {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text
    }
}

impl Eq for RecordId {}

impl Hash for RecordId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.text.hash(state);
    }
}

impl PartialOrd for RecordId {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for RecordId {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.text.cmp(&other.text)
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl From<i64> for RecordId {
    fn from(id: i64) -> Self {
        Self {
            text: id.to_string(),
            numeric: true,
        }
    }
}

impl From<&str> for RecordId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl Serialize for RecordId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.numeric {
            if let Ok(n) = self.text.parse::<i64>() {
                return serializer.serialize_i64(n);
            }
            if let Ok(n) = self.text.parse::<u64>() {
                return serializer.serialize_u64(n);
            }
            if let Ok(n) = self.text.parse::<f64>() {
                return serializer.serialize_f64(n);
            }
        }
        serializer.serialize_str(&self.text)
    }
}

impl<'de> Deserialize<'de> for RecordId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Int(i64),
            Unsigned(u64),
            Float(f64),
            Text(String),
        }

        let (text, numeric) = match Raw::deserialize(deserializer)? {
            Raw::Int(n) => (n.to_string(), true),
            Raw::Unsigned(n) => (n.to_string(), true),
            Raw::Float(n) => (n.to_string(), true),
            Raw::Text(s) => (s, false),
        };
        Ok(Self { text, numeric })
    }
}

/// The signed-in user, as cached in browser storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub id: RecordId,
    pub name: String,
    pub email: String,
}

impl Session {
    /// Get display name, falling back to email if name is not set.
    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() {
            &self.email
        } else {
            &self.name
        }
    }
}

/// Whether an entry is backed by a server record yet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SyncState {
    #[default]
    Confirmed,
    /// Shown optimistically; the server id is not known.
    Provisional,
}

/// A post as rendered in lists.
#[derive(Debug, Clone, PartialEq)]
pub struct PostView {
    pub id: RecordId,
    pub message: String,
    pub user_id: Option<RecordId>,
    pub user_name: String,
    pub user_email: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl PostView {
    pub fn is_owned_by(&self, session: Option<&Session>) -> bool {
        is_author(session, self.user_id.as_ref())
    }

    pub fn is_edited(&self) -> bool {
        is_edited(self.created_at, self.updated_at)
    }

    /// Copy of this post carrying a new message, stamped with `now`.
    pub fn edited(&self, message: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            message: message.into(),
            updated_at: Some(now),
            ..self.clone()
        }
    }
}

/// A comment as rendered under a post.
#[derive(Debug, Clone, PartialEq)]
pub struct CommentView {
    pub id: RecordId,
    pub post_id: Option<RecordId>,
    pub message: String,
    pub user_id: Option<RecordId>,
    pub author_name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
    pub sync: SyncState,
}

impl CommentView {
    /// Optimistic entry for a comment the user just submitted.
    pub fn provisional(
        post_id: &RecordId,
        author: &Session,
        message: impl Into<String>,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: RecordId::provisional(),
            post_id: Some(post_id.clone()),
            message: message.into(),
            user_id: Some(author.id.clone()),
            author_name: author.display_name().to_string(),
            created_at: now,
            updated_at: None,
            sync: SyncState::Provisional,
        }
    }

    pub fn is_provisional(&self) -> bool {
        self.sync == SyncState::Provisional
    }

    /// Provisional entries expose no controls until the server confirms them.
    pub fn is_owned_by(&self, session: Option<&Session>) -> bool {
        !self.is_provisional() && is_author(session, self.user_id.as_ref())
    }

    pub fn is_edited(&self) -> bool {
        is_edited(self.created_at, self.updated_at)
    }

    pub fn edited(&self, message: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            message: message.into(),
            updated_at: Some(now),
            ..self.clone()
        }
    }
}

/// A user profile from `GET /users/:id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: RecordId,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Edit/delete controls are shown only to the author.
pub fn is_author(session: Option<&Session>, author: Option<&RecordId>) -> bool {
    matches!((session, author), (Some(s), Some(a)) if &s.id == a)
}

fn is_edited(created_at: DateTime<Utc>, updated_at: Option<DateTime<Utc>>) -> bool {
    updated_at.is_some_and(|u| u != created_at)
}

/// Uppercased first letter of a display name, for avatars.
pub fn initial(name: &str) -> String {
    name.chars()
        .next()
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_else(|| "?".to_string())
}

/// "0 comments", "1 comment", "2 comments", …
pub fn comment_count_label(count: usize) -> String {
    if count == 1 {
        "1 comment".to_string()
    } else {
        format!("{count} comments")
    }
}
