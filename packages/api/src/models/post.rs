//! Post records and request bodies for the `/posts` endpoints.
//!
//! The author id has historically come back under `posts_user_id`, `user_id`
//! or only inside the nested `User` record. [`PostRecord::into_view`] resolves
//! that once; [`PostView::user_id`](store::PostView) is the only field views read.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use store::models::UNKNOWN_AUTHOR;
use store::time::parse_timestamp;
use store::{PostView, RecordId};

use super::UserRecord;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PostRecord {
    #[serde(default)]
    pub posts_id: Option<RecordId>,
    #[serde(default)]
    pub posts_message: Option<String>,
    #[serde(default)]
    pub posts_user_id: Option<RecordId>,
    #[serde(default)]
    pub user_id: Option<RecordId>,
    #[serde(default)]
    pub posts_created_at: Option<String>,
    #[serde(default)]
    pub posts_updated_at: Option<String>,
    #[serde(default, rename = "User")]
    pub author: Option<UserRecord>,
}

impl PostRecord {
    /// Flatten into the view model. Records without an id are unusable and
    /// yield `None`; a missing creation time falls back to `now`.
    pub fn into_view(self, now: DateTime<Utc>) -> Option<PostView> {
        let id = self.posts_id?;
        let user_id = self
            .posts_user_id
            .or(self.user_id)
            .or_else(|| self.author.as_ref().and_then(UserRecord::user_id));
        let user_name = self
            .author
            .as_ref()
            .and_then(UserRecord::display_name)
            .unwrap_or_else(|| UNKNOWN_AUTHOR.to_string());
        let user_email = self
            .author
            .as_ref()
            .and_then(|a| a.users_email.clone().or_else(|| a.email.clone()));
        Some(PostView {
            id,
            message: self.posts_message.unwrap_or_default(),
            user_id,
            user_name,
            user_email,
            created_at: self
                .posts_created_at
                .as_deref()
                .and_then(parse_timestamp)
                .unwrap_or(now),
            updated_at: self.posts_updated_at.as_deref().and_then(parse_timestamp),
        })
    }
}

/// Body of `POST /posts`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewPost {
    pub posts_message: String,
    pub posts_user_id: RecordId,
}

/// Body of `PUT /posts/:id`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PostUpdate {
    pub posts_message: String,
}
