//! Comment records and request bodies for the `/comments` endpoints.
//!
//! Comment columns come back upper-cased (`COMMENTS_ID`, `COMMENTS_MESSAGE`, …)
//! with the author nested under `User`. Request bodies use camel-case keys.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use store::models::UNKNOWN_AUTHOR;
use store::time::parse_timestamp;
use store::{CommentView, RecordId, SyncState};

use super::UserRecord;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct CommentRecord {
    #[serde(default)]
    pub comments_id: Option<RecordId>,
    #[serde(default)]
    pub comments_message: Option<String>,
    #[serde(default)]
    pub comments_user_id: Option<RecordId>,
    #[serde(default)]
    pub comments_post_id: Option<RecordId>,
    #[serde(default)]
    pub comments_created_at: Option<String>,
    #[serde(default)]
    pub comments_updated_at: Option<String>,
    #[serde(default, rename = "User")]
    pub author: Option<UserRecord>,
}

impl CommentRecord {
    pub fn into_view(self, now: DateTime<Utc>) -> Option<CommentView> {
        let id = self.comments_id?;
        let user_id = self
            .comments_user_id
            .or_else(|| self.author.as_ref().and_then(UserRecord::user_id));
        let author_name = self
            .author
            .as_ref()
            .and_then(UserRecord::display_name)
            .unwrap_or_else(|| UNKNOWN_AUTHOR.to_string());
        Some(CommentView {
            id,
            post_id: self.comments_post_id,
            message: self.comments_message.unwrap_or_default(),
            user_id,
            author_name,
            created_at: self
                .comments_created_at
                .as_deref()
                .and_then(parse_timestamp)
                .unwrap_or(now),
            updated_at: self
                .comments_updated_at
                .as_deref()
                .and_then(parse_timestamp),
            sync: SyncState::Confirmed,
        })
    }
}

/// Body of `POST /comments`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewComment {
    pub user_id: RecordId,
    pub post_id: RecordId,
    pub message: String,
}

/// Body of `PUT /comments/:id`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommentUpdate {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 10, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_upper_case_record() {
        let record: CommentRecord = serde_json::from_value(json!({
            "COMMENTS_ID": 3,
            "COMMENTS_MESSAGE": "nice",
            "COMMENTS_USER_ID": 7,
            "COMMENTS_POST_ID": 1,
            "COMMENTS_CREATED_AT": "2024-05-10T11:58:00Z",
            "COMMENTS_UPDATED_AT": "2024-05-10T11:59:00Z",
            "User": { "users_name": "Ann" }
        }))
        .unwrap();
        let view = record.into_view(now()).unwrap();
        assert_eq!(view.id, RecordId::from(3));
        assert_eq!(view.post_id, Some(RecordId::from(1)));
        assert_eq!(view.author_name, "Ann");
        assert!(view.is_edited());
        assert!(!view.is_provisional());
    }

    #[test]
    fn test_missing_author_falls_back() {
        let record: CommentRecord =
            serde_json::from_value(json!({ "COMMENTS_ID": 3, "COMMENTS_MESSAGE": "x" })).unwrap();
        let view = record.into_view(now()).unwrap();
        assert_eq!(view.author_name, UNKNOWN_AUTHOR);
        assert_eq!(view.created_at, now());
    }

    #[test]
    fn test_new_comment_body_is_camel_case() {
        let body = serde_json::to_value(NewComment {
            user_id: RecordId::from(7),
            post_id: RecordId::from(1),
            message: "nice".into(),
        })
        .unwrap();
        assert_eq!(body, json!({ "userId": 7, "postId": 1, "message": "nice" }));
    }
}
