//! # User records as the backend sends them
//!
//! The backend names user columns `users_id`, `users_name` and `users_email`,
//! and nests the author of a post or comment under a `User` key. Some endpoints
//! answer with plain `id`/`name`/`email` instead. [`UserRecord`] accepts either
//! spelling and is turned into the client's shapes exactly once:
//!
//! - [`UserRecord::into_session`] — the cached [`Session`] after login or `/auth/me`.
//! - [`UserRecord::into_profile`] — a [`UserProfile`] for the profile page.
//!
//! The request bodies for the auth and user endpoints live here too.

use serde::{Deserialize, Serialize};
use store::{RecordId, Session, UserProfile};

/// User record from the backend, tolerant of both column spellings.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct UserRecord {
    #[serde(default)]
    pub users_id: Option<RecordId>,
    #[serde(default)]
    pub id: Option<RecordId>,
    #[serde(default)]
    pub users_name: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub users_email: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub users_created_at: Option<String>,
}

impl UserRecord {
    pub fn user_id(&self) -> Option<RecordId> {
        self.users_id.clone().or_else(|| self.id.clone())
    }

    pub fn display_name(&self) -> Option<String> {
        self.users_name.clone().or_else(|| self.name.clone())
    }

    fn email_address(&self) -> Option<String> {
        self.users_email.clone().or_else(|| self.email.clone())
    }

    /// Session for this user; `None` when the record carries no id.
    pub fn into_session(self) -> Option<Session> {
        Some(Session {
            id: self.user_id()?,
            name: self.display_name().unwrap_or_default(),
            email: self.email_address().unwrap_or_default(),
        })
    }

    pub fn into_profile(self) -> Option<UserProfile> {
        Some(UserProfile {
            id: self.user_id()?,
            name: self.display_name().unwrap_or_default(),
            email: self.email_address().unwrap_or_default(),
            created_at: self
                .users_created_at
                .as_deref()
                .and_then(store::time::parse_timestamp),
        })
    }
}

/// Body of `POST /auth/login`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Body of `POST /auth/register`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Body of `PUT /users/:id`. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProfileUpdate {
    #[serde(rename = "users_name", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "users_email", skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_backend_spelling_into_session() {
        let record: UserRecord = serde_json::from_value(json!({
            "users_id": 7,
            "users_name": "Ann",
            "users_email": "ann@x.com",
            "users_password": "hash-that-must-not-leak"
        }))
        .unwrap();
        let session = record.into_session().unwrap();
        assert_eq!(session.id, RecordId::from(7));
        assert_eq!(session.name, "Ann");
        assert_eq!(session.email, "ann@x.com");
    }

    #[test]
    fn test_plain_spelling_into_session() {
        let record: UserRecord =
            serde_json::from_value(json!({ "id": "u-1", "name": "Bo", "email": "bo@x.com" }))
                .unwrap();
        let session = record.into_session().unwrap();
        assert_eq!(session.id, RecordId::from("u-1"));
        assert_eq!(session.display_name(), "Bo");
    }

    #[test]
    fn test_record_without_id_is_not_a_session() {
        let record: UserRecord = serde_json::from_value(json!({ "users_name": "Ann" })).unwrap();
        assert!(record.into_session().is_none());
    }

    #[test]
    fn test_profile_update_only_sends_changed_fields() {
        let body = serde_json::to_value(ProfileUpdate {
            name: Some("Ann B".into()),
            email: None,
        })
        .unwrap();
        assert_eq!(body, json!({ "users_name": "Ann B" }));
    }
}
