//! # HTTP implementation of [`Backend`]
//!
//! [`ApiClient`] wraps a `reqwest::Client` and a sanitized base URL
//! (`http://localhost:5000/api` by default). Every request sends and accepts JSON.
//!
//! ## Responses
//!
//! - 2xx: the body is parsed as JSON (an empty body reads as `null`) and the wire
//!   records are normalized into `store` view models. Records without an id are
//!   dropped with a warning.
//! - anything else: the `{"message": …}` body, if any, is kept and the status is
//!   mapped by [`ApiError::from_status`].
//!
//! There is no request timeout and no retry; a hung request stays pending until
//! the component that started it is unmounted.

use chrono::Utc;
use reqwest::{RequestBuilder, Url};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use store::{ClientConfig, CommentView, PostView, RecordId, Session, UserProfile};

use crate::backend::Backend;
use crate::error::ApiError;
use crate::models::{
    unwrap_record, CommentRecord, CommentUpdate, Credentials, NewComment, NewPost, PostRecord,
    PostUpdate, ProfileUpdate, Registration, UserRecord,
};

#[derive(Clone, Debug)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, ApiError> {
        Ok(Self {
            base_url: sanitize_base_url(base_url.into())?,
            http: reqwest::Client::new(),
        })
    }

    pub fn from_config(config: &ClientConfig) -> Result<Self, ApiError> {
        Self::new(config.api.base_url.clone())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn send(&self, request: RequestBuilder) -> Result<Value, ApiError> {
        #[cfg(target_arch = "wasm32")]
        let request = request.fetch_credentials_include();

        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<ErrorBody>(&text)
                .ok()
                .and_then(|body| body.message);
            tracing::error!(status = status.as_u16(), ?message, "API request failed");
            return Err(ApiError::from_status(status.as_u16(), message));
        }
        if text.trim().is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_str(&text).map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn get(&self, path: &str) -> Result<Value, ApiError> {
        self.send(self.http.get(self.url(path))).await
    }

    async fn post<T: serde::Serialize>(&self, path: &str, body: &T) -> Result<Value, ApiError> {
        self.send(self.http.post(self.url(path)).json(body)).await
    }

    async fn put<T: serde::Serialize>(&self, path: &str, body: &T) -> Result<Value, ApiError> {
        self.send(self.http.put(self.url(path)).json(body)).await
    }

    async fn delete(&self, path: &str) -> Result<Value, ApiError> {
        self.send(self.http.delete(self.url(path))).await
    }
}

impl Backend for ApiClient {
    async fn list_posts(&self) -> Result<Vec<PostView>, ApiError> {
        posts_from(self.get("/posts").await?)
    }

    async fn get_post(&self, id: &RecordId) -> Result<PostView, ApiError> {
        let body = unwrap_record(self.get(&format!("/posts/{id}")).await?, "post");
        decode::<PostRecord>(body)?
            .into_view(Utc::now())
            .ok_or_else(|| ApiError::Decode("post record without id".into()))
    }

    async fn create_post(&self, post: &NewPost) -> Result<Option<PostView>, ApiError> {
        let body = unwrap_record(self.post("/posts", post).await?, "post");
        Ok(decode::<PostRecord>(body)
            .ok()
            .and_then(|record| record.into_view(Utc::now())))
    }

    async fn update_post(
        &self,
        id: &RecordId,
        update: &PostUpdate,
    ) -> Result<Option<String>, ApiError> {
        let body = unwrap_record(self.put(&format!("/posts/{id}"), update).await?, "post");
        Ok(decode::<PostRecord>(body)
            .ok()
            .and_then(|record| record.posts_message))
    }

    async fn delete_post(&self, id: &RecordId) -> Result<(), ApiError> {
        self.delete(&format!("/posts/{id}")).await.map(|_| ())
    }

    async fn list_comments(&self, post_id: &RecordId) -> Result<Vec<CommentView>, ApiError> {
        let records: Vec<CommentRecord> =
            decode(self.get(&format!("/comments/post/{post_id}")).await?)?;
        let now = Utc::now();
        Ok(records
            .into_iter()
            .filter_map(|record| {
                let view = record.into_view(now);
                if view.is_none() {
                    tracing::warn!(%post_id, "dropping comment record without id");
                }
                view
            })
            .collect())
    }

    async fn create_comment(&self, comment: &NewComment) -> Result<Option<RecordId>, ApiError> {
        let body = unwrap_record(self.post("/comments", comment).await?, "comment");
        Ok(decode::<CommentRecord>(body)
            .ok()
            .and_then(|record| record.comments_id))
    }

    async fn update_comment(&self, id: &RecordId, update: &CommentUpdate) -> Result<(), ApiError> {
        self.put(&format!("/comments/{id}"), update).await.map(|_| ())
    }

    async fn delete_comment(&self, id: &RecordId) -> Result<(), ApiError> {
        self.delete(&format!("/comments/{id}")).await.map(|_| ())
    }

    async fn register(&self, registration: &Registration) -> Result<(), ApiError> {
        self.post("/auth/register", registration).await.map(|_| ())
    }

    async fn login(&self, credentials: &Credentials) -> Result<Session, ApiError> {
        let body = unwrap_record(self.post("/auth/login", credentials).await?, "user");
        decode::<UserRecord>(body)?
            .into_session()
            .ok_or_else(|| ApiError::Decode("login response without a user id".into()))
    }

    async fn current_user(&self) -> Result<Session, ApiError> {
        let body = unwrap_record(self.get("/auth/me").await?, "user");
        decode::<UserRecord>(body)?
            .into_session()
            .ok_or_else(|| ApiError::Decode("/auth/me response without a user id".into()))
    }

    async fn get_user(&self, id: &RecordId) -> Result<UserProfile, ApiError> {
        let body = unwrap_record(self.get(&format!("/users/{id}")).await?, "user");
        decode::<UserRecord>(body)?
            .into_profile()
            .ok_or_else(|| ApiError::Decode("user record without id".into()))
    }

    async fn update_user(
        &self,
        id: &RecordId,
        update: &ProfileUpdate,
    ) -> Result<Option<UserProfile>, ApiError> {
        let body = unwrap_record(self.put(&format!("/users/{id}"), update).await?, "user");
        Ok(decode::<UserRecord>(body)
            .ok()
            .and_then(UserRecord::into_profile))
    }

    async fn list_user_posts(&self, id: &RecordId) -> Result<Vec<PostView>, ApiError> {
        posts_from(self.get(&format!("/users/{id}/posts")).await?)
    }
}

fn decode<T: DeserializeOwned>(body: Value) -> Result<T, ApiError> {
    serde_json::from_value(body).map_err(|e| ApiError::Decode(e.to_string()))
}

fn posts_from(body: Value) -> Result<Vec<PostView>, ApiError> {
    let records: Vec<PostRecord> = decode(body)?;
    let now = Utc::now();
    Ok(records
        .into_iter()
        .filter_map(|record| {
            let view = record.into_view(now);
            if view.is_none() {
                tracing::warn!("dropping post record without id");
            }
            view
        })
        .collect())
}

fn sanitize_base_url(mut base: String) -> Result<String, ApiError> {
    base = base.trim().to_string();
    if !base.starts_with("http://") && !base.starts_with("https://") {
        base = format!("http://{base}");
    }
    while base.ends_with('/') {
        base.pop();
    }
    Url::parse(&base).map_err(|e| ApiError::BaseUrl(format!("{base}: {e}")))?;
    Ok(base)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_base_url() {
        assert_eq!(
            sanitize_base_url("localhost:5000/api/".into()).unwrap(),
            "http://localhost:5000/api"
        );
        assert_eq!(
            sanitize_base_url("https://chirp.example/api".into()).unwrap(),
            "https://chirp.example/api"
        );
        assert!(matches!(
            sanitize_base_url("http://exa mple".into()),
            Err(ApiError::BaseUrl(_))
        ));
    }

    #[test]
    fn test_url_joins_path() {
        let client = ApiClient::new("http://localhost:5000/api/").unwrap();
        assert_eq!(client.url("/posts/7"), "http://localhost:5000/api/posts/7");
    }
}
