//! # Post operations
//!
//! | Operation | Request | Local effect |
//! |-----------|---------|--------------|
//! | [`load`] | `GET /posts` | replace the list |
//! | [`create`] | `POST /posts`, then `GET /posts` | [`Created`]: resynced list, or the returned record appended |
//! | [`update`] | `PUT /posts/:id` | [`Edit`]: entry replaced in place, `updated_at` stamped |
//! | [`delete`] | `DELETE /posts/:id` | [`Deletion`]: entry removed |
//!
//! Checks that fail before a request is made (blank or over-long message, no
//! session, unchanged edit, declined confirmation) never reach the backend.

use chrono::Utc;
use store::{ComposeLimit, Feed, PostView, RecordId, Session};

use crate::backend::Backend;
use crate::error::{ActionError, ApiError};
use crate::models::{NewPost, PostUpdate};
use crate::outcome::{Deletion, Edit};

/// How the list catches up after a successful create.
#[derive(Debug, Clone, PartialEq)]
pub enum Created {
    /// The list was fetched again after the write.
    Resynced(Vec<PostView>),
    /// The refetch failed; the record the create call returned is appended.
    Returned(PostView),
    /// The post exists on the server but neither a list nor a record came back.
    Pending,
}

impl Created {
    pub fn apply(self, feed: &mut Feed<PostView>) {
        match self {
            Created::Resynced(posts) => feed.replace_all(posts),
            Created::Returned(post) => feed.append(post),
            Created::Pending => {}
        }
    }
}

pub async fn load<B: Backend>(backend: &B) -> Result<Vec<PostView>, ApiError> {
    backend.list_posts().await.inspect_err(|err| {
        tracing::error!(%err, "failed to load posts");
    })
}

pub async fn create<B: Backend>(
    backend: &B,
    session: Option<&Session>,
    limit: &ComposeLimit,
    draft: &str,
) -> Result<Created, ActionError> {
    let message = limit.validate(draft)?;
    let session = session.ok_or(ActionError::SignedOut)?;

    let returned = backend
        .create_post(&NewPost {
            posts_message: message,
            posts_user_id: session.id.clone(),
        })
        .await
        .inspect_err(|err| tracing::error!(%err, "failed to create post"))?;
    tracing::info!(user = %session.id, "post created");

    match backend.list_posts().await {
        Ok(posts) => Ok(Created::Resynced(posts)),
        Err(err) => {
            tracing::warn!(%err, "post created but the list could not be refreshed");
            Ok(returned.map_or(Created::Pending, Created::Returned))
        }
    }
}

pub async fn update<B: Backend>(
    backend: &B,
    limit: &ComposeLimit,
    post: &PostView,
    draft: &str,
) -> Result<Edit<PostView>, ActionError> {
    let trimmed = draft.trim();
    if !trimmed.is_empty() && trimmed == post.message.trim() {
        return Ok(Edit::Unchanged);
    }
    let message = limit.validate(draft)?;

    let saved = backend
        .update_post(
            &post.id,
            &PostUpdate {
                posts_message: message.clone(),
            },
        )
        .await
        .inspect_err(|err| tracing::error!(id = %post.id, %err, "failed to update post"))?;
    Ok(Edit::Saved(
        post.edited(saved.unwrap_or(message), Utc::now()),
    ))
}

/// `confirmed` is the user's answer to the confirmation prompt.
pub async fn delete<B: Backend>(
    backend: &B,
    id: &RecordId,
    confirmed: bool,
) -> Result<Deletion, ApiError> {
    if !confirmed {
        return Ok(Deletion::Cancelled);
    }
    backend
        .delete_post(id)
        .await
        .inspect_err(|err| tracing::error!(%id, %err, "failed to delete post"))?;
    Ok(Deletion::Deleted(id.clone()))
}

pub async fn get<B: Backend>(backend: &B, id: &RecordId) -> Result<PostView, ApiError> {
    backend
        .get_post(id)
        .await
        .inspect_err(|err| tracing::error!(%id, %err, "failed to load post"))
}
