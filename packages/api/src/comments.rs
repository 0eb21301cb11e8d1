//! # Comment operations
//!
//! Same shape as [`crate::posts`], scoped by a post id, with one difference:
//! a new comment is shown immediately.
//!
//! 1. [`draft`] validates the message and builds a provisional [`CommentView`]
//!    (placeholder id, the user's own name). The caller pushes it with
//!    [`Feed::push_provisional`].
//! 2. [`submit`] sends `POST /comments`. [`Submitted::apply`] swaps the
//!    placeholder for the confirmed entry, or leaves it provisional when the
//!    server answered without an id (the caller then reloads the list).
//! 3. On error the caller drops the placeholder with [`Feed::discard`].
//!
//! Provisional entries never show edit or delete controls.

use chrono::{DateTime, Utc};
use store::{CommentView, ComposeLimit, Feed, RecordId, Session, SyncState};

use crate::backend::Backend;
use crate::error::{ActionError, ApiError};
use crate::models::{CommentUpdate, NewComment};
use crate::outcome::{Deletion, Edit};

#[derive(Debug, Clone, PartialEq)]
pub enum Submitted {
    Confirmed(CommentView),
    /// Accepted, but no id came back.
    Unconfirmed,
}

impl Submitted {
    pub fn apply(self, feed: &mut Feed<CommentView>, provisional: &RecordId) {
        if let Submitted::Confirmed(comment) = self {
            feed.settle(provisional, comment);
        }
    }
}

pub async fn load<B: Backend>(
    backend: &B,
    post_id: &RecordId,
) -> Result<Vec<CommentView>, ApiError> {
    backend
        .list_comments(post_id)
        .await
        .inspect_err(|err| tracing::error!(%post_id, %err, "failed to load comments"))
}

pub fn draft(
    session: Option<&Session>,
    limit: &ComposeLimit,
    post_id: &RecordId,
    draft: &str,
    now: DateTime<Utc>,
) -> Result<CommentView, ActionError> {
    let session = session.ok_or(ActionError::SignedOut)?;
    let message = limit.validate(draft)?;
    Ok(CommentView::provisional(post_id, session, message, now))
}

pub async fn submit<B: Backend>(
    backend: &B,
    provisional: &CommentView,
) -> Result<Submitted, ApiError> {
    let (Some(user_id), Some(post_id)) = (&provisional.user_id, &provisional.post_id) else {
        return Err(ApiError::InvalidInput { message: None });
    };
    let assigned = backend
        .create_comment(&NewComment {
            user_id: user_id.clone(),
            post_id: post_id.clone(),
            message: provisional.message.clone(),
        })
        .await
        .inspect_err(|err| tracing::error!(%post_id, %err, "failed to add comment"))?;

    Ok(match assigned {
        Some(id) => Submitted::Confirmed(CommentView {
            id,
            sync: SyncState::Confirmed,
            ..provisional.clone()
        }),
        None => {
            tracing::warn!(%post_id, "comment accepted without an id");
            Submitted::Unconfirmed
        }
    })
}

pub async fn update<B: Backend>(
    backend: &B,
    limit: &ComposeLimit,
    comment: &CommentView,
    draft: &str,
) -> Result<Edit<CommentView>, ActionError> {
    let trimmed = draft.trim();
    if !trimmed.is_empty() && trimmed == comment.message.trim() {
        return Ok(Edit::Unchanged);
    }
    let message = limit.validate(draft)?;
    backend
        .update_comment(
            &comment.id,
            &CommentUpdate {
                message: message.clone(),
            },
        )
        .await
        .inspect_err(|err| tracing::error!(id = %comment.id, %err, "failed to update comment"))?;
    Ok(Edit::Saved(comment.edited(message, Utc::now())))
}

pub async fn delete<B: Backend>(
    backend: &B,
    id: &RecordId,
    confirmed: bool,
) -> Result<Deletion, ApiError> {
    if !confirmed {
        return Ok(Deletion::Cancelled);
    }
    backend
        .delete_comment(id)
        .await
        .inspect_err(|err| tracing::error!(%id, %err, "failed to delete comment"))?;
    Ok(Deletion::Deleted(id.clone()))
}
