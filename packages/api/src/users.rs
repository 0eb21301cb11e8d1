//! Profile page operations: a user's card, their posts, and renaming yourself.

use store::compose::require;
use store::{PostView, RecordId, Session, SessionStore, UserProfile};

use crate::backend::Backend;
use crate::error::{ActionError, ApiError};
use crate::models::ProfileUpdate;

pub async fn profile<B: Backend>(backend: &B, id: &RecordId) -> Result<UserProfile, ApiError> {
    backend
        .get_user(id)
        .await
        .inspect_err(|err| tracing::error!(%id, %err, "failed to load profile"))
}

pub async fn posts_by<B: Backend>(backend: &B, id: &RecordId) -> Result<Vec<PostView>, ApiError> {
    backend
        .list_user_posts(id)
        .await
        .inspect_err(|err| tracing::error!(%id, %err, "failed to load user posts"))
}

/// Change the signed-in user's display name. The stored session is updated so
/// the navbar and new comments pick up the new name.
pub async fn rename<B: Backend, S: SessionStore>(
    backend: &B,
    sessions: &S,
    session: &Session,
    name: &str,
) -> Result<Session, ActionError> {
    require("Name", name)?;
    let name = name.trim().to_string();
    let returned = backend
        .update_user(
            &session.id,
            &ProfileUpdate {
                name: Some(name.clone()),
                email: None,
            },
        )
        .await
        .inspect_err(|err| tracing::error!(user = %session.id, %err, "failed to rename"))?;

    let updated = Session {
        name: returned.map_or(name, |profile| profile.name),
        ..session.clone()
    };
    sessions.save(&updated);
    Ok(updated)
}
