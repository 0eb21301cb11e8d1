//! # Authentication flows
//!
//! Register, login, logout and session revalidation. The session itself is
//! persisted through a [`SessionStore`]; these functions only decide when to
//! write or clear it.
//!
//! ## Revalidation
//!
//! A cached session is only a claim. [`revalidate`] asks `GET /auth/me`:
//!
//! | Response | Result | Stored session |
//! |----------|--------|----------------|
//! | 2xx with a user | [`Revalidation::Valid`] | refreshed (name, email) |
//! | 401 / 403 | [`Revalidation::Revoked`] | cleared |
//! | anything else | [`Revalidation::Unknown`] | kept |
//!
//! "Anything else" includes 404, for backends that do not implement the endpoint.

use store::compose::require;
use store::{Session, SessionStore};

use crate::backend::Backend;
use crate::error::{ActionError, ApiError};
use crate::models::{Credentials, Registration};

#[derive(Debug, Clone, PartialEq)]
pub enum Revalidation {
    Valid(Session),
    Revoked,
    Unknown,
}

pub async fn register<B: Backend>(
    backend: &B,
    name: &str,
    email: &str,
    password: &str,
) -> Result<(), ActionError> {
    require("Name", name)?;
    require("Email", email)?;
    require("Password", password)?;
    backend
        .register(&Registration {
            name: name.trim().to_string(),
            email: email.trim().to_string(),
            password: password.to_string(),
        })
        .await
        .inspect_err(|err| tracing::error!(%err, "registration failed"))?;
    tracing::info!(email = %email.trim(), "registered");
    Ok(())
}

pub async fn login<B: Backend, S: SessionStore>(
    backend: &B,
    sessions: &S,
    email: &str,
    password: &str,
) -> Result<Session, ActionError> {
    require("Email", email)?;
    require("Password", password)?;
    let session = backend
        .login(&Credentials {
            email: email.trim().to_string(),
            password: password.to_string(),
        })
        .await
        .inspect_err(|err| tracing::error!(%err, "login failed"))?;
    sessions.save(&session);
    tracing::info!(user = %session.id, "signed in");
    Ok(session)
}

pub fn logout<S: SessionStore>(sessions: &S) {
    sessions.clear();
    tracing::info!("signed out");
}

pub async fn revalidate<B: Backend, S: SessionStore>(
    backend: &B,
    sessions: &S,
    cached: &Session,
) -> Revalidation {
    match backend.current_user().await {
        Ok(current) => {
            if current.id != cached.id {
                tracing::warn!(cached = %cached.id, current = %current.id, "session belongs to another user");
            }
            sessions.save(&current);
            Revalidation::Valid(current)
        }
        Err(err) if err.revokes_session() => {
            tracing::warn!(user = %cached.id, %err, "session rejected by backend");
            sessions.clear();
            Revalidation::Revoked
        }
        Err(err) => {
            log_unverified(&err);
            Revalidation::Unknown
        }
    }
}

fn log_unverified(err: &ApiError) {
    match err {
        ApiError::NotFound { .. } => tracing::debug!("session check endpoint not available"),
        _ => tracing::warn!(%err, "could not verify session"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Action, Subject};
    use crate::testing::{ann, FakeBackend};
    use store::{MemorySessionStore, ValidationError};

    #[tokio::test]
    async fn test_register_then_login() {
        let backend = FakeBackend::new();
        let sessions = MemorySessionStore::default();

        register(&backend, "Ann", "ann@x.com", "secret").await.unwrap();
        assert!(sessions.load().is_none());

        let session = login(&backend, &sessions, "ann@x.com", "secret")
            .await
            .unwrap();
        assert_eq!(session.name, "Ann");
        assert_eq!(sessions.load(), Some(session));
    }

    #[tokio::test]
    async fn test_blank_fields_send_nothing() {
        let backend = FakeBackend::new();
        let err = register(&backend, "Ann", " ", "secret").await.unwrap_err();
        assert_eq!(err, ActionError::Invalid(ValidationError::MissingField("Email")));
        assert!(backend.calls().is_empty());
    }

    #[tokio::test]
    async fn test_wrong_password_keeps_signed_out() {
        let backend = FakeBackend::with_user(ann());
        let sessions = MemorySessionStore::default();

        let err = login(&backend, &sessions, "ann@x.com", "nope")
            .await
            .unwrap_err();
        assert_eq!(
            err.alert(Subject::Account, Action::Login),
            "Invalid credentials"
        );
        assert!(sessions.load().is_none());
    }

    #[tokio::test]
    async fn test_logout_clears_store() {
        let sessions = MemorySessionStore::default();
        sessions.save(&ann());
        logout(&sessions);
        assert!(sessions.load().is_none());
    }

    #[tokio::test]
    async fn test_revalidate_refreshes_name() {
        let mut renamed = ann();
        renamed.name = "Ann B".into();
        let backend = FakeBackend::with_user(renamed.clone());
        backend.sign_in(&renamed.id);
        let sessions = MemorySessionStore::default();
        sessions.save(&ann());

        let outcome = revalidate(&backend, &sessions, &ann()).await;
        assert_eq!(outcome, Revalidation::Valid(renamed.clone()));
        assert_eq!(sessions.load(), Some(renamed));
    }

    #[tokio::test]
    async fn test_revalidate_revokes_on_unauthorized() {
        let backend = FakeBackend::with_user(ann());
        let sessions = MemorySessionStore::default();
        sessions.save(&ann());

        let outcome = revalidate(&backend, &sessions, &ann()).await;
        assert_eq!(outcome, Revalidation::Revoked);
        assert!(sessions.load().is_none());
    }

    #[tokio::test]
    async fn test_revalidate_keeps_session_when_unverifiable() {
        let backend = FakeBackend::with_user(ann());
        let sessions = MemorySessionStore::default();
        sessions.save(&ann());

        backend.fail("GET /auth/me", ApiError::from_status(404, None));
        assert_eq!(
            revalidate(&backend, &sessions, &ann()).await,
            Revalidation::Unknown
        );

        backend.fail("GET /auth/me", ApiError::Transport("offline".into()));
        assert_eq!(
            revalidate(&backend, &sessions, &ann()).await,
            Revalidation::Unknown
        );
        assert_eq!(sessions.load(), Some(ann()));
    }
}
