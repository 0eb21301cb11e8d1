//! # API crate — REST gateway and client-side operations for Chirp
//!
//! Everything that talks to the backend lives here. The UI crate calls the
//! operation modules; they call a [`Backend`], and return values that the
//! component applies to its own state once the request settles.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`backend`] | The [`Backend`] trait: one method per REST endpoint |
//! | [`client`] | [`ApiClient`], the `reqwest` implementation of [`Backend`] |
//! | [`models`] | Wire records, their normalization into `store` view models, request bodies |
//! | [`error`] | [`ApiError`] / [`ActionError`] and the user-facing alert strings |
//! | [`posts`] | Load, create (with resync), edit, delete posts |
//! | [`comments`] | Load, provisional create, edit, delete comments |
//! | [`auth`] | Register, login, logout, session revalidation |
//! | [`users`] | Profiles, a user's posts, renaming |
//! | [`outcome`] | [`Edit`] / [`Deletion`] results applied to a `store::Feed` |

pub mod auth;
pub mod backend;
pub mod client;
pub mod comments;
pub mod error;
pub mod models;
pub mod outcome;
pub mod posts;
pub mod users;

#[cfg(test)]
mod testing;

pub use auth::Revalidation;
pub use backend::Backend;
pub use client::ApiClient;
pub use comments::Submitted;
pub use error::{Action, ActionError, ApiError, ErrorCategory, Subject};
pub use outcome::{Deletion, Edit};
pub use posts::Created;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeBackend;
    use store::{ComposeLimit, Feed, MemorySessionStore, SessionStore};

    #[tokio::test]
    async fn test_register_login_post_edit_delete() {
        let backend = FakeBackend::new();
        let sessions = MemorySessionStore::default();
        let limit = ComposeLimit::default();

        auth::register(&backend, "Ann", "ann@x.com", "secret")
            .await
            .unwrap();
        assert!(sessions.load().is_none());

        let session = auth::login(&backend, &sessions, "ann@x.com", "secret")
            .await
            .unwrap();
        assert_eq!(sessions.load().as_ref(), Some(&session));

        let mut feed = Feed::from_items(posts::load(&backend).await.unwrap());
        assert!(feed.is_empty());

        posts::create(&backend, Some(&session), &limit, "hello")
            .await
            .unwrap()
            .apply(&mut feed);
        assert_eq!(feed.len(), 1);
        let post = feed.items()[0].clone();
        assert_eq!(post.message, "hello");
        assert_eq!(post.user_name, "Ann");
        assert!(post.is_owned_by(Some(&session)));
        assert!(!post.is_edited());

        posts::update(&backend, &limit, &post, "hello world")
            .await
            .unwrap()
            .apply(&mut feed);
        assert_eq!(feed.items()[0].message, "hello world");
        assert!(feed.items()[0].is_edited());

        posts::delete(&backend, &post.id, true)
            .await
            .unwrap()
            .apply(&mut feed);
        assert!(feed.is_empty());
        assert!(posts::load(&backend).await.unwrap().is_empty());

        auth::logout(&sessions);
        assert!(sessions.load().is_none());
    }
}
