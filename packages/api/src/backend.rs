//! # The REST surface the client talks to
//!
//! [`Backend`] has one method per endpoint. [`crate::ApiClient`] implements it over
//! HTTP; tests implement it in memory so the post, comment and auth operations can
//! be exercised without a server and can assert which calls were (not) made.
//!
//! | Method | Endpoint |
//! |--------|----------|
//! | [`Backend::list_posts`] | `GET /posts` |
//! | [`Backend::get_post`] | `GET /posts/:id` |
//! | [`Backend::create_post`] | `POST /posts` |
//! | [`Backend::update_post`] | `PUT /posts/:id` |
//! | [`Backend::delete_post`] | `DELETE /posts/:id` |
//! | [`Backend::list_comments`] | `GET /comments/post/:postId` |
//! | [`Backend::create_comment`] | `POST /comments` |
//! | [`Backend::update_comment`] | `PUT /comments/:id` |
//! | [`Backend::delete_comment`] | `DELETE /comments/:id` |
//! | [`Backend::register`] | `POST /auth/register` |
//! | [`Backend::login`] | `POST /auth/login` |
//! | [`Backend::current_user`] | `GET /auth/me` |
//! | [`Backend::get_user`] | `GET /users/:id` |
//! | [`Backend::update_user`] | `PUT /users/:id` |
//! | [`Backend::list_user_posts`] | `GET /users/:id/posts` |
//!
//! Every method already returns `store` view models: wire records are
//! normalized by the implementation, never by callers.

use std::future::Future;

use store::{CommentView, PostView, RecordId, Session, UserProfile};

use crate::error::ApiError;
use crate::models::{
    CommentUpdate, Credentials, NewComment, NewPost, PostUpdate, ProfileUpdate, Registration,
};

pub trait Backend {
    fn list_posts(&self) -> impl Future<Output = Result<Vec<PostView>, ApiError>>;
    fn get_post(&self, id: &RecordId) -> impl Future<Output = Result<PostView, ApiError>>;
    /// The created record, when the response carried one with an id.
    fn create_post(
        &self,
        post: &NewPost,
    ) -> impl Future<Output = Result<Option<PostView>, ApiError>>;
    /// The saved message, when the response echoed one.
    fn update_post(
        &self,
        id: &RecordId,
        update: &PostUpdate,
    ) -> impl Future<Output = Result<Option<String>, ApiError>>;
    fn delete_post(&self, id: &RecordId) -> impl Future<Output = Result<(), ApiError>>;

    fn list_comments(
        &self,
        post_id: &RecordId,
    ) -> impl Future<Output = Result<Vec<CommentView>, ApiError>>;
    /// The id the server assigned, when the response carried one.
    fn create_comment(
        &self,
        comment: &NewComment,
    ) -> impl Future<Output = Result<Option<RecordId>, ApiError>>;
    fn update_comment(
        &self,
        id: &RecordId,
        update: &CommentUpdate,
    ) -> impl Future<Output = Result<(), ApiError>>;
    fn delete_comment(&self, id: &RecordId) -> impl Future<Output = Result<(), ApiError>>;

    fn register(&self, registration: &Registration)
        -> impl Future<Output = Result<(), ApiError>>;
    fn login(&self, credentials: &Credentials) -> impl Future<Output = Result<Session, ApiError>>;
    fn current_user(&self) -> impl Future<Output = Result<Session, ApiError>>;

    fn get_user(&self, id: &RecordId) -> impl Future<Output = Result<UserProfile, ApiError>>;
    /// The updated profile, when the response carried one.
    fn update_user(
        &self,
        id: &RecordId,
        update: &ProfileUpdate,
    ) -> impl Future<Output = Result<Option<UserProfile>, ApiError>>;
    fn list_user_posts(
        &self,
        id: &RecordId,
    ) -> impl Future<Output = Result<Vec<PostView>, ApiError>>;
}
