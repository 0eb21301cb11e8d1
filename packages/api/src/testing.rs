//! In-memory [`Backend`] for tests.
//!
//! Behaves like a small version of the real server (ids are assigned, authors are
//! resolved, unknown ids are 404, `/auth/me` is 401 until someone logs in) and
//! records every call as `"METHOD /path"` so tests can assert that nothing was sent.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use chrono::{Duration, Utc};
use store::{CommentView, PostView, RecordId, Session, SyncState, UserProfile};

use crate::backend::Backend;
use crate::error::ApiError;
use crate::models::{
    CommentUpdate, Credentials, NewComment, NewPost, PostUpdate, ProfileUpdate, Registration,
};

pub const PASSWORD: &str = "secret";

pub fn ann() -> Session {
    Session {
        id: RecordId::from(7),
        name: "Ann".into(),
        email: "ann@x.com".into(),
    }
}

pub fn bo() -> Session {
    Session {
        id: RecordId::from(8),
        name: "Bo".into(),
        email: "bo@x.com".into(),
    }
}

#[derive(Default)]
struct State {
    users: Vec<(Session, String)>,
    posts: Vec<PostView>,
    comments: Vec<CommentView>,
    signed_in: Option<RecordId>,
    next_id: i64,
    failures: HashMap<String, ApiError>,
    calls: Vec<String>,
    omit_created_ids: bool,
}

impl State {
    fn next_id(&mut self) -> RecordId {
        self.next_id += 1;
        RecordId::from(100 + self.next_id)
    }

    fn user(&self, id: &RecordId) -> Option<&Session> {
        self.users.iter().map(|(s, _)| s).find(|s| &s.id == id)
    }

    fn author_name(&self, id: &RecordId) -> String {
        self.user(id)
            .map(|s| s.name.clone())
            .unwrap_or_else(|| store::models::UNKNOWN_AUTHOR.to_string())
    }
}

#[derive(Default)]
pub struct FakeBackend {
    state: Mutex<State>,
}

fn not_found() -> ApiError {
    ApiError::from_status(404, None)
}

impl FakeBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// A backend with one registered user (password [`PASSWORD`]).
    pub fn with_user(session: Session) -> Self {
        let backend = Self::new();
        backend.add_user(session);
        backend
    }

    pub fn add_user(&self, session: Session) {
        self.lock().users.push((session, PASSWORD.to_string()));
    }

    pub fn sign_in(&self, id: &RecordId) {
        self.lock().signed_in = Some(id.clone());
    }

    /// Make every later `call` fail with `err`.
    pub fn fail(&self, call: &str, err: ApiError) {
        self.lock().failures.insert(call.to_string(), err);
    }

    /// Answer creates without the assigned id.
    pub fn omit_created_ids(&self) {
        self.lock().omit_created_ids = true;
    }

    pub fn calls(&self) -> Vec<String> {
        self.lock().calls.clone()
    }

    /// Insert a post directly, without recording a call.
    pub fn seed_post(&self, author: &Session, message: &str) -> PostView {
        let mut state = self.lock();
        let post = PostView {
            id: state.next_id(),
            message: message.to_string(),
            user_id: Some(author.id.clone()),
            user_name: author.name.clone(),
            user_email: Some(author.email.clone()),
            created_at: Utc::now() - Duration::hours(1),
            updated_at: None,
        };
        state.posts.push(post.clone());
        post
    }

    pub fn seed_comment(&self, post_id: &RecordId, author: &Session, message: &str) -> CommentView {
        let mut state = self.lock();
        let comment = CommentView {
            id: state.next_id(),
            post_id: Some(post_id.clone()),
            message: message.to_string(),
            user_id: Some(author.id.clone()),
            author_name: author.name.clone(),
            created_at: Utc::now() - Duration::hours(1),
            updated_at: None,
            sync: SyncState::Confirmed,
        };
        state.comments.push(comment.clone());
        comment
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap()
    }

    /// Record `call` and return the state, or the failure injected for it.
    fn call(&self, call: String) -> Result<MutexGuard<'_, State>, ApiError> {
        let mut state = self.lock();
        state.calls.push(call.clone());
        if let Some(err) = state.failures.get(&call).cloned() {
            return Err(err);
        }
        Ok(state)
    }
}

impl Backend for FakeBackend {
    async fn list_posts(&self) -> Result<Vec<PostView>, ApiError> {
        Ok(self.call("GET /posts".into())?.posts.clone())
    }

    async fn get_post(&self, id: &RecordId) -> Result<PostView, ApiError> {
        let state = self.call(format!("GET /posts/{id}"))?;
        state
            .posts
            .iter()
            .find(|p| &p.id == id)
            .cloned()
            .ok_or_else(not_found)
    }

    async fn create_post(&self, post: &NewPost) -> Result<Option<PostView>, ApiError> {
        let mut state = self.call("POST /posts".into())?;
        let author = state.user(&post.posts_user_id).cloned();
        let view = PostView {
            id: state.next_id(),
            message: post.posts_message.clone(),
            user_id: Some(post.posts_user_id.clone()),
            user_name: state.author_name(&post.posts_user_id),
            user_email: author.map(|a| a.email),
            created_at: Utc::now(),
            updated_at: None,
        };
        state.posts.push(view.clone());
        Ok((!state.omit_created_ids).then_some(view))
    }

    async fn update_post(
        &self,
        id: &RecordId,
        update: &PostUpdate,
    ) -> Result<Option<String>, ApiError> {
        let mut state = self.call(format!("PUT /posts/{id}"))?;
        let post = state
            .posts
            .iter_mut()
            .find(|p| &p.id == id)
            .ok_or_else(not_found)?;
        post.message = update.posts_message.clone();
        post.updated_at = Some(Utc::now());
        Ok(Some(post.message.clone()))
    }

    async fn delete_post(&self, id: &RecordId) -> Result<(), ApiError> {
        let mut state = self.call(format!("DELETE /posts/{id}"))?;
        let index = state
            .posts
            .iter()
            .position(|p| &p.id == id)
            .ok_or_else(not_found)?;
        state.posts.remove(index);
        Ok(())
    }

    async fn list_comments(&self, post_id: &RecordId) -> Result<Vec<CommentView>, ApiError> {
        let state = self.call(format!("GET /comments/post/{post_id}"))?;
        Ok(state
            .comments
            .iter()
            .filter(|c| c.post_id.as_ref() == Some(post_id))
            .cloned()
            .collect())
    }

    async fn create_comment(&self, comment: &NewComment) -> Result<Option<RecordId>, ApiError> {
        let mut state = self.call("POST /comments".into())?;
        let id = state.next_id();
        let view = CommentView {
            id: id.clone(),
            post_id: Some(comment.post_id.clone()),
            message: comment.message.clone(),
            user_id: Some(comment.user_id.clone()),
            author_name: state.author_name(&comment.user_id),
            created_at: Utc::now(),
            updated_at: None,
            sync: SyncState::Confirmed,
        };
        state.comments.push(view);
        Ok((!state.omit_created_ids).then_some(id))
    }

    async fn update_comment(&self, id: &RecordId, update: &CommentUpdate) -> Result<(), ApiError> {
        let mut state = self.call(format!("PUT /comments/{id}"))?;
        let comment = state
            .comments
            .iter_mut()
            .find(|c| &c.id == id)
            .ok_or_else(not_found)?;
        comment.message = update.message.clone();
        comment.updated_at = Some(Utc::now());
        Ok(())
    }

    async fn delete_comment(&self, id: &RecordId) -> Result<(), ApiError> {
        let mut state = self.call(format!("DELETE /comments/{id}"))?;
        let before = state.comments.len();
        state.comments.retain(|c| &c.id != id);
        if state.comments.len() == before {
            return Err(not_found());
        }
        Ok(())
    }

    async fn register(&self, registration: &Registration) -> Result<(), ApiError> {
        let mut state = self.call("POST /auth/register".into())?;
        if state.users.iter().any(|(s, _)| s.email == registration.email) {
            return Err(ApiError::from_status(
                400,
                Some("User already exists".into()),
            ));
        }
        let session = Session {
            id: state.next_id(),
            name: registration.name.clone(),
            email: registration.email.clone(),
        };
        state.users.push((session, registration.password.clone()));
        Ok(())
    }

    async fn login(&self, credentials: &Credentials) -> Result<Session, ApiError> {
        let mut state = self.call("POST /auth/login".into())?;
        let session = state
            .users
            .iter()
            .find(|(s, password)| s.email == credentials.email && password == &credentials.password)
            .map(|(s, _)| s.clone())
            .ok_or_else(|| ApiError::from_status(401, None))?;
        state.signed_in = Some(session.id.clone());
        Ok(session)
    }

    async fn current_user(&self) -> Result<Session, ApiError> {
        let state = self.call("GET /auth/me".into())?;
        state
            .signed_in
            .as_ref()
            .and_then(|id| state.user(id))
            .cloned()
            .ok_or_else(|| ApiError::from_status(401, None))
    }

    async fn get_user(&self, id: &RecordId) -> Result<UserProfile, ApiError> {
        let state = self.call(format!("GET /users/{id}"))?;
        state
            .user(id)
            .map(|s| UserProfile {
                id: s.id.clone(),
                name: s.name.clone(),
                email: s.email.clone(),
                created_at: None,
            })
            .ok_or_else(not_found)
    }

    async fn update_user(
        &self,
        id: &RecordId,
        update: &ProfileUpdate,
    ) -> Result<Option<UserProfile>, ApiError> {
        let mut state = self.call(format!("PUT /users/{id}"))?;
        let (session, _) = state
            .users
            .iter_mut()
            .find(|(s, _)| &s.id == id)
            .ok_or_else(not_found)?;
        if let Some(name) = &update.name {
            session.name = name.clone();
        }
        if let Some(email) = &update.email {
            session.email = email.clone();
        }
        Ok(Some(UserProfile {
            id: session.id.clone(),
            name: session.name.clone(),
            email: session.email.clone(),
            created_at: None,
        }))
    }

    async fn list_user_posts(&self, id: &RecordId) -> Result<Vec<PostView>, ApiError> {
        let state = self.call(format!("GET /users/{id}/posts"))?;
        Ok(state
            .posts
            .iter()
            .filter(|p| p.user_id.as_ref() == Some(id))
            .cloned()
            .collect())
    }
}
