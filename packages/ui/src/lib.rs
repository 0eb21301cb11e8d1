//! This crate contains all shared UI for the workspace.
//!
//! Components read the backend client and the session from context, so the app
//! must be wrapped in [`GatewayProvider`] and then [`AuthProvider`].

mod gateway;
pub use gateway::{make_sessions, use_gateway, Gateway, GatewayProvider, Sessions};

mod auth;
pub use auth::{use_auth, AuthProvider, AuthState, LogoutButton};

pub mod notify;

mod navbar;
pub use navbar::Navbar;

mod compose;
pub use compose::{CharCounter, MessageInput};

mod post_form;
pub use post_form::PostForm;

mod post_item;
pub use post_item::PostItem;

mod post_list;
pub use post_list::PostList;

mod comment_form;
pub use comment_form::{CommentEditor, CommentForm};

mod comment_list;
pub use comment_list::{
    use_comment_feed, CommentFeed, CommentList, CommentSection, CommentThread, LoadState,
};

mod profile;
pub use profile::ProfileCard;
