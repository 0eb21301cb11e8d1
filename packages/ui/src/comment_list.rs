use api::{comments, Action, Subject};
use chrono::Utc;
use dioxus::prelude::*;
use store::models::{comment_count_label, initial};
use store::time::comment_age;
use store::{CommentView, Feed, RecordId};

use crate::auth::use_auth;
use crate::comment_form::{CommentEditor, CommentForm};
use crate::gateway::use_gateway;
use crate::notify::{alert, confirm};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    Ready,
    Failed,
}

/// Comments of one post plus their load state.
#[derive(Clone, Copy, PartialEq)]
pub struct CommentFeed {
    pub feed: Signal<Feed<CommentView>>,
    pub state: Signal<LoadState>,
}

impl CommentFeed {
    pub fn count_label(&self) -> String {
        comment_count_label(self.feed.read().len())
    }
}

/// Load the comments of `post_id` once on mount.
pub fn use_comment_feed(post_id: RecordId) -> CommentFeed {
    let gateway = use_gateway();
    let mut feed = use_signal(Feed::<CommentView>::new);
    let mut state = use_signal(|| LoadState::Loading);

    let _loader = use_resource(move || {
        let gateway = gateway.clone();
        let post_id = post_id.clone();
        async move {
            match comments::load(&gateway.client, &post_id).await {
                Ok(list) => {
                    feed.set(Feed::from_items(list));
                    state.set(LoadState::Ready);
                }
                Err(_) => state.set(LoadState::Failed),
            }
        }
    });

    CommentFeed { feed, state }
}

/// Self-contained comment block: loads its own list.
#[component]
pub fn CommentSection(post_id: RecordId) -> Element {
    let comments = use_comment_feed(post_id.clone());
    rsx! {
        CommentThread { post_id, comments }
    }
}

/// Heading, form (signed-in only) and list for an already loaded [`CommentFeed`].
#[component]
pub fn CommentThread(post_id: RecordId, comments: CommentFeed) -> Element {
    let auth = use_auth();
    let count = comments.feed.read().len();

    rsx! {
        section {
            class: "comments",
            h3 { class: "comments-header", "Comments ({count})" }
            if auth().is_signed_in() {
                CommentForm { post_id: post_id.clone(), feed: comments.feed }
            } else {
                p {
                    class: "muted",
                    Link { to: "/login", "Log in" }
                    " to join the conversation."
                }
            }
            {match (comments.state)() {
                LoadState::Loading => rsx! { p { class: "muted", "Loading comments..." } },
                LoadState::Failed => rsx! { p { class: "error", "Failed to load comments." } },
                LoadState::Ready => rsx! { CommentList { feed: comments.feed } },
            }}
        }
    }
}

#[component]
pub fn CommentList(feed: Signal<Feed<CommentView>>) -> Element {
    let entries = feed.read().items().to_vec();

    rsx! {
        if entries.is_empty() {
            div { class: "no-comments", "No comments yet. Be the first to comment!" }
        } else {
            for comment in entries {
                CommentItem { key: "{comment.id}", comment, feed }
            }
        }
    }
}

#[component]
fn CommentItem(comment: CommentView, feed: Signal<Feed<CommentView>>) -> Element {
    let auth = use_auth();
    let gateway = use_gateway();
    let mut editing = use_signal(|| false);
    let mut deleting = use_signal(|| false);
    let mut feed = feed;

    let owned = comment.is_owned_by(auth().session.as_ref());
    let age = comment_age(comment.created_at, Utc::now());

    let delete_comment = {
        let id = comment.id.clone();
        move |_| {
            let id = id.clone();
            let gateway = gateway.clone();
            let confirmed = confirm("Are you sure you want to delete this comment?");
            spawn(async move {
                deleting.set(true);
                match comments::delete(&gateway.client, &id, confirmed).await {
                    Ok(deletion) => feed.with_mut(|list| deletion.apply(list)),
                    Err(err) => alert(&err.user_message(Subject::Comment, Action::Delete)),
                }
                deleting.set(false);
            });
        }
    };

    let class = if comment.is_provisional() {
        "comment-card provisional"
    } else {
        "comment-card"
    };

    rsx! {
        div {
            class: "{class}",
            div {
                class: "comment-header",
                div { class: "avatar small", "{initial(&comment.author_name)}" }
                span { class: "author", "{comment.author_name}" }
                span { class: "timestamp", " · {age}" }
                if comment.is_edited() {
                    span { class: "edited", " (edited)" }
                }
                if owned && !editing() {
                    div {
                        class: "comment-actions",
                        button {
                            class: "btn btn-link",
                            disabled: deleting(),
                            onclick: move |_| editing.set(true),
                            "Edit"
                        }
                        button {
                            class: "btn btn-link danger",
                            disabled: deleting(),
                            onclick: delete_comment,
                            "Delete"
                        }
                    }
                }
            }
            if editing() {
                CommentEditor {
                    comment: comment.clone(),
                    feed,
                    on_done: move |_| editing.set(false),
                }
            } else {
                p { class: "comment-message", "{comment.message}" }
            }
        }
    }
}
