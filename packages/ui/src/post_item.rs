use api::{posts, Action, Deletion, Edit, Subject};
use chrono::Utc;
use dioxus::prelude::*;
use store::models::initial;
use store::time::{full_date, post_age};
use store::{Feed, PostView, Surface};

use crate::auth::use_auth;
use crate::comment_list::CommentSection;
use crate::compose::{CharCounter, MessageInput};
use crate::gateway::use_gateway;
use crate::notify::{alert, confirm};

/// Confirmation shown once an edit reached the server.
fn saved_notice<T>(edit: &Edit<T>) -> Option<&'static str> {
    edit.is_saved().then_some("Post updated successfully!")
}

fn deleted_notice(deletion: &Deletion) -> Option<&'static str> {
    matches!(deletion, Deletion::Deleted(_)).then_some("Post deleted successfully!")
}

/// One post card. Edit and delete controls appear only for the author and only
/// when `editable`; `feed` receives the result of either.
#[component]
pub fn PostItem(
    post: PostView,
    feed: Signal<Feed<PostView>>,
    #[props(default)] editable: bool,
    #[props(default)] with_comments: bool,
    #[props(default)] full_timestamp: bool,
) -> Element {
    let auth = use_auth();
    let gateway = use_gateway();
    let limit = gateway.limit(Surface::PostEdit);
    let mut editing = use_signal(|| false);
    let mut draft = use_signal(String::new);
    let mut busy = use_signal(|| false);
    let mut show_comments = use_signal(|| false);
    let mut feed = feed;

    let owned = editable && post.is_owned_by(auth().session.as_ref());
    let timestamp = if full_timestamp {
        full_date(post.created_at)
    } else {
        post_age(post.created_at, Utc::now())
    };

    let start_edit = {
        let message = post.message.clone();
        move |_| {
            draft.set(message.clone());
            editing.set(true);
        }
    };

    let save_edit = {
        let post = post.clone();
        let gateway = gateway.clone();
        move |_| {
            let post = post.clone();
            let gateway = gateway.clone();
            spawn(async move {
                busy.set(true);
                match posts::update(&gateway.client, &limit, &post, &draft()).await {
                    Ok(edit) => {
                        let notice = saved_notice(&edit);
                        feed.with_mut(|list| edit.apply(list));
                        editing.set(false);
                        if let Some(notice) = notice {
                            alert(notice);
                        }
                    }
                    Err(err) => alert(&err.alert(Subject::Post, Action::Update)),
                }
                busy.set(false);
            });
        }
    };

    let delete_post = {
        let id = post.id.clone();
        move |_| {
            let id = id.clone();
            let gateway = gateway.clone();
            let confirmed = confirm("Are you sure you want to delete this post?");
            spawn(async move {
                busy.set(true);
                match posts::delete(&gateway.client, &id, confirmed).await {
                    Ok(deletion) => {
                        let notice = deleted_notice(&deletion);
                        feed.with_mut(|list| deletion.apply(list));
                        if let Some(notice) = notice {
                            alert(notice);
                        }
                    }
                    Err(err) => alert(&err.user_message(Subject::Post, Action::Delete)),
                }
                busy.set(false);
            });
        }
    };

    rsx! {
        article {
            class: "card post-item",
            header {
                class: "post-header",
                div { class: "avatar", "{initial(&post.user_name)}" }
                div {
                    class: "post-meta",
                    if let Some(user_id) = &post.user_id {
                        Link { class: "author", to: format!("/users/{user_id}"), "{post.user_name}" }
                    } else {
                        span { class: "author", "{post.user_name}" }
                    }
                    span { class: "timestamp", " · {timestamp}" }
                    if post.is_edited() {
                        span { class: "edited", " (edited)" }
                    }
                }
                if owned && !editing() {
                    div {
                        class: "post-actions",
                        button { class: "btn btn-link", disabled: busy(), onclick: start_edit, "Edit" }
                        button { class: "btn btn-link danger", disabled: busy(), onclick: delete_post, "Delete" }
                    }
                }
            }

            if editing() {
                div {
                    class: "post-edit",
                    MessageInput { value: draft, limit, placeholder: "Edit your post", disabled: busy() }
                    div {
                        class: "form-footer",
                        CharCounter { message: draft(), limit }
                        button {
                            class: "btn btn-secondary",
                            disabled: busy(),
                            onclick: move |_| editing.set(false),
                            "Cancel"
                        }
                        button {
                            class: "btn btn-primary",
                            disabled: busy() || !limit.can_submit(&draft()),
                            onclick: save_edit,
                            if busy() { "Saving..." } else { "Save" }
                        }
                    }
                }
            } else {
                p { class: "post-message", "{post.message}" }
            }

            footer {
                class: "post-footer",
                if with_comments {
                    button {
                        class: "btn btn-link",
                        onclick: move |_| show_comments.toggle(),
                        if show_comments() { "Hide comments" } else { "Show comments" }
                    }
                }
                Link { class: "btn btn-link", to: format!("/post/{}", post.id), "View post" }
            }

            if with_comments && show_comments() {
                CommentSection { post_id: post.id.clone() }
            }
        }
    }
}
