//! A single post with its full timestamp, comment count and comment thread.

use api::{posts, ApiError, ErrorCategory};
use dioxus::prelude::*;
use store::{Feed, PostView, RecordId};
use ui::{use_comment_feed, use_gateway, CommentThread, PostItem};

use crate::Route;

#[component]
pub fn PostDetail(id: String) -> Element {
    rsx! {
        PostDetailBody { key: "{id}", id: RecordId::parse(&id) }
    }
}

/// Keyed by post id so navigating between posts remounts and reloads.
#[component]
fn PostDetailBody(id: RecordId) -> Element {
    let gateway = use_gateway();
    let nav = use_navigator();
    let comments = use_comment_feed(id.clone());
    let mut feed = use_signal(Feed::<PostView>::new);

    let loader = use_resource({
        let id = id.clone();
        move || {
            let gateway = gateway.clone();
            let id = id.clone();
            async move {
                let post = posts::get(&gateway.client, &id).await?;
                feed.set(Feed::from_items(vec![post]));
                Ok::<(), ApiError>(())
            }
        }
    });

    let status = loader.cloned();
    let post = feed.read().items().first().cloned();

    rsx! {
        Link { class: "btn btn-link back-link", to: Route::Home {}, "← Back to Feed" }

        {match (status, post) {
            (None, _) => rsx! {
                div { class: "loading", "Loading post..." }
            },
            (Some(Err(err)), _) => {
                let message = if err.category() == ErrorCategory::NotFound {
                    "Post not found".to_string()
                } else {
                    "Failed to load post. Please try again.".to_string()
                };
                rsx! {
                    div { class: "card error-state", p { "{message}" } }
                }
            }
            (Some(Ok(())), None) => {
                // Deleted from this page.
                nav.replace(Route::Home {});
                rsx! {}
            }
            (Some(Ok(())), Some(post)) => rsx! {
                PostItem {
                    post,
                    feed,
                    editable: true,
                    full_timestamp: true,
                }
                p { class: "muted comment-count", "{comments.count_label()}" }
                CommentThread { post_id: id.clone(), comments }
            },
        }}
    }
}
