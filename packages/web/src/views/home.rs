//! Public feed: every post, read-only.

use api::posts;
use dioxus::prelude::*;
use store::{Feed, PostView};
use ui::{use_auth, use_gateway, PostList};

use crate::Route;

#[component]
pub fn Home() -> Element {
    let auth = use_auth();
    let gateway = use_gateway();
    let mut feed = use_signal(Feed::<PostView>::new);

    let mut loader = use_resource(move || {
        let gateway = gateway.clone();
        async move {
            let list = posts::load(&gateway.client).await?;
            feed.set(Feed::from_items(list));
            Ok::<(), api::ApiError>(())
        }
    });

    let count = feed.read().len();
    let heading = if count > 0 {
        format!("{count} posts")
    } else {
        "Welcome to Chirp".to_string()
    };
    let status = loader.cloned();

    rsx! {
        div {
            class: "page-header",
            h1 { "Home" }
            p { class: "muted", "{heading}" }
        }

        {match status {
            None => rsx! {
                div { class: "loading", "Loading posts..." }
            },
            Some(Err(_)) => rsx! {
                div {
                    class: "card error-state",
                    p { "Failed to load posts. Please try again." }
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| loader.restart(),
                        "Try Again"
                    }
                }
            },
            Some(Ok(())) => rsx! {
                PostList {
                    feed,
                    empty: rsx! {
                        div {
                            class: "card empty-state",
                            h2 { "Welcome to Chirp!" }
                            p { "No posts to show yet. Be the first to share something!" }
                            if auth().is_signed_in() {
                                Link { class: "btn btn-primary", to: Route::Dashboard {}, "Create Your First Post" }
                            } else {
                                div {
                                    class: "empty-actions",
                                    Link { class: "btn btn-primary", to: Route::Register {}, "Sign Up" }
                                    Link { class: "btn btn-secondary", to: Route::Login {}, "Sign In" }
                                }
                            }
                        }
                    },
                }
            },
        }}
    }
}
