//! Signed-in home: compose box plus the feed with edit/delete and inline comments.

use api::posts;
use dioxus::prelude::*;
use store::{Feed, PostView};
use ui::{use_auth, use_gateway, PostForm, PostList};

#[component]
pub fn Dashboard() -> Element {
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

    let name = auth()
        .session
        .map(|s| s.display_name().to_string())
        .unwrap_or_else(|| "User".to_string());
    let status = loader.cloned();

    rsx! {
        div {
            class: "page-header",
            h1 { "Welcome back, {name}!" }
        }

        PostForm { feed }

        {match status {
            None => rsx! {
                div { class: "loading", "Loading posts..." }
            },
            Some(Err(_)) => rsx! {
                div {
                    class: "card error-state",
                    p { "Failed to fetch posts." }
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
                    editable: true,
                    with_comments: true,
                    empty: rsx! {
                        div { class: "card empty-state", p { "No posts available." } }
                    },
                }
            },
        }}
    }
}
