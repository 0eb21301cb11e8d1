use dioxus::prelude::*;
use store::{Feed, PostView};

use crate::post_item::PostItem;

/// Renders `feed` in order, or `empty` when there is nothing to show.
#[component]
pub fn PostList(
    feed: Signal<Feed<PostView>>,
    empty: Element,
    #[props(default)] editable: bool,
    #[props(default)] with_comments: bool,
) -> Element {
    let posts = feed.read().items().to_vec();

    rsx! {
        if posts.is_empty() {
            {empty}
        } else {
            div {
                class: "post-list",
                for post in posts {
                    PostItem {
                        key: "{post.id}",
                        post,
                        feed,
                        editable,
                        with_comments,
                    }
                }
            }
        }
    }
}
