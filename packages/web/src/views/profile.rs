//! A user's card and their posts.

use api::{users, ApiError, ErrorCategory};
use dioxus::prelude::*;
use store::models::UNKNOWN_AUTHOR;
use store::{Feed, PostView, RecordId, UserProfile};
use ui::{use_gateway, PostList, ProfileCard};

#[component]
pub fn Profile(id: String) -> Element {
    rsx! {
        ProfileBody { key: "{id}", id: RecordId::parse(&id) }
    }
}

#[component]
fn ProfileBody(id: RecordId) -> Element {
    let gateway = use_gateway();
    let mut feed = use_signal(Feed::<PostView>::new);

    let loader = use_resource(move || {
        let gateway = gateway.clone();
        let id = id.clone();
        async move {
            let profile = users::profile(&gateway.client, &id).await?;
            feed.set(Feed::from_items(users::posts_by(&gateway.client, &id).await?));
            Ok::<UserProfile, ApiError>(profile)
        }
    });

    rsx! {
        {match loader.cloned() {
            None => rsx! {
                div { class: "loading", "Loading profile..." }
            },
            Some(Err(err)) if err.category() == ErrorCategory::NotFound => rsx! {
                div { class: "card error-state", p { "User not found" } }
            },
            Some(Err(_)) => rsx! {
                div { class: "card error-state", p { "Failed to load profile. Please try again." } }
            },
            Some(Ok(profile)) => rsx! {
                ProfilePage { initial: profile, feed }
            },
        }}
    }
}

#[component]
fn ProfilePage(initial: UserProfile, feed: Signal<Feed<PostView>>) -> Element {
    let profile = use_signal(move || initial);
    let name = match profile.read().name.trim() {
        "" => UNKNOWN_AUTHOR.to_string(),
        name => name.to_string(),
    };

    rsx! {
        ProfileCard { profile }
        h2 { class: "section-title", "Posts by {name}" }
        PostList {
            feed,
            editable: true,
            empty: rsx! {
                div { class: "card empty-state", p { "No posts yet." } }
            },
        }
    }
}
