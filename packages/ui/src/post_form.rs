use api::{posts, Action, Subject};
use dioxus::prelude::*;
use store::{Feed, PostView, Surface};

use crate::auth::use_auth;
use crate::compose::{CharCounter, MessageInput};
use crate::gateway::use_gateway;
use crate::notify::alert;

/// "What's on your mind?" box. On success `feed` is resynced.
#[component]
pub fn PostForm(feed: Signal<Feed<PostView>>) -> Element {
    let auth = use_auth();
    let gateway = use_gateway();
    let limit = gateway.limit(Surface::NewPost);
    let mut message = use_signal(String::new);
    let mut submitting = use_signal(|| false);
    let mut feed = feed;

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if submitting() {
            return;
        }
        let gateway = gateway.clone();
        spawn(async move {
            submitting.set(true);
            let session = auth().session;
            let draft = message();
            match posts::create(&gateway.client, session.as_ref(), &limit, &draft).await {
                Ok(created) => {
                    feed.with_mut(|list| created.apply(list));
                    message.set(String::new());
                }
                Err(err) => alert(&err.alert(Subject::Post, Action::Create)),
            }
            submitting.set(false);
        });
    };

    rsx! {
        form {
            class: "card post-form",
            onsubmit: handle_submit,
            MessageInput {
                value: message,
                limit,
                placeholder: "What's on your mind?",
                disabled: submitting(),
            }
            div {
                class: "form-footer",
                CharCounter { message: message(), limit }
                button {
                    class: "btn btn-primary",
                    r#type: "submit",
                    disabled: submitting() || !limit.can_submit(&message()),
                    if submitting() { "Posting..." } else { "Post" }
                }
            }
        }
    }
}
