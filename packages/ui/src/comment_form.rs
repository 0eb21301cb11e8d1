use api::{comments, Action, Subject, Submitted};
use chrono::Utc;
use dioxus::prelude::*;
use store::{CommentView, Feed, RecordId, Surface};

use crate::auth::use_auth;
use crate::compose::{CharCounter, MessageInput};
use crate::gateway::use_gateway;
use crate::notify::alert;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum KeyAction {
    Submit,
    Cancel,
    Ignore,
}

/// Ctrl+Enter (Cmd+Enter on macOS) submits. Escape only means something while
/// editing an existing comment; in the new-comment box the draft is kept.
fn key_action(key: &Key, ctrl: bool, meta: bool, editing: bool) -> KeyAction {
    match key {
        Key::Enter if ctrl || meta => KeyAction::Submit,
        Key::Escape if editing => KeyAction::Cancel,
        _ => KeyAction::Ignore,
    }
}

fn action_for(evt: &KeyboardEvent, editing: bool) -> KeyAction {
    let modifiers = evt.modifiers();
    key_action(&evt.key(), modifiers.ctrl(), modifiers.meta(), editing)
}

/// New-comment box. The comment appears immediately as a provisional entry and
/// is confirmed or dropped once the backend answers.
#[component]
pub fn CommentForm(post_id: RecordId, feed: Signal<Feed<CommentView>>) -> Element {
    let auth = use_auth();
    let gateway = use_gateway();
    let limit = gateway.limit(Surface::Comment);
    let mut message = use_signal(String::new);
    let mut submitting = use_signal(|| false);
    let mut feed = feed;

    let submit = use_callback(move |_: ()| {
        if submitting() {
            return;
        }
        let entry = match comments::draft(
            auth().session.as_ref(),
            &limit,
            &post_id,
            &message(),
            Utc::now(),
        ) {
            Ok(entry) => entry,
            Err(err) => {
                alert(&err.alert(Subject::Comment, Action::Create));
                return;
            }
        };
        let placeholder = feed.with_mut(|list| list.push_provisional(entry.clone()));
        message.set(String::new());
        submitting.set(true);

        let gateway = gateway.clone();
        spawn(async move {
            match comments::submit(&gateway.client, &entry).await {
                Ok(Submitted::Unconfirmed) => {
                    if let Some(post_id) = &entry.post_id {
                        if let Ok(fresh) = comments::load(&gateway.client, post_id).await {
                            feed.with_mut(|list| list.replace_all(fresh));
                        }
                    }
                }
                Ok(submitted) => feed.with_mut(|list| submitted.apply(list, &placeholder)),
                Err(err) => {
                    feed.with_mut(|list| list.discard(&placeholder));
                    message.set(entry.message.clone());
                    alert(&err.user_message(Subject::Comment, Action::Create));
                }
            }
            submitting.set(false);
        });
    });

    rsx! {
        form {
            class: "comment-form",
            onsubmit: move |evt: FormEvent| {
                evt.prevent_default();
                submit.call(());
            },
            MessageInput {
                value: message,
                limit,
                rows: 2,
                placeholder: "Write a comment... (Ctrl+Enter to submit)",
                disabled: submitting(),
                onkeydown: move |evt: KeyboardEvent| {
                    if action_for(&evt, false) == KeyAction::Submit {
                        evt.prevent_default();
                        submit.call(());
                    }
                },
            }
            div {
                class: "form-footer",
                CharCounter { message: message(), limit }
                button {
                    class: "btn btn-primary",
                    r#type: "submit",
                    disabled: submitting() || !limit.can_submit(&message()),
                    if submitting() { "Posting..." } else { "Comment" }
                }
            }
        }
    }
}

/// Inline editor for an existing comment. Escape cancels, Ctrl/Cmd+Enter saves.
#[component]
pub fn CommentEditor(
    comment: CommentView,
    feed: Signal<Feed<CommentView>>,
    on_done: EventHandler<()>,
) -> Element {
    let gateway = use_gateway();
    let limit = gateway.limit(Surface::Comment);
    let message = comment.message.clone();
    let mut draft = use_signal(move || message);
    let mut saving = use_signal(|| false);
    let mut feed = feed;

    let save = use_callback(move |_: ()| {
        if saving() {
            return;
        }
        let comment = comment.clone();
        let gateway = gateway.clone();
        spawn(async move {
            saving.set(true);
            match comments::update(&gateway.client, &limit, &comment, &draft()).await {
                Ok(edit) => {
                    feed.with_mut(|list| edit.apply(list));
                    on_done.call(());
                }
                Err(err) => alert(&err.alert(Subject::Comment, Action::Update)),
            }
            saving.set(false);
        });
    });

    rsx! {
        div {
            class: "comment-edit",
            MessageInput {
                value: draft,
                limit,
                rows: 2,
                placeholder: "Edit your comment",
                disabled: saving(),
                onkeydown: move |evt: KeyboardEvent| match action_for(&evt, true) {
                    KeyAction::Submit => {
                        evt.prevent_default();
                        save.call(());
                    }
                    KeyAction::Cancel => on_done.call(()),
                    KeyAction::Ignore => {}
                },
            }
            div {
                class: "form-footer",
                CharCounter { message: draft(), limit }
                button {
                    class: "btn btn-secondary",
                    disabled: saving(),
                    onclick: move |_| on_done.call(()),
                    "Cancel"
                }
                button {
                    class: "btn btn-primary",
                    disabled: saving() || !limit.can_submit(&draft()),
                    onclick: move |_| save.call(()),
                    if saving() { "Saving..." } else { "Save" }
                }
            }
        }
    }
}
