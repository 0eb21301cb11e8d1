use api::{users, Action, Subject};
use dioxus::prelude::*;
use store::models::initial;
use store::time::full_date;
use store::UserProfile;

use crate::auth::{use_auth, AuthState};
use crate::gateway::use_gateway;
use crate::notify::alert;

/// User card. The signed-in owner can change their display name.
#[component]
pub fn ProfileCard(profile: Signal<UserProfile>) -> Element {
    let mut auth = use_auth();
    let gateway = use_gateway();
    let mut renaming = use_signal(|| false);
    let mut name = use_signal(String::new);
    let mut saving = use_signal(|| false);
    let mut profile = profile;

    let current = profile();
    let own = auth()
        .session
        .as_ref()
        .is_some_and(|session| session.id == current.id);

    let save = move |evt: FormEvent| {
        evt.prevent_default();
        let Some(session) = auth().session else {
            return;
        };
        let gateway = gateway.clone();
        spawn(async move {
            saving.set(true);
            match users::rename(&gateway.client, &gateway.sessions, &session, &name()).await {
                Ok(updated) => {
                    profile.with_mut(|p| p.name = updated.name.clone());
                    auth.set(AuthState::signed_in(updated));
                    renaming.set(false);
                }
                Err(err) => alert(&err.alert(Subject::Profile, Action::Update)),
            }
            saving.set(false);
        });
    };

    rsx! {
        div {
            class: "card profile-card",
            div { class: "avatar large", "{initial(&current.name)}" }
            if renaming() {
                form {
                    class: "rename-form",
                    onsubmit: save,
                    input {
                        r#type: "text",
                        value: name(),
                        disabled: saving(),
                        oninput: move |evt: FormEvent| name.set(evt.value()),
                    }
                    button { class: "btn btn-primary", r#type: "submit", disabled: saving(), "Save" }
                    button {
                        class: "btn btn-secondary",
                        r#type: "button",
                        onclick: move |_| renaming.set(false),
                        "Cancel"
                    }
                }
            } else {
                h2 { class: "profile-name", "{current.name}" }
                if own {
                    button {
                        class: "btn btn-link",
                        onclick: {
                            let current_name = current.name.clone();
                            move |_| {
                                name.set(current_name.clone());
                                renaming.set(true);
                            }
                        },
                        "Edit name"
                    }
                }
            }
            p { class: "muted", "{current.email}" }
            if let Some(joined) = current.created_at {
                p { class: "muted", "Joined {full_date(joined)}" }
            }
        }
    }
}
