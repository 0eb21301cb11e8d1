//! Login page view with email/password form.

use api::{Action, Subject};
use dioxus::prelude::*;
use ui::notify::alert;
use ui::{use_auth, use_gateway, AuthState};

use crate::Route;

/// Login page component.
#[component]
pub fn Login() -> Element {
    let mut auth = use_auth();
    let gateway = use_gateway();
    let nav = use_navigator();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut loading = use_signal(|| false);

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        let gateway = gateway.clone();
        spawn(async move {
            loading.set(true);
            match api::auth::login(&gateway.client, &gateway.sessions, &email(), &password()).await
            {
                Ok(session) => {
                    auth.set(AuthState::signed_in(session));
                    nav.replace(Route::Dashboard {});
                }
                Err(err) => {
                    loading.set(false);
                    alert(&err.alert(Subject::Account, Action::Login));
                }
            }
        });
    };

    rsx! {
        div {
            class: "auth-page",
            h1 { "Sign in to Chirp" }

            form {
                class: "card auth-form",
                onsubmit: handle_login,

                input {
                    r#type: "email",
                    placeholder: "Email",
                    required: true,
                    value: email(),
                    oninput: move |evt: FormEvent| email.set(evt.value()),
                }

                input {
                    r#type: "password",
                    placeholder: "Password",
                    required: true,
                    value: password(),
                    oninput: move |evt: FormEvent| password.set(evt.value()),
                }

                button {
                    class: "btn btn-primary",
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Signing in..." } else { "Sign in" }
                }
            }

            p {
                class: "muted",
                "Don't have an account? "
                Link { to: Route::Register {}, "Sign up" }
            }
        }
    }
}
