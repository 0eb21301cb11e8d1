//! Registration page view with name/email/password form.

use api::{Action, Subject};
use dioxus::prelude::*;
use ui::notify::alert;
use ui::use_gateway;

use crate::Route;

/// Register page component. Registration does not sign in; on success the
/// user is sent to the login page.
#[component]
pub fn Register() -> Element {
    let gateway = use_gateway();
    let nav = use_navigator();
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut loading = use_signal(|| false);

    let handle_register = move |evt: FormEvent| {
        evt.prevent_default();
        let gateway = gateway.clone();
        spawn(async move {
            loading.set(true);
            match api::auth::register(&gateway.client, &name(), &email(), &password()).await {
                Ok(()) => {
                    alert("Registration successful! Please login.");
                    nav.replace(Route::Login {});
                }
                Err(err) => {
                    loading.set(false);
                    alert(&err.alert(Subject::Account, Action::Register));
                }
            }
        });
    };

    rsx! {
        div {
            class: "auth-page",
            h1 { "Create Account" }

            form {
                class: "card auth-form",
                onsubmit: handle_register,

                input {
                    r#type: "text",
                    placeholder: "Name",
                    required: true,
                    value: name(),
                    oninput: move |evt: FormEvent| name.set(evt.value()),
                }

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
                    if loading() { "Creating account..." } else { "Sign up" }
                }
            }

            p {
                class: "muted",
                "Already have an account? "
                Link { to: Route::Login {}, "Sign in" }
            }
        }
    }
}
