use dioxus::prelude::*;

use crate::auth::{use_auth, LogoutButton};

#[component]
pub fn Navbar() -> Element {
    let auth = use_auth();

    rsx! {
        nav {
            class: "navbar",
            Link { class: "navbar-brand", to: "/", "Chirp" }
            div {
                class: "navbar-links",
                if let Some(session) = auth().session {
                    span { class: "navbar-greeting", "Hello, {session.display_name()}" }
                    Link { to: "/dashboard", "Dashboard" }
                    Link { to: format!("/users/{}", session.id), "Profile" }
                    LogoutButton { class: "btn btn-link" }
                } else {
                    Link { to: "/login", "Login" }
                    Link { class: "btn btn-primary", to: "/register", "Register" }
                }
            }
        }
    }
}
