use api::Revalidation;
use dioxus::prelude::*;
use store::ClientConfig;

use ui::{use_auth, use_gateway, AuthProvider, AuthState, GatewayProvider, Navbar};
use views::{Dashboard, Home, Login, PostDetail, Profile, Register};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Shell)]
        #[route("/")]
        Home {},
        #[route("/post/:id")]
        PostDetail { id: String },
        #[route("/users/:id")]
        Profile { id: String },
        #[layout(RequireSession)]
            #[route("/dashboard")]
            Dashboard {},
        #[end_layout]
        #[layout(GuestOnly)]
            #[route("/login")]
            Login {},
            #[route("/register")]
            Register {},
        #[end_layout]
    #[end_layout]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");
const CONFIG_TOML: &str = include_str!("../chirp.toml");

/// The embedded `chirp.toml`, with the backend URL overridable at build time
/// through `CHIRP_API_BASE_URL`.
fn load_config() -> ClientConfig {
    let config = ClientConfig::from_toml(CONFIG_TOML).unwrap_or_else(|err| {
        tracing::error!(%err, "invalid {}; using defaults", ClientConfig::filename());
        ClientConfig::default()
    });
    match option_env!("CHIRP_API_BASE_URL") {
        Some(base_url) => config.with_base_url(base_url),
        None => config,
    }
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config = use_hook(load_config);

    rsx! {
        document::Title { "Chirp" }
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        GatewayProvider {
            config,
            AuthProvider {
                Router::<Route> {}
            }
        }
    }
}

#[component]
fn Shell() -> Element {
    rsx! {
        Navbar {}
        main {
            class: "container",
            Outlet::<Route> {}
        }
    }
}

/// Protected pages. Without a cached session the user is sent to the login
/// page; with one, the backend is asked once per page load whether it still
/// accepts it.
#[component]
fn RequireSession() -> Element {
    let mut auth = use_auth();
    let gateway = use_gateway();
    let nav = use_navigator();

    let _check = use_resource(move || {
        let gateway = gateway.clone();
        async move {
            let (cached, verified) = {
                let state = auth.peek();
                (state.session.clone(), state.verified)
            };
            let Some(cached) = cached else {
                return;
            };
            if verified || !gateway.config.session.revalidate {
                return;
            }
            match api::auth::revalidate(&gateway.client, &gateway.sessions, &cached).await {
                Revalidation::Valid(session) => auth.set(AuthState::signed_in(session)),
                Revalidation::Revoked => {
                    auth.set(AuthState::default());
                    nav.replace(Route::Login {});
                }
                Revalidation::Unknown => {}
            }
        }
    });

    if !auth().is_signed_in() {
        nav.replace(Route::Login {});
        return rsx! {};
    }

    rsx! {
        Outlet::<Route> {}
    }
}

/// Login and register are only for signed-out visitors.
#[component]
fn GuestOnly() -> Element {
    let auth = use_auth();
    let nav = use_navigator();

    if auth().is_signed_in() {
        nav.replace(Route::Dashboard {});
        return rsx! {};
    }

    rsx! {
        Outlet::<Route> {}
    }
}

#[component]
fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    rsx! {
        div {
            class: "card empty-state",
            h2 { "Page not found" }
            p { class: "muted", "Nothing lives at /{path}." }
            Link { class: "btn btn-primary", to: Route::Home {}, "Back to Feed" }
        }
    }
}
