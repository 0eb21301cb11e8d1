//! Authentication context and hooks for the UI.

use dioxus::prelude::*;
use store::{Session, SessionStore};

use crate::gateway::use_gateway;

/// Authentication state for the application.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthState {
    pub session: Option<Session>,
    /// Set once the backend has vouched for `session` during this page load.
    pub verified: bool,
}

impl AuthState {
    pub fn signed_in(session: Session) -> Self {
        Self {
            session: Some(session),
            verified: true,
        }
    }

    pub fn is_signed_in(&self) -> bool {
        self.session.is_some()
    }
}

/// Get the current authentication state.
/// Returns a signal that updates when the user logs in or out.
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

/// Provider component that manages authentication state.
/// Must sit below `GatewayProvider`; the cached session is read once on mount.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let gateway = use_gateway();
    let auth_state = use_signal(move || {
        let session = gateway.sessions.load();
        match &session {
            Some(s) => tracing::info!(user = %s.id, "restored cached session"),
            None => tracing::debug!("no cached session"),
        }
        AuthState {
            session,
            verified: false,
        }
    });

    use_context_provider(|| auth_state);

    rsx! {
        {children}
    }
}

/// Button to log out the current user.
#[component]
pub fn LogoutButton(
    #[props(default = "Logout".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let mut auth_state = use_auth();
    let gateway = use_gateway();
    let nav = use_navigator();

    let onclick = move |_| {
        api::auth::logout(&gateway.sessions);
        auth_state.set(AuthState::default());
        nav.replace("/login");
    };

    rsx! {
        button {
            class: "{class}",
            onclick: onclick,
            "{label}"
        }
    }
}
