//! Backend client, configuration and session storage shared through context.
//!
//! [`GatewayProvider`] builds one [`Gateway`] from the app's [`ClientConfig`] and
//! makes it available to every component below it. The session store depends on
//! the platform:
//! - **Web** (WASM + `web` feature): `window.localStorage` via [`store::LocalStorageStore`]
//! - **Native** (tests, tooling): [`store::MemorySessionStore`]

use api::ApiClient;
use dioxus::prelude::*;
use store::{ClientConfig, ComposeLimit, Surface};

#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type Sessions = store::LocalStorageStore;
#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
pub type Sessions = store::MemorySessionStore;

/// Create the platform session store for `config.session.storage_key`.
pub fn make_sessions(config: &ClientConfig) -> Sessions {
    Sessions::new(config.session.storage_key.clone())
}

#[derive(Clone, Debug)]
pub struct Gateway {
    pub client: ApiClient,
    pub config: ClientConfig,
    pub sessions: Sessions,
}

impl Gateway {
    pub fn new(config: ClientConfig) -> Result<Self, api::ApiError> {
        Ok(Self {
            client: ApiClient::from_config(&config)?,
            sessions: make_sessions(&config),
            config,
        })
    }

    pub fn limit(&self, surface: Surface) -> ComposeLimit {
        self.config.compose.limit_for(surface)
    }
}

impl PartialEq for Gateway {
    fn eq(&self, other: &Self) -> bool {
        self.config == other.config
    }
}

pub fn use_gateway() -> Gateway {
    use_context::<Gateway>()
}

/// Provides the [`Gateway`] to its children, or an error page when the
/// configured base URL is unusable.
#[component]
pub fn GatewayProvider(config: ClientConfig, children: Element) -> Element {
    let gateway = use_hook(move || Gateway::new(config));
    match gateway {
        Ok(gateway) => rsx! {
            ProvideGateway { gateway, {children} }
        },
        Err(err) => {
            tracing::error!(%err, "invalid client configuration");
            rsx! {
                div { class: "page-error",
                    h1 { "Chirp is misconfigured" }
                    p { "{err}" }
                }
            }
        }
    }
}

#[component]
fn ProvideGateway(gateway: Gateway, children: Element) -> Element {
    use_context_provider(move || gateway);
    rsx! {
        {children}
    }
}
