//! # Client configuration — `chirp.toml`
//!
//! Defines the TOML file the web binary embeds at build time
//! (filename: [`ClientConfig::filename`] = `"chirp.toml"`). It tells the client
//! where the REST backend lives, how long a post or comment may be, and how the
//! cached session is stored and checked.
//!
//! ## Structure
//!
//! ```toml
//! [api]
//! base_url = "http://localhost:5000/api"
//!
//! [compose]
//! limit = 280          # displayed character limit
//! soft_overflow = 50   # extra characters a comment box accepts before it blocks
//! post_overflow = 20   # the same for the new-post box
//! edit_overflow = 0    # the same for the post edit box
//!
//! [session]
//! storage_key = "user" # browser storage key holding the session record
//! revalidate = true    # ask the backend on protected navigations
//! ```
//!
//! ## Types
//!
//! | Struct | Purpose |
//! |--------|---------|
//! | [`ClientConfig`] | Top-level config with TOML (de)serialisation, a base-url builder helper and the canonical filename. |
//! | [`ApiConfig`] | Backend base URL. |
//! | [`ComposeConfig`] | Character limit and soft overflow for posts and comments. |
//! | [`SessionConfig`] | Storage key and revalidation switch. |
//!
//! Every section derives `Default`, so a missing or empty file is the default
//! configuration.

use serde::{Deserialize, Serialize};

use crate::compose::{ComposeLimit, Surface};

/// Top-level configuration stored in `chirp.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub compose: ComposeConfig,
    #[serde(default)]
    pub session: SessionConfig,
}

/// Where the REST backend is reached.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    "http://localhost:5000/api".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

/// Length policy shared by the post and comment forms.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ComposeConfig {
    #[serde(default = "default_limit")]
    pub limit: usize,
    #[serde(default = "default_soft_overflow")]
    pub soft_overflow: usize,
    #[serde(default = "default_post_overflow")]
    pub post_overflow: usize,
    #[serde(default)]
    pub edit_overflow: usize,
}

fn default_limit() -> usize {
    280
}

fn default_soft_overflow() -> usize {
    50
}

fn default_post_overflow() -> usize {
    20
}

impl Default for ComposeConfig {
    fn default() -> Self {
        Self {
            limit: default_limit(),
            soft_overflow: default_soft_overflow(),
            post_overflow: default_post_overflow(),
            edit_overflow: 0,
        }
    }
}

impl ComposeConfig {
    /// The limit every surface submits against, with that surface's overflow.
    pub fn limit_for(&self, surface: Surface) -> ComposeLimit {
        let overflow = match surface {
            Surface::NewPost => self.post_overflow,
            Surface::PostEdit => self.edit_overflow,
            Surface::Comment => self.soft_overflow,
        };
        ComposeLimit::new(self.limit, overflow)
    }
}

/// How the cached session is persisted and checked.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
    /// Revalidate the cached session against `GET /auth/me` on protected routes.
    #[serde(default = "default_revalidate")]
    pub revalidate: bool,
}

fn default_storage_key() -> String {
    "user".to_string()
}

fn default_revalidate() -> bool {
    true
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
            revalidate: default_revalidate(),
        }
    }
}

impl ClientConfig {
    /// Builder method to point the client at another backend.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.api.base_url = base_url.into();
        self
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "chirp.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_is_default() {
        let config = ClientConfig::from_toml("").unwrap();
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.api.base_url, "http://localhost:5000/api");
        assert_eq!(config.compose.limit, 280);
        assert_eq!(config.compose.soft_overflow, 50);
        assert_eq!(config.session.storage_key, "user");
        assert!(config.session.revalidate);
    }

    #[test]
    fn test_partial_sections_keep_defaults() {
        let config = ClientConfig::from_toml(
            r#"
            [api]
            base_url = "https://chirp.example/api"

            [session]
            revalidate = false
            "#,
        )
        .unwrap();
        assert_eq!(config.api.base_url, "https://chirp.example/api");
        assert_eq!(config.compose, ComposeConfig::default());
        assert_eq!(config.session.storage_key, "user");
        assert!(!config.session.revalidate);
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = ClientConfig::default().with_base_url("http://127.0.0.1:9000/api");
        let text = config.to_toml().unwrap();
        let loaded = ClientConfig::from_toml(&text).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_compose_limit_from_config() {
        let compose = ComposeConfig::default();
        let comment = compose.limit_for(Surface::Comment);
        assert_eq!(comment.limit(), 280);
        assert_eq!(comment.hard_max(), 330);
        assert_eq!(compose.limit_for(Surface::NewPost).hard_max(), 300);
        assert_eq!(compose.limit_for(Surface::PostEdit).hard_max(), 280);
    }

    #[test]
    fn test_every_surface_submits_against_the_same_limit() {
        let compose = ClientConfig::from_toml("[compose]\nlimit = 10\npost_overflow = 5\n")
            .unwrap()
            .compose;
        for surface in [Surface::NewPost, Surface::PostEdit, Surface::Comment] {
            let limit = compose.limit_for(surface);
            assert!(limit.can_submit(&"a".repeat(10)));
            assert!(!limit.can_submit(&"a".repeat(11)));
        }
        assert_eq!(compose.limit_for(Surface::NewPost).hard_max(), 15);
        assert_eq!(compose.limit_for(Surface::Comment).hard_max(), 60);
    }
}
