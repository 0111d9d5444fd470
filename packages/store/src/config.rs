//! # Client configuration: `client.toml`
//!
//! The web build bundles a `client.toml` next to its assets and parses it at
//! startup. A missing section, or an empty file, is equivalent to the default
//! configuration.
//!
//! ## Structure
//!
//! ```toml
//! [api]
//! base_url = ""          # empty = page origin
//!
//! [session]
//! key = "user"           # storage key in both scopes
//! ```

use serde::{Deserialize, Serialize};

/// Top-level configuration stored in `client.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub session: SessionConfig,
}

/// Account service location.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the account service. Empty string means the page origin.
    #[serde(default)]
    pub base_url: String,
}

/// Persisted session settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Key the user record is stored under, in both storage scopes.
    #[serde(default = "default_session_key")]
    pub key: String,
}

fn default_session_key() -> String {
    "user".to_string()
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            key: default_session_key(),
        }
    }
}

impl ClientConfig {
    /// Builder method to point at a different account service.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.api.base_url = base_url.into();
        self
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "client.toml"
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
        assert_eq!(config.session.key, "user");
        assert!(config.api.base_url.is_empty());
    }

    #[test]
    fn test_partial_sections() {
        let config = ClientConfig::from_toml(
            r#"
            [api]
            base_url = "https://accounts.example.com"

            [session]
            "#,
        )
        .unwrap();
        assert_eq!(config.api.base_url, "https://accounts.example.com");
        assert_eq!(config.session.key, "user");
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = ClientConfig::default().with_base_url("http://localhost:3000");
        let text = config.to_toml().unwrap();
        assert_eq!(ClientConfig::from_toml(&text).unwrap(), config);
    }

    #[test]
    fn test_shipped_config_yields_absolute_register_url() {
        use api::client::{request_url, REGISTER_PATH};

        let config = ClientConfig::default();
        let url = request_url(&config.api.base_url, Some("https://app.example.com"), REGISTER_PATH)
            .unwrap();
        assert_eq!(url, "https://app.example.com/api/users/register");
        assert!(url.starts_with("https://"));
    }
}
