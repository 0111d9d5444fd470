//! # User record shared by the API client and the session stores
//!
//! [`UserRecord`] is what the registration endpoint returns and what gets
//! persisted into browser storage under the `"user"` key. The registration
//! screen treats it as opaque: it only checks whether one is present.
//!
//! The record is lenient on input. Everything except `email` may be missing
//! so that records written by older clients still parse.

use serde::{Deserialize, Serialize};

/// A signed-in user as seen by the client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserRecord {
    #[serde(default)]
    pub id: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Bearer token handed out by the server, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

impl UserRecord {
    /// Get display name, falling back to email if name is not set.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.email)
    }

    /// Parse a record from its stored JSON form.
    pub fn from_json(s: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(s)
    }

    /// Serialize to the JSON form kept in session storage.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
