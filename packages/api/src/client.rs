//! HTTP client for the account endpoints.

use std::future::Future;

use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::models::UserRecord;

/// Where the register endpoint lives, relative to the API base URL.
pub const REGISTER_PATH: &str = "/api/users/register";

/// Body of a registration request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub password_confirmation: String,
}

impl RegisterRequest {
    pub fn new(
        email: impl Into<String>,
        password: impl Into<String>,
        password_confirmation: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            password_confirmation: password_confirmation.into(),
        }
    }
}

/// Something that can create an account.
///
/// [`ApiClient`] is the real implementation; tests substitute a recorder.
pub trait Registrar {
    fn register(
        &self,
        request: RegisterRequest,
    ) -> impl Future<Output = Result<UserRecord, ApiError>>;
}

/// Thin `reqwest` wrapper bound to one API base URL.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl ApiClient {
    /// Create a client. An empty `base_url` resolves against the page origin.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            http: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for a path under the base URL.
    ///
    /// An empty base URL resolves against the page origin in the browser.
    pub fn url(&self, path: &str) -> Result<String, ApiError> {
        request_url(&self.base_url, page_origin().as_deref(), path)
    }
}

/// Join `path` onto `base_url`, falling back to `origin` when the base is
/// empty. `reqwest` only sends to absolute URLs, so anything else is an error.
pub fn request_url(base_url: &str, origin: Option<&str>, path: &str) -> Result<String, ApiError> {
    let base = match base_url.trim() {
        "" => origin.ok_or(ApiError::NoOrigin)?,
        base => base,
    };
    if !(base.starts_with("http://") || base.starts_with("https://")) {
        return Err(ApiError::InvalidBaseUrl(base.to_string()));
    }
    Ok(format!("{}{}", base.trim_end_matches('/'), path))
}

#[cfg(all(target_arch = "wasm32", feature = "web"))]
fn page_origin() -> Option<String> {
    web_sys::window()?.location().origin().ok()
}

#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
fn page_origin() -> Option<String> {
    None
}

impl Registrar for ApiClient {
    async fn register(&self, request: RegisterRequest) -> Result<UserRecord, ApiError> {
        let url = self.url(REGISTER_PATH)?;
        tracing::debug!("POST {}", url);

        let response = self.http.post(&url).json(&request).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            tracing::warn!("Registration rejected with HTTP {}", status.as_u16());
            return Err(ApiError::rejected(status.as_u16(), &body));
        }

        Ok(serde_json::from_str(&body)?)
    }
}
