use thiserror::Error;

/// Errors returned by [`crate::ApiClient`].
///
/// The `Display` output is what the user eventually sees in the alert, so the
/// `Rejected` variant prints the server's message verbatim.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Could not reach the server: {0}")]
    Http(#[from] reqwest::Error),
    #[error("{message}")]
    Rejected { status: u16, message: String },
    #[error("Unexpected response from the server: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("No account service configured: set api.base_url or serve from a page origin")]
    NoOrigin,
    #[error("Account service URL must be absolute (http or https), got {0:?}")]
    InvalidBaseUrl(String),
}

impl ApiError {
    /// Build a `Rejected` error from a non-success response body.
    ///
    /// Prefers the `message` (or `error`) field of a JSON body, then the raw
    /// body, then a generic line naming the status.
    pub fn rejected(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|v| {
                ["message", "error"]
                    .iter()
                    .find_map(|k| v.get(*k).and_then(|m| m.as_str()).map(str::to_string))
            })
            .or_else(|| {
                let trimmed = body.trim();
                (!trimmed.is_empty()).then(|| trimmed.to_string())
            })
            .unwrap_or_else(|| format!("Registration failed (HTTP {status})"));
        Self::Rejected { status, message }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejected_uses_json_message() {
        let err = ApiError::rejected(409, r#"{"message":"An account with this email already exists"}"#);
        assert_eq!(err.to_string(), "An account with this email already exists");
        assert!(matches!(err, ApiError::Rejected { status: 409, .. }));
    }

    #[test]
    fn test_rejected_falls_back_to_error_field_and_body() {
        assert_eq!(
            ApiError::rejected(400, r#"{"error":"bad email"}"#).to_string(),
            "bad email"
        );
        assert_eq!(ApiError::rejected(502, "Bad Gateway\n").to_string(), "Bad Gateway");
        assert_eq!(
            ApiError::rejected(500, "").to_string(),
            "Registration failed (HTTP 500)"
        );
    }
}
