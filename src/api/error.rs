//! API error types
//!
//! Every failure in the HTTP layer collapses into [`ApiError`]. The type is
//! `Clone` with owned-string payloads so one refresh outcome can be handed to
//! every request that waited on it.

use thiserror::Error;

/// Errors that can occur while talking to the backend
#[derive(Error, Debug, Clone)]
pub enum ApiError {
    /// The request never produced an HTTP response.
    #[error("Network error: {0}")]
    Network(String),

    /// The server answered with a non-success status. `code` and `detail`
    /// carry the backend's JSON error body when it sent one.
    #[error("HTTP {status}")]
    Status {
        status: u16,
        code: Option<String>,
        detail: Option<String>,
    },

    /// A success response whose body did not match the expected shape.
    #[error("Malformed response body: {0}")]
    Decode(String),

    /// The request could not be built (bad base URL, bad path).
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

/// Result type for API operations
pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    /// HTTP status of the response, when there was one.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }

    /// Message to show the user: the server's `detail`, else its `code`,
    /// else the screen's own fallback text.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Status { code, detail, .. } => detail
                .clone()
                .or_else(|| code.clone())
                .unwrap_or_else(|| fallback.to_string()),
            _ => fallback.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_error(code: Option<&str>, detail: Option<&str>) -> ApiError {
        ApiError::Status {
            status: 401,
            code: code.map(str::to_string),
            detail: detail.map(str::to_string),
        }
    }

    #[test]
    fn test_user_message_prefers_detail() {
        let err = status_error(Some("invalid_credentials"), Some("Invalid credentials"));
        assert_eq!(err.user_message("Login failed"), "Invalid credentials");
    }

    #[test]
    fn test_user_message_falls_back_to_code() {
        let err = status_error(Some("invalid_credentials"), None);
        assert_eq!(err.user_message("Login failed"), "invalid_credentials");
    }

    #[test]
    fn test_user_message_falls_back_to_caller_text() {
        let err = status_error(None, None);
        assert_eq!(err.user_message("Login failed"), "Login failed");

        let err = ApiError::Network("connection refused".to_string());
        assert_eq!(err.user_message("Login failed"), "Login failed");
    }

    #[test]
    fn test_is_unauthorized() {
        assert!(status_error(None, None).is_unauthorized());
        assert!(!ApiError::Network("timeout".to_string()).is_unauthorized());
        assert!(!ApiError::Status {
            status: 404,
            code: Some("menu_not_found".to_string()),
            detail: None,
        }
        .is_unauthorized());
    }
}
