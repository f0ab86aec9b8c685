//! Error types exposed by the GitHub API layer.

use http::StatusCode;
use thiserror::Error;

/// Errors surfaced while validating input or communicating with GitHub.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GitHubError {
    /// Exactly one of user or organization must be supplied.
    #[error("either user or organization must be set, not both")]
    InvalidScope,

    /// The client identifier sent as the user agent was empty.
    #[error("application name must be set in the API settings")]
    MissingApplicationName,

    /// The requested API version has no implementation.
    #[error("API version {version} is not supported")]
    UnsupportedVersion {
        /// Human-readable version label.
        version: String,
    },

    /// The base address or a request address could not be parsed.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// Networking failed while calling GitHub.
    #[error("network error talking to GitHub: {message}")]
    Network {
        /// Transport-level error detail.
        message: String,
    },

    /// The token was rejected by GitHub.
    #[error("GitHub rejected the credentials: {message}")]
    Authentication {
        /// Message returned with the 401/403 response.
        message: String,
    },

    /// GitHub returned a non-authentication API error.
    #[error("GitHub API error ({status}): {message}")]
    Api {
        /// HTTP status of the failed response.
        status: StatusCode,
        /// Message returned by GitHub, or a placeholder.
        message: String,
    },

    /// The `last` link relation carried an unusable page reference.
    #[error("invalid pagination: {message}")]
    InvalidPagination {
        /// Description of the malformed link.
        message: String,
    },

    /// A response body could not be decoded.
    #[error("failed to decode {resource} response: {message}")]
    Decode {
        /// Resource being decoded (e.g. `pull requests`).
        resource: &'static str,
        /// Decoder error detail.
        message: String,
    },

    /// A caller-supplied page consumer failed for a reason of its own.
    #[error("page consumer failed: {message}")]
    Consumer {
        /// Error detail reported by the consumer.
        message: String,
    },
}

pub(crate) const fn is_auth_failure(status: StatusCode) -> bool {
    matches!(status, StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN)
}

pub(crate) fn map_http_error(
    operation: &str,
    status: StatusCode,
    maybe_message: Option<String>,
) -> GitHubError {
    let message = maybe_message.unwrap_or_else(|| "unknown error".to_owned());
    if is_auth_failure(status) {
        GitHubError::Authentication {
            message: format!("{operation} failed: GitHub returned {status} {message}"),
        }
    } else {
        GitHubError::Api {
            status,
            message: format!("{operation} failed: {message}"),
        }
    }
}

pub(crate) fn extract_github_message(body: &str) -> Option<String> {
    let Ok(value) = serde_json::from_str::<serde_json::Value>(body) else {
        return None;
    };
    value
        .get("message")
        .and_then(serde_json::Value::as_str)
        .map(ToOwned::to_owned)
}
