//! Internal error types for CMS operations.
//!
//! These errors are internal to `sitekit-cms` and are mapped to core port
//! errors at the boundary.

use thiserror::Error;

/// Result type alias for CMS operations.
pub type CmsResult<T> = Result<T, CmsError>;

/// Errors related to CMS API operations.
#[derive(Debug, Error)]
pub enum CmsError {
    /// API request failed with an HTTP error status.
    #[error("CMS request failed with status {status}: {url}")]
    ApiRequestFailed {
        /// HTTP status code
        status: u16,
        /// The URL that was requested
        url: String,
    },

    /// The CMS has no such resource (404).
    #[error("CMS resource '{resource}' not found")]
    NotFound {
        /// The collection or single type that was requested
        resource: String,
    },

    /// API returned an invalid or unexpected response.
    #[error("Invalid response from CMS: {message}")]
    InvalidResponse {
        /// Description of what was invalid
        message: String,
    },

    /// Network or HTTP client error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// JSON parsing error.
    #[error("JSON parsing error: {0}")]
    JsonParse(#[from] serde_json::Error),
}

impl CmsError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidResponse {
            message: message.into(),
        }
    }
}
