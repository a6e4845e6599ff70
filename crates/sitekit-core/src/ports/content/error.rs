//! Error types for content API port operations.

use thiserror::Error;

/// Errors from content API port operations.
///
/// These are domain-level errors that consumers can handle.
/// Implementation-specific errors (HTTP, JSON) are mapped to these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContentPortError {
    /// The requested resource does not exist in the CMS.
    #[error("Content not found: {resource}")]
    NotFound {
        /// What was requested (e.g. `global`, `pages`)
        resource: String,
    },

    /// The CMS rejected the credentials (or none were supplied).
    #[error("Not authorized to read {resource}")]
    Unauthorized {
        /// What was requested
        resource: String,
    },

    /// API rate limit exceeded.
    #[error("Rate limit exceeded, try again later")]
    RateLimited,

    /// Network or connectivity error, including non-success statuses.
    #[error("Network error: {message}")]
    Network {
        /// Description of the network error
        message: String,
    },

    /// Invalid response from the API.
    #[error("Invalid API response: {message}")]
    InvalidResponse {
        /// What was invalid
        message: String,
    },

    /// Configuration error.
    #[error("Configuration error: {message}")]
    Configuration {
        /// What's wrong with the configuration
        message: String,
    },
}

/// Result type alias for content API port operations.
pub type ContentPortResult<T> = Result<T, ContentPortError>;
