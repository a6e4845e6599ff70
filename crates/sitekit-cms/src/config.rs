//! Public configuration for the CMS client.
//!
//! This module provides a stable public API for configuring the CMS client.
//! The internal config is derived from this.

use std::time::Duration;

/// Default CMS origin, matching a local Strapi dev server.
pub const DEFAULT_CMS_URL: &str = "http://localhost:1337";

/// Configuration for the CMS client.
///
/// Use the builder pattern methods to customize the client configuration.
///
/// # Example
///
/// ```
/// use sitekit_cms::CmsClientConfig;
/// use std::time::Duration;
///
/// let config = CmsClientConfig::new()
///     .with_base_url("https://cms.example.com")
///     .with_timeout(Duration::from_secs(10))
///     .with_max_retries(2);
/// ```
#[derive(Debug, Clone)]
pub struct CmsClientConfig {
    /// CMS origin; the `/api/...` paths are appended to it
    pub(crate) base_url: String,
    /// User agent string for HTTP requests
    pub(crate) user_agent: String,
    /// Request timeout
    pub(crate) timeout: Duration,
    /// Optional API token for non-public content
    pub(crate) token: Option<String>,
    /// Maximum number of retry attempts for transient errors
    pub(crate) max_retries: u8,
    /// Base delay for exponential backoff
    pub(crate) retry_base_delay: Duration,
}

impl Default for CmsClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_CMS_URL.to_string(),
            user_agent: concat!("sitekit-cms/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout: Duration::from_secs(30),
            token: None,
            max_retries: 0,
            retry_base_delay: Duration::from_millis(500),
        }
    }
}

impl CmsClientConfig {
    /// Create a new configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the CMS origin.
    ///
    /// Defaults to `http://localhost:1337`.
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the user agent string for HTTP requests.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set the request timeout.
    ///
    /// Defaults to 30 seconds.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set an API token, sent as a bearer token.
    #[must_use]
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set an optional API token.
    #[must_use]
    pub fn with_optional_token(mut self, token: Option<String>) -> Self {
        self.token = token;
        self
    }

    /// Set the maximum number of retry attempts for transient errors.
    ///
    /// Defaults to 0: a failed request is reported immediately.
    #[must_use]
    pub const fn with_max_retries(mut self, retries: u8) -> Self {
        self.max_retries = retries;
        self
    }

    /// Set the base delay for exponential backoff retries.
    ///
    /// Defaults to 500ms.
    #[must_use]
    pub const fn with_retry_delay(mut self, delay: Duration) -> Self {
        self.retry_base_delay = delay;
        self
    }

    /// The configured CMS origin.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The configured number of retries.
    pub const fn max_retries(&self) -> u8 {
        self.max_retries
    }
}
