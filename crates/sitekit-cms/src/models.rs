//! Internal API response types for the Strapi REST API.
//!
//! These types are internal to `sitekit-cms` and are not exposed to consumers.
//! External consumers use the domain types defined in `sitekit-core`.

use std::time::Duration;

use serde::Deserialize;
use url::Url;

use crate::config::CmsClientConfig;
use crate::error::CmsResult;

// ============================================================================
// Configuration (used internally, see config.rs for public config)
// ============================================================================

/// Internal configuration for the CMS client.
#[derive(Debug, Clone)]
pub struct CmsConfig {
    /// CMS origin (default: <http://localhost:1337>)
    pub base_url: Url,
    /// User agent for HTTP requests
    pub user_agent: String,
    /// Per-request timeout
    pub timeout: Duration,
    /// Optional API token
    pub token: Option<String>,
    /// Maximum number of retry attempts for transient errors (default: 0)
    pub max_retries: u8,
    /// Base delay in milliseconds for exponential backoff (default: 500)
    pub retry_base_delay_ms: u64,
    /// Page size used when walking paginated collections
    pub page_size: u32,
}

impl CmsConfig {
    /// Validate and convert the public configuration.
    pub fn from_public(config: &CmsClientConfig) -> CmsResult<Self> {
        Ok(Self {
            base_url: Url::parse(&config.base_url)?,
            user_agent: config.user_agent.clone(),
            timeout: config.timeout,
            token: config.token.clone(),
            max_retries: config.max_retries,
            retry_base_delay_ms: u64::try_from(config.retry_base_delay.as_millis())
                .unwrap_or(u64::MAX),
            page_size: 100,
        })
    }
}

#[cfg(test)]
impl Default for CmsConfig {
    fn default() -> Self {
        Self::from_public(&CmsClientConfig::default()).expect("default CMS URL is valid")
    }
}

// ============================================================================
// Response Envelope
// ============================================================================

/// Strapi response envelope: `{ "data": ..., "meta": { ... } }`.
#[derive(Debug, Clone, Deserialize)]
pub struct StrapiResponse<T> {
    pub data: T,
    #[serde(default)]
    pub meta: StrapiMeta,
}

/// Response metadata.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StrapiMeta {
    #[serde(default)]
    pub pagination: Option<StrapiPagination>,
}

/// Pagination block of a collection response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrapiPagination {
    pub page: u32,
    pub page_size: u32,
    pub page_count: u32,
    pub total: u32,
}

impl StrapiPagination {
    /// Whether pages after the current one exist.
    pub const fn has_more(&self) -> bool {
        self.page < self.page_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_public_rejects_bad_url() {
        let config = CmsClientConfig::new().with_base_url("not a url");
        assert!(CmsConfig::from_public(&config).is_err());
    }

    #[test]
    fn test_from_public_copies_fields() {
        let config = CmsClientConfig::new()
            .with_token("abc")
            .with_retry_delay(Duration::from_millis(250));
        let internal = CmsConfig::from_public(&config).unwrap();
        assert_eq!(internal.base_url.as_str(), "http://localhost:1337/");
        assert_eq!(internal.token.as_deref(), Some("abc"));
        assert_eq!(internal.retry_base_delay_ms, 250);
    }

    #[test]
    fn test_envelope_without_meta() {
        let response: StrapiResponse<serde_json::Value> =
            serde_json::from_value(json!({"data": null})).unwrap();
        assert!(response.data.is_null());
        assert!(response.meta.pagination.is_none());
    }

    #[test]
    fn test_pagination_has_more() {
        let response: StrapiResponse<Vec<serde_json::Value>> = serde_json::from_value(json!({
            "data": [],
            "meta": {"pagination": {"page": 1, "pageSize": 25, "pageCount": 3, "total": 60}}
        }))
        .unwrap();
        let pagination = response.meta.pagination.unwrap();
        assert!(pagination.has_more());
        assert_eq!(pagination.page_size, 25);

        let last = StrapiPagination {
            page: 3,
            ..pagination
        };
        assert!(!last.has_more());
    }
}
