//! CMS client for reading global settings and pages.
//!
//! This module provides the main client interface for interacting with
//! the Strapi REST API.

mod global;
mod pages;

use crate::config::CmsClientConfig;
use crate::error::CmsResult;
use crate::http::{HttpBackend, ReqwestBackend};
use crate::models::CmsConfig;

// ============================================================================
// Type Aliases
// ============================================================================

/// Default CMS client using the reqwest HTTP backend.
pub type DefaultCmsClient = CmsClient<ReqwestBackend>;

// ============================================================================
// Client
// ============================================================================

/// Client for the Strapi REST API.
///
/// This client is generic over an HTTP backend, allowing for easy testing.
/// Use `DefaultCmsClient` for production code and interact with it through
/// the `ContentApiPort` trait.
pub struct CmsClient<B: HttpBackend> {
    pub(crate) backend: B,
    pub(crate) config: CmsConfig,
}

impl DefaultCmsClient {
    /// Create a new client with the given configuration.
    ///
    /// Fails if the base URL doesn't parse or the HTTP client can't be built.
    pub fn new(config: &CmsClientConfig) -> CmsResult<Self> {
        let config = CmsConfig::from_public(config)?;
        let backend = ReqwestBackend::new(&config)?;
        Ok(Self { backend, config })
    }
}

impl<B: HttpBackend> CmsClient<B> {
    /// Create a new client with a custom backend.
    ///
    /// Use this for testing with a fake backend.
    #[cfg(test)]
    pub(crate) const fn with_backend(config: CmsConfig, backend: B) -> Self {
        Self { backend, config }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::http::testing::FakeBackend;
    use serde_json::json;

    pub fn test_config() -> CmsConfig {
        CmsConfig::default()
    }

    pub fn fake_page_json(id: u64, slug: &str) -> serde_json::Value {
        json!({
            "id": id,
            "documentId": format!("doc-{id}"),
            "title": slug.to_uppercase(),
            "slug": slug,
            "pageType": "generic",
            "sections": [
                {"__component": "sections.hero", "id": 1, "title": "Hi", "subtitle": "There"}
            ]
        })
    }

    #[test]
    fn test_default_client_creation() {
        let config = CmsClientConfig::new();
        assert!(DefaultCmsClient::new(&config).is_ok());
    }

    #[test]
    fn test_client_rejects_invalid_base_url() {
        let config = CmsClientConfig::new().with_base_url("::not-a-url::");
        assert!(DefaultCmsClient::new(&config).is_err());
    }

    #[test]
    fn test_client_with_fake_backend() {
        let backend = FakeBackend::new().with_json("/api/global", json!({"data": null}));
        let client = CmsClient::with_backend(test_config(), backend);
        assert_eq!(client.config.page_size, 100);
    }
}
