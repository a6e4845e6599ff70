//! Port trait implementation for `CmsClient`.
//!
//! This module implements the core-owned `ContentApiPort` trait for
//! `CmsClient`, mapping internal CMS errors to core port errors.

use async_trait::async_trait;
use sitekit_core::{ContentApiPort, ContentPortError, ContentPortResult, GlobalSettings, PageData};

use crate::client::CmsClient;
use crate::error::CmsError;
use crate::http::HttpBackend;
use crate::url::resource_name;

// ============================================================================
// Error Mapping
// ============================================================================

/// Convert internal `CmsError` to core `ContentPortError`.
fn map_error(err: CmsError) -> ContentPortError {
    match err {
        CmsError::ApiRequestFailed { status, url } => match status {
            401 | 403 => ContentPortError::Unauthorized {
                resource: resource_name(&url),
            },
            404 => ContentPortError::NotFound {
                resource: resource_name(&url),
            },
            429 => ContentPortError::RateLimited,
            _ => ContentPortError::Network {
                message: format!("CMS request failed with status {status}: {url}"),
            },
        },
        CmsError::NotFound { resource } => ContentPortError::NotFound { resource },
        CmsError::InvalidResponse { message } => ContentPortError::InvalidResponse { message },
        CmsError::Network(e) => ContentPortError::Network {
            message: e.to_string(),
        },
        CmsError::InvalidUrl(e) => ContentPortError::Configuration {
            message: e.to_string(),
        },
        CmsError::JsonParse(e) => ContentPortError::InvalidResponse {
            message: e.to_string(),
        },
    }
}

// ============================================================================
// Port Implementation
// ============================================================================

#[async_trait]
impl<B: HttpBackend> ContentApiPort for CmsClient<B> {
    async fn fetch_global_settings(&self) -> ContentPortResult<GlobalSettings> {
        self.global_settings().await.map_err(map_error)
    }

    async fn get_page(&self, slug: &str) -> ContentPortResult<Option<PageData>> {
        self.page_by_slug(slug).await.map_err(map_error)
    }

    async fn list_page_slugs(&self) -> ContentPortResult<Vec<String>> {
        self.all_page_slugs().await.map_err(map_error)
    }
}
