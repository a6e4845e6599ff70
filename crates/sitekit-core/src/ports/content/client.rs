//! Content API port trait.

use super::error::ContentPortResult;
use crate::domain::{GlobalSettings, PageData};
use async_trait::async_trait;

/// Port trait for headless CMS read operations.
///
/// This trait defines the interface that the core domain uses to read site
/// content. The implementation lives in `sitekit-cms`.
///
/// # Design
///
/// - Uses core-owned domain types, not CMS wire types
/// - Returns `ContentPortError` for all failures
/// - Implementations own their timeout and retry policy
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContentApiPort: Send + Sync {
    /// Fetch the global site settings singleton.
    ///
    /// An empty payload is reported as an error, never as a default value.
    async fn fetch_global_settings(&self) -> ContentPortResult<GlobalSettings>;

    /// Fetch a page by slug, with its sections populated.
    ///
    /// Returns `Ok(None)` when no page has that slug.
    async fn get_page(&self, slug: &str) -> ContentPortResult<Option<PageData>>;

    /// List the slugs of every published page.
    async fn list_page_slugs(&self) -> ContentPortResult<Vec<String>>;
}
