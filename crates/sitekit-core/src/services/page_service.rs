//! Page service - uncached page reads.
//!
//! Pages are fetched on every call. Failures are logged and reported as
//! "no page" / "no slugs" so the routing layer can fall back to a 404.

use std::sync::Arc;

use crate::domain::{HOME_PAGE_SLUG, PageData, PageMetadata};
use crate::ports::ContentApiPort;

/// Service for page lookups.
#[derive(Clone)]
pub struct PageService {
    content: Arc<dyn ContentApiPort>,
}

impl PageService {
    /// Create a new page service.
    pub fn new(content: Arc<dyn ContentApiPort>) -> Self {
        Self { content }
    }

    /// Fetch a page by slug. `None` when missing or on error.
    pub async fn get_page(&self, slug: &str) -> Option<PageData> {
        match self.content.get_page(slug).await {
            Ok(page) => {
                if page.is_none() {
                    tracing::debug!(slug, "No page with this slug");
                }
                page
            }
            Err(err) => {
                tracing::error!(slug, error = %err, "Error fetching page");
                None
            }
        }
    }

    /// Fetch the home page.
    pub async fn home_page(&self) -> Option<PageData> {
        self.get_page(HOME_PAGE_SLUG).await
    }

    /// List all page slugs. Empty on error.
    pub async fn list_page_slugs(&self) -> Vec<String> {
        self.content
            .list_page_slugs()
            .await
            .unwrap_or_else(|err| {
                tracing::error!(error = %err, "Error fetching page slugs");
                Vec::new()
            })
    }

    /// Document metadata for a page, with the home or not-found fallback
    /// when the page can't be loaded.
    pub async fn page_metadata(&self, slug: &str) -> PageMetadata {
        let fallback = if slug == HOME_PAGE_SLUG {
            PageMetadata::home_fallback()
        } else {
            PageMetadata::not_found()
        };
        let page = self.get_page(slug).await;
        PageMetadata::for_page(page.as_ref(), fallback)
    }
}

impl std::fmt::Debug for PageService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PageService").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PageType;
    use crate::ports::{ContentPortError, MockContentApiPort};

    fn page(slug: &str) -> PageData {
        PageData {
            id: 4,
            document_id: "doc4".to_string(),
            title: "Careers".to_string(),
            slug: slug.to_string(),
            description: None,
            meta_title: Some("Join us".to_string()),
            meta_description: None,
            page_type: PageType::Career,
            sections: Vec::new(),
            created_at: None,
            updated_at: None,
        }
    }

    #[tokio::test]
    async fn test_get_page_found() {
        let mut mock = MockContentApiPort::new();
        mock.expect_get_page()
            .withf(|slug| slug == "career")
            .times(1)
            .returning(|slug| Ok(Some(page(slug))));
        let service = PageService::new(Arc::new(mock));

        let page = service.get_page("career").await.unwrap();
        assert_eq!(page.page_type, PageType::Career);
    }

    #[tokio::test]
    async fn test_get_page_error_is_none() {
        let mut mock = MockContentApiPort::new();
        mock.expect_get_page().returning(|_| {
            Err(ContentPortError::Network {
                message: "timeout".to_string(),
            })
        });
        let service = PageService::new(Arc::new(mock));

        assert!(service.get_page("career").await.is_none());
    }

    #[tokio::test]
    async fn test_home_page_uses_home_slug() {
        let mut mock = MockContentApiPort::new();
        mock.expect_get_page()
            .withf(|slug| slug == HOME_PAGE_SLUG)
            .times(1)
            .returning(|_| Ok(None));
        let service = PageService::new(Arc::new(mock));

        assert!(service.home_page().await.is_none());
    }

    #[tokio::test]
    async fn test_list_page_slugs_error_is_empty() {
        let mut mock = MockContentApiPort::new();
        mock.expect_list_page_slugs()
            .returning(|| Err(ContentPortError::RateLimited));
        let service = PageService::new(Arc::new(mock));

        assert!(service.list_page_slugs().await.is_empty());
    }

    #[tokio::test]
    async fn test_page_metadata_fallbacks() {
        let mut mock = MockContentApiPort::new();
        mock.expect_get_page().returning(|_| Ok(None));
        let service = PageService::new(Arc::new(mock));

        assert_eq!(
            service.page_metadata(HOME_PAGE_SLUG).await,
            PageMetadata::home_fallback()
        );
        assert_eq!(
            service.page_metadata("missing").await,
            PageMetadata::not_found()
        );
    }

    #[tokio::test]
    async fn test_page_metadata_from_page() {
        let mut mock = MockContentApiPort::new();
        mock.expect_get_page()
            .returning(|slug| Ok(Some(page(slug))));
        let service = PageService::new(Arc::new(mock));

        let meta = service.page_metadata("career").await;
        assert_eq!(meta.title, "Join us");
        assert!(meta.description.is_none());
    }
}
