//! `SiteCore` - the primary application facade.
//!
//! Adapters (CLI, web server) receive a `SiteCore` built at their composition
//! root and reach every service through it.

use std::sync::Arc;
use std::time::Duration;

use super::{GlobalSettingsService, PageService, SettingsCache};
use crate::ports::{Clock, ContentApiPort};

/// The core application facade.
///
/// # Example
///
/// ```ignore
/// let content: Arc<dyn ContentApiPort> = Arc::new(DefaultCmsClient::new(&config)?);
/// let core = SiteCore::new(content, Arc::new(SystemClock));
///
/// let nav = core.settings().navigation().await;
/// let page = core.pages().get_page("career").await;
/// ```
#[derive(Debug, Clone)]
pub struct SiteCore {
    settings: GlobalSettingsService,
    pages: PageService,
}

impl SiteCore {
    /// Create a `SiteCore` with the default settings freshness window.
    pub fn new(content: Arc<dyn ContentApiPort>, clock: Arc<dyn Clock>) -> Self {
        let cache = SettingsCache::new(Arc::clone(&content), clock);
        Self::from_parts(Arc::new(cache), content)
    }

    /// Create a `SiteCore` with a custom settings freshness window.
    pub fn with_freshness_window(
        content: Arc<dyn ContentApiPort>,
        clock: Arc<dyn Clock>,
        window: Duration,
    ) -> Self {
        let cache = SettingsCache::new(Arc::clone(&content), clock).with_freshness_window(window);
        Self::from_parts(Arc::new(cache), content)
    }

    fn from_parts(cache: Arc<SettingsCache>, content: Arc<dyn ContentApiPort>) -> Self {
        Self {
            settings: GlobalSettingsService::new(cache),
            pages: PageService::new(content),
        }
    }

    /// Access the global settings service.
    pub const fn settings(&self) -> &GlobalSettingsService {
        &self.settings
    }

    /// Access the page service.
    pub const fn pages(&self) -> &PageService {
        &self.pages
    }
}
