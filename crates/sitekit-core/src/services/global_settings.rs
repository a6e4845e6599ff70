//! Global settings service - site chrome accessors over the settings cache.

use std::sync::Arc;

use super::SettingsCache;
use crate::domain::{FooterLink, GlobalSettings, NavigationItem, SocialLink, group_footer_links};

/// Accessors for navigation, footer and social links.
///
/// Every accessor reads through the shared [`SettingsCache`] and degrades to
/// an empty list when no settings are available.
#[derive(Debug, Clone)]
pub struct GlobalSettingsService {
    cache: Arc<SettingsCache>,
}

impl GlobalSettingsService {
    /// Create a new service over a shared cache.
    pub const fn new(cache: Arc<SettingsCache>) -> Self {
        Self { cache }
    }

    /// The full settings payload, if any could be loaded.
    pub async fn settings(&self) -> Option<Arc<GlobalSettings>> {
        self.cache.get().await
    }

    /// Navigation entries.
    pub async fn navigation(&self) -> Vec<NavigationItem> {
        self.settings()
            .await
            .map(|s| s.navigation.clone())
            .unwrap_or_default()
    }

    /// Footer links in CMS order.
    pub async fn footer_links(&self) -> Vec<FooterLink> {
        self.settings()
            .await
            .map(|s| s.footer_links.clone())
            .unwrap_or_default()
    }

    /// Footer links grouped into columns by category.
    pub async fn footer_links_by_category(&self) -> Vec<(String, Vec<FooterLink>)> {
        self.settings()
            .await
            .map(|s| group_footer_links(&s.footer_links))
            .unwrap_or_default()
    }

    /// Social network links.
    pub async fn social_links(&self) -> Vec<SocialLink> {
        self.settings()
            .await
            .map(|s| s.social_links.clone())
            .unwrap_or_default()
    }

    /// Warm the cache ahead of the first request. Never fails.
    pub async fn preload(&self) {
        if self.cache.get().await.is_none() {
            tracing::warn!("Global settings preload found nothing to cache");
        }
    }
}
