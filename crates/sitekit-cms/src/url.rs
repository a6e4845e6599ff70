//! URL construction helpers for the Strapi REST API.
//!
//! This module provides pure functions for building CMS API URLs,
//! ensuring consistent URL construction across all API calls.

use crate::models::CmsConfig;
use url::Url;

/// Join an API path onto the configured origin, keeping any path prefix
/// the origin already has (e.g. a CMS mounted under `/cms`).
fn api_url(config: &CmsConfig, path: &str) -> Url {
    let mut url = config.base_url.clone();
    let base_path = url.path().trim_end_matches('/');
    url.set_path(&format!("{base_path}/api/{path}"));
    url.set_query(None);
    url
}

/// URL of the global settings single type, with all relations populated.
pub fn build_global_url(config: &CmsConfig) -> Url {
    let mut url = api_url(config, "global");
    url.set_query(Some("populate=*"));
    url
}

/// URL of the page matching `slug`, with its sections populated.
pub fn build_page_url(config: &CmsConfig, slug: &str) -> Url {
    let mut url = api_url(config, "pages");
    url.set_query(Some(&format!(
        "filters[slug]={}&populate[sections][populate]=*",
        urlencoding::encode(slug)
    )));
    url
}

/// URL of one page of the slug listing.
pub fn build_slugs_url(config: &CmsConfig, page: u32) -> Url {
    let mut url = api_url(config, "pages");
    url.set_query(Some(&format!(
        "fields[0]=slug&pagination[page]={page}&pagination[pageSize]={}",
        config.page_size.clamp(1, 100)
    )));
    url
}

/// The collection or single type a CMS API URL addresses (`pages`, `global`).
pub fn resource_name(url: &str) -> String {
    let path = Url::parse(url).map_or_else(|_| url.to_string(), |u| u.path().to_string());
    path.split("/api/")
        .nth(1)
        .and_then(|rest| rest.split('/').next())
        .filter(|name| !name.is_empty())
        .map_or(path.clone(), String::from)
}
