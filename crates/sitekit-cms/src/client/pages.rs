//! Page collection reads.

use serde_json::Value;
use sitekit_core::PageData;

use crate::error::{CmsError, CmsResult};
use crate::http::HttpBackend;
use crate::models::StrapiResponse;
use crate::parsing::{parse_page, parse_page_slugs};
use crate::url::{build_page_url, build_slugs_url};

use super::CmsClient;

/// Upper bound on listing pages walked, in case pagination never ends.
const MAX_LISTING_PAGES: u32 = 100;

impl<B: HttpBackend> CmsClient<B> {
    /// Fetch the first page whose slug matches.
    ///
    /// Returns `Ok(None)` when the filter matches nothing.
    pub(crate) async fn page_by_slug(&self, slug: &str) -> CmsResult<Option<PageData>> {
        let url = build_page_url(&self.config, slug);
        let response: StrapiResponse<Vec<Value>> = self.backend.get_json(&url).await?;

        let Some(first) = response.data.first() else {
            return Ok(None);
        };

        parse_page(first)
            .map(Some)
            .ok_or_else(|| CmsError::invalid(format!("page '{slug}' is missing required fields")))
    }

    /// Walk the page listing and collect every slug.
    pub(crate) async fn all_page_slugs(&self) -> CmsResult<Vec<String>> {
        let mut slugs = Vec::new();
        let mut page = 1;

        loop {
            let url = build_slugs_url(&self.config, page);
            let response: StrapiResponse<Vec<Value>> = self.backend.get_json(&url).await?;
            slugs.extend(parse_page_slugs(&response.data));

            let has_more = response
                .meta
                .pagination
                .is_some_and(|pagination| pagination.has_more());
            if !has_more || page >= MAX_LISTING_PAGES {
                break;
            }
            page += 1;
        }

        Ok(slugs)
    }
}
