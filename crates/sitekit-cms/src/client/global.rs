//! Global settings single type.

use serde_json::Value;
use sitekit_core::GlobalSettings;

use crate::error::CmsResult;
use crate::http::HttpBackend;
use crate::models::StrapiResponse;
use crate::parsing::parse_global_settings;
use crate::url::build_global_url;

use super::CmsClient;

impl<B: HttpBackend> CmsClient<B> {
    /// Fetch and parse the global settings.
    pub(crate) async fn global_settings(&self) -> CmsResult<GlobalSettings> {
        let url = build_global_url(&self.config);
        let response: StrapiResponse<Value> = self.backend.get_json(&url).await?;
        parse_global_settings(&response.data)
    }
}
