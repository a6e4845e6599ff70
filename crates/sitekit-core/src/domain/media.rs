//! Uploaded media references.

use serde::{Deserialize, Serialize};

/// Reference to an uploaded media asset (image, icon).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaRef {
    pub id: u64,
    /// Asset URL. May be relative to the CMS origin.
    pub url: String,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
    #[serde(default, alias = "alternativeText")]
    pub alternative_text: Option<String>,
}

impl MediaRef {
    /// Resolve the asset URL against the CMS origin when it is relative.
    pub fn absolute_url(&self, origin: &str) -> String {
        if self.url.starts_with("http://") || self.url.starts_with("https://") {
            self.url.clone()
        } else {
            format!(
                "{}/{}",
                origin.trim_end_matches('/'),
                self.url.trim_start_matches('/')
            )
        }
    }
}
