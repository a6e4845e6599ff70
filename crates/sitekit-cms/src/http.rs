//! HTTP backend abstraction for the CMS API.
//!
//! This module provides a trait-based HTTP backend that allows for
//! dependency injection and easy testing. The production implementation
//! uses reqwest with optional retry logic for transient errors.

use crate::error::{CmsError, CmsResult};
use crate::models::CmsConfig;
use crate::url::resource_name;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::time::Duration;
use url::Url;

// ============================================================================
// HTTP Backend Trait
// ============================================================================

/// Trait for HTTP backends that can fetch JSON from URLs.
///
/// This is an implementation detail - external code should use the
/// `ContentApiPort` trait.
#[async_trait]
pub trait HttpBackend: Send + Sync {
    /// Fetch JSON from a URL and deserialize it.
    async fn get_json<T: DeserializeOwned + Send>(&self, url: &Url) -> CmsResult<T>;
}

// ============================================================================
// Reqwest Backend
// ============================================================================

/// Production HTTP backend using reqwest.
///
/// When retries are enabled, server errors (5xx) and network errors are
/// retried with exponential backoff. Client errors fail immediately.
pub struct ReqwestBackend {
    client: reqwest::Client,
    max_retries: u8,
    retry_base_delay_ms: u64,
    auth_token: Option<String>,
}

impl ReqwestBackend {
    /// Create a new reqwest backend with the given configuration.
    pub fn new(config: &CmsConfig) -> CmsResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self {
            client,
            max_retries: config.max_retries,
            retry_base_delay_ms: config.retry_base_delay_ms,
            auth_token: config.token.clone(),
        })
    }

    /// Build a request with optional authentication.
    fn build_request(&self, url: &Url) -> reqwest::RequestBuilder {
        let request = self.client.get(url.as_str());
        match self.auth_token {
            Some(ref token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// Fetch a URL, retrying transient errors when configured to.
    async fn fetch_with_retry(&self, url: &Url) -> CmsResult<reqwest::Response> {
        let mut attempt: u8 = 0;

        loop {
            if attempt > 0 {
                tokio::time::sleep(backoff_delay(self.retry_base_delay_ms, attempt)).await;
            }

            let can_retry = attempt < self.max_retries;
            attempt = attempt.saturating_add(1);

            match self.build_request(url).send().await {
                Ok(response) if response.status().is_success() => return Ok(response),
                Ok(response) => match decide_on_status(response.status().as_u16(), can_retry, url)
                {
                    RetryDecision::Retry => {}
                    RetryDecision::Fail(err) => return Err(err),
                },
                // Network errors are retryable
                Err(_) if can_retry => {}
                Err(e) => return Err(e.into()),
            }
        }
    }
}

/// What to do after a request came back with a non-success status.
#[derive(Debug)]
enum RetryDecision {
    Retry,
    Fail(CmsError),
}

/// Decide between retrying and failing for a non-success `status`.
///
/// Only server errors (5xx) are retried, and only while retries remain.
fn decide_on_status(status: u16, can_retry: bool, url: &Url) -> RetryDecision {
    if (500..600).contains(&status) && can_retry {
        return RetryDecision::Retry;
    }

    if status == 404 {
        return RetryDecision::Fail(CmsError::NotFound {
            resource: resource_name(url.as_str()),
        });
    }

    RetryDecision::Fail(CmsError::ApiRequestFailed {
        status,
        url: url.to_string(),
    })
}

/// Delay before retry number `attempt` (1-based): `base`, `2 * base`,
/// `4 * base`, ...
fn backoff_delay(base_ms: u64, attempt: u8) -> Duration {
    let exponent = u32::from(attempt.max(1)) - 1;
    Duration::from_millis(base_ms.saturating_mul(2u64.saturating_pow(exponent)))
}

#[async_trait]
impl HttpBackend for ReqwestBackend {
    async fn get_json<T: DeserializeOwned + Send>(&self, url: &Url) -> CmsResult<T> {
        let response = self.fetch_with_retry(url).await?;
        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

// ============================================================================
// Fake Backend for Testing
// ============================================================================

#[cfg(test)]
pub mod testing {
    use super::*;
    use std::sync::Mutex;

    /// Canned outcome for the fake backend.
    #[derive(Clone)]
    pub enum CannedResponse {
        Json(serde_json::Value),
        Status(u16),
    }

    /// A fake HTTP backend that returns canned responses and records every
    /// requested URL.
    pub struct FakeBackend {
        responses: Vec<(String, CannedResponse)>,
        requests: Mutex<Vec<String>>,
    }

    impl FakeBackend {
        /// Create a new fake backend.
        pub const fn new() -> Self {
            Self {
                responses: Vec::new(),
                requests: Mutex::new(Vec::new()),
            }
        }

        /// Answer URLs containing `url_contains` with `json`. Earlier
        /// patterns win.
        pub fn with_json(mut self, url_contains: &str, json: serde_json::Value) -> Self {
            self.responses
                .push((url_contains.to_string(), CannedResponse::Json(json)));
            self
        }

        /// Answer URLs containing `url_contains` with an error status.
        pub fn with_status(mut self, url_contains: &str, status: u16) -> Self {
            self.responses
                .push((url_contains.to_string(), CannedResponse::Status(status)));
            self
        }

        /// URLs requested so far, in order.
        pub fn requests(&self) -> Vec<String> {
            self.requests.lock().unwrap().clone()
        }

        fn find_response(&self, url: &str) -> Option<CannedResponse> {
            self.responses
                .iter()
                .find(|(pattern, _)| url.contains(pattern.as_str()))
                .map(|(_, response)| response.clone())
        }
    }

    impl Default for FakeBackend {
        fn default() -> Self {
            Self::new()
        }
    }

    #[async_trait]
    impl HttpBackend for FakeBackend {
        async fn get_json<T: DeserializeOwned + Send>(&self, url: &Url) -> CmsResult<T> {
            self.requests.lock().unwrap().push(url.to_string());

            match self.find_response(url.as_str()) {
                Some(CannedResponse::Json(json)) => serde_json::from_value(json).map_err(Into::into),
                Some(CannedResponse::Status(404)) | None => Err(CmsError::NotFound {
                    resource: resource_name(url.as_str()),
                }),
                Some(CannedResponse::Status(status)) => Err(CmsError::ApiRequestFailed {
                    status,
                    url: url.to_string(),
                }),
            }
        }
    }
}
