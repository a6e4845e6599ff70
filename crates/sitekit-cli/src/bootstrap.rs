//! CLI bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together
//! for the CLI adapter: the CMS client is built here, wrapped as a
//! `ContentApiPort` and handed to `SiteCore` with the system clock.

use std::sync::Arc;
use std::time::Duration;

use sitekit_cms::{CmsClientConfig, DefaultCmsClient};
use sitekit_core::{Clock, ContentApiPort, SiteCore, SystemClock};

use crate::error::CliError;
use crate::parser::Cli;

/// Bootstrap configuration for the CLI.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// CMS origin.
    pub cms_url: String,
    /// Optional API token.
    pub token: Option<String>,
    /// Per-request timeout.
    pub timeout: Duration,
    /// Retries for server and network errors.
    pub retries: u8,
    /// How long fetched global settings are served from the cache.
    pub freshness_window: Duration,
    /// Emit JSON instead of formatted text.
    pub json: bool,
}

impl CliConfig {
    /// Build the config from parsed arguments (flags, env vars, `.env`).
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            cms_url: cli.cms_url.clone(),
            token: cli.token.clone().filter(|token| !token.trim().is_empty()),
            timeout: Duration::from_secs(cli.timeout_secs),
            retries: cli.retries,
            freshness_window: Duration::from_secs(cli.freshness_secs),
            json: cli.json,
        }
    }

    fn client_config(&self) -> CmsClientConfig {
        CmsClientConfig::new()
            .with_base_url(self.cms_url.clone())
            .with_optional_token(self.token.clone())
            .with_timeout(self.timeout)
            .with_max_retries(self.retries)
    }
}

/// Fully composed application context for CLI commands.
pub struct CliContext {
    /// The core application facade.
    pub core: SiteCore,
    /// CMS origin, used for messages and absolute media URLs.
    pub cms_url: String,
    /// Emit JSON instead of formatted text.
    pub json: bool,
}

impl CliContext {
    /// Access the `SiteCore`.
    pub const fn core(&self) -> &SiteCore {
        &self.core
    }
}

/// Bootstrap the CLI application.
///
/// Fails only when the CMS client can't be built (for example an
/// unparseable `--cms-url`). Connectivity is not checked here.
pub fn bootstrap(config: CliConfig) -> Result<CliContext, CliError> {
    let client = DefaultCmsClient::new(&config.client_config())?;
    tracing::debug!(
        cms_url = %config.cms_url,
        authenticated = config.token.is_some(),
        retries = config.retries,
        "CMS client configured"
    );

    Ok(bootstrap_with(
        &config,
        Arc::new(client),
        Arc::new(SystemClock),
    ))
}

/// Bootstrap with a custom content port and clock (for testing).
pub fn bootstrap_with(
    config: &CliConfig,
    content: Arc<dyn ContentApiPort>,
    clock: Arc<dyn Clock>,
) -> CliContext {
    CliContext {
        core: SiteCore::with_freshness_window(content, clock, config.freshness_window),
        cms_url: config.cms_url.clone(),
        json: config.json,
    }
}
