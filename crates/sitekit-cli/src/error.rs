//! CLI-specific error types and mappings.
//!
//! Core services swallow CMS failures, so most errors here describe what
//! the user asked for and didn't get rather than why the CMS failed.

use sitekit_cms::CmsError;
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// The requested page doesn't exist or couldn't be loaded.
    #[error("Page '{0}' not found")]
    PageNotFound(String),

    /// Global settings have never been loaded successfully.
    #[error("Global settings are unavailable (is the CMS reachable at {0}?)")]
    SettingsUnavailable(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Output error.
    #[error("Output error: {0}")]
    Output(String),
}

impl CliError {
    /// Map error to appropriate exit code.
    ///
    /// Exit codes follow Unix conventions:
    /// - 0: Success
    /// - 1: General error
    /// - 64-78: Reserved for specific error categories (see sysexits.h)
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::PageNotFound(_) => 1,
            Self::SettingsUnavailable(_) => 69, // EX_UNAVAILABLE
            Self::Config(_) => 78,              // EX_CONFIG
            Self::Output(_) => 74,              // EX_IOERR
        }
    }
}

impl From<CmsError> for CliError {
    fn from(err: CmsError) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        Self::Output(err.to_string())
    }
}

/// Exit code for an error returned from a handler.
pub fn exit_code_for(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<CliError>().map_or(1, CliError::exit_code)
}
