//! Main CLI parser and top-level argument handling.
//!
//! This module defines the root CLI structure with global options.

use clap::Parser;

use sitekit_cms::DEFAULT_CMS_URL;

use crate::commands::Commands;

/// Command-line interface for reading site content from the CMS.
///
/// This is the top-level parser that handles global options and dispatches
/// to subcommands.
#[derive(Debug, Parser)]
#[command(name = "sitekit")]
#[command(about = "Inspect site settings and pages served by a Strapi CMS")]
#[command(version)]
pub struct Cli {
    /// CMS origin
    #[arg(long = "cms-url", env = "SITEKIT_CMS_URL", default_value = DEFAULT_CMS_URL, global = true)]
    pub cms_url: String,

    /// API token sent as a bearer token
    #[arg(long, env = "SITEKIT_CMS_TOKEN", hide_env_values = true, global = true)]
    pub token: Option<String>,

    /// Per-request timeout in seconds
    #[arg(long = "timeout-secs", default_value_t = 30, global = true)]
    pub timeout_secs: u64,

    /// Retry server and network errors this many times, with exponential
    /// backoff
    #[arg(long, default_value_t = 0, global = true)]
    pub retries: u8,

    /// Serve cached global settings for this many seconds before refetching
    #[arg(long = "freshness-secs", default_value_t = 60, global = true)]
    pub freshness_secs: u64,

    /// Print JSON instead of formatted text
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parser_builds() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_args() {
        let cli = Cli::parse_from([
            "sitekit",
            "--verbose",
            "--cms-url",
            "https://cms.example.com",
            "--timeout-secs",
            "5",
            "nav",
        ]);
        assert!(cli.verbose);
        assert_eq!(cli.cms_url, "https://cms.example.com");
        assert_eq!(cli.timeout_secs, 5);
        assert!(matches!(cli.command, Some(Commands::Nav)));
    }

    #[test]
    fn test_global_args_after_subcommand() {
        let cli = Cli::parse_from(["sitekit", "slugs", "--json", "--token", "secret"]);
        assert!(cli.json);
        assert_eq!(cli.token.as_deref(), Some("secret"));
    }

    #[test]
    fn test_retry_and_freshness_defaults() {
        let cli = Cli::parse_from(["sitekit", "settings"]);
        assert_eq!(cli.retries, 0);
        assert_eq!(cli.freshness_secs, 60);

        let cli = Cli::parse_from(["sitekit", "--retries", "3", "--freshness-secs", "5", "nav"]);
        assert_eq!(cli.retries, 3);
        assert_eq!(cli.freshness_secs, 5);
    }

    #[test]
    fn test_page_requires_slug() {
        assert!(Cli::try_parse_from(["sitekit", "page"]).is_err());
    }
}
