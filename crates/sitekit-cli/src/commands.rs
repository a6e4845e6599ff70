//! Main commands enum.
//!
//! This module defines the available commands for the CLI tool.

use clap::Subcommand;

/// Available commands.
///
/// Settings commands go through the settings cache; page commands query
/// the CMS directly.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show the global site settings
    Settings {
        /// Re-read the settings every SECS seconds
        #[arg(long, value_name = "SECS")]
        watch: Option<u64>,
        /// Number of reads in watch mode
        #[arg(long, default_value_t = 5, requires = "watch")]
        count: u32,
    },

    /// Show the navigation menu
    Nav,

    /// Show footer links grouped by category
    Footer,

    /// Show social links
    Social,

    /// Show a page and its sections
    Page {
        /// Page slug (e.g., "home-page", "career")
        slug: String,
    },

    /// List every page slug
    Slugs,

    /// Show the document title and description for a page
    Meta {
        /// Page slug
        slug: String,
    },
}
