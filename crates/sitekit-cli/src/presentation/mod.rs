//! Shared CLI presentation utilities.
//!
//! Format-only helpers: they turn domain values into terminal text and
//! never call the CMS.

pub mod site_display;
pub mod tables;

// Re-export commonly used items
pub use site_display::{
    format_footer, format_metadata, format_navigation, format_page, format_settings,
    format_social,
};
pub use tables::{format_optional, separator, truncate_string};
