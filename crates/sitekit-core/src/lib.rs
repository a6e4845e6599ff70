//! Core domain types, ports and services for sitekit.
//!
//! `sitekit-core` knows nothing about HTTP or the CMS wire format. It owns
//! the content model, the [`ContentApiPort`] the CMS adapter implements, and
//! the services built on top of it, most notably the [`SettingsCache`] that
//! bounds how often the global settings are fetched.
#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod ports;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::{
    FooterLink, GlobalSettings, HOME_PAGE_SLUG, HeroSection, MediaRef, NavigationItem, PageData,
    PageMetadata, PageType, Section, SectionKind, SocialLink, UNCATEGORIZED_FOOTER_CATEGORY,
    group_footer_links,
};
pub use ports::{
    Clock, ContentApiPort, ContentPortError, ContentPortResult, ManualClock, SystemClock,
};
pub use services::{FRESHNESS_WINDOW, GlobalSettingsService, PageService, SettingsCache, SiteCore};
