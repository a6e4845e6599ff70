//! Core domain types.
//!
//! These types represent the site content model, independent of the CMS
//! wire format (Strapi envelopes, v4/v5 media shapes, etc.).
//!
//! # Structure
//!
//! - `settings` - Global site settings (`GlobalSettings`, navigation, footer)
//! - `page` - Pages, sections and page metadata
//! - `media` - Uploaded media references

mod media;
mod page;
mod settings;

pub use media::MediaRef;
pub use page::{
    HOME_PAGE_SLUG, HeroSection, PageData, PageMetadata, PageType, Section, SectionKind,
};
pub use settings::{
    FooterLink, GlobalSettings, NavigationItem, SocialLink, UNCATEGORIZED_FOOTER_CATEGORY,
    group_footer_links,
};
