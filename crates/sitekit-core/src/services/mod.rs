//! Core services - the application's business logic layer.
//!
//! This module contains high-level service abstractions that orchestrate
//! between ports (trait interfaces) and domain logic. Services here are
//! pure orchestrators - they don't know about concrete implementations.

mod global_settings;
mod page_service;
mod settings_cache;
mod site_core;

pub use global_settings::GlobalSettingsService;
pub use page_service::PageService;
pub use settings_cache::{FRESHNESS_WINDOW, SettingsCache};
pub use site_core::SiteCore;
