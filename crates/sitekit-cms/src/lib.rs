#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

mod client;
mod config;
mod error;
mod http;
mod models;
mod parsing;
mod port;
mod url;

// ============================================================================
// Public API
// ============================================================================

// Client
pub use client::{CmsClient, DefaultCmsClient};

// Configuration
pub use config::{CmsClientConfig, DEFAULT_CMS_URL};

// Errors surfaced while building a client
pub use error::{CmsError, CmsResult};
