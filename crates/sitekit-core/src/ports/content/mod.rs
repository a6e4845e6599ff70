//! Content API port definitions.

mod client;
mod error;

#[cfg(test)]
pub use client::MockContentApiPort;
pub use client::ContentApiPort;
pub use error::{ContentPortError, ContentPortResult};
