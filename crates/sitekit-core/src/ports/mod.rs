//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces that the core domain expects from infrastructure.
//! They contain no implementation details and use only domain types.
//!
//! # Design Rules
//!
//! - No `reqwest` or CMS wire types in any signature
//! - Time is read through [`Clock`], never from the system directly

pub mod clock;
pub mod content;

pub use clock::{Clock, ManualClock, SystemClock};
#[cfg(test)]
pub use content::MockContentApiPort;
pub use content::{ContentApiPort, ContentPortError, ContentPortResult};
