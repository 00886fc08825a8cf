//! User service library modules.
//!
//! The crate follows a ports-and-adapters layout: [`domain`] owns the user
//! model and its ports, [`outbound`] implements persistence over SQLite, and
//! [`inbound`] exposes the REST surface.

pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;

pub use middleware::Trace;
