//! GitHub event sources
//!
//! An `EventSource` produces the full, decoded activity stream of one user.
//! `GitHubClient` reads it from the REST events API; `FileSource` reads a
//! previously saved JSON array of events.

pub mod client;
pub mod file;
pub mod payload;

pub use client::{ClientOptions, GitHubClient};
pub use file::FileSource;
pub use payload::{decode_envelope, decode_event, decode_events, RawEvent};

use crate::core::activity::ActivityEvent;
use crate::error::Result;

/// Supplier of a user's activity events
pub trait EventSource {
    /// List every event performed by `user`, oldest page last.
    ///
    /// Any fetch or decode failure aborts the whole listing.
    fn list_events(&self, user: &str) -> Result<Vec<ActivityEvent>>;
}
