//! Activity classification module
//!
//! This module provides functionality for:
//! - Typed activity events and the `Title` deduplication key
//! - Restricting events to a reporting time window
//! - Classifying events into the six report sets
//! - Reconciling overlapping set membership

pub mod classifier;
pub mod sets;
pub mod types;
pub mod window;

// Re-export commonly used items
pub use classifier::{Classifier, DEFAULT_WIP_MARKER};
pub use sets::EventSets;
pub use types::{ActivityEvent, EventKind, PullRequestAction, RefType, Target, Title};
pub use window::TimeWindow;
