//! Event classification into report sets
//!
//! Each event is dispatched on its kind (and, for pull requests, its action)
//! and its target's `Title` is added to one of the `EventSets` buckets. Set
//! membership deduplicates, so the final state does not depend on event
//! order.

use super::sets::EventSets;
use super::types::{ActivityEvent, EventKind, PullRequestAction, Target};

/// Marker that flags a newly opened pull request as still in progress
pub const DEFAULT_WIP_MARKER: &str = "WIP";

/// Classifies events on behalf of a tracked user
#[derive(Debug, Clone)]
pub struct Classifier {
    /// Login whose own pull requests count as "under review" rather than "reviewed"
    user: String,
    /// Substring of a pull request title that marks it as work in progress
    wip_marker: String,
}

impl Classifier {
    pub fn new(user: &str) -> Self {
        Self {
            user: user.to_string(),
            wip_marker: DEFAULT_WIP_MARKER.to_string(),
        }
    }

    pub fn with_wip_marker(mut self, marker: &str) -> Self {
        self.wip_marker = marker.to_string();
        self
    }

    pub fn user(&self) -> &str {
        &self.user
    }

    /// Classify all events and reconcile the resulting sets
    pub fn classify(&self, events: &[ActivityEvent]) -> EventSets {
        let mut sets = EventSets::new();
        for event in events {
            self.apply(&mut sets, event);
        }
        sets.reconcile();

        tracing::info!(events = events.len(), entries = sets.total(), "classified events");
        sets
    }

    /// Apply a single event to `sets` without reconciling
    pub fn apply(&self, sets: &mut EventSets, event: &ActivityEvent) {
        match &event.kind {
            EventKind::CommitComment => {
                tracing::debug!(id = %event.id, "skipping commit comment event");
            }
            EventKind::Create { ref_type } => {
                tracing::trace!(id = %event.id, ?ref_type, "skipping create event");
            }
            EventKind::IssueComment { target } => {
                if !target.is_pull_request {
                    sets.issues.insert(target.display_title());
                } else if target.is_authored_by(&self.user) {
                    sets.under_review.insert(target.display_title());
                } else {
                    sets.reviewed.insert(target.display_title());
                }
            }
            EventKind::Issues { action, target } => {
                if target.is_pull_request {
                    sets.reviewed.insert(target.display_title());
                } else {
                    tracing::debug!(%action, title = %target.display_title(), "added issue event");
                    sets.issues.insert(target.display_title());
                }
            }
            EventKind::PullRequest {
                action,
                target,
                merged,
            } => self.apply_pull_request(sets, action, target, *merged),
            EventKind::PullRequestReviewComment { target } => {
                if target.is_authored_by(&self.user) {
                    sets.under_review.insert(target.display_title());
                } else {
                    sets.reviewed.insert(target.display_title());
                }
            }
            EventKind::Push => {}
            EventKind::Other { kind } => {
                tracing::debug!(id = %event.id, %kind, "skipping unrecognized event type");
            }
        }
    }

    fn apply_pull_request(
        &self,
        sets: &mut EventSets,
        action: &PullRequestAction,
        target: &Target,
        merged: bool,
    ) {
        let title = target.display_title();
        match action {
            PullRequestAction::Opened => {
                if target.title.contains(&self.wip_marker) {
                    sets.in_progress.insert(title);
                } else {
                    sets.under_review.insert(title);
                }
            }
            PullRequestAction::Edited | PullRequestAction::Reopened => {
                sets.in_progress.insert(title);
            }
            PullRequestAction::Closed => {
                tracing::debug!(%title, merged, "pull request closed");
                if merged {
                    sets.merged.insert(title);
                } else {
                    sets.abandoned.insert(title);
                }
            }
            PullRequestAction::Other(other) => {
                tracing::warn!(action = %other, %title, "unknown pull request action");
            }
        }
    }
}
