//! Activity event data structures
//!
//! This module defines the typed events produced by the payload decoder and
//! the `Title` key used to deduplicate issues and pull requests.

use chrono::{DateTime, Utc};
use std::fmt;

/// Kind of ref created by a create event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RefType {
    Branch,
    Tag,
    Repository,
    Other(String),
}

impl RefType {
    pub fn parse(value: &str) -> Self {
        match value {
            "branch" => RefType::Branch,
            "tag" => RefType::Tag,
            "repository" => RefType::Repository,
            other => RefType::Other(other.to_string()),
        }
    }
}

/// Action carried by a pull request event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PullRequestAction {
    Opened,
    Edited,
    Closed,
    Reopened,
    /// Any action outside the four that drive classification
    Other(String),
}

impl PullRequestAction {
    pub fn parse(value: &str) -> Self {
        match value {
            "opened" => PullRequestAction::Opened,
            "edited" => PullRequestAction::Edited,
            "closed" => PullRequestAction::Closed,
            "reopened" => PullRequestAction::Reopened,
            other => PullRequestAction::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            PullRequestAction::Opened => "opened",
            PullRequestAction::Edited => "edited",
            PullRequestAction::Closed => "closed",
            PullRequestAction::Reopened => "reopened",
            PullRequestAction::Other(action) => action,
        }
    }
}

/// The issue or pull request an event refers to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    /// Issue or pull request title as shown on the platform
    pub title: String,
    /// Browser URL of the issue or pull request
    pub url: String,
    /// Login of the issue / pull request author
    pub author: Option<String>,
    /// Whether the target is a pull request rather than a plain issue
    pub is_pull_request: bool,
}

impl Target {
    /// Create a plain issue target
    pub fn issue(title: &str, url: &str, author: Option<&str>) -> Self {
        Self {
            title: title.to_string(),
            url: url.to_string(),
            author: author.map(String::from),
            is_pull_request: false,
        }
    }

    /// Create a pull request target
    pub fn pull_request(title: &str, url: &str, author: Option<&str>) -> Self {
        Self {
            is_pull_request: true,
            ..Self::issue(title, url, author)
        }
    }

    /// Whether the target was authored by `user`. A missing author never matches.
    pub fn is_authored_by(&self, user: &str) -> bool {
        self.author.as_deref() == Some(user)
    }

    pub fn display_title(&self) -> Title {
        Title::new(&self.title, &self.url)
    }
}

/// Semantic kind of an activity event, with only the fields classification needs
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventKind {
    CommitComment,
    Create {
        ref_type: RefType,
    },
    IssueComment {
        target: Target,
    },
    Issues {
        action: String,
        target: Target,
    },
    PullRequest {
        action: PullRequestAction,
        target: Target,
        merged: bool,
    },
    PullRequestReviewComment {
        target: Target,
    },
    Push,
    /// A decodable event whose type is not classified
    Other {
        kind: String,
    },
}

impl EventKind {
    /// Short name used in log lines
    pub fn name(&self) -> &str {
        match self {
            EventKind::CommitComment => "commit_comment",
            EventKind::Create { .. } => "create",
            EventKind::IssueComment { .. } => "issue_comment",
            EventKind::Issues { .. } => "issues",
            EventKind::PullRequest { .. } => "pull_request",
            EventKind::PullRequestReviewComment { .. } => "pull_request_review_comment",
            EventKind::Push => "push",
            EventKind::Other { kind } => kind,
        }
    }
}

/// A single typed activity event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityEvent {
    /// Platform event identifier
    pub id: String,
    /// When the event was created
    pub created_at: DateTime<Utc>,
    pub kind: EventKind,
}

impl ActivityEvent {
    pub fn new(id: &str, created_at: DateTime<Utc>, kind: EventKind) -> Self {
        Self {
            id: id.to_string(),
            created_at,
            kind,
        }
    }
}

/// Display and deduplication key for an issue or pull request: `[text](url)`
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Title(String);

impl Title {
    pub fn new(text: &str, url: &str) -> Self {
        Title(format!("[{}]({})", text, url))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Title {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
