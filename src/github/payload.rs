//! Decoding of raw GitHub event objects into typed activity events
//!
//! The events API returns objects of the form
//! `{"id", "type", "created_at", "payload"}` where the shape of `payload`
//! depends on `type`. Decoding happens in two steps: the envelope is read
//! first, then the payload is decoded according to the type name. Unknown
//! type names are kept as `EventKind::Other`; a known type whose payload does
//! not match its shape is a fatal decode error.

use crate::core::activity::{ActivityEvent, EventKind, PullRequestAction, RefType, Target};
use crate::error::{Error, Result};
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

/// Event envelope as returned by the events API
#[derive(Debug, Clone, Deserialize)]
pub struct RawEvent {
    pub id: String,
    /// Event type name, e.g. "PullRequestEvent"
    #[serde(rename = "type")]
    pub event_type: String,
    pub created_at: DateTime<Utc>,
    /// Type-specific payload
    #[serde(default)]
    pub payload: Value,
}

#[derive(Debug, Deserialize)]
struct User {
    login: Option<String>,
}

/// Issue object; pull requests seen through the issues API carry a `pull_request` member
#[derive(Debug, Deserialize)]
struct Issue {
    #[serde(default)]
    title: String,
    #[serde(default)]
    html_url: String,
    user: Option<User>,
    pull_request: Option<Value>,
}

impl Issue {
    fn into_target(self) -> Target {
        Target {
            title: self.title,
            url: self.html_url,
            author: self.user.and_then(|u| u.login),
            is_pull_request: self.pull_request.is_some(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct PullRequest {
    #[serde(default)]
    title: String,
    #[serde(default)]
    html_url: String,
    user: Option<User>,
    #[serde(default)]
    merged: bool,
}

impl PullRequest {
    fn into_target(self) -> (Target, bool) {
        let target = Target {
            title: self.title,
            url: self.html_url,
            author: self.user.and_then(|u| u.login),
            is_pull_request: true,
        };
        (target, self.merged)
    }
}

#[derive(Debug, Deserialize)]
struct CreatePayload {
    ref_type: String,
}

#[derive(Debug, Deserialize)]
struct IssueCommentPayload {
    issue: Issue,
}

#[derive(Debug, Deserialize)]
struct IssuesPayload {
    #[serde(default)]
    action: String,
    issue: Issue,
}

#[derive(Debug, Deserialize)]
struct PullRequestPayload {
    #[serde(default)]
    action: String,
    pull_request: PullRequest,
}

#[derive(Debug, Deserialize)]
struct ReviewCommentPayload {
    pull_request: PullRequest,
}

/// Decode the payload of `raw` as `T`, attributing failures to the event
fn payload<T: DeserializeOwned>(raw: &RawEvent) -> Result<T> {
    T::deserialize(&raw.payload).map_err(|source| Error::Decode {
        id: raw.id.clone(),
        kind: raw.event_type.clone(),
        source,
    })
}

/// Decode one raw event into a typed activity event
pub fn decode_event(raw: RawEvent) -> Result<ActivityEvent> {
    let kind = match raw.event_type.as_str() {
        "CommitCommentEvent" => EventKind::CommitComment,
        "CreateEvent" => {
            let p: CreatePayload = payload(&raw)?;
            EventKind::Create {
                ref_type: RefType::parse(&p.ref_type),
            }
        }
        "IssueCommentEvent" => {
            let p: IssueCommentPayload = payload(&raw)?;
            EventKind::IssueComment {
                target: p.issue.into_target(),
            }
        }
        "IssuesEvent" => {
            let p: IssuesPayload = payload(&raw)?;
            EventKind::Issues {
                action: p.action,
                target: p.issue.into_target(),
            }
        }
        "PullRequestEvent" => {
            let p: PullRequestPayload = payload(&raw)?;
            let (target, merged) = p.pull_request.into_target();
            EventKind::PullRequest {
                action: PullRequestAction::parse(&p.action),
                target,
                merged,
            }
        }
        "PullRequestReviewCommentEvent" => {
            let p: ReviewCommentPayload = payload(&raw)?;
            EventKind::PullRequestReviewComment {
                target: p.pull_request.into_target().0,
            }
        }
        "PushEvent" => EventKind::Push,
        other => EventKind::Other {
            kind: other.to_string(),
        },
    };

    Ok(ActivityEvent {
        id: raw.id,
        created_at: raw.created_at,
        kind,
    })
}

/// String form of an envelope member, for naming an event that failed to decode
fn envelope_field(value: &Value, key: &str) -> String {
    match value.get(key) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Null) | None => "unknown".to_string(),
        Some(other) => other.to_string(),
    }
}

/// Read the envelope of one event object; a bad envelope fails that event alone
pub fn decode_envelope(value: Value) -> Result<RawEvent> {
    let id = envelope_field(&value, "id");
    let kind = envelope_field(&value, "type");
    RawEvent::deserialize(value).map_err(|source| Error::Decode { id, kind, source })
}

/// Decode a batch of event objects, stopping at the first malformed one
pub fn decode_events(values: Vec<Value>) -> Result<Vec<ActivityEvent>> {
    values
        .into_iter()
        .map(|value| decode_envelope(value).and_then(decode_event))
        .collect()
}

/// Split a JSON array into per-event objects without decoding them
pub fn parse_events_json(content: &str) -> serde_json::Result<Vec<Value>> {
    serde_json::from_str(content)
}
