//! Paginated GitHub events API client
//!
//! Fetches `GET /users/{user}/events/public` (or `/events` for all events
//! visible to the token) page by page, following the `Link` header until no
//! `rel="next"` entry remains.

use super::payload::decode_events;
use super::EventSource;
use crate::core::activity::ActivityEvent;
use crate::error::{Error, Result};
use regex::Regex;
use serde_json::Value;
use std::sync::OnceLock;
use std::time::Duration;

/// Default API base URL
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Default number of events requested per page
pub const DEFAULT_PER_PAGE: u32 = 30;

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

static PAGE_PARAM: OnceLock<Regex> = OnceLock::new();

fn page_param() -> &'static Regex {
    PAGE_PARAM.get_or_init(|| Regex::new(r"[?&]page=(\d+)").expect("page regex should compile"))
}

/// Extract the next page number from a `Link` response header.
///
/// The header looks like
/// `<https://api.github.com/user/1/events?page=2>; rel="next", <...?page=10>; rel="last"`.
pub fn next_page(link: &str) -> Option<u32> {
    link.split(',')
        .find(|part| part.contains(r#"rel="next""#))
        .and_then(|part| page_param().captures(part))
        .and_then(|caps| caps[1].parse().ok())
}

/// Fetch pages starting at 1 and concatenate their items.
///
/// `fetch` returns a page's items and the page named by its `rel="next"`
/// link. Paging stops when there is no next page or it does not advance;
/// any failed page aborts the whole listing.
pub fn collect_pages<T, F>(mut fetch: F) -> Result<Vec<T>>
where
    F: FnMut(u32) -> Result<(Vec<T>, Option<u32>)>,
{
    let mut items = Vec::new();
    let mut page = 1;

    loop {
        let (batch, next) = fetch(page)?;
        tracing::debug!(page, count = batch.len(), "fetched events page");
        items.extend(batch);

        match next {
            Some(next) if next > page => page = next,
            _ => break,
        }
    }

    Ok(items)
}

/// Settings for `GitHubClient`
#[derive(Debug, Clone)]
pub struct ClientOptions {
    /// API base URL without trailing slash
    pub api_url: String,
    /// Bearer token; unauthenticated when `None`
    pub token: Option<String>,
    /// Only list public events
    pub public_only: bool,
    pub per_page: u32,
    pub timeout: Duration,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            token: None,
            public_only: true,
            per_page: DEFAULT_PER_PAGE,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

/// Blocking GitHub events client
pub struct GitHubClient {
    agent: ureq::Agent,
    options: ClientOptions,
}

impl GitHubClient {
    pub fn new(options: ClientOptions) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(options.timeout)
            .user_agent(&format!("ghweekly/{}", env!("CARGO_PKG_VERSION")))
            .build();

        Self { agent, options }
    }

    /// Events endpoint URL for `user`
    pub fn events_url(&self, user: &str) -> String {
        let base = self.options.api_url.trim_end_matches('/');
        if self.options.public_only {
            format!("{}/users/{}/events/public", base, user)
        } else {
            format!("{}/users/{}/events", base, user)
        }
    }

    /// Fetch a single page, returning its event objects and the next page number
    fn fetch_page(&self, url: &str, page: u32) -> Result<(Vec<Value>, Option<u32>)> {
        let mut request = self
            .agent
            .get(url)
            .set("Accept", "application/vnd.github+json")
            .query("per_page", &self.options.per_page.to_string())
            .query("page", &page.to_string());

        if let Some(token) = &self.options.token {
            request = request.set("Authorization", &format!("Bearer {}", token));
        }

        let response = match request.call() {
            Ok(response) => response,
            Err(ureq::Error::Status(code, response)) => {
                let body = response.into_string().unwrap_or_default();
                return Err(Error::fetch(
                    page,
                    format!("HTTP {}: {}", code, body.trim()),
                ));
            }
            Err(ureq::Error::Transport(transport)) => {
                return Err(Error::fetch(page, transport.to_string()));
            }
        };

        let next = response.header("Link").and_then(next_page);
        // Envelopes are decoded per event so one bad event is reported by id
        let events: Vec<Value> = response
            .into_json()
            .map_err(|e| Error::fetch(page, format!("invalid response body: {}", e)))?;

        Ok((events, next))
    }
}

impl EventSource for GitHubClient {
    fn list_events(&self, user: &str) -> Result<Vec<ActivityEvent>> {
        let url = self.events_url(user);
        let raw = collect_pages(|page| self.fetch_page(&url, page))?;

        tracing::info!(user, count = raw.len(), "listed events");
        decode_events(raw)
    }
}
