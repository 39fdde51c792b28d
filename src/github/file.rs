//! Event source backed by a saved events API response

use super::payload::{decode_events, parse_events_json};
use super::EventSource;
use crate::core::activity::ActivityEvent;
use crate::error::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Reads a JSON array of raw GitHub events from disk
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl EventSource for FileSource {
    /// The file is assumed to hold only `user`'s events; no filtering by actor is done.
    fn list_events(&self, user: &str) -> Result<Vec<ActivityEvent>> {
        let content = fs::read_to_string(&self.path)?;
        let raw = parse_events_json(&content).map_err(|e| {
            Error::fetch(1, format!("invalid events file '{}': {}", self.path.display(), e))
        })?;

        tracing::info!(user, path = %self.path.display(), count = raw.len(), "loaded events file");
        decode_events(raw)
    }
}
