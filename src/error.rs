//! Error types shared by every stage of the report pipeline
//!
//! Every variant is fatal for a run: the binary prints the message and exits
//! without emitting a partial report.

use std::path::PathBuf;

/// Result type for ghweekly operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building a report
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unable to parse start date '{input}': {source}")]
    InvalidStartDate {
        input: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("Unable to parse duration '{0}'")]
    InvalidDuration(String),

    #[error("Unable to list events for page {page}: {message}")]
    Source { page: u32, message: String },

    #[error("Unable to parse event {id} ({kind}): {source}")]
    Decode {
        id: String,
        kind: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Unable to read token file '{}': {source}", .path.display())]
    Token {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config file: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Unable to serialize config: {0}")]
    ConfigWrite(#[from] toml::ser::Error),
}

impl Error {
    /// Build a source error for a failed page fetch
    pub fn fetch(page: u32, message: impl Into<String>) -> Self {
        Error::Source {
            page,
            message: message.into(),
        }
    }
}
