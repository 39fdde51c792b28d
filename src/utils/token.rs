//! API token loading
//!
//! A token file takes precedence over the `GITHUB_TOKEN` environment
//! variable. Without either, requests are sent unauthenticated.

use crate::error::{Error, Result};
use std::fs;
use std::path::Path;

/// Environment variable consulted when no token file is configured
pub const TOKEN_ENV_VAR: &str = "GITHUB_TOKEN";

/// Read a token file, dropping the trailing newline
pub fn read_token_file<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| Error::Token {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(content.trim_end_matches(['\n', '\r']).to_string())
}

/// Pick the token to use from an optional token file and an optional env value
pub fn resolve_token(token_file: Option<&Path>, env_token: Option<String>) -> Result<Option<String>> {
    if let Some(path) = token_file {
        return read_token_file(path).map(Some);
    }

    Ok(env_token.filter(|t| !t.trim().is_empty()))
}
