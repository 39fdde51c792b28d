use crate::core::activity::DEFAULT_WIP_MARKER;
use crate::core::period::{parse_duration, DEFAULT_DURATION};
use crate::core::report::{DEFAULT_HEADER, DEFAULT_INDENT};
use crate::error::{Error, Result};
use crate::github::client::{DEFAULT_API_URL, DEFAULT_PER_PAGE, DEFAULT_TIMEOUT_SECS};
use crate::github::ClientOptions;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Maximum page size accepted by the events API
const MAX_PER_PAGE: u32 = 100;

/// Main configuration, read from `~/.ghweekly/config.toml`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// GitHub login whose events are reported
    pub user: Option<String>,
    /// File holding an API token (trailing newline is ignored)
    pub token_file: Option<PathBuf>,
    /// Report window length, e.g. "7d" or "168h"
    pub duration: String,
    /// API base URL (GitHub Enterprise uses `https://host/api/v3`)
    pub api_url: String,
    /// Only list public events
    pub public_only: bool,
    /// Events requested per page (1-100)
    pub per_page: u32,
    /// HTTP timeout in seconds
    pub timeout_secs: u64,
    /// Title substring marking an opened pull request as in progress
    pub wip_marker: String,
    pub report: ReportConfig,
}

/// Report rendering options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Top-level bullet text
    pub header: String,
    /// Spaces per nesting level
    pub indent: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            user: None,
            token_file: None,
            duration: DEFAULT_DURATION.to_string(),
            api_url: DEFAULT_API_URL.to_string(),
            public_only: true,
            per_page: DEFAULT_PER_PAGE,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            wip_marker: DEFAULT_WIP_MARKER.to_string(),
            report: ReportConfig::default(),
        }
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            header: DEFAULT_HEADER.to_string(),
            indent: DEFAULT_INDENT,
        }
    }
}

impl Config {
    /// Tracked user, required for any report
    pub fn require_user(&self) -> Result<&str> {
        match self.user.as_deref().map(str::trim) {
            Some(user) if !user.is_empty() => Ok(user),
            _ => Err(Error::Config(
                "no GitHub user configured (use --user or set `user` in the config file)"
                    .to_string(),
            )),
        }
    }

    /// Parsed report window length
    pub fn window_duration(&self) -> Result<chrono::Duration> {
        parse_duration(&self.duration)
    }

    /// HTTP client settings derived from this config
    pub fn client_options(&self, token: Option<String>) -> ClientOptions {
        ClientOptions {
            api_url: self.api_url.clone(),
            token,
            public_only: self.public_only,
            per_page: self.per_page,
            timeout: Duration::from_secs(self.timeout_secs),
        }
    }

    /// Validate option values that do not depend on the tracked user
    pub fn validate(&self) -> Result<()> {
        self.window_duration()?;

        if !(self.api_url.starts_with("http://") || self.api_url.starts_with("https://")) {
            return Err(Error::Config(format!(
                "api_url must be an http(s) URL, got '{}'",
                self.api_url
            )));
        }

        if self.per_page == 0 || self.per_page > MAX_PER_PAGE {
            return Err(Error::Config(format!(
                "per_page must be between 1 and {}, got {}",
                MAX_PER_PAGE, self.per_page
            )));
        }

        if self.timeout_secs == 0 {
            return Err(Error::Config("timeout_secs must be positive".to_string()));
        }

        if self.wip_marker.is_empty() {
            return Err(Error::Config("wip_marker must not be empty".to_string()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.duration, "7d");
        assert_eq!(config.api_url, "https://api.github.com");
        assert!(config.public_only);
        assert_eq!(config.per_page, 30);
        assert_eq!(config.wip_marker, "WIP");
        assert_eq!(config.report.header, "GitHub");
        assert_eq!(config.report.indent, 4);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_require_user() {
        let mut config = Config::default();
        assert!(matches!(config.require_user(), Err(Error::Config(_))));

        config.user = Some("   ".to_string());
        assert!(config.require_user().is_err());

        config.user = Some("octocat".to_string());
        assert_eq!(config.require_user().unwrap(), "octocat");
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: Config = toml::from_str(
            r#"
            user = "octocat"
            duration = "14d"

            [report]
            indent = 2
            "#,
        )
        .unwrap();

        assert_eq!(config.user.as_deref(), Some("octocat"));
        assert_eq!(config.window_duration().unwrap(), chrono::Duration::days(14));
        assert_eq!(config.report.indent, 2);
        assert_eq!(config.report.header, "GitHub");
        assert_eq!(config.per_page, 30);
    }

    #[test]
    fn test_toml_roundtrip_skips_unset_options() {
        let config = Config::default();
        let content = toml::to_string_pretty(&config).unwrap();
        assert!(!content.contains("user ="));
        assert!(!content.contains("token_file"));
        let parsed: Config = toml::from_str(&content).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let cases: Vec<Box<dyn Fn(&mut Config)>> = vec![
            Box::new(|c| c.duration = "soon".to_string()),
            Box::new(|c| c.api_url = "ftp://example.com".to_string()),
            Box::new(|c| c.per_page = 0),
            Box::new(|c| c.per_page = 101),
            Box::new(|c| c.timeout_secs = 0),
            Box::new(|c| c.wip_marker = String::new()),
        ];

        for mutate in cases {
            let mut config = Config::default();
            mutate(&mut config);
            assert!(config.validate().is_err(), "{:?}", config);
        }
    }

    #[test]
    fn test_client_options() {
        let config = Config {
            public_only: false,
            per_page: 100,
            timeout_secs: 5,
            ..Config::default()
        };
        let options = config.client_options(Some("t".to_string()));
        assert!(!options.public_only);
        assert_eq!(options.per_page, 100);
        assert_eq!(options.timeout, Duration::from_secs(5));
        assert_eq!(options.token.as_deref(), Some("t"));
    }
}
