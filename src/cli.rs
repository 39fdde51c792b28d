use crate::config::Config;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "ghweekly")]
#[command(version, about = "Weekly GitHub status report generator")]
pub struct Cli {
    /// GitHub user name whose events are reported
    #[arg(short, long)]
    pub user: Option<String>,

    /// Start date in MM-DD-YYYY format (default: Monday of the last completed week)
    #[arg(short, long)]
    pub start: Option<String>,

    /// Duration of time from the start, e.g. 7d, 168h, 1w, 1.5h (units: ns us ms s m h d w)
    #[arg(short, long)]
    pub duration: Option<String>,

    /// Path to a file holding the API token
    #[arg(long)]
    pub token_file: Option<PathBuf>,

    /// Read events from a saved JSON array instead of the API
    #[arg(long)]
    pub events_file: Option<PathBuf>,

    /// Config file path (default: ~/.ghweekly/config.toml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Include private events visible to the token
    #[arg(long)]
    pub all_events: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Initialize configuration file
    #[arg(long = "init")]
    pub init: bool,

    /// Check configuration validity
    #[arg(long = "check")]
    pub check: bool,

    /// Print current configuration
    #[arg(long = "print")]
    pub print: bool,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Apply command line overrides on top of file configuration
    pub fn apply_to(&self, config: &mut Config) {
        if let Some(user) = &self.user {
            config.user = Some(user.clone());
        }
        if let Some(duration) = &self.duration {
            config.duration = duration.clone();
        }
        if let Some(token_file) = &self.token_file {
            config.token_file = Some(token_file.clone());
        }
        if self.all_events {
            config.public_only = false;
        }
    }

    /// Log filter directive for the requested verbosity
    pub fn log_level(&self) -> Option<&'static str> {
        match self.verbose {
            0 => None,
            1 => Some("info"),
            2 => Some("debug"),
            _ => Some("trace"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flags() {
        let cli = Cli::try_parse_from([
            "ghweekly",
            "--user",
            "octocat",
            "--start",
            "01-08-2024",
            "--duration",
            "14d",
            "--all-events",
            "-vv",
        ])
        .unwrap();

        assert_eq!(cli.user.as_deref(), Some("octocat"));
        assert_eq!(cli.start.as_deref(), Some("01-08-2024"));
        assert_eq!(cli.duration.as_deref(), Some("14d"));
        assert!(cli.all_events);
        assert_eq!(cli.log_level(), Some("debug"));
    }

    #[test]
    fn test_apply_to_overrides_config() {
        let cli = Cli::try_parse_from([
            "ghweekly",
            "-u",
            "octocat",
            "--token-file",
            "/tmp/token",
            "--all-events",
        ])
        .unwrap();

        let mut config = Config {
            user: Some("someone".to_string()),
            ..Config::default()
        };
        cli.apply_to(&mut config);

        assert_eq!(config.user.as_deref(), Some("octocat"));
        assert_eq!(config.token_file, Some(PathBuf::from("/tmp/token")));
        assert!(!config.public_only);
        assert_eq!(config.duration, "7d");
    }

    #[test]
    fn test_apply_to_keeps_config_values() {
        let cli = Cli::try_parse_from(["ghweekly"]).unwrap();
        let mut config = Config {
            user: Some("someone".to_string()),
            duration: "3d".to_string(),
            ..Config::default()
        };
        cli.apply_to(&mut config);

        assert_eq!(config.user.as_deref(), Some("someone"));
        assert_eq!(config.duration, "3d");
        assert!(config.public_only);
        assert_eq!(cli.log_level(), None);
    }
}
