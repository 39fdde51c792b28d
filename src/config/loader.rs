use super::types::Config;
use crate::error::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Result of config initialization
#[derive(Debug)]
pub enum InitResult {
    /// Config was created at the given path
    Created(PathBuf),
    /// Config already existed at the given path
    AlreadyExists(PathBuf),
}

pub struct ConfigLoader;

impl ConfigLoader {
    /// Load the config from an explicit path, or from the default location.
    ///
    /// An explicit path must exist; a missing default file yields defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Config> {
        match explicit {
            Some(path) => Self::load_from_path(path),
            None => Config::load(),
        }
    }

    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Config> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            Error::Config(format!("unable to read config '{}': {}", path.display(), e))
        })?;
        let config: Config = toml::from_str(&content)?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Get the config directory path (~/.ghweekly/)
    pub fn get_config_dir() -> PathBuf {
        if let Some(home) = dirs::home_dir() {
            home.join(".ghweekly")
        } else {
            PathBuf::from(".ghweekly")
        }
    }
}

impl Config {
    /// Load configuration from default location
    pub fn load() -> Result<Config> {
        let config_path = Self::get_config_path();

        if !config_path.exists() {
            tracing::debug!(path = %config_path.display(), "no config file, using defaults");
            return Ok(Config::default());
        }

        ConfigLoader::load_from_path(config_path)
    }

    /// Save configuration to `path`, creating parent directories
    pub fn save_to<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();

        // Ensure config directory exists
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Get the default config file path (~/.ghweekly/config.toml)
    pub fn get_config_path() -> PathBuf {
        ConfigLoader::get_config_dir().join("config.toml")
    }

    /// Create a default config at `path` unless one already exists
    pub fn init_at<P: AsRef<Path>>(path: P) -> Result<InitResult> {
        let path = path.as_ref().to_path_buf();

        if path.exists() {
            return Ok(InitResult::AlreadyExists(path));
        }

        Config::default().save_to(&path)?;
        Ok(InitResult::Created(path))
    }

    /// Initialize config directory and create default config
    pub fn init() -> Result<InitResult> {
        Self::init_at(Self::get_config_path())
    }

    /// Validate configuration, including the tracked user
    pub fn check(&self) -> Result<()> {
        self.require_user()?;
        self.validate()?;

        if let Some(token_file) = &self.token_file {
            if !token_file.exists() {
                return Err(Error::Config(format!(
                    "token_file '{}' does not exist",
                    token_file.display()
                )));
            }
        }

        Ok(())
    }

    /// Print configuration as TOML
    pub fn print(&self) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        println!("{}", content);
        Ok(())
    }
}
