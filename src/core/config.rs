//! Application configuration management
//!
//! Handles loading optional user defaults:
//! - Repository owner used for lookups and clone URLs
//! - Default visibility
//! - Initial commit message

use std::fs;
use std::path::PathBuf;

use directories::ProjectDirs;
use serde::Deserialize;

use crate::core::git::INITIAL_COMMIT_MESSAGE;
use crate::error::{CreateRepoError, Result};

/// Environment variable pointing at an alternative config file
pub const CONFIG_PATH_ENV: &str = "CREATE_REPO_CONFIG";

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Account or organization that owns new repositories
    #[serde(default)]
    pub owner: Option<String>,

    /// Create repositories as private unless told otherwise
    #[serde(default)]
    pub private: bool,

    /// Message for the initial commit
    #[serde(default = "default_commit_message")]
    pub commit_message: String,
}

fn default_commit_message() -> String {
    INITIAL_COMMIT_MESSAGE.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            owner: None,
            private: false,
            commit_message: default_commit_message(),
        }
    }
}

impl Config {
    /// Load configuration from file, or defaults if it does not exist
    pub fn load() -> Result<Self> {
        Self::load_from(Self::config_path()?)
    }

    /// Load configuration from a specific path
    pub fn load_from(config_path: PathBuf) -> Result<Self> {
        if config_path.exists() {
            tracing::debug!(path = %config_path.display(), "loading config");
            let contents = fs::read_to_string(&config_path).map_err(|e| {
                CreateRepoError::Config(format!("Cannot read {}: {}", config_path.display(), e))
            })?;
            Self::parse(&contents)
        } else {
            Ok(Config::default())
        }
    }

    /// Parse configuration from TOML text
    pub fn parse(contents: &str) -> Result<Self> {
        let config: Config = toml::from_str(contents)?;
        Ok(config)
    }

    /// Get the configuration file path
    pub fn config_path() -> Result<PathBuf> {
        if let Some(path) = std::env::var_os(CONFIG_PATH_ENV) {
            return Ok(PathBuf::from(path));
        }

        let project_dirs = ProjectDirs::from("com", "create-repo", "create-repo")
            .ok_or_else(|| CreateRepoError::Config("Could not determine config directory".into()))?;

        Ok(project_dirs.config_dir().join("config.toml"))
    }
}
