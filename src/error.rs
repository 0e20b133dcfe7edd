//! Custom error types for create-repo
//!
//! User-friendly error messages for all failure scenarios.

use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

/// Main error type for the create-repo application
#[derive(Error, Debug)]
pub enum CreateRepoError {
    /// No repository name given, or only whitespace
    #[error("Repository name is required.\n\n  → Example: create-repo -name=myrepo")]
    MissingName,

    /// Operation cancelled by user at a confirmation prompt
    #[error("Operation cancelled.")]
    Cancelled,

    /// Clone was requested but no owner could be determined
    #[error("Cannot build the clone URL for '{0}': no owner is known.\n\n  → Pass -owner=<account>, set CREATE_REPO_OWNER, or add `owner` to the config file.")]
    MissingOwner(String),

    /// Local directory could not be created or inspected
    #[error("Cannot prepare directory '{}': {source}", .path.display())]
    Directory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Target path exists but is a file
    #[error("'{}' exists but is not a directory.", .0.display())]
    NotADirectory(PathBuf),

    /// External tool could not be launched
    #[error("Failed to run `{command}`: {source}\n\n  → Make sure the tool is installed and on your PATH.")]
    ExternalTool {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// External tool ran and exited unsuccessfully
    #[error("Command `{command}` failed ({status}).")]
    ExternalToolFailed { command: String, status: ExitStatus },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// TOML deserialization error
    #[error("Configuration file is invalid: {0}")]
    Toml(String),

    /// IO error (terminal prompts)
    #[error("Terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

impl From<toml::de::Error> for CreateRepoError {
    fn from(err: toml::de::Error) -> Self {
        CreateRepoError::Toml(err.to_string())
    }
}

/// Result type alias using CreateRepoError
pub type Result<T> = std::result::Result<T, CreateRepoError>;
