//! Core functionality for create-repo
//!
//! This module contains the business logic behind the CLI:
//! - External command execution
//! - Git command builders
//! - Repository naming and visibility
//! - Interactive confirmation
//! - Directory preparation
//! - Application configuration
//! - The creation workflow itself

pub mod config;
pub mod git;
pub mod prompt;
pub mod repository;
pub mod runner;
pub mod workflow;
pub mod workspace;

pub use config::Config;
pub use prompt::{Prompter, TerminalPrompter};
pub use repository::{RepositoryTarget, Visibility};
pub use runner::{CommandRunner, ExternalCommand, SystemRunner};
pub use workflow::{CreateOptions, Outcome, RepoCreator};
