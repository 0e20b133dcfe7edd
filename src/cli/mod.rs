//! CLI module for create-repo
//!
//! This module contains the command-line definition and the handler that
//! turns parsed flags into a workflow run.

pub mod args;
pub mod commands;
pub mod create;

pub use args::normalize_args;
pub use commands::Cli;
