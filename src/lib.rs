//! create-repo - bootstrap a GitHub repository from a local directory
//!
//! This library drives `git` and the GitHub CLI (`gh`) through the steps
//! needed to publish a directory: existence check, optional clone, local
//! initialization, initial commit, and remote creation with push.

pub mod cli;
pub mod core;
pub mod error;
pub mod github;

pub use error::{CreateRepoError, Result};
