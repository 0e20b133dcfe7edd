//! CLI definition using clap
//!
//! Defines the flags accepted by the `create-repo` tool.

use clap::{ArgAction, CommandFactory, Parser};

use crate::cli::args::parse_flag_bool;
use crate::core::config::Config;
use crate::core::repository::{RepositoryTarget, Visibility};
use crate::core::workflow::CreateOptions;
use crate::error::Result;

const EXAMPLES: &str = "\
Flags may be written with one dash or two (-name=myrepo, --name myrepo).

Examples:
  create-repo -help
  create-repo -name=myrepo
  create-repo -name=myrepo -create-dir=true
  create-repo -name=myrepo -private=true
  create-repo -name=myrepo -create-dir=true -private=true
  create-repo -name=myrepo -owner=my-org

Automates repository creation with Git and the GitHub CLI.";

/// create-repo - turn a directory into a GitHub repository
///
/// Checks for an existing remote, initializes a local repository, commits,
/// and creates and pushes the remote with the GitHub CLI.
#[derive(Parser, Debug)]
#[command(
    name = "create-repo",
    version,
    about,
    long_about = None,
    disable_help_flag = true,
    after_help = EXAMPLES
)]
pub struct Cli {
    /// Repository name (required). If the remote repository already exists, ask whether to clone it
    #[arg(long, value_name = "NAME", default_value = "", allow_hyphen_values = true)]
    pub name: String,

    /// Create a directory for the repository (default: current directory). If it already exists, ask whether to reuse it
    #[arg(
        long = "create-dir",
        action = ArgAction::Set,
        value_parser = parse_flag_bool,
        num_args = 0..=1,
        require_equals = true,
        default_value_t = false,
        default_missing_value = "true",
        value_name = "BOOL"
    )]
    pub create_dir: bool,

    /// Make the repository private (default: public)
    #[arg(
        long,
        action = ArgAction::Set,
        value_parser = parse_flag_bool,
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        value_name = "BOOL"
    )]
    pub private: Option<bool>,

    /// Account or organization that owns the repository (needed to clone an existing one)
    #[arg(long, env = "CREATE_REPO_OWNER", value_name = "OWNER", allow_hyphen_values = true)]
    pub owner: Option<String>,

    /// Message for the initial commit (default: "ci: create repository")
    #[arg(long, value_name = "MESSAGE", allow_hyphen_values = true)]
    pub message: Option<String>,

    /// Show this help message
    #[arg(
        short = 'h',
        long,
        action = ArgAction::Set,
        value_parser = parse_flag_bool,
        num_args = 0..=1,
        require_equals = true,
        default_value_t = false,
        default_missing_value = "true",
        value_name = "BOOL"
    )]
    pub help: bool,
}

impl Cli {
    /// Combine flags with configured defaults; flags win
    pub fn to_options(&self, config: &Config) -> Result<CreateOptions> {
        let owner = self.owner.as_deref().or(config.owner.as_deref());
        let target = RepositoryTarget::new(&self.name, owner)?;

        Ok(CreateOptions {
            target,
            create_dir: self.create_dir,
            visibility: Visibility::from_private(self.private.unwrap_or(config.private)),
            commit_message: self
                .message
                .clone()
                .unwrap_or_else(|| config.commit_message.clone()),
        })
    }
}

/// Print usage text to stdout
pub fn print_usage() {
    let mut cmd = Cli::command();
    if let Err(e) = cmd.print_help() {
        tracing::warn!(error = %e, "could not print usage");
    }
}
