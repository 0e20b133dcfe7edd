//! Local git invocations
//!
//! Builders for the system `git` commands used while creating a repository:
//! - Repository initialization
//! - Staging and committing files
//! - Cloning an existing remote

use crate::core::runner::ExternalCommand;

const GIT: &str = "git";

/// Default message for the first commit
pub const INITIAL_COMMIT_MESSAGE: &str = "ci: create repository";

/// `git init`
pub fn init() -> ExternalCommand {
    ExternalCommand::new(GIT, ["init"])
}

/// `git add .`
pub fn add_all() -> ExternalCommand {
    ExternalCommand::new(GIT, ["add", "."])
}

/// `git commit --allow-empty -m <message>`
///
/// Succeeds even when nothing is staged.
pub fn commit_allow_empty(message: &str) -> ExternalCommand {
    ExternalCommand::new(GIT, ["commit", "--allow-empty", "-m", message])
}

/// `git clone <url>`
pub fn clone(url: &str) -> ExternalCommand {
    ExternalCommand::new(GIT, ["clone", url])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commit_keeps_message_as_single_arg() {
        let cmd = commit_allow_empty("ci: create repository");
        assert!(cmd.is("git", &["commit", "--allow-empty", "-m", "ci: create repository"]));
    }

    #[test]
    fn test_init_and_add() {
        assert!(init().is("git", &["init"]));
        assert!(add_all().is("git", &["add", "."]));
    }

    #[test]
    fn test_clone() {
        let cmd = clone("https://github.com/octo/demo.git");
        assert!(cmd.is("git", &["clone", "https://github.com/octo/demo.git"]));
    }
}
