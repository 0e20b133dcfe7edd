//! GitHub CLI repository commands
//!
//! Builders for the `gh repo` subcommands: existence lookup and
//! creation with push.

use crate::core::repository::{RepositoryTarget, Visibility};
use crate::core::runner::ExternalCommand;

const GH: &str = "gh";

/// Name of the remote registered for the new repository
pub const ORIGIN: &str = "origin";

/// `gh repo view <target>`; exits zero only when the repository exists
pub fn view(target: &RepositoryTarget) -> ExternalCommand {
    ExternalCommand::new(GH, ["repo".to_string(), "view".to_string(), target.full_name()])
}

/// `gh repo create <target> --public|--private --source=. --remote=origin --push`
pub fn create(target: &RepositoryTarget, visibility: Visibility) -> ExternalCommand {
    ExternalCommand::new(
        GH,
        [
            "repo".to_string(),
            "create".to_string(),
            target.full_name(),
            visibility.as_flag().to_string(),
            "--source=.".to_string(),
            format!("--remote={}", ORIGIN),
            "--push".to_string(),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_uses_full_name() {
        let target = RepositoryTarget::new("demo", Some("octo")).unwrap();
        assert!(view(&target).is("gh", &["repo", "view", "octo/demo"]));

        let target = RepositoryTarget::new("demo", None).unwrap();
        assert!(view(&target).is("gh", &["repo", "view", "demo"]));
    }

    #[test]
    fn test_create_public() {
        let target = RepositoryTarget::new("demo", None).unwrap();
        assert!(create(&target, Visibility::Public).is(
            "gh",
            &["repo", "create", "demo", "--public", "--source=.", "--remote=origin", "--push"]
        ));
    }

    #[test]
    fn test_create_private_with_owner() {
        let target = RepositoryTarget::new("demo", Some("myorg")).unwrap();
        assert!(create(&target, Visibility::Private).is(
            "gh",
            &["repo", "create", "myorg/demo", "--private", "--source=.", "--remote=origin", "--push"]
        ));
    }
}
