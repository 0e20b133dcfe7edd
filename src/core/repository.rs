//! Repository naming
//!
//! This module validates the repository name given on the command line and
//! builds the identifiers derived from it: the `owner/name` target handed
//! to the GitHub CLI and the HTTPS clone URL.

use url::Url;

use crate::error::{CreateRepoError, Result};

const GITHUB_BASE_URL: &str = "https://github.com/";

/// Remote repository visibility
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Public,
    Private,
}

impl Visibility {
    pub fn from_private(private: bool) -> Self {
        if private {
            Visibility::Private
        } else {
            Visibility::Public
        }
    }

    /// Flag understood by `gh repo create`
    pub fn as_flag(&self) -> &'static str {
        match self {
            Visibility::Public => "--public",
            Visibility::Private => "--private",
        }
    }
}

impl std::fmt::Display for Visibility {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Visibility::Public => write!(f, "public"),
            Visibility::Private => write!(f, "private"),
        }
    }
}

/// Repository identity: a validated name and an optional owner
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryTarget {
    /// Repository owner (user or organization), if known
    pub owner: Option<String>,
    /// Repository name
    pub name: String,
}

impl RepositoryTarget {
    /// Build a target from raw input, rejecting empty or whitespace-only names
    pub fn new(name: &str, owner: Option<&str>) -> Result<Self> {
        let name = name.trim();
        if name.is_empty() {
            return Err(CreateRepoError::MissingName);
        }

        let owner = owner
            .map(str::trim)
            .filter(|o| !o.is_empty())
            .map(str::to_string);

        Ok(Self {
            owner,
            name: name.to_string(),
        })
    }

    /// Name as `gh` expects it: `owner/name` when the owner is known
    pub fn full_name(&self) -> String {
        match &self.owner {
            Some(owner) => format!("{}/{}", owner, self.name),
            None => self.name.clone(),
        }
    }

    /// HTTPS clone URL; requires an owner
    pub fn clone_url(&self) -> Result<String> {
        let owner = self
            .owner
            .as_deref()
            .ok_or_else(|| CreateRepoError::MissingOwner(self.name.clone()))?;

        let mut url = Url::parse(GITHUB_BASE_URL)
            .map_err(|e| CreateRepoError::Config(format!("Invalid base URL: {}", e)))?;
        url.path_segments_mut()
            .map_err(|_| CreateRepoError::Config("Base URL cannot carry a path".into()))?
            .clear()
            .push(owner)
            .push(&format!("{}.git", self.name));

        Ok(url.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_empty_and_whitespace_names() {
        assert!(matches!(
            RepositoryTarget::new("", None),
            Err(CreateRepoError::MissingName)
        ));
        assert!(matches!(
            RepositoryTarget::new("   \t", Some("octo")),
            Err(CreateRepoError::MissingName)
        ));
    }

    #[test]
    fn test_trims_name_and_owner() {
        let target = RepositoryTarget::new("  demo ", Some(" octo ")).unwrap();
        assert_eq!(target.name, "demo");
        assert_eq!(target.owner.as_deref(), Some("octo"));
    }

    #[test]
    fn test_blank_owner_is_unknown() {
        let target = RepositoryTarget::new("demo", Some("  ")).unwrap();
        assert_eq!(target.owner, None);
        assert_eq!(target.full_name(), "demo");
    }

    #[test]
    fn test_full_name_with_owner() {
        let target = RepositoryTarget::new("demo", Some("myorg")).unwrap();
        assert_eq!(target.full_name(), "myorg/demo");
    }

    #[test]
    fn test_clone_url() {
        let target = RepositoryTarget::new("demo", Some("octo")).unwrap();
        assert_eq!(target.clone_url().unwrap(), "https://github.com/octo/demo.git");
    }

    #[test]
    fn test_clone_url_requires_owner() {
        let target = RepositoryTarget::new("demo", None).unwrap();
        assert!(matches!(
            target.clone_url(),
            Err(CreateRepoError::MissingOwner(name)) if name == "demo"
        ));
    }

    #[test]
    fn test_visibility_flags() {
        assert_eq!(Visibility::from_private(false).as_flag(), "--public");
        assert_eq!(Visibility::from_private(true).as_flag(), "--private");
        assert_eq!(Visibility::default(), Visibility::Public);
        assert_eq!(Visibility::Private.to_string(), "private");
    }
}
