//! Local repository directory handling

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::core::prompt::Prompter;
use crate::error::{CreateRepoError, Result};

/// How the repository directory was obtained
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreparedDirectory {
    Created(PathBuf),
    Reused(PathBuf),
}

impl PreparedDirectory {
    pub fn path(&self) -> &Path {
        match self {
            PreparedDirectory::Created(path) | PreparedDirectory::Reused(path) => path,
        }
    }
}

/// Ensure `base/name` exists as a directory
///
/// An existing directory is reused only after confirmation; declining
/// yields [`CreateRepoError::Cancelled`] and leaves everything untouched.
pub fn prepare_directory(
    base: &Path,
    name: &str,
    prompter: &mut dyn Prompter,
) -> Result<PreparedDirectory> {
    let path = base.join(name);

    match fs::metadata(&path) {
        Ok(meta) if meta.is_dir() => {
            let question = format!(
                "⚠ Directory '{}' already exists.\n  Do you want to use it?",
                name
            );
            if !prompter.confirm(&question)? {
                return Err(CreateRepoError::Cancelled);
            }
            tracing::info!(path = %path.display(), "reusing directory");
            Ok(PreparedDirectory::Reused(path))
        }
        Ok(_) => Err(CreateRepoError::NotADirectory(path)),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            fs::create_dir(&path).map_err(|source| CreateRepoError::Directory {
                path: path.clone(),
                source,
            })?;
            tracing::info!(path = %path.display(), "created directory");
            Ok(PreparedDirectory::Created(path))
        }
        Err(source) => Err(CreateRepoError::Directory { path, source }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::prompt::MockPrompter;

    #[test]
    fn test_creates_missing_directory_without_prompting() {
        let tmp = tempfile::tempdir().unwrap();
        let mut prompter = MockPrompter::new();
        prompter.expect_confirm().never();

        let prepared = prepare_directory(tmp.path(), "demo", &mut prompter).unwrap();

        assert_eq!(prepared, PreparedDirectory::Created(tmp.path().join("demo")));
        assert!(tmp.path().join("demo").is_dir());
    }

    #[test]
    fn test_reuses_existing_directory_when_confirmed() {
        let tmp = tempfile::tempdir().unwrap();
        fs::create_dir(tmp.path().join("demo")).unwrap();

        let mut prompter = MockPrompter::new();
        prompter
            .expect_confirm()
            .withf(|q| q.contains("'demo' already exists"))
            .times(1)
            .returning(|_| Ok(true));

        let prepared = prepare_directory(tmp.path(), "demo", &mut prompter).unwrap();
        assert_eq!(prepared, PreparedDirectory::Reused(tmp.path().join("demo")));
    }

    #[test]
    fn test_declined_reuse_is_cancellation() {
        let tmp = tempfile::tempdir().unwrap();
        fs::create_dir(tmp.path().join("demo")).unwrap();

        let mut prompter = MockPrompter::new();
        prompter.expect_confirm().times(1).returning(|_| Ok(false));

        let err = prepare_directory(tmp.path(), "demo", &mut prompter).unwrap_err();
        assert!(matches!(err, CreateRepoError::Cancelled));
    }

    #[test]
    fn test_file_in_the_way() {
        let tmp = tempfile::tempdir().unwrap();
        fs::write(tmp.path().join("demo"), "not a dir").unwrap();

        let mut prompter = MockPrompter::new();
        prompter.expect_confirm().never();

        let err = prepare_directory(tmp.path(), "demo", &mut prompter).unwrap_err();
        assert!(matches!(err, CreateRepoError::NotADirectory(_)));
    }

    #[test]
    fn test_create_failure_is_directory_error() {
        let tmp = tempfile::tempdir().unwrap();
        let mut prompter = MockPrompter::new();
        prompter.expect_confirm().never();

        // Parent does not exist and only one level is created
        let err =
            prepare_directory(&tmp.path().join("missing"), "demo", &mut prompter).unwrap_err();
        assert!(matches!(err, CreateRepoError::Directory { .. }));
    }
}
