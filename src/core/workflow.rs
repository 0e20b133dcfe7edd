//! Repository creation workflow
//!
//! The linear sequence that takes a directory to a pushed GitHub repository:
//! existence check, optional clone, optional directory, init, commit, create.
//! Every step is a side effect, so the first failure ends the run and the
//! error is handed back to the caller untouched.

use std::path::PathBuf;

use crate::core::git;
use crate::core::prompt::Prompter;
use crate::core::repository::{RepositoryTarget, Visibility};
use crate::core::runner::{CommandRunner, ExternalCommand};
use crate::core::workspace::{prepare_directory, PreparedDirectory};
use crate::error::{CreateRepoError, Result};
use crate::github::repo;

/// Validated options for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateOptions {
    pub target: RepositoryTarget,
    pub create_dir: bool,
    pub visibility: Visibility,
    pub commit_message: String,
}

/// What the run ended up doing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Existing remote was cloned instead of creating a new one
    Cloned { url: String },
    /// Local repository initialized and pushed to a new remote
    Created {
        name: String,
        visibility: Visibility,
        workdir: PathBuf,
    },
}

/// Drives the creation steps against a runner and a prompter
pub struct RepoCreator<'a> {
    runner: &'a dyn CommandRunner,
    prompter: &'a mut dyn Prompter,
    workdir: PathBuf,
}

impl<'a> RepoCreator<'a> {
    /// `workdir` is where local commands run until a repository directory is entered
    pub fn new(
        runner: &'a dyn CommandRunner,
        prompter: &'a mut dyn Prompter,
        workdir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            runner,
            prompter,
            workdir: workdir.into(),
        }
    }

    /// Current working context for child processes
    #[cfg(test)]
    pub fn workdir(&self) -> &std::path::Path {
        &self.workdir
    }

    pub fn run(&mut self, options: &CreateOptions) -> Result<Outcome> {
        let target = &options.target;

        println!("⌛ Checking if repository '{}' already exists...", target.full_name());

        if self.remote_exists(target) {
            let question = format!(
                "⚠ Repository '{}' already exists on GitHub.\n  Do you want to clone it instead?",
                target.full_name()
            );
            if self.prompter.confirm(&question)? {
                return self.clone_existing(target);
            }

            let question = format!(
                "⚠ Repository '{}' already exists.\n  Do you want to continue and use the existing repository?",
                target.full_name()
            );
            if !self.prompter.confirm(&question)? {
                return Err(CreateRepoError::Cancelled);
            }

            println!("Using existing remote repository: {}", target.full_name());
        } else {
            println!(
                "Repository '{}' does not exist on GitHub. Proceeding with creation...",
                target.full_name()
            );
        }

        if options.create_dir {
            self.enter_directory(&target.name)?;
        }

        self.run_here(git::init())?;
        self.run_here(git::add_all())?;
        self.run_here(git::commit_allow_empty(&options.commit_message))?;
        self.run_here(repo::create(target, options.visibility))?;

        Ok(Outcome::Created {
            name: target.full_name(),
            visibility: options.visibility,
            workdir: self.workdir.clone(),
        })
    }

    /// Best-effort lookup; any failure counts as "does not exist"
    fn remote_exists(&self, target: &RepositoryTarget) -> bool {
        let exists = self
            .runner
            .probe(&repo::view(target).in_dir(&self.workdir));
        tracing::debug!(repo = %target.full_name(), exists, "remote existence check");
        exists
    }

    fn clone_existing(&mut self, target: &RepositoryTarget) -> Result<Outcome> {
        let url = target.clone_url()?;
        self.run_here(git::clone(&url))?;
        Ok(Outcome::Cloned { url })
    }

    fn enter_directory(&mut self, name: &str) -> Result<()> {
        let prepared = prepare_directory(&self.workdir, name, &mut *self.prompter)?;
        match &prepared {
            PreparedDirectory::Created(path) => {
                println!("✓ Repository directory '{}' created", path.display());
            }
            PreparedDirectory::Reused(path) => {
                println!("Using existing repository directory: {}", path.display());
            }
        }
        self.workdir = prepared.path().to_path_buf();
        Ok(())
    }

    fn run_here(&self, cmd: ExternalCommand) -> Result<()> {
        self.runner.run(&cmd.in_dir(&self.workdir))
    }
}
