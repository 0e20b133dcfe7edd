//! External process execution
//!
//! Every step that touches git or GitHub goes through a [`CommandRunner`],
//! so the orchestration can be exercised without spawning real tools.

use std::fmt;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

#[cfg(test)]
use mockall::automock;

use crate::error::{CreateRepoError, Result};

/// A program invocation: name, arguments and optional working directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalCommand {
    pub program: String,
    pub args: Vec<String>,
    pub current_dir: Option<PathBuf>,
}

impl ExternalCommand {
    pub fn new<I, S>(program: &str, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.to_string(),
            args: args.into_iter().map(Into::into).collect(),
            current_dir: None,
        }
    }

    /// Run the command inside `dir` instead of the process working directory
    pub fn in_dir(mut self, dir: &Path) -> Self {
        self.current_dir = Some(dir.to_path_buf());
        self
    }

    /// Whether this invocation is `program` followed by exactly `args`
    #[cfg(test)]
    pub fn is(&self, program: &str, args: &[&str]) -> bool {
        self.program == program && self.args.iter().map(String::as_str).eq(args.iter().copied())
    }

    fn to_command(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args);
        if let Some(dir) = &self.current_dir {
            cmd.current_dir(dir);
        }
        cmd
    }
}

impl fmt::Display for ExternalCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// Executes external commands on behalf of the workflow
#[cfg_attr(test, automock)]
pub trait CommandRunner {
    /// Run a command with inherited stdio, failing on launch error or non-zero exit
    fn run(&self, cmd: &ExternalCommand) -> Result<()>;

    /// Run a command silently and report only whether it succeeded
    fn probe(&self, cmd: &ExternalCommand) -> bool;
}

/// Runs commands as real child processes
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, cmd: &ExternalCommand) -> Result<()> {
        println!("  ⚙ Running command: {}", cmd);
        tracing::debug!(command = %cmd, dir = ?cmd.current_dir, "spawning");

        let status = cmd
            .to_command()
            .status()
            .map_err(|e| CreateRepoError::ExternalTool {
                command: cmd.to_string(),
                source: e,
            })?;

        if !status.success() {
            return Err(CreateRepoError::ExternalToolFailed {
                command: cmd.to_string(),
                status,
            });
        }

        Ok(())
    }

    fn probe(&self, cmd: &ExternalCommand) -> bool {
        let result = cmd
            .to_command()
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status();

        match result {
            Ok(status) => {
                tracing::debug!(command = %cmd, %status, "probe finished");
                status.success()
            }
            Err(e) => {
                tracing::debug!(command = %cmd, error = %e, "probe could not start");
                false
            }
        }
    }
}
