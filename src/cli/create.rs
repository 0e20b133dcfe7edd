//! Repository creation command handler

use crate::cli::commands::Cli;
use crate::core::config::Config;
use crate::core::prompt::TerminalPrompter;
use crate::core::runner::SystemRunner;
use crate::core::workflow::{Outcome, RepoCreator};
use crate::error::{CreateRepoError, Result};

/// Handle a full creation run from parsed flags
pub fn handle_create(cli: &Cli) -> Result<()> {
    // Reject a missing name before touching config, prompts or tools
    if cli.name.trim().is_empty() {
        return Err(CreateRepoError::MissingName);
    }

    let config = Config::load()?;
    let options = cli.to_options(&config)?;
    tracing::debug!(?options, "resolved options");

    let runner = SystemRunner;
    let mut prompter = TerminalPrompter::stdio();
    let outcome = RepoCreator::new(&runner, &mut prompter, ".").run(&options)?;

    match outcome {
        Outcome::Cloned { url } => {
            println!("✓ Repository cloned successfully from {}", url);
        }
        Outcome::Created {
            name,
            visibility,
            workdir,
        } => {
            println!(
                "✓ Repository '{}' ({}) created successfully and synchronized with GitHub!",
                name, visibility
            );
            println!("  Local repository: {}", workdir.display());
        }
    }

    Ok(())
}
