//! create-repo - turn a local directory into a GitHub repository
//!
//! Drives `git` and the GitHub CLI through existence check, optional clone,
//! local init and commit, and remote creation with push.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use create_repo::cli::commands::print_usage;
use create_repo::cli::{create, normalize_args, Cli};
use create_repo::error::CreateRepoError;

fn main() {
    // Initialize logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse_from(normalize_args(std::env::args_os()));

    // Help short-circuits everything else
    if cli.help {
        print_usage();
        return;
    }

    if let Err(e) = create::handle_create(&cli) {
        handle_error(e);
        std::process::exit(1);
    }
}

/// Report a failed run to the user
fn handle_error(e: CreateRepoError) {
    match &e {
        CreateRepoError::MissingName => {
            eprintln!("❌ Error: {}", e);
            print_usage();
        }
        CreateRepoError::Cancelled => {
            eprintln!("❌ {}", e);
        }
        _ => {
            tracing::error!(error = ?e, "run failed");
            eprintln!("❌ Error: {}", e);
        }
    }
}
