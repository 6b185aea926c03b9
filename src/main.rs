//! Contact Directory - Main entry point
//!
//! Loads the address book, runs the interactive shell on stdin/stdout, and
//! saves the book when the shell exits.

use anyhow::Result;
use contact_directory::{Config, DirectoryRepository, JsonFileRepository, Shell};
use std::io;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load configuration before logging so LOG_LEVEL can pick the filter
    let config = Config::from_env()?;

    // Logs go to stderr to keep the interactive conversation on stdout clean
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_str()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    info!(path = %config.book_path.display(), "Configuration loaded successfully");

    let repository = JsonFileRepository::new(config.book_path.clone());
    let first_run = !repository.has_saved_book();
    let mut directory = match repository.load() {
        Ok(directory) => directory,
        Err(e) => {
            error!("Failed to load address book: {}", e);
            return Err(e.into());
        }
    };
    if first_run {
        println!("No saved address book found, starting with a new one.");
    } else {
        println!("Address book loaded: {} contact(s).", directory.len());
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut shell = Shell::new(
        &mut directory,
        &repository,
        config.birthday_window_days,
        stdin.lock(),
        stdout.lock(),
    );

    if let Err(e) = shell.run() {
        error!("Shell exited with an error: {:#}", e);
        return Err(e);
    }

    info!("Contact directory shutdown complete");
    Ok(())
}
