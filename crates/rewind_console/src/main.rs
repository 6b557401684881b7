//! Rewind - tic-tac-toe with time travel, in the terminal.

use anyhow::{Context, Result};
use clap::Parser;
use rewind_console::{Cli, Console};
use std::io;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.load_config()?;

    initialize_tracing(config.log_filter());
    info!(board_size = config.board_size(), "Starting rewind console");

    let mut console = Console::new(config)?;
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    console
        .run(stdin.lock(), &mut stdout)
        .context("Console I/O failed")?;

    Ok(())
}

/// Logs go to stderr so they never interleave with the board on stdout.
fn initialize_tracing(default_filter: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(io::stderr)
        .init();
}
