//! Command-line interface definitions.

use crate::config::{ConfigError, ConsoleConfig};
use clap::Parser;
use std::path::PathBuf;
use tracing::instrument;

/// Rewind: tic-tac-toe on any board size, with time travel.
#[derive(Parser, Debug)]
#[command(name = "rewind")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// TOML configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Starting board size (overrides the config file).
    #[arg(short, long)]
    pub size: Option<usize>,

    /// Print the move list after every command.
    #[arg(long)]
    pub show_history: bool,
}

impl Cli {
    /// Loads the config file, if any, and applies command-line overrides.
    #[instrument(skip(self))]
    pub fn load_config(&self) -> Result<ConsoleConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => ConsoleConfig::from_file(path)?,
            None => ConsoleConfig::default(),
        };
        if let Some(size) = self.size {
            config = config.with_board_size(size);
        }
        if self.show_history {
            config = config.with_show_history(true);
        }
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["rewind"]);
        assert_eq!(cli.load_config().unwrap(), ConsoleConfig::default());
    }

    #[test]
    fn test_size_override() {
        let cli = Cli::parse_from(["rewind", "--size", "5", "--show-history"]);
        let config = cli.load_config().unwrap();
        assert_eq!(*config.board_size(), 5);
        assert!(*config.show_history());
    }

    #[test]
    fn test_invalid_size_override() {
        let cli = Cli::parse_from(["rewind", "-s", "2"]);
        assert!(cli.load_config().is_err());
    }

    #[test]
    fn test_missing_config_file() {
        let cli = Cli::parse_from(["rewind", "--config", "/nonexistent/rewind.toml"]);
        let err = cli.load_config().unwrap_err();
        assert!(err.message.starts_with("Failed to read config file"));
    }
}
