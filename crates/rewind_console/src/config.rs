//! Console configuration.

use derive_getters::Getters;
use derive_more::{Display, Error};
use rewind_tictactoe::{DEFAULT_BOARD_SIZE, MIN_BOARD_SIZE};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Settings for a console session, usually read from a TOML file.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct ConsoleConfig {
    /// Board size of the first game.
    #[serde(default = "default_board_size")]
    board_size: usize,

    /// Largest size `grow` and `size` may reach.
    #[serde(default = "default_max_board_size")]
    max_board_size: usize,

    /// Reprint the move list after every command.
    #[serde(default)]
    show_history: bool,

    /// Tracing filter used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    log_filter: String,
}

fn default_board_size() -> usize {
    DEFAULT_BOARD_SIZE
}

fn default_max_board_size() -> usize {
    9
}

fn default_log_filter() -> String {
    "warn".to_string()
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            board_size: default_board_size(),
            max_board_size: default_max_board_size(),
            show_history: false,
            log_filter: default_log_filter(),
        }
    }
}

impl ConsoleConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::parse(&content)?;
        info!(board_size = config.board_size, "Config loaded successfully");
        Ok(config)
    }

    /// Parses and validates TOML text.
    #[instrument(skip(content))]
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Overrides the starting board size.
    pub fn with_board_size(mut self, board_size: usize) -> Self {
        self.board_size = board_size;
        self
    }

    /// Overrides history printing.
    pub fn with_show_history(mut self, show_history: bool) -> Self {
        self.show_history = show_history;
        self
    }

    /// Checks that the sizes describe a playable range.
    #[instrument(skip(self), fields(board_size = self.board_size, max = self.max_board_size))]
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_board_size < MIN_BOARD_SIZE {
            return Err(ConfigError::new(format!(
                "max_board_size {} is below the minimum board size {}",
                self.max_board_size, MIN_BOARD_SIZE
            )));
        }
        if !(MIN_BOARD_SIZE..=self.max_board_size).contains(&self.board_size) {
            return Err(ConfigError::new(format!(
                "board_size {} must be between {} and {}",
                self.board_size, MIN_BOARD_SIZE, self.max_board_size
            )));
        }
        Ok(())
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new config error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
