//! Terminal front end for `rewind_tictactoe`.
//!
//! Reads one command per line, feeds game actions into a
//! [`GameStore`](rewind_tictactoe::GameStore) and redraws the board as
//! text. Rejected moves are ignored without a message, as in the board
//! game it is modelled on; only unparseable input gets a hint.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod command;
pub mod config;
pub mod console;
pub mod render;

pub use cli::Cli;
pub use command::{Command, CommandError};
pub use config::{ConfigError, ConsoleConfig};
pub use console::{Console, Flow};
