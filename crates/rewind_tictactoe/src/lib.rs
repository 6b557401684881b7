//! Rewind tic-tac-toe: N×N tic-tac-toe with move history and time travel.
//!
//! # Architecture
//!
//! - **Board**: square grid of [`Cell`]s, any size
//! - **Rules**: pure win/draw evaluation over a board
//! - **Game state**: board snapshots plus a current-move pointer, with
//!   pure transitions (`apply_move`, `jump_to`, `resize`)
//! - **Store**: owns a state, dispatches [`Action`]s, notifies subscribers
//! - **Invariants**: history properties checked after every transition
//!   in debug builds
//!
//! # Example
//!
//! ```
//! use rewind_tictactoe::{GameState, Mark, Position, Status};
//!
//! let game = GameState::default()
//!     .apply_move(Position::new(0, 0))?
//!     .apply_move(Position::new(1, 1))?;
//! assert_eq!(game.status(), Status::NextToMove(Mark::X));
//!
//! // Branch from the start: the two moves above are discarded.
//! let game = game.jump_to(0)?.apply_move(Position::new(2, 2))?;
//! assert_eq!(game.history().len(), 2);
//! # Ok::<(), rewind_tictactoe::Rejection>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod board;
mod game;
pub mod invariants;
mod position;
mod rules;
mod store;
mod types;

// Crate-level exports - Domain types
pub use board::{Board, BoardError};
pub use position::Position;
pub use types::{Cell, Mark};

// Crate-level exports - Rules
pub use rules::{evaluate, is_draw, is_full, line_winner, winner};

// Crate-level exports - State machine
pub use action::{Action, Rejection, Resize};
pub use game::{DEFAULT_BOARD_SIZE, GameState, MIN_BOARD_SIZE, Status};
pub use store::{GameStore, SubscriptionId};
