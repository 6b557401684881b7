//! First-class actions and rejections.
//!
//! Actions are the discrete events a front end feeds into the game: a
//! cell click, a history click, or a size adjustment. A rejected action
//! leaves state exactly as it was.

use crate::game::MIN_BOARD_SIZE;
use crate::position::Position;
use crate::types::Mark;
use serde::{Deserialize, Serialize};

/// How to change the board size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Resize {
    /// Set an absolute size.
    To(usize),
    /// One larger than the current size.
    Grow,
    /// One smaller than the current size.
    Shrink,
}

/// An event that may transition the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Place the next mark at a position.
    Play(Position),
    /// Move the history pointer.
    JumpTo(usize),
    /// Start over on a board of another size.
    Resize(Resize),
}

/// Why an action was declined.
///
/// The original game ignores these silently; callers are free to do the
/// same since state is never touched on rejection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum Rejection {
    /// The current board already has a winner.
    #[display("Game already won by {}", _0)]
    GameDecided(Mark),

    /// The cell already holds a mark.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(Position),

    /// The position is not on the board.
    #[display("Cell {} is outside the {}x{} board", position, size, size)]
    OutOfBounds {
        /// Requested position.
        position: Position,
        /// Current board size.
        size: usize,
    },

    /// No history entry with that index.
    #[display("History has no entry {} (length {})", index, len)]
    HistoryOutOfRange {
        /// Requested index.
        index: usize,
        /// Current history length.
        len: usize,
    },

    /// Board size below the playable minimum.
    #[display("Board size {} is below the minimum of {}", _0, MIN_BOARD_SIZE)]
    BoardTooSmall(usize),
}

impl std::error::Error for Rejection {}
