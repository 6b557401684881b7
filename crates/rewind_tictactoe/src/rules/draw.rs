//! Draw detection.
//!
//! These are queries only. Game status never reports a draw on its own;
//! callers ask for it explicitly.

use super::win::winner;
use crate::board::Board;
use tracing::instrument;

/// Checks if every cell on the board is occupied.
#[instrument(skip(board), fields(size = board.size()))]
pub fn is_full(board: &Board) -> bool {
    board.cells().all(|cell| !cell.is_empty())
}

/// A full board with no winner.
#[instrument(skip(board), fields(size = board.size()))]
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && winner(board).is_none()
}
