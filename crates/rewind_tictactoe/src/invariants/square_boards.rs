//! Square boards invariant: every snapshot is N×N with one shared N.

use super::Invariant;
use crate::GameState;

/// Invariant: all history boards are square and the same size.
pub struct SquareBoardsInvariant;

impl Invariant<GameState> for SquareBoardsInvariant {
    fn holds(game: &GameState) -> bool {
        let size = game.board_size();
        game.history().iter().all(|board| {
            board.size() == size && board.rows().iter().all(|row| row.len() == size)
        })
    }

    fn description() -> &'static str {
        "Every history board is N×N with the same N"
    }
}
