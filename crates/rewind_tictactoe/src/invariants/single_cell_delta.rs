//! Single cell delta invariant: each move fills exactly one empty cell.

use super::Invariant;
use crate::GameState;

/// Invariant: consecutive snapshots differ in exactly one cell, and
/// that cell was empty in the earlier one.
///
/// Nothing else enforces this; it follows from how moves are applied.
pub struct SingleCellDeltaInvariant;

impl Invariant<GameState> for SingleCellDeltaInvariant {
    fn holds(game: &GameState) -> bool {
        game.history().windows(2).all(|pair| {
            let (before, after) = (&pair[0], &pair[1]);
            match before.changed_positions(after).as_slice() {
                [pos] => before.is_empty_at(*pos),
                _ => false,
            }
        })
    }

    fn description() -> &'static str {
        "Each move fills exactly one previously empty cell"
    }
}
