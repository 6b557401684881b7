//! Pointer invariant: the current move names a real snapshot.

use super::Invariant;
use crate::GameState;

/// Invariant: history is non-empty, starts from an empty board, and
/// `current_move < history.len()`.
pub struct PointerInRangeInvariant;

impl Invariant<GameState> for PointerInRangeInvariant {
    fn holds(game: &GameState) -> bool {
        let history = game.history();
        history
            .first()
            .is_some_and(|start| start.occupied_count() == 0)
            && game.current_move() < history.len()
    }

    fn description() -> &'static str {
        "History starts empty and the current move points into it"
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::forged;
    use super::*;
    use crate::Position;

    #[test]
    fn test_after_jump_holds() {
        let game = GameState::default()
            .apply_move(Position::new(0, 0))
            .unwrap()
            .jump_to(0)
            .unwrap();
        assert!(PointerInRangeInvariant::holds(&game));
    }

    #[test]
    fn test_dangling_pointer_violates() {
        let game = forged(&["...\n...\n..."], 1);
        assert!(!PointerInRangeInvariant::holds(&game));
    }

    #[test]
    fn test_non_empty_start_violates() {
        let game = forged(&["X..\n...\n..."], 0);
        assert!(!PointerInRangeInvariant::holds(&game));
    }
}
