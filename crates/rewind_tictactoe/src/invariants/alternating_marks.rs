//! Alternating marks invariant: X, O, X, O, ...

use super::Invariant;
use crate::{GameState, Mark};

/// Invariant: the cell filled after history entry `i` holds X when `i`
/// is even and O when `i` is odd.
pub struct AlternatingMarksInvariant;

impl Invariant<GameState> for AlternatingMarksInvariant {
    fn holds(game: &GameState) -> bool {
        let mut expected = Mark::for_move(0);
        game.history().windows(2).all(|pair| {
            let holds = pair[0]
                .changed_positions(&pair[1])
                .into_iter()
                .all(|pos| pair[1].get(pos).and_then(|cell| cell.mark()) == Some(expected));
            expected = expected.opponent();
            holds
        })
    }

    fn description() -> &'static str {
        "Players alternate marks (X, O, X, O, ...)"
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::forged;
    use super::*;
    use crate::Position;

    #[test]
    fn test_empty_game_holds() {
        assert!(AlternatingMarksInvariant::holds(&GameState::default()));
    }

    #[test]
    fn test_branched_game_holds() {
        let game = GameState::default()
            .apply_move(Position::new(0, 0))
            .unwrap()
            .apply_move(Position::new(1, 1))
            .unwrap()
            .jump_to(1)
            .unwrap()
            .apply_move(Position::new(2, 2))
            .unwrap();
        assert!(AlternatingMarksInvariant::holds(&game));
    }

    #[test]
    fn test_same_mark_twice_violates() {
        let game = forged(&["...\n...\n...", "X..\n...\n...", "XX.\n...\n..."], 2);
        assert!(!AlternatingMarksInvariant::holds(&game));
    }

    #[test]
    fn test_o_first_violates() {
        let game = forged(&["...\n...\n...", "O..\n...\n..."], 1);
        assert!(!AlternatingMarksInvariant::holds(&game));
    }
}
