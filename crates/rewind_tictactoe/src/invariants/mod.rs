//! First-class invariants over game history.
//!
//! Invariants are logical properties that must hold after every
//! transition. Transitions check them in debug builds; tests can check
//! them directly.

pub mod alternating_marks;
pub mod pointer_in_range;
pub mod single_cell_delta;
pub mod square_boards;

pub use alternating_marks::AlternatingMarksInvariant;
pub use pointer_in_range::PointerInRangeInvariant;
pub use single_cell_delta::SingleCellDeltaInvariant;
pub use square_boards::SquareBoardsInvariant;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants checked together.
///
/// Implemented for tuples of up to four invariants.
pub trait InvariantSet<S> {
    /// Checks every invariant, collecting all violations.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

macro_rules! impl_invariant_set {
    ($($inv:ident),+) => {
        impl<S, $($inv),+> InvariantSet<S> for ($($inv,)+)
        where
            $($inv: Invariant<S>),+
        {
            fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
                let mut violations = Vec::new();
                $(
                    if !$inv::holds(state) {
                        violations.push(InvariantViolation::new($inv::description()));
                    }
                )+
                if violations.is_empty() {
                    Ok(())
                } else {
                    Err(violations)
                }
            }
        }
    };
}

impl_invariant_set!(I1, I2);
impl_invariant_set!(I1, I2, I3);
impl_invariant_set!(I1, I2, I3, I4);

/// Every invariant a [`GameState`](crate::GameState) must satisfy.
pub type GameInvariants = (
    SquareBoardsInvariant,
    PointerInRangeInvariant,
    SingleCellDeltaInvariant,
    AlternatingMarksInvariant,
);


#[cfg(test)]
mod tests {
    use super::test_support::forged;
    use super::*;
    use crate::{GameState, Position};

    #[test]
    fn test_invariant_set_holds_for_new_game() {
        assert!(GameInvariants::check_all(&GameState::default()).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_moves() {
        let game = GameState::new(4)
            .unwrap()
            .apply_move(Position::new(0, 0))
            .unwrap()
            .apply_move(Position::new(3, 3))
            .unwrap()
            .jump_to(1)
            .unwrap();
        assert!(GameInvariants::check_all(&game).is_ok());
    }

    #[test]
    fn test_invariant_set_reports_every_violation() {
        // Two marks appear at once, and the first of them is O.
        let game = forged(&["...\n...\n...", "O..\n.X.\n..."], 1);
        let violations = GameInvariants::check_all(&game).unwrap_err();
        assert_eq!(violations.len(), 2);
        assert!(
            violations
                .iter()
                .any(|v| v.description == SingleCellDeltaInvariant::description())
        );
    }

    #[test]
    fn test_two_invariants_as_set() {
        type TwoInvariants = (SquareBoardsInvariant, PointerInRangeInvariant);
        assert!(TwoInvariants::check_all(&GameState::default()).is_ok());
    }
}
