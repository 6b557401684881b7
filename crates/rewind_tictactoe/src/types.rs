//! Core domain types for tic-tac-toe.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A player's mark.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::EnumIter,
)]
pub enum Mark {
    /// Mark X (moves first).
    X,
    /// Mark O (moves second).
    O,
}

impl Mark {
    /// Returns the opposing mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    /// Returns the mark that plays from history index `move_index`.
    ///
    /// Even indices belong to X, odd indices to O. There is no stored
    /// "current player"; turn order is always derived from this.
    #[instrument]
    pub fn for_move(move_index: usize) -> Self {
        if move_index % 2 == 0 { Mark::X } else { Mark::O }
    }

    /// Single-character symbol for this mark.
    pub fn symbol(self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Nobody has played here.
    #[default]
    Empty,
    /// Cell holds a mark.
    Occupied(Mark),
}

impl Cell {
    /// Returns the mark in this cell, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(mark) => Some(mark),
        }
    }

    /// Whether the cell is empty.
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    /// Single-character symbol: `X`, `O`, or `.` when empty.
    pub fn symbol(self) -> char {
        self.mark().map_or('.', Mark::symbol)
    }

    /// Parses a cell symbol.
    ///
    /// Accepts `X`/`O` in either case and `.`, `_` or `-` for empty.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'X' | 'x' => Some(Cell::Occupied(Mark::X)),
            'O' | 'o' => Some(Cell::Occupied(Mark::O)),
            '.' | '_' | '-' => Some(Cell::Empty),
            _ => None,
        }
    }
}

impl From<Mark> for Cell {
    fn from(mark: Mark) -> Self {
        Cell::Occupied(mark)
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.symbol(), f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_parity_assigns_x_to_even_moves() {
        assert_eq!(Mark::for_move(0), Mark::X);
        assert_eq!(Mark::for_move(1), Mark::O);
        assert_eq!(Mark::for_move(8), Mark::X);
    }

    #[test]
    fn test_opponent_is_involution() {
        for mark in Mark::iter() {
            assert_ne!(mark.opponent(), mark);
            assert_eq!(mark.opponent().opponent(), mark);
        }
    }

    #[test]
    fn test_symbols() {
        assert_eq!(Cell::Empty.to_string(), ".");
        assert_eq!(Cell::from(Mark::O).to_string(), "O");
        assert_eq!(Mark::X.to_string(), "X");
        assert_eq!(format!("{:>3}", Cell::from(Mark::X)), "  X");
        assert_eq!(Cell::from_symbol('x'), Some(Cell::Occupied(Mark::X)));
        assert_eq!(Cell::from_symbol('_'), Some(Cell::Empty));
        assert_eq!(Cell::from_symbol('?'), None);
    }
}
