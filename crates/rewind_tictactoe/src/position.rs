//! Board coordinates.

use serde::{Deserialize, Serialize};

/// A zero-based `(row, col)` coordinate on an N×N board.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_new::new,
)]
#[display("({row}, {col})")]
pub struct Position {
    /// Row index, top to bottom.
    pub row: usize,
    /// Column index, left to right.
    pub col: usize,
}

impl Position {
    /// Whether the position lies on a board of the given size.
    pub fn fits(self, size: usize) -> bool {
        self.row < size && self.col < size
    }
}
