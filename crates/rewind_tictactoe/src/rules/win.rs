//! Win detection for boards of any size.
//!
//! Lines are checked in a fixed order: rows top to bottom, then columns
//! left to right, then the primary and anti diagonals. The first line
//! held entirely by one mark decides the result.

use crate::board::Board;
use crate::types::{Cell, Mark};
use tracing::instrument;

/// Reduces a line to its owner.
///
/// Returns the common cell when every cell matches and is occupied,
/// [`Cell::Empty`] otherwise. An empty line has no owner.
pub fn line_winner(line: &[Cell]) -> Cell {
    match line.split_first() {
        Some((&first, rest)) if !first.is_empty() && rest.iter().all(|&c| c == first) => first,
        _ => Cell::Empty,
    }
}

fn first_winner<L: AsRef<[Cell]>>(lines: impl IntoIterator<Item = L>) -> Cell {
    lines
        .into_iter()
        .map(|line| line_winner(line.as_ref()))
        .find(|cell| !cell.is_empty())
        .unwrap_or(Cell::Empty)
}

/// Evaluates the board.
///
/// Returns the winning mark as a cell, or [`Cell::Empty`] when no line
/// is complete. Empty does not distinguish "still playing" from "draw".
#[instrument(skip(board), fields(size = board.size()))]
pub fn evaluate(board: &Board) -> Cell {
    let by_row = first_winner(board.rows());
    if !by_row.is_empty() {
        return by_row;
    }

    let by_column = first_winner(board.columns());
    if !by_column.is_empty() {
        return by_column;
    }

    first_winner(board.diagonals())
}

/// Checks if there is a winner on the board.
pub fn winner(board: &Board) -> Option<Mark> {
    evaluate(board).mark()
}
