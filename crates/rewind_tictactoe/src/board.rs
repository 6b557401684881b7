//! Square N×N board storage.

use crate::position::Position;
use crate::types::Cell;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// Error building or editing a board.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum BoardError {
    /// A row's length does not match the number of rows.
    #[display("Row {} has {} cells, expected {}", row, len, size)]
    NotSquare {
        /// Offending row index.
        row: usize,
        /// Length of that row.
        len: usize,
        /// Expected length (number of rows).
        size: usize,
    },

    /// A character in board text is not a cell symbol.
    #[display("Unknown cell symbol {:?}", _0)]
    UnknownSymbol(char),

    /// The position is not on the board.
    #[display("Position {} is outside the board", _0)]
    OutOfBounds(Position),
}

impl std::error::Error for BoardError {}

/// An N×N tic-tac-toe board.
///
/// Rows are stored top to bottom; every row has exactly N cells.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "BoardRows")]
pub struct Board {
    rows: Vec<Vec<Cell>>,
}

impl Board {
    /// Creates an all-empty board of the given size.
    #[instrument]
    pub fn new(size: usize) -> Self {
        Self {
            rows: vec![vec![Cell::Empty; size]; size],
        }
    }

    /// Builds a board from explicit rows.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::NotSquare`] unless every row is as long as
    /// the number of rows.
    #[instrument(skip(rows), fields(size = rows.len()))]
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Result<Self, BoardError> {
        let size = rows.len();
        if let Some((row, cells)) = rows.iter().enumerate().find(|(_, r)| r.len() != size) {
            return Err(BoardError::NotSquare {
                row,
                len: cells.len(),
                size,
            });
        }
        Ok(Self { rows })
    }

    /// Side length N.
    pub fn size(&self) -> usize {
        self.rows.len()
    }

    /// Gets the cell at a position, or `None` off the board.
    pub fn get(&self, pos: Position) -> Option<Cell> {
        self.rows.get(pos.row)?.get(pos.col).copied()
    }

    /// Whether the position is on the board and empty.
    pub fn is_empty_at(&self, pos: Position) -> bool {
        matches!(self.get(pos), Some(Cell::Empty))
    }

    /// Sets the cell at a position.
    pub fn set(&mut self, pos: Position, cell: Cell) -> Result<(), BoardError> {
        let slot = self
            .rows
            .get_mut(pos.row)
            .and_then(|row| row.get_mut(pos.col))
            .ok_or(BoardError::OutOfBounds(pos))?;
        *slot = cell;
        Ok(())
    }

    /// Rows, top to bottom.
    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    /// Columns, left to right (the rows of the transpose).
    pub fn columns(&self) -> Vec<Vec<Cell>> {
        (0..self.size())
            .map(|col| self.rows.iter().map(|row| row[col]).collect())
            .collect()
    }

    /// The two diagonals: primary (`[i][i]`) first, then anti (`[i][N-1-i]`).
    pub fn diagonals(&self) -> [Vec<Cell>; 2] {
        let n = self.size();
        let primary = (0..n).map(|i| self.rows[i][i]).collect();
        let anti = (0..n).map(|i| self.rows[i][n - 1 - i]).collect();
        [primary, anti]
    }

    /// The board mirrored across its primary diagonal.
    pub fn transpose(&self) -> Self {
        Self {
            rows: self.columns(),
        }
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.rows.iter().flatten().copied()
    }

    /// All positions in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> {
        let n = self.size();
        (0..n).flat_map(move |row| (0..n).map(move |col| Position::new(row, col)))
    }

    /// Number of occupied cells.
    pub fn occupied_count(&self) -> usize {
        self.cells().filter(|cell| !cell.is_empty()).count()
    }

    /// Positions whose cells differ between `self` and `other`.
    ///
    /// Only positions on both boards are compared.
    pub fn changed_positions(&self, other: &Board) -> Vec<Position> {
        self.positions()
            .filter(|pos| other.get(*pos).is_some_and(|cell| Some(cell) != self.get(*pos)))
            .collect()
    }
}

/// Panics if `pos` is off the board; use [`Board::get`] to check.
impl std::ops::Index<Position> for Board {
    type Output = Cell;

    fn index(&self, pos: Position) -> &Cell {
        &self.rows[pos.row][pos.col]
    }
}

/// Panics if `pos` is off the board; use [`Board::set`] to check.
impl std::ops::IndexMut<Position> for Board {
    fn index_mut(&mut self, pos: Position) -> &mut Cell {
        &mut self.rows[pos.row][pos.col]
    }
}

#[derive(Deserialize)]
struct BoardRows {
    rows: Vec<Vec<Cell>>,
}

impl TryFrom<BoardRows> for Board {
    type Error = BoardError;

    fn try_from(raw: BoardRows) -> Result<Self, Self::Error> {
        Self::from_rows(raw.rows)
    }
}

impl FromStr for Board {
    type Err = BoardError;

    /// Parses one row per non-blank line; whitespace inside a line is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows = s
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| {
                line.chars()
                    .filter(|c| !c.is_whitespace())
                    .map(|c| Cell::from_symbol(c).ok_or(BoardError::UnknownSymbol(c)))
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_rows(rows)
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for cell in row {
                write!(f, "{cell}")?;
            }
        }
        Ok(())
    }
}
