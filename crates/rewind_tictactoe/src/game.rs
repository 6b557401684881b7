//! Move history and time travel.
//!
//! A [`GameState`] is a list of board snapshots plus a pointer into it.
//! Every transition is a pure function from `&GameState` to a new
//! `GameState`; the old value stays valid, which is what lets a front
//! end keep showing past snapshots while the player branches from them.

use crate::action::{Action, Rejection, Resize};
use crate::board::Board;
use crate::invariants::{GameInvariants, InvariantSet};
use crate::position::Position;
use crate::rules;
use crate::types::{Cell, Mark};
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, instrument};

/// Smallest board a game can be played on.
pub const MIN_BOARD_SIZE: usize = 3;

/// Board size of a fresh default game.
pub const DEFAULT_BOARD_SIZE: usize = 3;

/// What the status line shows.
///
/// There is no draw variant: a full board without a winner
/// still reads as "next player". Use [`GameState::is_draw`] to tell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Status {
    /// The current board has a winner.
    Winner(Mark),
    /// Play continues with this mark.
    NextToMove(Mark),
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Status::Winner(mark) => write!(f, "Winner is: {mark}"),
            Status::NextToMove(mark) => write!(f, "Next player: {mark}"),
        }
    }
}

/// Board history with a current-move pointer.
///
/// `history[0]` is always the empty board; `history[i]` is the board
/// after move `i`. Snapshots are shared behind [`Arc`] and never
/// mutated once recorded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameState {
    history: Vec<Arc<Board>>,
    current_move: usize,
}

impl GameState {
    /// Creates a game on an empty board of the given size.
    ///
    /// # Errors
    ///
    /// Returns [`Rejection::BoardTooSmall`] below [`MIN_BOARD_SIZE`].
    #[instrument]
    pub fn new(size: usize) -> Result<Self, Rejection> {
        if size < MIN_BOARD_SIZE {
            return Err(Rejection::BoardTooSmall(size));
        }
        Ok(Self::fresh(size))
    }

    fn fresh(size: usize) -> Self {
        Self {
            history: vec![Arc::new(Board::new(size))],
            current_move: 0,
        }
    }

    #[cfg(test)]
    pub(crate) fn from_parts_unchecked(history: Vec<Arc<Board>>, current_move: usize) -> Self {
        Self {
            history,
            current_move,
        }
    }

    // ─────────────────────────────────────────────────────────────
    //  Read side
    // ─────────────────────────────────────────────────────────────

    /// The board at the current move.
    pub fn board(&self) -> &Board {
        &self.history[self.current_move]
    }

    /// Side length of the boards in this game.
    pub fn board_size(&self) -> usize {
        self.board().size()
    }

    /// All recorded snapshots, oldest first.
    pub fn history(&self) -> &[Arc<Board>] {
        &self.history
    }

    /// Index of the snapshot being shown.
    pub fn current_move(&self) -> usize {
        self.current_move
    }

    /// Mark that plays next from the current move.
    pub fn next_mark(&self) -> Mark {
        Mark::for_move(self.current_move)
    }

    /// Winner of the current board, if any.
    pub fn winner(&self) -> Option<Mark> {
        rules::winner(self.board())
    }

    /// Status of the current board.
    #[instrument(skip(self), fields(current_move = self.current_move))]
    pub fn status(&self) -> Status {
        match self.winner() {
            Some(mark) => Status::Winner(mark),
            None => Status::NextToMove(self.next_mark()),
        }
    }

    /// Whether the current board is full with no winner.
    pub fn is_draw(&self) -> bool {
        rules::is_draw(self.board())
    }

    /// Label for a history entry in a time-travel list.
    pub fn move_description(index: usize) -> String {
        if index == 0 {
            "Go to game start".to_string()
        } else {
            format!("Go to move #{index}")
        }
    }

    // ─────────────────────────────────────────────────────────────
    //  Transitions
    // ─────────────────────────────────────────────────────────────

    /// Places the next mark at `position`.
    ///
    /// Entries after the current move are dropped and the new board is
    /// appended, so playing from an earlier snapshot starts a new branch.
    ///
    /// # Errors
    ///
    /// - [`Rejection::GameDecided`] if the current board has a winner
    /// - [`Rejection::OutOfBounds`] if the position is off the board
    /// - [`Rejection::CellOccupied`] if the cell is taken
    #[instrument(skip(self), fields(current_move = self.current_move))]
    pub fn apply_move(&self, position: Position) -> Result<Self, Rejection> {
        let board = self.board();

        if let Some(mark) = rules::winner(board) {
            debug!(winner = %mark, "Move rejected, game is decided");
            return Err(Rejection::GameDecided(mark));
        }

        let size = board.size();
        if !position.fits(size) {
            debug!("Move rejected, position off the board");
            return Err(Rejection::OutOfBounds { position, size });
        }
        if !board.is_empty_at(position) {
            debug!("Move rejected, cell occupied");
            return Err(Rejection::CellOccupied(position));
        }

        let mark = self.next_mark();
        let mut next_board = board.clone();
        next_board[position] = Cell::Occupied(mark);

        // Share the kept prefix; only the new snapshot is allocated.
        let mut history = self.history[..=self.current_move].to_vec();
        history.push(Arc::new(next_board));
        let next = Self {
            current_move: history.len() - 1,
            history,
        };

        debug!(%mark, discarded = self.history.len() - 1 - self.current_move, "Move applied");
        assert_invariants(&next);
        Ok(next)
    }

    /// Moves the pointer to history entry `index` without touching history.
    ///
    /// # Errors
    ///
    /// Returns [`Rejection::HistoryOutOfRange`] past the last entry.
    #[instrument(skip(self), fields(current_move = self.current_move))]
    pub fn jump_to(&self, index: usize) -> Result<Self, Rejection> {
        let len = self.history.len();
        if index >= len {
            debug!(len, "Jump rejected, no such history entry");
            return Err(Rejection::HistoryOutOfRange { index, len });
        }

        debug!("Jumped");
        Ok(Self {
            history: self.history.clone(),
            current_move: index,
        })
    }

    /// Starts over on an empty board of `new_size`.
    ///
    /// Always a hard reset, even when the size is unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`Rejection::BoardTooSmall`] below [`MIN_BOARD_SIZE`].
    #[instrument(skip(self), fields(size = self.board_size()))]
    pub fn resize(&self, new_size: usize) -> Result<Self, Rejection> {
        let next = Self::new(new_size).inspect_err(|_| debug!("Resize rejected"))?;
        debug!("Board resized, history reset");
        Ok(next)
    }

    /// Resizes relative to the current size, saturating at zero.
    #[instrument(skip(self), fields(size = self.board_size()))]
    pub fn resize_by(&self, delta: isize) -> Result<Self, Rejection> {
        self.resize(self.board_size().saturating_add_signed(delta))
    }

    /// Applies any [`Action`].
    #[instrument(skip(self))]
    pub fn apply(&self, action: Action) -> Result<Self, Rejection> {
        match action {
            Action::Play(position) => self.apply_move(position),
            Action::JumpTo(index) => self.jump_to(index),
            Action::Resize(Resize::To(size)) => self.resize(size),
            Action::Resize(Resize::Grow) => self.resize_by(1),
            Action::Resize(Resize::Shrink) => self.resize_by(-1),
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::fresh(DEFAULT_BOARD_SIZE)
    }
}

/// Panics in debug builds if a transition broke a history invariant.
fn assert_invariants(state: &GameState) {
    if cfg!(debug_assertions)
        && let Err(violations) = GameInvariants::check_all(state)
    {
        let descriptions = violations
            .iter()
            .map(|v| v.description.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        panic!("Game state invariants violated: {descriptions}");
    }
}
