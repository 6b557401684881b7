//! Plain-text rendering of boards, status and history.

use rewind_tictactoe::{Board, GameState};

/// Draws a board with row and column indices.
///
/// ```text
///    0 1 2
/// 0  X . O
/// 1  . X .
/// 2  . . .
/// ```
pub fn board(board: &Board) -> String {
    let size = board.size();
    let width = size.saturating_sub(1).to_string().len();

    let header: String = (0..size).map(|col| format!(" {col:>width$}")).collect();
    let body: String = board
        .rows()
        .iter()
        .enumerate()
        .map(|(row, cells)| {
            let line: String = cells.iter().map(|cell| format!(" {cell:>width$}")).collect();
            format!("{row:>width$} {line}\n")
        })
        .collect();

    format!("{:width$} {header}\n{body}", "")
}

/// Status line, plus a note when the board is full without a winner.
pub fn status(state: &GameState) -> String {
    let mut out = state.status().to_string();
    if state.is_draw() {
        out.push_str("\nBoard full.");
    }
    out
}

/// The time-travel list, current entry marked with `>`.
pub fn history(state: &GameState) -> String {
    (0..state.history().len())
        .map(|index| {
            let marker = if index == state.current_move() { '>' } else { ' ' };
            format!("{marker} {index}: {}", GameState::move_description(index))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Board followed by the status line.
pub fn frame(state: &GameState) -> String {
    format!("{}{}", board(state.board()), status(state))
}
