//! Game rules for N×N tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). Nothing here looks at
//! history or turn order; the state machine composes these.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{evaluate, line_winner, winner};
