//! Game rules for tic-tac-toe.
//!
//! Pure functions over a grid snapshot. They hold no state, so the game
//! engine and the invariant checks can share them.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{Line, LineKind, has_win, winner, winning_line, winning_lines};
