//! Pure tic-tac-toe game logic.
//!
//! This crate holds everything about a game that does not involve drawing
//! it: the grid, the players, the turn-state machine and win detection. A
//! front-end drives a [`GameState`] through [`GameState::place_mark`] and
//! renders whatever the returned [`Placement`] and the read accessors report.
//!
//! # Example
//!
//! ```
//! use tictactoe_core::{GameState, Outcome, Placement, Position, Side};
//!
//! let mut game = GameState::classic();
//! game.set_name(Side::X, "Alice");
//!
//! assert_eq!(game.place_mark(Position::new(2, 2)), Placement::Continue(Side::O));
//! assert_eq!(game.outcome(), Outcome::InProgress(Side::O));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod game;
mod grid;
pub mod invariants;
mod position;
pub mod rules;
mod types;

pub use game::{CellView, GameState, Outcome, Placement, Rejection};
pub use grid::{BoardSizeError, CLASSIC_SIZE, Grid, MAX_SIZE, MIN_SIZE};
pub use position::{ParsePositionError, Position};
pub use types::{Mark, Move, Player, Side};
