//! Screen implementations for the front-end state machine.

mod board;
mod start;

pub use board::BoardScreen;
pub use start::{MAX_NAME_LEN, StartScreen};
