//! Tictactoe - two-player tic-tac-toe in the terminal
//!
//! The game rules live in [`tictactoe_core`]; this crate is the shell
//! around them.
//!
//! # Architecture
//!
//! - **Tui**: start screen for nicknames and a board screen, driven by [`App`]
//! - **Replay**: headless application of a move list ([`Replay`])
//! - **Config**: TOML settings ([`AppConfig`]) and the command line ([`Cli`])
//!
//! # Example
//!
//! ```
//! use tictactoe::{AppConfig, Replay};
//! use tictactoe_core::Position;
//!
//! let moves = [Position::new(2, 2), Position::new(1, 1)];
//! let replay = Replay::run(&AppConfig::default(), &moves);
//! assert_eq!(replay.game().placed_count(), 2);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
pub mod logging;
mod replay;
pub mod tui;

// Crate-level exports - Command line
pub use cli::{Cli, Command, NameArgs};

// Crate-level exports - Configuration
pub use config::{AppConfig, ConfigError, DEFAULT_CONFIG_PATH};

// Crate-level exports - Replay
pub use replay::{Replay, Step};

// Crate-level exports - Front-end
pub use tui::{App, BoardScreen, Screen, ScreenTransition, StartScreen};
