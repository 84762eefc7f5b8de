//! Command-line interface for tictactoe.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use tictactoe_core::Position;

/// Two-player tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (defaults to ./tictactoe.toml if present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Cli {
    /// The chosen command, falling back to an interactive game.
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Play {
            names: NameArgs::default(),
        })
    }
}

/// Nickname overrides shared by every command.
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct NameArgs {
    /// Nickname of X (moves first)
    #[arg(long)]
    pub player_x: Option<String>,

    /// Nickname of O (moves second)
    #[arg(long)]
    pub player_o: Option<String>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play an interactive game in the terminal
    Play {
        /// Prefilled nicknames for the start screen
        #[command(flatten)]
        names: NameArgs,
    },

    /// Apply placements headlessly and print the result
    Replay {
        /// Placements as `column,row`, 1-based, X first
        #[arg(required = true)]
        moves: Vec<Position>,

        /// Print the final game state as JSON
        #[arg(long)]
        json: bool,

        /// Player nicknames
        #[command(flatten)]
        names: NameArgs,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_play() {
        let cli = Cli::parse_from(["tictactoe"]);
        assert_eq!(
            cli.command(),
            Command::Play {
                names: NameArgs::default()
            }
        );
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_play_with_names() {
        let cli = Cli::parse_from(["tictactoe", "play", "--player-x", "Alice"]);
        assert_eq!(
            cli.command(),
            Command::Play {
                names: NameArgs {
                    player_x: Some("Alice".to_string()),
                    player_o: None,
                }
            }
        );
    }

    #[test]
    fn test_replay_parses_positions() {
        let cli = Cli::parse_from(["tictactoe", "replay", "1,1", "2,2", "--json"]);
        match cli.command() {
            Command::Replay { moves, json, .. } => {
                assert_eq!(moves, vec![Position::new(1, 1), Position::new(2, 2)]);
                assert!(json);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_replay_rejects_bad_position() {
        assert!(Cli::try_parse_from(["tictactoe", "replay", "middle"]).is_err());
    }

    #[test]
    fn test_global_config_flag() {
        let cli = Cli::parse_from(["tictactoe", "replay", "2,2", "--config", "custom.toml"]);
        assert_eq!(cli.config, Some(PathBuf::from("custom.toml")));
    }
}
