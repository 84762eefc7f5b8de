//! Headless replay of a move list.

use derive_getters::Getters;
use tictactoe_core::{GameState, Placement, Position, Side};
use tracing::{info, instrument};

use crate::config::AppConfig;

/// One applied placement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    /// Where a mark was requested.
    pub position: Position,
    /// What the game made of it.
    pub placement: Placement,
}

impl std::fmt::Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.placement {
            Placement::Continue(next) => write!(f, "{}: placed, {} to move", self.position, next),
            Placement::Won(side) => write!(f, "{}: placed, {} wins", self.position, side),
            Placement::Draw => write!(f, "{}: placed, draw", self.position),
            Placement::NoOp(reason) => write!(f, "{}: ignored ({})", self.position, reason),
        }
    }
}

/// Result of feeding a move list through a fresh classic game.
#[derive(Debug, Clone, Getters)]
pub struct Replay {
    game: GameState,
    steps: Vec<Step>,
}

impl Replay {
    /// Plays `moves` in order on a new 3 x 3 game.
    ///
    /// Moves the game ignores are kept in [`Replay::steps`] as no-ops.
    #[instrument(skip(config, moves), fields(moves = moves.len()))]
    pub fn run(config: &AppConfig, moves: &[Position]) -> Self {
        let mut game = GameState::classic();
        for (side, name) in [(Side::X, config.player_x()), (Side::O, config.player_o())] {
            if !name.trim().is_empty() {
                game.set_name(side, name.trim());
            }
        }

        let steps = moves
            .iter()
            .map(|&position| Step {
                position,
                placement: game.place_mark(position),
            })
            .collect();

        info!(outcome = ?game.outcome(), "Replay finished");
        Self { game, steps }
    }

    /// Human-readable report: one line per step, the board, then the status.
    pub fn report(&self) -> String {
        let mut lines: Vec<String> = self
            .steps
            .iter()
            .enumerate()
            .map(|(i, step)| format!("{}. {}", i + 1, step))
            .collect();
        lines.push(String::new());
        lines.push(self.game.grid().to_string());
        lines.push(String::new());
        lines.push(self.game.status_line());
        lines.join("\n")
    }
}
