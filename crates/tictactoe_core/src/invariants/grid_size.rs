//! Grid size invariant: the board never grows or shrinks.

use super::Invariant;
use crate::GameState;

/// Invariant: the grid holds exactly n * n cells.
pub struct GridSizeInvariant;

impl Invariant<GameState> for GridSizeInvariant {
    fn holds(game: &GameState) -> bool {
        let n = game.size();
        game.grid().len() == n * n
    }

    fn description() -> &'static str {
        "Grid holds exactly n * n cells"
    }
}
