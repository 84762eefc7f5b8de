//! History consistency invariant: the grid is exactly the replayed history.

use super::Invariant;
use crate::{GameState, Grid};

/// Invariant: replaying the move history onto an empty grid reproduces
/// the current grid.
///
/// Every move maps to one marked cell and no cell is marked without a move,
/// which also rules out any mark being overwritten.
pub struct HistoryConsistentInvariant;

impl Invariant<GameState> for HistoryConsistentInvariant {
    fn holds(game: &GameState) -> bool {
        let Ok(mut replayed) = Grid::new(game.size()) else {
            return false;
        };
        let all_placed = game
            .history()
            .iter()
            .all(|m| replayed.place(m.position, m.side.mark()));
        all_placed && &replayed == game.grid()
    }

    fn description() -> &'static str {
        "Grid matches the replayed move history"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Mark, Move, Position, Side};

    #[test]
    fn test_empty_game_holds() {
        assert!(HistoryConsistentInvariant::holds(&GameState::classic()));
    }

    #[test]
    fn test_moves_hold() {
        let mut game = GameState::classic();
        for pos in [Position::new(1, 1), Position::new(2, 2), Position::new(3, 3)] {
            game.place_mark(pos);
        }
        assert!(HistoryConsistentInvariant::holds(&game));
    }

    #[test]
    fn test_mark_without_move_violates() {
        let mut game = GameState::classic();
        game.place_mark(Position::new(2, 2));
        game.grid.place(Position::new(1, 1), Mark::O);
        assert!(!HistoryConsistentInvariant::holds(&game));
    }

    #[test]
    fn test_duplicate_move_violates() {
        let mut game = GameState::classic();
        game.place_mark(Position::new(2, 2));
        game.history.push(Move::new(Side::O, Position::new(2, 2)));
        assert!(!HistoryConsistentInvariant::holds(&game));
    }
}
