//! Alternating turn invariant: players alternate X, O, X, O, ...

use super::Invariant;
use crate::{GameState, Mark, Outcome, Side};

/// Invariant: sides alternate, starting with X.
///
/// The move history must read X, O, X, O, ... and, while the game runs,
/// the active side must be the one the history's parity calls for. As a
/// consequence X never trails O and leads by at most one mark.
pub struct AlternatingTurnInvariant;

impl Invariant<GameState> for AlternatingTurnInvariant {
    fn holds(game: &GameState) -> bool {
        let history = game.history();

        if let Some(first) = history.first()
            && first.side != Side::X
        {
            return false;
        }

        if history.windows(2).any(|w| w[0].side == w[1].side) {
            return false;
        }

        let x = game.grid().count(Mark::X);
        let o = game.grid().count(Mark::O);
        if x < o || x - o > 1 {
            return false;
        }

        match game.outcome() {
            Outcome::InProgress(side) => {
                let expected = if history.len() % 2 == 0 {
                    Side::X
                } else {
                    Side::O
                };
                side == expected
            }
            Outcome::Won(side) => history.last().is_some_and(|m| m.side == side),
            Outcome::Draw => true,
        }
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Position;

    #[test]
    fn test_empty_game_holds() {
        assert!(AlternatingTurnInvariant::holds(&GameState::classic()));
    }

    #[test]
    fn test_holds_through_a_game() {
        let mut game = GameState::classic();
        for pos in Position::all(3) {
            game.place_mark(pos);
            assert!(AlternatingTurnInvariant::holds(&game));
        }
    }

    #[test]
    fn test_wrong_active_side_violates() {
        let mut game = GameState::classic();
        game.place_mark(Position::new(1, 1));
        game.outcome = Outcome::InProgress(Side::X);
        assert!(!AlternatingTurnInvariant::holds(&game));
    }
}
