//! Core domain types for tic-tac-toe.

use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::position::Position;

/// Content of a single grid cell.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum Mark {
    /// Nothing placed yet.
    #[default]
    #[strum(to_string = "_")]
    Empty,
    /// Placed by the X player.
    X,
    /// Placed by the O player.
    O,
}

impl Mark {
    /// Returns true if no player has marked this cell.
    pub fn is_empty(self) -> bool {
        self == Mark::Empty
    }

    /// Returns the side that owns this mark, if any.
    pub fn side(self) -> Option<Side> {
        match self {
            Mark::Empty => None,
            Mark::X => Some(Side::X),
            Mark::O => Some(Side::O),
        }
    }
}

/// Selects one of the two players.
///
/// X always moves first.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum Side {
    /// The first player.
    X,
    /// The second player.
    O,
}

impl Side {
    /// Returns the opposing side.
    pub fn opponent(self) -> Self {
        match self {
            Side::X => Side::O,
            Side::O => Side::X,
        }
    }

    /// Returns the mark this side places on the grid.
    pub fn mark(self) -> Mark {
        match self {
            Side::X => Mark::X,
            Side::O => Mark::O,
        }
    }

    /// Name a player on this side has before one is chosen.
    pub fn default_name(self) -> &'static str {
        match self {
            Side::X => "Player X",
            Side::O => "Player O",
        }
    }
}

/// A participant in a game session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct Player {
    /// Which side the player plays.
    side: Side,
    /// Display name shown in turn and victory messages.
    name: String,
}

impl Player {
    /// Creates a player with the default name for `side`.
    #[instrument]
    pub fn new(side: Side) -> Self {
        Self {
            side,
            name: side.default_name().to_string(),
        }
    }

    /// Returns the mark this player places.
    pub fn mark(&self) -> Mark {
        self.side.mark()
    }

    /// Replaces the display name.
    pub(crate) fn set_name(&mut self, name: String) {
        self.name = name;
    }
}

/// A placed mark: which side played where.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, new)]
pub struct Move {
    /// The side that moved.
    pub side: Side,
    /// Where the mark was placed.
    pub position: Position,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.side, self.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent_round_trip() {
        assert_eq!(Side::X.opponent(), Side::O);
        assert_eq!(Side::O.opponent().opponent(), Side::O);
    }

    #[test]
    fn test_side_marks_are_never_empty() {
        assert_eq!(Side::X.mark(), Mark::X);
        assert_eq!(Side::O.mark(), Mark::O);
        assert_eq!(Mark::Empty.side(), None);
        assert_eq!(Mark::O.side(), Some(Side::O));
    }

    #[test]
    fn test_mark_display() {
        assert_eq!(Mark::Empty.to_string(), "_");
        assert_eq!(Mark::X.to_string(), "X");
    }

    #[test]
    fn test_player_defaults() {
        let player = Player::new(Side::O);
        assert_eq!(player.name(), "Player O");
        assert_eq!(player.mark(), Mark::O);
    }
}
