//! Turn-state machine for a single game session.

use derive_more::Display;
use serde::Serialize;
use tracing::{debug, info, instrument};

use crate::grid::{BoardSizeError, Grid};
use crate::invariants::{GameInvariants, InvariantSet, InvariantViolation};
use crate::position::Position;
use crate::rules::{self, Line};
use crate::types::{Mark, Move, Player, Side};

/// Where a game stands.
///
/// The active side only exists while the game is in progress, so exactly
/// one player is active during play and none once the game is over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Outcome {
    /// Waiting for the given side to move.
    InProgress(Side),
    /// The given side completed a line.
    Won(Side),
    /// The board filled up without a line.
    Draw,
}

impl Outcome {
    /// Returns true once no more marks can be placed.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::InProgress(_))
    }

    /// The side expected to move, if the game is still running.
    pub fn active(&self) -> Option<Side> {
        match self {
            Outcome::InProgress(side) => Some(*side),
            _ => None,
        }
    }

    /// The winning side, if any.
    pub fn winner(&self) -> Option<Side> {
        match self {
            Outcome::Won(side) => Some(*side),
            _ => None,
        }
    }
}

/// Why a placement was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display)]
pub enum Rejection {
    /// The position is not on the board.
    #[display("position is off the board")]
    OutOfBounds,
    /// The cell already holds a mark.
    #[display("cell is already marked")]
    Occupied,
    /// The game has already been won or drawn.
    #[display("game is already over")]
    GameOver,
}

/// What a call to [`GameState::place_mark`] changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Placement {
    /// Nothing changed.
    NoOp(Rejection),
    /// The mark was placed and the given side moves next.
    Continue(Side),
    /// The mark was placed and completed a line for the given side.
    Won(Side),
    /// The mark was placed and filled the board without a line.
    Draw,
}

impl Placement {
    /// Returns true if the grid changed.
    pub fn is_placed(&self) -> bool {
        !matches!(self, Placement::NoOp(_))
    }
}

/// Render-side view of one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CellView {
    /// Where the cell is.
    pub position: Position,
    /// What the cell holds.
    pub mark: Mark,
    /// True if the cell no longer accepts input: it is marked or the game is over.
    pub locked: bool,
}

/// Single source of truth for one game session.
///
/// Owns the grid, both players and the move history. Every mutation goes
/// through [`GameState::place_mark`] or [`GameState::set_name`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameState {
    pub(crate) grid: Grid,
    pub(crate) players: [Player; 2],
    pub(crate) history: Vec<Move>,
    pub(crate) outcome: Outcome,
}

impl GameState {
    /// Starts a game on an empty `size` x `size` board with X to move.
    ///
    /// # Errors
    ///
    /// Returns [`BoardSizeError`] if `size` is below 3 or above
    /// [`MAX_SIZE`](crate::MAX_SIZE).
    #[instrument]
    pub fn new(size: usize) -> Result<Self, BoardSizeError> {
        let grid = Grid::new(size)?;
        info!(size, "New game");
        Ok(Self::from_grid(grid))
    }

    /// Starts a game on the classic 3 x 3 board.
    pub fn classic() -> Self {
        Self::from_grid(Grid::classic())
    }

    fn from_grid(grid: Grid) -> Self {
        Self {
            grid,
            players: [Player::new(Side::X), Player::new(Side::O)],
            history: Vec::new(),
            outcome: Outcome::InProgress(Side::X),
        }
    }

    /// Assigns a display name to the player on `side`.
    ///
    /// Takes effect immediately; views rendered earlier must be refreshed
    /// by the caller.
    #[instrument(skip(self, name))]
    pub fn set_name(&mut self, side: Side, name: impl Into<String>) {
        let name = name.into();
        debug!(%name, moves = self.history.len(), "Player renamed");
        self.players[slot(side)].set_name(name);
    }

    /// Places the active player's mark at `position`.
    ///
    /// Returns [`Placement::NoOp`] without touching any state when the game
    /// is over, the position is off the board, or the cell is taken.
    #[instrument(skip(self), fields(outcome = ?self.outcome))]
    pub fn place_mark(&mut self, position: Position) -> Placement {
        let side = match self.outcome {
            Outcome::InProgress(side) => side,
            _ => return reject(Rejection::GameOver),
        };
        if !self.grid.contains(position) {
            return reject(Rejection::OutOfBounds);
        }
        if !self.grid.place(position, side.mark()) {
            return reject(Rejection::Occupied);
        }
        self.history.push(Move::new(side, position));

        let placement = if rules::has_win(&self.grid, side.mark()) {
            self.outcome = Outcome::Won(side);
            info!(winner = %side, moves = self.history.len(), "Game won");
            Placement::Won(side)
        } else if self.history.len() == self.grid.len() {
            self.outcome = Outcome::Draw;
            info!(moves = self.history.len(), "Game drawn");
            Placement::Draw
        } else {
            let next = side.opponent();
            self.outcome = Outcome::InProgress(next);
            debug!(next = %next, "Turn passed");
            Placement::Continue(next)
        };

        debug_assert!(
            self.check_invariants().is_ok(),
            "game invariants violated after {}",
            position
        );
        placement
    }

    /// Runs every game invariant against the current state.
    ///
    /// # Errors
    ///
    /// Returns the descriptions of all invariants that do not hold.
    pub fn check_invariants(&self) -> Result<(), Vec<InvariantViolation>> {
        <GameInvariants as InvariantSet<GameState>>::check_all(self)
    }

    /// Current outcome.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Returns true once the game is won or drawn.
    pub fn is_over(&self) -> bool {
        self.outcome.is_terminal()
    }

    /// The board.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Board dimension n.
    pub fn size(&self) -> usize {
        self.grid.size()
    }

    /// The player on `side`.
    pub fn player(&self, side: Side) -> &Player {
        &self.players[slot(side)]
    }

    /// Both players, X first.
    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    /// Side expected to move, or `None` once the game is over.
    pub fn active_side(&self) -> Option<Side> {
        self.outcome.active()
    }

    /// Player expected to move, or `None` once the game is over.
    pub fn active_player(&self) -> Option<&Player> {
        self.active_side().map(|side| self.player(side))
    }

    /// Winning player, if any.
    pub fn winner(&self) -> Option<&Player> {
        self.outcome.winner().map(|side| self.player(side))
    }

    /// The line that decided the game, if it was won.
    pub fn winning_line(&self) -> Option<Line> {
        self.outcome
            .winner()
            .and_then(|side| rules::winning_line(&self.grid, side.mark()))
    }

    /// Placed marks in order.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Number of marks placed so far.
    pub fn placed_count(&self) -> usize {
        self.history.len()
    }

    /// View of the cell at `position`, or `None` if it is off the board.
    pub fn cell(&self, position: Position) -> Option<CellView> {
        self.grid.get(position).map(|mark| CellView {
            position,
            mark,
            locked: !mark.is_empty() || self.is_over(),
        })
    }

    /// Views of every cell, row by row.
    pub fn cells(&self) -> impl Iterator<Item = CellView> + '_ {
        let over = self.is_over();
        self.grid.iter().map(move |(position, mark)| CellView {
            position,
            mark,
            locked: !mark.is_empty() || over,
        })
    }

    /// Text for the status indicator: whose turn it is, who won, or a draw.
    pub fn status_line(&self) -> String {
        match self.outcome {
            Outcome::InProgress(side) => format!("Turn: {}", self.player(side).name()),
            Outcome::Won(side) => format!("{} won!", self.player(side).name()),
            Outcome::Draw => "Draw!".to_string(),
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::classic()
    }
}

fn slot(side: Side) -> usize {
    match side {
        Side::X => 0,
        Side::O => 1,
    }
}

fn reject(reason: Rejection) -> Placement {
    debug!(%reason, "Placement ignored");
    Placement::NoOp(reason)
}
