//! The square board of marks.

use derive_more::{Display, Error};
use serde::Serialize;
use tracing::instrument;

use crate::position::Position;
use crate::types::Mark;

/// Smallest supported board dimension.
pub const MIN_SIZE: usize = 3;

/// Largest supported board dimension.
pub const MAX_SIZE: usize = 64;

/// Dimension of the classic board.
pub const CLASSIC_SIZE: usize = 3;

/// Rejected board dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("Board size {} is outside {}..={}", size, MIN_SIZE, MAX_SIZE)]
pub struct BoardSizeError {
    /// The requested size.
    pub size: usize,
}

/// An n x n board of [`Mark`]s.
///
/// Holds exactly `size * size` cells for its whole life. Cells only change
/// from [`Mark::Empty`] to a player's mark.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Grid {
    size: usize,
    /// Cells in row-major order.
    cells: Vec<Mark>,
}

impl Grid {
    /// Creates an empty grid.
    ///
    /// # Errors
    ///
    /// Returns [`BoardSizeError`] if `size` is outside
    /// [`MIN_SIZE`]..=[`MAX_SIZE`].
    #[instrument]
    pub fn new(size: usize) -> Result<Self, BoardSizeError> {
        let len = (MIN_SIZE..=MAX_SIZE)
            .contains(&size)
            .then(|| size.checked_mul(size))
            .flatten()
            .ok_or(BoardSizeError { size })?;
        Ok(Self {
            size,
            cells: vec![Mark::Empty; len],
        })
    }

    /// Creates the empty classic 3 x 3 grid.
    pub fn classic() -> Self {
        Self {
            size: CLASSIC_SIZE,
            cells: vec![Mark::Empty; CLASSIC_SIZE * CLASSIC_SIZE],
        }
    }

    /// Board dimension n.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of cells, always n * n.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns true if no mark has been placed.
    pub fn is_blank(&self) -> bool {
        self.cells.iter().all(|m| m.is_empty())
    }

    /// Returns true if the position lies on this board.
    pub fn contains(&self, position: Position) -> bool {
        position.is_within(self.size)
    }

    /// Mark at `position`, or `None` if it is off the board.
    pub fn get(&self, position: Position) -> Option<Mark> {
        position
            .to_index(self.size)
            .and_then(|i| self.cells.get(i).copied())
    }

    /// Returns true if the position is on the board and unmarked.
    pub fn is_vacant(&self, position: Position) -> bool {
        self.get(position) == Some(Mark::Empty)
    }

    /// Writes `mark` into a vacant cell.
    ///
    /// Returns false and leaves the grid untouched when the position is off
    /// the board or already marked.
    pub(crate) fn place(&mut self, position: Position, mark: Mark) -> bool {
        match position.to_index(self.size) {
            Some(i) if self.cells[i].is_empty() => {
                self.cells[i] = mark;
                true
            }
            _ => false,
        }
    }

    /// Number of cells holding `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        self.cells.iter().filter(|m| **m == mark).count()
    }

    /// Iterates over every position with its mark, row by row.
    pub fn iter(&self) -> impl Iterator<Item = (Position, Mark)> + '_ {
        Position::all(self.size).zip(self.cells.iter().copied())
    }

    /// Unmarked positions, row by row.
    pub fn vacant_positions(&self) -> Vec<Position> {
        self.iter()
            .filter(|(_, mark)| mark.is_empty())
            .map(|(pos, _)| pos)
            .collect()
    }
}

impl std::fmt::Display for Grid {
    /// Renders rows of marks separated by `|`, one row per line.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, row) in self.cells.chunks(self.size).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            let line: Vec<String> = row.iter().map(Mark::to_string).collect();
            write!(f, "{}", line.join("|"))?;
        }
        Ok(())
    }
}
