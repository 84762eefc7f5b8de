//! Win detection.
//!
//! A player wins by owning every cell of a row, a column, or one of the two
//! full-length diagonals. Shorter diagonals never count, on any board size.

use derive_getters::Getters;
use serde::Serialize;
use strum::IntoEnumIterator;
use tracing::instrument;

use crate::grid::Grid;
use crate::position::Position;
use crate::types::{Mark, Side};

/// Which family a [`Line`] belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum LineKind {
    /// The given row, 1-based.
    Row(usize),
    /// The given column, 1-based.
    Column(usize),
    /// Top-left to bottom-right.
    Diagonal,
    /// Top-right to bottom-left.
    AntiDiagonal,
}

/// A winning line: n positions that must all hold the same mark.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters)]
pub struct Line {
    /// Where the line lies.
    kind: LineKind,
    /// The cells of the line.
    cells: Vec<Position>,
}

impl Line {
    /// Returns true if every cell of the line holds `mark` on `grid`.
    pub fn is_owned_by(&self, grid: &Grid, mark: Mark) -> bool {
        self.cells.iter().all(|p| grid.get(*p) == Some(mark))
    }

    /// Returns true if the line passes through `position`.
    pub fn contains(&self, position: Position) -> bool {
        self.cells.contains(&position)
    }
}

/// Enumerates every winning line of a `size` x `size` board.
///
/// Rows come first, then columns, then the two diagonals: `2 * size + 2`
/// lines in total.
#[instrument(level = "trace")]
pub fn winning_lines(size: usize) -> Vec<Line> {
    let rows = (1..=size).map(|row| Line {
        kind: LineKind::Row(row),
        cells: (1..=size).map(|col| Position::new(col, row)).collect(),
    });
    let columns = (1..=size).map(|col| Line {
        kind: LineKind::Column(col),
        cells: (1..=size).map(|row| Position::new(col, row)).collect(),
    });
    let diagonal = Line {
        kind: LineKind::Diagonal,
        cells: (1..=size).map(|i| Position::new(i, i)).collect(),
    };
    let anti_diagonal = Line {
        kind: LineKind::AntiDiagonal,
        cells: (1..=size).map(|i| Position::new(size + 1 - i, i)).collect(),
    };

    rows.chain(columns)
        .chain([diagonal, anti_diagonal])
        .collect()
}

/// First line fully owned by `mark`, if any.
#[instrument(skip(grid))]
pub fn winning_line(grid: &Grid, mark: Mark) -> Option<Line> {
    if mark.is_empty() {
        return None;
    }
    winning_lines(grid.size())
        .into_iter()
        .find(|line| line.is_owned_by(grid, mark))
}

/// Checks whether `mark` occupies a complete line.
///
/// [`Mark::Empty`] never wins, so untouched lines are not reported.
#[instrument(skip(grid))]
pub fn has_win(grid: &Grid, mark: Mark) -> bool {
    winning_line(grid, mark).is_some()
}

/// Returns the side owning a complete line, if any.
#[instrument(skip(grid))]
pub fn winner(grid: &Grid) -> Option<Side> {
    Side::iter().find(|side| has_win(grid, side.mark()))
}
