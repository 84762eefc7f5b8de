//! Draw detection.

use tracing::instrument;

use super::win::winner;
use crate::grid::Grid;

/// Checks if every cell is marked.
#[instrument(skip(grid))]
pub fn is_full(grid: &Grid) -> bool {
    grid.vacant_positions().is_empty()
}

/// A full board with no winning line.
///
/// Win detection takes priority, so a board completed by a winning move is
/// never a draw.
#[instrument(skip(grid))]
pub fn is_draw(grid: &Grid) -> bool {
    is_full(grid) && winner(grid).is_none()
}
