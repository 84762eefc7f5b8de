//! Grid coordinates.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// A cell coordinate on an n x n grid.
///
/// Both components are 1-based: `(1, 1)` is the top-left cell and `(n, n)`
/// the bottom-right one. A `Position` carries no board size, so whether it
/// is on the board is decided by the [`Grid`](crate::Grid) it is used with.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Display,
)]
#[display("({}, {})", column, row)]
pub struct Position {
    column: usize,
    row: usize,
}

impl Position {
    /// Creates a position from a column and a row.
    pub const fn new(column: usize, row: usize) -> Self {
        Self { column, row }
    }

    /// Column, counted from 1 at the left edge.
    pub fn column(&self) -> usize {
        self.column
    }

    /// Row, counted from 1 at the top edge.
    pub fn row(&self) -> usize {
        self.row
    }

    /// Returns true if both components lie in `1..=size`.
    pub fn is_within(&self, size: usize) -> bool {
        (1..=size).contains(&self.column) && (1..=size).contains(&self.row)
    }

    /// Row-major offset into a grid of the given size.
    #[instrument(level = "trace")]
    pub fn to_index(self, size: usize) -> Option<usize> {
        self.is_within(size)
            .then(|| (self.row - 1) * size + (self.column - 1))
    }

    /// Inverse of [`Position::to_index`].
    #[instrument(level = "trace")]
    pub fn from_index(index: usize, size: usize) -> Option<Self> {
        (size > 0 && index < size * size).then(|| Self::new(index % size + 1, index / size + 1))
    }

    /// Every position of a `size` x `size` grid, row by row.
    pub fn all(size: usize) -> impl Iterator<Item = Position> {
        (1..=size).flat_map(move |row| (1..=size).map(move |column| Position::new(column, row)))
    }
}

/// Error returned when text cannot be read as a position.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Invalid position '{}': expected '<column>,<row>'", input)]
pub struct ParsePositionError {
    /// The rejected input.
    pub input: String,
}

impl FromStr for Position {
    type Err = ParsePositionError;

    /// Parses `"column,row"`; whitespace around either number is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParsePositionError {
            input: s.to_string(),
        };
        let (column, row) = s.split_once(',').ok_or_else(err)?;
        let column = column.trim().parse().map_err(|_| err())?;
        let row = row.trim().parse().map_err(|_| err())?;
        Ok(Self::new(column, row))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_is_row_major() {
        assert_eq!(Position::new(1, 1).to_index(3), Some(0));
        assert_eq!(Position::new(3, 1).to_index(3), Some(2));
        assert_eq!(Position::new(1, 2).to_index(3), Some(3));
        assert_eq!(Position::new(3, 3).to_index(3), Some(8));
    }

    #[test]
    fn test_out_of_bounds_has_no_index() {
        assert_eq!(Position::new(0, 1).to_index(3), None);
        assert_eq!(Position::new(4, 1).to_index(3), None);
        assert_eq!(Position::new(2, 4).to_index(3), None);
    }

    #[test]
    fn test_from_index_inverts_to_index() {
        for pos in Position::all(4) {
            let idx = pos.to_index(4).unwrap();
            assert_eq!(Position::from_index(idx, 4), Some(pos));
        }
        assert_eq!(Position::from_index(9, 3), None);
    }

    #[test]
    fn test_all_covers_grid_in_order() {
        let all: Vec<_> = Position::all(3).collect();
        assert_eq!(all.len(), 9);
        assert_eq!(all[0], Position::new(1, 1));
        assert_eq!(all[1], Position::new(2, 1));
        assert_eq!(all[8], Position::new(3, 3));
    }

    #[test]
    fn test_parse() {
        assert_eq!("2,3".parse::<Position>(), Ok(Position::new(2, 3)));
        assert_eq!(" 1 , 2 ".parse::<Position>(), Ok(Position::new(1, 2)));
        assert!("2".parse::<Position>().is_err());
        assert!("a,b".parse::<Position>().is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Position::new(2, 3).to_string(), "(2, 3)");
    }
}
