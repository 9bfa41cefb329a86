//! Cell addressing.
//!
//! A `Position` names one cell of the board by `(row, col)`. Row 0 is the
//! top edge, column 0 the left edge. Positions double as tile identities
//! (the tile at `P` is `grid.get(P)`) and as path waypoints.

use serde::{Deserialize, Serialize};

/// A `(row, col)` cell address.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    /// Row index (0-based, top to bottom).
    pub row: usize,
    /// Column index (0-based, left to right).
    pub col: usize,
}

impl Position {
    /// Create a position.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// True if both positions lie on the same row.
    #[must_use]
    pub const fn same_row(self, other: Position) -> bool {
        self.row == other.row
    }

    /// True if both positions lie on the same column.
    #[must_use]
    pub const fn same_col(self, other: Position) -> bool {
        self.col == other.col
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_display() {
        assert_eq!(format!("{}", Position::new(3, 7)), "(3, 7)");
    }

    #[test]
    fn test_position_from_tuple() {
        let pos: Position = (2, 5).into();
        assert_eq!(pos, Position::new(2, 5));
    }

    #[test]
    fn test_alignment() {
        let a = Position::new(1, 1);
        assert!(a.same_row(Position::new(1, 4)));
        assert!(!a.same_row(Position::new(2, 1)));
        assert!(a.same_col(Position::new(4, 1)));
        assert!(!a.same_col(Position::new(1, 2)));
    }

    #[test]
    fn test_ordering_is_row_major() {
        assert!(Position::new(0, 9) < Position::new(1, 0));
        assert!(Position::new(1, 0) < Position::new(1, 1));
    }
}
