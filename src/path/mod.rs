//! Bend-limited path search.
//!
//! Two tiles connect if a route of at most three straight orthogonal
//! segments (two turns) joins them through empty cells. The border ring of
//! the grid is always empty, so routes may swing around the outside of the
//! board.
//!
//! ## Search Order
//!
//! 1. Zero turns: same row or same column, nothing in between.
//! 2. One turn: through one of the two corners of the bounding rectangle.
//! 3. Two turns: every cell on the lines through either endpoint is tried
//!    as the first or last corner; the cheapest route wins.
//!
//! The first stage that succeeds decides the path.
//!
//! ```
//! use tile_link::core::{Grid, Position};
//! use tile_link::path::find_path;
//!
//! let mut grid = Grid::new(6, 6);
//! let a = Position::new(1, 1);
//! let b = Position::new(1, 4);
//! grid.set(a, 7);
//! grid.set(b, 7);
//!
//! let path = find_path(&grid, a, b).unwrap();
//! assert_eq!(path.points(), &[a, b]);
//! ```

mod finder;
mod route;

pub use finder::find_path;
pub use route::{best_route, PossibleRoute};

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::Position;

/// An ordered list of 2 to 4 waypoints: start, up to two corners, end.
///
/// Consecutive waypoints are joined by straight orthogonal segments.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Path {
    points: SmallVec<[Position; 4]>,
}

impl Path {
    /// Straight path with no corners.
    #[must_use]
    pub fn straight(start: Position, end: Position) -> Self {
        Self {
            points: SmallVec::from_slice(&[start, end]),
        }
    }

    /// Path with one corner.
    #[must_use]
    pub fn one_turn(start: Position, corner: Position, end: Position) -> Self {
        Self {
            points: SmallVec::from_slice(&[start, corner, end]),
        }
    }

    /// Path with two corners.
    #[must_use]
    pub fn two_turn(start: Position, first: Position, second: Position, end: Position) -> Self {
        Self {
            points: SmallVec::from_slice(&[start, first, second, end]),
        }
    }

    /// All waypoints in order.
    #[must_use]
    pub fn points(&self) -> &[Position] {
        &self.points
    }

    /// First waypoint.
    #[must_use]
    pub fn start(&self) -> Position {
        self.points[0]
    }

    /// Last waypoint.
    #[must_use]
    pub fn end(&self) -> Position {
        self.points[self.points.len() - 1]
    }

    /// Number of corners (0, 1 or 2).
    #[must_use]
    pub fn turns(&self) -> usize {
        self.points.len() - 2
    }

    /// The corner waypoints only.
    #[must_use]
    pub fn corners(&self) -> &[Position] {
        &self.points[1..self.points.len() - 1]
    }
}

impl std::fmt::Display for Path {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, p) in self.points.iter().enumerate() {
            if i > 0 {
                write!(f, " -> ")?;
            }
            write!(f, "{p}")?;
        }
        Ok(())
    }
}
