//! The board: a fixed-size 2D array of tile values.
//!
//! ## Layout
//!
//! - Cells are stored row-major in a flat `Vec`.
//! - `0` ([`EMPTY`]) is an empty, passable cell. Any other value is a tile
//!   of that symbol id.
//! - The outermost ring (row 0, row `rows-1`, column 0, column `cols-1`) is
//!   the routing border. It never holds a tile, but paths may run through it.
//!
//! ## Usage
//!
//! ```
//! use tile_link::core::{Grid, Position};
//!
//! let mut grid = Grid::new(6, 6);
//! let pos = Position::new(1, 1);
//!
//! assert!(grid.is_empty(pos));
//! grid.set(pos, 7);
//! assert_eq!(grid.get(pos), 7);
//! assert!(grid.is_interior(pos));
//! assert!(!grid.is_interior(Position::new(0, 3)));
//! ```

use serde::{Deserialize, Serialize};

use super::Position;

/// Value stored in a grid cell. `0` means empty.
pub type TileValue = u32;

/// The empty-cell value.
pub const EMPTY: TileValue = 0;

/// Rectangular board of tile values.
///
/// Only the level generator (initial placement) and the match engine
/// (clearing matched pairs) write to the grid.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<TileValue>,
}

impl Grid {
    /// Create an empty grid.
    #[must_use]
    pub fn new(rows: usize, cols: usize) -> Self {
        assert!(rows > 0 && cols > 0, "Grid dimensions must be non-zero");

        Self {
            rows,
            cols,
            cells: vec![EMPTY; rows * cols],
        }
    }

    /// Number of rows, border included.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns, border included.
    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Check if a position lies inside the grid (border included).
    #[must_use]
    pub fn contains(&self, pos: Position) -> bool {
        pos.row < self.rows && pos.col < self.cols
    }

    /// Check if a position lies strictly inside the routing border.
    #[must_use]
    pub fn is_interior(&self, pos: Position) -> bool {
        pos.row >= 1 && pos.row + 1 < self.rows && pos.col >= 1 && pos.col + 1 < self.cols
    }

    /// Get the value at a position.
    ///
    /// Panics if the position is outside the grid.
    #[must_use]
    pub fn get(&self, pos: Position) -> TileValue {
        self.cells[self.index(pos)]
    }

    /// Check if the cell at a position is empty.
    #[must_use]
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == EMPTY
    }

    /// Write a value to a single cell.
    ///
    /// Panics if the position is outside the grid, or if a tile would be
    /// written into the border.
    pub fn set(&mut self, pos: Position, value: TileValue) {
        assert!(
            value == EMPTY || self.is_interior(pos),
            "Tiles may only be placed in the interior, got {pos}"
        );
        let index = self.index(pos);
        self.cells[index] = value;
    }

    /// Number of occupied cells.
    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|&&v| v != EMPTY).count()
    }

    /// Number of interior cells, i.e. the placement area.
    #[must_use]
    pub fn interior_area(&self) -> usize {
        self.rows.saturating_sub(2) * self.cols.saturating_sub(2)
    }

    /// Iterate over interior positions in row-major order.
    pub fn interior_positions(&self) -> impl Iterator<Item = Position> + '_ {
        let rows = 1..self.rows.saturating_sub(1);
        rows.flat_map(move |row| (1..self.cols - 1).map(move |col| Position::new(row, col)))
    }

    /// Iterate over occupied positions with their values.
    pub fn occupied(&self) -> impl Iterator<Item = (Position, TileValue)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, &v)| v != EMPTY)
            .map(move |(i, &v)| (Position::new(i / self.cols, i % self.cols), v))
    }

    fn index(&self, pos: Position) -> usize {
        assert!(
            self.contains(pos),
            "Position {pos} is outside the {}x{} grid",
            self.rows,
            self.cols
        );
        pos.row * self.cols + pos.col
    }
}

impl std::fmt::Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let width = self
            .cells
            .iter()
            .map(|v| v.to_string().len())
            .max()
            .unwrap_or(1);

        for row in 0..self.rows {
            for col in 0..self.cols {
                if col > 0 {
                    write!(f, " ")?;
                }
                match self.get(Position::new(row, col)) {
                    EMPTY => write!(f, "{:>width$}", ".")?,
                    v => write!(f, "{v:>width$}")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
