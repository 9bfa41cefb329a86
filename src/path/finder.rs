//! Zero-, one- and two-turn route search over a grid.
//!
//! All checks treat the two endpoints as given: only the cells strictly
//! between them (and the corners) must be empty. Whether the endpoints hold
//! equal values is the caller's concern.

use tracing::{instrument, trace};

use super::route::{best_route, PossibleRoute};
use super::Path;
use crate::core::{Grid, Position};

/// Find a route of at most two turns between `start` and `end`.
///
/// Returns `None` when no such route exists. Routes with three or more
/// turns are never considered.
///
/// Panics if either position lies outside the grid or if `start == end`.
#[instrument(level = "trace", skip(grid))]
pub fn find_path(grid: &Grid, start: Position, end: Position) -> Option<Path> {
    assert!(
        grid.contains(start) && grid.contains(end),
        "Path endpoints {start} and {end} must lie inside the grid"
    );
    assert_ne!(start, end, "Cannot route a tile to itself");

    if horizontal_clear(grid, start, end) || vertical_clear(grid, start, end) {
        trace!("straight route");
        return Some(Path::straight(start, end));
    }

    if let Some(corner) = one_turn(grid, start, end) {
        trace!(%corner, "one-turn route");
        return Some(Path::one_turn(start, corner, end));
    }

    let route = two_turn(grid, start, end)?;
    trace!(first = %route.first_turn, second = %route.second_turn, cost = route.cost, "two-turn route");
    Some(Path::two_turn(start, route.first_turn, route.second_turn, end))
}

/// Same row, distinct cells, nothing in between.
fn horizontal_clear(grid: &Grid, a: Position, b: Position) -> bool {
    if a == b || !a.same_row(b) {
        return false;
    }
    let (lo, hi) = (a.col.min(b.col), a.col.max(b.col));
    (lo + 1..hi).all(|col| grid.is_empty(Position::new(a.row, col)))
}

/// Same column, distinct cells, nothing in between.
fn vertical_clear(grid: &Grid, a: Position, b: Position) -> bool {
    if a == b || !a.same_col(b) {
        return false;
    }
    let (lo, hi) = (a.row.min(b.row), a.row.max(b.row));
    (lo + 1..hi).all(|row| grid.is_empty(Position::new(row, a.col)))
}

/// Corner of a one-turn route, trying `(start.row, end.col)` first.
fn one_turn(grid: &Grid, start: Position, end: Position) -> Option<Position> {
    if start == end {
        return None;
    }

    let corner = Position::new(start.row, end.col);
    if grid.is_empty(corner) && horizontal_clear(grid, corner, start) && vertical_clear(grid, corner, end) {
        return Some(corner);
    }

    let corner = Position::new(end.row, start.col);
    if grid.is_empty(corner) && horizontal_clear(grid, corner, end) && vertical_clear(grid, corner, start) {
        return Some(corner);
    }

    None
}

/// Cheapest two-turn route.
///
/// Candidates are scanned column by column (start-anchored, then
/// end-anchored horizontal lines), then row by row (start-anchored, then
/// end-anchored vertical lines). Discovery order breaks cost ties.
fn two_turn(grid: &Grid, start: Position, end: Position) -> Option<PossibleRoute> {
    let mut routes = Vec::new();

    for col in 0..grid.cols() {
        if col != start.col {
            let first = Position::new(start.row, col);
            if grid.is_empty(first) && horizontal_clear(grid, start, first) {
                if let Some(second) = one_turn(grid, first, end) {
                    routes.push(PossibleRoute::new(start, first, second, end));
                }
            }
        }

        if col != end.col {
            let second = Position::new(end.row, col);
            if grid.is_empty(second) && horizontal_clear(grid, second, end) {
                if let Some(first) = one_turn(grid, start, second) {
                    routes.push(PossibleRoute::new(start, first, second, end));
                }
            }
        }
    }

    for row in 0..grid.rows() {
        if row != start.row {
            let first = Position::new(row, start.col);
            if grid.is_empty(first) && vertical_clear(grid, start, first) {
                if let Some(second) = one_turn(grid, first, end) {
                    routes.push(PossibleRoute::new(start, first, second, end));
                }
            }
        }

        if row != end.row {
            let second = Position::new(row, end.col);
            if grid.is_empty(second) && vertical_clear(grid, second, end) {
                if let Some(first) = one_turn(grid, start, second) {
                    routes.push(PossibleRoute::new(start, first, second, end));
                }
            }
        }
    }

    trace!(candidates = routes.len(), "two-turn scan");
    best_route(routes)
}
