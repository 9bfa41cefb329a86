//! Path search integration tests.
//!
//! These tests exercise `find_path` on small hand-built boards covering each
//! search stage, ranking between two-turn candidates, and the two-turn cap.

use proptest::prelude::*;
use tile_link::core::{Grid, Position};
use tile_link::path::{find_path, Path};

fn p(row: usize, col: usize) -> Position {
    Position::new(row, col)
}

fn board(rows: usize, cols: usize, tiles: &[(usize, usize, u32)]) -> Grid {
    let mut grid = Grid::new(rows, cols);
    for &(r, c, v) in tiles {
        grid.set(p(r, c), v);
    }
    grid
}

/// Every segment is axis-aligned and crosses only empty cells.
fn assert_route_is_legal(grid: &Grid, path: &Path) {
    let points = path.points();
    assert!((2..=4).contains(&points.len()));

    for pair in points.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        assert!(a.row == b.row || a.col == b.col, "segment {a} -> {b} is diagonal");
        assert_ne!(a, b);

        let cells: Vec<Position> = if a.row == b.row {
            let (lo, hi) = (a.col.min(b.col), a.col.max(b.col));
            (lo + 1..hi).map(|c| p(a.row, c)).collect()
        } else {
            let (lo, hi) = (a.row.min(b.row), a.row.max(b.row));
            (lo + 1..hi).map(|r| p(r, a.col)).collect()
        };
        for cell in cells {
            assert!(grid.is_empty(cell), "segment {a} -> {b} crosses {cell}");
        }
    }

    for corner in path.corners() {
        assert!(grid.is_empty(*corner), "corner {corner} is occupied");
    }
}

// =============================================================================
// Zero turns
// =============================================================================

/// Same row, nothing between the two tiles.
#[test]
fn test_same_row_clear() {
    let grid = board(6, 6, &[(1, 1, 7), (1, 4, 7)]);
    let path = find_path(&grid, p(1, 1), p(1, 4)).unwrap();
    assert_eq!(path.points(), &[p(1, 1), p(1, 4)]);
}

/// Same column, nothing between the two tiles.
#[test]
fn test_same_col_clear() {
    let grid = board(6, 6, &[(1, 3, 2), (4, 3, 2)]);
    let path = find_path(&grid, p(4, 3), p(1, 3)).unwrap();
    assert_eq!(path.points(), &[p(4, 3), p(1, 3)]);
}

/// Adjacent tiles connect even when boxed in by other tiles.
#[test]
fn test_adjacent_boxed_in() {
    let grid = board(
        5,
        6,
        &[
            (1, 1, 9), (1, 2, 9), (1, 3, 9), (1, 4, 9),
            (2, 1, 9), (2, 2, 3), (2, 3, 3), (2, 4, 9),
            (3, 1, 9), (3, 2, 9), (3, 3, 9), (3, 4, 9),
        ],
    );
    let path = find_path(&grid, p(2, 2), p(2, 3)).unwrap();
    assert_eq!(path.turns(), 0);
}

// =============================================================================
// One turn
// =============================================================================

/// Blocked straight line with one free corner yields a one-turn path.
#[test]
fn test_one_turn_through_free_corner() {
    // (1,3) corner blocked, (3,1) corner free
    let grid = board(6, 6, &[(1, 1, 4), (3, 3, 4), (1, 3, 8)]);
    let path = find_path(&grid, p(1, 1), p(3, 3)).unwrap();
    assert_eq!(path.points(), &[p(1, 1), p(3, 1), p(3, 3)]);
}

/// A clear leg is not enough: the other leg through the corner must be clear too.
#[test]
fn test_one_turn_skips_obstructed_leg() {
    // Corner (1,3) free, but (2,3) blocks its vertical leg
    let grid = board(6, 6, &[(1, 1, 4), (3, 3, 4), (2, 3, 8)]);
    let path = find_path(&grid, p(1, 1), p(3, 3)).unwrap();
    assert_eq!(path.points(), &[p(1, 1), p(3, 1), p(3, 3)]);
}

// =============================================================================
// Two turns
// =============================================================================

/// Same-column pair with a blocker between detours around the outside.
#[test]
fn test_blocked_column_detours_with_two_turns() {
    let grid = board(6, 6, &[(1, 1, 7), (4, 1, 7), (2, 1, 9)]);
    let path = find_path(&grid, p(1, 1), p(4, 1)).unwrap();

    assert_eq!(path.turns(), 2);
    assert_eq!(path.points(), &[p(1, 1), p(1, 0), p(4, 0), p(4, 1)]);
    assert_route_is_legal(&grid, &path);
}

/// Same-row pair with a blocker between routes through the top border.
#[test]
fn test_blocked_row_routes_through_border() {
    let grid = board(6, 6, &[(1, 1, 7), (1, 4, 7), (1, 2, 9)]);
    let path = find_path(&grid, p(1, 1), p(1, 4)).unwrap();
    assert_eq!(path.points(), &[p(1, 1), p(0, 1), p(0, 4), p(1, 4)]);
}

/// The cheapest candidate wins even when a costlier one was found first.
#[test]
fn test_cheapest_two_turn_route_wins() {
    // Column 0 is discovered first (cost 9); column 2 costs 5
    let grid = board(6, 6, &[(1, 3, 5), (4, 3, 5), (2, 3, 6)]);
    let path = find_path(&grid, p(1, 3), p(4, 3)).unwrap();
    assert_eq!(path.points(), &[p(1, 3), p(1, 2), p(4, 2), p(4, 3)]);
}

// =============================================================================
// No path
// =============================================================================

/// A tile walled in on four sides cannot reach anything.
#[test]
fn test_walled_in_has_no_path() {
    let grid = board(
        6,
        6,
        &[(2, 2, 7), (1, 2, 9), (3, 2, 9), (2, 1, 9), (2, 3, 9), (4, 4, 7)],
    );
    assert!(find_path(&grid, p(2, 2), p(4, 4)).is_none());
}

/// Tiles that need a four-turn detour are reported as unconnectable.
#[test]
fn test_route_beyond_two_turns_is_not_found() {
    // Both tiles can only leave sideways along row 2, and (2,3) splits
    // that row, so any connection must bend four times through the border.
    let grid = board(
        5,
        6,
        &[
            (1, 1, 9), (2, 1, 7), (3, 1, 9),
            (2, 3, 9),
            (1, 4, 9), (2, 4, 7), (3, 4, 9),
        ],
    );
    assert!(find_path(&grid, p(2, 1), p(2, 4)).is_none());
}

// =============================================================================
// Properties
// =============================================================================

fn arb_board() -> impl Strategy<Value = (Grid, Position, Position)> {
    (4usize..9, 4usize..9).prop_flat_map(|(rows, cols)| {
        let cells = (rows - 2) * (cols - 2);
        (
            Just((rows, cols)),
            proptest::collection::vec(prop::bool::weighted(0.35), cells),
            0..cells,
            0..cells,
        )
            .prop_filter("endpoints must differ", |(_, _, a, b)| a != b)
            .prop_map(|((rows, cols), occupied, a, b)| {
                let inner = cols - 2;
                let at = |i: usize| Position::new(i / inner + 1, i % inner + 1);
                let mut grid = Grid::new(rows, cols);
                for (i, filled) in occupied.into_iter().enumerate() {
                    if filled {
                        grid.set(at(i), 9);
                    }
                }
                let (a, b) = (at(a), at(b));
                grid.set(a, 1);
                grid.set(b, 1);
                (grid, a, b)
            })
    })
}

proptest! {
    #[test]
    fn prop_found_paths_are_legal((grid, a, b) in arb_board()) {
        if let Some(path) = find_path(&grid, a, b) {
            prop_assert_eq!(path.start(), a);
            prop_assert_eq!(path.end(), b);
            prop_assert!(path.turns() <= 2);
            assert_route_is_legal(&grid, &path);
        }
    }

    #[test]
    fn prop_connectivity_is_symmetric((grid, a, b) in arb_board()) {
        prop_assert_eq!(find_path(&grid, a, b).is_some(), find_path(&grid, b, a).is_some());
    }

    #[test]
    fn prop_empty_board_always_connects((rows, cols) in (4usize..10, 4usize..10), seed in any::<u64>()) {
        let inner = (rows - 2) * (cols - 2);
        let i = (seed as usize) % inner;
        let j = (i + 1 + (seed as usize / 7) % (inner - 1)) % inner;
        let at = |k: usize| Position::new(k / (cols - 2) + 1, k % (cols - 2) + 1);

        let mut grid = Grid::new(rows, cols);
        grid.set(at(i), 1);
        grid.set(at(j), 1);

        let path = find_path(&grid, at(i), at(j));
        prop_assert!(path.is_some());
        prop_assert!(path.unwrap().turns() <= 1);
    }
}
