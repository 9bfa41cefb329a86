//! Ranking of two-turn candidate routes.

use crate::core::Position;

/// A two-turn route candidate: its two corners and a ranking cost.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PossibleRoute {
    /// Corner adjacent to the start.
    pub first_turn: Position,
    /// Corner adjacent to the end.
    pub second_turn: Position,
    /// Ranking cost, lower is better.
    pub cost: usize,
}

impl PossibleRoute {
    /// Build a candidate and compute its cost.
    ///
    /// Cost is `|t1.col - start.col| + |t2.row - t1.row| + |t2.col - end.col|`.
    /// This is not the true segment length for vertical-first routes, and
    /// ranking depends on it exactly as written.
    #[must_use]
    pub fn new(start: Position, first_turn: Position, second_turn: Position, end: Position) -> Self {
        let cost = first_turn.col.abs_diff(start.col)
            + second_turn.row.abs_diff(first_turn.row)
            + second_turn.col.abs_diff(end.col);

        Self {
            first_turn,
            second_turn,
            cost,
        }
    }
}

/// Pick the cheapest route. Ties go to the earliest candidate.
pub fn best_route(routes: impl IntoIterator<Item = PossibleRoute>) -> Option<PossibleRoute> {
    routes.into_iter().min_by_key(|r| r.cost)
}
