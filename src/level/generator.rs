//! Random pair placement.

use rustc_hash::FxHashSet;
use tracing::{debug, info, instrument};

use crate::core::{clamp_pair_count, GameRng, Grid, Position, TileValue, EMPTY};

/// Deals pairs of equal tiles onto an empty grid.
///
/// Pair `k` takes `tile_pool[k % tile_pool.len()]`. Each tile lands on a
/// uniformly drawn interior cell; draws that hit an occupied cell are
/// retried. The requested pair count is clamped to
/// `(rows-2)*(cols-2)/2`, so generation always terminates.
#[derive(Clone, Debug)]
pub struct LevelGenerator {
    pair_count: usize,
    tile_pool: Vec<TileValue>,
}

impl LevelGenerator {
    /// Create a generator.
    ///
    /// Panics if the pool is empty or contains the empty value.
    pub fn new(pair_count: usize, tile_pool: impl IntoIterator<Item = TileValue>) -> Self {
        let tile_pool: Vec<TileValue> = tile_pool.into_iter().collect();
        assert!(!tile_pool.is_empty(), "Tile pool must not be empty");
        assert!(!tile_pool.contains(&EMPTY), "Tile pool must not contain the empty value");

        Self { pair_count, tile_pool }
    }

    /// Requested pair count, before clamping.
    #[must_use]
    pub fn pair_count(&self) -> usize {
        self.pair_count
    }

    /// Tile values dealt in round-robin order.
    #[must_use]
    pub fn tile_pool(&self) -> &[TileValue] {
        &self.tile_pool
    }

    /// Place pairs on `grid`. Returns the number of pairs placed.
    ///
    /// Panics if the grid already holds tiles.
    #[instrument(level = "debug", skip_all, fields(rows = grid.rows(), cols = grid.cols()))]
    pub fn populate(&self, grid: &mut Grid, rng: &mut GameRng) -> usize {
        assert_eq!(grid.occupied_count(), 0, "Level generation needs an empty grid");

        let pairs = clamp_pair_count(self.pair_count, grid.rows(), grid.cols());
        if pairs < self.pair_count {
            debug!(requested = self.pair_count, pairs, "pair count clamped to interior");
        }

        let mut taken = FxHashSet::default();
        for k in 0..pairs {
            let value = self.tile_pool[k % self.tile_pool.len()];
            for _ in 0..2 {
                let pos = Self::draw_free_cell(grid, rng, &taken);
                taken.insert(pos);
                grid.set(pos, value);
            }
        }

        info!(pairs, seed = rng.seed(), "level populated");
        pairs
    }

    fn draw_free_cell(grid: &Grid, rng: &mut GameRng, taken: &FxHashSet<Position>) -> Position {
        loop {
            let pos = Position::new(
                rng.gen_range_usize(1..grid.rows() - 1),
                rng.gen_range_usize(1..grid.cols() - 1),
            );
            if !taken.contains(&pos) {
                return pos;
            }
        }
    }
}
