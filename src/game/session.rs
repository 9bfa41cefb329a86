//! A playable board session.

use std::time::Duration;

use tracing::{info, instrument};

use crate::core::{BoardConfig, GameRng, Grid, Position};
use crate::error::ConfigError;
use crate::level::LevelGenerator;
use crate::matching::{MatchEngine, MatchListener, MatchPhase, SelectOutcome};

/// One board from setup to the last cleared pair.
///
/// Owns the grid and the match engine. Hosts forward input through
/// [`select`](Self::select) / [`deselect`](Self::deselect) and drive the
/// clear delay with [`advance`](Self::advance) from their frame loop.
#[derive(Clone, Debug)]
pub struct LinkGame {
    config: BoardConfig,
    grid: Grid,
    engine: MatchEngine,
    seed: u64,
    pairs: usize,
}

impl LinkGame {
    /// Validate `config`, build the grid and deal the pairs.
    #[instrument(level = "info", skip_all, fields(rows = config.rows, cols = config.cols))]
    pub fn new(config: BoardConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        let mut grid = Grid::new(config.rows, config.cols);
        let generator = LevelGenerator::new(config.pair_count, config.tile_pool.iter().copied());
        let pairs = generator.populate(&mut grid, &mut rng);

        info!(pairs, seed = rng.seed(), "board ready");

        Ok(Self {
            engine: MatchEngine::new(config.clear_delay()),
            seed: rng.seed(),
            config,
            grid,
            pairs,
        })
    }

    /// The configuration this board was built from.
    #[must_use]
    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// Current board state.
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The match engine (read-only; drive it through this type).
    #[must_use]
    pub fn engine(&self) -> &MatchEngine {
        &self.engine
    }

    /// Seed the layout was generated from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Number of pairs dealt at setup.
    #[must_use]
    pub fn pairs_dealt(&self) -> usize {
        self.pairs
    }

    /// Current selection phase.
    #[must_use]
    pub fn phase(&self) -> MatchPhase {
        self.engine.phase()
    }

    /// Forward a tile selection.
    pub fn select<L: MatchListener + ?Sized>(&mut self, pos: Position, listener: &mut L) -> SelectOutcome {
        self.engine.select(&mut self.grid, pos, listener)
    }

    /// Forward a tile deselection.
    pub fn deselect(&mut self, pos: Position) -> bool {
        self.engine.deselect(pos)
    }

    /// Let `elapsed` pass on the clear timer.
    pub fn advance<L: MatchListener + ?Sized>(&mut self, elapsed: Duration, listener: &mut L) -> bool {
        self.engine.advance(&mut self.grid, elapsed, listener)
    }

    /// Clear a pending pair now.
    pub fn flush<L: MatchListener + ?Sized>(&mut self, listener: &mut L) -> bool {
        self.engine.flush(&mut self.grid, listener)
    }

    /// Tiles still on the board.
    #[must_use]
    pub fn remaining_tiles(&self) -> usize {
        self.grid.occupied_count()
    }

    /// True once every tile has been cleared.
    #[must_use]
    pub fn is_cleared(&self) -> bool {
        self.remaining_tiles() == 0
    }
}
