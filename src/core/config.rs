//! Board configuration.
//!
//! Hosts configure a session at startup with:
//! - grid dimensions (border ring included)
//! - how many pairs to deal
//! - the pool of tile values (each mapped to a sprite by the host)
//! - how long an accepted path stays on screen before the pair clears
//! - an optional seed for reproducible layouts
//!
//! The engine never looks at visuals; it only compares tile values.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::grid::{TileValue, EMPTY};
use crate::error::ConfigError;

/// Complete board configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Row count, border rows included.
    pub rows: usize,

    /// Column count, border columns included.
    pub cols: usize,

    /// Requested number of pairs. Clamped to what the interior can hold.
    pub pair_count: usize,

    /// Tile values dealt to pairs in round-robin order.
    pub tile_pool: Vec<TileValue>,

    /// Delay between an accepted match and the pair being cleared.
    pub clear_delay_ms: u64,

    /// Layout seed. `None` draws one from OS entropy.
    pub seed: Option<u64>,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            rows: 10,
            cols: 12,
            pair_count: 30,
            tile_pool: (1..=10).collect(),
            clear_delay_ms: 500,
            seed: None,
        }
    }
}

impl BoardConfig {
    /// Create a config with the given dimensions and default everything else.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            ..Self::default()
        }
    }

    /// Parse a config from JSON. Missing fields take their defaults.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Set the requested pair count.
    #[must_use]
    pub fn with_pair_count(mut self, pair_count: usize) -> Self {
        self.pair_count = pair_count;
        self
    }

    /// Set the tile value pool.
    #[must_use]
    pub fn with_tile_pool(mut self, pool: impl IntoIterator<Item = TileValue>) -> Self {
        self.tile_pool = pool.into_iter().collect();
        self
    }

    /// Set the clear delay in milliseconds.
    #[must_use]
    pub fn with_clear_delay_ms(mut self, ms: u64) -> Self {
        self.clear_delay_ms = ms;
        self
    }

    /// Set the layout seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// The clear delay as a `Duration`.
    #[must_use]
    pub fn clear_delay(&self) -> Duration {
        Duration::from_millis(self.clear_delay_ms)
    }

    /// Pair count after clamping to the interior area.
    ///
    /// `min(pair_count, (rows-2)*(cols-2)/2)`.
    #[must_use]
    pub fn effective_pair_count(&self) -> usize {
        clamp_pair_count(self.pair_count, self.rows, self.cols)
    }

    /// Check the configuration can produce a board.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows < 3 || self.cols < 3 {
            return Err(ConfigError::GridTooSmall {
                rows: self.rows,
                cols: self.cols,
            });
        }
        if self.tile_pool.is_empty() {
            return Err(ConfigError::EmptyTilePool);
        }
        if self.tile_pool.contains(&EMPTY) {
            return Err(ConfigError::EmptyValueInPool);
        }
        Ok(())
    }
}

/// Clamp a requested pair count to what a `rows x cols` grid can hold.
#[must_use]
pub fn clamp_pair_count(requested: usize, rows: usize, cols: usize) -> usize {
    let area = rows.saturating_sub(2) * cols.saturating_sub(2);
    requested.min(area / 2)
}
