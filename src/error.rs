//! Configuration errors.
//!
//! Match outcomes (no path, mismatched values, ignored selections) are
//! ordinary return values, not errors. The only fallible step is turning a
//! `BoardConfig` into a playable board.

use derive_more::{Display, Error};

/// Why a board configuration was refused.
#[derive(Debug, Display, Error)]
pub enum ConfigError {
    /// The grid has no interior once the border ring is removed.
    #[display("grid must be at least 3x3, got {rows}x{cols}")]
    GridTooSmall {
        /// Requested row count.
        rows: usize,
        /// Requested column count.
        cols: usize,
    },

    /// No tile values to deal pairs from.
    #[display("tile pool is empty")]
    EmptyTilePool,

    /// `0` is the empty-cell marker and cannot be dealt as a tile.
    #[display("tile pool contains the empty value 0")]
    EmptyValueInPool,

    /// The configuration text could not be parsed.
    #[display("invalid board config: {_0}")]
    Parse(serde_json::Error),
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err)
    }
}
