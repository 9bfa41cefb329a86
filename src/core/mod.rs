//! Core board types: positions, the grid, RNG, configuration.
//!
//! Everything here is independent of the matching rules. The grid is the
//! single source of truth for which cells hold tiles.

pub mod config;
pub mod grid;
pub mod position;
pub mod rng;

pub use config::{clamp_pair_count, BoardConfig};
pub use grid::{Grid, TileValue, EMPTY};
pub use position::Position;
pub use rng::GameRng;
