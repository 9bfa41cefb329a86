//! # tile-link
//!
//! Matching engine for tile-connection puzzles. Two tiles with the same
//! symbol clear when a route of at most two turns joins them through empty
//! cells.
//!
//! ## Design Principles
//!
//! 1. **Grid is the truth**: a tile is the non-zero value at a position.
//!    There are no tile objects to keep in sync.
//!
//! 2. **No ambient state**: the engine is handed the grid and a listener on
//!    every call. Hosts own the clock and drive the clear delay.
//!
//! 3. **Negative outcomes are values**: "no path" and "wrong pair" are
//!    ordinary results. Only bad configuration is an error; broken caller
//!    contracts panic.
//!
//! ## Modules
//!
//! - `core`: positions, the grid, RNG, board configuration
//! - `path`: zero/one/two-turn route search and two-turn ranking
//! - `matching`: selection state machine and outbound events
//! - `level`: random pair placement
//! - `game`: session facade built from a `BoardConfig`
//! - `error`: configuration errors

pub mod core;
pub mod error;
pub mod game;
pub mod level;
pub mod matching;
pub mod path;

// Re-export commonly used types
pub use crate::core::{BoardConfig, GameRng, Grid, Position, TileValue, EMPTY};

pub use crate::error::ConfigError;

pub use crate::game::LinkGame;

pub use crate::level::LevelGenerator;

pub use crate::matching::{
    EventLog, MatchEngine, MatchEvent, MatchListener, MatchPhase, RejectReason, SelectOutcome,
};

pub use crate::path::{best_route, find_path, Path, PossibleRoute};
