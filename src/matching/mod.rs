//! Selection handling and pair clearing.
//!
//! The [`MatchEngine`] turns tile selection events into verdicts:
//! mismatched or unreachable pairs are rejected, connectable pairs are
//! accepted and cleared after a short display delay.
//!
//! ## Example Usage
//!
//! ```
//! use tile_link::core::{Grid, Position};
//! use tile_link::matching::{EventLog, MatchEngine, MatchEvent, SelectOutcome};
//!
//! let mut grid = Grid::new(6, 6);
//! let a = Position::new(1, 1);
//! let b = Position::new(1, 4);
//! grid.set(a, 7);
//! grid.set(b, 7);
//!
//! let mut engine = MatchEngine::immediate();
//! let mut log = EventLog::new();
//!
//! engine.select(&mut grid, a, &mut log);
//! let outcome = engine.select(&mut grid, b, &mut log);
//!
//! assert!(matches!(outcome, SelectOutcome::Accepted(_)));
//! assert!(grid.is_empty(a) && grid.is_empty(b));
//! assert!(matches!(log.events().last(), Some(MatchEvent::PairCleared(_, _))));
//! ```

mod engine;
mod events;

pub use engine::{MatchEngine, MatchPhase, SelectOutcome};
pub use events::{EventLog, MatchEvent, MatchListener, RejectReason};
