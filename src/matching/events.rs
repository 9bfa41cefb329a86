//! Outbound match events.
//!
//! The engine reports verdicts through a [`MatchListener`]. Hosts implement
//! the methods they care about (line drawing, hiding tiles, resetting toggle
//! visuals); the rest default to no-ops.

use serde::{Deserialize, Serialize};

use crate::core::Position;
use crate::path::Path;

/// Why a selected pair was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RejectReason {
    /// The two tiles show different symbols.
    ValueMismatch,
    /// Same symbol, but no route of at most two turns joins them.
    NoPath,
}

/// Receiver for engine verdicts.
pub trait MatchListener {
    /// A pair was accepted. The path stays valid until the pair clears.
    fn on_path_found(&mut self, _path: &Path) {}

    /// Both cells of an accepted pair were set to empty.
    fn on_pair_cleared(&mut self, _a: Position, _b: Position) {}

    /// A selected pair failed to match and was deselected.
    fn on_pair_rejected(&mut self, _a: Position, _b: Position, _reason: RejectReason) {}
}

/// Null listener.
impl MatchListener for () {}

/// A recorded engine event.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchEvent {
    /// See [`MatchListener::on_path_found`].
    PathFound(Path),
    /// See [`MatchListener::on_pair_cleared`].
    PairCleared(Position, Position),
    /// See [`MatchListener::on_pair_rejected`].
    PairRejected(Position, Position, RejectReason),
}

/// Listener that records every event in order.
#[derive(Clone, Debug, Default)]
pub struct EventLog {
    events: Vec<MatchEvent>,
}

impl EventLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded events, oldest first.
    #[must_use]
    pub fn events(&self) -> &[MatchEvent] {
        &self.events
    }

    /// Take the recorded events, leaving the log empty.
    pub fn drain(&mut self) -> Vec<MatchEvent> {
        std::mem::take(&mut self.events)
    }
}

impl MatchListener for EventLog {
    fn on_path_found(&mut self, path: &Path) {
        self.events.push(MatchEvent::PathFound(path.clone()));
    }

    fn on_pair_cleared(&mut self, a: Position, b: Position) {
        self.events.push(MatchEvent::PairCleared(a, b));
    }

    fn on_pair_rejected(&mut self, a: Position, b: Position, reason: RejectReason) {
        self.events.push(MatchEvent::PairRejected(a, b, reason));
    }
}
