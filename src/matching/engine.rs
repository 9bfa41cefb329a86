//! Selection state machine.
//!
//! ## Phases
//!
//! - `Idle`: nothing selected
//! - `OneSelected`: one tile selected, waiting for its partner
//! - `Resolving`: a pair was accepted and its clear is pending
//!
//! Selecting a second tile produces a verdict on the spot. Rejections
//! deselect both tiles immediately. Acceptances also drain the selection,
//! expose the path, and schedule the clear to run once `clear_delay` has
//! elapsed on the host's clock (see [`MatchEngine::advance`]). New
//! selections are refused while a clear is pending.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::{debug, instrument};

use super::events::{MatchListener, RejectReason};
use crate::core::{Grid, Position, EMPTY};
use crate::path::{find_path, Path};

/// Current phase of the selection state machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchPhase {
    /// No tile selected.
    Idle,
    /// One tile selected.
    OneSelected,
    /// An accepted pair is waiting to be cleared.
    Resolving,
}

/// Result of a selection event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SelectOutcome {
    /// Empty, out-of-range, or already selected cell. Nothing changed.
    Ignored,
    /// A clear is pending. Nothing changed.
    Busy,
    /// The tile joined the selection.
    Selected,
    /// The pair failed to match and both tiles were deselected.
    Rejected(RejectReason),
    /// The pair matched. Both tiles were deselected and will clear.
    Accepted(Path),
}

/// A scheduled clear of an accepted pair.
#[derive(Clone, Debug)]
struct PendingClear {
    a: Position,
    b: Position,
    path: Path,
    remaining: Duration,
}

/// Coordinates selections, path checks and clearing.
///
/// The engine owns the selection set and nothing else; the grid and the
/// listener are passed into each call.
#[derive(Clone, Debug)]
pub struct MatchEngine {
    clear_delay: Duration,
    selection: SmallVec<[Position; 2]>,
    pending: Option<PendingClear>,
}

impl Default for MatchEngine {
    fn default() -> Self {
        Self::new(Duration::from_millis(500))
    }
}

impl MatchEngine {
    /// Create an engine that clears accepted pairs after `clear_delay`.
    pub fn new(clear_delay: Duration) -> Self {
        Self {
            clear_delay,
            selection: SmallVec::new(),
            pending: None,
        }
    }

    /// Create an engine that clears accepted pairs as soon as they match.
    pub fn immediate() -> Self {
        Self::new(Duration::ZERO)
    }

    /// Delay between acceptance and clearing.
    #[must_use]
    pub fn clear_delay(&self) -> Duration {
        self.clear_delay
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> MatchPhase {
        if self.pending.is_some() {
            MatchPhase::Resolving
        } else if self.selection.is_empty() {
            MatchPhase::Idle
        } else {
            MatchPhase::OneSelected
        }
    }

    /// Currently selected tiles, in selection order.
    #[must_use]
    pub fn selection(&self) -> &[Position] {
        &self.selection
    }

    /// Path of the accepted pair awaiting its clear, if any.
    #[must_use]
    pub fn pending_path(&self) -> Option<&Path> {
        self.pending.as_ref().map(|p| &p.path)
    }

    /// Handle a tile being selected.
    #[instrument(level = "debug", skip(self, grid, listener))]
    pub fn select<L: MatchListener + ?Sized>(
        &mut self,
        grid: &mut Grid,
        pos: Position,
        listener: &mut L,
    ) -> SelectOutcome {
        if self.pending.is_some() {
            debug!("selection refused while a clear is pending");
            return SelectOutcome::Busy;
        }
        if !grid.contains(pos) || grid.is_empty(pos) || self.selection.contains(&pos) {
            return SelectOutcome::Ignored;
        }

        self.selection.push(pos);
        if self.selection.len() < 2 {
            return SelectOutcome::Selected;
        }

        self.resolve(grid, listener)
    }

    /// Handle a tile being deselected. Returns false if it was not selected.
    pub fn deselect(&mut self, pos: Position) -> bool {
        match self.selection.iter().position(|&p| p == pos) {
            Some(index) => {
                self.selection.remove(index);
                true
            }
            None => false,
        }
    }

    /// Advance the pending clear by `elapsed`.
    ///
    /// Returns true if the clear ran during this call.
    pub fn advance<L: MatchListener + ?Sized>(
        &mut self,
        grid: &mut Grid,
        elapsed: Duration,
        listener: &mut L,
    ) -> bool {
        let Some(pending) = self.pending.as_mut() else {
            return false;
        };

        pending.remaining = pending.remaining.saturating_sub(elapsed);
        if !pending.remaining.is_zero() {
            return false;
        }

        self.run_clear(grid, listener)
    }

    /// Run the pending clear now, skipping the rest of the delay.
    ///
    /// Returns true if there was a clear to run.
    pub fn flush<L: MatchListener + ?Sized>(&mut self, grid: &mut Grid, listener: &mut L) -> bool {
        self.run_clear(grid, listener)
    }

    fn resolve<L: MatchListener + ?Sized>(&mut self, grid: &mut Grid, listener: &mut L) -> SelectOutcome {
        let (a, b) = (self.selection[0], self.selection[1]);
        self.selection.clear();

        if grid.get(a) != grid.get(b) {
            debug!(%a, %b, "values differ");
            listener.on_pair_rejected(a, b, RejectReason::ValueMismatch);
            return SelectOutcome::Rejected(RejectReason::ValueMismatch);
        }

        let Some(path) = find_path(grid, a, b) else {
            debug!(%a, %b, "no route");
            listener.on_pair_rejected(a, b, RejectReason::NoPath);
            return SelectOutcome::Rejected(RejectReason::NoPath);
        };

        debug!(%path, "pair accepted");
        listener.on_path_found(&path);
        self.pending = Some(PendingClear {
            a,
            b,
            path: path.clone(),
            remaining: self.clear_delay,
        });

        if self.clear_delay.is_zero() {
            self.run_clear(grid, listener);
        }

        SelectOutcome::Accepted(path)
    }

    fn run_clear<L: MatchListener + ?Sized>(&mut self, grid: &mut Grid, listener: &mut L) -> bool {
        let Some(PendingClear { a, b, .. }) = self.pending.take() else {
            return false;
        };

        grid.set(a, EMPTY);
        grid.set(b, EMPTY);
        debug!(%a, %b, remaining = grid.occupied_count(), "pair cleared");
        listener.on_pair_cleared(a, b);
        true
    }
}
