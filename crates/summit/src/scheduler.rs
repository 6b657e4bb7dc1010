//! # Refresh Scheduler
//!
//! Clean/Dirty state machine deciding when a read must re-materialize the
//! window. The window is Dirty once a window-affecting update has been
//! recorded since the last refresh; whether a read actually refreshes is
//! gated by the configured triggers.

use crate::config::RefreshPolicy;
use std::time::Instant;

/// Tracks window staleness against the configured refresh triggers.
#[derive(Clone, Debug)]
pub struct RefreshScheduler {
    policy: RefreshPolicy,
    dirty: bool,
    last_refresh: Instant,
}

impl RefreshScheduler {
    /// Creates a scheduler in the Clean state.
    #[must_use]
    pub fn new(policy: RefreshPolicy) -> Self {
        Self {
            policy,
            dirty: false,
            last_refresh: Instant::now(),
        }
    }

    /// Records that an update has been staged or admitted since the last
    /// refresh.
    #[inline]
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Records a completed refresh: back to Clean, staleness clock reset.
    #[inline]
    pub fn mark_clean(&mut self) {
        self.dirty = false;
        self.last_refresh = Instant::now();
    }

    /// Returns true if the window no longer reflects all known updates.
    #[inline]
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Decides whether a read must refresh first.
    ///
    /// Clean windows never refresh. A Dirty window refreshes once either
    /// trigger fires - `pending` reaching the count threshold, or the window
    /// age reaching the staleness threshold - whichever comes first. With no
    /// triggers configured the dirty flag alone decides.
    #[must_use]
    pub fn should_refresh(&self, pending: usize) -> bool {
        if !self.dirty {
            return false;
        }
        let mut gated = false;
        if let Some(max_pending) = self.policy.max_pending {
            if pending >= max_pending {
                return true;
            }
            gated = true;
        }
        if let Some(max_staleness) = self.policy.max_staleness() {
            if self.last_refresh.elapsed() >= max_staleness {
                return true;
            }
            gated = true;
        }
        !gated
    }
}
