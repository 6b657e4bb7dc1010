//! # Pending Update Buffer
//!
//! Holding area for score changes that have not yet been merged into the
//! ranked window. One slot per player: staging a second update for the same
//! player inside a refresh interval replaces the first, so only the latest
//! value merges. Intra-interval history is intentionally not preserved.

use crate::record::{rank_ordering, PlayerId, ScoreRecord};
use std::collections::HashMap;

/// Deduplicating buffer of not-yet-merged score updates.
#[derive(Clone, Debug, Default)]
pub struct PendingBuffer {
    staged: HashMap<PlayerId, ScoreRecord>,
}

impl PendingBuffer {
    /// Creates an empty buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stages a record, replacing any earlier staged record for the player.
    pub fn stage(&mut self, record: ScoreRecord) {
        self.staged.insert(record.player_id.clone(), record);
    }

    /// Empties the buffer, returning its contents sorted by the ranking
    /// order. This is the only way to consume staged updates.
    #[must_use]
    pub fn drain_sorted(&mut self) -> Vec<ScoreRecord> {
        let mut drained: Vec<ScoreRecord> = self.staged.drain().map(|(_, record)| record).collect();
        drained.sort_unstable_by(rank_ordering);
        drained
    }

    /// Number of players with a staged update.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.staged.len()
    }

    /// Returns true if nothing is staged.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.staged.is_empty()
    }
}
