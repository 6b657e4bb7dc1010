//! # Score Records
//!
//! The value type every ranking structure agrees on, and the one comparator
//! that orders it.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Unique identifier for a player.
pub type PlayerId = String;

/// A player's current score and the moment it was reached.
///
/// The `player_id` is the identity key; `score` and `timestamp` are
/// overwritten on every update. Timestamps are unix milliseconds.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreRecord {
    /// The player this record belongs to.
    pub player_id: PlayerId,
    /// Current score.
    pub score: i64,
    /// When the score was reached (unix milliseconds).
    pub timestamp: i64,
}

impl ScoreRecord {
    /// Creates a new record.
    #[must_use]
    pub fn new(player_id: impl Into<PlayerId>, score: i64, timestamp: i64) -> Self {
        Self {
            player_id: player_id.into(),
            score,
            timestamp,
        }
    }

    /// Returns true if `self` is placed strictly before `other` under the
    /// ranking order.
    #[inline]
    #[must_use]
    pub fn outranks(&self, other: &Self) -> bool {
        rank_ordering(self, other) == Ordering::Less
    }
}

/// The ranking order: higher score first, ties broken by the earlier
/// timestamp (first to reach a score outranks a later arrival at the same
/// score).
///
/// `Ordering::Less` means `a` is placed before `b` in a ranked sequence.
/// Two records from different players can compare `Equal` (same score, same
/// timestamp); identity is never part of the order.
#[inline]
#[must_use]
pub fn rank_ordering(a: &ScoreRecord, b: &ScoreRecord) -> Ordering {
    match b.score.cmp(&a.score) {
        Ordering::Equal => a.timestamp.cmp(&b.timestamp),
        unequal => unequal,
    }
}
