//! # Score Ledger
//!
//! The single source of truth mapping every player ever seen to their
//! current score record. Unbounded, and independent of the ranked window:
//! a player evicted from the window keeps their ledger entry.

use crate::record::{PlayerId, ScoreRecord};
use std::collections::HashMap;

/// Authoritative player -> current score mapping.
///
/// Records are inserted on a player's first update, overwritten on every
/// later update, and never removed.
#[derive(Clone, Debug, Default)]
pub struct ScoreLedger {
    records: HashMap<PlayerId, ScoreRecord>,
}

impl ScoreLedger {
    /// Creates an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or overwrites the player's record.
    pub fn upsert(&mut self, record: ScoreRecord) {
        self.records.insert(record.player_id.clone(), record);
    }

    /// Returns the player's current record, if the player has ever been seen.
    #[inline]
    #[must_use]
    pub fn get(&self, player_id: &str) -> Option<&ScoreRecord> {
        self.records.get(player_id)
    }

    /// Returns true if the player has ever been seen.
    #[inline]
    #[must_use]
    pub fn contains(&self, player_id: &str) -> bool {
        self.records.contains_key(player_id)
    }

    /// Number of distinct players ever seen.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if no player has ever been seen.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upsert_then_get() {
        let mut ledger = ScoreLedger::new();
        ledger.upsert(ScoreRecord::new("ada", 10, 1));

        let record = ledger.get("ada").unwrap();
        assert_eq!(record.score, 10);
        assert_eq!(record.timestamp, 1);
    }

    #[test]
    fn test_upsert_overwrites() {
        let mut ledger = ScoreLedger::new();
        ledger.upsert(ScoreRecord::new("ada", 10, 1));
        ledger.upsert(ScoreRecord::new("ada", 25, 2));

        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger.get("ada").unwrap().score, 25);
    }

    #[test]
    fn test_unknown_player_is_absent() {
        let ledger = ScoreLedger::new();
        assert!(ledger.get("ghost").is_none());
        assert!(!ledger.contains("ghost"));
        assert!(ledger.is_empty());
    }
}
