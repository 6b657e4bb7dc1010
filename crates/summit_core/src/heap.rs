//! # Contender Heap
//!
//! Size-capped min-heap over the *inverse* ranking order: the root is the
//! weakest currently ranked member, so deciding whether a new score makes
//! the cut is a single comparison against the root.
//!
//! Every player's current slot index is tracked in a side map that is kept
//! in sync on every push, pop and swap. An in-place score update re-
//! establishes heap order starting from the slot the player actually
//! occupies; sifting from any other position would silently corrupt the
//! heap.

use crate::record::{rank_ordering, PlayerId, ScoreRecord};
use std::cmp::Ordering;
use std::collections::HashMap;

/// What happened to a record offered to the heap.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AdmitOutcome {
    /// The player already held a slot; it was rewritten in place.
    Updated,
    /// The heap had spare capacity; the record was inserted.
    Inserted,
    /// The record outranked the weakest member, which was evicted.
    Evicted(PlayerId),
    /// The record does not beat the weakest member; the window is unchanged.
    Rejected,
}

/// Bounded min-heap of ranked contenders with per-player slot tracking.
#[derive(Clone, Debug)]
pub struct ContenderHeap {
    slots: Vec<ScoreRecord>,
    positions: HashMap<PlayerId, usize>,
    capacity: usize,
}

/// Heap order: `a` sits closer to the root than `b` when `a` ranks strictly
/// below `b`. Inverse of the ranking order.
#[inline]
fn heap_before(a: &ScoreRecord, b: &ScoreRecord) -> bool {
    rank_ordering(a, b) == Ordering::Greater
}

impl ContenderHeap {
    /// Creates a heap holding at most `capacity` contenders.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            positions: HashMap::with_capacity(capacity),
            capacity,
        }
    }

    /// Offers a record to the heap. See [`AdmitOutcome`] for the cases.
    pub fn admit(&mut self, record: ScoreRecord) -> AdmitOutcome {
        if let Some(&slot) = self.positions.get(record.player_id.as_str()) {
            self.slots[slot] = record;
            if self.sift_toward_root(slot) == slot {
                self.sift_toward_leaves(slot);
            }
            return AdmitOutcome::Updated;
        }

        if self.slots.len() < self.capacity {
            self.push(record);
            return AdmitOutcome::Inserted;
        }

        let beats_weakest = self
            .slots
            .first()
            .is_some_and(|weakest| record.outranks(weakest));
        if beats_weakest {
            AdmitOutcome::Evicted(self.replace_root(record))
        } else {
            AdmitOutcome::Rejected
        }
    }

    /// The weakest currently ranked member (the heap root).
    #[inline]
    #[must_use]
    pub fn weakest(&self) -> Option<&ScoreRecord> {
        self.slots.first()
    }

    /// Returns true if the player currently holds a slot.
    #[inline]
    #[must_use]
    pub fn contains(&self, player_id: &str) -> bool {
        self.positions.contains_key(player_id)
    }

    /// Number of contenders currently held.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns true if the heap holds no contenders.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Maximum number of contenders.
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Copies the contenders out in ranking order (strongest first).
    #[must_use]
    pub fn snapshot_sorted(&self) -> Vec<ScoreRecord> {
        let mut snapshot = self.slots.clone();
        snapshot.sort_unstable_by(rank_ordering);
        snapshot
    }

    fn push(&mut self, record: ScoreRecord) {
        let slot = self.slots.len();
        self.positions.insert(record.player_id.clone(), slot);
        self.slots.push(record);
        self.sift_toward_root(slot);
    }

    fn replace_root(&mut self, record: ScoreRecord) -> PlayerId {
        let evicted = std::mem::replace(&mut self.slots[0], record);
        self.positions.remove(evicted.player_id.as_str());
        self.positions.insert(self.slots[0].player_id.clone(), 0);
        self.sift_toward_leaves(0);
        evicted.player_id
    }

    /// Swaps two slots and keeps the position map in sync.
    fn swap_slots(&mut self, a: usize, b: usize) {
        self.slots.swap(a, b);
        self.positions.insert(self.slots[a].player_id.clone(), a);
        self.positions.insert(self.slots[b].player_id.clone(), b);
    }

    /// Moves the record at `slot` toward the root while it is weaker than
    /// its parent. Returns the final slot.
    fn sift_toward_root(&mut self, mut slot: usize) -> usize {
        while slot > 0 {
            let parent = (slot - 1) / 2;
            if !heap_before(&self.slots[slot], &self.slots[parent]) {
                break;
            }
            self.swap_slots(slot, parent);
            slot = parent;
        }
        slot
    }

    /// Moves the record at `slot` toward the leaves while a child is weaker.
    fn sift_toward_leaves(&mut self, mut slot: usize) {
        loop {
            let left = 2 * slot + 1;
            if left >= self.slots.len() {
                break;
            }
            let right = left + 1;
            let mut weakest = slot;
            if heap_before(&self.slots[left], &self.slots[weakest]) {
                weakest = left;
            }
            if right < self.slots.len() && heap_before(&self.slots[right], &self.slots[weakest]) {
                weakest = right;
            }
            if weakest == slot {
                break;
            }
            self.swap_slots(slot, weakest);
            slot = weakest;
        }
    }

    #[cfg(test)]
    fn assert_consistent(&self) {
        assert!(self.slots.len() <= self.capacity);
        assert_eq!(self.slots.len(), self.positions.len());
        for (slot, record) in self.slots.iter().enumerate() {
            assert_eq!(self.positions.get(record.player_id.as_str()), Some(&slot));
            if slot > 0 {
                let parent = &self.slots[(slot - 1) / 2];
                assert!(
                    !heap_before(record, parent),
                    "heap order violated between {} and {}",
                    record.player_id,
                    parent.player_id
                );
            }
        }
    }
}
