//! # Window Merge
//!
//! Rebuilds the ranked window in one linear pass over two sequences that are
//! already sorted under the ranking order: the freshly drained update buffer
//! and the previous window.
//!
//! Both sources can hold entries that were superseded after they were
//! captured, and both can hold an entry for the same player. Every candidate
//! is therefore revalidated against the ledger before it is admitted, and a
//! player is admitted at most once per merge.

use crate::ledger::ScoreLedger;
use crate::record::{rank_ordering, ScoreRecord};
use std::cmp::Ordering;
use std::collections::HashSet;

/// Merges `staged` (drained buffer, sorted) with `previous` (the prior
/// window, sorted) into a new window of at most `capacity` records.
///
/// Candidates are taken head-to-head under the ranking order. A candidate is
/// dropped when:
/// - the ledger holds a different record for that player (the candidate is a
///   stale copy superseded by a later update), or
/// - the player was already emitted earlier in this merge (duplicate across
///   the two sources).
///
/// Records that fall beyond `capacity` are simply not emitted; they remain
/// in the ledger.
#[must_use]
pub fn merge_ranked(
    staged: &[ScoreRecord],
    previous: &[ScoreRecord],
    ledger: &ScoreLedger,
    capacity: usize,
) -> Vec<ScoreRecord> {
    let mut merged = Vec::with_capacity(capacity.min(staged.len() + previous.len()));
    let mut seen: HashSet<&str> = HashSet::with_capacity(staged.len() + previous.len());

    let mut s = 0;
    let mut p = 0;
    while merged.len() < capacity {
        let candidate = match (staged.get(s), previous.get(p)) {
            // Staged entries win exact ties: they are ledger-fresh by
            // construction, the previous-window copy may not be.
            (Some(a), Some(b)) => {
                if rank_ordering(a, b) == Ordering::Greater {
                    p += 1;
                    b
                } else {
                    s += 1;
                    a
                }
            }
            (Some(a), None) => {
                s += 1;
                a
            }
            (None, Some(b)) => {
                p += 1;
                b
            }
            (None, None) => break,
        };

        if ledger.get(&candidate.player_id) != Some(candidate) {
            continue;
        }
        if !seen.insert(candidate.player_id.as_str()) {
            continue;
        }
        merged.push(candidate.clone());
    }
    merged
}
