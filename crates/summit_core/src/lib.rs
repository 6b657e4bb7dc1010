//! # SUMMIT Core
//!
//! Pure ranking data structures for the SUMMIT leaderboard engine.
//!
//! ## Design Principles
//!
//! 1. **One comparator** - Sorting, merging, heap ordering and binary search
//!    all order records through [`record::rank_ordering`]. A structure that
//!    disagrees on the tie-break produces wrong ranks, so there is exactly
//!    one place where the order is defined.
//! 2. **Ledger is truth** - The [`ledger::ScoreLedger`] holds every player's
//!    current score. The ranked window is a bounded materialization of it.
//! 3. **No locks, no clocks, no I/O** - Everything here is single-threaded
//!    and deterministic. Concurrency and scheduling live in the `summit`
//!    facade crate.
//!
//! ## Example
//!
//! ```rust
//! use summit_core::{ContenderHeap, RankedWindow, ScoreRecord};
//!
//! let mut heap = ContenderHeap::new(3);
//! for (player, score, ts) in [("ada", 30, 1), ("bob", 20, 2), ("cyd", 25, 3)] {
//!     heap.admit(ScoreRecord::new(player, score, ts));
//! }
//!
//! let mut window = RankedWindow::new();
//! window.rebuild(heap.snapshot_sorted());
//! assert_eq!(window.position_of("cyd"), Some(1));
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod buffer;
pub mod heap;
pub mod ledger;
pub mod merge;
pub mod record;
pub mod window;

pub use buffer::PendingBuffer;
pub use heap::{AdmitOutcome, ContenderHeap};
pub use ledger::ScoreLedger;
pub use merge::merge_ranked;
pub use record::{rank_ordering, PlayerId, ScoreRecord};
pub use window::RankedWindow;
