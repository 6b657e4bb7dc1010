//! # SUMMIT Leaderboard Engine
//!
//! An embeddable, approximate Top-N leaderboard: scores update far more
//! often than rank is read, the materialized ranking stays bounded to a
//! configured window of N players, and players who fall out of contention
//! keep their raw score in the ledger.
//!
//! ## Strategies
//!
//! Two ranking backends sit behind the same contract, selected by
//! [`config::Strategy`]:
//!
//! - **Merge-refresh** - updates are staged in a deduplicating buffer and
//!   periodically merged with the previous window in one linear pass.
//!   Amortizes best when most updates never threaten the window.
//! - **Bounded heap** - every update competes immediately for a slot in a
//!   size-capped heap. Preferred when N is small relative to update volume.
//!
//! ## Thread Safety
//!
//! One `parking_lot::RwLock` guards the whole consistency unit. Readers
//! share the lock; a reader that finds the window stale re-checks under the
//! upgradable-read lock and upgrades to refresh, so exactly one thread
//! performs a refresh no matter how many discover staleness together.
//!
//! ## Example
//!
//! ```rust
//! use summit::{Leaderboard, LeaderboardConfig, RefreshPolicy};
//!
//! let mut config = LeaderboardConfig::new(100);
//! config.refresh = RefreshPolicy::immediate();
//!
//! let board = Leaderboard::new(config)?;
//! board.update_score("ada", 2_500, 0);
//! board.update_score("bob", 1_800, 0);
//!
//! let top = board.top_n(10);
//! assert_eq!(top[0].record.player_id, "ada");
//! assert_eq!(top[0].rank, 1);
//! # Ok::<(), summit::SummitError>(())
//! ```
//!
//! With the default [`RefreshPolicy`] the window is eventually consistent:
//! reads inside the staleness threshold serve the previous materialization.
//!
//! The engine performs no I/O of its own: the host owns transport, metrics
//! and the `tracing` subscriber.

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod config;
pub mod error;
pub mod leaderboard;
pub mod scheduler;
pub mod strategy;

pub use config::{LeaderboardConfig, RefreshPolicy, Strategy};
pub use error::{SummitError, SummitResult};
pub use leaderboard::{Leaderboard, RankedEntry};
pub use scheduler::RefreshScheduler;
pub use strategy::{HeapContention, MergeRefresh, RankingStrategy};

pub use summit_core::{rank_ordering, PlayerId, ScoreRecord};
