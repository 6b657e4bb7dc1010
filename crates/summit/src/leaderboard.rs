//! # Leaderboard Facade
//!
//! The thread-safe engine a hosting service embeds. One reader/writer lock
//! guards the whole consistency unit (ledger, strategy state, window,
//! scheduler); readers share it, and a reader that discovers staleness
//! funnels through the upgradable-read lock so exactly one thread runs the
//! refresh.

use crate::config::{LeaderboardConfig, Strategy};
use crate::error::{SummitError, SummitResult};
use crate::scheduler::RefreshScheduler;
use crate::strategy::{HeapContention, MergeRefresh, RankingStrategy};
use parking_lot::{RwLock, RwLockReadGuard, RwLockUpgradableReadGuard, RwLockWriteGuard};
use std::time::{Instant, SystemTime, UNIX_EPOCH};
use summit_core::{PlayerId, RankedWindow, ScoreLedger, ScoreRecord};

/// A record paired with its 1-based rank.
///
/// Rank 0 means the player exists in the ledger but currently sits below
/// the window cutoff.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RankedEntry {
    /// The player's current record.
    pub record: ScoreRecord,
    /// 1-based rank inside the window, or 0 when below the cutoff.
    pub rank: usize,
}

/// Everything the lock guards. The fields form one consistency unit: a
/// window entry must always match the ledger, and the scheduler's dirty
/// flag must cover every update the window has not absorbed.
struct EngineState {
    ledger: ScoreLedger,
    strategy: Box<dyn RankingStrategy>,
    window: RankedWindow,
    scheduler: RefreshScheduler,
    generation: u64,
}

/// Bounded Top-N leaderboard engine.
pub struct Leaderboard {
    state: RwLock<EngineState>,
    capacity: usize,
}

impl Leaderboard {
    /// Builds an engine from a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns [`SummitError::InvalidConfig`] when the configuration fails
    /// validation.
    pub fn new(config: LeaderboardConfig) -> SummitResult<Self> {
        config.validate()?;
        let strategy: Box<dyn RankingStrategy> = match config.strategy {
            Strategy::MergeRefresh => Box::new(MergeRefresh::new()),
            Strategy::BoundedHeap => Box::new(HeapContention::new(config.capacity)),
        };
        Ok(Self {
            state: RwLock::new(EngineState {
                ledger: ScoreLedger::new(),
                strategy,
                window: RankedWindow::new(),
                scheduler: RefreshScheduler::new(config.refresh),
                generation: 0,
            }),
            capacity: config.capacity,
        })
    }

    /// Records a score update for a player.
    ///
    /// A `timestamp` of 0 means "now" (unix milliseconds). The ledger is
    /// always updated; whether the ranked window changes is up to the
    /// strategy and the next refresh.
    pub fn update_score(&self, player_id: impl Into<PlayerId>, score: i64, timestamp: i64) {
        let timestamp = if timestamp == 0 { wall_clock_ms() } else { timestamp };
        let record = ScoreRecord::new(player_id, score, timestamp);

        let mut state = self.state.write();
        state.ledger.upsert(record.clone());
        if state.strategy.observe(record) {
            state.scheduler.mark_dirty();
        }
    }

    /// The top `n` ranked records, strongest first, each with its rank.
    /// Returns fewer than `n` entries when the window is shorter.
    #[must_use]
    pub fn top_n(&self, n: usize) -> Vec<RankedEntry> {
        let state = self.read_fresh();
        state
            .window
            .top(n)
            .iter()
            .enumerate()
            .map(|(position, record)| RankedEntry {
                record: record.clone(),
                rank: position + 1,
            })
            .collect()
    }

    /// The player's current record and rank.
    ///
    /// Rank 0 means the player is known to the ledger but below the window
    /// cutoff.
    ///
    /// # Errors
    ///
    /// Returns [`SummitError::PlayerNotFound`] when the player has never
    /// been seen.
    pub fn player_rank(&self, player_id: &str) -> SummitResult<RankedEntry> {
        let state = self.read_fresh();
        let record = state
            .ledger
            .get(player_id)
            .ok_or_else(|| SummitError::PlayerNotFound {
                player_id: player_id.to_owned(),
            })?;
        let rank = state.window.position_of(player_id).map_or(0, |p| p + 1);
        Ok(RankedEntry {
            record: record.clone(),
            rank,
        })
    }

    /// The ranked records around the player: positions
    /// `[player - radius, player + radius]` clipped to the window, each with
    /// its rank. Empty when the player is not currently ranked.
    #[must_use]
    pub fn player_rank_range(&self, player_id: &str, radius: usize) -> Vec<RankedEntry> {
        let state = self.read_fresh();
        let Some(record) = state.ledger.get(player_id) else {
            return Vec::new();
        };
        let Some(position) = state.window.locate(record) else {
            return Vec::new();
        };
        let (start, slice) = state.window.neighborhood(position, radius);
        slice
            .iter()
            .enumerate()
            .map(|(offset, record)| RankedEntry {
                record: record.clone(),
                rank: start + offset + 1,
            })
            .collect()
    }

    /// Number of distinct players ever seen.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.state.read().ledger.len()
    }

    /// Current window length (≤ configured capacity).
    #[must_use]
    pub fn window_len(&self) -> usize {
        self.state.read().window.len()
    }

    /// Configured window capacity N.
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// How many refreshes have run. Monotonic; used by hosts and tests to
    /// observe single-flight behavior.
    #[must_use]
    pub fn refresh_generation(&self) -> u64 {
        self.state.read().generation
    }

    /// Takes a read guard over a window fresh enough to serve queries,
    /// refreshing first if the scheduler demands it.
    ///
    /// The naive upgrade pattern (drop shared, grab exclusive, refresh) lets
    /// every waiting reader redundantly refresh. Instead a stale reader
    /// funnels through the upgradable-read lock - parking_lot admits one
    /// upgradable holder at a time - and re-checks staleness before
    /// upgrading, since a competing reader may have refreshed while this one
    /// waited.
    fn read_fresh(&self) -> RwLockReadGuard<'_, EngineState> {
        let state = self.state.read();
        if !state.scheduler.should_refresh(state.strategy.pending()) {
            return state;
        }
        drop(state);

        let state = self.state.upgradable_read();
        if !state.scheduler.should_refresh(state.strategy.pending()) {
            return RwLockUpgradableReadGuard::downgrade(state);
        }
        let mut state = RwLockUpgradableReadGuard::upgrade(state);
        Self::refresh(&mut state, self.capacity);
        RwLockWriteGuard::downgrade(state)
    }

    /// Re-materializes the window from the strategy. Caller holds the
    /// exclusive lock.
    fn refresh(state: &mut EngineState, capacity: usize) {
        let started = Instant::now();
        let entries = state
            .strategy
            .rebuild(&state.ledger, state.window.as_slice(), capacity);
        state.window.rebuild(entries);
        state.generation += 1;
        state.scheduler.mark_clean();
        tracing::debug!(
            strategy = state.strategy.name(),
            generation = state.generation,
            window_len = state.window.len(),
            elapsed_us = started.elapsed().as_micros() as u64,
            "window refreshed"
        );
    }
}

/// Unix milliseconds, saturating at 0 for a pre-epoch clock.
fn wall_clock_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |since_epoch| since_epoch.as_millis() as i64)
}
