//! # Engine Configuration
//!
//! Window capacity, backend strategy and refresh triggers. Loaded from TOML
//! once at startup or built in code; validated before the engine is
//! constructed.

use crate::error::{SummitError, SummitResult};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Which ranking backend maintains the window.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Buffer updates, periodically re-merge with the previous window.
    #[default]
    MergeRefresh,
    /// Every update competes directly for a bounded heap slot.
    BoundedHeap,
}

impl Strategy {
    /// Short name used in instrumentation.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::MergeRefresh => "merge_refresh",
            Self::BoundedHeap => "bounded_heap",
        }
    }
}

/// When a stale window is re-materialized.
///
/// A refresh runs on the first read after either trigger fires. With both
/// triggers unset the dirty flag alone decides: any read after any
/// window-affecting update refreshes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefreshPolicy {
    /// Maximum window age before a read refreshes, in milliseconds.
    #[serde(default)]
    pub max_staleness_ms: Option<u64>,
    /// Pending update count that forces a refresh on the next read.
    #[serde(default)]
    pub max_pending: Option<usize>,
}

impl Default for RefreshPolicy {
    fn default() -> Self {
        Self {
            max_staleness_ms: Some(2_000),
            max_pending: Some(10_000),
        }
    }
}

impl RefreshPolicy {
    /// No thresholds: the dirty flag alone decides, so the first read after
    /// any window-affecting update refreshes. Trades read latency for
    /// always-current results.
    #[must_use]
    pub const fn immediate() -> Self {
        Self {
            max_staleness_ms: None,
            max_pending: None,
        }
    }

    /// The staleness trigger as a [`Duration`], if set.
    #[inline]
    #[must_use]
    pub fn max_staleness(&self) -> Option<Duration> {
        self.max_staleness_ms.map(Duration::from_millis)
    }
}

/// Full engine configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardConfig {
    /// Window capacity N: the number of players the ranking retains.
    pub capacity: usize,
    /// Backend strategy.
    #[serde(default)]
    pub strategy: Strategy,
    /// Refresh trigger policy.
    #[serde(default)]
    pub refresh: RefreshPolicy,
}

impl LeaderboardConfig {
    /// Config with the given window capacity and defaults for the rest.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            strategy: Strategy::default(),
            refresh: RefreshPolicy::default(),
        }
    }

    /// Production config: a million-player window refreshed at most every
    /// two seconds, or earlier once ten thousand updates have piled up.
    #[must_use]
    pub const fn production() -> Self {
        Self {
            capacity: 1_000_000,
            strategy: Strategy::MergeRefresh,
            refresh: RefreshPolicy {
                max_staleness_ms: Some(2_000),
                max_pending: Some(10_000),
            },
        }
    }

    /// Loads and validates a configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error when the file cannot be read or parsed, or when the
    /// parsed configuration fails [`Self::validate`].
    pub fn from_toml(path: impl AsRef<Path>) -> SummitResult<Self> {
        let raw = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects configurations the engine cannot honor.
    ///
    /// # Errors
    ///
    /// Returns [`SummitError::InvalidConfig`] for a zero capacity or a zero
    /// refresh threshold. Unset thresholds are allowed.
    pub fn validate(&self) -> SummitResult<()> {
        if self.capacity == 0 {
            return Err(SummitError::InvalidConfig(
                "window capacity must be positive".to_owned(),
            ));
        }
        if self.refresh.max_staleness_ms == Some(0) {
            return Err(SummitError::InvalidConfig(
                "max_staleness_ms must be positive when set".to_owned(),
            ));
        }
        if self.refresh.max_pending == Some(0) {
            return Err(SummitError::InvalidConfig(
                "max_pending must be positive when set".to_owned(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(LeaderboardConfig::new(1000).validate().is_ok());
        assert!(LeaderboardConfig::production().validate().is_ok());
    }

    #[test]
    fn test_zero_capacity_rejected() {
        let config = LeaderboardConfig::new(0);
        assert!(matches!(config.validate(), Err(SummitError::InvalidConfig(_))));
    }

    #[test]
    fn test_zero_thresholds_rejected() {
        let mut config = LeaderboardConfig::new(10);
        config.refresh.max_staleness_ms = Some(0);
        assert!(config.validate().is_err());

        let mut config = LeaderboardConfig::new(10);
        config.refresh.max_pending = Some(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_unset_thresholds_allowed() {
        let mut config = LeaderboardConfig::new(10);
        config.refresh.max_staleness_ms = None;
        config.refresh.max_pending = None;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_from_toml() {
        let raw = r#"
            capacity = 500
            strategy = "bounded_heap"

            [refresh]
            max_staleness_ms = 250
        "#;
        let config: LeaderboardConfig = toml::from_str(raw).unwrap();
        assert_eq!(config.capacity, 500);
        assert_eq!(config.strategy, Strategy::BoundedHeap);
        assert_eq!(config.refresh.max_staleness_ms, Some(250));
        assert_eq!(config.refresh.max_pending, None);
    }
}
