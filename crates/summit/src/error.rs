//! # Engine Error Types
//!
//! The only domain error is an unknown player; "unranked" (rank 0) is a
//! normal result, not an error. Everything else is rejected at
//! construction time.

use thiserror::Error;

/// Errors that can occur in the leaderboard engine.
#[derive(Error, Debug)]
pub enum SummitError {
    /// The player has never been seen by the ledger.
    #[error("player not found: {player_id}")]
    PlayerNotFound {
        /// The unknown player id.
        player_id: String,
    },

    /// Rejected configuration (zero capacity, zero threshold, ...).
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Configuration file could not be read.
    #[error("failed to read configuration: {0}")]
    ConfigIo(#[from] std::io::Error),

    /// Configuration file could not be parsed.
    #[error("failed to parse configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),
}

/// Result type for leaderboard operations.
pub type SummitResult<T> = Result<T, SummitError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = SummitError::PlayerNotFound {
            player_id: "ghost".to_owned(),
        };
        assert_eq!(err.to_string(), "player not found: ghost");

        let err = SummitError::InvalidConfig("capacity must be positive".to_owned());
        assert_eq!(err.to_string(), "invalid configuration: capacity must be positive");
    }
}
