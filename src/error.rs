//! Error types for the scoreboard.
//!
//! Every error is a rejected operation: the registry is left exactly as it was
//! before the call. Nothing is retried internally.

use thiserror::Error;

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, ScoreboardError>;

/// Broad error category, for callers that only care about the class of failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed input: empty names, identical sides, negative scores
    InvalidArgument,
    /// A participant is already playing
    Conflict,
    /// No match for the exact `(home, away)` pair
    NotFound,
}

/// Scoreboard operation error
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScoreboardError {
    #[error("Arguments can not be empty or null.")]
    EmptyParticipant,

    #[error("Home team and away team should be different.")]
    SameParticipant,

    #[error("Scores can not be negative.")]
    NegativeScore,

    #[error("Can not start match, {participant} is in an ongoing match.")]
    ParticipantBusy { participant: String },

    #[error("Match does not exist.")]
    MatchNotFound { home: String, away: String },
}

impl ScoreboardError {
    /// Category of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            ScoreboardError::EmptyParticipant
            | ScoreboardError::SameParticipant
            | ScoreboardError::NegativeScore => ErrorKind::InvalidArgument,
            ScoreboardError::ParticipantBusy { .. } => ErrorKind::Conflict,
            ScoreboardError::MatchNotFound { .. } => ErrorKind::NotFound,
        }
    }

    pub(crate) fn not_found(home: &str, away: &str) -> Self {
        ScoreboardError::MatchNotFound {
            home: home.to_owned(),
            away: away.to_owned(),
        }
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
