//! Match record for the scoreboard.
//!
//! ## Start Stamp
//!
//! Every match carries two start stamps:
//!
//! - `seq`: strictly increasing sequence number assigned by the registry.
//!   This is the only value used for tie-break ordering.
//! - `started_at`: wall-clock `Instant` of creation, informational only.
//!
//! Two matches created within the same clock tick still get distinct `seq`
//! values, so ranking never depends on timer resolution.

use std::cmp::Reverse;
use std::time::Instant;

use crate::types::MatchKey;

/// An ongoing contest between two participants.
///
/// Participants are immutable after creation; scores are replaced in place by
/// the registry.
///
/// ## Example
///
/// ```
/// use scoreboard::types::Match;
///
/// let mut m = Match::new("Mexico", "Canada", 1);
/// assert_eq!((m.home_score, m.away_score), (0, 0));
///
/// m.set_score(4, 0);
/// assert_eq!(m.total(), 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    /// Home participant
    pub home: String,

    /// Away participant
    pub away: String,

    /// Home goals
    pub home_score: u32,

    /// Away goals
    pub away_score: u32,

    /// Start sequence number (higher = started later)
    pub seq: u64,

    /// Wall-clock creation time
    pub started_at: Instant,
}

impl Match {
    /// Create a new match at 0 - 0
    ///
    /// # Arguments
    ///
    /// * `home` - Home participant
    /// * `away` - Away participant
    /// * `seq` - Start sequence number
    pub fn new(home: &str, away: &str, seq: u64) -> Self {
        Self {
            home: home.to_owned(),
            away: away.to_owned(),
            home_score: 0,
            away_score: 0,
            seq,
            started_at: Instant::now(),
        }
    }

    /// Key this match is stored under
    pub fn key(&self) -> MatchKey {
        MatchKey::new(&self.home, &self.away)
    }

    /// Replace both scores
    pub fn set_score(&mut self, home_score: u32, away_score: u32) {
        self.home_score = home_score;
        self.away_score = away_score;
    }

    /// Combined score of both sides
    #[inline]
    pub fn total(&self) -> u64 {
        u64::from(self.home_score) + u64::from(self.away_score)
    }

    /// Sort key for the summary: highest total first, then most recent start.
    #[inline]
    pub fn rank_key(&self) -> (Reverse<u64>, Reverse<u64>) {
        (Reverse(self.total()), Reverse(self.seq))
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
