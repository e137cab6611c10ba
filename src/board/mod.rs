//! Scoreboard module: the live match registry.
//!
//! ## Components
//!
//! - [`MatchRegistry`]: Thread-safe registry of ongoing matches
//! - [`Scoreboard`]: The four board operations as a trait, for hosts that
//!   want to depend on the abstraction rather than the concrete registry
//!
//! ## Performance
//!
//! | Operation | Complexity |
//! |-----------|------------|
//! | Start match | O(1) |
//! | Update score | O(1) |
//! | Finish match | O(1) |
//! | Summary | O(n log n) |

pub mod registry;

use std::sync::Arc;

use crate::error::Result;
use crate::types::Match;

pub use registry::MatchRegistry;

/// Live scoreboard operations.
///
/// ## Example
///
/// ```
/// use std::sync::Arc;
/// use scoreboard::{MatchRegistry, Scoreboard};
///
/// fn kick_off(board: &impl Scoreboard) {
///     board.start_match("Uruguay", "Italy").unwrap();
/// }
///
/// let board = Arc::new(MatchRegistry::new());
/// kick_off(&board);
/// assert_eq!(board.summary(), "1. Uruguay 0 - Italy 0");
/// ```
pub trait Scoreboard {
    /// Start a new match at 0 - 0
    fn start_match(&self, home: &str, away: &str) -> Result<()>;

    /// Replace the score of an ongoing match
    fn update_score(&self, home: &str, away: &str, home_score: i32, away_score: i32) -> Result<()>;

    /// Finish an ongoing match, returning its final state
    fn finish_match(&self, home: &str, away: &str) -> Result<Match>;

    /// Ranked summary text
    fn summary(&self) -> String;
}

impl Scoreboard for MatchRegistry {
    fn start_match(&self, home: &str, away: &str) -> Result<()> {
        MatchRegistry::start_match(self, home, away)
    }

    fn update_score(&self, home: &str, away: &str, home_score: i32, away_score: i32) -> Result<()> {
        MatchRegistry::update_score(self, home, away, home_score, away_score)
    }

    fn finish_match(&self, home: &str, away: &str) -> Result<Match> {
        MatchRegistry::finish_match(self, home, away)
    }

    fn summary(&self) -> String {
        MatchRegistry::summary(self)
    }
}

impl<T: Scoreboard + ?Sized> Scoreboard for Arc<T> {
    fn start_match(&self, home: &str, away: &str) -> Result<()> {
        (**self).start_match(home, away)
    }

    fn update_score(&self, home: &str, away: &str, home_score: i32, away_score: i32) -> Result<()> {
        (**self).update_score(home, away, home_score, away_score)
    }

    fn finish_match(&self, home: &str, away: &str) -> Result<Match> {
        (**self).finish_match(home, away)
    }

    fn summary(&self) -> String {
        (**self).summary()
    }
}
