//! Summary lines and rendering.
//!
//! The summary text is a compatibility contract: one line per match,
//! `"{rank}. {home} {home_score} - {away} {away_score}"`, joined by `\n` with
//! no trailing newline.

use std::fmt;

use crate::types::Match;

/// One ranked entry of the scoreboard summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryLine {
    /// 1-based rank
    pub rank: usize,
    pub home: String,
    pub home_score: u32,
    pub away: String,
    pub away_score: u32,
}

impl SummaryLine {
    /// Build the line for `m` at position `rank`
    pub fn new(rank: usize, m: &Match) -> Self {
        Self {
            rank,
            home: m.home.clone(),
            home_score: m.home_score,
            away: m.away.clone(),
            away_score: m.away_score,
        }
    }
}

impl fmt::Display for SummaryLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}. {} {} - {} {}",
            self.rank, self.home, self.home_score, self.away, self.away_score
        )
    }
}

/// Join lines into the summary string
///
/// # Example
///
/// ```
/// use scoreboard::types::{render, Match, SummaryLine};
///
/// let m = Match::new("Argentina", "Brazil", 1);
/// let lines = vec![SummaryLine::new(1, &m)];
/// assert_eq!(render(&lines), "1. Argentina 0 - Brazil 0");
/// assert_eq!(render(&[]), "");
/// ```
pub fn render(lines: &[SummaryLine]) -> String {
    lines
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

// ============================================================================
// Unit Tests
// ============================================================================
