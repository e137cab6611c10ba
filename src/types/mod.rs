//! Core data types for the scoreboard.
//!
//! ## Types
//!
//! - [`Match`]: An ongoing contest between two participants
//! - [`MatchKey`]: Ordered `(home, away)` pair identifying a match
//! - [`SummaryLine`]: One ranked line of the scoreboard summary
//!
//! ## Ordering
//!
//! Matches rank by total score (descending), then by start sequence
//! (descending), so the most recently started match wins a tie.

mod key;
mod live_match;
mod summary;

pub use key::MatchKey;
pub use live_match::Match;
pub use summary::{render, SummaryLine};
