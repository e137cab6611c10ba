//! Match key: the ordered participant pair a match is stored under.

use std::fmt;

/// Ordered `(home, away)` pair.
///
/// Order matters: `MatchKey::new("A", "B")` and `MatchKey::new("B", "A")` are
/// different keys. Lookups for update/finish must use the same roles the match
/// was started with.
///
/// ## Example
///
/// ```
/// use scoreboard::types::MatchKey;
///
/// let key = MatchKey::new("Mexico", "Canada");
/// assert_eq!(key.to_string(), "Mexico|Canada");
/// assert_ne!(key, MatchKey::new("Canada", "Mexico"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MatchKey {
    /// Home participant
    pub home: String,

    /// Away participant
    pub away: String,
}

impl MatchKey {
    /// Build a key from borrowed participant names
    pub fn new(home: &str, away: &str) -> Self {
        Self {
            home: home.to_owned(),
            away: away.to_owned(),
        }
    }

    /// True if `participant` is exactly one of the two sides
    pub fn involves(&self, participant: &str) -> bool {
        self.home == participant || self.away == participant
    }
}

impl fmt::Display for MatchKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}|{}", self.home, self.away)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
