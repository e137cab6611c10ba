//! Match registry: the set of all ongoing matches.
//!
//! ## Architecture
//!
//! - **Slab**: storage for live `Match` records, O(1) insert/remove
//! - **Key index**: `(home, away)` to slab key, for exact-pair lookup
//! - **Participant index**: name to slab key, for conflict checks
//!
//! The participant index holds exact names, so "Sudan" and "South Sudan" never
//! collide.
//!
//! ## Locking
//!
//! All three structures sit behind one `parking_lot::Mutex`. Every operation
//! is a single short critical section, so check-then-insert (start) and
//! check-then-remove (finish) cannot interleave with each other or with score
//! updates. The summary copies matches under the lock and sorts outside it.
//!
//! ## Example
//!
//! ```
//! use scoreboard::MatchRegistry;
//!
//! let board = MatchRegistry::new();
//! board.start_match("Mexico", "Canada").unwrap();
//! board.update_score("Mexico", "Canada", 0, 5).unwrap();
//! board.start_match("Spain", "Brazil").unwrap();
//!
//! assert_eq!(board.summary(), "1. Mexico 0 - Canada 5\n2. Spain 0 - Brazil 0");
//! ```

use std::collections::HashMap;

use parking_lot::Mutex;
use slab::Slab;
use tracing::debug;

use crate::error::{Result, ScoreboardError};
use crate::types::{render, Match, MatchKey, SummaryLine};

/// Registry of ongoing matches.
///
/// `Send + Sync`; share it across threads with `Arc`.
#[derive(Debug)]
pub struct MatchRegistry {
    inner: Mutex<Inner>,
}

#[derive(Debug)]
struct Inner {
    /// Live matches
    matches: Slab<Match>,

    /// Exact `(home, away)` to slab key
    index: HashMap<MatchKey, usize>,

    /// Participant name to slab key of the match they play in
    participants: HashMap<String, usize>,

    /// Next start sequence number
    next_seq: u64,
}

impl Inner {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            matches: Slab::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
            participants: HashMap::with_capacity(capacity * 2),
            next_seq: 1,
        }
    }

    fn remove(&mut self, key: usize) -> Match {
        let m = self.matches.remove(key);
        self.index.remove(&m.key());
        self.participants.remove(&m.home);
        self.participants.remove(&m.away);
        m
    }
}

impl Default for MatchRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl MatchRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Create a registry with room for `capacity` matches before reallocating
    ///
    /// ```
    /// use scoreboard::MatchRegistry;
    ///
    /// let board = MatchRegistry::with_capacity(64);
    /// assert!(board.capacity() >= 64);
    /// assert!(board.is_empty());
    /// ```
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: Mutex::new(Inner::with_capacity(capacity)),
        }
    }

    // ========================================================================
    // Operations
    // ========================================================================

    /// Start a new match at 0 - 0
    ///
    /// # Errors
    ///
    /// * [`ScoreboardError::EmptyParticipant`] - either name is empty
    /// * [`ScoreboardError::SameParticipant`] - `home == away`
    /// * [`ScoreboardError::ParticipantBusy`] - either side is already playing
    pub fn start_match(&self, home: &str, away: &str) -> Result<()> {
        self.try_start(home, away).inspect_err(|e| {
            debug!(home, away, error = %e, "start rejected");
        })
    }

    fn try_start(&self, home: &str, away: &str) -> Result<()> {
        if home.is_empty() || away.is_empty() {
            return Err(ScoreboardError::EmptyParticipant);
        }
        if home == away {
            return Err(ScoreboardError::SameParticipant);
        }

        let mut inner = self.inner.lock();

        for participant in [home, away] {
            if inner.participants.contains_key(participant) {
                return Err(ScoreboardError::ParticipantBusy {
                    participant: participant.to_owned(),
                });
            }
        }

        let seq = inner.next_seq;
        inner.next_seq += 1;

        let m = Match::new(home, away, seq);
        let index_key = m.key();
        let key = inner.matches.insert(m);
        inner.index.insert(index_key, key);
        inner.participants.insert(home.to_owned(), key);
        inner.participants.insert(away.to_owned(), key);

        debug!(home, away, seq, "match started");
        Ok(())
    }

    /// Replace the score of an ongoing match
    ///
    /// Negative scores are rejected before the lookup.
    ///
    /// # Errors
    ///
    /// * [`ScoreboardError::NegativeScore`] - either score is below zero
    /// * [`ScoreboardError::MatchNotFound`] - no match for exactly `(home, away)`
    pub fn update_score(&self, home: &str, away: &str, home_score: i32, away_score: i32) -> Result<()> {
        self.try_update(home, away, home_score, away_score)
            .inspect_err(|e| {
                debug!(home, away, home_score, away_score, error = %e, "update rejected");
            })
    }

    fn try_update(&self, home: &str, away: &str, home_score: i32, away_score: i32) -> Result<()> {
        let home_score = u32::try_from(home_score).map_err(|_| ScoreboardError::NegativeScore)?;
        let away_score = u32::try_from(away_score).map_err(|_| ScoreboardError::NegativeScore)?;

        let mut inner = self.inner.lock();
        let key = *inner
            .index
            .get(&MatchKey::new(home, away))
            .ok_or_else(|| ScoreboardError::not_found(home, away))?;

        // Index and slab are updated together; a stale key is a broken invariant.
        let m = inner
            .matches
            .get_mut(key)
            .ok_or_else(|| ScoreboardError::not_found(home, away))?;
        m.set_score(home_score, away_score);

        debug!(home, away, home_score, away_score, "score updated");
        Ok(())
    }

    /// Finish an ongoing match and remove it from the board
    ///
    /// Returns the final state of the match. Both participants are free to
    /// start new matches afterwards.
    ///
    /// # Errors
    ///
    /// * [`ScoreboardError::MatchNotFound`] - no match for exactly `(home, away)`
    pub fn finish_match(&self, home: &str, away: &str) -> Result<Match> {
        let mut inner = self.inner.lock();
        let Some(key) = inner.index.get(&MatchKey::new(home, away)).copied() else {
            let e = ScoreboardError::not_found(home, away);
            debug!(home, away, error = %e, "finish rejected");
            return Err(e);
        };

        let m = inner.remove(key);
        debug!(
            home,
            away,
            home_score = m.home_score,
            away_score = m.away_score,
            "match finished"
        );
        Ok(m)
    }

    /// Ranked summary as text
    ///
    /// One line per match, highest total first, most recently started first
    /// on ties. Empty board gives `""`.
    pub fn summary(&self) -> String {
        render(&self.summary_lines())
    }

    /// Ranked summary as structured lines
    pub fn summary_lines(&self) -> Vec<SummaryLine> {
        self.snapshot()
            .iter()
            .enumerate()
            .map(|(i, m)| SummaryLine::new(i + 1, m))
            .collect()
    }

    /// Copy of all ongoing matches in summary order
    pub fn snapshot(&self) -> Vec<Match> {
        let mut matches: Vec<Match> = {
            let inner = self.inner.lock();
            inner.matches.iter().map(|(_, m)| m.clone()).collect()
        };
        matches.sort_by_key(Match::rank_key);
        matches
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// Number of ongoing matches
    pub fn len(&self) -> usize {
        self.inner.lock().matches.len()
    }

    /// True if no match is ongoing
    pub fn is_empty(&self) -> bool {
        self.inner.lock().matches.is_empty()
    }

    /// Pre-allocated match slots
    pub fn capacity(&self) -> usize {
        self.inner.lock().matches.capacity()
    }

    /// Copy of the match stored under exactly `(home, away)`
    pub fn get(&self, home: &str, away: &str) -> Option<Match> {
        let inner = self.inner.lock();
        let key = *inner.index.get(&MatchKey::new(home, away))?;
        inner.matches.get(key).cloned()
    }

    /// True if a match is stored under exactly `(home, away)`
    pub fn contains(&self, home: &str, away: &str) -> bool {
        self.inner.lock().index.contains_key(&MatchKey::new(home, away))
    }

    /// True if `participant` is playing in any ongoing match, either side
    pub fn is_playing(&self, participant: &str) -> bool {
        self.inner.lock().participants.contains_key(participant)
    }

    /// Drop every ongoing match
    ///
    /// The start sequence keeps counting, so matches started after a clear
    /// still rank as more recent than anything seen before.
    pub fn clear(&self) {
        let mut inner = self.inner.lock();
        let dropped = inner.matches.len();
        inner.matches.clear();
        inner.index.clear();
        inner.participants.clear();
        debug!(dropped, "board cleared");
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_registry_new() {
        let board = MatchRegistry::new();

        assert!(board.is_empty());
        assert_eq!(board.len(), 0);
        assert_eq!(board.summary(), "");
    }

    #[test]
    fn test_start_indexes_match_and_participants() {
        let board = MatchRegistry::new();
        board.start_match("Argentina", "Brazil").unwrap();

        assert_eq!(board.len(), 1);
        assert!(board.contains("Argentina", "Brazil"));
        assert!(board.is_playing("Argentina"));
        assert!(board.is_playing("Brazil"));

        let m = board.get("Argentina", "Brazil").unwrap();
        assert_eq!((m.home_score, m.away_score), (0, 0));
        assert_eq!(m.seq, 1);
    }

    #[test]
    fn test_start_rejects_empty() {
        let board = MatchRegistry::new();

        assert_eq!(board.start_match("", "Argentina"), Err(ScoreboardError::EmptyParticipant));
        assert_eq!(board.start_match("Argentina", ""), Err(ScoreboardError::EmptyParticipant));
        assert!(board.is_empty());
    }

    #[test]
    fn test_start_rejects_same_participant() {
        let board = MatchRegistry::new();

        let err = board.start_match("Argentina", "Argentina").unwrap_err();
        assert_eq!(err, ScoreboardError::SameParticipant);
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert!(board.is_empty());
    }

    #[test]
    fn test_empty_checked_before_same() {
        let board = MatchRegistry::new();
        assert_eq!(board.start_match("", ""), Err(ScoreboardError::EmptyParticipant));
    }

    #[test]
    fn test_start_conflict_either_role() {
        let board = MatchRegistry::new();
        board.start_match("Argentina", "Brazil").unwrap();

        let err = board.start_match("Germany", "Brazil").unwrap_err();
        assert_eq!(err, ScoreboardError::ParticipantBusy { participant: "Brazil".into() });

        let err = board.start_match("Argentina", "Germany").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Conflict);

        let err = board.start_match("Brazil", "Germany").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Conflict);

        assert_eq!(board.len(), 1);
        assert!(!board.is_playing("Germany"));
    }

    #[test]
    fn test_swapped_start_is_conflict() {
        let board = MatchRegistry::new();
        board.start_match("Argentina", "Brazil").unwrap();

        let err = board.start_match("Brazil", "Argentina").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Conflict);
    }

    #[test]
    fn test_no_substring_conflict() {
        let board = MatchRegistry::new();
        board.start_match("South Sudan", "Kenya").unwrap();

        board.start_match("Sudan", "Ken").unwrap();
        assert_eq!(board.len(), 2);
    }

    #[test]
    fn test_update_score() {
        let board = MatchRegistry::new();
        board.start_match("Argentina", "Brazil").unwrap();

        board.update_score("Argentina", "Brazil", 1, 2).unwrap();

        let m = board.get("Argentina", "Brazil").unwrap();
        assert_eq!((m.home_score, m.away_score), (1, 2));
    }

    #[test]
    fn test_update_score_can_decrease() {
        let board = MatchRegistry::new();
        board.start_match("Argentina", "Brazil").unwrap();
        board.update_score("Argentina", "Brazil", 3, 2).unwrap();

        // Disallowed goal: scores are replaced, not incremented
        board.update_score("Argentina", "Brazil", 2, 2).unwrap();

        let m = board.get("Argentina", "Brazil").unwrap();
        assert_eq!((m.home_score, m.away_score), (2, 2));
    }

    #[test]
    fn test_update_negative_leaves_match_unchanged() {
        let board = MatchRegistry::new();
        board.start_match("Argentina", "Brazil").unwrap();
        board.update_score("Argentina", "Brazil", 1, 1).unwrap();

        assert_eq!(board.update_score("Argentina", "Brazil", -1, 3), Err(ScoreboardError::NegativeScore));
        assert_eq!(board.update_score("Argentina", "Brazil", 0, -15), Err(ScoreboardError::NegativeScore));

        let m = board.get("Argentina", "Brazil").unwrap();
        assert_eq!((m.home_score, m.away_score), (1, 1));
    }

    #[test]
    fn test_negative_checked_before_lookup() {
        let board = MatchRegistry::new();
        assert_eq!(board.update_score("X", "Y", -1, 0), Err(ScoreboardError::NegativeScore));
    }

    #[test]
    fn test_update_missing_match() {
        let board = MatchRegistry::new();

        let err = board.update_score("Argentina", "Brazil", 1, 0).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert_eq!(err.to_string(), "Match does not exist.");
    }

    #[test]
    fn test_update_swapped_pair_not_found() {
        let board = MatchRegistry::new();
        board.start_match("Argentina", "Brazil").unwrap();

        let err = board.update_score("Brazil", "Argentina", 1, 0).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[test]
    fn test_finish_match() {
        let board = MatchRegistry::new();
        board.start_match("Argentina", "Brazil").unwrap();
        board.update_score("Argentina", "Brazil", 2, 1).unwrap();

        let finished = board.finish_match("Argentina", "Brazil").unwrap();

        assert_eq!((finished.home_score, finished.away_score), (2, 1));
        assert!(board.is_empty());
        assert!(!board.contains("Argentina", "Brazil"));
        assert!(!board.is_playing("Argentina"));
        assert!(!board.is_playing("Brazil"));
    }

    #[test]
    fn test_finish_frees_participants() {
        let board = MatchRegistry::new();
        board.start_match("Argentina", "Brazil").unwrap();
        board.finish_match("Argentina", "Brazil").unwrap();

        board.start_match("Brazil", "Germany").unwrap();
        assert!(board.contains("Brazil", "Germany"));
    }

    #[test]
    fn test_finish_missing_and_swapped() {
        let board = MatchRegistry::new();
        assert_eq!(
            board.finish_match("Argentina", "Brazil").unwrap_err().to_string(),
            "Match does not exist."
        );

        board.start_match("Argentina", "Brazil").unwrap();
        let err = board.finish_match("Brazil", "Argentina").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert_eq!(board.len(), 1);
    }

    #[test]
    fn test_slab_slot_reuse_keeps_indexes_consistent() {
        let board = MatchRegistry::with_capacity(4);
        board.start_match("A", "B").unwrap();
        board.start_match("C", "D").unwrap();
        board.finish_match("A", "B").unwrap();

        // Reuses the freed slot
        board.start_match("E", "F").unwrap();
        board.update_score("E", "F", 3, 0).unwrap();

        assert_eq!(board.get("C", "D").unwrap().total(), 0);
        assert_eq!(board.get("E", "F").unwrap().total(), 3);
        assert!(board.get("A", "B").is_none());
    }

    #[test]
    fn test_sequence_strictly_increases() {
        let board = MatchRegistry::new();
        board.start_match("A", "B").unwrap();
        board.start_match("C", "D").unwrap();
        board.finish_match("A", "B").unwrap();
        board.start_match("A", "B").unwrap();

        let cd = board.get("C", "D").unwrap();
        let ab = board.get("A", "B").unwrap();
        assert!(ab.seq > cd.seq);
    }

    #[test]
    fn test_summary_lines_ranks() {
        let board = MatchRegistry::new();
        board.start_match("A", "B").unwrap();
        board.start_match("C", "D").unwrap();
        board.update_score("A", "B", 1, 0).unwrap();

        let lines = board.summary_lines();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].rank, 1);
        assert_eq!(lines[0].home, "A");
        assert_eq!(lines[1].rank, 2);
        assert_eq!(lines[1].home, "C");
    }

    #[test]
    fn test_clear() {
        let board = MatchRegistry::new();
        board.start_match("A", "B").unwrap();
        board.start_match("C", "D").unwrap();

        board.clear();

        assert!(board.is_empty());
        assert!(!board.is_playing("A"));
        assert_eq!(board.summary(), "");

        board.start_match("A", "C").unwrap();
        assert_eq!(board.get("A", "C").unwrap().seq, 3);
    }
}
