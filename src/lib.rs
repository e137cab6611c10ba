//! # Live Scoreboard
//!
//! In-memory scoreboard for ongoing matches between pairs of participants.
//!
//! ## Architecture
//!
//! - **Types**: Core data structures (Match, MatchKey, SummaryLine)
//! - **Board**: Thread-safe registry with slab-based storage
//! - **Error**: Rejection taxonomy (invalid argument, conflict, not found)
//!
//! ## Design Principles
//!
//! 1. **Atomic operations**: Each call fully succeeds or leaves the board unchanged
//! 2. **Exact membership**: Conflicts are checked on whole participant names
//! 3. **Deterministic ranking**: Ties broken by a sequence number, never the clock
//! 4. **Transient state**: Nothing is persisted, nothing outlives the process
//!
//! ## Example
//!
//! ```
//! use scoreboard::MatchRegistry;
//!
//! let board = MatchRegistry::new();
//! board.start_match("Mexico", "Canada").unwrap();
//! board.update_score("Mexico", "Canada", 4, 0).unwrap();
//! board.start_match("Germany", "Spain").unwrap();
//! board.update_score("Germany", "Spain", 1, 1).unwrap();
//!
//! assert_eq!(
//!     board.summary(),
//!     "1. Mexico 4 - Canada 0\n2. Germany 1 - Spain 1"
//! );
//! ```

// ============================================================================
// Module declarations
// ============================================================================

/// Core data types: Match, MatchKey, SummaryLine
pub mod types;

/// Match registry and the Scoreboard trait
pub mod board;

/// Error taxonomy
pub mod error;

// ============================================================================
// Re-exports for convenience
// ============================================================================

pub use board::{MatchRegistry, Scoreboard};
pub use error::{ErrorKind, Result, ScoreboardError};
pub use types::{Match, MatchKey, SummaryLine};
