//! # Stable Match
//!
//! Proposer-optimal stable matching with Gale–Shapley deferred acceptance.
//!
//! ## Architecture
//!
//! - **Types**: Preference tables, the resulting matching, run receipts
//! - **Engine**: Validation, rank lookup, the matcher, stability checks
//! - **Sample / Render**: Demo data and plain-text output for the binary
//!
//! ## Design Principles
//!
//! 1. **Determinism**: Same tables always produce the same pairing
//! 2. **No Globals**: Preference tables are explicit arguments
//! 3. **Fail Early**: Incomplete, repeated or mismatched input is rejected
//!    before any matching work
//! 4. **Synchronous Execution**: One bounded loop, at most n² proposals
//!
//! ## Example
//!
//! ```
//! use stable_match::{stable_match, PreferenceTable};
//!
//! let men: PreferenceTable<_, _> = [
//!     ("x", ["a", "b", "c"]),
//!     ("y", ["b", "a", "c"]),
//!     ("z", ["a", "b", "c"]),
//! ]
//! .into_iter()
//! .collect();
//! let women: PreferenceTable<_, _> = [
//!     ("a", ["y", "x", "z"]),
//!     ("b", ["x", "y", "z"]),
//!     ("c", ["x", "y", "z"]),
//! ]
//! .into_iter()
//! .collect();
//!
//! let matching = stable_match(&men, &women).unwrap();
//! assert_eq!(matching.pairs(), &[("x", "a"), ("y", "b"), ("z", "c")]);
//! ```

// ============================================================================
// Module declarations
// ============================================================================

/// Error types: every failure is invalid input
pub mod error;

/// Core data types: PreferenceTable, Matching, MatchReceipt
pub mod types;

/// Matching engine: deferred acceptance and stability checks
pub mod engine;

/// The 3×3 dating-site sample instance
pub mod sample;

/// Plain-text rendering
pub mod render;

// ============================================================================
// Re-exports for convenience
// ============================================================================

pub use error::{InputError, MatchError};
pub use types::{MatchReceipt, MatchStats, Matching, Participant, PreferenceTable, Side};
pub use engine::{blocking_pairs, is_stable, Matcher, MatcherConfig, Selection};

/// Proposer-optimal stable matching with the default configuration.
///
/// Shorthand for `Matcher::new().run(proposers, receivers)`.
pub fn stable_match<P, R>(
    proposers: &PreferenceTable<P, R>,
    receivers: &PreferenceTable<R, P>,
) -> error::Result<Matching<P, R>>
where
    P: Participant,
    R: Participant,
{
    Matcher::new().run(proposers, receivers)
}
