//! Stable matching engine.
//!
//! ## Design Principles
//!
//! 1. **Pure**: A run is a function of its two tables; no state outlives it
//! 2. **Validate first**: Malformed input is rejected before matching starts
//! 3. **Precomputed ranks**: Receiver preferences are compared in O(1)
//! 4. **Order-independent outcome**: Any [`Selection`] gives the same pairing
//!
//! ## Components
//!
//! - [`Matcher`]: Proposer-optimal deferred acceptance
//! - [`MatcherConfig`] / [`Selection`]: How free proposers are picked
//! - [`blocking_pairs`] / [`is_stable`]: Stability of any pairing
//!
//! ## Example
//!
//! ```
//! use stable_match::engine::{is_stable, Matcher};
//! use stable_match::sample;
//!
//! let proposers = sample::proposer_preferences();
//! let receivers = sample::receiver_preferences();
//!
//! let matching = Matcher::new().run(&proposers, &receivers).unwrap();
//! assert!(is_stable(&proposers, &receivers, matching.pairs()).unwrap());
//! ```

mod config;
pub mod matcher;
mod pool;
mod rank;
mod stability;
mod validation;

pub use config::{MatcherConfig, Selection};
pub use matcher::Matcher;
pub use stability::{blocking_pairs, is_stable};
