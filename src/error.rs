//! Error types.
//!
//! Every failure is invalid input, detected before any matching state is
//! built. [`InputError`] says which precondition failed. Participants are
//! carried as their `Debug` rendering so the error stays non-generic.

use thiserror::Error;

use crate::types::Side;

/// Errors returned by the matcher and the stability checker.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatchError {
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InputError),
}

/// Which precondition a pair of preference tables (or a pairing) violated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("side sizes differ: {proposers} proposers, {receivers} receivers")]
    SizeMismatch { proposers: usize, receivers: usize },

    #[error("{side} {participant} owns more than one preference list")]
    DuplicateParticipant { side: Side, participant: String },

    #[error("{side} {owner} ranks {entry}, who is not on the other side")]
    UnknownEntry {
        side: Side,
        owner: String,
        entry: String,
    },

    #[error("{side} {owner} ranks {entry} more than once")]
    DuplicateEntry {
        side: Side,
        owner: String,
        entry: String,
    },

    #[error("{side} {owner} does not rank {missing}")]
    MissingEntry {
        side: Side,
        owner: String,
        missing: String,
    },

    #[error("pairing names unknown {side} {participant}")]
    UnknownParticipant { side: Side, participant: String },

    #[error("pairing uses {side} {participant} more than once")]
    RepeatedInPairing { side: Side, participant: String },

    #[error("pairing leaves {side} {participant} unmatched")]
    UnmatchedParticipant { side: Side, participant: String },
}

/// Result alias for matcher operations
pub type Result<T> = std::result::Result<T, MatchError>;
