//! The two sides of a matching problem.

use std::fmt;

/// Which side of the market a participant belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Side {
    /// Makes proposals, walking its preference list best-first
    #[default]
    Proposer,
    /// Holds the best proposal seen so far and defers acceptance
    Receiver,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Proposer => f.write_str("proposer"),
            Side::Receiver => f.write_str("receiver"),
        }
    }
}
