//! Match receipt: a deterministic summary of one matching run.
//!
//! The receipt carries the run counters and a 32-byte root of the final
//! assignment. Two runs that produce the same pairing produce the same root,
//! whatever order free proposers were processed in.

use ssz_rs::prelude::*;
use sha2::{Digest, Sha256};

use crate::types::MatchStats;

/// Summary of a matching run.
///
/// ## Assignment Root
///
/// SHA-256 over the receiver index of every proposer, in proposer order,
/// each encoded as a little-endian u64. The root depends only on the
/// pairing, never on the proposal sequence.
///
/// ## Example
///
/// ```
/// use stable_match::types::{MatchReceipt, MatchStats};
///
/// let stats = MatchStats { proposals: 5, rejections: 2, breakups: 0 };
/// let receipt = MatchReceipt::from_assignment(&[0, 1, 2], &stats);
///
/// assert_eq!(receipt.size, 3);
/// assert_eq!(receipt.root_hex().len(), 64);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, SimpleSerialize)]
pub struct MatchReceipt {
    /// Number of pairs (n)
    pub size: u64,

    /// Proposals made during the run
    pub proposals: u64,

    /// Proposals rejected during the run
    pub rejections: u64,

    /// SHA-256 root of the assignment
    pub assignment_root: [u8; 32],
}

impl MatchReceipt {
    pub fn new(size: u64, proposals: u64, rejections: u64, assignment_root: [u8; 32]) -> Self {
        Self {
            size,
            proposals,
            rejections,
            assignment_root,
        }
    }

    /// Build a receipt from a proposer → receiver index assignment
    pub fn from_assignment(assignment: &[usize], stats: &MatchStats) -> Self {
        Self::new(
            assignment.len() as u64,
            stats.proposals,
            stats.rejections,
            Self::compute_root(assignment),
        )
    }

    /// Hash an assignment into a 32-byte root
    pub fn compute_root(assignment: &[usize]) -> [u8; 32] {
        let mut hasher = Sha256::new();
        for &receiver in assignment {
            hasher.update((receiver as u64).to_le_bytes());
        }
        let result = hasher.finalize();

        let mut root = [0u8; 32];
        root.copy_from_slice(&result);
        root
    }

    /// Get the assignment root as a hex string
    pub fn root_hex(&self) -> String {
        hex::encode(self.assignment_root)
    }

    /// Whether the run matched nobody (n = 0)
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
