//! The result of a matching run.
//!
//! A [`Matching`] is a perfect pairing of every proposer with exactly one
//! receiver. Pairs are stored in proposer insertion order, so two runs over
//! the same tables can be compared with `==`.

use crate::types::MatchReceipt;

/// Counters collected during one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MatchStats {
    /// Total proposals made (never exceeds n²)
    pub proposals: u64,

    /// Proposals a receiver turned down in favour of its current partner
    pub rejections: u64,

    /// Engagements broken because the receiver got a better proposal
    pub breakups: u64,
}

impl MatchStats {
    /// Proposals that ended in an engagement
    pub fn acceptances(&self) -> u64 {
        self.proposals.saturating_sub(self.rejections)
    }
}

/// What a receiver did with one proposal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response<P> {
    /// Receiver was free and accepted
    Accepted,
    /// Receiver dropped `displaced` for the new proposer
    Replaced { displaced: P },
    /// Receiver kept its current partner
    Rejected,
}

/// One step of the proposal sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProposalEvent<P, R> {
    pub proposer: P,
    pub receiver: R,
    pub response: Response<P>,
}

/// A perfect, stable pairing of proposers with receivers.
///
/// ## Example
///
/// ```
/// use stable_match::stable_match;
/// use stable_match::types::PreferenceTable;
///
/// let proposers: PreferenceTable<_, _> = [("x", ["a"])].into_iter().collect();
/// let receivers: PreferenceTable<_, _> = [("a", ["x"])].into_iter().collect();
///
/// let matching = stable_match(&proposers, &receivers).unwrap();
/// assert_eq!(matching.receiver_of(&"x"), Some(&"a"));
/// assert_eq!(matching.proposer_of(&"a"), Some(&"x"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matching<P, R> {
    /// `(proposer, receiver)` in proposer insertion order
    pub(crate) pairs: Vec<(P, R)>,

    /// Receiver index assigned to each proposer index
    pub(crate) assignment: Vec<usize>,

    pub(crate) stats: MatchStats,

    /// Empty unless the run was configured to record events
    pub(crate) events: Vec<ProposalEvent<P, R>>,
}

impl<P: PartialEq, R: PartialEq> Matching<P, R> {
    /// Receiver paired with `proposer`
    pub fn receiver_of(&self, proposer: &P) -> Option<&R> {
        self.pairs
            .iter()
            .find(|(p, _)| p == proposer)
            .map(|(_, r)| r)
    }

    /// Proposer paired with `receiver`
    pub fn proposer_of(&self, receiver: &R) -> Option<&P> {
        self.pairs
            .iter()
            .find(|(_, r)| r == receiver)
            .map(|(p, _)| p)
    }

    /// Whether `proposer` and `receiver` are paired with each other
    pub fn contains(&self, proposer: &P, receiver: &R) -> bool {
        self.pairs.iter().any(|(p, r)| p == proposer && r == receiver)
    }
}

impl<P, R> Matching<P, R> {
    /// Pairs in proposer insertion order
    pub fn pairs(&self) -> &[(P, R)] {
        &self.pairs
    }

    pub fn iter(&self) -> impl Iterator<Item = (&P, &R)> {
        self.pairs.iter().map(|(p, r)| (p, r))
    }

    /// Number of pairs (n)
    #[inline]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Receiver index (in receiver-table order) for each proposer index
    pub fn assignment(&self) -> &[usize] {
        &self.assignment
    }

    pub fn stats(&self) -> MatchStats {
        self.stats
    }

    /// Proposal log, empty unless `record_events` was set
    pub fn events(&self) -> &[ProposalEvent<P, R>] {
        &self.events
    }

    /// Deterministic summary of this run
    pub fn receipt(&self) -> MatchReceipt {
        MatchReceipt::from_assignment(&self.assignment, &self.stats)
    }

    /// Consume the matching, returning its pairs
    pub fn into_pairs(self) -> Vec<(P, R)> {
        self.pairs
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
