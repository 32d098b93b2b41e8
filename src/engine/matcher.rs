//! Deferred-acceptance matcher.
//!
//! ## Algorithm
//!
//! 1. Every proposer and receiver starts free; each proposer's cursor points
//!    at its first choice.
//! 2. While a free proposer remains, pick one (see [`Selection`]) and let it
//!    propose to the receiver under its cursor, then advance the cursor.
//! 3. A free receiver accepts. An engaged receiver accepts only if it ranks
//!    the new proposer above its partner, freeing the old partner, whose
//!    cursor stays where it was. Otherwise the proposer is rejected and stays
//!    free.
//!
//! Each proposal consumes one list entry for good, so a run makes at most
//! n² proposals.
//!
//! [`Selection`]: crate::engine::Selection

use crate::engine::pool::FreePool;
use crate::engine::rank::RankTable;
use crate::engine::validation::{self, Instance};
use crate::engine::MatcherConfig;
use crate::error::Result;
use crate::types::{MatchStats, Matching, Participant, PreferenceTable, ProposalEvent, Response};

/// Index-level record of one proposal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct RawEvent {
    pub(crate) proposer: usize,
    pub(crate) receiver: usize,
    pub(crate) displaced: Option<usize>,
    pub(crate) accepted: bool,
}

/// Index-level result of one run
#[derive(Debug)]
pub(crate) struct Outcome {
    /// Receiver index for each proposer index
    pub(crate) assignment: Vec<usize>,
    pub(crate) stats: MatchStats,
    pub(crate) events: Vec<RawEvent>,
}

/// Stable matcher.
///
/// The matcher holds configuration only; every call to [`run`](Self::run)
/// builds and discards its own state.
///
/// ## Example
///
/// ```
/// use stable_match::engine::{Matcher, MatcherConfig, Selection};
/// use stable_match::types::PreferenceTable;
///
/// let proposers: PreferenceTable<_, _> = [
///     ("x", ["a", "b", "c"]),
///     ("y", ["b", "a", "c"]),
///     ("z", ["a", "b", "c"]),
/// ]
/// .into_iter()
/// .collect();
/// let receivers: PreferenceTable<_, _> = [
///     ("a", ["y", "x", "z"]),
///     ("b", ["x", "y", "z"]),
///     ("c", ["x", "y", "z"]),
/// ]
/// .into_iter()
/// .collect();
///
/// let matcher = Matcher::with_config(MatcherConfig::new().with_selection(Selection::Fifo));
/// let matching = matcher.run(&proposers, &receivers).unwrap();
///
/// assert_eq!(matching.pairs(), &[("x", "a"), ("y", "b"), ("z", "c")]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Matcher {
    config: MatcherConfig,
}

impl Matcher {
    /// Matcher with the default configuration (lowest-index selection)
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: MatcherConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MatcherConfig {
        &self.config
    }

    /// Check both tables without matching.
    pub fn validate<P, R>(
        &self,
        proposers: &PreferenceTable<P, R>,
        receivers: &PreferenceTable<R, P>,
    ) -> Result<()>
    where
        P: Participant,
        R: Participant,
    {
        validation::validate(proposers, receivers)?;
        Ok(())
    }

    /// Compute the proposer-optimal stable matching.
    ///
    /// # Errors
    ///
    /// [`MatchError::InvalidInput`](crate::MatchError::InvalidInput) if the
    /// sides differ in size, an owner is repeated, or any list is not a
    /// permutation of the other side. No matching work is done in that case.
    pub fn run<P, R>(
        &self,
        proposers: &PreferenceTable<P, R>,
        receivers: &PreferenceTable<R, P>,
    ) -> Result<Matching<P, R>>
    where
        P: Participant,
        R: Participant,
    {
        let instance = validation::validate(proposers, receivers)?;
        let outcome = self.run_indexed(&instance);

        tracing::debug!(
            size = instance.size(),
            proposals = outcome.stats.proposals,
            rejections = outcome.stats.rejections,
            breakups = outcome.stats.breakups,
            "stable matching complete"
        );

        Ok(build_matching(proposers, receivers, outcome))
    }

    pub(crate) fn run_indexed<P, R>(&self, instance: &Instance<'_, P, R>) -> Outcome {
        let ranks = RankTable::from_lists(&instance.receiver_prefs);
        deferred_acceptance(&instance.proposer_prefs, &ranks, &self.config)
    }
}

/// Core loop over validated index lists.
pub(crate) fn deferred_acceptance(
    prefs: &[Vec<usize>],
    receiver_ranks: &RankTable,
    config: &MatcherConfig,
) -> Outcome {
    let n = prefs.len();
    debug_assert_eq!(receiver_ranks.size(), n);
    let mut cursor = vec![0usize; n];
    let mut receiver_of: Vec<Option<usize>> = vec![None; n];
    let mut proposer_of: Vec<Option<usize>> = vec![None; n];
    let mut pool = FreePool::new(config.selection, n);
    let mut stats = MatchStats::default();
    let mut events = Vec::new();

    while let Some(m) = pool.pop() {
        // Exhausted lists cannot occur with complete preferences; such a
        // proposer simply leaves the pool.
        let Some(&w) = prefs[m].get(cursor[m]) else {
            continue;
        };
        cursor[m] += 1;
        stats.proposals += 1;

        let (accepted, displaced) = match proposer_of[w] {
            None => (true, None),
            Some(current) if receiver_ranks.prefers(w, m, current) => (true, Some(current)),
            Some(_) => (false, None),
        };

        if accepted {
            if let Some(old) = displaced {
                receiver_of[old] = None;
                pool.push(old);
                stats.breakups += 1;
            }
            proposer_of[w] = Some(m);
            receiver_of[m] = Some(w);
        } else {
            stats.rejections += 1;
            pool.push(m);
        }

        debug_assert!(proposer_of[w].is_some_and(|p| receiver_of[p] == Some(w)));

        tracing::trace!(
            proposer = m,
            receiver = w,
            accepted,
            displaced = ?displaced,
            free = pool.len(),
            "proposal"
        );

        if config.record_events {
            events.push(RawEvent {
                proposer: m,
                receiver: w,
                displaced,
                accepted,
            });
        }
    }

    debug_assert!(stats.proposals <= (n * n) as u64);

    Outcome {
        assignment: receiver_of.into_iter().flatten().collect(),
        stats,
        events,
    }
}

/// Map an index-level outcome back to participant identifiers
fn build_matching<P, R>(
    proposers: &PreferenceTable<P, R>,
    receivers: &PreferenceTable<R, P>,
    outcome: Outcome,
) -> Matching<P, R>
where
    P: Participant,
    R: Participant,
{
    let proposer_ids: Vec<&P> = proposers.owners().collect();
    let receiver_ids: Vec<&R> = receivers.owners().collect();

    let pairs = outcome
        .assignment
        .iter()
        .enumerate()
        .map(|(m, &w)| (proposer_ids[m].clone(), receiver_ids[w].clone()))
        .collect();

    let events = outcome
        .events
        .iter()
        .map(|event| ProposalEvent {
            proposer: proposer_ids[event.proposer].clone(),
            receiver: receiver_ids[event.receiver].clone(),
            response: match (event.accepted, event.displaced) {
                (true, None) => Response::Accepted,
                (true, Some(old)) => Response::Replaced {
                    displaced: proposer_ids[old].clone(),
                },
                (false, _) => Response::Rejected,
            },
        })
        .collect();

    Matching {
        pairs,
        assignment: outcome.assignment,
        stats: outcome.stats,
        events,
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Selection;
    use crate::error::{InputError, MatchError};

    fn lists(rows: &[&[usize]]) -> Vec<Vec<usize>> {
        rows.iter().map(|row| row.to_vec()).collect()
    }

    fn run(proposers: &[&[usize]], receivers: &[&[usize]], selection: Selection) -> Outcome {
        let ranks = RankTable::from_lists(&lists(receivers));
        let config = MatcherConfig::new()
            .with_selection(selection)
            .with_events(true);
        deferred_acceptance(&lists(proposers), &ranks, &config)
    }

    #[test]
    fn test_sample_instance() {
        // X:[A,B,C] Y:[B,A,C] Z:[A,B,C]; A:[Y,X,Z] B:[X,Y,Z] C:[X,Y,Z]
        let outcome = run(
            &[&[0, 1, 2], &[1, 0, 2], &[0, 1, 2]],
            &[&[1, 0, 2], &[0, 1, 2], &[0, 1, 2]],
            Selection::LowestIndex,
        );

        assert_eq!(outcome.assignment, vec![0, 1, 2]);
        assert_eq!(outcome.stats.proposals, 5);
        assert_eq!(outcome.stats.rejections, 2);
        assert_eq!(outcome.stats.breakups, 0);
        assert_eq!(outcome.events.len(), 5);
    }

    #[test]
    fn test_breakup_keeps_cursor() {
        // Both proposers want receiver 0, which prefers proposer 1.
        let outcome = run(&[&[0, 1], &[0, 1]], &[&[1, 0], &[0, 1]], Selection::LowestIndex);

        assert_eq!(outcome.assignment, vec![1, 0]);
        assert_eq!(outcome.stats.breakups, 1);
        assert_eq!(
            outcome.events[1],
            RawEvent {
                proposer: 1,
                receiver: 0,
                displaced: Some(0),
                accepted: true,
            }
        );
        // Proposer 0 resumes at its second choice instead of retrying 0.
        assert_eq!(outcome.events[2].proposer, 0);
        assert_eq!(outcome.events[2].receiver, 1);
        assert_eq!(outcome.stats.proposals, 3);
    }

    #[test]
    fn test_all_selections_agree() {
        let proposers: &[&[usize]] = &[&[2, 0, 1, 3], &[0, 2, 3, 1], &[2, 3, 0, 1], &[0, 1, 2, 3]];
        let receivers: &[&[usize]] = &[&[3, 1, 0, 2], &[0, 3, 2, 1], &[1, 0, 3, 2], &[2, 0, 1, 3]];

        let expected = run(proposers, receivers, Selection::LowestIndex).assignment;
        for selection in [
            Selection::HighestIndex,
            Selection::Fifo,
            Selection::Lifo,
            Selection::Random { seed: 1 },
            Selection::Random { seed: 99 },
        ] {
            assert_eq!(run(proposers, receivers, selection).assignment, expected);
        }
    }

    #[test]
    fn test_selection_only_changes_split() {
        let proposers: &[&[usize]] = &[&[0, 1, 2], &[0, 2, 1], &[1, 0, 2]];
        let receivers: &[&[usize]] = &[&[2, 1, 0], &[0, 1, 2], &[0, 1, 2]];

        let baseline = run(proposers, receivers, Selection::LowestIndex).stats;
        for selection in [
            Selection::HighestIndex,
            Selection::Fifo,
            Selection::Lifo,
            Selection::Random { seed: 7 },
        ] {
            let stats = run(proposers, receivers, selection).stats;
            assert_eq!(stats.proposals, baseline.proposals, "{selection:?}");
            // every proposal beyond the final n ends in a rejection or a breakup
            assert_eq!(stats.rejections + stats.breakups, stats.proposals - 3);
        }
    }

    #[test]
    fn test_empty_instance() {
        let outcome = run(&[], &[], Selection::LowestIndex);
        assert!(outcome.assignment.is_empty());
        assert_eq!(outcome.stats, MatchStats::default());
    }

    #[test]
    fn test_run_rejects_invalid_input() {
        let proposers: PreferenceTable<_, _> = [("x", vec!["a", "b"]), ("y", vec!["a"])]
            .into_iter()
            .collect();
        let receivers: PreferenceTable<_, _> = [("a", vec!["x", "y"]), ("b", vec!["y", "x"])]
            .into_iter()
            .collect();

        let err = Matcher::new().run(&proposers, &receivers).unwrap_err();
        assert!(matches!(
            err,
            MatchError::InvalidInput(InputError::MissingEntry { .. })
        ));
        assert!(Matcher::new().validate(&proposers, &receivers).is_err());
    }

    #[test]
    fn test_events_mapped_to_identifiers() {
        let proposers: PreferenceTable<_, _> =
            [("x", ["a", "b"]), ("y", ["a", "b"])].into_iter().collect();
        let receivers: PreferenceTable<_, _> =
            [("a", ["y", "x"]), ("b", ["x", "y"])].into_iter().collect();

        let matcher = Matcher::with_config(MatcherConfig::new().with_events(true));
        let matching = matcher.run(&proposers, &receivers).expect("valid input");

        assert_eq!(matching.pairs(), &[("x", "b"), ("y", "a")]);
        assert_eq!(
            matching.events(),
            &[
                ProposalEvent {
                    proposer: "x",
                    receiver: "a",
                    response: Response::Accepted,
                },
                ProposalEvent {
                    proposer: "y",
                    receiver: "a",
                    response: Response::Replaced { displaced: "x" },
                },
                ProposalEvent {
                    proposer: "x",
                    receiver: "b",
                    response: Response::Accepted,
                },
            ]
        );

        let quiet = Matcher::new().run(&proposers, &receivers).expect("valid input");
        assert!(quiet.events().is_empty());
        assert_eq!(quiet.pairs(), matching.pairs());
    }
}
