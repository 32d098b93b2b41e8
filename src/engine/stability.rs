//! Stability checking for arbitrary pairings.
//!
//! A pairing is unstable when some proposer and receiver, not paired with
//! each other, both rank each other above their assigned partners. Such a
//! pair is a *blocking pair*.

use crate::engine::rank::RankTable;
use crate::engine::validation;
use crate::error::Result;
use crate::types::{Participant, PreferenceTable};

/// Blocking pairs of an index assignment, ordered by proposer then by the
/// proposer's preference.
pub(crate) fn blocking_pairs_indexed(
    proposer_prefs: &[Vec<usize>],
    receiver_ranks: &RankTable,
    assignment: &[usize],
) -> Vec<(usize, usize)> {
    let mut proposer_of = vec![0usize; assignment.len()];
    for (m, &w) in assignment.iter().enumerate() {
        proposer_of[w] = m;
    }

    let mut blocking = Vec::new();
    for (m, prefs) in proposer_prefs.iter().enumerate() {
        // Only receivers m ranks above its own partner can block.
        for &w in prefs.iter().take_while(|&&w| w != assignment[m]) {
            if receiver_ranks.prefers(w, m, proposer_of[w]) {
                blocking.push((m, w));
            }
        }
    }
    blocking
}

/// Every blocking pair of `pairs` under the given preferences.
///
/// # Errors
///
/// `InvalidInput` if the tables fail the matcher's preconditions, or if
/// `pairs` is not a one-to-one pairing of every proposer with every
/// receiver.
///
/// ## Example
///
/// ```
/// use stable_match::engine::blocking_pairs;
/// use stable_match::sample;
///
/// let blocking = blocking_pairs(
///     &sample::proposer_preferences(),
///     &sample::receiver_preferences(),
///     &sample::naive_assignment(),
/// )
/// .unwrap();
///
/// assert_eq!(blocking, vec![("Xavier", "Amy"), ("Xavier", "Bertha")]);
/// ```
pub fn blocking_pairs<P, R>(
    proposers: &PreferenceTable<P, R>,
    receivers: &PreferenceTable<R, P>,
    pairs: &[(P, R)],
) -> Result<Vec<(P, R)>>
where
    P: Participant,
    R: Participant,
{
    let instance = validation::validate(proposers, receivers)?;
    let assignment = validation::index_pairing(&instance, proposers, pairs)?;
    let ranks = RankTable::from_lists(&instance.receiver_prefs);

    let proposer_ids: Vec<&P> = proposers.owners().collect();
    let receiver_ids: Vec<&R> = receivers.owners().collect();

    Ok(
        blocking_pairs_indexed(&instance.proposer_prefs, &ranks, &assignment)
            .into_iter()
            .map(|(m, w)| (proposer_ids[m].clone(), receiver_ids[w].clone()))
            .collect(),
    )
}

/// Whether `pairs` is a stable matching under the given preferences.
pub fn is_stable<P, R>(
    proposers: &PreferenceTable<P, R>,
    receivers: &PreferenceTable<R, P>,
    pairs: &[(P, R)],
) -> Result<bool>
where
    P: Participant,
    R: Participant,
{
    Ok(blocking_pairs(proposers, receivers, pairs)?.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{InputError, MatchError};
    use crate::types::Side;

    fn tables() -> (PreferenceTable<char, char>, PreferenceTable<char, char>) {
        let proposers = [('x', "abc"), ('y', "bac"), ('z', "abc")]
            .into_iter()
            .map(|(p, prefs)| (p, prefs.chars()))
            .collect();
        let receivers = [('a', "yxz"), ('b', "xyz"), ('c', "xyz")]
            .into_iter()
            .map(|(r, prefs)| (r, prefs.chars()))
            .collect();
        (proposers, receivers)
    }

    #[test]
    fn test_stable_pairing_has_no_blocking_pairs() {
        let (proposers, receivers) = tables();
        let pairs = [('x', 'a'), ('y', 'b'), ('z', 'c')];

        assert_eq!(blocking_pairs(&proposers, &receivers, &pairs), Ok(vec![]));
        assert_eq!(is_stable(&proposers, &receivers, &pairs), Ok(true));
    }

    #[test]
    fn test_unstable_pairing() {
        let (proposers, receivers) = tables();
        let pairs = [('x', 'c'), ('y', 'b'), ('z', 'a')];

        assert_eq!(
            blocking_pairs(&proposers, &receivers, &pairs),
            Ok(vec![('x', 'a'), ('x', 'b')])
        );
        assert_eq!(is_stable(&proposers, &receivers, &pairs), Ok(false));
    }

    #[test]
    fn test_pair_order_does_not_matter() {
        let (proposers, receivers) = tables();
        let pairs = [('z', 'c'), ('x', 'a'), ('y', 'b')];
        assert_eq!(is_stable(&proposers, &receivers, &pairs), Ok(true));
    }

    #[test]
    fn test_partial_pairing_is_invalid() {
        let (proposers, receivers) = tables();
        let err = is_stable(&proposers, &receivers, &[('x', 'a'), ('y', 'b')]).unwrap_err();

        assert_eq!(
            err,
            MatchError::InvalidInput(InputError::UnmatchedParticipant {
                side: Side::Proposer,
                participant: "'z'".into(),
            })
        );
    }
}
