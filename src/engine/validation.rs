//! Input validation and identifier interning.
//!
//! Checks every precondition of a matching run and, in the same pass, turns
//! opaque identifiers into dense indices (`0..n`, table insertion order).
//! Nothing downstream of [`validate`] has to deal with malformed input.

use std::collections::HashMap;

use crate::error::InputError;
use crate::types::{Participant, PreferenceTable, Side};

/// Preference tables after validation, as index lists.
#[derive(Debug)]
pub(crate) struct Instance<'a, P, R> {
    pub(crate) proposer_index: HashMap<&'a P, usize>,
    pub(crate) receiver_index: HashMap<&'a R, usize>,
    pub(crate) proposer_prefs: Vec<Vec<usize>>,
    pub(crate) receiver_prefs: Vec<Vec<usize>>,
}

impl<P, R> Instance<'_, P, R> {
    pub(crate) fn size(&self) -> usize {
        self.proposer_prefs.len()
    }
}

/// Validate both tables and intern their identifiers.
pub(crate) fn validate<'a, P, R>(
    proposers: &'a PreferenceTable<P, R>,
    receivers: &'a PreferenceTable<R, P>,
) -> Result<Instance<'a, P, R>, InputError>
where
    P: Participant,
    R: Participant,
{
    if proposers.len() != receivers.len() {
        return Err(InputError::SizeMismatch {
            proposers: proposers.len(),
            receivers: receivers.len(),
        });
    }

    let proposer_index = index_owners(proposers, Side::Proposer)?;
    let receiver_index = index_owners(receivers, Side::Receiver)?;

    let proposer_prefs = index_lists(proposers, receivers, &receiver_index, Side::Proposer)?;
    let receiver_prefs = index_lists(receivers, proposers, &proposer_index, Side::Receiver)?;

    Ok(Instance {
        proposer_index,
        receiver_index,
        proposer_prefs,
        receiver_prefs,
    })
}

/// Map each owner to its position, rejecting repeated owners
fn index_owners<O: Participant, T>(
    table: &PreferenceTable<O, T>,
    side: Side,
) -> Result<HashMap<&O, usize>, InputError> {
    let mut index = HashMap::with_capacity(table.len());
    for (position, owner) in table.owners().enumerate() {
        if index.insert(owner, position).is_some() {
            return Err(InputError::DuplicateParticipant {
                side,
                participant: format!("{owner:?}"),
            });
        }
    }
    Ok(index)
}

/// Convert every list of `table` to counterpart indices, checking that each
/// list is a permutation of the other side.
fn index_lists<O, T>(
    table: &PreferenceTable<O, T>,
    others: &PreferenceTable<T, O>,
    other_index: &HashMap<&T, usize>,
    side: Side,
) -> Result<Vec<Vec<usize>>, InputError>
where
    O: Participant,
    T: Participant,
{
    let n = others.len();
    let mut lists = Vec::with_capacity(table.len());

    for (owner, prefs) in table.iter() {
        let mut seen = vec![false; n];
        let mut list = Vec::with_capacity(n);

        for entry in prefs {
            let Some(&other) = other_index.get(entry) else {
                return Err(InputError::UnknownEntry {
                    side,
                    owner: format!("{owner:?}"),
                    entry: format!("{entry:?}"),
                });
            };
            if seen[other] {
                return Err(InputError::DuplicateEntry {
                    side,
                    owner: format!("{owner:?}"),
                    entry: format!("{entry:?}"),
                });
            }
            seen[other] = true;
            list.push(other);
        }

        // No unknowns and no repeats, so a short list is the only way left
        // to miss somebody.
        if let Some(missing) = seen.iter().position(|&s| !s) {
            let missing = others
                .owner_at(missing)
                .map(|m| format!("{m:?}"))
                .unwrap_or_default();
            return Err(InputError::MissingEntry {
                side,
                owner: format!("{owner:?}"),
                missing,
            });
        }

        lists.push(list);
    }

    Ok(lists)
}

/// Convert an externally supplied pairing to a proposer → receiver index
/// assignment, checking that it is a bijection between the two sides.
pub(crate) fn index_pairing<P, R>(
    instance: &Instance<'_, P, R>,
    proposers: &PreferenceTable<P, R>,
    pairs: &[(P, R)],
) -> Result<Vec<usize>, InputError>
where
    P: Participant,
    R: Participant,
{
    let n = instance.size();
    let mut assignment: Vec<Option<usize>> = vec![None; n];
    let mut taken = vec![false; n];

    for (proposer, receiver) in pairs {
        let &m = instance
            .proposer_index
            .get(proposer)
            .ok_or_else(|| InputError::UnknownParticipant {
                side: Side::Proposer,
                participant: format!("{proposer:?}"),
            })?;
        let &w = instance
            .receiver_index
            .get(receiver)
            .ok_or_else(|| InputError::UnknownParticipant {
                side: Side::Receiver,
                participant: format!("{receiver:?}"),
            })?;

        if assignment[m].is_some() {
            return Err(InputError::RepeatedInPairing {
                side: Side::Proposer,
                participant: format!("{proposer:?}"),
            });
        }
        if taken[w] {
            return Err(InputError::RepeatedInPairing {
                side: Side::Receiver,
                participant: format!("{receiver:?}"),
            });
        }
        assignment[m] = Some(w);
        taken[w] = true;
    }

    // Every pair consumed one proposer and one receiver, so the sides are
    // short by the same count and checking proposers is enough.
    assignment
        .into_iter()
        .enumerate()
        .map(|(m, w)| {
            w.ok_or_else(|| InputError::UnmatchedParticipant {
                side: Side::Proposer,
                participant: proposers
                    .owner_at(m)
                    .map(|p| format!("{p:?}"))
                    .unwrap_or_default(),
            })
        })
        .collect()
}
