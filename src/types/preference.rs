//! Preference tables.
//!
//! A [`PreferenceTable`] maps each participant of one side to its ranked list
//! of participants on the other side, best first. Owners keep their
//! insertion order: the position of an owner in the table is its index
//! inside the matcher, which is what makes "lowest-index free proposer"
//! well defined.
//!
//! Tables are not validated on construction. Completeness, duplicates and
//! cardinality are checked when a table is handed to the
//! [`Matcher`](crate::engine::Matcher).

use std::fmt::Debug;
use std::hash::Hash;

/// Anything usable as an opaque participant identifier.
///
/// Names (`&str`, `String`) and integers both qualify.
pub trait Participant: Clone + Eq + Hash + Debug {}

impl<T: Clone + Eq + Hash + Debug> Participant for T {}

/// Ranked preference lists for every participant of one side.
///
/// `O` is the owning side's identifier, `T` the opposite side's.
///
/// ## Example
///
/// ```
/// use stable_match::types::PreferenceTable;
///
/// let table: PreferenceTable<&str, &str> = [
///     ("x", vec!["a", "b"]),
///     ("y", vec!["b", "a"]),
/// ]
/// .into_iter()
/// .collect();
///
/// assert_eq!(table.len(), 2);
/// assert_eq!(table.get(&"y"), Some(&["b", "a"][..]));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreferenceTable<O, T> {
    entries: Vec<(O, Vec<T>)>,
}

impl<O, T> Default for PreferenceTable<O, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<O, T> PreferenceTable<O, T> {
    /// Create an empty table
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Create an empty table with room for `capacity` owners
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Append an owner with its preference list, best first.
    ///
    /// Inserting the same owner twice is not rejected here; the matcher
    /// reports it as invalid input.
    pub fn insert<I>(&mut self, owner: O, preferences: I)
    where
        I: IntoIterator<Item = T>,
    {
        self.entries.push((owner, preferences.into_iter().collect()));
    }

    /// Number of owners in the table
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Owners in insertion order
    pub fn owners(&self) -> impl Iterator<Item = &O> {
        self.entries.iter().map(|(owner, _)| owner)
    }

    /// `(owner, preference list)` in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&O, &[T])> {
        self.entries
            .iter()
            .map(|(owner, prefs)| (owner, prefs.as_slice()))
    }

    /// Owner at a given index
    pub fn owner_at(&self, index: usize) -> Option<&O> {
        self.entries.get(index).map(|(owner, _)| owner)
    }
}

impl<O: PartialEq, T> PreferenceTable<O, T> {
    /// Preference list of `owner` (first match if the owner is repeated)
    pub fn get(&self, owner: &O) -> Option<&[T]> {
        self.entries
            .iter()
            .find(|(o, _)| o == owner)
            .map(|(_, prefs)| prefs.as_slice())
    }
}

impl<O, T, I> FromIterator<(O, I)> for PreferenceTable<O, T>
where
    I: IntoIterator<Item = T>,
{
    fn from_iter<It: IntoIterator<Item = (O, I)>>(iter: It) -> Self {
        let mut table = Self::new();
        for (owner, prefs) in iter {
            table.insert(owner, prefs);
        }
        table
    }
}

impl<O, T> From<Vec<(O, Vec<T>)>> for PreferenceTable<O, T> {
    fn from(entries: Vec<(O, Vec<T>)>) -> Self {
        Self { entries }
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
