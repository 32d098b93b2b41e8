//! Matcher configuration.

/// Order in which free proposers are picked.
///
/// Every variant yields the same pairing and makes the same set of
/// proposals; only their order and the rejection/breakup split differ.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    /// Lowest-index free proposer first
    #[default]
    LowestIndex,
    /// Highest-index free proposer first
    HighestIndex,
    /// Proposers queue up in the order they became free
    Fifo,
    /// Most recently freed proposer goes next
    Lifo,
    /// Uniformly random free proposer from a seeded ChaCha8 stream
    Random { seed: u64 },
}

/// Configuration for a [`Matcher`](crate::engine::Matcher).
///
/// ```
/// use stable_match::engine::{MatcherConfig, Selection};
///
/// let config = MatcherConfig::new()
///     .with_selection(Selection::Fifo)
///     .with_events(true);
/// assert!(config.record_events);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MatcherConfig {
    pub selection: Selection,

    /// Keep every proposal in [`Matching::events`](crate::types::Matching::events)
    pub record_events: bool,
}

impl MatcherConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_selection(mut self, selection: Selection) -> Self {
        self.selection = selection;
        self
    }

    pub fn with_events(mut self, record_events: bool) -> Self {
        self.record_events = record_events;
        self
    }
}
