//! Precomputed rank lookup.
//!
//! ## Layout
//!
//! A flat `n × n` arena: row `owner` holds, for every counterpart index, the
//! position of that counterpart in the owner's preference list. Lower is
//! better. Built once per call from validated index lists, then read-only.
//!
//! | Operation | Complexity |
//! |-----------|------------|
//! | Build     | O(n²)      |
//! | `rank`    | O(1)       |
//! | `prefers` | O(1)       |

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RankTable {
    n: usize,
    ranks: Vec<usize>,
}

impl RankTable {
    /// Build from preference lists already checked to be permutations of
    /// `0..n`.
    pub(crate) fn from_lists(lists: &[Vec<usize>]) -> Self {
        let n = lists.len();
        let mut ranks = vec![0; n * n];
        for (owner, list) in lists.iter().enumerate() {
            let row = &mut ranks[owner * n..(owner + 1) * n];
            for (position, &other) in list.iter().enumerate() {
                row[other] = position;
            }
        }
        Self { n, ranks }
    }

    /// Number of owners (and counterparts)
    #[inline]
    pub(crate) fn size(&self) -> usize {
        self.n
    }

    /// Position of `other` in `owner`'s list, 0 = first choice
    #[inline]
    pub(crate) fn rank(&self, owner: usize, other: usize) -> usize {
        self.ranks[owner * self.n + other]
    }

    /// Whether `owner` ranks `a` strictly above `b`
    #[inline]
    pub(crate) fn prefers(&self, owner: usize, a: usize, b: usize) -> bool {
        self.rank(owner, a) < self.rank(owner, b)
    }
}
