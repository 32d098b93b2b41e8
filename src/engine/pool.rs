//! Pool of free proposers.
//!
//! The deferred-acceptance loop only needs "some free proposer"; which one is
//! a policy decision captured by [`Selection`]. Each policy gets the
//! container that makes its `pop` cheap.

use std::collections::{BTreeSet, VecDeque};

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::engine::Selection;

#[derive(Debug)]
pub(crate) enum FreePool {
    Ordered { free: BTreeSet<usize>, highest: bool },
    Queue(VecDeque<usize>),
    Stack(Vec<usize>),
    Random { free: Vec<usize>, rng: ChaCha8Rng },
}

impl FreePool {
    /// Pool holding proposers `0..n`, all free
    pub(crate) fn new(selection: Selection, n: usize) -> Self {
        match selection {
            Selection::LowestIndex => FreePool::Ordered {
                free: (0..n).collect(),
                highest: false,
            },
            Selection::HighestIndex => FreePool::Ordered {
                free: (0..n).collect(),
                highest: true,
            },
            Selection::Fifo => FreePool::Queue((0..n).collect()),
            // Reversed so that proposer 0 is on top
            Selection::Lifo => FreePool::Stack((0..n).rev().collect()),
            Selection::Random { seed } => FreePool::Random {
                free: (0..n).collect(),
                rng: ChaCha8Rng::seed_from_u64(seed),
            },
        }
    }

    /// Return a proposer to the pool
    pub(crate) fn push(&mut self, proposer: usize) {
        match self {
            FreePool::Ordered { free, .. } => {
                free.insert(proposer);
            }
            FreePool::Queue(queue) => queue.push_back(proposer),
            FreePool::Stack(stack) => stack.push(proposer),
            FreePool::Random { free, .. } => free.push(proposer),
        }
    }

    /// Take the next proposer to act
    pub(crate) fn pop(&mut self) -> Option<usize> {
        match self {
            FreePool::Ordered { free, highest: false } => free.pop_first(),
            FreePool::Ordered { free, highest: true } => free.pop_last(),
            FreePool::Queue(queue) => queue.pop_front(),
            FreePool::Stack(stack) => stack.pop(),
            FreePool::Random { free, rng } => {
                if free.is_empty() {
                    None
                } else {
                    let index = rng.gen_range(0..free.len());
                    Some(free.swap_remove(index))
                }
            }
        }
    }

    pub(crate) fn len(&self) -> usize {
        match self {
            FreePool::Ordered { free, .. } => free.len(),
            FreePool::Queue(queue) => queue.len(),
            FreePool::Stack(stack) => stack.len(),
            FreePool::Random { free, .. } => free.len(),
        }
    }
}
