//! Governance state as of one block.

use crate::{Address, ValidatorSet, Vote};
use serde::{Deserialize, Serialize};

/// The authoritative membership state as of one block: the active validator
/// set plus the ballots still open at that height.
///
/// # Lifecycle
///
/// A working snapshot is created by cloning its sealed parent via
/// [`Snapshot::next`], mutated in place by the header hook, then sealed into
/// the store. Sealed snapshots are immutable and safe to share with
/// concurrent readers.
///
/// # Invariants (when sealed)
///
/// - No two ballots share the same `(voter, candidate)` pair.
/// - Every ballot's voter is a member of `set`.
/// - `votes` is empty at every checkpoint number.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Block number this state is valid for.
    pub number: u64,

    /// Active validator set.
    pub set: ValidatorSet,

    /// Open ballots, in casting order.
    pub votes: Vec<Vote>,
}

impl Snapshot {
    /// Snapshot at `number` with the given validator set and no open ballots.
    pub fn new(number: u64, set: ValidatorSet) -> Self {
        Self {
            number,
            set,
            votes: Vec::new(),
        }
    }

    /// Clone this snapshot as the working state for a later header.
    pub fn next(&self, number: u64) -> Self {
        Self {
            number,
            set: self.set.clone(),
            votes: self.votes.clone(),
        }
    }

    /// Count ballots satisfying a predicate.
    pub fn count_votes(&self, pred: impl Fn(&Vote) -> bool) -> usize {
        self.votes.iter().filter(|v| pred(v)).count()
    }

    /// Drop every ballot satisfying a predicate, keeping the survivors'
    /// relative order.
    pub fn remove_votes(&mut self, pred: impl Fn(&Vote) -> bool) {
        self.votes.retain(|v| !pred(v));
    }

    /// Number of open ballots naming `candidate`, regardless of direction.
    pub fn tally(&self, candidate: Address) -> usize {
        self.count_votes(|v| v.candidate == candidate)
    }
}
