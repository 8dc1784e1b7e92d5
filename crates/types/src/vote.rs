//! Pending governance ballots.

use crate::Address;
use serde::{Deserialize, Serialize};

/// A single open ballot: one validator proposing to admit or evict a
/// candidate.
///
/// Votes have value semantics and are never mutated after casting. The
/// voter must be an active validator at casting time; the candidate is
/// never the zero address (a zero miner field means "no vote" and is
/// filtered out before a ballot is built).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Vote {
    /// Validator that cast the ballot.
    pub voter: Address,

    /// Address being voted in or out.
    pub candidate: Address,

    /// `true` proposes admission, `false` proposes eviction.
    pub authorize: bool,
}

impl Vote {
    /// Build a ballot.
    pub fn new(voter: Address, candidate: Address, authorize: bool) -> Self {
        Self {
            voter,
            candidate,
            authorize,
        }
    }
}
