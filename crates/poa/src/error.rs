//! Governance error taxonomy.

use ibft_store::StoreError;
use thiserror::Error;

/// Errors surfaced by the governance hooks.
///
/// Validation errors are fatal to the header under consideration, not to the
/// node: the caller rejects the block and does not retry, and the working
/// snapshot is discarded. Store failures pass through unchanged so the outer
/// block processor decides retry policy.
#[derive(Debug, Error)]
pub enum GovernanceError {
    /// Header nonce is neither the auth nor the drop sentinel.
    #[error("incorrect vote nonce")]
    InvalidVoteNonce,

    /// The inherited snapshot carries more than one ballot by the same
    /// validator for the same candidate.
    #[error("more than one vote per validator per candidate")]
    DuplicateVote,

    /// Snapshot store failure, surfaced unchanged.
    #[error(transparent)]
    Store(#[from] StoreError),
}
