//! Typed hook payloads for the IBFT driver.
//!
//! The driver invokes the mechanism through three named hooks. Each hook has
//! exactly one payload shape, so a payload/type mismatch cannot compile:
//! there is no opaque dispatch and no runtime downcast anywhere on this
//! seam.

use ibft_store::StoreError;
use ibft_types::{Address, Header, Nonce, Snapshot};
use std::fmt;

/// Sealing callback invoked by the header hook to publish a working
/// snapshot. Receives the header being processed and the snapshot to seal;
/// sealing is the publication point for concurrent readers.
pub type SaveSnap<'a> = dyn FnMut(&Header, &Snapshot) -> Result<(), StoreError> + 'a;

/// Observability record emitted by the `AcceptStateLog` hook.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SnapshotSummary {
    /// Active validator count.
    pub validators: usize,

    /// Open ballot count.
    pub votes: usize,
}

/// Parameters for the `ProcessHeaders` hook.
pub struct ProcessHeadersParams<'a> {
    /// Header being processed.
    pub header: &'a Header,

    /// Working snapshot, mutated in place.
    pub snap: &'a mut Snapshot,

    /// Sealed parent snapshot. Read-only reference material; structural
    /// mutation happens only on the working snapshot.
    pub parent_snap: &'a Snapshot,

    /// Proposer recovered from the header seal by an external collaborator.
    pub proposer: Address,

    /// Sealing callback.
    pub save_snap: &'a mut SaveSnap<'a>,
}

impl fmt::Debug for ProcessHeadersParams<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProcessHeadersParams")
            .field("number", &self.header.number)
            .field("miner", &self.header.miner)
            .field("proposer", &self.proposer)
            .field("open_votes", &self.snap.votes.len())
            .finish()
    }
}

/// Typed payloads, one variant per published hook.
pub enum HookPayload<'a> {
    /// Emit an observability record for a snapshot.
    AcceptStateLog {
        /// Snapshot to summarize.
        snap: &'a Snapshot,
    },

    /// Validate that a header nonce is one of the two vote sentinels.
    VerifyHeaders {
        /// Nonce under validation.
        nonce: Nonce,
    },

    /// Drive the governance state machine over one header.
    ProcessHeaders(ProcessHeadersParams<'a>),
}
