//! The PoA governance mechanism: a header-driven state machine.
//!
//! Invoked once per header by the outer block processor, in block order.
//! Given the parent snapshot and the new header with its recovered proposer,
//! it produces the successor snapshot and decides whether to checkpoint or
//! trim history.
//!
//! # State Machine Flow
//!
//! 1. **Checkpoint header** → reset open ballots, seal, trim old history
//! 2. **Zero miner** → no governance intent, pass through
//! 3. **Vote header** → decode intent from the nonce, record the ballot,
//!    tally, and apply the membership change on strict majority
//!
//! Per candidate address the governance state is one of: member with no
//! active campaign, member pending eviction, non-member with no campaign,
//! or non-member pending admission. Crossing the majority threshold is the
//! only transition between member and non-member, and it always closes the
//! ballot on that candidate.

use std::sync::Arc;
use tracing::{debug, info, instrument};

use ibft_store::SnapshotStore;
use ibft_types::{Address, Header, Nonce, Snapshot, Vote};

use crate::config::PoaConfig;
use crate::error::GovernanceError;
use crate::hooks::{HookPayload, ProcessHeadersParams, SnapshotSummary};
use crate::metrics;

/// Proof-of-Authority governance mechanism.
///
/// A plain value: the epoch cadence, the vote sentinels and the snapshot
/// store are injected at construction, and every hook is deterministic with
/// respect to its inputs. One instance serves one chain head, driven
/// sequentially; the working snapshot is never exposed mid-mutation.
pub struct PoaGovernance {
    config: PoaConfig,
    store: Arc<dyn SnapshotStore>,
}

impl PoaGovernance {
    /// Create the mechanism.
    ///
    /// # Panics
    ///
    /// Panics if `config.epoch_size` is zero. A zero cadence indicates
    /// driver/configuration skew and cannot be processed meaningfully.
    pub fn new(config: PoaConfig, store: Arc<dyn SnapshotStore>) -> Self {
        assert!(config.epoch_size > 0, "epoch size must be positive");
        Self { config, store }
    }

    /// The active configuration.
    pub fn config(&self) -> &PoaConfig {
        &self.config
    }

    /// Dispatch a typed hook payload.
    ///
    /// This is the hook registry the driver sees: one entry per hook, with
    /// the payload shape fixed at compile time.
    pub fn dispatch(&self, payload: HookPayload<'_>) -> Result<(), GovernanceError> {
        match payload {
            HookPayload::AcceptStateLog { snap } => {
                self.accept_state_log(snap);
                Ok(())
            }
            HookPayload::VerifyHeaders { nonce } => self.verify_headers(nonce),
            HookPayload::ProcessHeaders(params) => self.process_headers(params),
        }
    }

    /// `AcceptStateLog` hook: emit an observability record for a snapshot.
    pub fn accept_state_log(&self, snap: &Snapshot) -> SnapshotSummary {
        let summary = SnapshotSummary {
            validators: snap.set.len(),
            votes: snap.votes.len(),
        };
        metrics::record_snapshot(summary.validators, summary.votes);
        info!(
            number = snap.number,
            validators = summary.validators,
            votes = summary.votes,
            "current snapshot"
        );
        summary
    }

    /// `VerifyHeaders` hook: a header nonce must be one of the two vote
    /// sentinels.
    ///
    /// A block without any vote is expressed by zeroing the miner field, in
    /// which case the nonce value is never consulted, but it still has to
    /// be well-formed.
    pub fn verify_headers(&self, nonce: Nonce) -> Result<(), GovernanceError> {
        if nonce != self.config.nonce_auth_vote && nonce != self.config.nonce_drop_vote {
            return Err(GovernanceError::InvalidVoteNonce);
        }
        Ok(())
    }

    /// `ProcessHeaders` hook: advance the governance state over one header.
    ///
    /// Mutates the working snapshot in place. Validation failures reject the
    /// header with the snapshot untouched; a store failure mid-checkpoint
    /// surfaces unchanged and the caller discards the working snapshot.
    #[instrument(skip(self, params), fields(
        number = params.header.number,
        miner = %params.header.miner,
        proposer = %params.proposer,
    ))]
    pub fn process_headers(&self, params: ProcessHeadersParams<'_>) -> Result<(), GovernanceError> {
        let ProcessHeadersParams {
            header,
            snap,
            parent_snap: _,
            proposer,
            save_snap,
        } = params;
        let number = header.number;

        if self.config.is_checkpoint(number) {
            // Checkpoint blocks reset the open ballots and cannot carry a
            // proposal of their own.
            snap.votes.clear();
            save_snap(header, snap)?;
            metrics::record_checkpoint();

            // Trim snapshots from two epochs before this one.
            let epoch = number / self.config.epoch_size;
            if epoch > 2 {
                let purge_block = (epoch - 2) * self.config.epoch_size;
                self.store.delete_lower(purge_block)?;
            }
            debug!(number, "checkpoint sealed");
            return Ok(());
        }

        // A zeroed miner field means the header carries no governance
        // intent; the nonce is not consulted.
        if header.miner == Address::ZERO {
            return Ok(());
        }

        // The nonce selects the action.
        let authorize = if header.nonce == self.config.nonce_auth_vote {
            true
        } else if header.nonce == self.config.nonce_drop_vote {
            false
        } else {
            return Err(GovernanceError::InvalidVoteNonce);
        };

        let candidate = header.miner;

        // Re-proposing a present member or re-dropping an absent candidate
        // is a no-op, not an error.
        if snap.set.contains(candidate) == authorize {
            return Ok(());
        }

        let cast = snap.count_votes(|v| v.voter == proposer && v.candidate == candidate);
        if cast > 1 {
            // The inherited snapshot already violates one-ballot-per-pair;
            // reject the header rather than compound the corruption.
            return Err(GovernanceError::DuplicateVote);
        }
        if cast == 0 {
            snap.votes.push(Vote::new(proposer, candidate, authorize));
            metrics::record_vote_cast();
            debug!(voter = %proposer, candidate = %candidate, authorize, "ballot cast");
        }

        // Tally every open ballot naming the candidate, both directions,
        // against the set size at this moment.
        let tally = snap.tally(candidate);
        if tally > snap.set.len() / 2 {
            if authorize {
                snap.set.add(candidate);
                metrics::record_validator_admitted();
                info!(candidate = %candidate, tally, "validator admitted");
            } else {
                snap.set.remove(candidate);
                // The ejected validator loses its outstanding ballots.
                snap.remove_votes(|v| v.voter == candidate);
                metrics::record_validator_evicted();
                info!(candidate = %candidate, tally, "validator evicted");
            }

            // Either way, the ballot on this candidate is closed. Pending
            // tallies for other candidates are not recomputed in this
            // header even if the purge shrank them.
            snap.remove_votes(|v| v.candidate == candidate);
        }

        Ok(())
    }

    /// Outer-driver adapter: run the header hook against a clone of the
    /// parent snapshot and seal the result into the store.
    ///
    /// Sealing via the store is the publication point. Checkpoint headers
    /// always seal through the hook's `save_snap` invocation, even on an
    /// idle chain; an untouched vote header (no membership or ballot
    /// change) leaves the store as-is. On error the working snapshot is
    /// discarded, never partially saved.
    pub fn apply_header(
        &self,
        header: &Header,
        parent: &Snapshot,
        proposer: Address,
    ) -> Result<Snapshot, GovernanceError> {
        let mut snap = parent.next(header.number);

        let store = Arc::clone(&self.store);
        let mut save_snap =
            |_header: &Header, sealed: &Snapshot| store.put(sealed.clone());

        self.process_headers(ProcessHeadersParams {
            header,
            snap: &mut snap,
            parent_snap: parent,
            proposer,
            save_snap: &mut save_snap,
        })?;

        if snap.set != parent.set || snap.votes != parent.votes {
            self.store.put(snap.clone())?;
        }
        Ok(snap)
    }
}
