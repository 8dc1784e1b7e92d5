//! Governance metrics using the native Prometheus client.
//!
//! Metrics are domain-specific rather than generic event counters. Use
//! traces for per-header detail during investigations.

use prometheus::{register_counter, register_gauge, Counter, Gauge};
use std::sync::OnceLock;

static METRICS: OnceLock<Metrics> = OnceLock::new();

/// Domain-specific governance metrics.
pub struct Metrics {
    /// Active validator count from the last observed snapshot.
    pub validators: Gauge,
    /// Open ballot count from the last observed snapshot.
    pub pending_votes: Gauge,
    /// Checkpoint headers processed.
    pub checkpoints: Counter,
    /// Ballots appended to a working snapshot.
    pub votes_cast: Counter,
    /// Candidates admitted by majority.
    pub validators_admitted: Counter,
    /// Members evicted by majority.
    pub validators_evicted: Counter,
}

impl Metrics {
    fn new() -> Self {
        Self {
            validators: register_gauge!(
                "ibft_poa_validators",
                "Active validator count from the last observed snapshot"
            )
            .unwrap(),

            pending_votes: register_gauge!(
                "ibft_poa_pending_votes",
                "Open ballot count from the last observed snapshot"
            )
            .unwrap(),

            checkpoints: register_counter!(
                "ibft_poa_checkpoints_total",
                "Total checkpoint headers processed"
            )
            .unwrap(),

            votes_cast: register_counter!(
                "ibft_poa_votes_cast_total",
                "Total ballots appended to a working snapshot"
            )
            .unwrap(),

            validators_admitted: register_counter!(
                "ibft_poa_validators_admitted_total",
                "Total candidates admitted by majority vote"
            )
            .unwrap(),

            validators_evicted: register_counter!(
                "ibft_poa_validators_evicted_total",
                "Total members evicted by majority vote"
            )
            .unwrap(),
        }
    }
}

/// Get or initialize the global metrics instance.
pub fn metrics() -> &'static Metrics {
    METRICS.get_or_init(Metrics::new)
}

/// Record an observed snapshot.
pub fn record_snapshot(validators: usize, votes: usize) {
    let m = metrics();
    m.validators.set(validators as f64);
    m.pending_votes.set(votes as f64);
}

/// Record a processed checkpoint header.
pub fn record_checkpoint() {
    metrics().checkpoints.inc();
}

/// Record a ballot appended to a working snapshot.
pub fn record_vote_cast() {
    metrics().votes_cast.inc();
}

/// Record a candidate admitted by majority.
pub fn record_validator_admitted() {
    metrics().validators_admitted.inc();
}

/// Record a member evicted by majority.
pub fn record_validator_evicted() {
    metrics().validators_evicted.inc();
}
