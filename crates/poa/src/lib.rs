//! Proof-of-Authority validator-set governance for an IBFT consensus engine.
//!
//! This crate implements the vote-tallying state machine that lets the
//! active validators admit new members or evict present ones at block
//! boundaries:
//!
//! - [`PoaGovernance`]: the header-driven governance mechanism
//! - [`HookPayload`]: typed payloads for the three driver-facing hooks
//! - [`PoaConfig`]: checkpoint cadence and the vote nonce sentinels
//! - [`GovernanceError`]: validation failures and surfaced store errors
//!
//! # Architecture
//!
//! The mechanism is driven synchronously by the outer block processor, one
//! header at a time:
//!
//! ```text
//! header + parent snapshot → ProcessHeaders → successor snapshot
//! ```
//!
//! The state machine is:
//!
//! - **Synchronous**: no suspension point exists inside a hook; it runs to
//!   completion before the next header is considered.
//! - **Deterministic**: identical inputs yield identical post-state.
//! - **Pure-ish**: mutates the working snapshot in place, and touches the
//!   outside world only through the injected store and the `save_snap`
//!   sealing callback.
//!
//! # Epochs
//!
//! Every `epoch_size` blocks a checkpoint header resets the open ballots,
//! seals the snapshot, and trims stored history older than two epochs.
//! Checkpoint headers carry no proposal of their own.

mod config;
mod error;
mod hooks;
mod mechanism;
pub mod metrics;

pub use config::{PoaConfig, DEFAULT_EPOCH_SIZE};
pub use error::GovernanceError;
pub use hooks::{HookPayload, ProcessHeadersParams, SaveSnap, SnapshotSummary};
pub use mechanism::PoaGovernance;
