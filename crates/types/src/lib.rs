//! Foundation types for the IBFT PoA governance core.
//!
//! This crate provides the types shared by the governance mechanism and the
//! snapshot store:
//!
//! - **Identity**: [`Address`] with the zero sentinel
//! - **Header fields**: [`Header`], [`Nonce`] and the two vote sentinels
//! - **Membership**: [`ValidatorSet`] with stable insertion order
//! - **Governance state**: [`Vote`] and [`Snapshot`]
//!
//! # Design Philosophy
//!
//! This crate is self-contained with minimal dependencies. It does not depend
//! on any other workspace crates, making it the foundation layer. The wire
//! encodings of headers and snapshots are owned by the surrounding chain;
//! only the fields the governance state machine actually reads appear here.

mod address;
mod header;
mod snapshot;
mod validator_set;
mod vote;

pub use address::{Address, AddressParseError};
pub use header::{Header, Nonce, NONCE_AUTH_VOTE, NONCE_DROP_VOTE};
pub use snapshot::Snapshot;
pub use validator_set::ValidatorSet;
pub use vote::Vote;
