//! Header fields consumed by the governance hook.

use crate::Address;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque 8-byte header nonce carrying the governance intent.
///
/// On a header that proposes a vote, the nonce must be bit-exact one of
/// [`NONCE_AUTH_VOTE`] or [`NONCE_DROP_VOTE`]; anything else is a hard
/// validation failure.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Nonce(pub [u8; 8]);

/// Magic nonce proposing admission of the miner address.
pub const NONCE_AUTH_VOTE: Nonce = Nonce([0xff; 8]);

/// Magic nonce proposing eviction of the miner address.
pub const NONCE_DROP_VOTE: Nonce = Nonce([0x00; 8]);

impl Nonce {
    /// Build a nonce from raw bytes.
    pub const fn new(bytes: [u8; 8]) -> Self {
        Nonce(bytes)
    }
}

impl fmt::Display for Nonce {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl fmt::Debug for Nonce {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Nonce({self})")
    }
}

/// The per-header fields the governance state machine reads.
///
/// The surrounding chain owns the full header; only the number, the miner
/// (vote candidate) and the nonce (vote direction) reach this layer. The
/// proposer credited with the header is recovered from the seal by an
/// external collaborator and travels separately.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Header {
    /// Block number.
    pub number: u64,

    /// Governance candidate address; [`Address::ZERO`] means "not a vote".
    pub miner: Address,

    /// Vote direction sentinel. Ignored when `miner` is zero.
    pub nonce: Nonce,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentinels_are_distinct() {
        assert_ne!(NONCE_AUTH_VOTE, NONCE_DROP_VOTE);
        assert_eq!(NONCE_AUTH_VOTE, Nonce::new([0xff; 8]));
        assert_eq!(NONCE_DROP_VOTE, Nonce::default());
    }
}
