//! Governance configuration.

use ibft_types::{Nonce, NONCE_AUTH_VOTE, NONCE_DROP_VOTE};

/// Default checkpoint cadence in blocks.
pub const DEFAULT_EPOCH_SIZE: u64 = 100_000;

/// Configuration for the PoA governance mechanism.
///
/// Passed explicitly at construction; the mechanism holds no back-reference
/// to the consensus engine it serves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoaConfig {
    /// Checkpoint cadence and purge horizon, in blocks. Must be positive.
    pub epoch_size: u64,

    /// Nonce sentinel proposing admission. Bit-exact, fixed by protocol.
    pub nonce_auth_vote: Nonce,

    /// Nonce sentinel proposing eviction. Bit-exact, fixed by protocol.
    pub nonce_drop_vote: Nonce,
}

impl Default for PoaConfig {
    fn default() -> Self {
        Self {
            epoch_size: DEFAULT_EPOCH_SIZE,
            nonce_auth_vote: NONCE_AUTH_VOTE,
            nonce_drop_vote: NONCE_DROP_VOTE,
        }
    }
}

impl PoaConfig {
    /// Config with a custom checkpoint cadence and the protocol sentinels.
    pub fn with_epoch_size(epoch_size: u64) -> Self {
        Self {
            epoch_size,
            ..Self::default()
        }
    }

    /// Whether `number` is a checkpoint block.
    pub fn is_checkpoint(&self, number: u64) -> bool {
        number % self.epoch_size == 0
    }
}
