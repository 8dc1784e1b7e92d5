//! Ordered validator membership.

use crate::Address;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Ordered set of unique validator addresses.
///
/// Iteration preserves insertion order and [`ValidatorSet::remove`] never
/// reorders the survivors: downstream round-robin proposer selection indexes
/// into this order, and snapshot hashes depend on it being deterministic
/// across runs. Membership tests go through a hash index so `contains` is
/// O(1) expected even for large sets.
///
/// Serde round-trips through the ordered address list; the index is rebuilt
/// on deserialization.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "Vec<Address>", into = "Vec<Address>")]
pub struct ValidatorSet {
    validators: Vec<Address>,
    index: HashSet<Address>,
}

impl ValidatorSet {
    /// Empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Membership test.
    pub fn contains(&self, address: Address) -> bool {
        self.index.contains(&address)
    }

    /// Append a validator. Duplicates are silently rejected; surviving
    /// entries keep their positions.
    pub fn add(&mut self, address: Address) {
        if self.index.insert(address) {
            self.validators.push(address);
        }
    }

    /// Remove a validator if present; no-op otherwise. The survivors keep
    /// their relative order.
    pub fn remove(&mut self, address: Address) {
        if self.index.remove(&address) {
            self.validators.retain(|v| *v != address);
        }
    }

    /// Number of active validators.
    pub fn len(&self) -> usize {
        self.validators.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.validators.is_empty()
    }

    /// Validators in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Address> {
        self.validators.iter()
    }

    /// Validators in insertion order, as a slice.
    pub fn as_slice(&self) -> &[Address] {
        &self.validators
    }
}

impl PartialEq for ValidatorSet {
    fn eq(&self, other: &Self) -> bool {
        // The index is derived state; ordered membership is the identity.
        self.validators == other.validators
    }
}

impl Eq for ValidatorSet {}

impl From<Vec<Address>> for ValidatorSet {
    fn from(addresses: Vec<Address>) -> Self {
        addresses.into_iter().collect()
    }
}

impl From<ValidatorSet> for Vec<Address> {
    fn from(set: ValidatorSet) -> Self {
        set.validators
    }
}

impl FromIterator<Address> for ValidatorSet {
    fn from_iter<I: IntoIterator<Item = Address>>(iter: I) -> Self {
        let mut set = Self::new();
        for address in iter {
            set.add(address);
        }
        set
    }
}
