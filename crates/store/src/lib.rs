//! Snapshot persistence for the governance core.
//!
//! The store is an injected collaborator of the governance mechanism: the
//! block processor writes sealed snapshots in block order, and query paths
//! (RPC "who were the validators at block N?") read them concurrently.
//!
//! Retention is bounded. At each checkpoint the governance engine trims
//! everything below the purge horizon, and a purged number reads back as
//! not-found rather than stale data.
//!
//! All operations are synchronous. Callers in async contexts should use
//! `spawn_blocking` for fallible disk-backed implementations; the in-memory
//! store never blocks beyond a short lock hold.

use ibft_types::Snapshot;
use parking_lot::RwLock;
use std::collections::BTreeMap;
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

/// Error type for store operations.
///
/// Surfaced unchanged through the governance hooks; the outer block
/// processor decides retry policy.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Backend failure.
    #[error("snapshot store failure: {0}")]
    Backend(String),
}

/// Keyed snapshot persistence, append-only by block number.
///
/// Only the block processor writes; writes are totally ordered by block
/// number. Implementations must be safe for concurrent readers.
pub trait SnapshotStore: Send + Sync {
    /// Snapshot sealed at `number`, or `None` if absent or purged.
    fn get(&self, number: u64) -> Result<Option<Arc<Snapshot>>, StoreError>;

    /// Persist a sealed snapshot. Idempotent by number: re-sealing the same
    /// number replaces the entry.
    fn put(&self, snapshot: Snapshot) -> Result<(), StoreError>;

    /// Drop every snapshot with number strictly below `number`.
    fn delete_lower(&self, number: u64) -> Result<(), StoreError>;
}

/// In-memory store backed by an ordered map.
///
/// Sealed snapshots are handed out as shared `Arc`s: concurrent readers
/// never copy and never observe an in-flight working snapshot, since only
/// sealed values enter the map.
#[derive(Debug, Default)]
pub struct InMemorySnapshotStore {
    snapshots: RwLock<BTreeMap<u64, Arc<Snapshot>>>,
}

impl InMemorySnapshotStore {
    /// Empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Most recently sealed snapshot, if any.
    pub fn latest(&self) -> Option<Arc<Snapshot>> {
        self.snapshots.read().values().next_back().cloned()
    }

    /// Number of retained snapshots.
    pub fn len(&self) -> usize {
        self.snapshots.read().len()
    }

    /// Whether no snapshot is retained.
    pub fn is_empty(&self) -> bool {
        self.snapshots.read().is_empty()
    }
}

impl SnapshotStore for InMemorySnapshotStore {
    fn get(&self, number: u64) -> Result<Option<Arc<Snapshot>>, StoreError> {
        Ok(self.snapshots.read().get(&number).cloned())
    }

    fn put(&self, snapshot: Snapshot) -> Result<(), StoreError> {
        self.snapshots
            .write()
            .insert(snapshot.number, Arc::new(snapshot));
        Ok(())
    }

    fn delete_lower(&self, number: u64) -> Result<(), StoreError> {
        let mut snapshots = self.snapshots.write();
        let retained = snapshots.split_off(&number);
        let purged = snapshots.len();
        *snapshots = retained;
        if purged > 0 {
            debug!(below = number, purged, "trimmed snapshot history");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ibft_types::{Address, ValidatorSet};

    fn snapshot(number: u64) -> Snapshot {
        let set: ValidatorSet = [Address::new([1; 20]), Address::new([2; 20])]
            .into_iter()
            .collect();
        Snapshot::new(number, set)
    }

    #[test]
    fn test_put_then_get() {
        let store = InMemorySnapshotStore::new();
        store.put(snapshot(5)).unwrap();

        let found = store.get(5).unwrap().unwrap();
        assert_eq!(found.number, 5);
        assert!(store.get(6).unwrap().is_none());
    }

    #[test]
    fn test_put_is_idempotent_by_number() {
        let store = InMemorySnapshotStore::new();
        store.put(snapshot(5)).unwrap();

        let mut replacement = snapshot(5);
        replacement.set.add(Address::new([9; 20]));
        store.put(replacement.clone()).unwrap();

        assert_eq!(store.len(), 1);
        assert_eq!(*store.get(5).unwrap().unwrap(), replacement);
    }

    #[test]
    fn test_delete_lower_is_strict() {
        let store = InMemorySnapshotStore::new();
        for n in [0, 10, 20, 30] {
            store.put(snapshot(n)).unwrap();
        }

        store.delete_lower(20).unwrap();

        assert!(store.get(0).unwrap().is_none());
        assert!(store.get(10).unwrap().is_none());
        // The boundary itself survives.
        assert!(store.get(20).unwrap().is_some());
        assert!(store.get(30).unwrap().is_some());
    }

    #[test]
    fn test_purged_range_reads_as_not_found() {
        let store = InMemorySnapshotStore::new();
        store.put(snapshot(10)).unwrap();
        store.delete_lower(100).unwrap();

        assert!(store.get(10).unwrap().is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn test_latest() {
        let store = InMemorySnapshotStore::new();
        assert!(store.latest().is_none());

        store.put(snapshot(10)).unwrap();
        store.put(snapshot(30)).unwrap();
        store.put(snapshot(20)).unwrap();

        assert_eq!(store.latest().unwrap().number, 30);
    }

    #[test]
    fn test_concurrent_readers_on_sealed_snapshots() {
        let store = Arc::new(InMemorySnapshotStore::new());
        for n in 0..64 {
            store.put(snapshot(n)).unwrap();
        }

        let readers: Vec<_> = (0..4)
            .map(|_| {
                let store = Arc::clone(&store);
                std::thread::spawn(move || {
                    for n in 0..64 {
                        let snap = store.get(n).unwrap().unwrap();
                        assert_eq!(snap.number, n);
                    }
                })
            })
            .collect();

        for reader in readers {
            reader.join().unwrap();
        }
    }
}
