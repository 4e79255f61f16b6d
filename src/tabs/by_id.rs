//! The primary table: hash → item, partitioned by locality, with arrival
//! order preserved within each partition.

use crate::{item::TxItem, traits::PoolTransaction};
use alloy_primitives::TxHash;
use std::{
    collections::{BTreeMap, HashMap},
    ops::Bound::{Excluded, Unbounded},
    sync::Arc,
};

/// One locality partition: lookup by hash plus arrival-ordered traversal.
///
/// The hash map and the arrival map are kept in lock-step; the arrival key is
/// the item's submission id, stamped by [`ByIdIndex`].
#[derive(Debug)]
pub(crate) struct ArrivalTxs<T: PoolTransaction> {
    by_hash: HashMap<TxHash, Arc<TxItem<T>>>,
    by_arrival: BTreeMap<u64, Arc<TxItem<T>>>,
}

impl<T: PoolTransaction> Default for ArrivalTxs<T> {
    fn default() -> Self {
        Self { by_hash: HashMap::new(), by_arrival: BTreeMap::new() }
    }
}

impl<T: PoolTransaction> ArrivalTxs<T> {
    fn insert(&mut self, item: Arc<TxItem<T>>) {
        debug_assert!(
            !self.by_hash.contains_key(item.hash()),
            "hash already present in partition"
        );
        self.by_arrival.insert(item.submission_id(), Arc::clone(&item));
        self.by_hash.insert(*item.hash(), item);
    }

    fn remove(&mut self, hash: &TxHash) -> Option<Arc<TxItem<T>>> {
        let item = self.by_hash.remove(hash)?;
        self.by_arrival.remove(&item.submission_id());
        Some(item)
    }

    pub(crate) fn get(&self, hash: &TxHash) -> Option<&Arc<TxItem<T>>> {
        self.by_hash.get(hash)
    }

    pub(crate) fn contains(&self, hash: &TxHash) -> bool {
        self.by_hash.contains_key(hash)
    }

    /// The oldest item of the partition.
    pub(crate) fn first(&self) -> Option<&Arc<TxItem<T>>> {
        self.by_arrival.values().next()
    }

    /// The newest item of the partition.
    pub(crate) fn last(&self) -> Option<&Arc<TxItem<T>>> {
        self.by_arrival.values().next_back()
    }

    /// The item that arrived right after the given one.
    pub(crate) fn next(&self, hash: &TxHash) -> Option<&Arc<TxItem<T>>> {
        let id = self.by_hash.get(hash)?.submission_id();
        self.by_arrival.range((Excluded(id), Unbounded)).map(|(_, item)| item).next()
    }

    /// The item that arrived right before the given one.
    pub(crate) fn prev(&self, hash: &TxHash) -> Option<&Arc<TxItem<T>>> {
        let id = self.by_hash.get(hash)?.submission_id();
        self.by_arrival.range(..id).map(|(_, item)| item).next_back()
    }

    /// Items in arrival order, oldest first.
    pub(crate) fn iter(&self) -> impl Iterator<Item = &Arc<TxItem<T>>> + '_ {
        self.by_arrival.values()
    }

    pub(crate) fn len(&self) -> usize {
        self.by_hash.len()
    }

    #[cfg(test)]
    pub(crate) fn is_empty(&self) -> bool {
        self.by_hash.is_empty()
    }
}

/// The owning index: every live item is reachable here, in exactly one of the
/// two locality partitions.
///
/// Removal from this index is the destruction event for an item; secondary
/// indexes must be cleaned up first.
#[derive(Debug)]
pub(crate) struct ByIdIndex<T: PoolTransaction> {
    local: ArrivalTxs<T>,
    remote: ArrivalTxs<T>,
    /// Arrival sequence shared by both partitions.
    next_submission_id: u64,
}

impl<T: PoolTransaction> Default for ByIdIndex<T> {
    fn default() -> Self {
        Self { local: Default::default(), remote: Default::default(), next_submission_id: 0 }
    }
}

impl<T: PoolTransaction> ByIdIndex<T> {
    /// Appends the item to its locality partition, stamping the arrival
    /// sequence.
    ///
    /// The caller has already established that the hash is fresh.
    pub(crate) fn insert(&mut self, item: Arc<TxItem<T>>) {
        item.set_submission_id(self.next_id());
        self.partition_mut(item.is_local()).insert(item);
    }

    pub(crate) fn remove(&mut self, hash: &TxHash) -> Option<Arc<TxItem<T>>> {
        self.local.remove(hash).or_else(|| self.remote.remove(hash))
    }

    pub(crate) fn get(&self, hash: &TxHash) -> Option<&Arc<TxItem<T>>> {
        self.local.get(hash).or_else(|| self.remote.get(hash))
    }

    pub(crate) fn contains(&self, hash: &TxHash) -> bool {
        self.local.contains(hash) || self.remote.contains(hash)
    }

    /// Moves the item between partitions.
    ///
    /// The item receives a fresh arrival sequence: it becomes the newest of
    /// its destination partition.
    pub(crate) fn reassign_locality(&mut self, hash: &TxHash, local: bool) -> bool {
        let Some(item) = self.partition_mut(!local).remove(hash) else { return false };
        item.set_local(local);
        item.set_submission_id(self.next_id());
        self.partition_mut(local).insert(item);
        true
    }

    pub(crate) fn partition(&self, local: bool) -> &ArrivalTxs<T> {
        if local {
            &self.local
        } else {
            &self.remote
        }
    }

    fn partition_mut(&mut self, local: bool) -> &mut ArrivalTxs<T> {
        if local {
            &mut self.local
        } else {
            &mut self.remote
        }
    }

    /// All live items, remote partition first, each in arrival order.
    pub(crate) fn iter(&self) -> impl Iterator<Item = &Arc<TxItem<T>>> + '_ {
        self.remote.iter().chain(self.local.iter())
    }

    pub(crate) fn len(&self) -> usize {
        self.local.len() + self.remote.len()
    }

    fn next_id(&mut self) -> u64 {
        let id = self.next_submission_id;
        self.next_submission_id = self.next_submission_id.wrapping_add(1);
        id
    }
}
