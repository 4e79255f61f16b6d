//! Per-sender grouping with orthogonal locality and status sub-views.

use crate::{
    item::{TxItem, TxStatus},
    tabs::list::NonceList,
    traits::PoolTransaction,
};
use alloy_primitives::Address;
use std::{collections::HashMap, sync::Arc};

/// All of one sender's items, exposed through three orthogonal sub-views
/// over the same records: an `any` view, a view per locality, and a view per
/// [`TxStatus`]. Each sub-view is a [`NonceList`], so counts and nonce-ordered
/// traversal under any facet come without rescanning.
#[derive(Debug)]
pub(crate) struct SenderSchedule<T: PoolTransaction> {
    any: NonceList<T>,
    /// Indexed by `is_local as usize`.
    locality: [NonceList<T>; 2],
    /// Indexed by the status discriminant.
    status: [NonceList<T>; 3],
}

impl<T: PoolTransaction> Default for SenderSchedule<T> {
    fn default() -> Self {
        Self {
            any: Default::default(),
            locality: Default::default(),
            status: Default::default(),
        }
    }
}

impl<T: PoolTransaction> SenderSchedule<T> {
    fn insert(&mut self, item: Arc<TxItem<T>>) {
        self.locality[item.is_local() as usize].insert(Arc::clone(&item));
        self.status[item.status() as usize].insert(Arc::clone(&item));
        self.any.insert(item);
    }

    fn remove(&mut self, item: &TxItem<T>) -> bool {
        let (nonce, hash) = (item.nonce(), item.hash());
        let removed = self.any.remove(nonce, hash).is_some();
        if removed {
            self.locality[item.is_local() as usize].remove(nonce, hash);
            self.status[item.status() as usize].remove(nonce, hash);
        }
        removed
    }

    fn reassign_locality(&mut self, item: &Arc<TxItem<T>>, old_local: bool, local: bool) {
        if self.locality[old_local as usize].remove(item.nonce(), item.hash()).is_some() {
            self.locality[local as usize].insert(Arc::clone(item));
        }
    }

    fn reassign_status(&mut self, item: &Arc<TxItem<T>>, old_status: TxStatus, status: TxStatus) {
        if self.status[old_status as usize].remove(item.nonce(), item.hash()).is_some() {
            self.status[status as usize].insert(Arc::clone(item));
        }
    }

    /// All of the sender's items.
    pub(crate) fn any(&self) -> &NonceList<T> {
        &self.any
    }

    /// The sender's items of one locality.
    pub(crate) fn locality(&self, local: bool) -> &NonceList<T> {
        &self.locality[local as usize]
    }

    /// The sender's items in one lifecycle state.
    pub(crate) fn status(&self, status: TxStatus) -> &NonceList<T> {
        &self.status[status as usize]
    }
}

/// The sender index: address → [`SenderSchedule`].
#[derive(Debug)]
pub(crate) struct BySenderIndex<T: PoolTransaction> {
    senders: HashMap<Address, SenderSchedule<T>>,
}

impl<T: PoolTransaction> Default for BySenderIndex<T> {
    fn default() -> Self {
        Self { senders: HashMap::new() }
    }
}

impl<T: PoolTransaction> BySenderIndex<T> {
    pub(crate) fn insert(&mut self, item: Arc<TxItem<T>>) {
        self.senders.entry(item.sender()).or_default().insert(item);
    }

    pub(crate) fn remove(&mut self, item: &TxItem<T>) -> bool {
        let Some(schedule) = self.senders.get_mut(&item.sender()) else { return false };
        let removed = schedule.remove(item);
        if schedule.any.is_empty() {
            self.senders.remove(&item.sender());
        }
        removed
    }

    /// Moves the item between the locality sub-views of its sender.
    pub(crate) fn reassign_locality(&mut self, item: &Arc<TxItem<T>>, old_local: bool, local: bool) {
        if let Some(schedule) = self.senders.get_mut(&item.sender()) {
            schedule.reassign_locality(item, old_local, local);
        }
    }

    /// Moves the item between the status sub-views of its sender.
    pub(crate) fn reassign_status(
        &mut self,
        item: &Arc<TxItem<T>>,
        old_status: TxStatus,
        status: TxStatus,
    ) {
        if let Some(schedule) = self.senders.get_mut(&item.sender()) {
            schedule.reassign_status(item, old_status, status);
        }
    }

    pub(crate) fn schedule(&self, sender: &Address) -> Option<&SenderSchedule<T>> {
        self.senders.get(sender)
    }

    /// Addresses with at least one item of the given locality.
    pub(crate) fn accounts(&self, local: bool) -> Vec<Address> {
        self.senders
            .iter()
            .filter(|(_, schedule)| !schedule.locality(local).is_empty())
            .map(|(sender, _)| *sender)
            .collect()
    }

    /// All tracked sender addresses.
    pub(crate) fn senders(&self) -> impl Iterator<Item = &Address> + '_ {
        self.senders.keys()
    }

    /// Total item count across all senders.
    pub(crate) fn len(&self) -> usize {
        self.senders.values().map(|schedule| schedule.any.len()).sum()
    }
}
