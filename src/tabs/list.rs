//! Nonce-ordered item sequences, the building block shared by the sender and
//! tip indexes.

use crate::{item::TxItem, traits::PoolTransaction};
use alloy_primitives::TxHash;
use std::{collections::BTreeMap, sync::Arc};

/// Insertion-ordered list of items sharing one (sender, nonce) pair.
///
/// Same-nonce duplicates are permitted; which of them ultimately wins is
/// resolved by the caller, not the store.
#[derive(Debug)]
pub(crate) struct ItemList<T: PoolTransaction>(Vec<Arc<TxItem<T>>>);

impl<T: PoolTransaction> ItemList<T> {
    fn new(item: Arc<TxItem<T>>) -> Self {
        Self(vec![item])
    }

    fn push(&mut self, item: Arc<TxItem<T>>) {
        self.0.push(item);
    }

    fn remove(&mut self, hash: &TxHash) -> Option<Arc<TxItem<T>>> {
        let pos = self.0.iter().position(|item| item.hash() == hash)?;
        Some(self.0.remove(pos))
    }

    /// Items in insertion order.
    pub(crate) fn iter(&self) -> std::slice::Iter<'_, Arc<TxItem<T>>> {
        self.0.iter()
    }

    pub(crate) fn find(&self, hash: &TxHash) -> Option<&Arc<TxItem<T>>> {
        self.0.iter().find(|item| item.hash() == hash)
    }

    fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// An ordered map nonce → [`ItemList`], with an incrementally maintained
/// item count.
///
/// Iteration order is nonce ascending, then insertion order; the descending
/// iterator is its exact reverse.
#[derive(Debug)]
pub(crate) struct NonceList<T: PoolTransaction> {
    items: BTreeMap<u64, ItemList<T>>,
    len: usize,
}

impl<T: PoolTransaction> Default for NonceList<T> {
    fn default() -> Self {
        Self { items: BTreeMap::new(), len: 0 }
    }
}

impl<T: PoolTransaction> NonceList<T> {
    pub(crate) fn insert(&mut self, item: Arc<TxItem<T>>) {
        match self.items.entry(item.nonce()) {
            std::collections::btree_map::Entry::Vacant(entry) => {
                entry.insert(ItemList::new(item));
            }
            std::collections::btree_map::Entry::Occupied(mut entry) => {
                entry.get_mut().push(item);
            }
        }
        self.len += 1;
    }

    /// Removes the item with the given nonce and hash.
    pub(crate) fn remove(&mut self, nonce: u64, hash: &TxHash) -> Option<Arc<TxItem<T>>> {
        let list = self.items.get_mut(&nonce)?;
        let removed = list.remove(hash)?;
        if list.is_empty() {
            self.items.remove(&nonce);
        }
        self.len -= 1;
        Some(removed)
    }

    /// The items stored under exactly this nonce.
    pub(crate) fn eq(&self, nonce: u64) -> Option<&ItemList<T>> {
        self.items.get(&nonce)
    }

    pub(crate) fn find(&self, nonce: u64, hash: &TxHash) -> Option<&Arc<TxItem<T>>> {
        self.items.get(&nonce).and_then(|list| list.find(hash))
    }

    /// All items, nonce ascending then insertion order.
    pub(crate) fn iter(&self) -> impl Iterator<Item = &Arc<TxItem<T>>> + '_ {
        self.items.values().flat_map(|list| list.iter())
    }

    /// Exact reverse of [`Self::iter`].
    pub(crate) fn iter_desc(&self) -> impl Iterator<Item = &Arc<TxItem<T>>> + '_ {
        self.items.values().rev().flat_map(|list| list.iter().rev())
    }

    /// The first item of the lowest nonce.
    pub(crate) fn first(&self) -> Option<&Arc<TxItem<T>>> {
        self.items.values().next().and_then(|list| list.iter().next())
    }

    /// The last item of the highest nonce.
    pub(crate) fn last(&self) -> Option<&Arc<TxItem<T>>> {
        self.items.values().next_back().and_then(|list| list.iter().next_back())
    }

    pub(crate) fn len(&self) -> usize {
        self.len
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.len == 0
    }
}
