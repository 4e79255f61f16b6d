//! Sorted multimap tip → nonce-ordered items.
//!
//! Instantiated twice by the facade: once keyed by the signed effective gas
//! tip (rebuilt whenever the base fee changes) and once keyed by the
//! unadjusted gas tip cap.

use crate::{item::TxItem, tabs::list::NonceList, traits::PoolTransaction};
use alloy_primitives::TxHash;
use std::{
    collections::BTreeMap,
    ops::Bound::{Excluded, Included, Unbounded},
    sync::Arc,
};

/// A balanced ordered map tip → [`NonceList`] with an incremental item count.
///
/// Iteration yields items by ascending tip, ties broken by ascending nonce
/// and then insertion order; the descending iterator is the exact reverse.
#[derive(Debug)]
pub(crate) struct TipIndex<T: PoolTransaction> {
    tips: BTreeMap<i128, NonceList<T>>,
    len: usize,
}

impl<T: PoolTransaction> Default for TipIndex<T> {
    fn default() -> Self {
        Self { tips: BTreeMap::new(), len: 0 }
    }
}

impl<T: PoolTransaction> TipIndex<T> {
    pub(crate) fn insert(&mut self, tip: i128, item: Arc<TxItem<T>>) {
        self.tips.entry(tip).or_default().insert(item);
        self.len += 1;
    }

    pub(crate) fn remove(&mut self, tip: i128, nonce: u64, hash: &TxHash) -> bool {
        let Some(list) = self.tips.get_mut(&tip) else { return false };
        let removed = list.remove(nonce, hash).is_some();
        if removed {
            if list.is_empty() {
                self.tips.remove(&tip);
            }
            self.len -= 1;
        }
        removed
    }

    pub(crate) fn find(&self, tip: i128, nonce: u64, hash: &TxHash) -> Option<&Arc<TxItem<T>>> {
        self.tips.get(&tip).and_then(|list| list.find(nonce, hash))
    }

    /// The items priced at exactly this tip.
    pub(crate) fn eq(&self, tip: i128) -> Option<&NonceList<T>> {
        self.tips.get(&tip)
    }

    /// Items with tip ≥ the bound, ascending.
    pub(crate) fn ge(&self, tip: i128) -> impl Iterator<Item = &Arc<TxItem<T>>> + '_ {
        self.tips.range(tip..).flat_map(|(_, list)| list.iter())
    }

    /// Items with tip > the bound, ascending.
    pub(crate) fn gt(&self, tip: i128) -> impl Iterator<Item = &Arc<TxItem<T>>> + '_ {
        self.tips.range((Excluded(tip), Unbounded)).flat_map(|(_, list)| list.iter())
    }

    /// Items with tip ≤ the bound, ascending.
    pub(crate) fn le(&self, tip: i128) -> impl Iterator<Item = &Arc<TxItem<T>>> + '_ {
        self.tips.range((Unbounded, Included(tip))).flat_map(|(_, list)| list.iter())
    }

    /// Items with tip < the bound, ascending.
    pub(crate) fn lt(&self, tip: i128) -> impl Iterator<Item = &Arc<TxItem<T>>> + '_ {
        self.tips.range(..tip).flat_map(|(_, list)| list.iter())
    }

    /// (tip, items) pairs, ascending by tip.
    pub(crate) fn iter(&self) -> impl Iterator<Item = (i128, &NonceList<T>)> + '_ {
        self.tips.iter().map(|(tip, list)| (*tip, list))
    }

    /// All items, ascending by tip.
    pub(crate) fn items(&self) -> impl Iterator<Item = &Arc<TxItem<T>>> + '_ {
        self.tips.values().flat_map(|list| list.iter())
    }

    /// All items, descending by tip; the exact reverse of [`Self::items`].
    pub(crate) fn items_desc(&self) -> impl Iterator<Item = &Arc<TxItem<T>>> + '_ {
        self.tips.values().rev().flat_map(|list| list.iter_desc())
    }

    /// The lowest tip currently present.
    pub(crate) fn min_tip(&self) -> Option<i128> {
        self.tips.keys().next().copied()
    }

    /// The highest tip currently present.
    pub(crate) fn max_tip(&self) -> Option<i128> {
        self.tips.keys().next_back().copied()
    }

    pub(crate) fn len(&self) -> usize {
        self.len
    }
}
