//! Bounded FIFO of recently rejected transactions, kept for diagnostics.

use crate::{item::TxItem, traits::PoolTransaction};
use alloy_primitives::TxHash;
use std::{
    collections::{HashMap, VecDeque},
    sync::Arc,
};

/// Holds up to `max_rejects` rejected items with their reasons; once the cap
/// is exceeded the oldest entry is silently dropped.
#[derive(Debug)]
pub(crate) struct Wastebasket<T: PoolTransaction> {
    max_rejects: usize,
    /// Oldest entry at the front.
    items: VecDeque<Arc<TxItem<T>>>,
    /// Newest entry per hash.
    by_hash: HashMap<TxHash, Arc<TxItem<T>>>,
}

impl<T: PoolTransaction> Wastebasket<T> {
    pub(crate) fn new(max_rejects: usize) -> Self {
        Self {
            max_rejects,
            items: VecDeque::with_capacity(max_rejects.min(1024)),
            by_hash: HashMap::new(),
        }
    }

    /// Appends a rejected item, returning the entry evicted to stay within
    /// the cap.
    pub(crate) fn push(&mut self, item: Arc<TxItem<T>>) -> Option<Arc<TxItem<T>>> {
        self.by_hash.insert(*item.hash(), Arc::clone(&item));
        self.items.push_back(item);

        if self.items.len() <= self.max_rejects {
            return None
        }
        let evicted = self.items.pop_front()?;
        // the hash may have re-entered since, only unmap this exact record
        if let Some(current) = self.by_hash.get(evicted.hash()) {
            if Arc::ptr_eq(current, &evicted) {
                self.by_hash.remove(evicted.hash());
            }
        }
        Some(evicted)
    }

    /// The most recent wastebasket entry for the hash.
    pub(crate) fn get(&self, hash: &TxHash) -> Option<&Arc<TxItem<T>>> {
        self.by_hash.get(hash)
    }

    /// Entries in rejection order, oldest first.
    pub(crate) fn iter(&self) -> impl Iterator<Item = &Arc<TxItem<T>>> + '_ {
        self.items.iter()
    }

    pub(crate) fn len(&self) -> usize {
        self.items.len()
    }

    pub(crate) fn capacity(&self) -> usize {
        self.max_rejects
    }

    /// Empties the wastebasket, returning how many entries were discarded.
    pub(crate) fn flush(&mut self) -> usize {
        let count = self.items.len();
        self.items.clear();
        self.by_hash.clear();
        count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        error::TxErrorKind,
        test_utils::{MockTransaction, MockTransactionFactory},
    };

    #[test]
    fn fifo_cap() {
        let mut f = MockTransactionFactory::default();
        let mut basket = Wastebasket::new(2);

        let items: Vec<_> =
            (0..3).map(|_| f.item(MockTransaction::legacy())).collect();
        for item in &items {
            item.set_reject_reason(TxErrorKind::Unspecified);
        }

        assert!(basket.push(Arc::clone(&items[0])).is_none());
        assert!(basket.push(Arc::clone(&items[1])).is_none());
        let evicted = basket.push(Arc::clone(&items[2])).unwrap();
        assert_eq!(evicted.hash(), items[0].hash());

        assert_eq!(basket.len(), 2);
        assert!(basket.get(items[0].hash()).is_none());
        assert!(basket.get(items[2].hash()).is_some());

        let order: Vec<_> = basket.iter().map(|item| *item.hash()).collect();
        assert_eq!(order, vec![*items[1].hash(), *items[2].hash()]);
    }

    #[test]
    fn flush_reports_occupancy() {
        let mut f = MockTransactionFactory::default();
        let mut basket = Wastebasket::new(8);
        for _ in 0..3 {
            basket.push(f.item(MockTransaction::legacy()));
        }
        assert_eq!(basket.capacity(), 8);
        assert_eq!(basket.flush(), 3);
        assert_eq!(basket.len(), 0);
        assert_eq!(basket.flush(), 0);
    }
}
