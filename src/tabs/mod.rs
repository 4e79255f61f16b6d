//! The multi-index transaction store.
//!
//! One logical set of transactions, addressable through the primary hash
//! table and four derived views, all kept in lock-step by the [`TxTabs`]
//! facade: every write goes through it and transitions the store atomically
//! from one invariant-satisfying state to the next.

use crate::{
    config::PoolConfig,
    error::{ConsistencyError, PoolResult, TxError, TxErrorKind},
    item::{TxItem, TxStatus},
    metrics::TxPoolMetrics,
    traits::{PoolTransaction, TX_NO_BASE_FEE},
};
use alloy_primitives::{Address, TxHash};
use std::{fmt, sync::Arc, time::Instant};
use tracing::{debug, trace};

pub(crate) mod by_id;
pub(crate) mod by_sender;
pub(crate) mod by_tip;
pub(crate) mod list;
pub(crate) mod wastebasket;

use by_id::ByIdIndex;
use by_sender::BySenderIndex;
use by_tip::TipIndex;
use wastebasket::Wastebasket;

/// Incrementally maintained occupancy counters of the pool.
///
/// Every field is adjusted on the mutation that affects it; none is ever
/// recomputed by scanning.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct PoolCount {
    /// Live transactions across both locality partitions.
    pub total: usize,
    /// Live local transactions.
    pub local: usize,
    /// Live remote transactions.
    pub remote: usize,
    /// Live transactions in [`TxStatus::Queued`].
    pub queued: usize,
    /// Live transactions in [`TxStatus::Pending`].
    pub pending: usize,
    /// Live transactions in [`TxStatus::Staged`].
    pub staged: usize,
    /// Entries currently held by the wastebasket.
    pub rejected: usize,
}

/// A pool that manages transactions between submission and block inclusion.
///
/// This is the sole writer over all indexes; queries traverse whichever index
/// matches the access pattern.
#[cfg_attr(doc, aquamarine::aquamarine)]
/// ```mermaid
/// graph TB
///   driver[Job driver] --> |insert / delete / reassign / rebase| tabs[TxTabs]
///   subgraph Indexes
///     direction TB
///     id[(ById: hash, arrival, locality)]
///     sender[(BySender: locality x status x nonce)]
///     tip[(ByTip: effective gas tip)]
///     cap[(ByTipCap: gas tip cap)]
///   end
///   tabs --> id
///   tabs --> sender
///   tabs --> tip
///   tabs --> cap
///   tabs --> |reject| basket[(Wastebasket FIFO)]
/// ```
pub struct TxTabs<T: PoolTransaction> {
    /// Pool settings to enforce limits etc.
    config: PoolConfig,
    /// Base fee the effective tips are currently valued against.
    base_fee: i128,
    /// Tip cap floor currently enforced for remote transactions.
    min_gas_price: u128,
    /// Primary table, owns the items.
    by_id: ByIdIndex<T>,
    /// sender → locality/status/nonce sub-views.
    by_sender: BySenderIndex<T>,
    /// effective gas tip → items, rebuilt on base-fee changes.
    by_tip: TipIndex<T>,
    /// gas tip cap → items, independent of the base fee.
    by_tip_cap: TipIndex<T>,
    /// Recently rejected items.
    wastebasket: Wastebasket<T>,
    /// Occupancy counters.
    counts: PoolCount,
    /// Transaction pool metrics.
    metrics: TxPoolMetrics,
}

// === impl TxTabs ===

impl<T: PoolTransaction> TxTabs<T> {
    /// Create a new pool instance.
    pub fn new(config: PoolConfig) -> Self {
        let min_gas_price = config.min_gas_price;
        Self {
            wastebasket: Wastebasket::new(config.max_rejects),
            config,
            base_fee: TX_NO_BASE_FEE,
            min_gas_price,
            by_id: Default::default(),
            by_sender: Default::default(),
            by_tip: Default::default(),
            by_tip_cap: Default::default(),
            counts: Default::default(),
            metrics: Default::default(),
        }
    }

    /// The config the pool was created with.
    pub const fn config(&self) -> &PoolConfig {
        &self.config
    }

    /// Inserts a transaction, making it reachable through every index.
    ///
    /// The item enters the pool with the given locality, initial status and
    /// diagnostic note; classification between statuses afterwards is the
    /// caller's business. Local transactions bypass the price floor and the
    /// capacity check. On any error nothing is mutated.
    pub fn insert(
        &mut self,
        transaction: T,
        local: bool,
        status: TxStatus,
        info: impl Into<String>,
    ) -> PoolResult<TxHash> {
        self.insert_at(Instant::now(), transaction, local, status, info)
    }

    /// Same as [`Self::insert`] with an explicit insertion time.
    pub fn insert_at(
        &mut self,
        now: Instant,
        transaction: T,
        local: bool,
        status: TxStatus,
        info: impl Into<String>,
    ) -> PoolResult<TxHash> {
        let item = TxItem::new(transaction, local, status, info.into(), now)?;
        let hash = *item.hash();

        if self.by_id.contains(&hash) {
            return Err(TxError::new(hash, TxErrorKind::AlreadyKnown))
        }
        self.ensure_valid(&item)?;

        let item = Arc::new(item);
        self.by_sender.insert(Arc::clone(&item));
        self.by_tip.insert(item.effective_gas_tip(self.base_fee), Arc::clone(&item));
        self.by_tip_cap.insert(item.gas_tip_cap() as i128, Arc::clone(&item));
        self.by_id.insert(Arc::clone(&item));

        self.counts.total += 1;
        *self.locus_counter(item.is_local()) += 1;
        *self.status_counter(item.status()) += 1;
        self.metrics.inserted_transactions.increment(1);
        trace!(target: "txpool", %hash, sender = %item.sender(), nonce = item.nonce(), local, "inserted transaction");
        Ok(hash)
    }

    /// Inserts a batch, reporting one result per input transaction.
    pub fn insert_batch(
        &mut self,
        transactions: Vec<T>,
        local: bool,
        status: TxStatus,
        info: &str,
    ) -> Vec<PoolResult<TxHash>> {
        transactions
            .into_iter()
            .map(|transaction| self.insert(transaction, local, status, info))
            .collect()
    }

    /// Additional rules enforced in the context of this pool before an item
    /// is admitted.
    fn ensure_valid(&self, item: &TxItem<T>) -> Result<(), TxError> {
        let hash = *item.hash();
        let tx = item.transaction();

        if tx.input().len() > self.config.max_tx_input_bytes {
            return Err(TxError::new(hash, TxErrorKind::OversizedData))
        }
        if tx.gas_limit() > self.config.block_gas_limit {
            return Err(TxError::new(hash, TxErrorKind::GasLimit))
        }
        if !item.is_local() {
            if item.gas_tip_cap() < self.min_gas_price {
                return Err(TxError::new(hash, TxErrorKind::Underpriced))
            }
            if self.counts.total >= self.config.max_txs {
                return Err(TxError::new(hash, TxErrorKind::TxPoolOverflow))
            }
        }

        // same (sender, nonce) items must be outbid by the configured bump
        if let Some(incumbents) =
            self.by_sender.schedule(&item.sender()).and_then(|s| s.any().eq(item.nonce()))
        {
            let required = |cap: u128| cap.saturating_mul(100 + self.config.price_bump) / 100;
            if incumbents.iter().any(|existing| item.gas_tip_cap() < required(existing.gas_tip_cap()))
            {
                return Err(TxError::new(hash, TxErrorKind::ReplaceUnderpriced))
            }
        }
        Ok(())
    }

    /// Hard-removes the item from every index, returning it.
    pub fn delete(&mut self, hash: &TxHash) -> Option<Arc<TxItem<T>>> {
        let item = self.unlink(hash)?;
        self.metrics.removed_transactions.increment(1);
        trace!(target: "txpool", %hash, "deleted transaction");
        Some(item)
    }

    /// Removes the item from every index and retains it in the wastebasket
    /// with the given reason.
    pub fn reject(&mut self, hash: &TxHash, reason: TxErrorKind) -> Option<Arc<TxItem<T>>> {
        let item = self.unlink(hash)?;
        item.set_reject_reason(reason);
        if self.wastebasket.push(Arc::clone(&item)).is_none() {
            self.counts.rejected += 1;
        }
        self.metrics.rejected_transactions.increment(1);
        trace!(target: "txpool", %hash, %reason, "rejected transaction");
        Some(item)
    }

    /// Detaches the item from all indexes, secondary ones first; removal from
    /// the primary table is the destruction event.
    fn unlink(&mut self, hash: &TxHash) -> Option<Arc<TxItem<T>>> {
        let item = Arc::clone(self.by_id.get(hash)?);
        self.by_sender.remove(&item);
        self.by_tip.remove(item.effective_gas_tip(self.base_fee), item.nonce(), hash);
        self.by_tip_cap.remove(item.gas_tip_cap() as i128, item.nonce(), hash);
        let item = self.by_id.remove(hash)?;

        self.counts.total -= 1;
        *self.locus_counter(item.is_local()) -= 1;
        *self.status_counter(item.status()) -= 1;
        Some(item)
    }

    /// Moves the item between locality partitions, preserving identity.
    ///
    /// The item becomes the newest arrival of its destination partition; the
    /// tip indexes are unaffected. Returns false if the item is unknown or
    /// already has the requested locality.
    pub fn reassign_locality(&mut self, hash: &TxHash, local: bool) -> bool {
        let Some(item) = self.by_id.get(hash).map(Arc::clone) else { return false };
        let old_local = item.is_local();
        if old_local == local {
            return false
        }
        self.by_sender.reassign_locality(&item, old_local, local);
        self.by_id.reassign_locality(hash, local);
        *self.locus_counter(old_local) -= 1;
        *self.locus_counter(local) += 1;
        trace!(target: "txpool", %hash, local, "reassigned locality");
        true
    }

    /// Moves the item between status sub-views, preserving identity.
    ///
    /// Any transition is permitted; classification is external. Returns false
    /// if the item is unknown or already in the requested status.
    pub fn reassign_status(&mut self, hash: &TxHash, status: TxStatus) -> bool {
        let Some(item) = self.by_id.get(hash).map(Arc::clone) else { return false };
        let old_status = item.status();
        if old_status == status {
            return false
        }
        self.by_sender.reassign_status(&item, old_status, status);
        item.set_status(status);
        *self.status_counter(old_status) -= 1;
        *self.status_counter(status) += 1;
        trace!(target: "txpool", %hash, ?status, "reassigned status");
        true
    }

    /// Re-values every item against the new base fee and rebuilds the
    /// effective-tip index to match.
    ///
    /// [`TX_NO_BASE_FEE`] disables base-fee adjustment. The replacement index
    /// is built completely before it is swapped in; recomputation is pure
    /// arithmetic, so the operation cannot leave the index half-rebuilt.
    pub fn set_base_fee(&mut self, base_fee: i128) {
        if base_fee == self.base_fee {
            return
        }
        self.base_fee = base_fee;

        let mut rebuilt = TipIndex::default();
        for item in self.by_id.iter() {
            rebuilt.insert(item.effective_gas_tip(base_fee), Arc::clone(item));
        }
        self.by_tip = rebuilt;
        debug!(target: "txpool", base_fee, "rebased effective tip index");
    }

    /// The base fee the pool currently values tips against, or
    /// [`TX_NO_BASE_FEE`].
    pub const fn base_fee(&self) -> i128 {
        self.base_fee
    }

    /// Sets the tip cap floor and rejects the remote items that fall below
    /// it, returning how many were dropped. Locals are exempt.
    pub fn set_min_gas_price(&mut self, price: u128) -> usize {
        self.min_gas_price = price;
        let dropped: Vec<TxHash> = self
            .by_tip_cap
            .lt(price as i128)
            .filter(|item| !item.is_local())
            .map(|item| *item.hash())
            .collect();
        for hash in &dropped {
            self.reject(hash, TxErrorKind::Underpriced);
        }
        if !dropped.is_empty() {
            debug!(target: "txpool", price, count = dropped.len(), "dropped underpriced remotes");
        }
        dropped.len()
    }

    /// The tip cap floor currently enforced for remote transactions.
    pub const fn min_gas_price(&self) -> u128 {
        self.min_gas_price
    }

    /// Rejects remote items that have outlived the configured lifetime as of
    /// `now`, returning how many were evicted. Locals are exempt.
    pub fn evict_inactive(&mut self, now: Instant) -> usize {
        let lifetime = self.config.lifetime;
        let stale: Vec<TxHash> = self
            .by_id
            .partition(false)
            .iter()
            .filter(|item| now.saturating_duration_since(item.timestamp()) > lifetime)
            .map(|item| *item.hash())
            .collect();
        for hash in &stale {
            self.reject(hash, TxErrorKind::Unspecified);
        }
        if !stale.is_empty() {
            debug!(target: "txpool", count = stale.len(), "evicted inactive remotes");
        }
        stale.len()
    }

    /// Turns every remote item of the sender local, returning how many moved.
    pub fn move_remote_to_locals(&mut self, sender: &Address) -> usize {
        let remotes: Vec<TxHash> = self
            .by_sender
            .schedule(sender)
            .map(|schedule| schedule.locality(false).iter().map(|item| *item.hash()).collect())
            .unwrap_or_default();
        for hash in &remotes {
            self.reassign_locality(hash, true);
        }
        remotes.len()
    }

    /// Empties the wastebasket, returning how many entries were discarded and
    /// its capacity.
    pub fn flush_rejects(&mut self) -> (usize, usize) {
        self.counts.rejected = 0;
        (self.wastebasket.flush(), self.wastebasket.capacity())
    }

    fn locus_counter(&mut self, local: bool) -> &mut usize {
        if local {
            &mut self.counts.local
        } else {
            &mut self.counts.remote
        }
    }

    fn status_counter(&mut self, status: TxStatus) -> &mut usize {
        match status {
            TxStatus::Queued => &mut self.counts.queued,
            TxStatus::Pending => &mut self.counts.pending,
            TxStatus::Staged => &mut self.counts.staged,
        }
    }
}

// === readers ===

impl<T: PoolTransaction> TxTabs<T> {
    /// Returns the live item for the given hash.
    pub fn get(&self, hash: &TxHash) -> Option<&Arc<TxItem<T>>> {
        self.by_id.get(hash)
    }

    /// Returns whether the hash identifies a live item.
    pub fn contains(&self, hash: &TxHash) -> bool {
        self.by_id.contains(hash)
    }

    /// Returns the wastebasket entry for the hash, with its reject reason.
    pub fn get_rejected(&self, hash: &TxHash) -> Option<&Arc<TxItem<T>>> {
        self.wastebasket.get(hash)
    }

    /// Wastebasket entries in rejection order, oldest first.
    pub fn rejected(&self) -> impl Iterator<Item = &Arc<TxItem<T>>> + '_ {
        self.wastebasket.iter()
    }

    /// The occupancy counters.
    pub const fn count(&self) -> PoolCount {
        self.counts
    }

    /// Number of live transactions.
    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    /// Whether the pool holds no live transactions.
    pub fn is_empty(&self) -> bool {
        self.by_id.len() == 0
    }

    /// Items of one locality partition in arrival order, oldest first.
    pub fn arrivals(&self, local: bool) -> impl Iterator<Item = &Arc<TxItem<T>>> + '_ {
        self.by_id.partition(local).iter()
    }

    /// The oldest item of one locality partition.
    pub fn arrival_first(&self, local: bool) -> Option<&Arc<TxItem<T>>> {
        self.by_id.partition(local).first()
    }

    /// The newest item of one locality partition.
    pub fn arrival_last(&self, local: bool) -> Option<&Arc<TxItem<T>>> {
        self.by_id.partition(local).last()
    }

    /// The item that arrived right after the given one within its partition.
    pub fn arrival_next(&self, local: bool, hash: &TxHash) -> Option<&Arc<TxItem<T>>> {
        self.by_id.partition(local).next(hash)
    }

    /// The item that arrived right before the given one within its partition.
    pub fn arrival_prev(&self, local: bool, hash: &TxHash) -> Option<&Arc<TxItem<T>>> {
        self.by_id.partition(local).prev(hash)
    }

    /// Addresses with at least one item of the given locality.
    pub fn accounts(&self, local: bool) -> Vec<Address> {
        self.by_sender.accounts(local)
    }

    /// All sender addresses with live items.
    pub fn senders(&self) -> Vec<Address> {
        self.by_sender.senders().copied().collect()
    }

    /// All items of a sender, nonce ascending.
    pub fn sender_items(&self, sender: &Address) -> Vec<Arc<TxItem<T>>> {
        self.by_sender
            .schedule(sender)
            .map(|schedule| schedule.any().iter().map(Arc::clone).collect())
            .unwrap_or_default()
    }

    /// A sender's items of one locality, nonce ascending.
    pub fn sender_items_by_locality(&self, sender: &Address, local: bool) -> Vec<Arc<TxItem<T>>> {
        self.by_sender
            .schedule(sender)
            .map(|schedule| schedule.locality(local).iter().map(Arc::clone).collect())
            .unwrap_or_default()
    }

    /// A sender's items in one lifecycle state, nonce ascending.
    pub fn sender_items_by_status(&self, sender: &Address, status: TxStatus) -> Vec<Arc<TxItem<T>>> {
        self.by_sender
            .schedule(sender)
            .map(|schedule| schedule.status(status).iter().map(Arc::clone).collect())
            .unwrap_or_default()
    }

    /// All items of a sender, nonce descending; the exact reverse of
    /// [`Self::sender_items`].
    pub fn sender_items_desc(&self, sender: &Address) -> Vec<Arc<TxItem<T>>> {
        self.by_sender
            .schedule(sender)
            .map(|schedule| schedule.any().iter_desc().map(Arc::clone).collect())
            .unwrap_or_default()
    }

    /// A sender's items at exactly this nonce, insertion order.
    pub fn sender_items_at(&self, sender: &Address, nonce: u64) -> Vec<Arc<TxItem<T>>> {
        self.by_sender
            .schedule(sender)
            .and_then(|schedule| schedule.any().eq(nonce))
            .map(|list| list.iter().map(Arc::clone).collect())
            .unwrap_or_default()
    }

    /// The sender's lowest-nonce item.
    pub fn sender_first(&self, sender: &Address) -> Option<&Arc<TxItem<T>>> {
        self.by_sender.schedule(sender).and_then(|schedule| schedule.any().first())
    }

    /// The sender's highest-nonce item.
    pub fn sender_last(&self, sender: &Address) -> Option<&Arc<TxItem<T>>> {
        self.by_sender.schedule(sender).and_then(|schedule| schedule.any().last())
    }

    /// Number of live items of a sender.
    pub fn sender_count(&self, sender: &Address) -> usize {
        self.by_sender.schedule(sender).map(|schedule| schedule.any().len()).unwrap_or_default()
    }

    /// (local, remote) item counts of a sender.
    pub fn sender_locus_count(&self, sender: &Address) -> (usize, usize) {
        self.by_sender
            .schedule(sender)
            .map(|schedule| (schedule.locality(true).len(), schedule.locality(false).len()))
            .unwrap_or_default()
    }

    /// All items by ascending effective tip; ties nonce-ascending, then
    /// insertion order.
    pub fn tips_asc(&self) -> impl Iterator<Item = &Arc<TxItem<T>>> + '_ {
        self.by_tip.items()
    }

    /// All items by descending effective tip; the exact reverse of
    /// [`Self::tips_asc`].
    pub fn tips_desc(&self) -> impl Iterator<Item = &Arc<TxItem<T>>> + '_ {
        self.by_tip.items_desc()
    }

    /// Items with an effective tip ≥ the bound, ascending.
    pub fn tips_ge(&self, tip: i128) -> impl Iterator<Item = &Arc<TxItem<T>>> + '_ {
        self.by_tip.ge(tip)
    }

    /// Items with an effective tip > the bound, ascending.
    pub fn tips_gt(&self, tip: i128) -> impl Iterator<Item = &Arc<TxItem<T>>> + '_ {
        self.by_tip.gt(tip)
    }

    /// Items with an effective tip ≤ the bound, ascending.
    pub fn tips_le(&self, tip: i128) -> impl Iterator<Item = &Arc<TxItem<T>>> + '_ {
        self.by_tip.le(tip)
    }

    /// Items with an effective tip < the bound, ascending.
    pub fn tips_lt(&self, tip: i128) -> impl Iterator<Item = &Arc<TxItem<T>>> + '_ {
        self.by_tip.lt(tip)
    }

    /// Items priced at exactly this effective tip, nonce ascending.
    pub fn tips_eq(&self, tip: i128) -> impl Iterator<Item = &Arc<TxItem<T>>> + '_ {
        self.by_tip.eq(tip).into_iter().flat_map(|list| list.iter())
    }

    /// The lowest effective tip currently present.
    pub fn min_tip(&self) -> Option<i128> {
        self.by_tip.min_tip()
    }

    /// The highest effective tip currently present.
    pub fn max_tip(&self) -> Option<i128> {
        self.by_tip.max_tip()
    }

    /// Items with a gas tip cap < the bound, ascending by cap; independent of
    /// the base fee.
    pub fn tip_caps_lt(&self, cap: u128) -> impl Iterator<Item = &Arc<TxItem<T>>> + '_ {
        self.by_tip_cap.lt(cap as i128)
    }

    /// Remote items with a gas tip cap < the threshold, the peer-specific
    /// gossip filtering query.
    pub fn remotes_below(&self, cap: u128) -> impl Iterator<Item = &Arc<TxItem<T>>> + '_ {
        self.tip_caps_lt(cap).filter(|item| !item.is_local())
    }
}

// === consistency checking ===

impl<T: PoolTransaction> TxTabs<T> {
    /// Checks every cross-index invariant, naming the first violation found.
    ///
    /// Runs in tests and debug builds; a violation in production is a
    /// programming bug.
    pub fn verify(&self) -> Result<(), ConsistencyError> {
        let expected = self.by_id.len();
        for (index, actual) in [
            ("by_sender", self.by_sender.len()),
            ("by_tip", self.by_tip.len()),
            ("by_tip_cap", self.by_tip_cap.len()),
        ] {
            if actual != expected {
                return Err(ConsistencyError::LengthMismatch { index, actual, expected })
            }
        }

        let mut scanned = PoolCount { rejected: self.wastebasket.len(), ..Default::default() };
        for item in self.by_id.iter() {
            let hash = *item.hash();

            // exactly one partition may know the hash
            let partitions =
                self.by_id.partition(true).contains(&hash) as usize +
                self.by_id.partition(false).contains(&hash) as usize;
            if partitions != 1 {
                return Err(ConsistencyError::MissingFromIndex { hash, index: "by_id" })
            }

            let schedule = self.by_sender.schedule(&item.sender());
            let in_sender = schedule.is_some_and(|s| {
                [s.any(), s.locality(item.is_local()), s.status(item.status())]
                    .into_iter()
                    .all(|view| {
                        view.find(item.nonce(), &hash).is_some_and(|found| Arc::ptr_eq(found, item))
                    })
            });
            if !in_sender {
                return Err(ConsistencyError::MissingFromIndex { hash, index: "by_sender" })
            }

            let tip = item.effective_gas_tip(self.base_fee);
            if !self
                .by_tip
                .find(tip, item.nonce(), &hash)
                .is_some_and(|found| Arc::ptr_eq(found, item))
            {
                return Err(ConsistencyError::MissingFromIndex { hash, index: "by_tip" })
            }
            if !self
                .by_tip_cap
                .find(item.gas_tip_cap() as i128, item.nonce(), &hash)
                .is_some_and(|found| Arc::ptr_eq(found, item))
            {
                return Err(ConsistencyError::MissingFromIndex { hash, index: "by_tip_cap" })
            }

            scanned.total += 1;
            if item.is_local() {
                scanned.local += 1;
            } else {
                scanned.remote += 1;
            }
            match item.status() {
                TxStatus::Queued => scanned.queued += 1,
                TxStatus::Pending => scanned.pending += 1,
                TxStatus::Staged => scanned.staged += 1,
            }
        }

        for (counter, actual, expected) in [
            ("total", self.counts.total, scanned.total),
            ("local", self.counts.local, scanned.local),
            ("remote", self.counts.remote, scanned.remote),
            ("queued", self.counts.queued, scanned.queued),
            ("pending", self.counts.pending, scanned.pending),
            ("staged", self.counts.staged, scanned.staged),
            ("rejected", self.counts.rejected, scanned.rejected),
        ] {
            if actual != expected {
                return Err(ConsistencyError::CountMismatch { counter, actual, expected })
            }
        }
        Ok(())
    }

    /// Panics on the first invariant violation.
    #[cfg(any(test, feature = "test-utils"))]
    pub fn assert_invariants(&self) {
        if let Err(err) = self.verify() {
            panic!("pool invariant violated: {err}");
        }
    }
}

impl<T: PoolTransaction> fmt::Debug for TxTabs<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TxTabs")
            .field("config", &self.config)
            .field("base_fee", &self.base_fee)
            .field("counts", &self.counts)
            .finish_non_exhaustive()
    }
}
