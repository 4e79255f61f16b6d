//! The unit of storage shared by all pool indexes.

use crate::{
    error::{TxError, TxErrorKind},
    traits::PoolTransaction,
};
use alloy_primitives::{Address, TxHash};
use std::{
    fmt,
    sync::{
        atomic::{AtomicBool, AtomicU64, AtomicU8, Ordering},
        OnceLock,
    },
    time::Instant,
};

/// Lifecycle state of a transaction within the pool.
///
/// Classification between the states is the caller's business; the store
/// imposes no transition ordering.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(u8)]
pub enum TxStatus {
    /// Not currently eligible for block inclusion.
    Queued = 0,
    /// Eligible for inclusion in the pending block.
    Pending = 1,
    /// Selected for the block being assembled.
    Staged = 2,
}

impl TxStatus {
    /// All states, in ascending discriminant order.
    pub const ALL: [Self; 3] = [Self::Queued, Self::Pending, Self::Staged];

    const fn from_u8(value: u8) -> Self {
        match value {
            0 => Self::Queued,
            1 => Self::Pending,
            _ => Self::Staged,
        }
    }
}

/// One stored transaction with its pool metadata, shared across all indexes
/// as `Arc<TxItem<T>>`.
///
/// Everything except `status`, `local`, the arrival tag and the reject reason
/// is immutable after construction, and those four only change through the
/// [`TxTabs`](crate::TxTabs) facade. All writes are serialised there, so
/// relaxed atomics suffice; they exist to keep the shared handle
/// `Send + Sync`.
pub struct TxItem<T: PoolTransaction> {
    /// The transaction payload.
    transaction: T,
    /// Hash of the transaction, memoised at construction.
    hash: TxHash,
    /// Sender address, recovered once at construction.
    sender: Address,
    /// Whether the transaction was submitted locally.
    local: AtomicBool,
    /// Current [`TxStatus`] discriminant.
    status: AtomicU8,
    /// Arrival sequence within the current locality partition.
    submission_id: AtomicU64,
    /// When the item entered the pool, drives age-based eviction.
    timestamp: Instant,
    /// Free-form diagnostic note attached at submission.
    info: String,
    /// Why the item was moved to the wastebasket, set at most once.
    reject_reason: OnceLock<TxErrorKind>,
}

// === impl TxItem ===

impl<T: PoolTransaction> TxItem<T> {
    /// Wraps a transaction for storage.
    ///
    /// Recovers the sender, failing with
    /// [`InvalidSender`](TxErrorKind::InvalidSender) if the signature does
    /// not yield an address.
    pub fn new(
        transaction: T,
        local: bool,
        status: TxStatus,
        info: String,
        timestamp: Instant,
    ) -> Result<Self, TxError> {
        let hash = *transaction.hash();
        let sender = transaction
            .recover_sender()
            .ok_or_else(|| TxError::new(hash, TxErrorKind::InvalidSender))?;
        Ok(Self {
            transaction,
            hash,
            sender,
            local: AtomicBool::new(local),
            status: AtomicU8::new(status as u8),
            submission_id: AtomicU64::new(0),
            timestamp,
            info,
            reject_reason: OnceLock::new(),
        })
    }

    /// The wrapped transaction.
    pub fn transaction(&self) -> &T {
        &self.transaction
    }

    /// Hash of the transaction, the pool-wide unique key.
    pub fn hash(&self) -> &TxHash {
        &self.hash
    }

    /// The recovered sender address.
    pub fn sender(&self) -> Address {
        self.sender
    }

    /// The nonce of the transaction.
    pub fn nonce(&self) -> u64 {
        self.transaction.nonce()
    }

    /// Whether the transaction currently counts as local.
    pub fn is_local(&self) -> bool {
        self.local.load(Ordering::Relaxed)
    }

    /// The current lifecycle state.
    pub fn status(&self) -> TxStatus {
        TxStatus::from_u8(self.status.load(Ordering::Relaxed))
    }

    /// Arrival sequence within the item's current locality partition.
    pub fn submission_id(&self) -> u64 {
        self.submission_id.load(Ordering::Relaxed)
    }

    /// When the item entered the pool.
    pub fn timestamp(&self) -> Instant {
        self.timestamp
    }

    /// The diagnostic note attached at submission.
    pub fn info(&self) -> &str {
        &self.info
    }

    /// Why the item was rejected, if it lives in the wastebasket.
    pub fn reject_reason(&self) -> Option<TxErrorKind> {
        self.reject_reason.get().copied()
    }

    /// The unadjusted gas tip cap.
    pub fn gas_tip_cap(&self) -> u128 {
        self.transaction.gas_tip_cap()
    }

    /// The effective tip under the given base fee.
    pub fn effective_gas_tip(&self, base_fee: i128) -> i128 {
        self.transaction.effective_gas_tip(base_fee)
    }

    pub(crate) fn set_local(&self, local: bool) {
        self.local.store(local, Ordering::Relaxed);
    }

    pub(crate) fn set_status(&self, status: TxStatus) {
        self.status.store(status as u8, Ordering::Relaxed);
    }

    pub(crate) fn set_submission_id(&self, id: u64) {
        self.submission_id.store(id, Ordering::Relaxed);
    }

    pub(crate) fn set_reject_reason(&self, reason: TxErrorKind) {
        let _ = self.reject_reason.set(reason);
    }
}

impl<T: PoolTransaction> fmt::Debug for TxItem<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TxItem")
            .field("hash", &self.hash)
            .field("sender", &self.sender)
            .field("nonce", &self.nonce())
            .field("local", &self.is_local())
            .field("status", &self.status())
            .field("info", &self.info)
            .finish_non_exhaustive()
    }
}
