//! Transaction pool errors

use alloy_primitives::TxHash;

/// Transaction pool result type.
pub type PoolResult<T> = Result<T, TxError>;

/// A transaction pool error, tied to the transaction that caused it.
#[derive(Debug, Clone, Eq, PartialEq, thiserror::Error)]
#[error("[{hash}] {kind}")]
pub struct TxError {
    /// Hash of the transaction this error concerns.
    pub hash: TxHash,
    /// What went wrong.
    pub kind: TxErrorKind,
}

impl TxError {
    /// Ties an error kind to a transaction hash.
    pub const fn new(hash: TxHash, kind: TxErrorKind) -> Self {
        Self { hash, kind }
    }

    /// Returns true if this is a [`TxErrorKind::AlreadyKnown`] error.
    pub const fn is_already_known(&self) -> bool {
        matches!(self.kind, TxErrorKind::AlreadyKnown)
    }
}

/// All reasons a transaction can be refused by, or removed from, the pool.
///
/// These are the user-visible error codes; batch submissions report one per
/// input transaction, with success represented by `Ok`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, thiserror::Error)]
pub enum TxErrorKind {
    /// Generic, used when no finer code applies.
    #[error("rejected")]
    Unspecified,
    /// The hash already identifies a live transaction in the pool.
    #[error("already known")]
    AlreadyKnown,
    /// Signature recovery did not yield a sender address.
    #[error("invalid sender")]
    InvalidSender,
    /// Gas tip cap is below the pool's minimum gas price.
    ///
    /// Only enforced for remote transactions.
    #[error("transaction underpriced")]
    Underpriced,
    /// The pool is at capacity and the transaction is remote.
    #[error("txpool is full")]
    TxPoolOverflow,
    /// A transaction with the same sender and nonce exists and the newcomer
    /// does not exceed the required price bump.
    #[error("replacement transaction underpriced")]
    ReplaceUnderpriced,
    /// Gas limit exceeds the per-block gas allowance.
    #[error("exceeds block gas limit")]
    GasLimit,
    /// Transaction value is negative.
    ///
    /// Unreachable for `U256`-valued transactions; kept so decoders that
    /// admit signed values can report it through the same taxonomy.
    #[error("negative value")]
    NegativeValue,
    /// Input data is larger than the DoS protection limit.
    #[error("oversized data")]
    OversizedData,
}

/// An inconsistency between the indexes of the pool, reported by
/// [`TxTabs::verify`](crate::TxTabs::verify).
///
/// In production these are programming bugs; the checks run in tests and
/// debug builds.
#[derive(Debug, Clone, Eq, PartialEq, thiserror::Error)]
pub enum ConsistencyError {
    /// An item reachable from the primary table is missing from a secondary
    /// index, or resolves to a different record there.
    #[error("[{hash}] not consistently indexed in {index}")]
    MissingFromIndex {
        /// Hash of the affected transaction.
        hash: TxHash,
        /// Name of the disagreeing index.
        index: &'static str,
    },
    /// Two indexes disagree about how many items they hold.
    #[error("{index} holds {actual} items, primary table holds {expected}")]
    LengthMismatch {
        /// Name of the disagreeing index.
        index: &'static str,
        /// Item count of the disagreeing index.
        actual: usize,
        /// Item count of the primary table.
        expected: usize,
    },
    /// The incrementally maintained counters disagree with a scan.
    #[error("counter {counter} is {actual}, scan says {expected}")]
    CountMismatch {
        /// Name of the stale counter.
        counter: &'static str,
        /// Incrementally maintained value.
        actual: usize,
        /// Value obtained by scanning.
        expected: usize,
    },
}
