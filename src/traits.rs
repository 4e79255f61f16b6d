use alloy_primitives::{Address, TxHash, U256};
use std::fmt;

/// Sentinel base fee that disables base-fee adjustment.
///
/// With this value in force the effective gas tip of every transaction equals
/// its unadjusted tip cap (the gas price for legacy transactions).
pub const TX_NO_BASE_FEE: i128 = i128::MIN;

/// Trait for transaction types stored in the pool.
///
/// Signature recovery and the wire codec are external collaborators: the
/// transaction arrives here already decoded, carries its memoisable hash, and
/// knows how to recover its sender. A failed recovery surfaces as `None` and
/// is reported by the pool as [`InvalidSender`](crate::TxErrorKind::InvalidSender).
pub trait PoolTransaction: fmt::Debug + Clone + Send + Sync + 'static {
    /// Hash of the transaction.
    fn hash(&self) -> &TxHash;

    /// Recovers the sender address from the signature.
    fn recover_sender(&self) -> Option<Address>;

    /// The nonce of the transaction.
    fn nonce(&self) -> u64;

    /// The gas limit of the transaction.
    fn gas_limit(&self) -> u64;

    /// Transferred value.
    fn value(&self) -> U256;

    /// The transaction input data.
    fn input(&self) -> &[u8];

    /// The EIP-2718 transaction type identifier.
    fn tx_type(&self) -> u8;

    /// The maximum fee per gas the sender is willing to pay.
    ///
    /// For legacy transactions this is the gas price.
    fn max_fee_per_gas(&self) -> u128;

    /// The EIP-1559 priority fee per gas.
    ///
    /// Returns `None` for legacy transactions.
    fn max_priority_fee_per_gas(&self) -> Option<u128>;

    /// Heap size of the transaction, used for accounting.
    fn size(&self) -> usize;

    /// Returns true for dynamic-fee (EIP-1559) transactions.
    fn is_dynamic_fee(&self) -> bool {
        self.max_priority_fee_per_gas().is_some()
    }

    /// The unadjusted gas tip cap: the priority fee for EIP-1559
    /// transactions, the gas price for legacy ones.
    fn gas_tip_cap(&self) -> u128 {
        self.max_priority_fee_per_gas().unwrap_or_else(|| self.max_fee_per_gas())
    }

    /// The tip per gas the block producer effectively receives under the
    /// given base fee.
    ///
    /// `min(max_priority_fee, max_fee - base_fee)` for EIP-1559 transactions,
    /// `gas_price - base_fee` for legacy ones; can be negative when the fee
    /// cap no longer covers the base fee. [`TX_NO_BASE_FEE`] skips the
    /// subtraction entirely.
    fn effective_gas_tip(&self, base_fee: i128) -> i128 {
        if base_fee == TX_NO_BASE_FEE {
            return self.gas_tip_cap() as i128
        }
        let adjusted = self.max_fee_per_gas() as i128 - base_fee;
        match self.max_priority_fee_per_gas() {
            Some(tip) => adjusted.min(tip as i128),
            None => adjusted,
        }
    }

    /// Max cost of the transaction: `max_fee_per_gas * gas_limit + value`.
    fn cost(&self) -> U256 {
        U256::from(self.max_fee_per_gas()) * U256::from(self.gas_limit()) + self.value()
    }
}
