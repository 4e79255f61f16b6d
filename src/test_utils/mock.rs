//! Mock types.

use crate::{
    item::{TxItem, TxStatus},
    traits::PoolTransaction,
};
use alloy_primitives::{Address, Bytes, TxHash, B256, U256};
use paste::paste;
use std::{sync::Arc, time::Instant};

/// Transaction type identifier of legacy transactions.
pub const LEGACY_TX_TYPE_ID: u8 = 0;

/// Transaction type identifier of EIP-1559 transactions.
pub const EIP1559_TX_TYPE_ID: u8 = 2;

/// Sets the value for the field
macro_rules! set_value {
    ($this:ident => $field:ident) => {
        let new_value = $field;
        match $this {
            MockTransaction::Legacy { ref mut $field, .. } |
            MockTransaction::Eip1559 { ref mut $field, .. } => {
                *$field = new_value;
            }
        }
    };
}

/// Gets the value for the field
macro_rules! get_value {
    ($this:tt => $field:ident) => {
        match $this {
            MockTransaction::Legacy { $field, .. } |
            MockTransaction::Eip1559 { $field, .. } => $field.clone(),
        }
    };
}

// Generates all setters and getters
macro_rules! make_setters_getters {
    ($($name:ident => $t:ty);*) => {
        paste! {$(
            /// Sets the value of the specified field.
            pub fn [<set_ $name>](&mut self, $name: $t) -> &mut Self {
                set_value!(self => $name);
                self
            }

            /// Sets the value of the specified field using a fluent interface.
            pub fn [<with_ $name>](mut self, $name: $t) -> Self {
                set_value!(self => $name);
                self
            }

            /// Gets the value of the specified field.
            pub fn [<get_ $name>](&self) -> $t {
                get_value!(self => $name)
            }
        )*}
    };
}

/// A bare transaction type used for testing.
///
/// Carries its sender in the clear; a zeroed sender stands in for a signature
/// that does not recover.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum MockTransaction {
    /// Legacy transaction type.
    Legacy {
        /// The hash of the transaction.
        hash: B256,
        /// The sender's address.
        sender: Address,
        /// The transaction nonce.
        nonce: u64,
        /// The gas price for the transaction.
        gas_price: u128,
        /// The gas limit for the transaction.
        gas_limit: u64,
        /// The value of the transaction.
        value: U256,
        /// The transaction input data.
        input: Bytes,
        /// The size of the transaction, returned in the implementation of
        /// [PoolTransaction].
        size: usize,
    },
    /// EIP-1559 transaction type.
    Eip1559 {
        /// The hash of the transaction.
        hash: B256,
        /// The sender's address.
        sender: Address,
        /// The transaction nonce.
        nonce: u64,
        /// The maximum fee per gas for the transaction.
        max_fee_per_gas: u128,
        /// The maximum priority fee per gas for the transaction.
        max_priority_fee_per_gas: u128,
        /// The gas limit for the transaction.
        gas_limit: u64,
        /// The value of the transaction.
        value: U256,
        /// The transaction input data.
        input: Bytes,
        /// The size of the transaction, returned in the implementation of
        /// [PoolTransaction].
        size: usize,
    },
}

// === impl MockTransaction ===

impl MockTransaction {
    make_setters_getters! {
        nonce => u64;
        hash => B256;
        sender => Address;
        gas_limit => u64;
        value => U256;
        input => Bytes;
        size => usize
    }

    /// Returns a new legacy transaction with random address and hash and empty values
    pub fn legacy() -> Self {
        MockTransaction::Legacy {
            hash: B256::random(),
            sender: Address::random(),
            nonce: 0,
            gas_price: 0,
            gas_limit: 0,
            value: Default::default(),
            input: Default::default(),
            size: Default::default(),
        }
    }

    /// Returns a new EIP-1559 transaction with random address and hash and empty values
    pub fn eip1559() -> Self {
        MockTransaction::Eip1559 {
            hash: B256::random(),
            sender: Address::random(),
            nonce: 0,
            max_fee_per_gas: 1,
            max_priority_fee_per_gas: 1,
            gas_limit: 0,
            value: Default::default(),
            input: Bytes::new(),
            size: Default::default(),
        }
    }

    /// Sets the priority fee for dynamic fee transactions.
    pub fn set_priority_fee(&mut self, val: u128) -> &mut Self {
        if let MockTransaction::Eip1559 { max_priority_fee_per_gas, .. } = self {
            *max_priority_fee_per_gas = val;
        }
        self
    }

    /// Sets the priority fee for dynamic fee transactions.
    pub fn with_priority_fee(mut self, val: u128) -> Self {
        self.set_priority_fee(val);
        self
    }

    /// Gets the priority fee for dynamic fee transactions.
    pub const fn get_priority_fee(&self) -> Option<u128> {
        match self {
            MockTransaction::Eip1559 { max_priority_fee_per_gas, .. } => {
                Some(*max_priority_fee_per_gas)
            }
            _ => None,
        }
    }

    /// Sets the max fee for dynamic fee transactions.
    pub fn set_max_fee(&mut self, val: u128) -> &mut Self {
        if let MockTransaction::Eip1559 { max_fee_per_gas, .. } = self {
            *max_fee_per_gas = val;
        }
        self
    }

    /// Sets the max fee for dynamic fee transactions.
    pub fn with_max_fee(mut self, val: u128) -> Self {
        self.set_max_fee(val);
        self
    }

    /// Sets the gas price.
    ///
    /// For dynamic fee transactions this sets the max fee and the priority
    /// fee to the same value.
    pub fn set_gas_price(&mut self, val: u128) -> &mut Self {
        match self {
            MockTransaction::Legacy { gas_price, .. } => {
                *gas_price = val;
            }
            MockTransaction::Eip1559 { max_fee_per_gas, max_priority_fee_per_gas, .. } => {
                *max_fee_per_gas = val;
                *max_priority_fee_per_gas = val;
            }
        }
        self
    }

    /// Sets the gas price.
    pub fn with_gas_price(mut self, val: u128) -> Self {
        self.set_gas_price(val);
        self
    }

    /// Gets the gas price: the tip cap of the transaction.
    pub const fn get_gas_price(&self) -> u128 {
        match self {
            MockTransaction::Legacy { gas_price, .. } => *gas_price,
            MockTransaction::Eip1559 { max_priority_fee_per_gas, .. } => *max_priority_fee_per_gas,
        }
    }

    /// Returns a clone with a new random hash.
    pub fn rng_hash(self) -> Self {
        self.with_hash(B256::random())
    }

    /// Returns the next transaction of the same sender: `nonce + 1`, fresh
    /// hash.
    pub fn next(&self) -> Self {
        self.clone().with_hash(B256::random()).with_nonce(self.get_nonce() + 1)
    }

    /// Returns the previous transaction of the same sender: `nonce - 1`,
    /// fresh hash.
    pub fn prev(&self) -> Self {
        self.clone().with_hash(B256::random()).with_nonce(self.get_nonce() - 1)
    }

    /// Returns a clone with the gas price raised by the given amount.
    pub fn inc_price_by(&self, value: u128) -> Self {
        self.clone().with_gas_price(self.get_gas_price() + value)
    }

    /// Returns a clone whose signature no longer recovers.
    pub fn corrupt_signature(self) -> Self {
        self.with_sender(Address::ZERO)
    }

    /// Checks if the transaction is of the legacy type.
    pub const fn is_legacy(&self) -> bool {
        matches!(self, MockTransaction::Legacy { .. })
    }

    /// Checks if the transaction is of the EIP-1559 type.
    pub const fn is_eip1559(&self) -> bool {
        matches!(self, MockTransaction::Eip1559 { .. })
    }
}

impl PoolTransaction for MockTransaction {
    fn hash(&self) -> &TxHash {
        match self {
            MockTransaction::Legacy { hash, .. } | MockTransaction::Eip1559 { hash, .. } => hash,
        }
    }

    fn recover_sender(&self) -> Option<Address> {
        let sender = self.get_sender();
        (sender != Address::ZERO).then_some(sender)
    }

    fn nonce(&self) -> u64 {
        self.get_nonce()
    }

    fn gas_limit(&self) -> u64 {
        self.get_gas_limit()
    }

    fn value(&self) -> U256 {
        self.get_value()
    }

    fn input(&self) -> &[u8] {
        match self {
            MockTransaction::Legacy { input, .. } | MockTransaction::Eip1559 { input, .. } => {
                &input[..]
            }
        }
    }

    fn tx_type(&self) -> u8 {
        match self {
            Self::Legacy { .. } => LEGACY_TX_TYPE_ID,
            Self::Eip1559 { .. } => EIP1559_TX_TYPE_ID,
        }
    }

    fn max_fee_per_gas(&self) -> u128 {
        match self {
            MockTransaction::Legacy { gas_price, .. } => *gas_price,
            MockTransaction::Eip1559 { max_fee_per_gas, .. } => *max_fee_per_gas,
        }
    }

    fn max_priority_fee_per_gas(&self) -> Option<u128> {
        match self {
            MockTransaction::Legacy { .. } => None,
            MockTransaction::Eip1559 { max_priority_fee_per_gas, .. } => {
                Some(*max_priority_fee_per_gas)
            }
        }
    }

    fn size(&self) -> usize {
        self.get_size()
    }
}

/// A factory wrapping mock transactions into ready-made pool items.
#[derive(Debug, Default)]
pub struct MockTransactionFactory;

// === impl MockTransactionFactory ===

impl MockTransactionFactory {
    /// Wraps the transaction as a remote, queued item.
    pub fn item(&mut self, transaction: MockTransaction) -> Arc<TxItem<MockTransaction>> {
        self.item_with(transaction, false, TxStatus::Queued)
    }

    /// Wraps the transaction as a local, queued item.
    pub fn item_local(&mut self, transaction: MockTransaction) -> Arc<TxItem<MockTransaction>> {
        self.item_with(transaction, true, TxStatus::Queued)
    }

    /// Wraps the transaction with the given locality and status.
    pub fn item_with(
        &mut self,
        transaction: MockTransaction,
        local: bool,
        status: TxStatus,
    ) -> Arc<TxItem<MockTransaction>> {
        let item = TxItem::new(transaction, local, status, String::new(), Instant::now())
            .expect("mock signature recovers");
        Arc::new(item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_transaction_fee_views() {
        let legacy = MockTransaction::legacy().with_gas_price(30);
        assert_eq!(legacy.max_fee_per_gas(), 30);
        assert_eq!(legacy.max_priority_fee_per_gas(), None);
        assert_eq!(legacy.gas_tip_cap(), 30);
        assert_eq!(legacy.tx_type(), LEGACY_TX_TYPE_ID);
        // legacy: gas_price - base_fee
        assert_eq!(legacy.effective_gas_tip(12), 18);

        let dynamic = MockTransaction::eip1559().with_max_fee(20).with_priority_fee(15);
        assert_eq!(dynamic.gas_tip_cap(), 15);
        assert_eq!(dynamic.tx_type(), EIP1559_TX_TYPE_ID);
        // min(15, 20 - 5)
        assert_eq!(dynamic.effective_gas_tip(5), 15);
        // min(15, 20 - 12)
        assert_eq!(dynamic.effective_gas_tip(12), 8);
        // negative when the fee cap no longer covers the base fee
        assert_eq!(dynamic.effective_gas_tip(25), -5);
    }

    #[test]
    fn next_keeps_sender() {
        let tx = MockTransaction::eip1559().with_nonce(7);
        let next = tx.next();
        assert_eq!(next.get_nonce(), 8);
        assert_eq!(next.get_sender(), tx.get_sender());
        assert_ne!(next.get_hash(), tx.get_hash());
        assert_eq!(next.prev().get_nonce(), 7);
    }
}
