//! Internal helpers for testing the pool.

#![allow(missing_docs)]

mod mock;

pub use mock::{
    MockTransaction, MockTransactionFactory, EIP1559_TX_TYPE_ID, LEGACY_TX_TYPE_ID,
};

use crate::{config::PoolConfig, tabs::TxTabs};

/// Create an empty pool with default settings.
pub fn mock_tx_tabs() -> TxTabs<MockTransaction> {
    TxTabs::new(PoolConfig::default())
}
