//! Transaction pool metrics.

use metrics::{describe_counter, register_counter, Counter};

pub(crate) struct TxPoolMetrics {
    pub(crate) inserted_transactions: Counter,
    pub(crate) removed_transactions: Counter,
    pub(crate) rejected_transactions: Counter,
}

impl Default for TxPoolMetrics {
    /// Initialize TxPoolMetrics struct and register them
    fn default() -> Self {
        Self {
            inserted_transactions: register_counter!("transaction_pool.inserted_transactions"),
            removed_transactions: register_counter!("transaction_pool.removed_transactions"),
            rejected_transactions: register_counter!("transaction_pool.rejected_transactions"),
        }
    }
}

/// Describe transaction pool metrics
pub fn describe() {
    describe_counter!(
        "transaction_pool.inserted_transactions",
        "Number of transactions inserted in the pool"
    );
    describe_counter!(
        "transaction_pool.removed_transactions",
        "Number of transactions removed from the pool"
    );
    describe_counter!(
        "transaction_pool.rejected_transactions",
        "Number of transactions moved to the wastebasket"
    );
}
