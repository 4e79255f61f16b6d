use std::time::Duration;

/// The default maximum allowed number of live transactions in the pool.
pub const TXPOOL_MAX_TXS_DEFAULT: usize = 10_000;

/// The default capacity of the wastebasket of rejected transactions.
pub const TXPOOL_MAX_REJECTS_DEFAULT: usize = 500;

/// How long a remote transaction may sit in the pool before age-based
/// eviction removes it, compatible with geth.
pub const TXPOOL_LIFETIME_DEFAULT: Duration = Duration::from_secs(3 * 60 * 60);

/// The default minimum gas price (tip cap floor) for remote transactions.
pub const TXPOOL_MIN_GAS_PRICE_DEFAULT: u128 = 1;

/// Required price bump, in percent, for a transaction replacing another with
/// the same sender and nonce, compatible with geth.
pub const TXPOOL_PRICE_BUMP_DEFAULT: u128 = 10;

/// The default per-block gas allowance a single transaction may claim.
pub const TXPOOL_BLOCK_GAS_LIMIT_DEFAULT: u64 = 30_000_000;

/// The default maximum transaction input size, DoS protection.
pub const TXPOOL_MAX_TX_INPUT_BYTES_DEFAULT: usize = 128 * 1024;

/// Configuration options for the transaction pool.
#[derive(Debug, Clone)]
pub struct PoolConfig {
    /// Max number of live transactions, remote insertions beyond it overflow.
    pub max_txs: usize,
    /// Capacity of the wastebasket FIFO of rejected transactions.
    pub max_rejects: usize,
    /// Age after which remote transactions become eligible for eviction.
    pub lifetime: Duration,
    /// Tip cap floor enforced for remote transactions.
    pub min_gas_price: u128,
    /// Price bump, in percent, required of same-nonce replacements.
    pub price_bump: u128,
    /// Per-block gas allowance a single transaction may not exceed.
    pub block_gas_limit: u64,
    /// Maximum transaction input size in bytes.
    pub max_tx_input_bytes: usize,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            max_txs: TXPOOL_MAX_TXS_DEFAULT,
            max_rejects: TXPOOL_MAX_REJECTS_DEFAULT,
            lifetime: TXPOOL_LIFETIME_DEFAULT,
            min_gas_price: TXPOOL_MIN_GAS_PRICE_DEFAULT,
            price_bump: TXPOOL_PRICE_BUMP_DEFAULT,
            block_gas_limit: TXPOOL_BLOCK_GAS_LIMIT_DEFAULT,
            max_tx_input_bytes: TXPOOL_MAX_TX_INPUT_BYTES_DEFAULT,
        }
    }
}
