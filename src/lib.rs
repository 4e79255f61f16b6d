#![warn(missing_debug_implementations, missing_docs, unreachable_pub)]
#![deny(unused_must_use, rust_2018_idioms)]
#![doc(test(
    no_crate_inject,
    attr(deny(warnings, rust_2018_idioms), allow(dead_code, unused_variables))
))]

//! Multi-index transaction pool for an Ethereum-compatible execution client.
//!
//! Signed transactions received from the network or submitted locally are
//! staged here between arrival and block inclusion. The core is the
//! [`TxTabs`] store: one logical set of transactions addressable by hash,
//! arrival order within a local/remote partition, sender, per-sender nonce,
//! effective gas tip and gas tip cap, kept mutually consistent by a narrow
//! mutation API.
//!
//! An incoming transaction has its hash memoised and its sender recovered,
//! duplicates are refused, and the resulting item lands atomically in every
//! index. Whenever the network base fee changes, all effective tips are
//! re-valued and the tip index rebuilt to match. Rejected items are retained
//! in a bounded wastebasket FIFO for diagnostics.
//!
//! The pool is driven from the outside through the [`PoolService`] worker: a
//! FIFO queue of typed jobs, each answered over its own reply channel. The
//! worker is the only writer; concurrent readers take read-only snapshots
//! through the [`PoolHandle`].

pub mod error;

mod config;
mod item;
pub mod metrics;
mod service;
mod tabs;
mod traits;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use crate::{
    config::{
        PoolConfig, TXPOOL_BLOCK_GAS_LIMIT_DEFAULT, TXPOOL_LIFETIME_DEFAULT,
        TXPOOL_MAX_REJECTS_DEFAULT, TXPOOL_MAX_TXS_DEFAULT, TXPOOL_MAX_TX_INPUT_BYTES_DEFAULT,
        TXPOOL_MIN_GAS_PRICE_DEFAULT, TXPOOL_PRICE_BUMP_DEFAULT,
    },
    error::{ConsistencyError, PoolResult, TxError, TxErrorKind},
    item::{TxItem, TxStatus},
    service::{PoolHandle, PoolService, ServiceUnavailable, TxJob, TX_JOB_ID_MAX},
    tabs::{PoolCount, TxTabs},
    traits::{PoolTransaction, TX_NO_BASE_FEE},
};
