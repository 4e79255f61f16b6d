//! The job-queue driver of the pool.
//!
//! All writes funnel through one worker task: jobs are typed payloads with a
//! reply channel, executed strictly in submission order, with priority jobs
//! jumping the head of the queue. Readers outside the worker either submit a
//! job or take a read-only snapshot through the shared lock.

use crate::{
    config::PoolConfig,
    error::PoolResult,
    item::{TxItem, TxStatus},
    tabs::{PoolCount, TxTabs},
    traits::PoolTransaction,
};
use alloy_primitives::{Address, TxHash};
use parking_lot::{Mutex, RwLock};
use std::{collections::VecDeque, fmt, sync::Arc, time::Instant};
use tokio::sync::{oneshot, Notify};
use tracing::{debug, trace};

/// Highest job id handed out before the ring wraps back to 1.
pub const TX_JOB_ID_MAX: u64 = 999_999;

/// The worker has stopped and can no longer answer requests.
#[derive(Debug, Copy, Clone, Eq, PartialEq, thiserror::Error)]
#[error("transaction pool service has stopped")]
pub struct ServiceUnavailable;

/// A unit of work for the pool worker, carrying its input and the channel the
/// reply goes out on.
#[derive(Debug)]
pub enum TxJob<T: PoolTransaction> {
    /// Stages a batch of transactions, answering one result per input.
    AddTxs {
        /// The transactions to stage.
        transactions: Vec<T>,
        /// Whether the batch was submitted locally.
        local: bool,
        /// Initial lifecycle state for the whole batch.
        status: TxStatus,
        /// Diagnostic note attached to every item of the batch.
        info: String,
        /// Reply channel, aligned with the input batch.
        reply: oneshot::Sender<Vec<PoolResult<TxHash>>>,
    },
    /// Evicts remote transactions past the configured lifetime.
    EvictInactive {
        /// Answers how many items were evicted.
        reply: oneshot::Sender<usize>,
    },
    /// Lists addresses with at least one item of the given locality.
    GetAccounts {
        /// The locality to filter by.
        local: bool,
        /// Answers the matching addresses.
        reply: oneshot::Sender<Vec<Address>>,
    },
    /// Reads the base fee tips are currently valued against.
    GetBaseFee {
        /// Answers the base fee, or [`TX_NO_BASE_FEE`](crate::TX_NO_BASE_FEE).
        reply: oneshot::Sender<i128>,
    },
    /// Re-values every item against a new base fee.
    SetBaseFee {
        /// The new base fee, or [`TX_NO_BASE_FEE`](crate::TX_NO_BASE_FEE) to
        /// disable adjustment.
        base_fee: i128,
        /// Answers once the tip index is rebuilt.
        reply: oneshot::Sender<()>,
    },
    /// Reads the tip cap floor for remote transactions.
    GetGasPrice {
        /// Answers the current floor.
        reply: oneshot::Sender<u128>,
    },
    /// Sets the tip cap floor, dropping remotes that fall below it.
    SetGasPrice {
        /// The new floor.
        price: u128,
        /// Answers how many items were dropped.
        reply: oneshot::Sender<usize>,
    },
    /// Looks up one live item by hash.
    GetItem {
        /// Hash to look up.
        hash: TxHash,
        /// Answers the item, if live.
        reply: oneshot::Sender<Option<Arc<TxItem<T>>>>,
    },
    /// Reads the (local, remote) occupancy split.
    LocusCount {
        /// Answers (local, remote).
        reply: oneshot::Sender<(usize, usize)>,
    },
    /// Turns every remote item of one sender local.
    MoveRemoteToLocals {
        /// The sender whose items move.
        sender: Address,
        /// Answers how many items moved.
        reply: oneshot::Sender<usize>,
    },
    /// Reads the (pending, queued) occupancy split.
    StatsReport {
        /// Answers (pending, queued).
        reply: oneshot::Sender<(usize, usize)>,
    },
    /// Drains the queue and stops the worker; the in-flight job completes.
    Abort,
}

struct QueuedJob<T: PoolTransaction> {
    id: u64,
    job: TxJob<T>,
}

struct QueueState<T: PoolTransaction> {
    jobs: VecDeque<QueuedJob<T>>,
    next_id: u64,
    /// Set once the worker stops; later submissions are dropped on the spot
    /// so their reply channels close instead of waiting forever.
    closed: bool,
}

/// FIFO queue feeding the worker; submissions may come from any thread.
struct JobQueue<T: PoolTransaction> {
    state: Mutex<QueueState<T>>,
    notify: Notify,
}

impl<T: PoolTransaction> JobQueue<T> {
    fn new() -> Self {
        Self {
            state: Mutex::new(QueueState { jobs: VecDeque::new(), next_id: 1, closed: false }),
            notify: Notify::new(),
        }
    }

    fn submit(&self, job: TxJob<T>) -> u64 {
        self.push(job, false)
    }

    fn submit_priority(&self, job: TxJob<T>) -> u64 {
        self.push(job, true)
    }

    fn push(&self, job: TxJob<T>, priority: bool) -> u64 {
        let id = {
            let mut state = self.state.lock();
            let id = state.take_id();
            if !state.closed {
                let queued = QueuedJob { id, job };
                if priority {
                    state.jobs.push_front(queued);
                } else {
                    state.jobs.push_back(queued);
                }
            }
            id
        };
        self.notify.notify_one();
        id
    }

    fn pop(&self) -> Option<QueuedJob<T>> {
        self.state.lock().jobs.pop_front()
    }

    fn drain(&self) -> usize {
        let mut state = self.state.lock();
        state.closed = true;
        let count = state.jobs.len();
        state.jobs.clear();
        count
    }

    fn len(&self) -> usize {
        self.state.lock().jobs.len()
    }
}

impl<T: PoolTransaction> QueueState<T> {
    /// Next id from the wrapping ring `1..=TX_JOB_ID_MAX`.
    fn take_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id = if id == TX_JOB_ID_MAX { 1 } else { id + 1 };
        id
    }
}

/// The single worker that executes jobs against the pool.
///
/// Every job runs to completion while holding the write half of the pool
/// lock; nothing suspends mid-update.
pub struct PoolService<T: PoolTransaction> {
    pool: Arc<RwLock<TxTabs<T>>>,
    queue: Arc<JobQueue<T>>,
}

// === impl PoolService ===

impl<T: PoolTransaction> PoolService<T> {
    /// Creates the worker and its submission handle.
    pub fn new(config: PoolConfig) -> (PoolHandle<T>, Self) {
        let pool = Arc::new(RwLock::new(TxTabs::new(config)));
        let queue = Arc::new(JobQueue::new());
        let handle = PoolHandle { pool: Arc::clone(&pool), queue: Arc::clone(&queue) };
        (handle, Self { pool, queue })
    }

    /// Runs the worker until an [`TxJob::Abort`] arrives.
    pub async fn run(self) {
        loop {
            let queued = self.next_job().await;
            if !self.process(queued) {
                break
            }
        }
        debug!(target: "txpool", "pool worker stopped");
    }

    async fn next_job(&self) -> QueuedJob<T> {
        loop {
            if let Some(job) = self.queue.pop() {
                return job
            }
            self.queue.notify.notified().await;
        }
    }

    /// Executes one job; returns false when the worker must stop.
    fn process(&self, queued: QueuedJob<T>) -> bool {
        let QueuedJob { id, job } = queued;
        trace!(target: "txpool", id, "processing job");
        match job {
            TxJob::AddTxs { transactions, local, status, info, reply } => {
                let results =
                    self.pool.write().insert_batch(transactions, local, status, &info);
                let _ = reply.send(results);
            }
            TxJob::EvictInactive { reply } => {
                let _ = reply.send(self.pool.write().evict_inactive(Instant::now()));
            }
            TxJob::GetAccounts { local, reply } => {
                let _ = reply.send(self.pool.read().accounts(local));
            }
            TxJob::GetBaseFee { reply } => {
                let _ = reply.send(self.pool.read().base_fee());
            }
            TxJob::SetBaseFee { base_fee, reply } => {
                self.pool.write().set_base_fee(base_fee);
                let _ = reply.send(());
            }
            TxJob::GetGasPrice { reply } => {
                let _ = reply.send(self.pool.read().min_gas_price());
            }
            TxJob::SetGasPrice { price, reply } => {
                let _ = reply.send(self.pool.write().set_min_gas_price(price));
            }
            TxJob::GetItem { hash, reply } => {
                let _ = reply.send(self.pool.read().get(&hash).map(Arc::clone));
            }
            TxJob::LocusCount { reply } => {
                let count = self.pool.read().count();
                let _ = reply.send((count.local, count.remote));
            }
            TxJob::MoveRemoteToLocals { sender, reply } => {
                let _ = reply.send(self.pool.write().move_remote_to_locals(&sender));
            }
            TxJob::StatsReport { reply } => {
                let count = self.pool.read().count();
                let _ = reply.send((count.pending, count.queued));
            }
            TxJob::Abort => {
                let dropped = self.queue.drain();
                debug!(target: "txpool", dropped, "aborting pool worker");
                return false
            }
        }
        true
    }
}

/// Cloneable submission side of the pool service.
///
/// Mutations are submitted as jobs and answered over the job's reply channel;
/// a handful of read-only snapshots bypass the queue through the read half of
/// the pool lock.
pub struct PoolHandle<T: PoolTransaction> {
    pool: Arc<RwLock<TxTabs<T>>>,
    queue: Arc<JobQueue<T>>,
}

impl<T: PoolTransaction> Clone for PoolHandle<T> {
    fn clone(&self) -> Self {
        Self { pool: Arc::clone(&self.pool), queue: Arc::clone(&self.queue) }
    }
}

// === impl PoolHandle ===

impl<T: PoolTransaction> PoolHandle<T> {
    /// Submits a job to the tail of the queue, returning its id.
    pub fn submit(&self, job: TxJob<T>) -> u64 {
        self.queue.submit(job)
    }

    /// Submits a job that jumps the head of the queue, returning its id.
    pub fn submit_priority(&self, job: TxJob<T>) -> u64 {
        self.queue.submit_priority(job)
    }

    /// Stages a batch of transactions, one result per input.
    pub async fn add_transactions(
        &self,
        transactions: Vec<T>,
        local: bool,
        status: TxStatus,
        info: impl Into<String>,
    ) -> Result<Vec<PoolResult<TxHash>>, ServiceUnavailable> {
        let (reply, rx) = oneshot::channel();
        self.queue.submit(TxJob::AddTxs {
            transactions,
            local,
            status,
            info: info.into(),
            reply,
        });
        rx.await.map_err(|_| ServiceUnavailable)
    }

    /// Evicts remote transactions past the configured lifetime.
    pub async fn evict_inactive(&self) -> Result<usize, ServiceUnavailable> {
        let (reply, rx) = oneshot::channel();
        self.queue.submit(TxJob::EvictInactive { reply });
        rx.await.map_err(|_| ServiceUnavailable)
    }

    /// Addresses with at least one item of the given locality.
    pub async fn accounts(&self, local: bool) -> Result<Vec<Address>, ServiceUnavailable> {
        let (reply, rx) = oneshot::channel();
        self.queue.submit(TxJob::GetAccounts { local, reply });
        rx.await.map_err(|_| ServiceUnavailable)
    }

    /// The base fee tips are currently valued against.
    pub async fn base_fee(&self) -> Result<i128, ServiceUnavailable> {
        let (reply, rx) = oneshot::channel();
        self.queue.submit(TxJob::GetBaseFee { reply });
        rx.await.map_err(|_| ServiceUnavailable)
    }

    /// Re-values every item against a new base fee.
    pub async fn set_base_fee(&self, base_fee: i128) -> Result<(), ServiceUnavailable> {
        let (reply, rx) = oneshot::channel();
        self.queue.submit(TxJob::SetBaseFee { base_fee, reply });
        rx.await.map_err(|_| ServiceUnavailable)
    }

    /// The tip cap floor for remote transactions.
    pub async fn gas_price(&self) -> Result<u128, ServiceUnavailable> {
        let (reply, rx) = oneshot::channel();
        self.queue.submit(TxJob::GetGasPrice { reply });
        rx.await.map_err(|_| ServiceUnavailable)
    }

    /// Sets the tip cap floor, answering how many remotes were dropped.
    pub async fn set_gas_price(&self, price: u128) -> Result<usize, ServiceUnavailable> {
        let (reply, rx) = oneshot::channel();
        self.queue.submit(TxJob::SetGasPrice { price, reply });
        rx.await.map_err(|_| ServiceUnavailable)
    }

    /// Looks up one live item by hash.
    pub async fn item(&self, hash: TxHash) -> Result<Option<Arc<TxItem<T>>>, ServiceUnavailable> {
        let (reply, rx) = oneshot::channel();
        self.queue.submit(TxJob::GetItem { hash, reply });
        rx.await.map_err(|_| ServiceUnavailable)
    }

    /// The (local, remote) occupancy split.
    pub async fn locus_count(&self) -> Result<(usize, usize), ServiceUnavailable> {
        let (reply, rx) = oneshot::channel();
        self.queue.submit(TxJob::LocusCount { reply });
        rx.await.map_err(|_| ServiceUnavailable)
    }

    /// Turns every remote item of one sender local.
    pub async fn move_remote_to_locals(
        &self,
        sender: Address,
    ) -> Result<usize, ServiceUnavailable> {
        let (reply, rx) = oneshot::channel();
        self.queue.submit(TxJob::MoveRemoteToLocals { sender, reply });
        rx.await.map_err(|_| ServiceUnavailable)
    }

    /// The (pending, queued) occupancy split.
    pub async fn stats_report(&self) -> Result<(usize, usize), ServiceUnavailable> {
        let (reply, rx) = oneshot::channel();
        self.queue.submit(TxJob::StatsReport { reply });
        rx.await.map_err(|_| ServiceUnavailable)
    }

    /// Stops the worker ahead of everything still queued; queued jobs are
    /// dropped and their reply channels close.
    pub fn abort(&self) -> u64 {
        self.queue.submit_priority(TxJob::Abort)
    }

    /// Snapshot of the occupancy counters, bypassing the queue.
    pub fn count(&self) -> PoolCount {
        self.pool.read().count()
    }

    /// Whether the hash identifies a live item, bypassing the queue.
    pub fn contains(&self, hash: &TxHash) -> bool {
        self.pool.read().contains(hash)
    }

    /// Runs a closure against a read-only snapshot of the pool.
    pub fn with_pool<R>(&self, f: impl FnOnce(&TxTabs<T>) -> R) -> R {
        f(&self.pool.read())
    }

    /// Number of jobs waiting in the queue.
    pub fn queued_jobs(&self) -> usize {
        self.queue.len()
    }
}

impl<T: PoolTransaction> fmt::Debug for PoolService<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PoolService").field("queued_jobs", &self.queue.len()).finish_non_exhaustive()
    }
}

impl<T: PoolTransaction> fmt::Debug for PoolHandle<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PoolHandle").field("queued_jobs", &self.queue.len()).finish_non_exhaustive()
    }
}
