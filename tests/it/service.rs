//! Driver-level tests over the job queue.

use alloy_primitives::Address;
use txtabs::{
    test_utils::MockTransaction, PoolConfig, PoolHandle, PoolService, TxErrorKind, TxStatus,
    TX_NO_BASE_FEE,
};

#[tokio::test]
async fn batch_reports_per_transaction_codes() {
    let (handle, service) = PoolService::new(PoolConfig::default());
    let worker = tokio::spawn(service.run());

    let good = MockTransaction::legacy().with_gas_price(20);
    let duplicate = good.clone();
    let unsigned = MockTransaction::legacy().with_gas_price(20).corrupt_signature();
    let cheap = MockTransaction::legacy(); // gas price 0, below the floor

    let results = handle
        .add_transactions(
            vec![good.clone(), duplicate, unsigned, cheap],
            false,
            TxStatus::Queued,
            "p2p",
        )
        .await
        .unwrap();

    assert_eq!(results.len(), 4);
    assert!(results[0].is_ok());
    assert_eq!(results[1].as_ref().unwrap_err().kind, TxErrorKind::AlreadyKnown);
    assert_eq!(results[2].as_ref().unwrap_err().kind, TxErrorKind::InvalidSender);
    assert_eq!(results[3].as_ref().unwrap_err().kind, TxErrorKind::Underpriced);

    assert_eq!(handle.count().total, 1);
    handle.abort();
    worker.await.unwrap();
}

#[tokio::test]
async fn base_fee_and_gas_price_jobs() {
    let (handle, service) = PoolService::new(PoolConfig::default());
    let worker = tokio::spawn(service.run());

    assert_eq!(handle.base_fee().await.unwrap(), TX_NO_BASE_FEE);
    handle.set_base_fee(12).await.unwrap();
    assert_eq!(handle.base_fee().await.unwrap(), 12);

    handle
        .add_transactions(
            vec![
                MockTransaction::legacy().with_gas_price(15),
                MockTransaction::legacy().with_gas_price(60),
            ],
            false,
            TxStatus::Queued,
            "",
        )
        .await
        .unwrap();

    // raising the floor drops the cheap remote
    assert_eq!(handle.set_gas_price(30).await.unwrap(), 1);
    assert_eq!(handle.gas_price().await.unwrap(), 30);
    assert_eq!(handle.count().total, 1);
    assert_eq!(handle.count().rejected, 1);

    handle.abort();
    worker.await.unwrap();
}

#[tokio::test]
async fn accounts_and_promotion_jobs() {
    let (handle, service) = PoolService::new(PoolConfig::default());
    let worker = tokio::spawn(service.run());

    let sender = Address::random();
    let txs: Vec<_> = (0..3)
        .map(|nonce| {
            MockTransaction::legacy().with_sender(sender).with_nonce(nonce).with_gas_price(5)
        })
        .collect();
    handle.add_transactions(txs, false, TxStatus::Pending, "").await.unwrap();

    assert_eq!(handle.accounts(false).await.unwrap(), vec![sender]);
    assert!(handle.accounts(true).await.unwrap().is_empty());
    assert_eq!(handle.locus_count().await.unwrap(), (0, 3));
    assert_eq!(handle.stats_report().await.unwrap(), (3, 0));

    assert_eq!(handle.move_remote_to_locals(sender).await.unwrap(), 3);
    assert_eq!(handle.locus_count().await.unwrap(), (3, 0));
    assert_eq!(handle.accounts(true).await.unwrap(), vec![sender]);

    // eviction spares locals
    assert_eq!(handle.evict_inactive().await.unwrap(), 0);
    assert_eq!(handle.count().total, 3);

    handle.abort();
    worker.await.unwrap();
}

#[tokio::test]
async fn item_lookup_round_trips() {
    let (handle, service) = PoolService::new(PoolConfig::default());
    let worker = tokio::spawn(service.run());

    let tx = MockTransaction::eip1559().with_max_fee(40).with_priority_fee(3);
    let results =
        handle.add_transactions(vec![tx.clone()], true, TxStatus::Staged, "rpc").await.unwrap();
    let hash = *results[0].as_ref().unwrap();

    let item = handle.item(hash).await.unwrap().unwrap();
    assert_eq!(item.hash(), &hash);
    assert_eq!(item.status(), TxStatus::Staged);
    assert!(item.is_local());
    assert_eq!(item.info(), "rpc");
    assert!(handle.contains(&hash));

    assert!(handle.item(alloy_primitives::TxHash::random()).await.unwrap().is_none());

    handle.abort();
    worker.await.unwrap();
}

#[tokio::test]
async fn abort_drops_queued_jobs() {
    let (handle, service): (PoolHandle<MockTransaction>, _) =
        PoolService::new(PoolConfig::default());

    // queue work before the worker runs, then jump the queue with an abort
    let pending = {
        let handle = handle.clone();
        tokio::spawn(async move { handle.evict_inactive().await })
    };
    while handle.queued_jobs() == 0 {
        tokio::task::yield_now().await;
    }
    handle.abort();

    let worker = tokio::spawn(service.run());
    worker.await.unwrap();

    // the queued job was drained without an answer
    assert!(pending.await.unwrap().is_err());
    // and the stopped service refuses new requests
    assert!(handle.base_fee().await.is_err());
    assert!(handle.stats_report().await.is_err());
}
