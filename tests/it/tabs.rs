//! Store-level scenario and property tests.

use rand::{seq::SliceRandom, Rng};
use std::time::{Duration, Instant};
use txtabs::{
    test_utils::{mock_tx_tabs, MockTransaction},
    PoolConfig, TxErrorKind, TxStatus, TxTabs, TX_NO_BASE_FEE,
};

#[test]
fn duplicate_insert_reports_already_known() {
    let mut pool = mock_tx_tabs();
    let tx = MockTransaction::legacy().with_gas_price(10);

    let hash = pool.insert(tx.clone(), false, TxStatus::Queued, "").unwrap();
    let err = pool.insert(tx, false, TxStatus::Queued, "").unwrap_err();

    assert_eq!(err.hash, hash);
    assert_eq!(err.kind, TxErrorKind::AlreadyKnown);
    assert_eq!(pool.count().total, 1);
    pool.assert_invariants();
}

#[test]
fn tip_iteration_orders_by_effective_tip() {
    let mut pool = mock_tx_tabs();
    for tip in [10u128, 30, 20] {
        pool.insert(
            MockTransaction::legacy().with_gas_price(tip),
            false,
            TxStatus::Queued,
            "",
        )
        .unwrap();
    }

    let asc: Vec<_> = pool.tips_asc().map(|item| item.gas_tip_cap()).collect();
    assert_eq!(asc, vec![10, 20, 30]);
    let desc: Vec<_> = pool.tips_desc().map(|item| item.gas_tip_cap()).collect();
    assert_eq!(desc, vec![30, 20, 10]);
    pool.assert_invariants();
}

#[test]
fn base_fee_rebase_moves_items() {
    let mut pool = mock_tx_tabs();
    pool.set_base_fee(5);
    let hash = pool
        .insert(
            MockTransaction::eip1559().with_max_fee(20).with_priority_fee(15),
            false,
            TxStatus::Pending,
            "",
        )
        .unwrap();

    assert_eq!(pool.tips_eq(15).next().unwrap().hash(), &hash);

    pool.set_base_fee(12);
    assert_eq!(pool.tips_eq(15).count(), 0);
    assert_eq!(pool.tips_eq(8).next().unwrap().hash(), &hash);
    pool.assert_invariants();
}

#[test]
fn rebase_round_trip_is_idempotent() {
    let mut pool = mock_tx_tabs();
    let mut rng = rand::thread_rng();
    for _ in 0..50 {
        let tx = if rng.gen_bool(0.5) {
            MockTransaction::legacy().with_gas_price(rng.gen_range(1..200))
        } else {
            MockTransaction::eip1559()
                .with_max_fee(rng.gen_range(1..200))
                .with_priority_fee(rng.gen_range(1..50))
        };
        pool.insert(tx, rng.gen_bool(0.3), TxStatus::Queued, "").unwrap();
    }
    pool.set_base_fee(7);

    let before: Vec<_> = pool.tips_asc().map(|item| *item.hash()).collect();
    pool.set_base_fee(90);
    pool.set_base_fee(TX_NO_BASE_FEE);
    pool.set_base_fee(7);
    let after: Vec<_> = pool.tips_asc().map(|item| *item.hash()).collect();

    assert_eq!(before, after);
    pool.assert_invariants();
}

#[test]
fn locality_swap_preserves_arrival_order() {
    let mut pool = mock_tx_tabs();
    let locals: Vec<_> = (0..2)
        .map(|_| {
            pool.insert(
                MockTransaction::legacy().with_gas_price(5),
                true,
                TxStatus::Queued,
                "",
            )
            .unwrap()
        })
        .collect();
    let remotes: Vec<_> = (0..2)
        .map(|_| {
            pool.insert(
                MockTransaction::legacy().with_gas_price(5),
                false,
                TxStatus::Queued,
                "",
            )
            .unwrap()
        })
        .collect();

    for hash in &locals {
        assert!(pool.reassign_locality(hash, false));
    }
    for hash in &remotes {
        assert!(pool.reassign_locality(hash, true));
    }

    let count = pool.count();
    assert_eq!(count.local, 2);
    assert_eq!(count.remote, 2);

    // arrival order within each partition is the move order
    let now_remote: Vec<_> = pool.arrivals(false).map(|item| *item.hash()).collect();
    assert_eq!(now_remote, locals);
    let now_local: Vec<_> = pool.arrivals(true).map(|item| *item.hash()).collect();
    assert_eq!(now_local, remotes);
    pool.assert_invariants();
}

#[test]
fn double_locality_swap_restores_memberships() {
    let mut pool = mock_tx_tabs();
    let hash = pool
        .insert(MockTransaction::legacy().with_gas_price(5), true, TxStatus::Pending, "")
        .unwrap();
    let sender = pool.get(&hash).unwrap().sender();
    let before = pool.count();

    assert!(pool.reassign_locality(&hash, false));
    assert!(pool.reassign_locality(&hash, true));

    assert_eq!(pool.count(), before);
    assert_eq!(pool.sender_locus_count(&sender), (1, 0));
    assert!(pool.get(&hash).unwrap().is_local());
    pool.assert_invariants();
}

#[test]
fn age_eviction_fills_wastebasket() {
    let lifetime = Duration::from_secs(3600);
    let mut pool = TxTabs::new(PoolConfig { lifetime, max_rejects: 40, ..Default::default() });
    let t0 = Instant::now();

    let old: Vec<_> = (0..100)
        .map(|_| {
            pool.insert_at(
                t0,
                MockTransaction::legacy().with_gas_price(5),
                false,
                TxStatus::Queued,
                "",
            )
            .unwrap()
        })
        .collect();
    let fresh = pool
        .insert_at(
            t0 + lifetime,
            MockTransaction::legacy().with_gas_price(5),
            false,
            TxStatus::Queued,
            "",
        )
        .unwrap();

    let evicted = pool.evict_inactive(t0 + lifetime + Duration::from_secs(1));
    assert_eq!(evicted, 100);
    assert!(old.iter().all(|hash| !pool.contains(hash)));
    assert!(pool.contains(&fresh));
    assert_eq!(pool.count().total, 1);

    // the wastebasket keeps only the newest max_rejects entries
    assert_eq!(pool.count().rejected, 40);
    assert_eq!(pool.rejected().count(), 40);
    assert!(pool.get_rejected(&old[0]).is_none());
    assert!(pool.get_rejected(&old[99]).is_some());
    pool.assert_invariants();
}

#[test]
fn promote_remotes_of_one_sender() {
    let mut pool = mock_tx_tabs();
    let sender = alloy_address();
    for nonce in 0..5 {
        pool.insert(
            MockTransaction::legacy().with_sender(sender).with_nonce(nonce).with_gas_price(5),
            false,
            TxStatus::Queued,
            "",
        )
        .unwrap();
    }
    for nonce in 5..7 {
        pool.insert(
            MockTransaction::legacy().with_sender(sender).with_nonce(nonce).with_gas_price(5),
            true,
            TxStatus::Queued,
            "",
        )
        .unwrap();
    }
    let total = pool.count().total;

    assert_eq!(pool.move_remote_to_locals(&sender), 5);
    assert_eq!(pool.sender_locus_count(&sender), (7, 0));
    assert_eq!(pool.count().total, total);
    assert_eq!(pool.sender_items_by_locality(&sender, true).len(), 7);
    pool.assert_invariants();
}

#[test]
fn invariants_survive_random_churn() {
    let mut rng = rand::thread_rng();
    let mut pool = TxTabs::new(PoolConfig { max_rejects: 16, ..Default::default() });
    let mut hashes = Vec::new();
    let senders: Vec<_> = (0..5).map(|_| alloy_address()).collect();

    for round in 0..400 {
        match rng.gen_range(0..10) {
            0..=4 => {
                let sender = *senders.choose(&mut rng).unwrap();
                let tx = MockTransaction::eip1559()
                    .with_sender(sender)
                    .with_nonce(rng.gen_range(0..20))
                    .with_max_fee(rng.gen_range(1..500))
                    .with_priority_fee(rng.gen_range(1..100));
                if let Ok(hash) = pool.insert(tx, rng.gen_bool(0.2), TxStatus::Queued, "") {
                    hashes.push(hash);
                }
            }
            5 => {
                if let Some(hash) = hashes.choose(&mut rng) {
                    pool.delete(hash);
                }
            }
            6 => {
                if let Some(hash) = hashes.choose(&mut rng) {
                    pool.reject(hash, TxErrorKind::Unspecified);
                }
            }
            7 => {
                if let Some(hash) = hashes.choose(&mut rng) {
                    pool.reassign_locality(hash, rng.gen_bool(0.5));
                }
            }
            8 => {
                if let Some(hash) = hashes.choose(&mut rng) {
                    let status = TxStatus::ALL[rng.gen_range(0..3)];
                    pool.reassign_status(hash, status);
                }
            }
            _ => {
                pool.set_base_fee(rng.gen_range(0..100));
            }
        }
        if round % 25 == 0 {
            pool.assert_invariants();
        }
    }
    pool.assert_invariants();

    // counters agree with a scan at the end of the run
    let count = pool.count();
    assert_eq!(count.total, pool.arrivals(true).count() + pool.arrivals(false).count());
    assert_eq!(count.total, pool.tips_asc().count());
}

#[test]
fn arrival_navigation_follows_partition_order() {
    let mut pool = mock_tx_tabs();
    let remotes: Vec<_> = (0..3)
        .map(|_| {
            pool.insert(
                MockTransaction::legacy().with_gas_price(5),
                false,
                TxStatus::Queued,
                "",
            )
            .unwrap()
        })
        .collect();
    let local = pool
        .insert(MockTransaction::legacy().with_gas_price(5), true, TxStatus::Queued, "")
        .unwrap();

    assert_eq!(pool.arrival_first(false).unwrap().hash(), &remotes[0]);
    assert_eq!(pool.arrival_last(false).unwrap().hash(), &remotes[2]);
    assert_eq!(pool.arrival_next(false, &remotes[0]).unwrap().hash(), &remotes[1]);
    assert_eq!(pool.arrival_prev(false, &remotes[2]).unwrap().hash(), &remotes[1]);
    assert!(pool.arrival_next(false, &remotes[2]).is_none());
    assert!(pool.arrival_prev(false, &remotes[0]).is_none());

    // the sole local is both ends of its partition
    assert_eq!(pool.arrival_first(true).unwrap().hash(), &local);
    assert_eq!(pool.arrival_last(true).unwrap().hash(), &local);
    // a hash resolves only within its own partition
    assert!(pool.arrival_next(true, &remotes[0]).is_none());

    // a mover becomes the newest arrival of its destination
    assert!(pool.reassign_locality(&remotes[0], true));
    assert_eq!(pool.arrival_last(true).unwrap().hash(), &remotes[0]);
    assert_eq!(pool.arrival_prev(true, &remotes[0]).unwrap().hash(), &local);
    assert_eq!(pool.arrival_first(false).unwrap().hash(), &remotes[1]);
    pool.assert_invariants();
}

#[test]
fn tip_range_queries_cover_the_pool() {
    let mut pool = mock_tx_tabs();
    for tip in [10u128, 20, 20, 30] {
        pool.insert(
            MockTransaction::legacy().with_gas_price(tip),
            false,
            TxStatus::Queued,
            "",
        )
        .unwrap();
    }

    let ge: Vec<_> = pool.tips_ge(20).map(|item| item.gas_tip_cap()).collect();
    assert_eq!(ge, vec![20, 20, 30]);
    let gt: Vec<_> = pool.tips_gt(20).map(|item| item.gas_tip_cap()).collect();
    assert_eq!(gt, vec![30]);
    let le: Vec<_> = pool.tips_le(20).map(|item| item.gas_tip_cap()).collect();
    assert_eq!(le, vec![10, 20, 20]);
    let lt: Vec<_> = pool.tips_lt(20).map(|item| item.gas_tip_cap()).collect();
    assert_eq!(lt, vec![10]);

    // the strict and inclusive bounds partition the pool at every tip
    for bound in [-1i128, 10, 15, 20, 30, 31] {
        assert_eq!(pool.tips_ge(bound).count() + pool.tips_lt(bound).count(), 4);
        assert_eq!(pool.tips_gt(bound).count() + pool.tips_le(bound).count(), 4);
    }

    // rebasing moves every bound with the keys: tips become 1, 11, 11, 21
    pool.set_base_fee(9);
    assert_eq!(pool.tips_ge(11).count(), 3);
    assert_eq!(pool.tips_lt(11).count(), 1);
    assert_eq!(pool.tips_gt(21).count(), 0);
    pool.assert_invariants();
}

#[test]
fn remotes_below_excludes_locals() {
    let mut pool = mock_tx_tabs();
    let cheap_remote = pool
        .insert(MockTransaction::legacy().with_gas_price(5), false, TxStatus::Queued, "")
        .unwrap();
    pool.insert(MockTransaction::legacy().with_gas_price(5), true, TxStatus::Queued, "")
        .unwrap();
    pool.insert(MockTransaction::legacy().with_gas_price(50), false, TxStatus::Queued, "")
        .unwrap();

    let below: Vec<_> = pool.remotes_below(10).map(|item| *item.hash()).collect();
    assert_eq!(below, vec![cheap_remote]);
    // the bound is strict
    assert_eq!(pool.remotes_below(5).count(), 0);

    // tip caps are unadjusted, so the base fee changes nothing here
    pool.set_base_fee(40);
    let below: Vec<_> = pool.remotes_below(10).map(|item| *item.hash()).collect();
    assert_eq!(below, vec![cheap_remote]);
    pool.assert_invariants();
}

#[test]
fn sender_status_views_follow_reassignment() {
    let mut pool = mock_tx_tabs();
    let sender = alloy_address();
    let hashes: Vec<_> = (0..4)
        .map(|nonce| {
            pool.insert(
                MockTransaction::legacy().with_sender(sender).with_nonce(nonce).with_gas_price(5),
                false,
                TxStatus::Queued,
                "",
            )
            .unwrap()
        })
        .collect();

    assert!(pool.reassign_status(&hashes[1], TxStatus::Pending));
    assert!(pool.reassign_status(&hashes[2], TxStatus::Staged));

    let nonces = |pool: &TxTabs<MockTransaction>, status| {
        pool.sender_items_by_status(&sender, status)
            .iter()
            .map(|item| item.nonce())
            .collect::<Vec<_>>()
    };
    assert_eq!(nonces(&pool, TxStatus::Queued), vec![0, 3]);
    assert_eq!(nonces(&pool, TxStatus::Pending), vec![1]);
    assert_eq!(nonces(&pool, TxStatus::Staged), vec![2]);

    assert!(pool.reassign_status(&hashes[1], TxStatus::Staged));
    assert_eq!(nonces(&pool, TxStatus::Pending), Vec::<u64>::new());
    assert_eq!(nonces(&pool, TxStatus::Staged), vec![1, 2]);
    assert!(pool.sender_items_by_status(&alloy_address(), TxStatus::Queued).is_empty());
    pool.assert_invariants();
}

fn alloy_address() -> alloy_primitives::Address {
    alloy_primitives::Address::random()
}
