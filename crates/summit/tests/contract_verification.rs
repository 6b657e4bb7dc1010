//! # Strategy Contract Verification
//!
//! Every property here must hold for BOTH ranking backends - the merge
//! refresh engine and the bounded heap engine - through the identical query
//! contract. Tests never name a backend in their assertions; they only vary
//! the configured strategy.
//!
//! Run with: cargo test --package summit --test contract_verification

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::cmp::Ordering;
use summit::{rank_ordering, Leaderboard, LeaderboardConfig, RefreshPolicy, Strategy};

const STRATEGIES: [Strategy; 2] = [Strategy::MergeRefresh, Strategy::BoundedHeap];

fn board(strategy: Strategy, capacity: usize) -> Leaderboard {
    let config = LeaderboardConfig {
        capacity,
        strategy,
        refresh: RefreshPolicy::immediate(),
    };
    Leaderboard::new(config).expect("valid config")
}

/// Asserts the full window invariant set: bounded length, adjacent-pair
/// sortedness, no duplicate players, and agreement between listed rank,
/// rank lookup, and the ledger's current record.
fn assert_window_invariants(b: &Leaderboard) {
    let top = b.top_n(usize::MAX);
    assert!(top.len() <= b.capacity());

    for pair in top.windows(2) {
        assert_ne!(
            rank_ordering(&pair[0].record, &pair[1].record),
            Ordering::Greater,
            "window out of ranking order"
        );
    }

    let mut seen = std::collections::HashSet::new();
    for (position, entry) in top.iter().enumerate() {
        assert_eq!(entry.rank, position + 1);
        assert!(
            seen.insert(entry.record.player_id.clone()),
            "player listed twice: {}",
            entry.record.player_id
        );

        let looked_up = b.player_rank(&entry.record.player_id).expect("ranked player");
        assert_eq!(looked_up.rank, entry.rank);
        assert_eq!(
            looked_up.record, entry.record,
            "window entry differs from the ledger"
        );
    }
}

#[test]
fn verify_tie_break_scenario() {
    for strategy in STRATEGIES {
        let b = board(strategy, 10);
        b.update_score("A", 10, 1);
        b.update_score("B", 20, 2);
        b.update_score("C", 10, 3);

        let top = b.top_n(3);
        let order: Vec<&str> = top.iter().map(|e| e.record.player_id.as_str()).collect();
        assert_eq!(order, vec!["B", "A", "C"], "strategy {}", strategy.name());
        assert_eq!(b.player_rank("A").unwrap().rank, 2);
        assert_eq!(b.player_rank("C").unwrap().rank, 3);
        assert_window_invariants(&b);
    }
}

#[test]
fn verify_eviction_keeps_raw_score() {
    for strategy in STRATEGIES {
        let b = board(strategy, 2);
        b.update_score("D", 30, 1);
        b.update_score("E", 20, 2);
        b.update_score("F", 25, 3);

        let top = b.top_n(10);
        let order: Vec<&str> = top.iter().map(|e| e.record.player_id.as_str()).collect();
        assert_eq!(order, vec!["D", "F"], "strategy {}", strategy.name());

        let evicted = b.player_rank("E").unwrap();
        assert_eq!(evicted.rank, 0, "evicted player is unranked, not gone");
        assert_eq!(evicted.record.score, 20);
        assert_window_invariants(&b);
    }
}

#[test]
fn verify_top_n_clamping() {
    for strategy in STRATEGIES {
        let b = board(strategy, 10);
        b.update_score("a", 1, 1);
        b.update_score("b", 2, 2);

        assert!(b.top_n(0).is_empty());
        assert_eq!(b.top_n(1000).len(), 2);
    }
}

#[test]
fn verify_unknown_player_is_not_found() {
    for strategy in STRATEGIES {
        let b = board(strategy, 10);
        b.update_score("known", 5, 1);
        assert!(b.player_rank("never-staged").is_err());
        assert!(b.player_rank_range("never-staged", 3).is_empty());
    }
}

#[test]
fn verify_rank_range_around_player() {
    for strategy in STRATEGIES {
        let b = board(strategy, 10);
        for (i, id) in ["p1", "p2", "p3", "p4", "p5"].iter().enumerate() {
            b.update_score(*id, 100 - (i as i64) * 10, i as i64 + 1);
        }

        // p3 holds position 2 of 5; radius 1 covers ranks 1..=3 as positions.
        let range = b.player_rank_range("p3", 1);
        let ranks: Vec<usize> = range.iter().map(|e| e.rank).collect();
        assert_eq!(ranks, vec![2, 3, 4], "strategy {}", strategy.name());

        // Radius clipped at both edges.
        assert_eq!(b.player_rank_range("p1", 2).len(), 3);
        assert_eq!(b.player_rank_range("p5", 2).len(), 3);

        // Evicted players have no neighborhood.
        let small = board(strategy, 1);
        small.update_score("top", 100, 1);
        small.update_score("out", 1, 2);
        assert!(small.player_rank_range("out", 2).is_empty());
    }
}

#[test]
fn verify_repeated_refresh_is_idempotent() {
    for strategy in STRATEGIES {
        let b = board(strategy, 5);
        for i in 0..20_i64 {
            b.update_score(format!("p{i}"), i * 3 % 17, i + 1);
        }

        let first = b.top_n(usize::MAX);
        let generation = b.refresh_generation();
        let second = b.top_n(usize::MAX);

        assert_eq!(first, second);
        assert_eq!(
            b.refresh_generation(),
            generation,
            "read with no intervening update must not refresh"
        );
    }
}

#[test]
fn verify_last_write_wins_within_interval() {
    for strategy in STRATEGIES {
        let b = board(strategy, 10);
        b.update_score("volatile", 5, 1);
        b.update_score("volatile", 500, 2);
        b.update_score("volatile", 50, 3);

        let entry = b.player_rank("volatile").unwrap();
        assert_eq!(entry.record.score, 50, "only the latest value survives");
        assert_window_invariants(&b);
    }
}

#[test]
fn verify_invariants_under_generated_load() {
    for strategy in STRATEGIES {
        let b = board(strategy, 50);
        let mut rng = ChaCha8Rng::seed_from_u64(0x5EED);

        // Seed the full population, then churn a random subset of it.
        for i in 0..300_i64 {
            b.update_score(format!("player{i}"), rng.gen_range(0..10_000), i + 1);
        }
        for step in 1_000..6_000_i64 {
            let player = format!("player{}", rng.gen_range(0..300));
            let score = rng.gen_range(0..10_000);
            b.update_score(player, score, step);

            if step % 617 == 0 {
                assert_window_invariants(&b);
            }
        }
        assert_window_invariants(&b);
        assert_eq!(b.player_count(), 300, "strategy {}", strategy.name());
        assert_eq!(b.window_len(), 50);
    }
}
