use std::ops::ControlFlow;

use lotto_core::combo::combination_count;
use lotto_core::filter::Constraints;
use lotto_core::model::{Bounds, LottoNumber, Pool};
use lotto_core::session::{Report, Session};

fn constraints(even: (u8, u8), sum: (u16, u16)) -> Constraints {
    Constraints::new(
        Bounds::even_count(even.0, even.1).expect("even bounds"),
        Bounds::sum(sum.0, sum.1).expect("sum bounds"),
    )
}

fn sweep(pool: Pool, constraints: Constraints) -> (Report, Vec<[u8; 6]>) {
    let mut accepted = Vec::new();
    let report = Session::new(pool, constraints)
        .expect("session")
        .run(|ticket| {
            accepted.push(ticket.map(LottoNumber::value));
            ControlFlow::Continue(())
        })
        .expect("sweep completes");
    (report, accepted)
}

fn assert_invariants(report: &Report) {
    let stats = &report.stats;
    assert_eq!(
        stats.rejected_even() + stats.rejected_sum() + stats.accepted(),
        report.total,
        "every ticket lands in exactly one bucket"
    );
    assert_eq!(
        stats.frequency().iter().sum::<u64>(),
        6 * stats.accepted(),
        "frequency table accounts for six numbers per accepted ticket"
    );
    assert_eq!(stats.frequency().len(), report.pool.len());
}

/// Six hand-written loops, mirroring the classic formulation.
fn nested_loop_reference(values: &[u8], even: (u8, u8), sum: (u16, u16)) -> (u64, u64, u64) {
    let n = values.len();
    let (mut rejected_even, mut rejected_sum, mut accepted) = (0, 0, 0);
    for a in 0..n - 5 {
        for b in a + 1..n - 4 {
            for c in b + 1..n - 3 {
                for d in c + 1..n - 2 {
                    for e in d + 1..n - 1 {
                        for f in e + 1..n {
                            let picked = [a, b, c, d, e, f].map(|i| values[i]);
                            let evens = picked.iter().filter(|v| *v % 2 == 0).count() as u8;
                            let total: u16 = picked.iter().map(|&v| u16::from(v)).sum();
                            if evens < even.0 || evens > even.1 {
                                rejected_even += 1;
                            } else if total < sum.0 || total > sum.1 {
                                rejected_sum += 1;
                            } else {
                                accepted += 1;
                            }
                        }
                    }
                }
            }
        }
    }
    (rejected_even, rejected_sum, accepted)
}

#[test]
fn seven_number_pool_with_loose_windows_accepts_all() {
    // Leaving out x gives sum 28 - x (21..=27) and 2 or 3 evens.
    let pool = Pool::new(1..=7).expect("pool");
    let (report, accepted) = sweep(pool, constraints((2, 3), (21, 27)));

    assert_eq!(report.total, 7);
    assert_eq!(report.stats.rejected_even(), 0);
    assert_eq!(report.stats.rejected_sum(), 0);
    assert_eq!(report.stats.accepted(), 7);
    assert_eq!(accepted.len(), 7);
    assert_invariants(&report);
}

#[test]
fn seven_number_pool_hand_computed_split() {
    // Leaving out an odd x keeps all three evens; sums 27, 25, 23, 21, so
    // only x = 5 and x = 7 fit 21..=24. Leaving out 2, 4 or 6 keeps two evens.
    let pool = Pool::new(1..=7).expect("pool");
    let (report, accepted) = sweep(pool, constraints((3, 3), (21, 24)));

    assert_eq!(report.total, 7);
    assert_eq!(report.stats.rejected_even(), 3);
    assert_eq!(report.stats.rejected_sum(), 2);
    assert_eq!(report.stats.accepted(), 2);
    assert_eq!(accepted, vec![[1, 2, 3, 4, 5, 6], [1, 2, 3, 4, 6, 7]]);

    let freq: Vec<(u8, u64)> = report.frequencies().map(|(n, c)| (n.value(), c)).collect();
    assert_eq!(
        freq,
        vec![(1, 2), (2, 2), (3, 2), (4, 2), (5, 1), (6, 2), (7, 1)]
    );
    assert_invariants(&report);
}

#[test]
fn widest_windows_accept_every_ticket() {
    for (size, seed) in [(7usize, 1u64), (9, 2), (12, 3), (15, 4), (18, 5)] {
        let pool = Pool::quick_pick(size, seed).expect("pool");
        let (report, _) = sweep(pool, Constraints::widest());
        assert_eq!(Ok(report.total), combination_count(size));
        assert_eq!(report.stats.rejected_even(), 0);
        assert_eq!(report.stats.rejected_sum(), 0);
        assert_eq!(report.stats.accepted(), report.total);
        assert_invariants(&report);
    }
}

#[test]
fn zero_even_window_rejects_any_even_regardless_of_sum() {
    // 1..=14 holds seven odd numbers, so exactly seven all-odd tickets exist.
    let pool = Pool::new(1..=14).expect("pool");
    let (report, accepted) = sweep(pool, constraints((0, 0), (21, 21)));

    assert_eq!(report.total, 3003);
    assert_eq!(report.stats.rejected_even(), 3003 - 7);
    // The all-odd tickets sum to at least 36, outside 21..=21.
    assert_eq!(report.stats.rejected_sum(), 7);
    assert_eq!(report.stats.accepted(), 0);
    assert!(accepted.is_empty());
    assert_invariants(&report);
}

#[test]
fn ticket_failing_both_filters_counts_as_even_rejection_only() {
    let pool = Pool::new([1, 3, 5, 7, 9, 11, 13]).expect("pool");
    // No evens (fails min 1) and sums of 36..=48 (fail min 200).
    let (report, _) = sweep(pool, constraints((1, 6), (200, 279)));

    assert_eq!(report.stats.rejected_even(), 7);
    assert_eq!(report.stats.rejected_sum(), 0);
    assert_eq!(report.stats.accepted(), 0);
}

#[test]
fn matches_nested_loop_reference_across_windows() {
    let windows = [
        ((0, 6), (21, 279)),
        ((2, 4), (100, 180)),
        ((3, 3), (120, 160)),
        ((0, 1), (21, 279)),
        ((5, 6), (21, 100)),
    ];
    for (size, seed) in [(10usize, 11u64), (13, 12), (16, 13)] {
        let pool = Pool::quick_pick(size, seed).expect("pool");
        let values: Vec<u8> = pool.iter().map(|n| n.value()).collect();
        for (even, sum) in windows {
            let (report, accepted) = sweep(pool.clone(), constraints(even, sum));
            let expected = nested_loop_reference(&values, even, sum);
            assert_eq!(
                (
                    report.stats.rejected_even(),
                    report.stats.rejected_sum(),
                    report.stats.accepted()
                ),
                expected,
                "pool {values:?} even {even:?} sum {sum:?}"
            );
            assert_eq!(accepted.len() as u64, report.stats.accepted());
            assert_invariants(&report);
        }
    }
}

#[test]
fn accepted_tickets_are_ascending_pool_members() {
    let pool = Pool::new([3, 8, 12, 17, 21, 26, 30, 33, 38, 41, 44, 47]).expect("pool");
    let members: Vec<u8> = pool.iter().map(|n| n.value()).collect();
    let (_, accepted) = sweep(pool, constraints((2, 4), (90, 200)));
    assert!(!accepted.is_empty());
    for ticket in accepted {
        assert!(ticket.windows(2).all(|w| w[0] < w[1]), "{ticket:?}");
        assert!(ticket.iter().all(|v| members.contains(v)));
    }
}

#[test]
fn repeated_sweeps_are_identical() {
    let pool = Pool::quick_pick(12, 7).expect("pool");
    let c = constraints((1, 4), (80, 200));
    let (first_report, first) = sweep(pool.clone(), c);
    let (second_report, second) = sweep(pool, c);
    assert_eq!(first, second);
    assert_eq!(first_report, second_report);
}
