//! Pull propagation through chained stages.
//!
//! Each test builds a small chain, drives individual stages or whole
//! rounds, and checks every stage's pool after each step.

use matchsticks_core::{Rate, StageId};
use matchsticks_engine::{Pipeline, Stage};
use matchsticks_test_utils::{chain, levels, total_inventory};
use proptest::prelude::*;

// ── Stage-level pulls ───────────────────────────────────────────

#[test]
fn successor_takes_at_most_what_predecessor_has() {
    let mut pipeline = chain(&[1, 2]);
    let (first, second) = (StageId(0), StageId(1));

    pipeline.tick_stage(first, 3);
    assert_eq!(levels(&pipeline), [3, 0]);

    // Full rate: enough units were waiting upstream.
    pipeline.tick_stage(second, 1);
    assert_eq!(levels(&pipeline), [1, 2]);

    // Only one unit left upstream.
    pipeline.tick_stage(second, 1);
    assert_eq!(levels(&pipeline), [0, 3]);

    // Upstream is dry.
    pipeline.tick_stage(second, 1);
    assert_eq!(levels(&pipeline), [0, 3]);

    pipeline.tick_stage(first, 2);
    pipeline.tick_stage(second, 1);
    assert_eq!(levels(&pipeline), [0, 5]);

    let second_stage = pipeline.stage(second).unwrap();
    assert_eq!(second_stage.tick_count(), 4);
    assert_eq!(second_stage.predecessor(), Some(first));
}

#[test]
fn detached_stage_is_a_root() {
    let mut stage = Stage::new(Rate::new(3));
    stage.tick(4);
    assert_eq!(stage.available(), 12);
    assert!(stage.is_root());
}

#[test]
fn external_withdrawal_starves_downstream() {
    let mut pipeline = chain(&[2, 2]);
    pipeline.tick_stage(StageId(0), 1);
    assert_eq!(pipeline.withdraw(StageId(0), 10), 2);
    pipeline.tick_stage(StageId(1), 1);
    assert_eq!(levels(&pipeline), [0, 0]);
}

// ── Round ordering ──────────────────────────────────────────────

#[test]
fn default_stages_lag_one_round_per_boundary() {
    let mut pipeline = Pipeline::with_seed(1);
    for _ in 0..3 {
        pipeline.add_default_stage();
    }

    let expected: [([u64; 3], u64); 3] = [([1, 0, 0], 0), ([1, 1, 0], 0), ([1, 1, 1], 1)];
    for (round, (pools, output)) in expected.into_iter().enumerate() {
        pipeline.tick(1);
        assert_eq!(levels(&pipeline), pools, "after round {}", round + 1);
        assert_eq!(pipeline.output(), output, "after round {}", round + 1);
    }
}

#[test]
fn quantity_produced_this_round_is_not_pulled_this_round() {
    let mut pipeline = chain(&[5, 5]);
    pipeline.tick(1);
    assert_eq!(levels(&pipeline), [5, 0]);
    assert_eq!(pipeline.last_metrics().stage_gains.as_slice(), &[5, 0]);
}

#[test]
fn tick_zero_and_one_run_a_single_round() {
    for n in [0, 1] {
        let mut pipeline = chain(&[1, 1]);
        pipeline.tick(n);
        assert_eq!(pipeline.tick_count(), 1);
        assert_eq!(levels(&pipeline), [1, 0]);
    }
}

// ── Invariants ──────────────────────────────────────────────────

fn arb_rates() -> impl Strategy<Value = Vec<u64>> {
    prop::collection::vec(1u64..20, 1..8)
}

proptest! {
    #[test]
    fn pulls_conserve_quantity(rates in arb_rates(), ticks in 1u64..150) {
        let pipeline = {
            let mut p = chain(&rates);
            p.tick(ticks);
            p
        };
        prop_assert_eq!(total_inventory(&pipeline), rates[0] * ticks);
    }

    #[test]
    fn no_stage_gains_more_than_its_rate(rates in arb_rates(), ticks in 1u64..50) {
        let mut pipeline = chain(&rates);
        for _ in 0..ticks {
            pipeline.tick(1);
            let gains = &pipeline.last_metrics().stage_gains;
            for (gain, rate) in gains.iter().zip(&rates) {
                prop_assert!(gain <= rate);
            }
        }
    }

    #[test]
    fn output_never_decreases(rates in arb_rates(), ticks in 1u64..100) {
        let mut pipeline = chain(&rates);
        let mut last = 0;
        for _ in 0..ticks {
            pipeline.tick(1);
            prop_assert!(pipeline.output() >= last);
            last = pipeline.output();
        }
    }

    #[test]
    fn output_is_bounded_by_bottleneck(rates in arb_rates(), ticks in 1u64..300) {
        let pipeline = {
            let mut p = chain(&rates);
            p.tick(ticks);
            p
        };
        let slowest = *rates.iter().min().unwrap();
        let lag = rates.len() as u64 - 1;
        prop_assert!(pipeline.output() <= slowest * ticks);
        prop_assert!(pipeline.output() >= slowest * ticks.saturating_sub(lag));
    }
}
