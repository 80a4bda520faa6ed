//! Long-run throughput converges to the slowest stage.

use matchsticks_core::StageId;
use matchsticks_test_utils::run;

const TOLERANCE: f64 = 0.01;

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < TOLERANCE,
        "throughput {actual} not within {TOLERANCE} of {expected}"
    );
}

#[test]
fn equal_rates_deliver_one_per_tick() {
    let pipeline = run(&[1, 1, 1], 1000);
    assert_eq!(pipeline.output(), 998);
    assert_close(pipeline.throughput(), 1.0);
}

#[test]
fn descending_chain_settles_at_last_rate() {
    let pipeline = run(&[10, 8, 6, 4, 2], 2000);
    assert_close(pipeline.throughput(), 2.0);
    assert_eq!(pipeline.bottleneck(), Some(StageId(4)));
}

#[test]
fn ascending_chain_settles_at_first_rate() {
    let pipeline = run(&[2, 4, 6, 8, 10], 2000);
    assert_close(pipeline.throughput(), 2.0);
    assert_eq!(pipeline.bottleneck(), Some(StageId(0)));
}

#[test]
fn interior_bottleneck_limits_the_line() {
    let pipeline = run(&[9, 9, 3, 9, 9], 2000);
    assert_close(pipeline.throughput(), 3.0);
    assert_eq!(pipeline.bottleneck(), Some(StageId(2)));
    // Inventory piles up in front of the slow stage.
    let before_bottleneck = pipeline.stage(StageId(1)).unwrap().available();
    assert!(before_bottleneck > 1000);
}

#[test]
fn throughput_is_zero_before_first_round() {
    let pipeline = matchsticks_test_utils::chain(&[4, 2]);
    assert_eq!(pipeline.throughput(), 0.0);
}
