//! Reusable pipeline fixtures.
//!
//! All builders seed with [`FIXTURE_SEED`] so ranged draws are identical
//! from run to run.

use matchsticks_core::{Rate, RateSpec};
use matchsticks_engine::{Pipeline, Stage};

/// Seed used by every fixture builder.
pub const FIXTURE_SEED: u64 = 0x5eed;

/// A pipeline with one fixed-rate stage per entry, in order.
pub fn chain(rates: &[u64]) -> Pipeline {
    let mut pipeline = Pipeline::with_seed(FIXTURE_SEED);
    for &rate in rates {
        pipeline.add_stage(Rate::new(rate));
    }
    pipeline
}

/// A pipeline with one ranged stage per `(min, max)` entry.
pub fn ranged_chain(bounds: &[(u64, u64)], seed: u64) -> Pipeline {
    let mut pipeline = Pipeline::with_seed(seed);
    for &(min, max) in bounds {
        pipeline.add_stage_spec(RateSpec::range(min, max));
    }
    pipeline
}

/// Build `rates` as a chain and run it for `ticks` rounds.
pub fn run(rates: &[u64], ticks: u64) -> Pipeline {
    let mut pipeline = chain(rates);
    pipeline.tick(ticks);
    pipeline
}

/// Every stage's available pool, in chain order.
pub fn levels(pipeline: &Pipeline) -> Vec<u64> {
    pipeline.stages().iter().map(Stage::available).collect()
}

/// Sum of every stage's available pool.
///
/// With no external withdrawals this equals everything the root has
/// produced, since pulls only move quantity between stages.
pub fn total_inventory(pipeline: &Pipeline) -> u64 {
    pipeline.stages().iter().map(Stage::available).sum()
}
