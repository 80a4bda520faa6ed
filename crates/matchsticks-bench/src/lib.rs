//! Benchmark profiles for the Matchsticks pipeline engine.
//!
//! Provides pre-built [`PipelineConfig`] profiles for benchmarks and
//! examples:
//!
//! - [`descending_profile`]: `[10, 8, 6, 4, 2]`, bottleneck at the end
//! - [`ascending_profile`]: `[2, 4, 6, 8, 10]`, bottleneck at the root
//! - [`long_chain_profile`]: many ranged stages for stress runs

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use matchsticks_core::RateSpec;
use matchsticks_engine::PipelineConfig;

/// Five stages with falling rates.
pub fn descending_profile() -> PipelineConfig {
    PipelineConfig::from_rates(&[10, 8, 6, 4, 2])
}

/// Five stages with rising rates.
pub fn ascending_profile() -> PipelineConfig {
    PipelineConfig::from_rates(&[2, 4, 6, 8, 10])
}

/// `len` stages, each drawn from `1..=12`, reproducible from `seed`.
pub fn long_chain_profile(len: usize, seed: u64) -> PipelineConfig {
    PipelineConfig {
        stages: vec![RateSpec::range(1, 12); len],
        seed: Some(seed),
    }
}
