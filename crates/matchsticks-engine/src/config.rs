//! Pipeline configuration, validation, and error types.
//!
//! [`PipelineConfig`] is the builder-input for constructing a pipeline in
//! one go. [`validate()`](PipelineConfig::validate) checks structural
//! limits; [`Pipeline::from_config`](crate::Pipeline::from_config) calls it
//! before appending any stage.

use std::str::FromStr;

use matchsticks_core::{ParseRateError, Rate, RateSpec};
use thiserror::Error;

/// Most stages a single pipeline can address (`StageId` is a `u32`).
pub const MAX_STAGES: usize = u32::MAX as usize;

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected while parsing or validating a [`PipelineConfig`].
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A stage entry in a chain description failed to parse.
    #[error("stage {index}: {source}")]
    InvalidStage {
        /// Zero-based position of the entry in the chain.
        index: usize,
        /// The underlying parse failure.
        #[source]
        source: ParseRateError,
    },
    /// More stages than a [`StageId`](matchsticks_core::StageId) can address.
    #[error("{count} stages exceeds the limit of {max}", max = MAX_STAGES)]
    TooManyStages {
        /// The configured stage count.
        count: usize,
    },
}

// ── PipelineConfig ─────────────────────────────────────────────────

/// Complete description of a pipeline to build.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PipelineConfig {
    /// Stage specs in chain order. `stages[0]` is the root.
    pub stages: Vec<RateSpec>,
    /// Seed for ranged draws. `None` seeds from thread entropy.
    pub seed: Option<u64>,
}

impl PipelineConfig {
    /// A config with fixed rates, in chain order.
    pub fn from_rates(rates: &[u64]) -> Self {
        Self {
            stages: rates.iter().copied().map(RateSpec::fixed).collect(),
            seed: None,
        }
    }

    /// A config from signed rates; non-positive entries default to 1.
    pub fn from_raw_rates(rates: &[i64]) -> Self {
        Self {
            stages: rates
                .iter()
                .map(|&raw| RateSpec::Fixed(Rate::from_i64(raw)))
                .collect(),
            seed: None,
        }
    }

    /// Parse a comma separated chain such as `"10,8,+6,2-4"`.
    ///
    /// Each entry uses the [`RateSpec`] grammar. Blank input is an
    /// empty chain; a blank entry between commas is an error.
    pub fn parse(chain: &str) -> Result<Self, ConfigError> {
        if chain.trim().is_empty() {
            return Ok(Self::default());
        }
        let stages = chain
            .split(',')
            .enumerate()
            .map(|(index, entry)| {
                entry
                    .parse::<RateSpec>()
                    .map_err(|source| ConfigError::InvalidStage { index, source })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { stages, seed: None })
    }

    /// Set the seed for ranged draws.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validate all structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.stages.len() > MAX_STAGES {
            return Err(ConfigError::TooManyStages {
                count: self.stages.len(),
            });
        }
        Ok(())
    }
}

impl FromStr for PipelineConfig {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
