//! Matchsticks: discrete-time production pipelines with pull-based flow.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the Matchsticks sub-crates. For most users, adding `matchsticks` as a
//! single dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use matchsticks::prelude::*;
//!
//! // Three rate-1 stages: quantity needs one round per boundary.
//! let mut pipeline = Pipeline::with_seed(42);
//! for _ in 0..3 {
//!     pipeline.add_default_stage();
//! }
//! pipeline.tick(3);
//! assert_eq!(pipeline.output(), 1);
//! assert_eq!(pipeline.to_string(), "[+1 (1)][+1 (1)][+1 (1)] (1)");
//!
//! // Long-run throughput settles at the slowest stage.
//! let config = PipelineConfig::parse("10,8,6,4,2").unwrap();
//! let mut line = Pipeline::from_config(config).unwrap();
//! line.tick(2000);
//! assert!((line.throughput() - 2.0).abs() < 0.01);
//! assert_eq!(line.bottleneck(), Some(StageId(4)));
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `matchsticks-core` | IDs, `Rate`, `RateSpec`, normalization, parse errors |
//! | [`engine`] | `matchsticks-engine` | `Stage`, `Pipeline`, `PipelineConfig`, `TickMetrics` |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types, rates, and normalization (`matchsticks-core`).
pub use matchsticks_core as types;

/// Stages, pipelines, configuration, and metrics (`matchsticks-engine`).
pub use matchsticks_engine as engine;

/// Common imports for building and running pipelines.
pub mod prelude {
    pub use matchsticks_core::{ParseRateError, Rate, RateSpec, StageId, TickId};
    pub use matchsticks_engine::{ConfigError, Pipeline, PipelineConfig, Stage, TickMetrics};
}
