//! Tick/pull propagation engine for linear production pipelines.
//!
//! A [`Pipeline`] owns an ordered chain of [`Stage`]s. Each round it
//! ticks the stages from last to first; every stage pulls up to its
//! rate from its predecessor, so quantity moves exactly one stage per
//! round and long-run throughput settles at the slowest rate in the
//! chain.
//!
//! Everything here is single-threaded and synchronous. Mutation goes
//! through `&mut self`; the borrow checker rules out reentrant ticking.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod metrics;
pub mod pipeline;
pub mod stage;

pub use config::{ConfigError, PipelineConfig};
pub use metrics::TickMetrics;
pub use pipeline::Pipeline;
pub use stage::Stage;
