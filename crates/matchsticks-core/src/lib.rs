//! Core types for Matchsticks production pipelines.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the vocabulary shared by the rest of the workspace: stage and tick
//! identifiers, the [`Rate`] and [`RateSpec`] capacity types, the pure
//! input [`normalize`] functions, and the parse error type.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod id;
pub mod normalize;
pub mod rate;

pub use error::ParseRateError;
pub use id::{StageId, TickId};
pub use rate::{Rate, RateSpec};
