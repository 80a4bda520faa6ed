//! Test fixtures and inspection helpers for Matchsticks development.
//!
//! Provides seeded chain builders ([`chain`], [`ranged_chain`]) and
//! read-only probes over a [`Pipeline`] for assertions
//! ([`levels`], [`total_inventory`], [`run`]).

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{chain, levels, ranged_chain, run, total_inventory, FIXTURE_SEED};
