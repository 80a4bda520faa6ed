//! A single fixed-capacity processing stage.
//!
//! A [`Stage`] accumulates quantity in its `available` pool. Each tick
//! it adds up to its rate: a root stage adds the full rate, a chained
//! stage adds only what it manages to [`withdraw`](Stage::withdraw) from
//! its predecessor. Chained stages live inside a
//! [`Pipeline`](crate::Pipeline), which resolves the predecessor id and
//! performs the pull; stages built standalone are always roots.

use std::fmt;

use matchsticks_core::normalize;
use matchsticks_core::{Rate, RateSpec, StageId};
use rand::Rng;

/// One processing unit in a linear chain.
///
/// Deliberately not `Clone`: a stage with a predecessor is only ever
/// reachable mutably through its pipeline, so a detached `&mut Stage`
/// is always a root.
#[derive(Debug)]
pub struct Stage {
    spec: RateSpec,
    rate: Rate,
    available: u64,
    tick_count: u64,
    predecessor: Option<StageId>,
}

impl Stage {
    /// A root stage with a fixed rate.
    pub fn new(rate: Rate) -> Self {
        Self {
            spec: RateSpec::Fixed(rate),
            rate,
            available: 0,
            tick_count: 0,
            predecessor: None,
        }
    }

    /// A root stage whose rate is drawn once from `min..=max`.
    ///
    /// Bounds follow [`RateSpec::range`] normalization (zero -> 1,
    /// inverted bounds swapped).
    pub fn ranged<R: Rng>(min: u64, max: u64, rng: &mut R) -> Self {
        Self::from_spec(RateSpec::range(min, max), rng)
    }

    /// A root stage built from a spec, resolving ranged specs with `rng`.
    pub fn from_spec<R: Rng>(spec: RateSpec, rng: &mut R) -> Self {
        let rate = spec.resolve(rng);
        Self {
            spec,
            ..Self::new(rate)
        }
    }

    pub(crate) fn with_predecessor(mut self, predecessor: Option<StageId>) -> Self {
        self.predecessor = predecessor;
        self
    }

    /// The fixed rate this stage runs at.
    pub fn rate(&self) -> Rate {
        self.rate
    }

    /// The spec the rate was drawn from. Display only.
    pub fn rate_spec(&self) -> RateSpec {
        self.spec
    }

    /// Quantity produced and not yet withdrawn downstream.
    pub fn available(&self) -> u64 {
        self.available
    }

    /// Completed tick-advances of this stage.
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    /// The stage this one pulls from, if any.
    pub fn predecessor(&self) -> Option<StageId> {
        self.predecessor
    }

    /// Whether this stage heads its chain.
    pub fn is_root(&self) -> bool {
        self.predecessor.is_none()
    }

    /// Advance a root stage `n` times (`0` and `1` both mean once).
    ///
    /// Each advance adds the full rate. Chained stages are ticked through
    /// [`Pipeline::tick_stage`](crate::Pipeline::tick_stage) instead.
    pub fn tick(&mut self, n: u64) {
        debug_assert!(self.is_root(), "chained stages tick through their pipeline");
        for _ in 0..normalize::ticks(n) {
            self.advance(self.rate.get());
        }
    }

    /// Grant up to `request` from the available pool.
    ///
    /// Returns `min(request, available)` and removes exactly that much.
    pub fn withdraw(&mut self, request: u64) -> u64 {
        let granted = request.min(self.available);
        self.available -= granted;
        granted
    }

    /// [`withdraw`](Self::withdraw) for signed callers. Negative requests
    /// grant 0 and leave the pool untouched.
    pub fn withdraw_signed(&mut self, request: i64) -> u64 {
        normalize::request_from_i64(request).map_or(0, |request| self.withdraw(request))
    }

    /// Record one completed advance that gained `granted`.
    pub(crate) fn advance(&mut self, granted: u64) {
        self.available = self.available.saturating_add(granted);
        self.tick_count = self.tick_count.saturating_add(1);
    }
}

impl Default for Stage {
    fn default() -> Self {
        Self::new(Rate::ONE)
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "+{} ({})", self.spec, self.available)
    }
}
