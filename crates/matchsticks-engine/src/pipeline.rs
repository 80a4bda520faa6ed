//! The linear pipeline and its tick loop.
//!
//! [`Pipeline`] owns every [`Stage`] in its chain and wires each new
//! stage to the one appended before it. A round ticks the stages from
//! last to first, so when stage `i` pulls from stage `i - 1` the
//! upstream stage has not yet produced anything this round: quantity
//! advances exactly one stage boundary per round.
//!
//! # Ownership model
//!
//! Stages are reachable only through `&self` accessors. The pull between
//! neighbours is done here with a split borrow of the stage vector, so
//! a predecessor is referenced by [`StageId`] and never owned by its
//! successor.

use std::fmt;

use matchsticks_core::normalize;
use matchsticks_core::{Rate, RateSpec, StageId, TickId};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use smallvec::{smallvec, SmallVec};
use tracing::{debug, trace};

use crate::config::{ConfigError, PipelineConfig};
use crate::metrics::TickMetrics;
use crate::stage::Stage;

// Compile-time assertion: Pipeline can move between threads.
const _: () = {
    #[allow(dead_code)]
    fn assert_send<T: Send>() {}
    #[allow(dead_code)]
    fn check() {
        assert_send::<Pipeline>();
    }
};

/// An ordered chain of stages with aggregate reporting.
pub struct Pipeline {
    stages: Vec<Stage>,
    tick_count: u64,
    rng: ChaCha8Rng,
    last_metrics: TickMetrics,
}

impl Pipeline {
    /// An empty pipeline whose ranged draws are seeded from thread entropy.
    pub fn new() -> Self {
        Self::from_rng(ChaCha8Rng::from_rng(&mut rand::rng()))
    }

    /// An empty pipeline with reproducible ranged draws.
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(ChaCha8Rng::seed_from_u64(seed))
    }

    /// Build a pipeline from a validated [`PipelineConfig`].
    ///
    /// # Errors
    ///
    /// Returns the first error reported by [`PipelineConfig::validate`].
    pub fn from_config(config: PipelineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut pipeline = match config.seed {
            Some(seed) => Self::with_seed(seed),
            None => Self::new(),
        };
        for spec in &config.stages {
            pipeline.add_stage_spec(*spec);
        }
        debug!(
            stages = pipeline.len(),
            seed = ?config.seed,
            "pipeline built from config"
        );
        Ok(pipeline)
    }

    fn from_rng(rng: ChaCha8Rng) -> Self {
        Self {
            stages: Vec::new(),
            tick_count: 0,
            rng,
            last_metrics: TickMetrics::default(),
        }
    }

    /// Append a stage with a fixed rate. Never fails.
    pub fn add_stage(&mut self, rate: Rate) -> StageId {
        self.add_stage_spec(RateSpec::Fixed(rate))
    }

    /// Append a rate-1 stage.
    pub fn add_default_stage(&mut self) -> StageId {
        self.add_stage_spec(RateSpec::default())
    }

    /// Append a stage whose rate is drawn once from `min..=max`.
    pub fn add_ranged_stage(&mut self, min: u64, max: u64) -> StageId {
        self.add_stage_spec(RateSpec::range(min, max))
    }

    /// Append a stage built from `spec`.
    ///
    /// The new stage's predecessor is whichever stage is last at call
    /// time; the first stage appended is the root.
    pub fn add_stage_spec(&mut self, spec: RateSpec) -> StageId {
        let id = StageId(self.stages.len() as u32);
        let stage = Stage::from_spec(spec, &mut self.rng).with_predecessor(id.upstream());
        debug!(
            stage = %id,
            rate = %stage.rate(),
            spec = %spec,
            predecessor = ?stage.predecessor(),
            "stage appended"
        );
        self.stages.push(stage);
        id
    }

    /// Run `n` rounds (`0` and `1` both mean one round).
    pub fn tick(&mut self, n: u64) {
        for _ in 0..normalize::ticks(n) {
            self.tick_once();
        }
    }

    /// [`tick`](Self::tick) for signed callers. Anything below 2 means
    /// one round.
    pub fn tick_signed(&mut self, n: i64) {
        self.tick(normalize::ticks_from_i64(n));
    }

    fn tick_once(&mut self) {
        let mut gains: SmallVec<[u64; 8]> = smallvec![0; self.stages.len()];
        let mut starved = 0u32;
        for index in (0..self.stages.len()).rev() {
            let gained = self.advance_stage(index);
            if gained < self.stages[index].rate().get() {
                starved += 1;
            }
            gains[index] = gained;
        }
        self.tick_count = self.tick_count.saturating_add(1);

        let work_in_progress = self.work_in_progress();
        self.last_metrics = TickMetrics {
            tick: TickId(self.tick_count),
            delivered: gains.last().copied().unwrap_or(0),
            stage_gains: gains,
            work_in_progress,
            starved,
        };
        trace!(
            tick = self.tick_count,
            output = self.output(),
            work_in_progress,
            starved,
            "round complete"
        );
    }

    /// Advance the stage at `index` once, pulling from its predecessor.
    /// Returns the quantity gained.
    fn advance_stage(&mut self, index: usize) -> u64 {
        let (upstream, rest) = self.stages.split_at_mut(index);
        let Some(stage) = rest.first_mut() else {
            return 0;
        };
        let rate = stage.rate().get();
        let granted = match stage.predecessor() {
            None => rate,
            Some(pred) => upstream
                .get_mut(pred.index())
                .map_or(0, |source| source.withdraw(rate)),
        };
        stage.advance(granted);
        granted
    }

    /// Advance a single stage `n` times, pulling from its predecessor.
    ///
    /// Does not count as a pipeline round: [`tick_count`](Self::tick_count)
    /// and [`last_metrics`](Self::last_metrics) are untouched. Returns
    /// `false` if `id` names no stage in this pipeline.
    pub fn tick_stage(&mut self, id: StageId, n: u64) -> bool {
        if id.index() >= self.stages.len() {
            return false;
        }
        for _ in 0..normalize::ticks(n) {
            self.advance_stage(id.index());
        }
        true
    }

    /// Withdraw up to `request` from stage `id`, as a downstream consumer
    /// would. Unknown ids grant 0.
    pub fn withdraw(&mut self, id: StageId, request: u64) -> u64 {
        self.stages
            .get_mut(id.index())
            .map_or(0, |stage| stage.withdraw(request))
    }

    /// All stages in chain order.
    pub fn stages(&self) -> &[Stage] {
        &self.stages
    }

    /// Look up a stage by id.
    pub fn stage(&self, id: StageId) -> Option<&Stage> {
        self.stages.get(id.index())
    }

    /// Number of stages.
    pub fn len(&self) -> usize {
        self.stages.len()
    }

    /// Whether no stage has been appended yet.
    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Quantity delivered by the line: the last stage's pool, or 0.
    pub fn output(&self) -> u64 {
        self.stages.last().map_or(0, Stage::available)
    }

    /// Completed pipeline rounds.
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    /// Average output per round, or 0.0 before the first round.
    ///
    /// Over many rounds this converges to the rate of the
    /// [`bottleneck`](Self::bottleneck) stage.
    pub fn throughput(&self) -> f64 {
        if self.tick_count == 0 {
            return 0.0;
        }
        self.output() as f64 / self.tick_count as f64
    }

    /// Quantity held inside the line (every stage but the last).
    pub fn work_in_progress(&self) -> u64 {
        self.stages.split_last().map_or(0, |(_, upstream)| {
            upstream
                .iter()
                .fold(0u64, |acc, stage| acc.saturating_add(stage.available()))
        })
    }

    /// The first stage with the lowest rate, if any.
    pub fn bottleneck(&self) -> Option<StageId> {
        self.stages
            .iter()
            .enumerate()
            .min_by_key(|(_, stage)| stage.rate())
            .map(|(index, _)| StageId(index as u32))
    }

    /// Flow recorded during the most recent round.
    pub fn last_metrics(&self) -> &TickMetrics {
        &self.last_metrics
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pipeline")
            .field("stages", &self.stages)
            .field("tick_count", &self.tick_count)
            .field("last_metrics", &self.last_metrics)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for Pipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for stage in &self.stages {
            write!(f, "[{stage}]")?;
        }
        if !self.stages.is_empty() {
            write!(f, " ")?;
        }
        write!(f, "({})", self.output())
    }
}
