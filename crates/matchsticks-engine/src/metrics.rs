//! Per-round flow metrics for a pipeline.
//!
//! [`TickMetrics`] captures what moved during a single pipeline round:
//! how much each stage gained, how much left the end of the line, and
//! how much is still sitting inside it.

use matchsticks_core::TickId;
use smallvec::SmallVec;

/// Flow recorded during one pipeline round.
///
/// The pipeline overwrites this after every round; for a multi-round
/// [`Pipeline::tick`](crate::Pipeline::tick) it describes the last one.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TickMetrics {
    /// Pipeline tick this round completed. `TickId(0)` before any round.
    pub tick: TickId,
    /// Quantity each stage gained this round, in chain order.
    pub stage_gains: SmallVec<[u64; 8]>,
    /// Quantity gained by the last stage (added to the pipeline output).
    pub delivered: u64,
    /// Quantity held by every stage except the last after the round.
    pub work_in_progress: u64,
    /// Stages that gained less than their rate this round.
    pub starved: u32,
}

impl TickMetrics {
    /// Total quantity moved by all stages this round.
    pub fn total_moved(&self) -> u64 {
        self.stage_gains
            .iter()
            .fold(0u64, |acc, &gain| acc.saturating_add(gain))
    }
}
