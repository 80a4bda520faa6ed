//! Strongly-typed identifiers.

use std::fmt;

/// Identifies a stage within a pipeline.
///
/// Stages are appended in order and never removed, so `StageId(n)` is
/// always the n-th stage of the owning pipeline. A stage id is a
/// non-owning reference: it carries no borrow and says nothing about
/// which pipeline it came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StageId(pub u32);

impl StageId {
    /// Position of this stage in its pipeline's stage sequence.
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// The id of the stage immediately upstream, if any.
    pub fn upstream(self) -> Option<StageId> {
        self.0.checked_sub(1).map(StageId)
    }
}

impl fmt::Display for StageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for StageId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

/// Monotonically increasing tick counter.
///
/// Incremented each time a pipeline completes one round.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TickId(pub u64);

impl fmt::Display for TickId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for TickId {
    fn from(v: u64) -> Self {
        Self(v)
    }
}
