//! Time-linear stake fraction.

use super::*;

/// Stakes `slope * x + offset`, clamped to [0, 1], where `x` is the
/// fraction of the round already played (`stage / stages`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeLinear {
    slope: Probability,
    offset: Probability,
}

impl TimeLinear {
    pub fn new(slope: Probability, offset: Probability) -> Self {
        Self { slope, offset }
    }
    pub fn slope(&self) -> Probability {
        self.slope
    }
    pub fn offset(&self) -> Probability {
        self.offset
    }
}

/// Interpolates from a fraction `start` at the beginning of the round
/// to `end` at its close.
impl From<(Probability, Probability)> for TimeLinear {
    fn from((start, end): (Probability, Probability)) -> Self {
        Self::new(end - start, start)
    }
}

impl Stake for TimeLinear {
    fn fraction(&self, context: &Context) -> Probability {
        (self.slope * context.progress() + self.offset).clamp(0., 1.)
    }
}

impl std::fmt::Display for TimeLinear {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}*x+{:?}", self.slope, self.offset)
    }
}
