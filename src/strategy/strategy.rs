use super::*;

/// Closed set of stake policies.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Strategy {
    Constant(Constant),
    TimeLinear(TimeLinear),
}

impl From<Constant> for Strategy {
    fn from(c: Constant) -> Self {
        Self::Constant(c)
    }
}

impl From<TimeLinear> for Strategy {
    fn from(t: TimeLinear) -> Self {
        Self::TimeLinear(t)
    }
}

impl Stake for Strategy {
    fn fraction(&self, context: &Context) -> Probability {
        match self {
            Self::Constant(c) => c.fraction(context),
            Self::TimeLinear(t) => t.fraction(context),
        }
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Constant(c) => c.fmt(f),
            Self::TimeLinear(t) => t.fmt(f),
        }
    }
}
