use super::*;

/// Outcome of testing one strategy for evolutionary stability.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Verdict {
    /// Every mutant was repelled.
    Stable,
    /// A mutant won clearly more than its fair share.
    Invaded { invader: Choice, payoff: Probability },
    /// A mutant was near neutral and the resident failed to beat its fair
    /// share among a population of that mutant.
    Neutral { invader: Choice, payoff: Probability },
}

impl Verdict {
    pub fn is_stable(&self) -> bool {
        matches!(self, Self::Stable)
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Stable => write!(f, "stable"),
            Self::Invaded { invader, payoff } => {
                write!(f, "invaded by {} ({:.4})", invader, payoff)
            }
            Self::Neutral { invader, payoff } => {
                write!(f, "drifts to {} ({:.4})", invader, payoff)
            }
        }
    }
}
