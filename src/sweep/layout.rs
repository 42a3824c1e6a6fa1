use super::*;
use serde::Deserialize;
use std::cmp::Ordering;

/// Nesting order of the parameter loops in a report, outermost first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(try_from = "u8")]
pub enum Layout {
    /// stages, then win probability, then population
    #[default]
    Stages,
    /// win probability, then population, then stages
    Odds,
    /// population, then stages, then win probability
    Population,
}

impl Layout {
    /// Report order of two parameter combinations.
    pub fn order(&self, a: &Key, b: &Key) -> Ordering {
        let stages = || a.stages.cmp(&b.stages);
        let odds = || a.odds.total_cmp(&b.odds);
        let population = || a.population.cmp(&b.population);
        match self {
            Self::Stages => stages().then_with(odds).then_with(population),
            Self::Odds => odds().then_with(population).then_with(stages),
            Self::Population => population().then_with(stages).then_with(odds),
        }
    }
    /// Sorts combinations into report order.
    pub fn arrange(&self, keys: &mut [Key]) {
        keys.sort_by(|a, b| self.order(a, b));
    }
}

impl TryFrom<u8> for Layout {
    type Error = Fault;
    fn try_from(mode: u8) -> Result<Self, Self::Error> {
        match mode {
            0 => Ok(Self::Stages),
            1 => Ok(Self::Odds),
            2 => Ok(Self::Population),
            n => Err(Fault::config(format!("outputMode {} not in 0..=2", n))),
        }
    }
}
