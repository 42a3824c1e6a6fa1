use super::*;
use std::cmp::Ordering;
use std::hash::Hash;
use std::hash::Hasher;

/// One parameter combination of a sweep.
#[derive(Debug, Clone, Copy)]
pub struct Key {
    pub stages: usize,
    pub odds: Probability,
    pub population: usize,
}

impl PartialEq for Key {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}
impl Eq for Key {}

impl Ord for Key {
    fn cmp(&self, other: &Self) -> Ordering {
        Ordering::Equal
            .then_with(|| self.stages.cmp(&other.stages))
            .then_with(|| self.odds.total_cmp(&other.odds))
            .then_with(|| self.population.cmp(&other.population))
    }
}
impl PartialOrd for Key {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Hash for Key {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.stages.hash(state);
        self.odds.to_bits().hash(state);
        self.population.hash(state);
    }
}

impl std::fmt::Display for Key {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "numStages = {}, p = {:.6}, populationSize = {}",
            self.stages, self.odds, self.population
        )
    }
}
