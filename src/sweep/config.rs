use super::*;
use serde::Deserialize;
use std::path::Path;

/// Start and end stake fractions of the time-linear strategy family.
#[derive(Debug, Clone, Deserialize)]
pub struct Endpoints {
    pub start: Span<Probability>,
    pub end: Span<Probability>,
}

/// Everything a run needs, as read from the JSON configuration file.
///
/// Ranged fields accept a bare number or a `"start:step:end"` string.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    pub epsilon: Span<Probability>,
    pub num_stages: Span<usize>,
    pub num_rounds: Span<usize>,
    pub win_probability: Span<Probability>,
    pub start_money: Span<Money>,
    pub population_size: Span<usize>,
    pub strategy: Endpoints,
    #[serde(default)]
    pub constant: Option<Span<Probability>>,
    #[serde(default)]
    pub output_file_name: Option<String>,
    pub mode: Mode,
    #[serde(default)]
    pub output_mode: Layout,
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub workers: Option<usize>,
}

impl Config {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, Fault> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| Fault::config(format!("reading {}: {}", path.display(), e)))?;
        Self::parse(&text)
    }
    /// Parses and validates; any rules a combination would violate are
    /// reported here, before a single round is simulated.
    pub fn parse(text: &str) -> Result<Self, Fault> {
        let config = serde_json::from_str::<Self>(text)?;
        config.validate()?;
        Ok(config)
    }
    fn validate(&self) -> Result<(), Fault> {
        if !(self.epsilon() >= 0.) {
            return Err(Fault::config("epsilon must be non-negative"));
        }
        if self.population_size.values().contains(&0) {
            return Err(Fault::config("populationSize must be positive"));
        }
        if self.strategies().is_empty() {
            return Err(Fault::config("strategy set is empty"));
        }
        if self.workers == Some(0) {
            return Err(Fault::config("workers must be positive"));
        }
        for ref key in self.keys() {
            self.rules(key)?;
        }
        Ok(())
    }

    pub fn epsilon(&self) -> Probability {
        self.epsilon.first()
    }
    pub fn rounds(&self) -> usize {
        self.num_rounds.first()
    }
    pub fn bankroll(&self) -> Money {
        self.start_money.first()
    }
    pub fn rules(&self, key: &Key) -> Result<Rules, Fault> {
        Rules::new(key.stages, self.rounds(), key.odds, self.bankroll())
    }
    /// One time-linear strategy per (start, end) pair, then one constant
    /// strategy per listed fraction.
    pub fn strategies(&self) -> Vec<Strategy> {
        let ref ends = self.strategy.end.values();
        let linear = self
            .strategy
            .start
            .values()
            .into_iter()
            .flat_map(|start| ends.iter().map(move |&end| TimeLinear::from((start, end))))
            .map(Strategy::from);
        let constant = self
            .constant
            .iter()
            .flat_map(Span::values)
            .map(Constant::new)
            .map(Strategy::from);
        linear.chain(constant).collect()
    }
    /// Every parameter combination, stages outermost.
    pub fn keys(&self) -> Vec<Key> {
        let mut keys = Vec::new();
        for stages in self.num_stages.values() {
            for odds in self.win_probability.values() {
                for population in self.population_size.values() {
                    keys.push(Key {
                        stages,
                        odds,
                        population,
                    });
                }
            }
        }
        keys
    }
}
