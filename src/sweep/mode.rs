use serde::Deserialize;

/// Which analysis a sweep runs for every parameter combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum Mode {
    /// Test every strategy for evolutionary stability.
    #[serde(rename = "evolutionaryStabilityTest")]
    Stability,
    /// Build the full payoff table and list its Nash equilibria.
    #[serde(rename = "payoffFunction")]
    Payoff,
}
