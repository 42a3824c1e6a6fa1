//! Crate-wide error type.
use crate::*;
use thiserror::Error;

/// Everything that can stop an analysis run.
///
/// Tie rounds are not faults; they are settled by [`Rounds::wins`].
#[derive(Debug, Error)]
pub enum Fault {
    /// Missing or out-of-range configuration value.
    #[error("configuration error: {0}")]
    Config(String),
    /// Canonical ranking walked past the last canonical profile.
    #[error("profile {0} has no canonical index")]
    Unindexed(Profile),
    /// Payoff query for a slot the profile does not have.
    #[error("player {player} outside population of {population}")]
    Player { player: usize, population: usize },
    /// Report sink failure.
    #[error("report sink: {0}")]
    Io(#[from] std::io::Error),
}

impl Fault {
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}

impl From<serde_json::Error> for Fault {
    fn from(e: serde_json::Error) -> Self {
        Self::Config(e.to_string())
    }
}
