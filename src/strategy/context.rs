use crate::*;

/// Game state visible to a stake policy at one stage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Context {
    /// Probability that a stake is doubled.
    pub odds: Probability,
    /// Stages per round.
    pub stages: usize,
    /// Current stage, counted from [`FIRST_STAGE`].
    pub stage: usize,
    /// Players in the game.
    pub players: usize,
    /// Money held before this stage's stake.
    pub money: Money,
}

impl Context {
    /// Round progress in (0, 1]; 1 on the final stage.
    pub fn progress(&self) -> Probability {
        self.stage as Probability / self.stages as Probability
    }
}
