use super::*;

/// Immutable parameters shared by every simulation they configure.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rules {
    stages: usize,
    rounds: usize,
    odds: Probability,
    bankroll: Money,
}

impl Rules {
    /// Validated construction.
    ///
    /// - `stages`: bets per round, at least one
    /// - `rounds`: independent rounds per simulation, at least one
    /// - `odds`: probability each stake is doubled, within [0, 1]
    /// - `bankroll`: money every player starts each round with, positive
    pub fn new(
        stages: usize,
        rounds: usize,
        odds: Probability,
        bankroll: Money,
    ) -> Result<Self, Fault> {
        if stages == 0 {
            return Err(Fault::config("numStages must be positive"));
        }
        if rounds == 0 {
            return Err(Fault::config("numRounds must be positive"));
        }
        if !(0. ..=1.).contains(&odds) {
            return Err(Fault::config(format!(
                "winProbability {} outside [0, 1]",
                odds
            )));
        }
        if !(bankroll.is_finite() && bankroll > 0.) {
            return Err(Fault::config(format!(
                "startMoney {} must be positive",
                bankroll
            )));
        }
        Ok(Self {
            stages,
            rounds,
            odds,
            bankroll,
        })
    }
    pub fn stages(&self) -> usize {
        self.stages
    }
    pub fn rounds(&self) -> usize {
        self.rounds
    }
    pub fn odds(&self) -> Probability {
        self.odds
    }
    pub fn bankroll(&self) -> Money {
        self.bankroll
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_degenerate_odds() {
        assert!(Rules::new(1, 1, 0., 1.).is_ok());
        assert!(Rules::new(1, 1, 1., 1.).is_ok());
    }

    #[test]
    fn rejects_invalid() {
        assert!(Rules::new(0, 10, 0.5, 100.).is_err());
        assert!(Rules::new(3, 0, 0.5, 100.).is_err());
        assert!(Rules::new(3, 10, 1.5, 100.).is_err());
        assert!(Rules::new(3, 10, Probability::NAN, 100.).is_err());
        assert!(Rules::new(3, 10, 0.5, 0.).is_err());
    }
}
