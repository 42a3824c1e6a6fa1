use super::*;
use rand::Rng;

/// Runs invasion experiments for one population size under fixed rules.
#[derive(Debug, Clone)]
pub struct Tester {
    rules: Rules,
    strategies: Vec<Strategy>,
    population: usize,
    epsilon: Probability,
}

impl Tester {
    pub fn new(
        rules: Rules,
        strategies: &[Strategy],
        population: usize,
        epsilon: Probability,
    ) -> Result<Self, Fault> {
        if population == 0 {
            return Err(Fault::config("populationSize must be positive"));
        }
        Ok(Self {
            rules,
            strategies: strategies.to_vec(),
            population,
            epsilon,
        })
    }

    /// Win share a lone player can expect in a population of equals.
    pub fn fair(&self) -> Probability {
        1. / self.population as Probability
    }

    /// Tests `focal` against every other strategy, stopping at the first
    /// mutant it fails to repel.
    pub fn verdict<R: Rng>(&self, focal: Choice, rng: &mut R) -> Verdict {
        self.judge(focal, |mutant, resident| self.share(mutant, resident, rng))
    }

    /// Applies the two stability rules to win shares drawn from `share`,
    /// called as `share(mutant, resident)`.
    fn judge<F>(&self, focal: Choice, mut share: F) -> Verdict
    where
        F: FnMut(Choice, Choice) -> Probability,
    {
        let fair = self.fair();
        for invader in (0..self.strategies.len()).filter(|&y| y != focal) {
            let payoff = share(invader, focal);
            if payoff < fair {
                continue;
            }
            if (payoff - fair).abs() <= self.epsilon {
                let payoff = share(focal, invader);
                if payoff > fair {
                    continue;
                }
                log::debug!("{:<32}{:<32}", format!("{} neutral vs", focal), invader);
                return Verdict::Neutral { invader, payoff };
            }
            log::debug!("{:<32}{:<32}", format!("{} invaded by", focal), invader);
            return Verdict::Invaded { invader, payoff };
        }
        Verdict::Stable
    }

    /// Win frequency of one `mutant` seated among `population - 1`
    /// `resident` players. Every call simulates a freshly built game.
    fn share<R: Rng>(&self, mutant: Choice, resident: Choice, rng: &mut R) -> Probability {
        let ref mutant = self.strategies[mutant];
        let ref resident = self.strategies[resident];
        let roster = std::iter::once(mutant)
            .chain(std::iter::repeat_n(resident, self.population - 1));
        Game::from((self.rules, roster))
            .simulate(rng)
            .wins(rng)
            .frequency()
            .get(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    /// With certain wins, staking everything beats any smaller stake.
    fn certain(population: usize) -> Tester {
        let rules = Rules::new(3, 500, 1., 100.).unwrap();
        let strategies = [0.5, 1.].map(|c| Strategy::from(Constant::new(c)));
        Tester::new(rules, &strategies, population, 0.05).unwrap()
    }

    #[test]
    fn dominant_strategy_is_stable() {
        let ref mut rng = SmallRng::seed_from_u64(0);
        assert_eq!(certain(2).verdict(1, rng), Verdict::Stable);
        assert_eq!(certain(5).verdict(1, rng), Verdict::Stable);
    }

    #[test]
    fn dominated_strategy_is_invaded() {
        let ref mut rng = SmallRng::seed_from_u64(0);
        assert_eq!(
            certain(2).verdict(0, rng),
            Verdict::Invaded {
                invader: 1,
                payoff: 1.
            }
        );
    }

    #[test]
    fn near_neutral_mutant_triggers_reversed_test() {
        // the lone all-in mutant wins every round, within epsilon of 1/2;
        // the half-in resident then wins none as the lone mutant
        let ref mut rng = SmallRng::seed_from_u64(0);
        let rules = Rules::new(3, 200, 1., 100.).unwrap();
        let strategies = [0.5, 1.].map(|c| Strategy::from(Constant::new(c)));
        let tester = Tester::new(rules, &strategies, 2, 1.).unwrap();
        assert_eq!(
            tester.verdict(0, rng),
            Verdict::Neutral {
                invader: 1,
                payoff: 0.
            }
        );
    }

    #[test]
    fn epsilon_boundary_is_near_neutral() {
        // the all-in mutant's share is exactly 1/P + epsilon
        let ref mut rng = SmallRng::seed_from_u64(0);
        let rules = Rules::new(3, 200, 1., 100.).unwrap();
        let strategies = [0.5, 1.].map(|c| Strategy::from(Constant::new(c)));
        let at = Tester::new(rules, &strategies, 2, 0.5).unwrap();
        let below = Tester::new(rules, &strategies, 2, 0.49).unwrap();
        assert!(matches!(at.verdict(0, rng), Verdict::Neutral { .. }));
        assert_eq!(
            below.verdict(0, rng),
            Verdict::Invaded {
                invader: 1,
                payoff: 1.
            }
        );
    }

    #[test]
    fn resident_winning_the_reversed_test_survives() {
        let rules = Rules::new(1, 1, 0.5, 1.).unwrap();
        let strategies = [0.1, 0.2, 0.3].map(|c| Strategy::from(Constant::new(c)));
        let tester = Tester::new(rules, &strategies, 4, 0.125).unwrap();
        // every mutant sits at 1/4 + epsilon; the resident beats 1/4 in reverse
        let verdict = tester.judge(0, |mutant, _| if mutant == 0 { 0.5 } else { 0.375 });
        assert_eq!(verdict, Verdict::Stable);
        let verdict = tester.judge(0, |mutant, _| if mutant == 0 { 0.25 } else { 0.375 });
        assert_eq!(
            verdict,
            Verdict::Neutral {
                invader: 1,
                payoff: 0.25
            }
        );
    }

    #[test]
    fn rules_stop_at_first_failure() {
        let rules = Rules::new(1, 1, 0.5, 1.).unwrap();
        let strategies = [0.1, 0.2, 0.3].map(|c| Strategy::from(Constant::new(c)));
        let tester = Tester::new(rules, &strategies, 2, 0.05).unwrap();
        let mut calls = Vec::new();
        let verdict = tester.judge(1, |mutant, resident| {
            calls.push((mutant, resident));
            if mutant == 0 { 0.2 } else { 0.9 }
        });
        assert_eq!(
            verdict,
            Verdict::Invaded {
                invader: 2,
                payoff: 0.9
            }
        );
        assert_eq!(calls, vec![(0, 1), (2, 1)]);
    }

    #[test]
    fn twins_are_never_invaded() {
        // identical policies under distinct indices tie every round
        let rules = Rules::new(2, 4000, 1., 100.).unwrap();
        let strategies = [0.5, 0.5].map(|c| Strategy::from(Constant::new(c)));
        let tester = Tester::new(rules, &strategies, 2, 0.2).unwrap();
        let ref mut rng = SmallRng::seed_from_u64(1);
        let verdict = tester.verdict(0, rng);
        assert!(!matches!(verdict, Verdict::Invaded { .. }));
    }

    #[test]
    fn lone_strategy_is_stable() {
        let rules = Rules::new(2, 10, 0.5, 100.).unwrap();
        let strategies = [Strategy::from(Constant::new(0.3))];
        let tester = Tester::new(rules, &strategies, 3, 0.01).unwrap();
        let ref mut rng = SmallRng::seed_from_u64(2);
        assert!(tester.verdict(0, rng).is_stable());
    }

    #[test]
    fn rejects_empty_population() {
        let rules = Rules::new(2, 10, 0.5, 100.).unwrap();
        assert!(Tester::new(rules, &[], 0, 0.01).is_err());
    }
}
