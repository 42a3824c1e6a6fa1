use super::*;
use rayon::iter::IntoParallelRefIterator;
use rayon::iter::ParallelIterator;
use std::collections::BTreeMap;

/// Estimated payoffs of every canonical profile of a symmetric game.
///
/// Row `i` holds the win frequencies of the `i`-th canonical profile, one
/// per slot in sorted strategy order. Queries for arbitrary profiles are
/// answered by sorting into canonical form and reading back the slot the
/// queried player lands in. Read-only after [`Table::build`].
#[derive(Debug, Clone)]
pub struct Table {
    population: usize,
    strategies: Vec<Strategy>,
    profiles: Vec<Profile>,
    payoffs: Vec<Payoff>,
    index: BTreeMap<Profile, usize>,
}

impl Table {
    /// Simulates every canonical profile, one task per profile on the
    /// current rayon pool. Each task builds its own game and draws from
    /// its own stream derived from `seed`.
    pub fn build(
        population: usize,
        strategies: &[Strategy],
        rules: Rules,
        seed: u64,
    ) -> Result<Self, Fault> {
        if population == 0 {
            return Err(Fault::config("populationSize must be positive"));
        }
        if strategies.is_empty() {
            return Err(Fault::config("strategy set is empty"));
        }
        let profiles = CanonicalIterator::try_from((population, strategies.len()))?
            .collect::<Vec<Profile>>();
        log::info!(
            "{:<32}{:<32}",
            "building payoff table",
            format!("{} profiles", profiles.len())
        );
        let payoffs = profiles
            .par_iter()
            .map(|profile| {
                let ref mut rng = stream(seed, profile);
                let roster = profile.iter().map(|&c| &strategies[c]);
                let payoff = Game::from((rules, roster))
                    .simulate(rng)
                    .wins(rng)
                    .frequency();
                log::debug!("{:<32}{}", profile.to_string(), payoff);
                payoff
            })
            .collect::<Vec<Payoff>>();
        log::info!("{:<32}{:<32}", "payoff table finished", profiles.len());
        let index = profiles
            .iter()
            .cloned()
            .enumerate()
            .map(|(i, p)| (p, i))
            .collect::<BTreeMap<Profile, usize>>();
        Ok(Self {
            population,
            strategies: strategies.to_vec(),
            profiles,
            payoffs,
            index,
        })
    }

    pub fn strategy(&self, choice: Choice) -> &Strategy {
        &self.strategies[choice]
    }
    /// Canonical profiles with their payoff vectors, in enumeration order.
    pub fn rows(&self) -> impl Iterator<Item = (&Profile, &Payoff)> {
        self.profiles.iter().zip(self.payoffs.iter())
    }
    /// Enumeration index of a profile's canonical form.
    pub fn index(&self, profile: &Profile) -> Result<usize, Fault> {
        self.index
            .get(&profile.sorted())
            .copied()
            .ok_or_else(|| Fault::Unindexed(profile.clone()))
    }
    /// Strategy labels of a profile, slot by slot.
    pub fn labels(&self, profile: &Profile) -> Vec<String> {
        profile
            .iter()
            .map(|&c| self.strategy(c).label())
            .collect()
    }
}

impl Payoffs for Table {
    fn population(&self) -> usize {
        self.population
    }
    fn strategies(&self) -> usize {
        self.strategies.len()
    }
    fn payoff(&self, profile: &Profile, player: usize) -> Result<Utility, Fault> {
        if player >= profile.len() {
            return Err(Fault::Player {
                player,
                population: profile.len(),
            });
        }
        let row = self.index(profile)?;
        Ok(self.payoffs[row].get(profile.slot(player)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Under certain wins, all-in doubles every stage and beats half-in.
    fn certain() -> (Rules, Vec<Strategy>) {
        let rules = Rules::new(3, 2000, 1., 100.).unwrap();
        let strategies = vec![Constant::new(0.5).into(), Constant::new(1.).into()];
        (rules, strategies)
    }

    #[test]
    fn one_row_per_canonical_profile() {
        let rules = Rules::new(2, 50, 0.5, 100.).unwrap();
        let strategies = [0.1, 0.4, 0.9]
            .map(|c| Strategy::from(Constant::new(c)))
            .to_vec();
        let table = Table::build(3, &strategies, rules, 7).unwrap();
        assert_eq!(table.rows().count(), Profile::combinations(3, 3).unwrap());
        for (profile, payoff) in table.rows() {
            assert!(profile.is_canonical());
            assert_eq!(payoff.len(), 3);
            assert!((payoff.iter().sum::<Probability>() - 1.).abs() < 1e-4);
        }
    }

    #[test]
    fn payoff_follows_the_player() {
        let (rules, strategies) = certain();
        let table = Table::build(2, &strategies, rules, 11).unwrap();
        let forward = Profile::from(vec![0, 1]);
        let reverse = Profile::from(vec![1, 0]);
        assert_eq!(table.payoff(&forward, 0).unwrap(), 0.);
        assert_eq!(table.payoff(&forward, 1).unwrap(), 1.);
        assert_eq!(table.payoff(&reverse, 0).unwrap(), 1.);
        assert_eq!(table.payoff(&reverse, 1).unwrap(), 0.);
    }

    #[test]
    fn permutations_share_a_row() {
        let (rules, strategies) = certain();
        let table = Table::build(3, &strategies, rules, 12).unwrap();
        let a = Profile::from(vec![1, 0, 1]);
        let b = Profile::from(vec![1, 1, 0]);
        assert_eq!(table.index(&a).unwrap(), table.index(&b).unwrap());
        assert_eq!(table.index(&a).unwrap(), a.rank(2).unwrap());
    }

    #[test]
    fn same_seed_same_table() {
        let rules = Rules::new(3, 200, 0.5, 100.).unwrap();
        let strategies: Vec<Strategy> =
            vec![Constant::new(0.2).into(), TimeLinear::new(0.5, 0.).into()];
        let a = Table::build(3, &strategies, rules, 5).unwrap();
        let b = Table::build(3, &strategies, rules, 5).unwrap();
        assert!(a.rows().zip(b.rows()).all(|(x, y)| x == y));
    }

    #[test]
    fn bad_queries_are_faults() {
        let (rules, strategies) = certain();
        let table = Table::build(2, &strategies, rules, 13).unwrap();
        assert!(matches!(
            table.payoff(&Profile::from(vec![0, 1]), 2),
            Err(Fault::Player { .. })
        ));
        assert!(matches!(
            table.payoff(&Profile::from(vec![0, 2]), 0),
            Err(Fault::Unindexed(_))
        ));
        assert!(matches!(
            table.payoff(&Profile::from(vec![0, 1, 1]), 0),
            Err(Fault::Unindexed(_))
        ));
    }

    #[test]
    fn symmetric_population_splits_evenly() {
        let rules = Rules::new(3, 20000, 0.5, 100.).unwrap();
        let strategies: Vec<Strategy> = vec![Constant::new(0.5).into()];
        let table = Table::build(4, &strategies, rules, 21).unwrap();
        let (_, payoff) = table.rows().next().unwrap();
        for p in payoff.iter() {
            assert!((p - 0.25).abs() < 0.02);
        }
    }

    #[test]
    fn all_in_is_the_only_equilibrium() {
        let (rules, strategies) = certain();
        let table = Table::build(2, &strategies, rules, 14).unwrap();
        let equilibria = table.equilibria(0.1).unwrap();
        assert_eq!(equilibria, vec![Profile::from(vec![1, 1])]);
    }
}
