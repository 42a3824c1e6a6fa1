use super::*;
use rand::Rng;
use rayon::iter::IntoParallelRefIterator;
use rayon::iter::ParallelIterator;
use std::collections::BTreeMap;
use std::io::Write;

/// A configured run over every parameter combination.
pub struct Sweep {
    config: Config,
    seed: u64,
    pool: rayon::ThreadPool,
}

impl TryFrom<Config> for Sweep {
    type Error = Fault;
    fn try_from(config: Config) -> Result<Self, Self::Error> {
        let workers = config.workers.unwrap_or_else(num_cpus::get);
        let seed = config.seed.unwrap_or_else(rand::random);
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(workers)
            .build()
            .map_err(|e| Fault::config(e.to_string()))?;
        log::info!("{:<32}{:<32}", "worker threads", workers);
        log::info!("{:<32}{:<32}", "master seed", seed);
        Ok(Self { config, seed, pool })
    }
}

impl Sweep {
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Runs the configured mode and writes the report into `sink`.
    /// Nothing is written for a combination until its results are complete.
    pub fn run<W: Write>(&self, sink: W) -> Result<W, Fault> {
        let mut report = Report::new(sink);
        let strategies = self.config.strategies();
        let mut keys = self.config.keys();
        self.config.output_mode.arrange(&mut keys);
        match self.config.mode {
            Mode::Stability => {
                let verdicts = self.stability()?;
                for key in keys.iter() {
                    let verdicts = verdicts.get(key).map(Vec::as_slice).unwrap_or_default();
                    report.stability(key, &strategies, verdicts)?;
                }
            }
            Mode::Payoff => {
                for key in keys.iter() {
                    let (table, equilibria) = self.payoff(key)?;
                    report.payoff(key, &table, &equilibria)?;
                }
            }
        }
        report.finish()
    }

    /// Verdict for every strategy at every combination.
    ///
    /// Each (combination, strategy) pair is one task on the pool; results
    /// are keyed by combination and kept in strategy order.
    pub fn stability(&self) -> Result<BTreeMap<Key, Vec<Verdict>>, Fault> {
        let strategies = self.config.strategies();
        let testers = self
            .config
            .keys()
            .into_iter()
            .map(|key| -> Result<(Key, Tester), Fault> {
                let rules = self.config.rules(&key)?;
                let epsilon = self.config.epsilon();
                let tester = Tester::new(rules, &strategies, key.population, epsilon)?;
                Ok((key, tester))
            })
            .collect::<Result<BTreeMap<Key, Tester>, Fault>>()?;
        let tasks = testers
            .iter()
            .flat_map(|(key, tester)| {
                (0..strategies.len()).map(move |focal| (key, tester, focal))
            })
            .collect::<Vec<(&Key, &Tester, Choice)>>();
        log::info!("{:<32}{:<32}", "stability tasks", tasks.len());
        let verdicts = self.pool.install(|| {
            tasks
                .par_iter()
                .map(|&(key, tester, focal)| {
                    let ref mut rng = stream(self.seed, (key, focal));
                    let verdict = tester.verdict(focal, rng);
                    log::debug!(
                        "{:<32}{:<32}",
                        format!("{} / {}", key, focal),
                        verdict.to_string()
                    );
                    (*key, verdict)
                })
                .collect::<Vec<(Key, Verdict)>>()
        });
        let mut grouped = BTreeMap::<Key, Vec<Verdict>>::new();
        for (key, verdict) in verdicts {
            grouped.entry(key).or_default().push(verdict);
        }
        Ok(grouped)
    }

    /// Payoff table and epsilon-Nash equilibria at one combination.
    pub fn payoff(&self, key: &Key) -> Result<(Table, Vec<Profile>), Fault> {
        log::info!("{}", key);
        let rules = self.config.rules(key)?;
        let strategies = self.config.strategies();
        let seed = stream(self.seed, key).random::<u64>();
        self.pool.install(|| -> Result<(Table, Vec<Profile>), Fault> {
            let table = Table::build(key.population, &strategies, rules, seed)?;
            let equilibria = table.equilibria(self.config.epsilon())?;
            log::info!("{:<32}{:<32}", "nash equilibria", equilibria.len());
            Ok((table, equilibria))
        })
    }
}
