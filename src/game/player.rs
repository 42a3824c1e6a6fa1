use super::*;
use rand::Rng;

/// One seat in a simulation: a strategy and the money it is playing with.
///
/// Players live only as long as the [`Game`] that owns them.
#[derive(Debug, Clone)]
pub struct Player {
    strategy: Strategy,
    money: Money,
    start: Money,
    stage: usize,
}

impl Player {
    pub fn new(strategy: Strategy, start: Money) -> Self {
        Self {
            strategy,
            money: start,
            start,
            stage: FIRST_STAGE,
        }
    }
    /// Back to the starting money, before the first stage.
    pub fn reset(&mut self) {
        self.money = self.start;
        self.stage = FIRST_STAGE;
    }
    /// Plays every stage of one round and returns the final money.
    pub fn play<R: Rng>(&mut self, rules: &Rules, players: usize, rng: &mut R) -> Money {
        for _ in 0..rules.stages() {
            self.bet(rules, players, rng);
        }
        self.money
    }
    /// One stage: stake a fraction of current money on the coin.
    /// A win returns the stake twice, a loss forfeits it.
    fn bet<R: Rng>(&mut self, rules: &Rules, players: usize, rng: &mut R) {
        let ref context = Context {
            odds: rules.odds(),
            stages: rules.stages(),
            stage: self.stage,
            players,
            money: self.money,
        };
        let stake = self.money * self.strategy.fraction(context);
        self.money -= stake;
        if rng.random_bool(rules.odds() as f64) {
            self.money += 2. * stake;
        }
        self.stage += 1;
    }
}
