use super::*;
use rand::Rng;

/// A roster of players under one set of rules.
///
/// Callers own their `Game` exclusively; concurrent simulations each build
/// their own rather than sharing one.
#[derive(Debug, Clone)]
pub struct Game {
    rules: Rules,
    players: Vec<Player>,
}

impl Game {
    pub fn new(rules: Rules) -> Self {
        Self {
            rules,
            players: Vec::new(),
        }
    }
    pub fn players(&self) -> usize {
        self.players.len()
    }
    pub fn add(&mut self, strategy: Strategy) {
        self.players.push(Player::new(strategy, self.rules.bankroll()));
    }
    /// Runs every round and returns the final money per round, per player.
    /// Rounds are independent: all players start each from the bankroll.
    pub fn simulate<R: Rng>(&mut self, rng: &mut R) -> Rounds {
        let n = self.players();
        let ref rules = self.rules;
        (0..rules.rounds())
            .map(|_| {
                self.players
                    .iter_mut()
                    .map(|player| {
                        player.reset();
                        player.play(rules, n, rng)
                    })
                    .collect::<Vec<Money>>()
            })
            .collect::<Vec<Vec<Money>>>()
            .into()
    }
}

impl<'a, I> From<(Rules, I)> for Game
where
    I: IntoIterator<Item = &'a Strategy>,
{
    fn from((rules, roster): (Rules, I)) -> Self {
        let mut game = Self::new(rules);
        roster.into_iter().cloned().for_each(|s| game.add(s));
        game
    }
}
