use super::*;
use rand::Rng;

/// Winner of every round.
///
/// Stored as one index per round; [`Wins::table`] expands it into the
/// binary indicator matrix, which has exactly one 1 in every row.
#[derive(Debug, Clone, PartialEq)]
pub struct Wins {
    players: usize,
    winners: Vec<usize>,
}

impl Wins {
    pub fn rounds(&self) -> usize {
        self.winners.len()
    }
    /// Binary win indicator per round and player.
    pub fn table(&self) -> Vec<Vec<u8>> {
        self.winners
            .iter()
            .map(|&w| (0..self.players).map(|j| u8::from(j == w)).collect())
            .collect()
    }
    /// Column means of the win table: each player's share of rounds won.
    pub fn frequency(&self) -> Payoff {
        let n = self.rounds().max(1) as Probability;
        let mut counts = vec![0usize; self.players];
        self.winners.iter().for_each(|&w| counts[w] += 1);
        counts
            .into_iter()
            .map(|c| c as Probability / n)
            .collect::<Vec<Probability>>()
            .into()
    }
}

impl Rounds {
    /// Picks one winner per round among the players holding the row maximum.
    pub fn wins<R: Rng>(&self, rng: &mut R) -> Wins {
        Wins {
            players: self.players(),
            winners: self
                .iter()
                .filter(|row| !row.is_empty())
                .map(|row| Self::winner(row, rng))
                .collect(),
        }
    }
    fn winner<R: Rng>(row: &[Money], rng: &mut R) -> usize {
        let mut richest = vec![0];
        for (j, money) in row.iter().enumerate().skip(1) {
            let best = row[richest[0]];
            if *money > best {
                richest.clear();
                richest.push(j);
            } else if *money == best {
                richest.push(j);
            }
        }
        match richest.len() {
            1 => richest[0],
            n => richest[rng.random_range(0..n)],
        }
    }
}
