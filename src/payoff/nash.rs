use super::*;
use rayon::iter::IntoParallelIterator;
use rayon::iter::ParallelIterator;

/// A source of payoffs for every profile of a finite game in which all
/// players share one strategy set.
///
/// Implementors answer point queries; equilibrium search comes for free.
pub trait Payoffs: Sync {
    /// Players per profile.
    fn population(&self) -> usize;
    /// Size of the shared strategy set.
    fn strategies(&self) -> usize;
    /// Expected payoff of `player` when everyone plays `profile`.
    fn payoff(&self, profile: &Profile, player: usize) -> Result<Utility, Fault>;

    /// True iff no player gains more than `epsilon` by switching strategy
    /// alone. Gains of exactly `epsilon` are tolerated.
    fn is_nash(&self, profile: &Profile, epsilon: Utility) -> Result<bool, Fault> {
        for player in 0..profile.len() {
            let current = self.payoff(profile, player)?;
            for choice in (0..self.strategies()).filter(|&c| c != profile.get(player)) {
                let deviation = self.payoff(&profile.deviate(player, choice), player)?;
                if deviation - current > epsilon {
                    return Ok(false);
                }
            }
        }
        Ok(true)
    }

    /// Every epsilon-Nash profile, in odometer order.
    ///
    /// Checks all `strategies ^ population` concrete profiles rather than
    /// canonical ones, since deviations are per seat.
    fn equilibria(&self, epsilon: Utility) -> Result<Vec<Profile>, Fault> {
        ExhaustiveIterator::try_from((self.population(), self.strategies()))?
            .collect::<Vec<Profile>>()
            .into_par_iter()
            .map(|profile| {
                self.is_nash(&profile, epsilon)
                    .map(|nash| nash.then_some(profile))
            })
            .collect::<Result<Vec<Option<Profile>>, Fault>>()
            .map(|found| {
                found
                    .into_iter()
                    .flatten()
                    .inspect(|p| log::debug!("{:<32}{}", "nash equilibrium", p))
                    .collect()
            })
    }
}
