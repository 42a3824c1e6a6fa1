use super::*;

/// One strategy index per population slot.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Profile(Vec<Choice>);

impl Profile {
    /// Every slot on strategy 0: the first profile in either enumeration.
    pub fn zeros(population: usize) -> Self {
        Self(vec![0; population])
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn get(&self, player: usize) -> Choice {
        self.0[player]
    }
    pub fn iter(&self) -> impl Iterator<Item = &Choice> {
        self.0.iter()
    }
    /// The same profile with one player switched to `choice`.
    pub fn deviate(&self, player: usize, choice: Choice) -> Self {
        let mut other = self.clone();
        other.0[player] = choice;
        other
    }
    /// Canonical representative of this profile's multiset.
    pub fn sorted(&self) -> Self {
        let mut sorted = self.0.clone();
        sorted.sort_unstable();
        Self(sorted)
    }
    pub fn is_canonical(&self) -> bool {
        self.0.windows(2).all(|w| w[0] <= w[1])
    }
    /// Position of `player`'s strategy within the sorted profile.
    ///
    /// This is the rank in ascending order, matching how canonical payoff
    /// vectors are stored: it counts the slots holding a strictly smaller
    /// strategy index, not a strictly greater one, which would read the
    /// vector from the wrong end. Every player sharing a strategy maps to
    /// the first slot of that strategy's run in canonical order.
    pub fn slot(&self, player: usize) -> usize {
        let choice = self.0[player];
        self.0.iter().filter(|&&c| c < choice).count()
    }

    /// Steps a canonical profile to the next one in lexicographic order,
    /// returning false once the profile is all `strategies - 1`.
    ///
    /// The last slot that can still grow is incremented and every slot after
    /// it is raised to the same value, which keeps the profile non-decreasing.
    pub fn advance(&mut self, strategies: usize) -> bool {
        match self.0.iter().rposition(|&c| c + 1 < strategies) {
            None => false,
            Some(i) => {
                let next = self.0[i] + 1;
                self.0[i..].iter_mut().for_each(|c| *c = next);
                true
            }
        }
    }
    /// Odometer step over all profiles, last slot least significant,
    /// returning false after the final profile wraps around.
    pub fn increment(&mut self, strategies: usize) -> bool {
        for c in self.0.iter_mut().rev() {
            if *c + 1 < strategies {
                *c += 1;
                return true;
            }
            *c = 0;
        }
        false
    }

    /// Index of this profile's canonical form in enumeration order.
    ///
    /// Walks the canonical sequence from the zero profile until it meets
    /// the sorted profile; O(index) per call, so callers that query often
    /// should memoize (see [`Table`]).
    pub fn rank(&self, strategies: usize) -> Result<usize, Fault> {
        let ref target = self.sorted();
        CanonicalIterator::try_from((self.len(), strategies))?
            .position(|p| p == *target)
            .ok_or_else(|| Fault::Unindexed(self.clone()))
    }
    /// Number of canonical profiles: multisets of size `population` drawn
    /// from `strategies` values, C(population + strategies - 1, population).
    /// Fails when the count does not fit in a `usize`.
    pub fn combinations(population: usize, strategies: usize) -> Result<usize, Fault> {
        (0..population)
            .try_fold(1usize, |x, i| {
                strategies
                    .checked_add(i)
                    .and_then(|k| x.checked_mul(k))
                    .map(|x| x / (i + 1))
            })
            .ok_or_else(|| Self::overflow(population, strategies))
    }
    /// Number of profiles of any order, `strategies ^ population`.
    /// Fails when the count does not fit in a `usize`.
    pub fn assignments(population: usize, strategies: usize) -> Result<usize, Fault> {
        (0..population)
            .try_fold(1usize, |x, _| x.checked_mul(strategies))
            .ok_or_else(|| Self::overflow(population, strategies))
    }
    fn overflow(population: usize, strategies: usize) -> Fault {
        Fault::config(format!(
            "{} players over {} strategies has too many profiles to enumerate",
            population, strategies
        ))
    }
}

impl From<Vec<Choice>> for Profile {
    fn from(choices: Vec<Choice>) -> Self {
        Self(choices)
    }
}

impl std::fmt::Display for Profile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let cells = self
            .0
            .iter()
            .map(|c| c.to_string())
            .collect::<Vec<String>>()
            .join(", ");
        write!(f, "[{}]", cells)
    }
}
