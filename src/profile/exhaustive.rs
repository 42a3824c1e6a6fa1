use super::*;

/// Iterates every profile of a fixed population over a fixed strategy set,
/// `strategies ^ population` in all, by odometer increments.
pub struct ExhaustiveIterator {
    strategies: usize,
    next: Option<Profile>,
    remaining: usize,
}

impl TryFrom<(usize, usize)> for ExhaustiveIterator {
    type Error = Fault;
    fn try_from((population, strategies): (usize, usize)) -> Result<Self, Self::Error> {
        let remaining = Profile::assignments(population, strategies)?;
        Ok(Self {
            strategies,
            next: (remaining > 0).then(|| Profile::zeros(population)),
            remaining,
        })
    }
}

impl Iterator for ExhaustiveIterator {
    type Item = Profile;
    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.take()?;
        let mut successor = current.clone();
        if successor.increment(self.strategies) {
            self.next = Some(successor);
        }
        self.remaining -= 1;
        Some(current)
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for ExhaustiveIterator {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn covers_every_assignment() {
        let mut unique = HashSet::new();
        let n = ExhaustiveIterator::try_from((3, 3))
            .unwrap()
            .inspect(|p| assert!(unique.insert(p.clone())))
            .count();
        assert_eq!(n, 27);
    }

    #[test]
    fn canonical_forms_are_covered() {
        let sorted = ExhaustiveIterator::try_from((3, 2))
            .unwrap()
            .map(|p| p.sorted())
            .collect::<HashSet<_>>();
        assert_eq!(sorted.len(), Profile::combinations(3, 2).unwrap());
    }

    #[test]
    fn refuses_oversized_enumeration() {
        assert!(matches!(
            ExhaustiveIterator::try_from((40, 10)),
            Err(Fault::Config(_))
        ));
    }
}
