use super::*;

/// Iterates the non-decreasing profiles of a fixed population over a fixed
/// strategy set, from all zeros to all `strategies - 1`.
pub struct CanonicalIterator {
    strategies: usize,
    next: Option<Profile>,
    remaining: usize,
}

impl TryFrom<(usize, usize)> for CanonicalIterator {
    type Error = Fault;
    fn try_from((population, strategies): (usize, usize)) -> Result<Self, Self::Error> {
        let remaining = Profile::combinations(population, strategies)?;
        Ok(Self {
            strategies,
            next: (remaining > 0).then(|| Profile::zeros(population)),
            remaining,
        })
    }
}

impl Iterator for CanonicalIterator {
    type Item = Profile;
    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.take()?;
        let mut successor = current.clone();
        if successor.advance(self.strategies) {
            self.next = Some(successor);
        }
        self.remaining -= 1;
        Some(current)
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for CanonicalIterator {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn counts_multisets() {
        for population in 1..=5 {
            for strategies in 1..=4 {
                let mut unique = HashSet::new();
                let n = CanonicalIterator::try_from((population, strategies))
                    .unwrap()
                    .inspect(|p| assert!(p.is_canonical()))
                    .inspect(|p| assert!(unique.insert(p.clone())))
                    .count();
                assert_eq!(n, Profile::combinations(population, strategies).unwrap());
            }
        }
    }

    #[test]
    fn terminates_on_all_max() {
        let last = CanonicalIterator::try_from((4, 3)).unwrap().last().unwrap();
        assert_eq!(last, Profile::from(vec![2; 4]));
    }

    #[test]
    fn lexicographic_order() {
        let all = CanonicalIterator::try_from((2, 3)).unwrap().collect::<Vec<_>>();
        let expected = [[0, 0], [0, 1], [0, 2], [1, 1], [1, 2], [2, 2]]
            .into_iter()
            .map(|p| Profile::from(p.to_vec()))
            .collect::<Vec<_>>();
        assert_eq!(all, expected);
    }

    #[test]
    fn refuses_oversized_enumeration() {
        assert!(CanonicalIterator::try_from((200, 200)).is_err());
    }
}
