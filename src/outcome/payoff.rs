use super::*;

/// Win frequency per player slot, in the order the players were seated.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Payoff(Vec<Probability>);

impl Payoff {
    pub fn get(&self, player: usize) -> Probability {
        self.0[player]
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn iter(&self) -> impl Iterator<Item = &Probability> {
        self.0.iter()
    }
}

impl From<Vec<Probability>> for Payoff {
    fn from(v: Vec<Probability>) -> Self {
        Self(v)
    }
}

impl std::fmt::Display for Payoff {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let cells = self
            .0
            .iter()
            .map(|p| format!("{:.4}", p))
            .collect::<Vec<String>>()
            .join(", ");
        write!(f, "[{}]", cells)
    }
}
