use super::*;

/// Final money per round (rows) and per player (columns).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Rounds(Vec<Vec<Money>>);

impl Rounds {
    pub fn rounds(&self) -> usize {
        self.0.len()
    }
    pub fn players(&self) -> usize {
        self.0.first().map(Vec::len).unwrap_or_default()
    }
    pub fn iter(&self) -> impl Iterator<Item = &Vec<Money>> {
        self.0.iter()
    }
}

impl From<Vec<Vec<Money>>> for Rounds {
    fn from(rows: Vec<Vec<Money>>) -> Self {
        Self(rows)
    }
}
