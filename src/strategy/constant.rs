//! Constant stake fraction.

use super::*;

/// Stakes the same fraction at every stage, whatever the context.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Constant(Probability);

impl Constant {
    pub fn new(c: Probability) -> Self {
        Self(c)
    }
}

impl From<Probability> for Constant {
    fn from(c: Probability) -> Self {
        Self(c)
    }
}

impl Stake for Constant {
    fn fraction(&self, _: &Context) -> Probability {
        self.0
    }
}

impl std::fmt::Display for Constant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context(stage: usize, money: Money) -> Context {
        Context {
            odds: 0.5,
            stages: 4,
            stage,
            players: 3,
            money,
        }
    }

    #[test]
    fn ignores_context() {
        let c = Constant::new(0.3);
        assert_eq!(c.fraction(&context(1, 100.)), 0.3);
        assert_eq!(c.fraction(&context(4, 1.)), 0.3);
    }

    #[test]
    fn does_not_clamp() {
        assert_eq!(Constant::new(1.5).fraction(&context(1, 10.)), 1.5);
        assert_eq!(Constant::new(-0.5).fraction(&context(1, 10.)), -0.5);
    }

    #[test]
    fn label() {
        assert_eq!(Constant::new(0.5).label(), "0.5");
        assert_eq!(Constant::new(1.).label(), "1.0");
    }
}
