use super::*;
use serde::Deserialize;
use serde::Deserializer;

/// Numbers a [`Span`] can range over.
pub trait Numeric: Copy + PartialOrd + std::fmt::Display + std::str::FromStr {
    const ZERO: Self;
    /// Converts a bare JSON number.
    fn cast(x: f64) -> Option<Self>;
    /// Values in `start..=end` stepping by `step`.
    fn count(start: Self, step: Self, end: Self) -> usize;
    /// The `i`-th value, computed directly to avoid accumulated drift.
    fn nth(start: Self, step: Self, i: usize) -> Self;
}

impl Numeric for usize {
    const ZERO: Self = 0;
    fn cast(x: f64) -> Option<Self> {
        (x >= 0. && x.fract() == 0.).then_some(x as usize)
    }
    fn count(start: Self, step: Self, end: Self) -> usize {
        (end - start) / step + 1
    }
    fn nth(start: Self, step: Self, i: usize) -> Self {
        start + step * i
    }
}

impl Numeric for f32 {
    const ZERO: Self = 0.;
    fn cast(x: f64) -> Option<Self> {
        x.is_finite().then_some(x as f32)
    }
    fn count(start: Self, step: Self, end: Self) -> usize {
        ((end - start) / step + 1e-4).floor() as usize + 1
    }
    fn nth(start: Self, step: Self, i: usize) -> Self {
        start + step * i as f32
    }
}

/// Inclusive arithmetic range `start:step:end`, or a single value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Span<T> {
    start: T,
    step: T,
    end: T,
}

impl<T: Numeric> Span<T> {
    pub fn single(value: T) -> Self {
        Self {
            start: value,
            step: T::ZERO,
            end: value,
        }
    }
    pub fn new(start: T, step: T, end: T) -> Result<Self, Fault> {
        if end < start {
            return Err(Fault::config(format!(
                "range {}:{}:{} runs backwards",
                start, step, end
            )));
        }
        if end > start && !(step > T::ZERO) {
            return Err(Fault::config(format!(
                "range {}:{}:{} needs a positive step",
                start, step, end
            )));
        }
        Ok(Self { start, step, end })
    }
    pub fn first(&self) -> T {
        self.start
    }
    pub fn values(&self) -> Vec<T> {
        if self.end == self.start {
            return vec![self.start];
        }
        (0..T::count(self.start, self.step, self.end))
            .map(|i| T::nth(self.start, self.step, i))
            .collect()
    }
}

impl<T: Numeric> TryFrom<&str> for Span<T> {
    type Error = Fault;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let parse = |x: &str| {
            x.trim()
                .parse::<T>()
                .map_err(|_| Fault::config(format!("invalid number {:?} in {:?}", x, s)))
        };
        match s.split(':').collect::<Vec<&str>>().as_slice() {
            [value] => parse(*value).map(Self::single),
            [start, step, end] => Self::new(parse(*start)?, parse(*step)?, parse(*end)?),
            _ => Err(Fault::config(format!("invalid range {:?}", s))),
        }
    }
}

/// How a span is written in the configuration file.
#[derive(Deserialize)]
#[serde(untagged)]
enum Literal {
    Number(f64),
    Text(String),
}

impl<'de, T: Numeric> Deserialize<'de> for Span<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        use serde::de::Error;
        match Literal::deserialize(deserializer)? {
            Literal::Text(s) => Self::try_from(s.as_str()).map_err(D::Error::custom),
            Literal::Number(x) => T::cast(x)
                .map(Self::single)
                .ok_or_else(|| D::Error::custom(format!("invalid number {}", x))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_range_is_inclusive() {
        let span = Span::<usize>::try_from("2:2:8").unwrap();
        assert_eq!(span.values(), vec![2, 4, 6, 8]);
    }

    #[test]
    fn integer_range_stops_before_overshoot() {
        let span = Span::<usize>::try_from("1:3:8").unwrap();
        assert_eq!(span.values(), vec![1, 4, 7]);
    }

    #[test]
    fn float_range_has_no_drift() {
        let values = Span::<f32>::try_from("0:0.1:1").unwrap().values();
        assert_eq!(values.len(), 11);
        assert!((values[10] - 1.).abs() < 1e-6);
    }

    #[test]
    fn single_value() {
        assert_eq!(Span::<f32>::try_from("0.25").unwrap().values(), vec![0.25]);
        assert_eq!(Span::<usize>::try_from("7").unwrap().first(), 7);
    }

    #[test]
    fn rejects_malformed() {
        assert!(Span::<usize>::try_from("1:2").is_err());
        assert!(Span::<usize>::try_from("5:1:2").is_err());
        assert!(Span::<usize>::try_from("1:0:2").is_err());
        assert!(Span::<f32>::try_from("a:b:c").is_err());
    }

    #[test]
    fn deserializes_numbers_and_strings() {
        let a = serde_json::from_str::<Span<usize>>("3").unwrap();
        let b = serde_json::from_str::<Span<usize>>("\"1:1:3\"").unwrap();
        let c = serde_json::from_str::<Span<f32>>("0.5").unwrap();
        assert_eq!(a.values(), vec![3]);
        assert_eq!(b.values(), vec![1, 2, 3]);
        assert_eq!(c.values(), vec![0.5]);
        assert!(serde_json::from_str::<Span<usize>>("1.5").is_err());
    }
}
