use core::num::ParseIntError;
use core::str::FromStr;
use displaydoc::Display;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IntervalError {
    #[error("Interval [{low},{high}] has its low bound above its high bound")]
    Inverted { low: i32, high: i32 },

    #[error("Expected an interval of the form `[low,high]`, got `{input}`")]
    Syntax { input: String },

    #[error("Invalid interval bound: {0}")]
    Bound(#[from] ParseIntError),
}

/// [{low},{high}]
#[derive(Clone, Copy, Debug, Display, PartialEq, Eq, Hash)]
pub struct Interval {
    pub low: i32,
    pub high: i32,
}

impl Interval {
    /// Doesn't check that `low <= high`. Merging an interval that violates this is not an error,
    /// but the result is meaningless.
    pub const fn new(low: i32, high: i32) -> Self {
        Self { low, high }
    }

    pub fn try_new(low: i32, high: i32) -> Result<Self, IntervalError> {
        if low > high {
            return Err(IntervalError::Inverted { low, high });
        }
        Ok(Self { low, high })
    }

    pub fn is_well_formed(&self) -> bool {
        self.low <= self.high
    }

    pub fn contains(&self, point: i32) -> bool {
        self.low <= point && point <= self.high
    }

    /// Touching intervals, e.g. `[1,3]` and `[3,5]`, count as overlapping.
    pub fn overlaps(&self, other: &Interval) -> bool {
        self.high >= other.low && other.high >= self.low
    }

    /// The smallest interval covering both `self` and `other`.
    pub fn hull(&self, other: &Interval) -> Interval {
        Interval {
            low: self.low.min(other.low),
            high: self.high.max(other.high),
        }
    }
}

impl FromStr for Interval {
    type Err = IntervalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let syntax = || IntervalError::Syntax {
            input: s.to_string(),
        };

        let trimmed = s.trim();
        let inner = match trimmed.strip_prefix('[') {
            Some(rest) => rest.strip_suffix(']').ok_or_else(syntax)?,
            None if trimmed.ends_with(']') => return Err(syntax()),
            None => trimmed,
        };

        let (low, high) = inner.split_once(',').ok_or_else(syntax)?;
        Self::try_new(low.trim().parse()?, high.trim().parse()?)
    }
}

/// Parses a whitespace-separated list of intervals, e.g. `[1,2] [5,7] 9,9`.
pub fn parse_collection(s: &str) -> Result<Vec<Interval>, IntervalError> {
    s.split_whitespace().map(str::parse).collect()
}

/// Formats a collection one interval at a time, each followed by a single space.
pub struct Intervals<'a>(pub &'a [Interval]);

impl core::fmt::Display for Intervals<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        for interval in self.0 {
            write!(f, "{interval} ")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlap() {
        let a = Interval::new(10, 20);
        assert!(a.overlaps(&Interval::new(15, 30)));
        assert!(a.overlaps(&Interval::new(0, 10)));
        assert!(a.overlaps(&Interval::new(20, 20)));
        assert!(a.overlaps(&Interval::new(12, 13)));
        assert!(Interval::new(12, 13).overlaps(&a));
        assert!(!a.overlaps(&Interval::new(21, 30)));
        assert!(!a.overlaps(&Interval::new(0, 9)));
    }

    #[test]
    fn hull() {
        let a = Interval::new(10, 100);
        assert_eq!(a.hull(&Interval::new(20, 30)), a);
        assert_eq!(
            Interval::new(5, 12).hull(&Interval::new(10, 20)),
            Interval::new(5, 20)
        );
    }

    #[test]
    fn validation() {
        assert_eq!(Interval::try_new(3, 3), Ok(Interval::new(3, 3)));
        assert_eq!(
            Interval::try_new(4, 3),
            Err(IntervalError::Inverted { low: 4, high: 3 })
        );
        assert!(!Interval::new(4, 3).is_well_formed());
        assert!(Interval::new(-4, 3).contains(-4));
        assert!(!Interval::new(-4, 3).contains(4));
    }

    #[test]
    fn parse() {
        assert_eq!("[94133,94133]".parse::<Interval>(), Ok(Interval::new(94133, 94133)));
        assert_eq!(" [ -5 , 7 ] ".parse::<Interval>(), Ok(Interval::new(-5, 7)));
        assert_eq!("1,2".parse::<Interval>(), Ok(Interval::new(1, 2)));

        for bad in ["", "[1,2", "1,2]", "[12]", "12"] {
            assert!(
                matches!(bad.parse::<Interval>(), Err(IntervalError::Syntax { .. })),
                "{bad:?} should be rejected"
            );
        }
        assert!(matches!(
            "[1,x]".parse::<Interval>(),
            Err(IntervalError::Bound(_))
        ));
        assert!(matches!(
            "[9999999999,1]".parse::<Interval>(),
            Err(IntervalError::Bound(_))
        ));
        assert_eq!(
            "[2,1]".parse::<Interval>(),
            Err(IntervalError::Inverted { low: 2, high: 1 })
        );
    }

    #[test]
    fn collection() {
        assert_eq!(parse_collection("  "), Ok(Vec::new()));
        assert_eq!(
            parse_collection("[1,2]\t5,7\n[9,9]"),
            Ok(vec![
                Interval::new(1, 2),
                Interval::new(5, 7),
                Interval::new(9, 9)
            ])
        );
        assert!(parse_collection("[1,2] [3,]").is_err());
    }

    #[test]
    fn display() {
        assert_eq!(Interval::new(-1, 2).to_string(), "[-1,2]");
        let intervals = [Interval::new(94133, 94133), Interval::new(94200, 94399)];
        assert_eq!(
            Intervals(&intervals).to_string(),
            "[94133,94133] [94200,94399] "
        );
        assert_eq!(Intervals(&[]).to_string(), "");
    }
}
