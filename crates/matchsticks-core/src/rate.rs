//! Stage capacity: the fixed [`Rate`] and the [`RateSpec`] it is drawn from.

use std::fmt;
use std::num::NonZeroU64;
use std::str::FromStr;

use rand::Rng;

use crate::error::ParseRateError;

/// Maximum quantity a stage can add to its pool in one tick.
///
/// Always positive. Constructors never fail: zero, negative, fractional,
/// and non-finite inputs all collapse to [`Rate::ONE`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Rate(NonZeroU64);

impl Rate {
    /// The default rate.
    pub const ONE: Rate = Rate(NonZeroU64::MIN);

    /// Create a rate, defaulting zero to 1.
    pub fn new(value: u64) -> Self {
        NonZeroU64::new(value).map_or(Self::ONE, Self)
    }

    /// Create a rate from a signed integer. Non-positive values -> 1.
    pub fn from_i64(value: i64) -> Self {
        u64::try_from(value).map_or(Self::ONE, Self::new)
    }

    /// Create a rate from a float.
    ///
    /// Only finite whole numbers `>= 1` are accepted; `2.5`, `NaN`, and
    /// infinities all yield 1. Values beyond `u64::MAX` saturate.
    pub fn from_f64(value: f64) -> Self {
        if value.is_finite() && value.fract() == 0.0 && value >= 1.0 {
            Self::new(value as u64)
        } else {
            Self::ONE
        }
    }

    /// The rate as a plain integer.
    pub fn get(self) -> u64 {
        self.0.get()
    }
}

impl Default for Rate {
    fn default() -> Self {
        Self::ONE
    }
}

impl From<NonZeroU64> for Rate {
    fn from(v: NonZeroU64) -> Self {
        Self(v)
    }
}

impl fmt::Display for Rate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// How a stage's rate is chosen at construction.
///
/// A [`RateSpec::Range`] is resolved exactly once, when the stage is
/// built; the stage keeps the drawn [`Rate`] for its whole life and the
/// range only survives for display.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RateSpec {
    /// A single fixed rate.
    Fixed(Rate),
    /// An inclusive range, drawn from uniformly once.
    Range {
        /// Lower bound (inclusive).
        min: Rate,
        /// Upper bound (inclusive). Never below `min`.
        max: Rate,
    },
}

impl RateSpec {
    /// A fixed spec, with the usual zero -> 1 defaulting.
    pub fn fixed(rate: u64) -> Self {
        Self::Fixed(Rate::new(rate))
    }

    /// A ranged spec. Bounds are normalized and swapped if inverted.
    pub fn range(min: u64, max: u64) -> Self {
        let (a, b) = (Rate::new(min), Rate::new(max));
        Self::Range {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Whether this spec draws its rate from a range.
    pub fn is_ranged(&self) -> bool {
        matches!(self, Self::Range { .. })
    }

    /// Smallest rate this spec can produce.
    pub fn min(&self) -> Rate {
        match *self {
            Self::Fixed(rate) => rate,
            Self::Range { min, .. } => min,
        }
    }

    /// Largest rate this spec can produce.
    pub fn max(&self) -> Rate {
        match *self {
            Self::Fixed(rate) => rate,
            Self::Range { max, .. } => max,
        }
    }

    /// Pick the concrete rate. Fixed specs ignore `rng`.
    pub fn resolve<R: Rng>(&self, rng: &mut R) -> Rate {
        match *self {
            Self::Fixed(rate) => rate,
            Self::Range { min, max } => Rate::new(rng.random_range(min.get()..=max.get())),
        }
    }
}

impl Default for RateSpec {
    fn default() -> Self {
        Self::Fixed(Rate::ONE)
    }
}

impl From<Rate> for RateSpec {
    fn from(rate: Rate) -> Self {
        Self::Fixed(rate)
    }
}

impl fmt::Display for RateSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fixed(rate) => write!(f, "{rate}"),
            Self::Range { min, max } => write!(f, "{min}-{max}"),
        }
    }
}

impl FromStr for RateSpec {
    type Err = ParseRateError;

    /// Parse `N` or `MIN-MAX`, with an optional leading `+` so that the
    /// rate part of a rendered stage (`+4`, `+1-2`) reads back.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let body = s.trim();
        let body = body.strip_prefix('+').unwrap_or(body).trim();
        if body.is_empty() {
            return Err(ParseRateError::Empty);
        }
        match body.split_once('-') {
            None => Ok(Self::Fixed(parse_rate(body)?)),
            Some((lo, hi)) => {
                let min = parse_rate(lo)?;
                let max = parse_rate(hi)?;
                if min > max {
                    return Err(ParseRateError::InvertedRange {
                        min: min.get(),
                        max: max.get(),
                    });
                }
                Ok(Self::Range { min, max })
            }
        }
    }
}

fn parse_rate(part: &str) -> Result<Rate, ParseRateError> {
    let part = part.trim();
    let value: u64 = part.parse().map_err(|_| ParseRateError::InvalidNumber {
        value: part.to_string(),
    })?;
    NonZeroU64::new(value)
        .map(Rate)
        .ok_or(ParseRateError::NotPositive)
}
