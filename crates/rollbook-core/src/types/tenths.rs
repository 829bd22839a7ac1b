use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

///
/// Tenths
///
/// Fixed-point with 1 fractional digit.
/// Stores numbers as `u64` representing value × 10 (e.g., 3.4 → 34).
///
/// Constructors:
/// - `from_atomic(raw)`: raw scaled integer (no scaling)
/// - `from_units(units)`: scales by 10 (saturating on overflow)
/// - `from_ratio(sum, count)`: truncating scaled average; zero when empty
///

#[repr(transparent)]
#[derive(
    Clone, Copy, Debug, Default, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize,
)]
pub struct Tenths(u64);

impl Tenths {
    const SCALE: u64 = 10;

    pub const ZERO: Self = Self(0);

    /// Construct from a raw scaled integer. No scaling applied.
    #[must_use]
    pub const fn from_atomic(raw: u64) -> Self {
        Self(raw)
    }

    /// Construct from whole units. Scales by 10.
    #[must_use]
    pub const fn from_units(units: u64) -> Self {
        Self(units.saturating_mul(Self::SCALE))
    }

    /// Scaled average of `sum` over `count`, truncating toward zero.
    ///
    /// A zero count yields zero rather than an error; empty rosters report
    /// an average of 0.0.
    #[must_use]
    pub const fn from_ratio(sum: u64, count: u64) -> Self {
        if count == 0 {
            Self::ZERO
        } else {
            Self(sum.saturating_mul(Self::SCALE) / count)
        }
    }

    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl Display for Tenths {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.0 / Self::SCALE, self.0 % Self::SCALE)
    }
}

impl From<u64> for Tenths {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

///
/// TESTS
///
