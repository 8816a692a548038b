//! Bounded rating values.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// A rating value rejected because it lies outside [`Rating::MIN`, `Rating::MAX`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("rating {0} is outside the valid range 100..=5000")]
pub struct InvalidRating(pub i64);

/// A rating guaranteed to lie within `100..=5000`.
///
/// The only way to obtain a `Rating` is through [`Rating::new`] (or the
/// equivalent `TryFrom`/`Deserialize` paths), so every stored rating has
/// already passed range validation. Out-of-range values are rejected, never
/// clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct Rating(u16);

impl Rating {
    /// Lowest accepted rating (inclusive).
    pub const MIN: u16 = 100;
    /// Highest accepted rating (inclusive).
    pub const MAX: u16 = 5000;

    /// Validates a raw rating.
    pub fn new(value: i64) -> Result<Self, InvalidRating> {
        if (i64::from(Self::MIN)..=i64::from(Self::MAX)).contains(&value) {
            // In range, so it fits in u16.
            Ok(Self(value as u16))
        } else {
            Err(InvalidRating(value))
        }
    }

    /// Returns the numeric value.
    #[must_use]
    pub const fn value(self) -> u16 {
        self.0
    }
}

impl TryFrom<i64> for Rating {
    type Error = InvalidRating;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Rating> for i64 {
    fn from(rating: Rating) -> i64 {
        i64::from(rating.0)
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
