//! Approximate price comparison
//!
//! Prices are decimal currency amounts held in binary floating point, so two
//! prices are compared with an absolute tolerance instead of `==`.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Largest absolute difference at which two prices are still considered equal.
///
/// Currency carries two or three decimal places, so `1e-4` absorbs representation
/// error while keeping `9.99` and `10.00` apart.
pub const PRICE_EPSILON: f64 = 1e-4;

/// An absolute tolerance for price comparison.
///
/// Defaults to [`PRICE_EPSILON`]. Deserializes from a bare number. Zero, negative
/// and non-finite values are rejected: a zero band would make no price equal to
/// itself.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(try_from = "f64", into = "f64")]
pub struct Tolerance(f64);

impl Tolerance {
    /// Create a tolerance, or `None` unless `epsilon` is finite and positive
    pub fn new(epsilon: f64) -> Option<Self> {
        (epsilon.is_finite() && epsilon > 0.0).then_some(Self(epsilon))
    }

    /// The tolerance value
    pub fn epsilon(self) -> f64 {
        self.0
    }

    /// Whether `a` and `b` differ by strictly less than the tolerance
    pub fn approx_eq(self, a: f64, b: f64) -> bool {
        (a - b).abs() < self.0
    }

    /// Order two prices, treating prices within the tolerance as equivalent.
    ///
    /// Outside the tolerance this is a two-way split: `Less` when `a < b`,
    /// otherwise `Greater`. A NaN on either side therefore yields `Greater`.
    pub fn compare(self, a: f64, b: f64) -> Ordering {
        if self.approx_eq(a, b) {
            Ordering::Equal
        } else if a < b {
            Ordering::Less
        } else {
            Ordering::Greater
        }
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self(PRICE_EPSILON)
    }
}

impl TryFrom<f64> for Tolerance {
    type Error = String;

    fn try_from(epsilon: f64) -> Result<Self, Self::Error> {
        Self::new(epsilon).ok_or_else(|| format!("invalid price tolerance: {}", epsilon))
    }
}

impl From<Tolerance> for f64 {
    fn from(tolerance: Tolerance) -> Self {
        tolerance.0
    }
}

/// Compare two prices for equality within [`PRICE_EPSILON`]
pub fn prices_equal(a: f64, b: f64) -> bool {
    Tolerance::default().approx_eq(a, b)
}

/// Order two prices with [`PRICE_EPSILON`] as the equivalence band
pub fn compare_prices(a: f64, b: f64) -> Ordering {
    Tolerance::default().compare(a, b)
}
