//! Percentage value object (0-100 scale).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// A value between 0 and 100 inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Percentage(u8);

impl Percentage {
    /// Zero percent.
    pub const ZERO: Self = Self(0);

    /// One hundred percent.
    pub const HUNDRED: Self = Self(100);

    /// Creates a new Percentage, clamping to valid range.
    pub fn new(value: u8) -> Self {
        Self(value.min(100))
    }

    /// Creates a Percentage, returning error if out of range.
    pub fn try_new(value: u8) -> Result<Self, ValidationError> {
        if value > 100 {
            return Err(ValidationError::out_of_range(
                "percentage",
                0,
                100,
                value as i32,
            ));
        }
        Ok(Self(value))
    }

    /// Computes `part`'s share of `total`, rounded to the nearest integer.
    ///
    /// A zero total yields zero percent.
    pub fn share_of(part: u64, total: u64) -> Self {
        if total == 0 {
            return Self::ZERO;
        }
        let pct = (part as f64 / total as f64 * 100.0).round();
        Self(pct.clamp(0.0, 100.0) as u8)
    }

    /// Returns the value as u8.
    pub fn value(&self) -> u8 {
        self.0
    }
}

impl Default for Percentage {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn new_clamps_to_100() {
        assert_eq!(Percentage::new(101).value(), 100);
        assert_eq!(Percentage::new(255).value(), 100);
    }

    #[test]
    fn try_new_rejects_out_of_range() {
        assert!(Percentage::try_new(100).is_ok());
        assert!(Percentage::try_new(101).is_err());
    }

    #[test]
    fn share_of_rounds_to_nearest() {
        assert_eq!(Percentage::share_of(1, 3).value(), 33);
        assert_eq!(Percentage::share_of(2, 3).value(), 67);
        assert_eq!(Percentage::share_of(1, 2).value(), 50);
        assert_eq!(Percentage::share_of(0, 10).value(), 0);
        assert_eq!(Percentage::share_of(10, 10).value(), 100);
    }

    #[test]
    fn share_of_zero_total_is_zero() {
        assert_eq!(Percentage::share_of(5, 0), Percentage::ZERO);
    }

    proptest! {
        #[test]
        fn shares_sum_close_to_100(counts in proptest::collection::vec(0u64..1000, 1..10)) {
            let total: u64 = counts.iter().sum();
            prop_assume!(total > 0);
            let sum: i64 = counts
                .iter()
                .map(|c| Percentage::share_of(*c, total).value() as i64)
                .sum();
            // Nearest-integer rounding drifts at most half a point per option.
            let slack = (counts.len() as i64 + 1) / 2;
            prop_assert!((sum - 100).abs() <= slack);
        }
    }
}
