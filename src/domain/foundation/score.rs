//! Score value object for the 1-5 leader rating scale.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// A rating score: 1 (very poor) to 5 (excellent).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Score(u8);

impl Score {
    /// Lowest allowed score.
    pub const MIN: u8 = 1;

    /// Highest allowed score.
    pub const MAX: u8 = 5;

    /// Creates a Score, returning error if outside 1..=5.
    pub fn try_new(value: u8) -> Result<Self, ValidationError> {
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(ValidationError::out_of_range(
                "score",
                Self::MIN as i32,
                Self::MAX as i32,
                value as i32,
            ));
        }
        Ok(Self(value))
    }

    /// Returns the numeric value.
    pub fn value(&self) -> u8 {
        self.0
    }

    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self.0 {
            1 => "Very Poor",
            2 => "Poor",
            3 => "Average",
            4 => "Good",
            _ => "Excellent",
        }
    }

    /// Averages a slice of scores, rounded to two decimal places.
    ///
    /// Returns 0.0 for an empty slice.
    pub fn average(scores: &[Score]) -> f64 {
        if scores.is_empty() {
            return 0.0;
        }
        let sum: u32 = scores.iter().map(|s| s.0 as u32).sum();
        let avg = sum as f64 / scores.len() as f64;
        (avg * 100.0).round() / 100.0
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn score(v: u8) -> Score {
        Score::try_new(v).unwrap()
    }

    #[test]
    fn try_new_accepts_valid_range() {
        for v in 1..=5 {
            assert_eq!(score(v).value(), v);
        }
    }

    #[test]
    fn try_new_rejects_out_of_range() {
        assert!(Score::try_new(0).is_err());
        assert!(Score::try_new(6).is_err());
    }

    #[test]
    fn average_of_empty_is_zero() {
        assert_eq!(Score::average(&[]), 0.0);
    }

    #[test]
    fn average_rounds_to_two_decimals() {
        // (5 + 4 + 4) / 3 = 4.333... -> 4.33
        assert_eq!(Score::average(&[score(5), score(4), score(4)]), 4.33);
        // (5 + 4) / 2 = 4.5 stays exact
        assert_eq!(Score::average(&[score(5), score(4)]), 4.5);
        // (2 + 3 + 5) / 3 = 3.333 -> 3.33; (1+5+5)/3 = 3.666 -> 3.67
        assert_eq!(Score::average(&[score(1), score(5), score(5)]), 3.67);
    }

    proptest! {
        #[test]
        fn average_stays_within_scale(values in proptest::collection::vec(1u8..=5, 1..50)) {
            let scores: Vec<Score> = values.iter().map(|v| score(*v)).collect();
            let avg = Score::average(&scores);
            prop_assert!(avg >= 1.0 && avg <= 5.0);
            // Rounded to two decimals: scaling by 100 yields an integer.
            prop_assert!(((avg * 100.0).round() - avg * 100.0).abs() < 1e-9);
        }
    }
}
