//! Verdict Classifier Module
//! Turns a correlation test result into a categorical conclusion.

use crate::stats::CorrelationResult;
use serde::Serialize;

/// Significance threshold for the correlation test
pub const SIGNIFICANCE_THRESHOLD: f64 = 0.05;

/// Conclusion drawn from one correlation test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    SignificantPositive,
    SignificantNegative,
    NotSignificant,
}

impl Verdict {
    /// Classify at the default threshold of 0.05.
    pub fn classify(result: &CorrelationResult) -> Self {
        Self::classify_with(result, SIGNIFICANCE_THRESHOLD)
    }

    /// Classify against an explicit threshold `alpha`.
    ///
    /// `p >= alpha` is never significant. A coefficient of exactly zero has
    /// no direction, so it is reported as not significant even when
    /// `p < alpha`.
    pub fn classify_with(result: &CorrelationResult, alpha: f64) -> Self {
        if result.p_value >= alpha {
            return Verdict::NotSignificant;
        }

        if result.coefficient > 0.0 {
            Verdict::SignificantPositive
        } else if result.coefficient < 0.0 {
            Verdict::SignificantNegative
        } else {
            Verdict::NotSignificant
        }
    }

    pub fn is_significant(self) -> bool {
        self != Verdict::NotSignificant
    }

    /// User-facing sentence for this verdict.
    pub fn message(self) -> &'static str {
        match self {
            Verdict::SignificantPositive => {
                "A statistically significant positive correlation was found"
            }
            Verdict::SignificantNegative => {
                "A statistically significant negative correlation was found"
            }
            Verdict::NotSignificant => "No statistically significant correlation was found",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(coefficient: f64, p_value: f64) -> CorrelationResult {
        CorrelationResult {
            coefficient,
            p_value,
            sample_size: 20,
        }
    }

    #[test]
    fn positive_and_significant() {
        assert_eq!(Verdict::classify(&result(0.5, 0.01)), Verdict::SignificantPositive);
    }

    #[test]
    fn negative_and_significant() {
        assert_eq!(Verdict::classify(&result(-0.5, 0.01)), Verdict::SignificantNegative);
    }

    #[test]
    fn large_p_value_is_not_significant() {
        assert_eq!(Verdict::classify(&result(0.8, 0.2)), Verdict::NotSignificant);
        assert_eq!(Verdict::classify(&result(-0.99, 0.2)), Verdict::NotSignificant);
    }

    #[test]
    fn threshold_itself_is_not_significant() {
        assert_eq!(Verdict::classify(&result(0.5, 0.05)), Verdict::NotSignificant);
        assert_eq!(
            Verdict::classify(&result(0.5, 0.049_999)),
            Verdict::SignificantPositive
        );
    }

    #[test]
    fn zero_coefficient_is_not_significant() {
        assert_eq!(Verdict::classify(&result(0.0, 0.01)), Verdict::NotSignificant);
        assert_eq!(Verdict::classify(&result(-0.0, 0.01)), Verdict::NotSignificant);
    }

    #[test]
    fn custom_threshold() {
        let r = result(0.4, 0.03);
        assert_eq!(Verdict::classify_with(&r, 0.01), Verdict::NotSignificant);
        assert_eq!(Verdict::classify_with(&r, 0.05), Verdict::SignificantPositive);
    }

    #[test]
    fn significance_flag_matches_variant() {
        assert!(Verdict::SignificantPositive.is_significant());
        assert!(Verdict::SignificantNegative.is_significant());
        assert!(!Verdict::NotSignificant.is_significant());
    }
}
