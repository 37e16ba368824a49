//! Correlation Engine Module
//! Pearson correlation with a two-sided significance test.
//!
//! The p-value comes from Student's t-distribution with `n - 2` degrees of
//! freedom, using the statrs crate.

use crate::error::AnalysisError;
use serde::Serialize;
use statrs::distribution::{ContinuousCDF, StudentsT};

/// Outcome of one correlation test.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CorrelationResult {
    /// Pearson r, in `[-1, 1]`.
    pub coefficient: f64,
    /// Two-sided p-value for `r = 0`, in `[0, 1]`.
    pub p_value: f64,
    pub sample_size: usize,
}

/// Stateless correlation engine.
pub struct CorrelationEngine;

impl CorrelationEngine {
    /// Correlate two equal-length, fully observed sequences.
    ///
    /// # Errors
    /// - [`AnalysisError::LengthMismatch`] if the lengths differ
    /// - [`AnalysisError::DataQuality`] if a value is not finite
    /// - [`AnalysisError::InsufficientData`] if `n < 2` or either side is constant
    pub fn pearson(x: &[f64], y: &[f64]) -> Result<CorrelationResult, AnalysisError> {
        if x.len() != y.len() {
            return Err(AnalysisError::LengthMismatch {
                x_len: x.len(),
                y_len: y.len(),
            });
        }
        let n = x.len();
        if n < 2 {
            return Err(AnalysisError::insufficient(format!(
                "need at least 2 paired observations, got {n}"
            )));
        }
        Self::check_finite(x, "x")?;
        Self::check_finite(y, "y")?;
        if Self::is_constant(x) || Self::is_constant(y) {
            return Err(AnalysisError::insufficient(
                "a variable has zero variance, correlation is undefined",
            ));
        }

        let coefficient = Self::coefficient(x, y)?;
        let p_value = Self::p_value_for_r(coefficient, n)?;

        Ok(CorrelationResult {
            coefficient,
            p_value,
            sample_size: n,
        })
    }

    /// Pearson r from mean-centred sums, clamped to `[-1, 1]`.
    ///
    /// Formula: r = Σ[(xi - x̄)(yi - ȳ)] / sqrt(Σ(xi - x̄)² × Σ(yi - ȳ)²)
    ///
    /// r is scale-free, so each side is normalised before summing and the
    /// sums stay representable for any finite input.
    fn coefficient(x: &[f64], y: &[f64]) -> Result<f64, AnalysisError> {
        let (Some(dx), Some(dy)) = (Self::unit_deviations(x), Self::unit_deviations(y)) else {
            return Err(AnalysisError::insufficient(
                "deviations from the mean vanish at f64 precision, correlation is undefined",
            ));
        };

        let (sxy, sxx, syy) = dx.iter().zip(&dy).fold((0.0, 0.0, 0.0), |(sxy, sxx, syy), (a, b)| {
            (sxy + a * b, sxx + a * a, syy + b * b)
        });

        Ok((sxy / (sxx.sqrt() * syy.sqrt())).clamp(-1.0, 1.0))
    }

    /// Deviations from the mean, divided by the largest one in magnitude.
    ///
    /// Values are divided by their peak magnitude before the mean is taken so
    /// the sum cannot overflow. `None` if every deviation is zero.
    fn unit_deviations(values: &[f64]) -> Option<Vec<f64>> {
        let peak = values.iter().fold(0.0_f64, |m, v| m.max(v.abs()));
        if peak == 0.0 {
            return None;
        }
        let scaled: Vec<f64> = values.iter().map(|v| v / peak).collect();
        let mean = scaled.iter().sum::<f64>() / scaled.len() as f64;

        let deviations: Vec<f64> = scaled.iter().map(|v| v - mean).collect();
        let spread = deviations.iter().fold(0.0_f64, |m, d| m.max(d.abs()));
        if spread == 0.0 {
            return None;
        }
        Some(deviations.into_iter().map(|d| d / spread).collect())
    }

    /// Two-sided p-value for `r` with `n` paired observations.
    ///
    /// Formula: t = r × sqrt((n-2) / (1-r²)), p = 2 × P(T > |t|)
    ///
    /// With `n = 2` the line through two points is always perfect and there
    /// are no degrees of freedom left, so p is 1. With `|r| = 1` and `n > 2`
    /// the statistic is infinite and p is 0.
    pub fn p_value_for_r(r: f64, n: usize) -> Result<f64, AnalysisError> {
        if n < 2 {
            return Err(AnalysisError::insufficient(format!(
                "need at least 2 paired observations, got {n}"
            )));
        }
        if n == 2 {
            return Ok(1.0);
        }
        if r.abs() >= 1.0 {
            return Ok(0.0);
        }

        let df = (n - 2) as f64;
        let t_stat = r * (df / (1.0 - r * r)).sqrt();

        let t_dist = StudentsT::new(0.0, 1.0, df)
            .map_err(|e| AnalysisError::insufficient(format!("t-distribution unavailable: {e}")))?;
        let p_value = 2.0 * t_dist.sf(t_stat.abs());

        Ok(p_value.clamp(0.0, 1.0))
    }

    fn check_finite(values: &[f64], side: &str) -> Result<(), AnalysisError> {
        match values.iter().position(|v| !v.is_finite()) {
            Some(row) => Err(AnalysisError::data_quality(
                side,
                format!("non-finite value at row {row}"),
            )),
            None => Ok(()),
        }
    }

    /// Exact comparison: the mean of identical values may not reproduce the
    /// value itself, so a variance test would miss some constant inputs.
    fn is_constant(values: &[f64]) -> bool {
        values.windows(2).all(|w| w[0] == w[1])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-9;

    #[test]
    fn known_reference_values() {
        // scipy.stats.pearsonr([1, 2, 3, 4, 5], [2, 4, 5, 4, 5])
        let result =
            CorrelationEngine::pearson(&[1.0, 2.0, 3.0, 4.0, 5.0], &[2.0, 4.0, 5.0, 4.0, 5.0])
                .unwrap();
        assert!((result.coefficient - 0.774_596_669_241_483_4).abs() < TOL);
        assert!((result.p_value - 0.1240).abs() < 1e-3);
        assert_eq!(result.sample_size, 5);
    }

    #[test]
    fn self_correlation_is_one() {
        let x = [0.1, 0.7, 0.2, 5.5, 3.3, 9.0];
        let result = CorrelationEngine::pearson(&x, &x).unwrap();
        assert!((result.coefficient - 1.0).abs() < TOL);
        assert!(result.p_value < 1e-6);
    }

    #[test]
    fn negation_is_minus_one() {
        let x = [3.0, 1.0, 4.0, 1.5, 9.0, 2.6];
        let neg: Vec<f64> = x.iter().map(|v| -v).collect();
        let result = CorrelationEngine::pearson(&x, &neg).unwrap();
        assert!((result.coefficient + 1.0).abs() < TOL);
    }

    #[test]
    fn symmetric_in_arguments() {
        let x = [1.0, 3.0, 2.0, 5.0, 4.0];
        let y = [2.0, 1.0, 4.0, 3.0, 5.0];
        let xy = CorrelationEngine::pearson(&x, &y).unwrap();
        let yx = CorrelationEngine::pearson(&y, &x).unwrap();
        assert_eq!(xy.coefficient, yx.coefficient);
        assert_eq!(xy.p_value, yx.p_value);
    }

    #[test]
    fn constant_input_is_insufficient() {
        let err = CorrelationEngine::pearson(&[0.1, 0.1, 0.1], &[1.0, 2.0, 3.0]).unwrap_err();
        assert!(matches!(err, AnalysisError::InsufficientData { .. }));

        let err = CorrelationEngine::pearson(&[1.0, 2.0, 3.0], &[7.0, 7.0, 7.0]).unwrap_err();
        assert!(matches!(err, AnalysisError::InsufficientData { .. }));
    }

    #[test]
    fn fewer_than_two_observations_is_insufficient() {
        assert!(matches!(
            CorrelationEngine::pearson(&[1.0], &[2.0]),
            Err(AnalysisError::InsufficientData { .. })
        ));
        assert!(matches!(
            CorrelationEngine::pearson(&[], &[]),
            Err(AnalysisError::InsufficientData { .. })
        ));
    }

    #[test]
    fn two_observations_have_no_evidence() {
        let result = CorrelationEngine::pearson(&[1.0, 2.0], &[5.0, 3.0]).unwrap();
        assert!((result.coefficient + 1.0).abs() < TOL);
        assert_eq!(result.p_value, 1.0);
    }

    #[test]
    fn length_mismatch_is_rejected() {
        assert!(matches!(
            CorrelationEngine::pearson(&[1.0, 2.0, 3.0], &[1.0, 2.0]),
            Err(AnalysisError::LengthMismatch { x_len: 3, y_len: 2 })
        ));
    }

    #[test]
    fn non_finite_values_are_rejected() {
        assert!(matches!(
            CorrelationEngine::pearson(&[1.0, f64::NAN, 3.0], &[1.0, 2.0, 3.0]),
            Err(AnalysisError::DataQuality { .. })
        ));
    }

    #[test]
    fn coefficient_does_not_depend_on_scale() {
        let x = [1.0, 2.0, 3.0, 5.0];
        let y = [2.0, 4.0, 5.0, 9.0];
        let unit = CorrelationEngine::pearson(&x, &y).unwrap();

        for scale in [1e-160, 1e160, 1e-300, 1e300] {
            let xs: Vec<f64> = x.iter().map(|v| v * scale).collect();
            let ys: Vec<f64> = y.iter().map(|v| v * scale).collect();
            let scaled = CorrelationEngine::pearson(&xs, &ys).unwrap();
            assert!((scaled.coefficient - unit.coefficient).abs() < TOL, "scale {scale}");
            assert!((scaled.p_value - unit.p_value).abs() < 1e-6, "scale {scale}");
        }
        assert!((unit.coefficient - 0.994_49).abs() < 1e-4);
    }

    #[test]
    fn sides_on_different_scales_still_correlate() {
        let x = [1e-160, 2e-160, 3e-160, 5e-160];
        let y = [2e160, 4e160, 5e160, 9e160];
        let result = CorrelationEngine::pearson(&x, &y).unwrap();
        assert!(result.coefficient > 0.99);
        assert!(result.p_value < 0.01);
    }

    #[test]
    fn uncorrelated_data_has_large_p_value() {
        let result =
            CorrelationEngine::pearson(&[1.0, 2.0, 3.0, 4.0, 5.0], &[2.0, 5.0, 1.0, 5.0, 2.0])
                .unwrap();
        assert!(result.coefficient.abs() < 0.1);
        assert!(result.p_value > 0.8);
    }
}
