//! Analysis Report Module
//! Everything presentation needs from one analysis: verdict, formatted
//! numbers and scatter points.

use crate::selection::{VariableRef, VariableSelection};
use crate::stats::{CorrelationResult, Verdict};
use serde::Serialize;

/// Divisor applied to y values when plotting. Display only: the
/// correlation is always computed on unscaled data.
pub const SCATTER_Y_SCALE: f64 = 100.0;

/// One point of the scatter plot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScatterPoint {
    pub x: f64,
    pub y: f64,
}

/// Result of analysing one variable selection.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub x: VariableRef,
    pub y: VariableRef,
    pub verdict: Verdict,
    pub coefficient: f64,
    pub p_value: f64,
    pub sample_size: usize,
    pub points: Vec<ScatterPoint>,
}

impl AnalysisReport {
    /// Assemble a report from the unscaled x/y data behind `result`.
    pub fn new(
        selection: VariableSelection,
        result: &CorrelationResult,
        verdict: Verdict,
        x_values: &[f64],
        y_values: &[f64],
    ) -> Self {
        Self {
            x: VariableRef::of(selection.x),
            y: VariableRef::of(selection.y),
            verdict,
            coefficient: result.coefficient,
            p_value: result.p_value,
            sample_size: result.sample_size,
            points: Self::scatter_points(x_values, y_values),
        }
    }

    /// Pair x and y values, dividing y by [`SCATTER_Y_SCALE`].
    pub fn scatter_points(x_values: &[f64], y_values: &[f64]) -> Vec<ScatterPoint> {
        x_values
            .iter()
            .zip(y_values)
            .map(|(&x, &y)| ScatterPoint {
                x,
                y: y / SCATTER_Y_SCALE,
            })
            .collect()
    }

    pub fn coefficient_text(&self) -> String {
        format!("{:.4}", self.coefficient)
    }

    pub fn p_value_text(&self) -> String {
        format!("{:.4}", self.p_value)
    }

    pub fn title(&self) -> String {
        format!("{} vs {}", self.x.label, self.y.label)
    }

    pub fn y_axis_label(&self) -> String {
        format!("{} (/{})", self.y.label, SCATTER_Y_SCALE)
    }

    /// Multi-line plain text summary for terminals and logs.
    pub fn summary(&self) -> String {
        format!(
            "{title}\n{message}\nCorrelation coefficient: {r}\np-value: {p}\nSample size: {n}",
            title = self.title(),
            message = self.verdict.message(),
            r = self.coefficient_text(),
            p = self.p_value_text(),
            n = self.sample_size,
        )
    }

    /// `(min, max)` over plotted x and y, `None` when there are no points.
    pub fn bounds(&self) -> Option<((f64, f64), (f64, f64))> {
        let first = self.points.first()?;
        let init = ((first.x, first.x), (first.y, first.y));
        Some(self.points.iter().fold(init, |((x0, x1), (y0, y1)), p| {
            ((x0.min(p.x), x1.max(p.x)), (y0.min(p.y), y1.max(p.y)))
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selection::{ExplanatoryVariable, TargetVariable};

    fn report() -> AnalysisReport {
        let selection =
            VariableSelection::new(ExplanatoryVariable::TotalStores, TargetVariable::Revenue);
        let result = CorrelationResult {
            coefficient: 0.912_345_6,
            p_value: 0.000_012_3,
            sample_size: 3,
        };
        AnalysisReport::new(
            selection,
            &result,
            Verdict::SignificantPositive,
            &[1.0, 2.0, 3.0],
            &[100.0, 250.0, 420.0],
        )
    }

    #[test]
    fn y_values_are_scaled_for_display_only() {
        let report = report();
        assert_eq!(
            report.points,
            vec![
                ScatterPoint { x: 1.0, y: 1.0 },
                ScatterPoint { x: 2.0, y: 2.5 },
                ScatterPoint { x: 3.0, y: 4.2 },
            ]
        );
        assert_eq!(report.coefficient, 0.912_345_6);
    }

    #[test]
    fn numbers_use_four_decimals() {
        let report = report();
        assert_eq!(report.coefficient_text(), "0.9123");
        assert_eq!(report.p_value_text(), "0.0000");
    }

    #[test]
    fn title_uses_labels() {
        assert_eq!(
            report().title(),
            "Total Seven-Eleven stores vs Revenue (JPY million)"
        );
    }

    #[test]
    fn bounds_cover_all_points() {
        assert_eq!(report().bounds(), Some(((1.0, 3.0), (1.0, 4.2))));
    }

    #[test]
    fn json_carries_verdict_and_columns() {
        let json = serde_json::to_value(report()).unwrap();
        assert_eq!(json["verdict"], "significant_positive");
        assert_eq!(json["x"]["column"], "Total_Stores_Seven_Eleven");
        assert_eq!(json["points"].as_array().unwrap().len(), 3);
    }
}
