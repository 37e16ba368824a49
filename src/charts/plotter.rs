//! Chart Plotter Module
//! Interactive scatter plot using egui_plot.

use crate::report::AnalysisReport;
use crate::stats::Verdict;
use egui::Color32;
use egui_plot::{Legend, Plot, PlotPoints, Points};

pub const POINT_COLOR: Color32 = Color32::from_rgb(52, 152, 219); // Blue
pub const SIGNIFICANT_COLOR: Color32 = Color32::from_rgb(41, 98, 255); // Blue heading
pub const NOT_SIGNIFICANT_COLOR: Color32 = Color32::from_rgb(231, 76, 60); // Red heading

/// Draws analysis results with egui_plot.
pub struct ChartPlotter;

impl ChartPlotter {
    /// Heading color for a verdict: blue when significant, red otherwise.
    pub fn verdict_color(verdict: Verdict) -> Color32 {
        if verdict.is_significant() {
            SIGNIFICANT_COLOR
        } else {
            NOT_SIGNIFICANT_COLOR
        }
    }

    /// Draw the scatter plot of a report, y already scaled for display.
    pub fn draw_scatter_chart(ui: &mut egui::Ui, report: &AnalysisReport, height: f32) {
        let points: PlotPoints = report.points.iter().map(|p| [p.x, p.y]).collect();

        Plot::new(format!("scatter_{}_{}", report.x.column, report.y.column))
            .height(height)
            .legend(Legend::default())
            .x_axis_label(report.x.label)
            .y_axis_label(report.y_axis_label())
            .allow_scroll(false)
            .show(ui, |plot_ui| {
                plot_ui.points(
                    Points::new(points)
                        .radius(4.0)
                        .color(POINT_COLOR.gamma_multiply(0.8))
                        .name(report.title()),
                );
            });
    }
}
