//! Static Chart Renderer
//! Writes the scatter plot of an analysis to a PNG file with plotters.
//!
//! Layout: verdict with r and p in the top-left corner, "<x> vs <y>" title
//! caption, scatter points over a light grid.

use crate::report::AnalysisReport;
use plotters::prelude::*;
use std::path::Path;
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("nothing to plot: the report has no points")]
    NoPoints,
    #[error("failed to draw chart: {0}")]
    Draw(String),
}

const POINT: RGBColor = RGBColor(52, 152, 219);
const GRID: RGBColor = RGBColor(220, 220, 220);

pub struct StaticChartRenderer;

impl StaticChartRenderer {
    /// Render `report` as a `width` x `height` PNG at `path`.
    pub fn render_png(
        report: &AnalysisReport,
        path: &Path,
        width: u32,
        height: u32,
    ) -> Result<(), RenderError> {
        let ((x_min, x_max), (y_min, y_max)) = report.bounds().ok_or(RenderError::NoPoints)?;
        let (x_min, x_max) = Self::padded_range(x_min, x_max);
        let (y_min, y_max) = Self::padded_range(y_min, y_max);

        let root = BitMapBackend::new(path, (width, height)).into_drawing_area();
        root.fill(&WHITE).map_err(Self::draw_err)?;

        let subtitle = format!(
            "{}  (r = {}, p = {})",
            report.verdict.message(),
            report.coefficient_text(),
            report.p_value_text()
        );
        root.draw(&Text::new(subtitle, (20, 12), ("sans-serif", 14).into_font()))
            .map_err(Self::draw_err)?;

        let mut chart = ChartBuilder::on(&root)
            .caption(report.title(), ("sans-serif", 24))
            .margin(20)
            .margin_top(40)
            .x_label_area_size(45)
            .y_label_area_size(70)
            .build_cartesian_2d(x_min..x_max, y_min..y_max)
            .map_err(Self::draw_err)?;

        chart
            .configure_mesh()
            .x_desc(report.x.label)
            .y_desc(report.y_axis_label())
            .light_line_style(GRID.mix(0.3))
            .draw()
            .map_err(Self::draw_err)?;

        chart
            .draw_series(
                report
                    .points
                    .iter()
                    .map(|p| Circle::new((p.x, p.y), 4, POINT.mix(0.8).filled())),
            )
            .map_err(Self::draw_err)?;

        root.present().map_err(Self::draw_err)?;
        info!(path = %path.display(), points = report.points.len(), "scatter PNG written");
        Ok(())
    }

    /// Widen `[min, max]` by 10% on each side; a zero-width range gets ±1.
    pub fn padded_range(min: f64, max: f64) -> (f64, f64) {
        let span = max - min;
        if span <= 0.0 || !span.is_finite() {
            return (min - 1.0, max + 1.0);
        }
        let pad = span * 0.1;
        (min - pad, max + pad)
    }

    fn draw_err<E: std::fmt::Display>(err: E) -> RenderError {
        RenderError::Draw(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn padded_range_widens_by_ten_percent() {
        assert_eq!(StaticChartRenderer::padded_range(0.0, 10.0), (-1.0, 11.0));
    }

    #[test]
    fn degenerate_range_is_opened_up() {
        assert_eq!(StaticChartRenderer::padded_range(5.0, 5.0), (4.0, 6.0));
    }
}
