//! Chart Viewer Widget
//! Central panel showing the verdict, the scatter plot and the numbers.

use chartify_corr::charts::ChartPlotter;
use chartify_corr::AnalysisReport;
use egui::{Color32, RichText};

const CHART_HEIGHT: f32 = 420.0;

/// What the central panel currently shows.
#[derive(Default)]
pub enum ChartViewer {
    #[default]
    Empty,
    Report(AnalysisReport),
    Error(String),
}

impl ChartViewer {
    pub fn report(&self) -> Option<&AnalysisReport> {
        match self {
            ChartViewer::Report(report) => Some(report),
            _ => None,
        }
    }

    pub fn show(&self, ui: &mut egui::Ui) {
        match self {
            ChartViewer::Empty => {
                ui.centered_and_justified(|ui| {
                    ui.label(RichText::new("No Data").size(20.0));
                });
            }
            ChartViewer::Error(message) => {
                ui.vertical_centered(|ui| {
                    ui.add_space(20.0);
                    ui.label(
                        RichText::new(message)
                            .size(18.0)
                            .color(Color32::from_rgb(220, 53, 69)),
                    );
                });
            }
            ChartViewer::Report(report) => Self::draw_report(ui, report),
        }
    }

    fn draw_report(ui: &mut egui::Ui, report: &AnalysisReport) {
        ui.vertical_centered(|ui| {
            ui.add_space(10.0);
            ui.label(
                RichText::new(report.verdict.message())
                    .size(22.0)
                    .strong()
                    .color(ChartPlotter::verdict_color(report.verdict)),
            );
            ui.add_space(6.0);
            ui.label(RichText::new(report.title()).size(15.0));
        });

        ui.add_space(10.0);
        ChartPlotter::draw_scatter_chart(ui, report, CHART_HEIGHT);
        ui.add_space(10.0);

        ui.label(format!("Correlation coefficient: {}", report.coefficient_text()));
        ui.label(format!("p-value: {}", report.p_value_text()));
        ui.label(
            RichText::new(format!("n = {}", report.sample_size))
                .size(11.0)
                .color(Color32::GRAY),
        );
    }
}
