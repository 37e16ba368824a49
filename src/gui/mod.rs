//! GUI module - User interface components

mod app;
mod chart_viewer;
mod control_panel;

pub use app::CorrelationApp;
pub use chart_viewer::ChartViewer;
pub use control_panel::{ControlPanel, ControlPanelAction};

use chartify_corr::config::AppConfig;
use eframe::egui;

/// Open the main window and block until it is closed.
pub fn run(config: AppConfig) -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 760.0])
            .with_min_inner_size([900.0, 600.0])
            .with_title("Chartify Correlation"),
        ..Default::default()
    };

    eframe::run_native(
        "Chartify Correlation",
        options,
        Box::new(|cc| Ok(Box::new(CorrelationApp::new(cc, config)))),
    )
}
