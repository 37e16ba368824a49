//! Chartify Correlation Main Application
//! Main window with control panel and chart viewer.

use crate::gui::{ChartViewer, ControlPanel, ControlPanelAction};
use chartify_corr::charts::StaticChartRenderer;
use chartify_corr::config::AppConfig;
use chartify_corr::data::{DataLoader, Table};
use chartify_corr::selection::whitelisted_columns;
use chartify_corr::AnalysisSession;
use egui::SidePanel;
use std::path::PathBuf;
use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::thread;
use tracing::{error, info, warn};

/// CSV loading result from background thread
enum LoadResult {
    Complete { table: Table, path: PathBuf },
    Error(String),
}

/// Main application window.
pub struct CorrelationApp {
    config: AppConfig,
    session: Option<AnalysisSession>,
    control_panel: ControlPanel,
    chart_viewer: ChartViewer,

    // Async CSV loading
    load_rx: Option<Receiver<LoadResult>>,
    is_loading: bool,
}

impl CorrelationApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: AppConfig) -> Self {
        let mut app = Self {
            config,
            session: None,
            control_panel: ControlPanel::new(),
            chart_viewer: ChartViewer::default(),
            load_rx: None,
            is_loading: false,
        };

        let startup = app.config.dataset_path.clone();
        if startup.is_file() {
            app.start_loading(startup);
        }
        app
    }

    fn handle_browse_csv(&mut self) {
        if self.is_loading {
            return;
        }

        if let Some(path) = rfd::FileDialog::new()
            .add_filter("CSV Files", &["csv"])
            .pick_file()
        {
            self.start_loading(path);
        }
    }

    /// Read the CSV in a background thread; imputation happens on arrival.
    fn start_loading(&mut self, path: PathBuf) {
        self.session = None;
        self.chart_viewer = ChartViewer::Empty;
        self.control_panel.dataset_path = Some(path.clone());
        self.control_panel.analyze_enabled = false;
        self.control_panel.export_enabled = false;
        self.control_panel.set_status("Loading CSV file...");
        self.is_loading = true;

        let (tx, rx) = channel();
        self.load_rx = Some(rx);

        thread::spawn(move || {
            let result = match DataLoader::load_csv(&path, &whitelisted_columns()) {
                Ok(table) => LoadResult::Complete { table, path },
                Err(e) => LoadResult::Error(e.to_string()),
            };
            let _ = tx.send(result);
        });
    }

    /// Check for CSV loading results
    fn check_load_results(&mut self) {
        let Some(rx) = self.load_rx.take() else {
            return;
        };

        match rx.try_recv() {
            Ok(LoadResult::Complete { table, path }) => {
                self.is_loading = false;
                match AnalysisSession::from_table(&table, self.config.significance_threshold) {
                    Ok(session) => {
                        info!(path = %path.display(), "dataset ready");
                        self.control_panel.set_status(format!(
                            "Loaded {} rows, {} columns",
                            table.row_count(),
                            table.column_names().len()
                        ));
                        self.control_panel.analyze_enabled = true;
                        self.session = Some(session);
                    }
                    Err(e) => {
                        error!(error = %e, "dataset rejected");
                        self.control_panel.set_status(format!("Error: {e}"));
                        self.chart_viewer = ChartViewer::Error(e.to_string());
                    }
                }
            }
            Ok(LoadResult::Error(e)) => {
                self.is_loading = false;
                error!(error = %e, "CSV load failed");
                self.control_panel.set_status(format!("Error: {e}"));
            }
            Err(TryRecvError::Empty) => {
                self.load_rx = Some(rx);
            }
            Err(TryRecvError::Disconnected) => {
                self.is_loading = false;
                self.control_panel
                    .set_status("Error: loader stopped without a result");
            }
        }
    }

    /// Run the analysis for the current selection.
    fn handle_analyze(&mut self) {
        let Some(session) = &self.session else {
            self.control_panel.set_status("No data loaded");
            return;
        };

        match session.analyze(self.control_panel.selection) {
            Ok(report) => {
                self.control_panel.set_status(report.verdict.message());
                self.control_panel.export_enabled = true;
                self.chart_viewer = ChartViewer::Report(report);
            }
            Err(e) => {
                warn!(error = %e, "analysis failed");
                self.control_panel.set_status(format!("Error: {e}"));
                self.control_panel.export_enabled = false;
                self.chart_viewer = ChartViewer::Error(e.to_string());
            }
        }
    }

    /// Save the current scatter plot as PNG and open it.
    fn handle_export_png(&mut self) {
        let Some(report) = self.chart_viewer.report() else {
            self.control_panel.set_status("No chart to export");
            return;
        };

        let Some(path) = rfd::FileDialog::new()
            .add_filter("PNG Image", &["png"])
            .set_file_name("correlation.png")
            .save_file()
        else {
            return; // User cancelled
        };

        let result = StaticChartRenderer::render_png(
            report,
            &path,
            self.config.png_width,
            self.config.png_height,
        );
        match result {
            Ok(()) => {
                self.control_panel
                    .set_status(format!("PNG exported: {}", path.display()));
                if let Err(e) = open::that(&path) {
                    warn!(error = %e, "could not open exported PNG");
                }
            }
            Err(e) => {
                self.control_panel.set_status(format!("Error: {e}"));
            }
        }
    }
}

impl eframe::App for CorrelationApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.check_load_results();

        if self.is_loading {
            ctx.request_repaint();
        }

        SidePanel::left("control_panel")
            .min_width(300.0)
            .max_width(350.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    match self.control_panel.show(ui) {
                        ControlPanelAction::BrowseCsv => self.handle_browse_csv(),
                        ControlPanelAction::Analyze => self.handle_analyze(),
                        ControlPanelAction::ExportPng => self.handle_export_png(),
                        ControlPanelAction::None => {}
                    }
                });
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.chart_viewer.show(ui);
        });
    }
}
