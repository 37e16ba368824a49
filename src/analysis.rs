//! Analysis Session Module
//! Holds the imputed dataset and runs the pipeline for each selection.

use crate::data::{DataLoader, Imputer, Table};
use crate::error::AnalysisError;
use crate::report::AnalysisReport;
use crate::selection::{whitelisted_columns, Variable, VariableSelection};
use crate::stats::{CorrelationEngine, Verdict, SIGNIFICANCE_THRESHOLD};
use std::path::Path;
use tracing::{info, info_span};

/// A dataset loaded and imputed once, analysed any number of times.
///
/// Analyses only read the table, so one session can serve repeated
/// selections without re-imputing.
#[derive(Debug, Clone)]
pub struct AnalysisSession {
    table: Table,
    significance_threshold: f64,
}

impl AnalysisSession {
    /// Impute `raw` and keep the result for later analyses.
    pub fn from_table(raw: &Table, significance_threshold: f64) -> Result<Self, AnalysisError> {
        Ok(Self {
            table: Imputer::impute(raw)?,
            significance_threshold,
        })
    }

    /// Load a CSV file, declaring every whitelisted column numeric.
    pub fn open(path: &Path, significance_threshold: f64) -> Result<Self, AnalysisError> {
        let raw = DataLoader::load_csv(path, &whitelisted_columns())?;
        Self::from_table(&raw, significance_threshold)
    }

    pub fn with_default_threshold(raw: &Table) -> Result<Self, AnalysisError> {
        Self::from_table(raw, SIGNIFICANCE_THRESHOLD)
    }

    /// The imputed table.
    pub fn table(&self) -> &Table {
        &self.table
    }

    /// Correlate the selected pair and classify the result.
    pub fn analyze(&self, selection: VariableSelection) -> Result<AnalysisReport, AnalysisError> {
        let span = info_span!("analyze", x = selection.x.column(), y = selection.y.column());
        let _enter = span.enter();

        let x = self.table.complete_values(selection.x.column())?;
        let y = self.table.complete_values(selection.y.column())?;

        let result = CorrelationEngine::pearson(&x, &y)?;
        let verdict = Verdict::classify_with(&result, self.significance_threshold);

        info!(
            r = result.coefficient,
            p = result.p_value,
            n = result.sample_size,
            ?verdict,
            "analysis complete"
        );
        Ok(AnalysisReport::new(selection, &result, verdict, &x, &y))
    }
}
