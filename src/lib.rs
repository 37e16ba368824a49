//! Chartify Correlation - two-variable correlation analysis.
//!
//! Loads a CSV dataset, fills missing numeric values with column means, and
//! tests a chosen pair of whitelisted variables for linear correlation.

pub mod analysis;
pub mod charts;
pub mod config;
pub mod data;
pub mod error;
pub mod logging;
pub mod report;
pub mod selection;
pub mod stats;

pub use analysis::AnalysisSession;
pub use error::AnalysisError;
pub use report::AnalysisReport;
pub use selection::{ExplanatoryVariable, TargetVariable, VariableSelection};
pub use stats::{CorrelationEngine, CorrelationResult, Verdict};
