//! Analysis error taxonomy shared by the whole pipeline.

use crate::data::LoaderError;
use crate::selection::VariableRole;
use polars::prelude::PolarsError;
use thiserror::Error;

/// Every failure that prevents a verdict from being produced.
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// A column is absent, non-numeric, or has no observed values.
    #[error("data quality error in column '{column}': {reason}")]
    DataQuality { column: String, reason: String },
    /// Fewer than two observations, or a constant variable.
    #[error("insufficient data: {reason}")]
    InsufficientData { reason: String },
    /// A requested variable is not on the permitted list.
    #[error("'{name}' is not a permitted {role} variable")]
    InvalidSelection { name: String, role: VariableRole },
    #[error("variables have different lengths ({x_len} vs {y_len})")]
    LengthMismatch { x_len: usize, y_len: usize },
    #[error(transparent)]
    Load(#[from] LoaderError),
    #[error("Polars error: {0}")]
    Polars(#[from] PolarsError),
}

impl AnalysisError {
    pub(crate) fn data_quality(column: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::DataQuality {
            column: column.into(),
            reason: reason.into(),
        }
    }

    pub(crate) fn insufficient(reason: impl Into<String>) -> Self {
        Self::InsufficientData {
            reason: reason.into(),
        }
    }
}
