//! CSV Data Loader Module
//! Handles CSV file loading and numeric column declaration using Polars.

use crate::data::Table;
use polars::prelude::*;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("CSV file not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("Failed to load CSV: {0}")]
    CsvError(#[from] PolarsError),
}

/// Reads a dataset from CSV with Polars.
pub struct DataLoader;

impl DataLoader {
    /// Load a CSV file, forcing the given columns to `Float64`.
    ///
    /// Declared columns that Polars inferred as text (for example because
    /// every cell is empty) are cast non-strictly, so unparseable cells
    /// become missing values instead of failing the load.
    pub fn load_csv(path: &Path, numeric_columns: &[&str]) -> Result<Table, LoaderError> {
        let df = Self::read_frame(path)?;
        let df = Self::declare_numeric(df, numeric_columns)?;
        info!(
            path = %path.display(),
            rows = df.height(),
            columns = df.width(),
            "loaded dataset"
        );
        Ok(Table::new(df))
    }

    /// Read the raw frame without any type adjustments.
    pub fn read_frame(path: &Path) -> Result<DataFrame, LoaderError> {
        if !path.is_file() {
            return Err(LoaderError::NotFound(path.to_path_buf()));
        }

        let df = LazyCsvReader::new(path)
            .with_infer_schema_length(Some(10000))
            .with_ignore_errors(true)
            .finish()?
            .collect()?;
        Ok(df)
    }

    /// Cast each declared column present in `df` to `Float64`.
    pub fn declare_numeric(
        df: DataFrame,
        numeric_columns: &[&str],
    ) -> Result<DataFrame, LoaderError> {
        let columns = df
            .get_columns()
            .iter()
            .map(|col| {
                let declared = numeric_columns.contains(&col.name().as_str());
                if declared && col.dtype() != &DataType::Float64 {
                    debug!(column = %col.name(), dtype = %col.dtype(), "casting declared column to Float64");
                    col.cast(&DataType::Float64)
                } else {
                    Ok(col.clone())
                }
            })
            .collect::<PolarsResult<Vec<Column>>>()?;

        Ok(DataFrame::new(columns)?)
    }
}
