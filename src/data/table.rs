//! Table Module
//! Rectangular dataset keyed by column name, backed by a Polars DataFrame.
//!
//! A missing value is a Polars null. `NaN` in a float column is read back as
//! missing as well, so it never takes part in a mean or a correlation.

use crate::error::AnalysisError;
use polars::prelude::*;

/// Named columns sharing a single row count.
#[derive(Debug, Clone)]
pub struct Table {
    df: DataFrame,
}

impl Table {
    pub fn new(df: DataFrame) -> Self {
        Self { df }
    }

    /// Build a table from columns; fails if their lengths differ.
    pub fn from_columns(columns: Vec<Column>) -> Result<Self, AnalysisError> {
        Ok(Self::new(DataFrame::new(columns)?))
    }

    pub fn dataframe(&self) -> &DataFrame {
        &self.df
    }

    pub fn row_count(&self) -> usize {
        self.df.height()
    }

    pub fn column_names(&self) -> Vec<String> {
        self.df
            .get_column_names()
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    /// Numeric dtypes, plus all-null columns which carry no type of their own.
    pub fn is_numeric_column(column: &Column) -> bool {
        matches!(
            column.dtype(),
            DataType::Float32
                | DataType::Float64
                | DataType::Int8
                | DataType::Int16
                | DataType::Int32
                | DataType::Int64
                | DataType::UInt8
                | DataType::UInt16
                | DataType::UInt32
                | DataType::UInt64
                | DataType::Null
        )
    }

    /// Read a numeric column as `f64`, `None` marking a missing entry.
    pub fn column_values(column: &Column) -> Result<Vec<Option<f64>>, AnalysisError> {
        let as_f64 = column.cast(&DataType::Float64)?;
        let values = as_f64
            .f64()?
            .into_iter()
            .map(|v| v.filter(|x| !x.is_nan()))
            .collect();
        Ok(values)
    }

    /// Values of the named numeric column, missing entries kept as `None`.
    pub fn numeric_values(&self, name: &str) -> Result<Vec<Option<f64>>, AnalysisError> {
        let column = self
            .df
            .column(name)
            .map_err(|_| AnalysisError::data_quality(name, "column not present in dataset"))?;
        if !Self::is_numeric_column(column) {
            return Err(AnalysisError::data_quality(
                name,
                format!("column is not numeric (dtype {})", column.dtype()),
            ));
        }
        Self::column_values(column)
    }

    /// Values of the named numeric column; every entry must be present.
    pub fn complete_values(&self, name: &str) -> Result<Vec<f64>, AnalysisError> {
        self.numeric_values(name)?
            .into_iter()
            .collect::<Option<Vec<f64>>>()
            .ok_or_else(|| AnalysisError::data_quality(name, "column still has missing values"))
    }
}
