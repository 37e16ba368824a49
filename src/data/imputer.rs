//! Imputer Module
//! Fills missing numeric values with the mean of each column.

use crate::data::Table;
use crate::error::AnalysisError;
use polars::prelude::*;
use tracing::{debug, info};

/// Column-mean imputation over a whole table.
///
/// The input table is left untouched; callers receive a new table. Columns
/// without gaps are carried over as-is, so their dtype is preserved.
pub struct Imputer;

impl Imputer {
    /// Replace every missing entry in every numeric column with that
    /// column's mean. Non-numeric columns pass through unchanged.
    ///
    /// Fails with [`AnalysisError::DataQuality`] on the first numeric column
    /// that has no observed value, since its mean is undefined.
    pub fn impute(table: &Table) -> Result<Table, AnalysisError> {
        let df = table.dataframe();
        let mut columns: Vec<Column> = Vec::with_capacity(df.width());
        let mut filled_total = 0usize;

        for column in df.get_columns() {
            if !Table::is_numeric_column(column) {
                columns.push(column.clone());
                continue;
            }

            let values = Table::column_values(column)?;
            let mean = Self::column_mean(&values).ok_or_else(|| {
                AnalysisError::data_quality(
                    column.name().as_str(),
                    "column has no observed values, mean is undefined",
                )
            })?;

            let missing = values.iter().filter(|v| v.is_none()).count();
            if missing == 0 {
                columns.push(column.clone());
                continue;
            }

            debug!(column = %column.name(), missing, mean, "imputing column mean");
            filled_total += missing;
            columns.push(Column::new(
                column.name().clone(),
                Self::fill_column(&values, mean),
            ));
        }

        info!(
            rows = df.height(),
            columns = df.width(),
            filled = filled_total,
            "imputation complete"
        );
        Table::from_columns(columns)
    }

    /// Mean of the observed entries, `None` if there are none.
    pub fn column_mean(values: &[Option<f64>]) -> Option<f64> {
        let (sum, count) = values
            .iter()
            .flatten()
            .fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
        (count > 0).then(|| sum / count as f64)
    }

    pub fn fill_column(values: &[Option<f64>], mean: f64) -> Vec<f64> {
        values.iter().map(|v| v.unwrap_or(mean)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mean_ignores_missing_entries() {
        assert_eq!(Imputer::column_mean(&[Some(1.0), None, Some(3.0)]), Some(2.0));
        assert_eq!(Imputer::column_mean(&[None, None]), None);
        assert_eq!(Imputer::column_mean(&[]), None);
    }

    #[test]
    fn fills_with_pre_imputation_mean() {
        let table = Table::from_columns(vec![Column::new(
            "sales".into(),
            [Some(2.0), None, Some(4.0), None],
        )])
        .unwrap();

        let imputed = Imputer::impute(&table).unwrap();
        assert_eq!(
            imputed.complete_values("sales").unwrap(),
            vec![2.0, 3.0, 4.0, 3.0]
        );
    }

    #[test]
    fn input_table_is_not_mutated() {
        let table =
            Table::from_columns(vec![Column::new("sales".into(), [Some(1.0), None])]).unwrap();
        let _ = Imputer::impute(&table).unwrap();
        assert_eq!(table.numeric_values("sales").unwrap(), vec![Some(1.0), None]);
    }

    #[test]
    fn text_columns_pass_through() {
        let table = Table::from_columns(vec![
            Column::new("region".into(), [Some("east"), None]),
            Column::new("sales".into(), [Some(1.0), None]),
        ])
        .unwrap();

        let imputed = Imputer::impute(&table).unwrap();
        let region = imputed.dataframe().column("region").unwrap();
        assert_eq!(region.dtype(), &DataType::String);
        assert_eq!(region.null_count(), 1);
    }

    #[test]
    fn complete_integer_column_keeps_dtype() {
        let table = Table::from_columns(vec![Column::new("stores".into(), [1i64, 2, 3])]).unwrap();
        let imputed = Imputer::impute(&table).unwrap();
        assert_eq!(
            imputed.dataframe().column("stores").unwrap().dtype(),
            &DataType::Int64
        );
    }

    #[test]
    fn all_missing_column_is_a_data_quality_error() {
        let table = Table::from_columns(vec![
            Column::new("ok".into(), [Some(1.0), Some(2.0)]),
            Column::new("empty".into(), [None::<f64>, None]),
        ])
        .unwrap();

        match Imputer::impute(&table) {
            Err(AnalysisError::DataQuality { column, .. }) => assert_eq!(column, "empty"),
            other => panic!("expected DataQuality error, got {other:?}"),
        }
    }

    #[test]
    fn nan_is_imputed_like_null() {
        let table =
            Table::from_columns(vec![Column::new("v".into(), [1.0, f64::NAN, 3.0])]).unwrap();
        let imputed = Imputer::impute(&table).unwrap();
        assert_eq!(imputed.complete_values("v").unwrap(), vec![1.0, 2.0, 3.0]);
    }
}
