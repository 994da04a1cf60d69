use crate::error::{PrepError, Result};
use polars::prelude::*;
use super::types::{TableColumn, TIME_COLUMN_ALIASES};
use std::collections::HashMap;

pub struct DataValidator;

impl DataValidator {
    /// Validate that the DataFrame carries every signal-table column as a
    /// null-free numeric column. Returns the actual column name for each.
    pub fn validate_schema(df: &DataFrame) -> Result<HashMap<TableColumn, String>> {
        let mut column_map = HashMap::new();

        for required in TableColumn::all() {
            match Self::find_column(df, &required) {
                Some(col_name) => {
                    column_map.insert(required, col_name.to_string());
                }
                None => {
                    return Err(PrepError::DataLoading(format!(
                        "Missing required column: {} (tried aliases: {:?})",
                        required.as_str(),
                        required.aliases()
                    )));
                }
            }
        }

        for (req_col, actual_name) in &column_map {
            let series = df.column(actual_name)?;
            if !Self::is_numeric(series.dtype()) {
                return Err(PrepError::DataLoading(format!(
                    "Column '{}' ({}) must be numeric, found {:?}",
                    actual_name,
                    req_col.as_str(),
                    series.dtype()
                )));
            }
            if series.null_count() > 0 {
                return Err(PrepError::Validation(format!(
                    "Column '{}' contains {} null values",
                    actual_name,
                    series.null_count()
                )));
            }
        }

        Ok(column_map)
    }

    /// Signal columns may only hold -1, 0 or 1
    pub fn validate_signals(
        df: &DataFrame,
        column_map: &HashMap<TableColumn, String>,
    ) -> Result<()> {
        for column in [TableColumn::SigEntry, TableColumn::SigExit] {
            let name = Self::mapped(column_map, column)?;
            let values = df.column(name)?.cast(&DataType::Float64)?;
            for (i, value) in values.f64()?.into_iter().enumerate() {
                if let Some(v) = value {
                    if v != -1.0 && v != 0.0 && v != 1.0 {
                        return Err(PrepError::Validation(format!(
                            "Invalid {} value {} at row {}: expected -1, 0 or 1",
                            column.as_str(),
                            v,
                            i
                        )));
                    }
                }
            }
        }
        Ok(())
    }

    /// Count rows whose OHLC values contradict each other
    /// (high < low, high below open/close, low above open/close).
    pub fn check_ohlc_relationships(
        df: &DataFrame,
        column_map: &HashMap<TableColumn, String>,
    ) -> Result<usize> {
        let open = df.column(Self::mapped(column_map, TableColumn::Open)?)?.cast(&DataType::Float64)?;
        let close = df.column(Self::mapped(column_map, TableColumn::Close)?)?.cast(&DataType::Float64)?;
        let high = df.column(Self::mapped(column_map, TableColumn::High)?)?.cast(&DataType::Float64)?;
        let low = df.column(Self::mapped(column_map, TableColumn::Low)?)?.cast(&DataType::Float64)?;

        let open = open.f64()?;
        let close = close.f64()?;
        let high = high.f64()?;
        let low = low.f64()?;

        let mut anomalies = 0;
        for i in 0..df.height() {
            if let (Some(h), Some(l), Some(o), Some(c)) =
                (high.get(i), low.get(i), open.get(i), close.get(i))
            {
                if h < l || h < o || h < c || l > o || l > c {
                    anomalies += 1;
                }
            }
        }

        Ok(anomalies)
    }

    /// Name of the optional time column, if the frame has one
    pub fn find_time_column(df: &DataFrame) -> Option<&'static str> {
        let columns = df.get_column_names();
        TIME_COLUMN_ALIASES
            .iter()
            .find(|&&alias| columns.iter().any(|col| col.as_str() == alias))
            .copied()
    }

    /// Find column by checking aliases
    fn find_column(df: &DataFrame, required: &TableColumn) -> Option<&'static str> {
        let columns = df.get_column_names();
        required
            .aliases()
            .into_iter()
            .find(|alias| columns.iter().any(|col| col.as_str() == *alias))
    }

    fn mapped(column_map: &HashMap<TableColumn, String>, column: TableColumn) -> Result<&str> {
        column_map
            .get(&column)
            .map(String::as_str)
            .ok_or_else(|| PrepError::Validation(format!("Column {} not mapped", column.as_str())))
    }

    fn is_numeric(dtype: &DataType) -> bool {
        matches!(
            dtype,
            DataType::Float64
                | DataType::Float32
                | DataType::Int64
                | DataType::Int32
                | DataType::Int16
                | DataType::Int8
                | DataType::UInt64
                | DataType::UInt32
                | DataType::UInt16
                | DataType::UInt8
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::df;

    fn frame(sig_entry: &[i64], high: &[f64]) -> DataFrame {
        let n = sig_entry.len();
        df! {
            "open" => vec![100.0; n],
            "close" => vec![100.0; n],
            "high" => high.to_vec(),
            "low" => vec![99.0; n],
            "volume" => vec![10.0; n],
            "adx" => vec![25.0; n],
            "sig_entry" => sig_entry.to_vec(),
            "sig_exit" => vec![0i64; n],
        }
        .unwrap()
    }

    #[test]
    fn test_schema_accepts_valid_frame() {
        let df = frame(&[0, 1, 0], &[101.0, 101.0, 101.0]);
        let map = DataValidator::validate_schema(&df).unwrap();
        assert_eq!(map.len(), 8);
        assert_eq!(map[&TableColumn::Adx], "adx");
    }

    #[test]
    fn test_schema_resolves_aliases() {
        let df = df! {
            "Open" => &[1.0],
            "Close" => &[1.0],
            "High" => &[1.0],
            "Low" => &[1.0],
            "Vol" => &[1.0],
            "ADX" => &[1.0],
            "sig_entry" => &[0i64],
            "sig_exit" => &[0i64],
        }
        .unwrap();

        let map = DataValidator::validate_schema(&df).unwrap();
        assert_eq!(map[&TableColumn::Volume], "Vol");
        assert_eq!(map[&TableColumn::Open], "Open");
    }

    #[test]
    fn test_schema_rejects_missing_column() {
        let df = df! {
            "open" => &[1.0],
            "close" => &[1.0],
        }
        .unwrap();

        let err = DataValidator::validate_schema(&df).unwrap_err();
        assert!(matches!(err, PrepError::DataLoading(_)));
    }

    #[test]
    fn test_schema_rejects_null_values() {
        let df = df! {
            "open" => &[Some(1.0), None],
            "close" => &[1.0, 1.0],
            "high" => &[1.0, 1.0],
            "low" => &[1.0, 1.0],
            "volume" => &[1.0, 1.0],
            "adx" => &[1.0, 1.0],
            "entry_signal" => &[0i64, 0],
            "exit_signal" => &[0i64, 0],
        }
        .unwrap();

        let err = DataValidator::validate_schema(&df).unwrap_err();
        assert!(matches!(err, PrepError::Validation(_)));
    }

    #[test]
    fn test_schema_rejects_string_column() {
        let mut df = frame(&[0], &[101.0]);
        df.with_column(Column::new("adx".into(), &["strong"])).unwrap();

        assert!(DataValidator::validate_schema(&df).is_err());
    }

    #[test]
    fn test_signal_domain() {
        let df = frame(&[0, 2, 0], &[101.0, 101.0, 101.0]);
        let map = DataValidator::validate_schema(&df).unwrap();
        let err = DataValidator::validate_signals(&df, &map).unwrap_err();
        assert!(err.to_string().contains("row 1"));
    }

    #[test]
    fn test_ohlc_anomalies_are_counted() {
        let df = frame(&[0, 0, 0], &[101.0, 98.0, 101.0]);
        let map = DataValidator::validate_schema(&df).unwrap();
        assert_eq!(DataValidator::check_ohlc_relationships(&df, &map).unwrap(), 1);
    }
}
