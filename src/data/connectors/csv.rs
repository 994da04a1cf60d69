use crate::data::table::RowTable;
use crate::error::{PrepError, Result};
use polars::prelude::*;
use std::path::Path;

pub struct CsvConnector;

impl CsvConnector {
    /// Load CSV file into DataFrame
    pub fn load<P: AsRef<Path>>(path: P) -> Result<DataFrame> {
        let df = CsvReadOptions::default()
            .with_has_header(true)
            .try_into_reader_with_file_path(Some(path.as_ref().to_path_buf()))?
            .finish()
            .map_err(|e| PrepError::DataLoading(format!("Failed to read CSV: {}", e)))?;

        Ok(df)
    }

    /// Load a CSV file and validate it into an immutable row table
    pub fn load_table<P: AsRef<Path>>(path: P) -> Result<RowTable> {
        let df = Self::load(&path)?;
        log::info!(
            "Loaded {} rows x {} columns from {}",
            df.height(),
            df.width(),
            path.as_ref().display()
        );
        RowTable::from_dataframe(&df)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_table_from_csv() {
        let path = std::env::temp_dir().join("tradeprep_csv_connector_test.csv");
        {
            let mut file = std::fs::File::create(&path).unwrap();
            writeln!(file, "open_times_ms,open,close,high,low,volume,adx,sig_entry,sig_exit").unwrap();
            writeln!(file, "1700000000000,100.0,101.0,102.0,99.0,10.0,30.0,1,0").unwrap();
            writeln!(file, "1700000060000,101.0,102.0,103.0,100.0,12.0,31.0,0,1").unwrap();
        }

        let table = CsvConnector::load_table(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(table.len(), 2);
        assert_eq!(table.rows()[1].close, 102.0);
        assert!(table.rows()[0].open_time.is_some());
    }

    #[test]
    fn test_missing_file() {
        assert!(CsvConnector::load("/nonexistent/tradeprep.csv").is_err());
    }
}
