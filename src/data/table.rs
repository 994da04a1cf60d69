use super::connectors::{DataValidator, TableColumn, FEATURE_COUNT};
use crate::error::{PrepError, Result};
use crate::ml::signals::types::{signal_mark, SignalDirection};
use chrono::{DateTime, Utc};
use polars::prelude::*;
use serde::{Deserialize, Serialize};

/// One candle of the signal table
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Row {
    pub open_time: Option<DateTime<Utc>>,
    pub open: f64,
    pub close: f64,
    pub high: f64,
    pub low: f64,
    pub volume: f64,
    pub adx: f64,
    pub sig_entry: Option<SignalDirection>,
    pub sig_exit: Option<SignalDirection>,
}

impl Row {
    pub fn feature(&self, column: TableColumn) -> f64 {
        match column {
            TableColumn::Open => self.open,
            TableColumn::Close => self.close,
            TableColumn::High => self.high,
            TableColumn::Low => self.low,
            TableColumn::Volume => self.volume,
            TableColumn::Adx => self.adx,
            TableColumn::SigEntry => signal_mark(self.sig_entry),
            TableColumn::SigExit => signal_mark(self.sig_exit),
        }
    }

    /// Row values in feature-column order
    pub fn features(&self) -> [f64; FEATURE_COUNT] {
        TableColumn::all().map(|column| self.feature(column))
    }
}

/// Immutable, time-ordered signal table. Index order is time order.
#[derive(Debug, Clone, Default)]
pub struct RowTable {
    rows: Vec<Row>,
}

impl RowTable {
    pub fn from_rows(rows: Vec<Row>) -> Self {
        Self { rows }
    }

    /// Validate a DataFrame against the signal-table schema and materialize it.
    ///
    /// Missing or non-numeric columns, nulls and out-of-domain signal marks are
    /// fatal. OHLC inconsistencies are only logged.
    pub fn from_dataframe(df: &DataFrame) -> Result<Self> {
        let column_map = DataValidator::validate_schema(df)?;
        DataValidator::validate_signals(df, &column_map)?;

        let anomalies = DataValidator::check_ohlc_relationships(df, &column_map)?;
        if anomalies > 0 {
            log::warn!("{} rows have inconsistent OHLC values", anomalies);
        }

        let mut columns = Vec::with_capacity(FEATURE_COUNT);
        for column in TableColumn::all() {
            let name = &column_map[&column];
            columns.push(float_values(df, name)?);
        }

        let times = match DataValidator::find_time_column(df) {
            Some(name) => Some(time_values(df, name)?),
            None => None,
        };

        let rows = (0..df.height())
            .map(|i| Row {
                open_time: times.as_ref().and_then(|t| t[i]),
                open: columns[0][i],
                close: columns[1][i],
                high: columns[2][i],
                low: columns[3][i],
                volume: columns[4][i],
                adx: columns[5][i],
                sig_entry: SignalDirection::from_mark(columns[6][i]),
                sig_exit: SignalDirection::from_mark(columns[7][i]),
            })
            .collect();

        Ok(Self { rows })
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn row(&self, idx: usize) -> Option<&Row> {
        self.rows.get(idx)
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Row at `idx`, or a validation error naming the bad index
    pub fn checked_row(&self, idx: usize) -> Result<&Row> {
        self.rows.get(idx).ok_or_else(|| {
            PrepError::Validation(format!(
                "Row index {} outside table of {} rows",
                idx,
                self.rows.len()
            ))
        })
    }

    /// First and last known row times
    pub fn time_range(&self) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
        let first = self.rows.iter().find_map(|r| r.open_time)?;
        let last = self.rows.iter().rev().find_map(|r| r.open_time)?;
        Some((first, last))
    }
}

fn float_values(df: &DataFrame, name: &str) -> Result<Vec<f64>> {
    let column = df.column(name)?.cast(&DataType::Float64)?;
    column
        .f64()?
        .into_iter()
        .enumerate()
        .map(|(i, v)| {
            v.ok_or_else(|| {
                PrepError::Validation(format!("Null value in column '{}' at row {}", name, i))
            })
        })
        .collect()
}

/// Epoch-millisecond integers are taken as is; Datetime columns are first
/// rescaled from their own time unit.
fn time_values(df: &DataFrame, name: &str) -> Result<Vec<Option<DateTime<Utc>>>> {
    let source = df.column(name)?;
    let column = match source.dtype() {
        DataType::Datetime(_, tz) => source
            .cast(&DataType::Datetime(TimeUnit::Milliseconds, tz.clone()))?
            .cast(&DataType::Int64)?,
        _ => source.cast(&DataType::Int64)?,
    };
    let times = column
        .i64()?
        .into_iter()
        .map(|ms| ms.and_then(DateTime::<Utc>::from_timestamp_millis))
        .collect();
    Ok(times)
}
