use super::types::PartitionKind;
use crate::data::TableColumn;
use crate::error::Result;
use crate::ml::dataset::{positive_rate, Example};
use chrono::{DateTime, Utc};
use polars::prelude::*;

/// Contiguous, order-preserving slice of a dataset
#[derive(Debug, Clone, Copy)]
pub struct Partition<'a> {
    kind: PartitionKind,
    offset: usize,
    examples: &'a [Example],
    window_size: usize,
}

impl<'a> Partition<'a> {
    pub(crate) fn new(
        kind: PartitionKind,
        offset: usize,
        examples: &'a [Example],
        window_size: usize,
    ) -> Self {
        Self {
            kind,
            offset,
            examples,
            window_size,
        }
    }

    pub fn kind(&self) -> PartitionKind {
        self.kind
    }

    /// Position of the first example within the full dataset
    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn examples(&self) -> &'a [Example] {
        self.examples
    }

    pub fn len(&self) -> usize {
        self.examples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.examples.is_empty()
    }

    /// Flattened feature rows, one per example
    pub fn features(&self) -> impl Iterator<Item = &'a [f64]> {
        self.examples.iter().map(Example::features)
    }

    pub fn labels(&self) -> Vec<u8> {
        self.examples.iter().map(|e| e.label().as_u8()).collect()
    }

    /// Row-major feature matrix with `n_cols()` columns
    pub fn feature_matrix(&self) -> Vec<f64> {
        let mut matrix = Vec::with_capacity(self.len() * self.n_cols());
        for row in self.features() {
            matrix.extend_from_slice(row);
        }
        matrix
    }

    pub fn n_cols(&self) -> usize {
        self.window_size * TableColumn::all().len()
    }

    pub fn positive_rate(&self) -> Option<f64> {
        positive_rate(self.examples)
    }

    /// Entry times of the first and last example, when the table carried times
    pub fn time_range(&self) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
        let first = self.examples.first()?.entry_time()?;
        let last = self.examples.last()?.entry_time()?;
        Some((first, last))
    }

    /// Column names of the flattened window: `{feature}_lag{k}`, oldest row
    /// (largest lag) first
    pub fn column_names(&self) -> Vec<String> {
        feature_column_names(self.window_size)
    }

    /// Features and `label` as a DataFrame, one row per example
    pub fn to_dataframe(&self) -> Result<DataFrame> {
        let names = self.column_names();
        let mut columns: Vec<Column> = Vec::with_capacity(names.len() + 1);

        for (col_idx, name) in names.iter().enumerate() {
            let values: Vec<f64> = self.features().map(|row| row[col_idx]).collect();
            columns.push(Column::new(name.as_str().into(), values));
        }
        columns.push(Column::new("label".into(), self.labels()));

        Ok(DataFrame::new(columns)?)
    }
}

pub fn feature_column_names(window_size: usize) -> Vec<String> {
    let mut names = Vec::with_capacity(window_size * TableColumn::all().len());
    for lag in (0..window_size).rev() {
        for column in TableColumn::all() {
            names.push(format!("{}_lag{}", column.as_str(), lag));
        }
    }
    names
}

/// Train, validation and test partitions of one dataset
#[derive(Debug, Clone, Copy)]
pub struct DatasetSplit<'a> {
    pub train: Partition<'a>,
    pub validation: Partition<'a>,
    pub test: Partition<'a>,
}

impl<'a> DatasetSplit<'a> {
    pub fn partitions(&self) -> [Partition<'a>; 3] {
        [self.train, self.validation, self.test]
    }

    pub fn total_len(&self) -> usize {
        self.train.len() + self.validation.len() + self.test.len()
    }
}
