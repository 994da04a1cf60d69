use crate::data::{Row, RowTable, TableColumn, FEATURE_COUNT};
use crate::error::{PrepError, Result};
use crate::types::{EntryError, SkipReason};

/// Fixed-length lookback over a row table, ending at (and including) an entry row.
///
/// Borrowed view: holds the table and an index range, never a copy of the rows.
#[derive(Debug, Clone, Copy)]
pub struct Window<'a> {
    table: &'a RowTable,
    start: usize,
    end: usize,
}

impl<'a> Window<'a> {
    /// First (oldest) row index
    pub fn start(&self) -> usize {
        self.start
    }

    /// Last row index, the entry row
    pub fn end(&self) -> usize {
        self.end
    }

    pub fn len(&self) -> usize {
        self.end - self.start + 1
    }

    pub fn rows(&self) -> &'a [Row] {
        &self.table.rows()[self.start..=self.end]
    }

    /// Values of one feature column, oldest first
    pub fn column(&self, column: TableColumn) -> impl Iterator<Item = f64> + 'a {
        self.rows().iter().map(move |row| row.feature(column))
    }

    /// Row-major flattening: every feature of the oldest row, then the next row, ...
    pub fn flatten(&self) -> Vec<f64> {
        let mut values = Vec::with_capacity(self.len() * FEATURE_COUNT);
        for row in self.rows() {
            values.extend_from_slice(&row.features());
        }
        values
    }
}

/// Materializes lookback windows of a fixed size
#[derive(Debug, Clone, Copy)]
pub struct WindowExtractor {
    window_size: usize,
}

impl WindowExtractor {
    pub fn new(window_size: usize) -> Result<Self> {
        if window_size == 0 {
            return Err(PrepError::Configuration(
                "Window size must be at least 1".to_string(),
            ));
        }
        Ok(Self { window_size })
    }

    pub fn window_size(&self) -> usize {
        self.window_size
    }

    /// Flattened length of every window this extractor produces
    pub fn flattened_len(&self) -> usize {
        self.window_size * FEATURE_COUNT
    }

    /// Window of rows `[entry_index - W + 1, entry_index]`
    pub fn extract<'a>(
        &self,
        table: &'a RowTable,
        entry_index: usize,
    ) -> std::result::Result<Window<'a>, EntryError> {
        table.checked_row(entry_index)?;

        if entry_index + 1 < self.window_size {
            return Err(SkipReason::InsufficientHistory.into());
        }

        Ok(Window {
            table,
            start: entry_index + 1 - self.window_size,
            end: entry_index,
        })
    }
}
