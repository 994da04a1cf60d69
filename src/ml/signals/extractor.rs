use super::types::*;
use crate::data::RowTable;

/// Scans a row table for trade-entry rows.
///
/// Entries come out in ascending row order. Window availability is not
/// checked here.
#[derive(Debug, Clone, Copy)]
pub struct SignalExtractor<'a> {
    table: &'a RowTable,
}

impl<'a> SignalExtractor<'a> {
    pub fn new(table: &'a RowTable) -> Self {
        Self { table }
    }

    /// Lazily yield every entry signal. Each call starts a fresh scan.
    pub fn entries(&self) -> impl Iterator<Item = EntrySignal> + 'a {
        self.table
            .rows()
            .iter()
            .enumerate()
            .filter_map(|(bar_index, row)| {
                row.sig_entry.map(|direction| EntrySignal {
                    bar_index,
                    direction,
                    timestamp: row.open_time,
                })
            })
    }

    /// Entry signal at a given row, if that row opens a position
    pub fn entry_at(&self, bar_index: usize) -> Option<EntrySignal> {
        let row = self.table.row(bar_index)?;
        row.sig_entry.map(|direction| EntrySignal {
            bar_index,
            direction,
            timestamp: row.open_time,
        })
    }
}
