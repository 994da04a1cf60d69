use super::config::{LabeledEntry, LabelingConfig};
use super::exit::find_exit;
use crate::data::RowTable;
use crate::ml::signals::{EntrySignal, SignalDirection};
use crate::types::{EntryError, Label, SkipReason};

/// Labels an entry by how far the close moved between entry and exit
pub struct ProfitabilityLabeler {
    config: LabelingConfig,
}

impl ProfitabilityLabeler {
    pub fn new(config: LabelingConfig) -> Self {
        Self { config }
    }

    /// Match the entry's exit, then label it
    pub fn label(&self, table: &RowTable, entry: &EntrySignal) -> Result<LabeledEntry, EntryError> {
        let exit_index = find_exit(table, entry)?;
        self.label_with_exit(table, entry, exit_index)
    }

    /// Label an entry whose exit row is already known
    pub fn label_with_exit(
        &self,
        table: &RowTable,
        entry: &EntrySignal,
        exit_index: usize,
    ) -> Result<LabeledEntry, EntryError> {
        let entry_price = table.checked_row(entry.bar_index)?.close;
        let exit_price = table.checked_row(exit_index)?.close;

        if entry_price == 0.0 {
            return Err(SkipReason::ZeroEntryPrice.into());
        }

        let return_pct = (exit_price - entry_price) / entry_price;

        Ok(LabeledEntry {
            entry_index: entry.bar_index,
            exit_index,
            direction: entry.direction,
            entry_price,
            exit_price,
            return_pct,
            label: classify(entry.direction, return_pct, self.config.profitability_threshold),
        })
    }
}

/// Longs need the price up by at least `threshold`, shorts need it down by at least as much
pub fn classify(direction: SignalDirection, return_pct: f64, threshold: f64) -> Label {
    let profitable = match direction {
        SignalDirection::Long => return_pct >= threshold,
        SignalDirection::Short => return_pct <= -threshold,
    };

    if profitable {
        Label::Profitable
    } else {
        Label::Unprofitable
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Row;
    use crate::ml::signals::SignalExtractor;

    fn table(direction: SignalDirection, entry_close: f64, exit_close: f64) -> RowTable {
        let mut rows: Vec<Row> = (0..10)
            .map(|_| Row {
                open_time: None,
                open: 100.0,
                close: 100.0,
                high: 100.0,
                low: 100.0,
                volume: 1.0,
                adx: 25.0,
                sig_entry: None,
                sig_exit: None,
            })
            .collect();
        rows[5].sig_entry = Some(direction);
        rows[5].close = entry_close;
        rows[9].sig_exit = Some(direction);
        rows[9].close = exit_close;
        RowTable::from_rows(rows)
    }

    fn label(table: &RowTable) -> Result<LabeledEntry, EntryError> {
        let entry = SignalExtractor::new(table).entry_at(5).unwrap();
        ProfitabilityLabeler::new(LabelingConfig::new(0.01)).label(table, &entry)
    }

    #[test]
    fn test_long_above_threshold() {
        let labeled = label(&table(SignalDirection::Long, 100.0, 102.0)).unwrap();
        assert_eq!(labeled.exit_index, 9);
        assert_eq!(labeled.label, Label::Profitable);
        assert!((labeled.return_pct - 0.02).abs() < 1e-12);
    }

    #[test]
    fn test_long_below_threshold() {
        let labeled = label(&table(SignalDirection::Long, 100.0, 100.5)).unwrap();
        assert_eq!(labeled.label, Label::Unprofitable);
    }

    #[test]
    fn test_short_needs_price_drop() {
        assert_eq!(
            label(&table(SignalDirection::Short, 100.0, 98.0)).unwrap().label,
            Label::Profitable
        );
        assert_eq!(
            label(&table(SignalDirection::Short, 100.0, 102.0)).unwrap().label,
            Label::Unprofitable
        );
    }

    #[test]
    fn test_zero_entry_price() {
        assert_eq!(
            label(&table(SignalDirection::Long, 0.0, 102.0)).unwrap_err().skip_reason(),
            Some(SkipReason::ZeroEntryPrice)
        );
    }

    #[test]
    fn test_exit_outside_table_is_an_error() {
        let table = table(SignalDirection::Long, 100.0, 102.0);
        let entry = SignalExtractor::new(&table).entry_at(5).unwrap();
        let labeler = ProfitabilityLabeler::new(LabelingConfig::new(0.01));

        assert!(matches!(
            labeler.label_with_exit(&table, &entry, 10),
            Err(EntryError::Invalid(_))
        ));
    }

    #[test]
    fn test_classify_threshold_is_inclusive() {
        assert_eq!(classify(SignalDirection::Long, 0.25, 0.25), Label::Profitable);
        assert_eq!(classify(SignalDirection::Short, -0.25, 0.25), Label::Profitable);
        assert_eq!(classify(SignalDirection::Short, -0.24, 0.25), Label::Unprofitable);
    }

    #[test]
    fn test_zero_threshold_counts_flat_long_as_profitable() {
        assert_eq!(classify(SignalDirection::Long, 0.0, 0.0), Label::Profitable);
    }
}
