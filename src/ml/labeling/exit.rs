use crate::data::RowTable;
use crate::ml::signals::EntrySignal;
use crate::types::{EntryError, SkipReason};

/// Locate the row that closes the position opened by `entry`.
///
/// Scans forward from the row after the entry. The first non-zero exit mark
/// decides: same direction is the match, anything else is an
/// `InconsistentExit` (the signal source is assumed to hold at most one open
/// position). No non-zero exit before the end of data is a `MissingExit`.
pub fn find_exit(table: &RowTable, entry: &EntrySignal) -> Result<usize, EntryError> {
    table.checked_row(entry.bar_index)?;
    let start = entry.bar_index + 1;
    let rows = &table.rows()[start..];

    for (offset, row) in rows.iter().enumerate() {
        let exit_index = start + offset;
        match row.sig_exit {
            None => continue,
            Some(direction) if direction == entry.direction => return Ok(exit_index),
            Some(_) => {
                return Err(SkipReason::InconsistentExit {
                    entry_index: entry.bar_index,
                    exit_index,
                }
                .into())
            }
        }
    }

    Err(SkipReason::MissingExit.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Row;
    use crate::ml::signals::{SignalDirection, SignalExtractor};

    fn table(entries: &[(usize, SignalDirection)], exits: &[(usize, SignalDirection)], n: usize) -> RowTable {
        let mut rows: Vec<Row> = (0..n)
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
        for &(i, d) in entries {
            rows[i].sig_entry = Some(d);
        }
        for &(i, d) in exits {
            rows[i].sig_exit = Some(d);
        }
        RowTable::from_rows(rows)
    }

    fn entry(table: &RowTable, idx: usize) -> EntrySignal {
        SignalExtractor::new(table).entry_at(idx).unwrap()
    }

    #[test]
    fn test_skips_zero_exits_until_match() {
        let t = table(&[(5, SignalDirection::Long)], &[(9, SignalDirection::Long)], 10);
        assert_eq!(find_exit(&t, &entry(&t, 5)).unwrap(), 9);
    }

    #[test]
    fn test_first_nonzero_exit_with_wrong_sign() {
        let t = table(
            &[(5, SignalDirection::Long)],
            &[(6, SignalDirection::Short), (8, SignalDirection::Long)],
            10,
        );
        assert_eq!(
            find_exit(&t, &entry(&t, 5)).unwrap_err().skip_reason(),
            Some(SkipReason::InconsistentExit { entry_index: 5, exit_index: 6 })
        );
    }

    #[test]
    fn test_exit_on_entry_row_is_ignored() {
        let t = table(
            &[(2, SignalDirection::Short)],
            &[(2, SignalDirection::Long), (4, SignalDirection::Short)],
            6,
        );
        assert_eq!(find_exit(&t, &entry(&t, 2)).unwrap(), 4);
    }

    #[test]
    fn test_missing_exit() {
        let t = table(&[(3, SignalDirection::Short)], &[(1, SignalDirection::Short)], 6);
        assert_eq!(
            find_exit(&t, &entry(&t, 3)).unwrap_err().skip_reason(),
            Some(SkipReason::MissingExit)
        );
    }

    #[test]
    fn test_entry_on_last_row() {
        let t = table(&[(4, SignalDirection::Long)], &[], 5);
        assert_eq!(
            find_exit(&t, &entry(&t, 4)).unwrap_err().skip_reason(),
            Some(SkipReason::MissingExit)
        );
    }

    #[test]
    fn test_entry_from_another_table_is_rejected() {
        let long = table(&[(7, SignalDirection::Long)], &[(8, SignalDirection::Long)], 9);
        let short = table(&[], &[], 3);
        let foreign = entry(&long, 7);

        assert!(matches!(find_exit(&short, &foreign), Err(EntryError::Invalid(_))));
    }
}
