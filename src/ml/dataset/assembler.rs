use super::types::{Dataset, Example, SkipCounters};
use crate::config::{ConfigSection, PipelineConfig};
use crate::data::RowTable;
use crate::error::Result;
use crate::ml::features::WindowExtractor;
use crate::ml::labeling::ProfitabilityLabeler;
use crate::ml::signals::{EntrySignal, SignalExtractor};
use crate::types::{EntryError, SkipReason};
use rayon::prelude::*;

/// Turns a signal table into labeled examples, one per usable entry row.
///
/// Each entry runs window extraction, exit matching and labeling. Any failing
/// stage is a counted skip; only invalid input (an index outside the table)
/// is returned as an error.
pub struct DatasetAssembler {
    windows: WindowExtractor,
    labeler: ProfitabilityLabeler,
    parallel: bool,
}

impl DatasetAssembler {
    pub fn new(config: &PipelineConfig) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            windows: WindowExtractor::new(config.window_size)?,
            labeler: ProfitabilityLabeler::new(config.labeling()),
            parallel: config.parallel,
        })
    }

    pub fn assemble(&self, table: &RowTable) -> Result<Dataset> {
        let entries: Vec<EntrySignal> = SignalExtractor::new(table).entries().collect();

        // Indexed collect keeps entry order on the parallel path too
        let outcomes: Vec<std::result::Result<Example, EntryError>> = if self.parallel {
            entries
                .par_iter()
                .map(|entry| self.process_entry(table, entry))
                .collect()
        } else {
            entries
                .iter()
                .map(|entry| self.process_entry(table, entry))
                .collect()
        };

        let mut examples = Vec::with_capacity(outcomes.len());
        let mut skips = SkipCounters::default();

        for (entry, outcome) in entries.iter().zip(outcomes) {
            match outcome {
                Ok(example) => examples.push(example),
                Err(EntryError::Invalid(err)) => return Err(err),
                Err(EntryError::Skip(reason)) => {
                    match reason {
                        SkipReason::InconsistentExit { .. } => {
                            log::warn!("Skipping entry at row {}: {}", entry.bar_index, reason)
                        }
                        _ => log::debug!("Skipping entry at row {}: {}", entry.bar_index, reason),
                    }
                    skips.record(reason);
                }
            }
        }

        log::info!(
            "Assembled {} examples from {} entries over {} rows (skipped {}: insufficient_history={}, missing_exit={}, inconsistent_exit={}, zero_entry_price={})",
            examples.len(),
            entries.len(),
            table.len(),
            skips.total(),
            skips.insufficient_history,
            skips.missing_exit,
            skips.inconsistent_exit,
            skips.zero_entry_price,
        );

        Ok(Dataset::new(examples, self.windows.window_size(), entries.len(), skips))
    }

    fn process_entry(
        &self,
        table: &RowTable,
        entry: &EntrySignal,
    ) -> std::result::Result<Example, EntryError> {
        let window = self.windows.extract(table, entry.bar_index)?;
        let labeled = self.labeler.label(table, entry)?;

        Ok(Example::new(
            window.flatten(),
            labeled.label,
            labeled.entry_index,
            labeled.exit_index,
            labeled.direction,
            labeled.return_pct,
            entry.timestamp,
        ))
    }
}
