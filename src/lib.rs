//! Turns a time-ordered table of candles and strategy entry/exit marks into
//! labeled training examples for a trade-quality classifier.
//!
//! Pipeline: [`SignalExtractor`] finds entry rows, [`WindowExtractor`] takes
//! the lookback window, [`find_exit`] matches the closing row,
//! [`ProfitabilityLabeler`] labels the trade, [`DatasetAssembler`] collects
//! the examples and skip counts, and [`ChronologicalSplitter`] partitions the
//! result without shuffling.

pub mod config;
pub mod data;
pub mod error;
pub mod ml;
pub mod types;

pub use config::{ConfigManager, ConfigSection, PipelineConfig};
pub use data::{CsvConnector, Row, RowTable, TableColumn};
pub use error::{PrepError, Result};
pub use ml::dataset::{Dataset, DatasetAssembler, DatasetExporter, DatasetSummary, Example, SkipCounters};
pub use ml::features::{Window, WindowExtractor};
pub use ml::labeling::{find_exit, ProfitabilityLabeler};
pub use ml::signals::{EntrySignal, SignalDirection, SignalExtractor};
pub use ml::splitting::{ChronologicalSplitter, DataSplitter, DatasetSplit, Partition, SplitConfig};
pub use types::{EntryError, Label, SkipReason};

/// Validate the config and assemble a dataset from the table
pub fn build_dataset(table: &RowTable, config: &PipelineConfig) -> Result<Dataset> {
    let assembler = DatasetAssembler::new(config)?;
    assembler.assemble(table)
}
