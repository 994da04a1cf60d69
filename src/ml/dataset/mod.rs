pub mod assembler;
pub mod export;
pub mod types;

pub use assembler::DatasetAssembler;
pub use export::{DatasetExporter, DatasetSummary, PartitionSummary};
pub use types::{positive_rate, Dataset, Example, SkipCounters};
