pub mod base;
pub mod chronological;
pub mod partition;
pub mod types;

pub use base::DataSplitter;
pub use chronological::ChronologicalSplitter;
pub use partition::{feature_column_names, DatasetSplit, Partition};
pub use types::{PartitionKind, SplitConfig};
