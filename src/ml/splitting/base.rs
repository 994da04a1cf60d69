use super::types::SplitConfig;
use super::partition::DatasetSplit;
use crate::ml::dataset::Dataset;

pub trait DataSplitter: Send + Sync {
    /// Partition a dataset into train/validation/test views
    fn split<'a>(&self, dataset: &'a Dataset) -> DatasetSplit<'a>;

    /// Get splitter configuration
    fn config(&self) -> &SplitConfig;
}
