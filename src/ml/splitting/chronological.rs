use super::base::DataSplitter;
use super::partition::{DatasetSplit, Partition};
use super::types::{PartitionKind, SplitConfig};
use crate::ml::dataset::Dataset;

/// Splits by position only. No shuffling, so every training example
/// precedes every validation example, which precedes every test example.
pub struct ChronologicalSplitter {
    config: SplitConfig,
}

impl ChronologicalSplitter {
    pub fn new(config: SplitConfig) -> Self {
        Self { config }
    }
}

impl Default for ChronologicalSplitter {
    fn default() -> Self {
        Self::new(SplitConfig::default())
    }
}

impl DataSplitter for ChronologicalSplitter {
    fn split<'a>(&self, dataset: &'a Dataset) -> DatasetSplit<'a> {
        let examples = dataset.examples();
        let (train_end, val_end) = self.config.boundaries(examples.len());
        let window_size = dataset.window_size();

        let split = DatasetSplit {
            train: Partition::new(PartitionKind::Train, 0, &examples[..train_end], window_size),
            validation: Partition::new(
                PartitionKind::Validation,
                train_end,
                &examples[train_end..val_end],
                window_size,
            ),
            test: Partition::new(PartitionKind::Test, val_end, &examples[val_end..], window_size),
        };

        log::info!(
            "Split {} examples into train={} validation={} test={}",
            examples.len(),
            split.train.len(),
            split.validation.len(),
            split.test.len()
        );

        split
    }

    fn config(&self) -> &SplitConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ml::dataset::{Example, SkipCounters};
    use crate::ml::signals::SignalDirection;
    use crate::types::Label;

    fn dataset(n: usize) -> Dataset {
        let examples = (0..n)
            .map(|i| {
                let label = if i % 3 == 0 { Label::Profitable } else { Label::Unprofitable };
                Example::new(vec![i as f64; 8], label, i * 2 + 1, i * 2 + 2, SignalDirection::Long, 0.0, None)
            })
            .collect();
        Dataset::new(examples, 1, n, SkipCounters::default())
    }

    #[test]
    fn test_seventy_fifteen_fifteen() {
        let dataset = dataset(20);
        let split = ChronologicalSplitter::default().split(&dataset);

        assert_eq!(split.train.len(), 14);
        assert_eq!(split.validation.len(), 3);
        assert_eq!(split.test.len(), 3);
        assert_eq!(split.total_len(), 20);
        assert_eq!(split.validation.offset(), 14);
        assert_eq!(split.test.offset(), 17);
    }

    #[test]
    fn test_order_preserved_across_partitions() {
        let dataset = dataset(33);
        let split = ChronologicalSplitter::default().split(&dataset);

        let entries: Vec<usize> = split
            .partitions()
            .iter()
            .flat_map(|p| p.examples().iter().map(Example::entry_index))
            .collect();
        let expected: Vec<usize> = dataset.examples().iter().map(Example::entry_index).collect();
        assert_eq!(entries, expected);
    }

    #[test]
    fn test_empty_dataset() {
        let dataset = dataset(0);
        let split = ChronologicalSplitter::default().split(&dataset);

        assert!(split.train.is_empty());
        assert!(split.validation.is_empty());
        assert!(split.test.is_empty());
        assert_eq!(split.train.positive_rate(), None);
    }

    #[test]
    fn test_partition_views() {
        let dataset = dataset(10);
        let split = ChronologicalSplitter::default().split(&dataset);

        assert_eq!(split.train.labels(), vec![1, 0, 0, 1, 0, 0, 1]);
        assert_eq!(split.test.feature_matrix(), vec![8.0; 8].into_iter().chain(vec![9.0; 8]).collect::<Vec<_>>());
        assert_eq!(split.train.n_cols(), 8);

        let df = split.validation.to_dataframe().unwrap();
        assert_eq!(df.height(), 1);
        assert_eq!(df.width(), 9);
    }
}
