use serde::{Deserialize, Serialize};

/// Proportions for the chronological train/validation/test split.
/// The test share is whatever remains.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SplitConfig {
    pub train_pct: f64,      // e.g., 0.70 = first 70% of examples
    pub validation_pct: f64, // e.g., 0.15 = next 15%
}

impl SplitConfig {
    pub fn test_pct(&self) -> f64 {
        1.0 - self.train_pct - self.validation_pct
    }

    /// `(train_end, val_end)` for a dataset of `n` examples, truncating
    pub fn boundaries(&self, n: usize) -> (usize, usize) {
        let train_end = ((n as f64 * self.train_pct) as usize).min(n);
        let val_end = ((n as f64 * (self.train_pct + self.validation_pct)) as usize).clamp(train_end, n);
        (train_end, val_end)
    }
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            train_pct: 0.70,
            validation_pct: 0.15,
        }
    }
}

/// Which contiguous slice of the dataset a partition is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PartitionKind {
    Train,
    Validation,
    Test,
}

impl PartitionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Train => "train",
            Self::Validation => "validation",
            Self::Test => "test",
        }
    }
}
