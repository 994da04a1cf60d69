use crate::data::FEATURE_COUNT;
use crate::ml::signals::SignalDirection;
use crate::types::{Label, SkipReason};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One training example: a flattened lookback window and its label.
///
/// Immutable once assembled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Example {
    features: Vec<f64>,
    label: Label,
    entry_index: usize,
    exit_index: usize,
    direction: SignalDirection,
    return_pct: f64,
    entry_time: Option<DateTime<Utc>>,
}

impl Example {
    pub(crate) fn new(
        features: Vec<f64>,
        label: Label,
        entry_index: usize,
        exit_index: usize,
        direction: SignalDirection,
        return_pct: f64,
        entry_time: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            features,
            label,
            entry_index,
            exit_index,
            direction,
            return_pct,
            entry_time,
        }
    }

    /// Row-major flattened window, oldest row first
    pub fn features(&self) -> &[f64] {
        &self.features
    }

    pub fn label(&self) -> Label {
        self.label
    }

    pub fn entry_index(&self) -> usize {
        self.entry_index
    }

    pub fn exit_index(&self) -> usize {
        self.exit_index
    }

    pub fn direction(&self) -> SignalDirection {
        self.direction
    }

    pub fn return_pct(&self) -> f64 {
        self.return_pct
    }

    pub fn entry_time(&self) -> Option<DateTime<Utc>> {
        self.entry_time
    }

    /// Unflatten back into per-row feature slices
    pub fn window_rows(&self) -> impl Iterator<Item = &[f64]> {
        self.features.chunks_exact(FEATURE_COUNT)
    }
}

/// Per-reason counts of entries that produced no example
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkipCounters {
    pub insufficient_history: usize,
    pub missing_exit: usize,
    pub inconsistent_exit: usize,
    pub zero_entry_price: usize,
    /// `(entry_index, exit_index)` of every inconsistent exit, in entry order
    pub inconsistent_pairs: Vec<(usize, usize)>,
}

impl SkipCounters {
    pub fn record(&mut self, reason: SkipReason) {
        match reason {
            SkipReason::InsufficientHistory => self.insufficient_history += 1,
            SkipReason::MissingExit => self.missing_exit += 1,
            SkipReason::InconsistentExit { entry_index, exit_index } => {
                self.inconsistent_exit += 1;
                self.inconsistent_pairs.push((entry_index, exit_index));
            }
            SkipReason::ZeroEntryPrice => self.zero_entry_price += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.insufficient_history + self.missing_exit + self.inconsistent_exit + self.zero_entry_price
    }
}

/// Fraction of labels equal to 1. `None` for no labels.
pub fn positive_rate<'a>(examples: impl IntoIterator<Item = &'a Example>) -> Option<f64> {
    let mut total = 0usize;
    let mut positive = 0usize;
    for example in examples {
        total += 1;
        if example.label.is_profitable() {
            positive += 1;
        }
    }

    if total == 0 {
        None
    } else {
        Some(positive as f64 / total as f64)
    }
}

/// Assembled examples in entry order, plus what was skipped on the way
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Dataset {
    examples: Vec<Example>,
    window_size: usize,
    entries_scanned: usize,
    skips: SkipCounters,
}

impl Dataset {
    pub(crate) fn new(
        examples: Vec<Example>,
        window_size: usize,
        entries_scanned: usize,
        skips: SkipCounters,
    ) -> Self {
        Self {
            examples,
            window_size,
            entries_scanned,
            skips,
        }
    }

    pub fn examples(&self) -> &[Example] {
        &self.examples
    }

    pub fn len(&self) -> usize {
        self.examples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.examples.is_empty()
    }

    pub fn window_size(&self) -> usize {
        self.window_size
    }

    /// Width of every flattened feature row
    pub fn n_features(&self) -> usize {
        self.window_size * FEATURE_COUNT
    }

    /// Entry rows seen, accepted or not
    pub fn entries_scanned(&self) -> usize {
        self.entries_scanned
    }

    pub fn skips(&self) -> &SkipCounters {
        &self.skips
    }

    pub fn labels(&self) -> Vec<u8> {
        self.examples.iter().map(|e| e.label.as_u8()).collect()
    }

    /// Share of profitable trades the raw signals produced
    pub fn positive_rate(&self) -> Option<f64> {
        positive_rate(&self.examples)
    }
}
