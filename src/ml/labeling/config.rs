use crate::types::Label;
use crate::ml::signals::SignalDirection;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LabelingConfig {
    pub profitability_threshold: f64, // e.g., 0.01 = price must move 1% in the trade's favour
}

impl LabelingConfig {
    pub fn new(profitability_threshold: f64) -> Self {
        Self { profitability_threshold }
    }
}

/// Outcome of a single entry that made it through exit matching and labeling
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LabeledEntry {
    pub entry_index: usize,
    pub exit_index: usize,
    pub direction: SignalDirection,
    pub entry_price: f64,
    pub exit_price: f64,
    pub return_pct: f64,
    pub label: Label,
}
