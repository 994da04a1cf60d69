pub mod config;
pub mod exit;
pub mod profitability;

pub use config::{LabeledEntry, LabelingConfig};
pub use exit::find_exit;
pub use profitability::{classify, ProfitabilityLabeler};
