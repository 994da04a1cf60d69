use serde::{Deserialize, Serialize};

/// Number of per-row feature values in a window.
pub const FEATURE_COUNT: usize = 8;

/// Accepted names for the optional epoch-millisecond time column
pub const TIME_COLUMN_ALIASES: [&str; 4] = ["open_time", "open_times_ms", "timestamp", "Timestamp"];

/// Required signal-table columns, in feature order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TableColumn {
    Open,
    Close,
    High,
    Low,
    Volume,
    Adx,
    SigEntry,
    SigExit,
}

impl TableColumn {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Close => "close",
            Self::High => "high",
            Self::Low => "low",
            Self::Volume => "volume",
            Self::Adx => "adx",
            Self::SigEntry => "sig_entry",
            Self::SigExit => "sig_exit",
        }
    }

    /// Columns in the order they are laid out inside a flattened window
    pub fn all() -> [Self; FEATURE_COUNT] {
        [
            Self::Open,
            Self::Close,
            Self::High,
            Self::Low,
            Self::Volume,
            Self::Adx,
            Self::SigEntry,
            Self::SigExit,
        ]
    }

    /// Common alternative column names
    pub fn aliases(&self) -> Vec<&'static str> {
        match self {
            Self::Open => vec!["open", "Open", "OPEN", "o"],
            Self::Close => vec!["close", "Close", "CLOSE", "c"],
            Self::High => vec!["high", "High", "HIGH", "h"],
            Self::Low => vec!["low", "Low", "LOW", "l"],
            Self::Volume => vec!["volume", "Volume", "VOLUME", "vol", "Vol", "v"],
            Self::Adx => vec!["adx", "ADX", "Adx"],
            Self::SigEntry => vec!["sig_entry", "SigEntry", "entry_signal"],
            Self::SigExit => vec!["sig_exit", "SigExit", "exit_signal"],
        }
    }
}
