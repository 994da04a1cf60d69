use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum SignalDirection {
    Long,
    Short,
}

impl SignalDirection {
    /// Decode a `{-1, 0, 1}` signal mark. Zero (or anything else) means no signal.
    pub fn from_mark(mark: f64) -> Option<Self> {
        if mark == 1.0 {
            Some(Self::Long)
        } else if mark == -1.0 {
            Some(Self::Short)
        } else {
            None
        }
    }

    pub fn as_f64(self) -> f64 {
        match self {
            Self::Long => 1.0,
            Self::Short => -1.0,
        }
    }
}

/// Numeric encoding of an optional signal, as it appears in feature windows.
pub fn signal_mark(signal: Option<SignalDirection>) -> f64 {
    signal.map_or(0.0, SignalDirection::as_f64)
}

/// A row at which the upstream strategy opened a position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EntrySignal {
    pub bar_index: usize,
    pub direction: SignalDirection,
    pub timestamp: Option<DateTime<Utc>>,
}
