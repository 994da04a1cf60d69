use crate::error::PrepError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Binary training target for a proposed trade
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Label {
    Unprofitable = 0, // Move too small or against the position
    Profitable = 1,   // Moved at least the threshold in the trade's favour
}

impl Label {
    pub fn as_u8(self) -> u8 {
        self as u8
    }

    pub fn is_profitable(self) -> bool {
        self == Label::Profitable
    }
}

/// Why an entry candidate produced no example.
///
/// These are recoverable outcomes: the assembler counts them and moves on.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SkipReason {
    #[error("not enough lookback rows before entry")]
    InsufficientHistory,

    #[error("no exit signal before end of data")]
    MissingExit,

    #[error("exit at {exit_index} does not match the direction of entry at {entry_index}")]
    InconsistentExit { entry_index: usize, exit_index: usize },

    #[error("entry price is zero")]
    ZeroEntryPrice,
}

impl SkipReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InsufficientHistory => "insufficient_history",
            Self::MissingExit => "missing_exit",
            Self::InconsistentExit { .. } => "inconsistent_exit",
            Self::ZeroEntryPrice => "zero_entry_price",
        }
    }
}

/// Failure of one pipeline stage for one entry: either a counted skip, or
/// invalid input that must reach the caller.
#[derive(Error, Debug)]
pub enum EntryError {
    #[error(transparent)]
    Skip(#[from] SkipReason),

    #[error(transparent)]
    Invalid(#[from] PrepError),
}

impl EntryError {
    pub fn skip_reason(&self) -> Option<SkipReason> {
        match self {
            Self::Skip(reason) => Some(*reason),
            Self::Invalid(_) => None,
        }
    }
}
