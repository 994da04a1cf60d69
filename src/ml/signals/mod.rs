pub mod extractor;
pub mod types;

pub use extractor::SignalExtractor;
pub use types::{signal_mark, EntrySignal, SignalDirection};
