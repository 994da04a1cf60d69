pub mod connectors;
pub mod table;

pub use connectors::{CsvConnector, DataValidator, TableColumn, FEATURE_COUNT};
pub use table::{Row, RowTable};
