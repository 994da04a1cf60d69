mod csv;
mod types;
mod validator;

pub use csv::CsvConnector;
pub use types::{TableColumn, FEATURE_COUNT, TIME_COLUMN_ALIASES};
pub use validator::DataValidator;
