use thiserror::Error;

#[derive(Error, Debug)]
pub enum PrepError {
    #[error("Data loading error: {0}")]
    DataLoading(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Export error: {0}")]
    Export(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    #[error("Serde error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("Config source error: {0}")]
    ConfigSource(#[from] ::config::ConfigError),
}

pub type Result<T> = std::result::Result<T, PrepError>;
