use crate::error::PrepError;
use serde::{Deserialize, Serialize};

/// Trait for configuration sections
pub trait ConfigSection: Serialize + for<'de> Deserialize<'de> + Clone {
    fn section_name() -> &'static str;
    fn validate(&self) -> Result<(), PrepError>;
}
