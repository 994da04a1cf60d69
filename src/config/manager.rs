use super::{pipeline::PipelineConfig, traits::ConfigSection};
use crate::error::PrepError;
use std::path::Path;

pub struct ConfigManager;

impl ConfigManager {
    /// Parse and validate a TOML configuration
    pub fn from_toml_str(contents: &str) -> Result<PipelineConfig, PrepError> {
        let config: PipelineConfig = toml::from_str(contents)
            .map_err(|e| PrepError::Configuration(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<PipelineConfig, PrepError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| PrepError::Configuration(format!("Failed to read config: {}", e)))?;

        Self::from_toml_str(&contents)
    }

    /// Load a TOML file, then overlay `<PREFIX>_*` environment variables
    /// (nested keys separated by `__`, e.g. `TRADEPREP_SPLIT__TRAIN_PCT`).
    pub fn load_layered<P: AsRef<Path>>(path: P, env_prefix: &str) -> Result<PipelineConfig, PrepError> {
        let settings = ::config::Config::builder()
            .add_source(::config::File::from(path.as_ref()).format(::config::FileFormat::Toml))
            .add_source(
                ::config::Environment::with_prefix(env_prefix)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let config: PipelineConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    pub fn save_to_file<P: AsRef<Path>>(config: &PipelineConfig, path: P) -> Result<(), PrepError> {
        let toml_str = toml::to_string_pretty(config)
            .map_err(|e| PrepError::Configuration(format!("Failed to serialize: {}", e)))?;

        std::fs::write(path, toml_str)
            .map_err(|e| PrepError::Configuration(format!("Failed to write config: {}", e)))?;

        Ok(())
    }
}
