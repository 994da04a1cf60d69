use super::traits::ConfigSection;
use crate::error::PrepError;
use crate::ml::labeling::LabelingConfig;
use crate::ml::splitting::SplitConfig;
use serde::{Deserialize, Serialize};

/// Caller-supplied settings for one dataset build.
///
/// `window_size` and `profitability_threshold` have no defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineConfig {
    pub window_size: usize,
    pub profitability_threshold: f64,
    #[serde(default)]
    pub parallel: bool,
    #[serde(default)]
    pub split: SplitConfig,
}

impl PipelineConfig {
    pub fn new(window_size: usize, profitability_threshold: f64) -> Self {
        Self {
            window_size,
            profitability_threshold,
            parallel: false,
            split: SplitConfig::default(),
        }
    }

    pub fn with_split(mut self, split: SplitConfig) -> Self {
        self.split = split;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn labeling(&self) -> LabelingConfig {
        LabelingConfig::new(self.profitability_threshold)
    }
}

impl ConfigSection for PipelineConfig {
    fn section_name() -> &'static str {
        "pipeline"
    }

    fn validate(&self) -> Result<(), PrepError> {
        if self.window_size == 0 {
            return Err(PrepError::Configuration(
                "Window size must be at least 1".to_string(),
            ));
        }
        if !self.profitability_threshold.is_finite() || self.profitability_threshold < 0.0 {
            return Err(PrepError::Configuration(format!(
                "Profitability threshold must be a non-negative fraction, got {}",
                self.profitability_threshold
            )));
        }
        self.split.validate()
    }
}

impl ConfigSection for SplitConfig {
    fn section_name() -> &'static str {
        "split"
    }

    fn validate(&self) -> Result<(), PrepError> {
        if !(self.train_pct > 0.0 && self.train_pct <= 1.0) {
            return Err(PrepError::Configuration(
                "Train share must be in (0, 1]".to_string(),
            ));
        }
        if !(self.validation_pct >= 0.0) {
            return Err(PrepError::Configuration(
                "Validation share must be non-negative".to_string(),
            ));
        }
        if self.train_pct + self.validation_pct > 1.0 + f64::EPSILON {
            return Err(PrepError::Configuration(format!(
                "Train + validation shares exceed 1.0 ({} + {})",
                self.train_pct, self.validation_pct
            )));
        }
        Ok(())
    }
}
