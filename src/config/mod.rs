pub mod manager;
pub mod pipeline;
pub mod traits;

pub use manager::ConfigManager;
pub use pipeline::PipelineConfig;
pub use traits::ConfigSection;
