pub mod dataset;
pub mod features;
pub mod labeling;
pub mod signals;
pub mod splitting;
