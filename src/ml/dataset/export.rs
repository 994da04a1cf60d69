use super::types::{Dataset, SkipCounters};
use crate::config::PipelineConfig;
use crate::error::{PrepError, Result};
use crate::ml::splitting::{DatasetSplit, Partition};
use chrono::{DateTime, Utc};
use polars::prelude::*;
use serde::Serialize;
use std::fs::File;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize)]
pub struct PartitionSummary {
    pub name: &'static str,
    pub offset: usize,
    pub len: usize,
    pub positive_rate: Option<f64>,
    pub first_entry: Option<DateTime<Utc>>,
    pub last_entry: Option<DateTime<Utc>>,
}

impl PartitionSummary {
    fn new(partition: &Partition<'_>) -> Self {
        let range = partition.time_range();
        Self {
            name: partition.kind().as_str(),
            offset: partition.offset(),
            len: partition.len(),
            positive_rate: partition.positive_rate(),
            first_entry: range.map(|(first, _)| first),
            last_entry: range.map(|(_, last)| last),
        }
    }
}

/// Machine-readable report of one dataset build
#[derive(Debug, Clone, Serialize)]
pub struct DatasetSummary {
    pub config: PipelineConfig,
    pub entries_scanned: usize,
    pub examples: usize,
    pub n_features: usize,
    pub positive_rate: Option<f64>,
    pub skips: SkipCounters,
    pub partitions: Vec<PartitionSummary>,
}

impl DatasetSummary {
    pub fn new(config: &PipelineConfig, dataset: &Dataset, split: &DatasetSplit<'_>) -> Self {
        Self {
            config: config.clone(),
            entries_scanned: dataset.entries_scanned(),
            examples: dataset.len(),
            n_features: dataset.n_features(),
            positive_rate: dataset.positive_rate(),
            skips: dataset.skips().clone(),
            partitions: split.partitions().iter().map(PartitionSummary::new).collect(),
        }
    }
}

pub struct DatasetExporter;

impl DatasetExporter {
    /// Write `train.csv`, `validation.csv`, `test.csv` and `summary.json` into `dir`.
    /// Returns the written paths.
    pub fn write_csv<P: AsRef<Path>>(dir: P, split: &DatasetSplit<'_>, summary: &DatasetSummary) -> Result<Vec<PathBuf>> {
        let dir = dir.as_ref();
        std::fs::create_dir_all(dir)?;

        let mut written = Vec::with_capacity(4);
        for partition in split.partitions() {
            let path = dir.join(format!("{}.csv", partition.kind().as_str()));
            let mut df = partition.to_dataframe()?;
            let mut file = File::create(&path)?;
            CsvWriter::new(&mut file)
                .include_header(true)
                .finish(&mut df)
                .map_err(|e| PrepError::Export(format!("Failed to write {}: {}", path.display(), e)))?;
            log::info!("Wrote {} rows to {}", df.height(), path.display());
            written.push(path);
        }

        let summary_path = dir.join("summary.json");
        let file = File::create(&summary_path)?;
        serde_json::to_writer_pretty(file, summary)?;
        written.push(summary_path);

        Ok(written)
    }
}
