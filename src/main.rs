use anyhow::{bail, Context};
use std::path::PathBuf;
use tradeprep::ml::dataset::{DatasetAssembler, DatasetExporter, DatasetSummary};
use tradeprep::ml::splitting::{ChronologicalSplitter, DataSplitter};
use tradeprep::{ConfigManager, CsvConnector};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.len() < 2 || args.len() > 3 {
        bail!("usage: tradeprep <config.toml> <signals.csv> [output_dir]");
    }
    let config_path = PathBuf::from(&args[0]);
    let input_path = PathBuf::from(&args[1]);
    let output_dir = args.get(2).map(PathBuf::from);

    let config = ConfigManager::load_layered(&config_path, "TRADEPREP")
        .with_context(|| format!("loading config from {}", config_path.display()))?;
    let table = CsvConnector::load_table(&input_path)
        .with_context(|| format!("loading signal table from {}", input_path.display()))?;

    if let Some((first, last)) = table.time_range() {
        log::info!("Signal table spans {} .. {}", first, last);
    }

    let dataset = DatasetAssembler::new(&config)?.assemble(&table)?;
    let split = ChronologicalSplitter::new(config.split).split(&dataset);
    let summary = DatasetSummary::new(&config, &dataset, &split);

    match summary.positive_rate {
        Some(rate) => log::info!("Signal base rate: {:.2}% profitable", rate * 100.0),
        None => log::warn!("No examples assembled"),
    }

    if let Some(dir) = output_dir {
        let written = DatasetExporter::write_csv(&dir, &split, &summary)
            .with_context(|| format!("exporting dataset to {}", dir.display()))?;
        log::info!("Wrote {} files to {}", written.len(), dir.display());
    } else {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    }

    Ok(())
}
