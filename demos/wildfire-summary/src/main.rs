use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use firesight_charts::{ChartPipeline, PipelineConfig};
use firesight_common::{Record, RecordSet};
use indexmap::IndexMap;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Summarize a wildfire incident CSV into chart data and print it as JSON
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the incident CSV file
    csv_path: PathBuf,

    /// Optional JSON pipeline config
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Restrict the scatter plot to a single year
    #[arg(short, long)]
    year: Option<String>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => {
            let json = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config {}", path.display()))?;
            PipelineConfig::from_json_str(&json)?
        }
        None => PipelineConfig::default(),
    };

    let records = read_records(&cli.csv_path)?;
    info!(records = records.len(), "loaded incidents");

    let pipeline = ChartPipeline::new(config);
    let charts = pipeline.build_all(&records);
    let mut output = charts.to_json()?;
    if let Some(year) = &cli.year {
        output["scatter_plot"] = serde_json::json!({
            "data": pipeline.scatter_plot(&records, Some(year)),
        });
    }

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

/// Reads every row of a headed CSV file. Empty cells become missing fields.
fn read_records(path: &Path) -> anyhow::Result<RecordSet> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("Failed to open {}", path.display()))?;
    let headers = reader.headers()?.clone();

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row.context("Failed to read CSV record")?;
        let fields: IndexMap<String, Option<String>> = headers
            .iter()
            .zip(row.iter())
            .map(|(name, cell)| {
                let value = (!cell.is_empty()).then(|| cell.to_string());
                (name.to_string(), value)
            })
            .collect();
        records.push(Record::new(fields));
    }
    Ok(RecordSet::from(records))
}
