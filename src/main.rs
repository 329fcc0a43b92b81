//! flowscope entrypoint: load one binetflow capture, run the full analysis
//! pipeline, and print the report as JSON for downstream display.

use flowscope::{AnalysisReport, AnalyzerConfig, DatasetCache, StructuredLogger};
use std::path::PathBuf;
use tracing::info;

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let config_path = std::env::var("FLOWSCOPE_CONFIG_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("config.json"));
    let config = AnalyzerConfig::load(&config_path);

    StructuredLogger::init(config.log.json, &config.log.level);

    let Some(input) = std::env::args().nth(1) else {
        eprintln!("usage: flowscope <capture.binetflow>");
        std::process::exit(2);
    };
    let input = PathBuf::from(input);

    info!(path = %input.display(), "loading binetflow capture");
    let mut cache = DatasetCache::new();
    let dataset = cache.load(&input)?;
    info!(
        flows = dataset.len(),
        botnet = dataset.botnet_count(),
        "dataset loaded and classified"
    );

    let report = AnalysisReport::build(&dataset, &config.aggregation);
    if let Some(ratio) = report.summary.botnet_ratio {
        info!(botnet_pct = ratio * 100.0, "botnet share of traffic");
    }

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
