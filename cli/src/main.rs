use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use pivot_replay::{BatchOptions, run_batch};

/// Parse saved Pokemon Showdown replays into a turn-indexed dataset
#[derive(Debug, Parser)]
#[command(name = "pivot", version)]
struct Args {
    /// Format id to process (e.g. gen9vgc2024regh)
    #[arg(long, required_unless_present = "single")]
    format: Option<String>,

    /// Root data directory containing <format>/replays/
    #[arg(long, default_value = "data")]
    data_dir: PathBuf,

    /// Skip replays rated below this (unrated replays never pass)
    #[arg(long)]
    min_rating: Option<i32>,

    /// Output path, defaults to <data-dir>/<format>/parsed.jsonl
    #[arg(long)]
    output: Option<PathBuf>,

    /// Parse one replay file and pretty-print the record instead
    #[arg(long)]
    single: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    if let Some(path) = &args.single {
        let record = pivot_replay::parse_file(path)?;
        println!("{}", serde_json::to_string_pretty(&record)?);
        return Ok(());
    }

    let format = args
        .format
        .ok_or_else(|| anyhow::anyhow!("--format is required for batch runs"))?;
    let summary = run_batch(&BatchOptions {
        data_dir: args.data_dir,
        format,
        min_rating: args.min_rating,
        output: args.output,
    })?;

    println!(
        "parsed {} replays ({} below rating filter, {} errors)",
        summary.parsed, summary.skipped_rating, summary.skipped_error
    );

    Ok(())
}
