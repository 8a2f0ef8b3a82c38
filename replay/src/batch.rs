//! Batch mode: parse a whole format directory into a JSONL dataset

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use rayon::prelude::*;

use crate::parse::parse_replay;
use crate::source::ReplayFile;
use crate::ReplayError;

/// What to parse and where to put it
#[derive(Debug, Clone)]
pub struct BatchOptions {
    pub data_dir: PathBuf,
    pub format: String,
    /// Drop replays rated below this; unrated replays never pass
    pub min_rating: Option<i32>,
    /// Defaults to `<data_dir>/<format>/parsed.jsonl`
    pub output: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub parsed: usize,
    pub skipped_rating: usize,
    pub skipped_error: usize,
}

enum Outcome {
    Parsed(String),
    SkippedRating,
    SkippedError,
}

/// Parse every replay under `<data_dir>/<format>/replays/` and write
/// one JSON line per battle.
///
/// Files are parsed in parallel; the output is written sequentially in
/// filename order, so repeated runs over the same directory produce
/// identical bytes. A bad file is counted and skipped, never fatal.
pub fn run_batch(options: &BatchOptions) -> Result<BatchSummary> {
    let format_dir = options.data_dir.join(&options.format);
    let replays_dir = format_dir.join("replays");

    if !replays_dir.is_dir() {
        return Err(ReplayError::MissingReplayDir { path: replays_dir }.into());
    }

    let files = replay_files(&replays_dir)?;
    tracing::info!(count = files.len(), dir = %replays_dir.display(), "parsing replays");

    let outcomes: Vec<Outcome> = files
        .par_iter()
        .map(|path| parse_one(path, options.min_rating))
        .collect();

    let output_path = options
        .output
        .clone()
        .unwrap_or_else(|| format_dir.join("parsed.jsonl"));

    let mut summary = BatchSummary::default();
    let file = File::create(&output_path)
        .with_context(|| format!("failed to create {}", output_path.display()))?;
    let mut writer = BufWriter::new(file);

    for outcome in outcomes {
        match outcome {
            Outcome::Parsed(line) => {
                writeln!(writer, "{line}")
                    .with_context(|| format!("failed to write {}", output_path.display()))?;
                summary.parsed += 1;
            }
            Outcome::SkippedRating => summary.skipped_rating += 1,
            Outcome::SkippedError => summary.skipped_error += 1,
        }
    }
    writer.flush()?;

    tracing::info!(
        parsed = summary.parsed,
        skipped_rating = summary.skipped_rating,
        skipped_error = summary.skipped_error,
        output = %output_path.display(),
        "batch complete"
    );

    Ok(summary)
}

fn parse_one(path: &Path, min_rating: Option<i32>) -> Outcome {
    let replay = match ReplayFile::load(path) {
        Ok(replay) => replay,
        Err(err) => {
            tracing::warn!(%err, "skipping unreadable replay");
            return Outcome::SkippedError;
        }
    };

    if let Some(min) = min_rating {
        match replay.rating {
            Some(rating) if rating >= min => {}
            _ => return Outcome::SkippedRating,
        }
    }

    let record = match parse_replay(&replay) {
        Ok(record) => record,
        Err(err) => {
            tracing::warn!(%err, "skipping unparseable replay");
            return Outcome::SkippedError;
        }
    };

    match serde_json::to_string(&record) {
        Ok(line) => Outcome::Parsed(line),
        Err(err) => {
            tracing::warn!(%err, replay = %record.replay_id, "skipping unserializable record");
            Outcome::SkippedError
        }
    }
}

/// All .json files in the directory, in filename order
fn replay_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files: Vec<PathBuf> = fs::read_dir(dir)
        .with_context(|| format!("failed to list {}", dir.display()))?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "json"))
        .collect();

    files.sort();
    Ok(files)
}
