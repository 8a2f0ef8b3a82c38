//! Turns saved Pokemon Showdown replay files into a turn-indexed
//! dataset.
//!
//! Each replay arrives as one JSON file holding the raw battle log;
//! this crate runs the log through `pivot-protocol` and `pivot-battle`
//! and assembles a [`ParsedReplay`] record per battle. Batch mode
//! parses a whole format directory in parallel and writes one JSON
//! line per replay.

mod batch;
mod parse;
mod record;
mod source;

pub use batch::{BatchOptions, BatchSummary, run_batch};
pub use parse::{parse_file, parse_replay};
pub use record::ParsedReplay;
pub use source::ReplayFile;

use std::path::PathBuf;

/// Whole-file and pre-flight failures. Line-level parse failures never
/// surface here; they are dropped inside [`parse_replay`].
#[derive(Debug, thiserror::Error)]
pub enum ReplayError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to decode {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("replay {id} has no player events")]
    MissingPlayers { id: String },

    #[error("replay directory not found: {path}")]
    MissingReplayDir { path: PathBuf },
}
