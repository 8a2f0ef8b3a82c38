//! The on-disk replay format

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::ReplayError;

/// One saved replay, as downloaded from the replay site's JSON API.
/// Fields beyond these exist in the files but carry nothing the
/// dataset uses.
#[derive(Debug, Clone, Deserialize)]
pub struct ReplayFile {
    pub id: String,
    pub formatid: String,

    /// Ladder rating the site attached to the game, when rated
    #[serde(default)]
    pub rating: Option<i32>,

    /// The raw battle log, one `|`-delimited message per line
    pub log: String,
}

impl ReplayFile {
    pub fn load(path: &Path) -> Result<Self, ReplayError> {
        let text = fs::read_to_string(path).map_err(|source| ReplayError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&text).map_err(|source| ReplayError::Decode {
            path: path.to_path_buf(),
            source,
        })
    }
}
