//! Single-replay parsing: log lines in, one dataset record out

use std::path::Path;

use pivot_battle::BattleTracker;
use pivot_protocol::parse_log_line;

use crate::record::ParsedReplay;
use crate::source::ReplayFile;
use crate::ReplayError;

/// Parse one replay's log into a dataset record.
///
/// Malformed lines are dropped individually; the whole replay only
/// fails when the log never introduced a player at all, which happens
/// with truncated or corrupted downloads. A log naming only one side
/// still yields a partial record.
pub fn parse_replay(file: &ReplayFile) -> Result<ParsedReplay, ReplayError> {
    let mut tracker = BattleTracker::new();

    for line in file.log.lines() {
        match parse_log_line(line) {
            Ok(parsed) => tracker.apply(&parsed),
            Err(err) => {
                tracing::debug!(replay = %file.id, %err, line, "dropping malformed line");
            }
        }
    }
    tracker.finish();

    if !tracker.has_players() {
        return Err(ReplayError::MissingPlayers {
            id: file.id.clone(),
        });
    }

    let turns = tracker.recorder.into_records();
    Ok(ParsedReplay {
        replay_id: file.id.clone(),
        format: file.formatid.clone(),
        players: tracker.players,
        winner: tracker.winner,
        preview: tracker.preview,
        brought: tracker.brought,
        revealed: tracker.reveal.pruned(),
        turn_count: turns.len(),
        turns,
    })
}

/// Load and parse a single replay file
pub fn parse_file(path: &Path) -> Result<ParsedReplay, ReplayError> {
    let file = ReplayFile::load(path)?;
    parse_replay(&file)
}
