//! The assembled per-replay output record

use std::collections::BTreeMap;

use serde::Serialize;

use pivot_battle::{PerSide, PlayerMeta, PreviewPokemon, RevealedInfo, TurnRecord};
use pivot_protocol::SideId;

/// Everything the dataset keeps about one battle: identity, per-side
/// player metadata (a side can be missing in truncated logs), team
/// information at increasing levels of disclosure (preview, brought,
/// revealed) and the turn-by-turn records.
#[derive(Debug, Serialize)]
pub struct ParsedReplay {
    pub replay_id: String,
    pub format: String,

    pub players: PerSide<Option<PlayerMeta>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub winner: Option<SideId>,

    pub preview: PerSide<Vec<PreviewPokemon>>,
    pub brought: PerSide<Vec<String>>,
    pub revealed: PerSide<BTreeMap<String, RevealedInfo>>,

    pub turn_count: usize,
    pub turns: Vec<TurnRecord>,
}
