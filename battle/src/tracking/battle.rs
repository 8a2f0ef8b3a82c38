//! Whole-battle state

use std::collections::BTreeMap;

use pivot_protocol::{SideId, Slot};

use crate::tracking::turns::TurnRecorder;
use crate::types::{ActiveState, FieldState, PerSide, PlayerMeta, PreviewPokemon, RevealTable};

/// Reconstructed state of one battle, fed line by line.
///
/// Nicknames in the log do not always match species names, so the
/// tracker keeps two resolution maps: the species currently occupying
/// each slot, and the species each (slot, nickname) pair was last bound
/// to. Event handlers live in the `updater` module.
#[derive(Debug, Default)]
pub struct BattleTracker {
    pub players: PerSide<Option<PlayerMeta>>,
    pub preview: PerSide<Vec<PreviewPokemon>>,

    /// Species actually brought to the battle, in order of first entry
    pub brought: PerSide<Vec<String>>,

    pub active: BTreeMap<Slot, ActiveState>,
    pub field: FieldState,

    /// Species currently occupying each slot
    pub slot_species: BTreeMap<Slot, String>,

    /// Species each (slot, nickname) pair last resolved to
    pub nickname_species: BTreeMap<(Slot, String), String>,

    pub reveal: RevealTable,
    pub winner: Option<SideId>,
    pub recorder: TurnRecorder,
}

impl BattleTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve a slot reference to a species name.
    ///
    /// Prefers the slot's current occupant, then the last species this
    /// nickname was bound to in this slot, and falls back to the
    /// nickname itself for references that precede any switch-in.
    pub fn resolve_species(&self, slot: Slot, nickname: &str) -> String {
        if let Some(species) = self.slot_species.get(&slot) {
            return species.clone();
        }
        if let Some(species) = self
            .nickname_species
            .get(&(slot, nickname.to_string()))
        {
            return species.clone();
        }
        nickname.to_string()
    }

    /// Note a species entering a slot
    pub fn bind_slot(&mut self, slot: Slot, nickname: &str, species: &str) {
        self.slot_species.insert(slot, species.to_string());
        self.nickname_species
            .insert((slot, nickname.to_string()), species.to_string());

        let brought = self.brought.get_mut(slot.side);
        if !brought.iter().any(|s| s == species) {
            brought.push(species.to_string());
        }
    }

    /// True once any player line was seen. A log naming only one side
    /// is still worth a partial record; a log naming neither is not.
    pub fn has_players(&self) -> bool {
        self.players.p1.is_some() || self.players.p2.is_some()
    }

    /// Close out the final turn at the end of the log
    pub fn finish(&mut self) {
        self.recorder.finish();
    }
}
