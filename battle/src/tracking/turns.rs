//! Turn boundary handling and the per-turn record shape

use std::collections::BTreeMap;

use pivot_protocol::Slot;

use crate::types::{ActiveState, FieldState};

/// What a slot did during a turn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ActionKind {
    Move,
    Switch,
    Cant,
    None,
}

/// One action taken by one slot during a turn
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TurnAction {
    pub slot: Slot,

    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub kind: ActionKind,

    /// Move name, incoming species, or the reason the slot was unable
    /// to act
    pub detail: String,

    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub target: Option<Slot>,

    /// Tera type if the slot terastallized on this action
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub tera: Option<String>,
}

/// One completed turn: the state snapshot taken as the turn began,
/// plus everything that happened during it
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TurnRecord {
    pub turn: u32,
    pub active: BTreeMap<Slot, ActiveState>,
    pub field: FieldState,
    pub actions: Vec<TurnAction>,

    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Vec::is_empty"))]
    pub faints: Vec<Slot>,
}

/// Accumulates actions and faints between turn markers and emits a
/// [`TurnRecord`] when each turn closes.
///
/// The snapshot for turn N is taken when the `|turn|N` marker arrives,
/// so it reflects the state players saw when choosing their actions.
/// The record is emitted when the next marker (or the end of the log)
/// shows the turn is over.
#[derive(Debug, Default)]
pub struct TurnRecorder {
    current_turn: u32,
    pending: Option<(BTreeMap<Slot, ActiveState>, FieldState)>,
    actions: Vec<TurnAction>,
    faints: Vec<Slot>,
    tera_this_turn: BTreeMap<Slot, String>,
    records: Vec<TurnRecord>,
}

impl TurnRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// True between the first turn marker and the end of the battle.
    /// Lead switch-ins before turn 1 are not actions.
    pub fn in_turn(&self) -> bool {
        self.current_turn > 0
    }

    pub fn current_turn(&self) -> u32 {
        self.current_turn
    }

    /// Close the previous turn and snapshot state for the new one
    pub fn boundary(
        &mut self,
        turn: u32,
        active: &BTreeMap<Slot, ActiveState>,
        field: &FieldState,
    ) {
        self.flush();
        self.current_turn = turn;
        self.pending = Some((active.clone(), field.clone()));
        self.tera_this_turn.clear();
    }

    /// Close the final turn at the end of the log
    pub fn finish(&mut self) {
        self.flush();
    }

    fn flush(&mut self) {
        if self.current_turn == 0 {
            return;
        }
        let Some((active, field)) = self.pending.take() else {
            return;
        };
        self.records.push(TurnRecord {
            turn: self.current_turn,
            active,
            field,
            actions: std::mem::take(&mut self.actions),
            faints: std::mem::take(&mut self.faints),
        });
    }

    pub fn push_action(&mut self, action: TurnAction) {
        self.actions.push(action);
    }

    pub fn push_faint(&mut self, slot: Slot) {
        self.faints.push(slot);
    }

    /// Note a terastallization so the slot's next move carries it
    pub fn record_tera(&mut self, slot: Slot, tera_type: &str) {
        self.tera_this_turn.insert(slot, tera_type.to_string());
    }

    /// Take the pending tera for a slot, if it terastallized this turn
    pub fn take_tera(&mut self, slot: Slot) -> Option<String> {
        self.tera_this_turn.remove(&slot)
    }

    pub fn records(&self) -> &[TurnRecord] {
        &self.records
    }

    pub fn into_records(self) -> Vec<TurnRecord> {
        self.records
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slot(s: &str) -> Slot {
        Slot::parse(s).unwrap()
    }

    #[test]
    fn test_turn_emitted_on_next_boundary() {
        let mut recorder = TurnRecorder::new();
        let active = BTreeMap::new();
        let field = FieldState::new();

        recorder.boundary(1, &active, &field);
        recorder.push_action(TurnAction {
            slot: slot("p1a"),
            kind: ActionKind::Move,
            detail: "Protect".into(),
            target: None,
            tera: None,
        });
        assert!(recorder.records().is_empty());

        recorder.boundary(2, &active, &field);
        assert_eq!(recorder.records().len(), 1);
        let record = &recorder.records()[0];
        assert_eq!(record.turn, 1);
        assert_eq!(record.actions.len(), 1);
    }

    #[test]
    fn test_finish_emits_last_turn_once() {
        let mut recorder = TurnRecorder::new();
        let active = BTreeMap::new();
        let field = FieldState::new();

        recorder.boundary(1, &active, &field);
        recorder.finish();
        recorder.finish();
        assert_eq!(recorder.records().len(), 1);
    }

    #[test]
    fn test_nothing_recorded_before_first_turn() {
        let mut recorder = TurnRecorder::new();
        assert!(!recorder.in_turn());
        recorder.finish();
        assert!(recorder.records().is_empty());
    }

    #[test]
    fn test_tera_consumed_once() {
        let mut recorder = TurnRecorder::new();
        recorder.record_tera(slot("p2a"), "Flying");
        assert_eq!(recorder.take_tera(slot("p2a")).as_deref(), Some("Flying"));
        assert_eq!(recorder.take_tera(slot("p2a")), None);
    }
}
