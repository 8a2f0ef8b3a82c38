mod battle;
mod turns;
mod updater;

pub use battle::BattleTracker;
pub use turns::{ActionKind, TurnAction, TurnRecord, TurnRecorder};
