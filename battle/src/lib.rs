//! Battle state reconstruction for Pokemon Showdown replay logs.
//!
//! This crate rebuilds the mutable state of one completed battle from
//! the event stream `pivot-protocol` tokenizes, and packages it into
//! turn-indexed records for dataset building.
//!
//! ```text
//! pivot-protocol (line tokenizer + event vocabulary)
//!        │
//!        ▼
//! pivot-battle (state tracking + turn recording) ← THIS CRATE
//!        │
//!        └─> pivot-replay (per-file assembly + batch mode)
//! ```
//!
//! # Main Types
//!
//! ## Domain Types
//! - [`Status`] - Non-volatile status conditions (Burn, Paralysis, etc.)
//! - [`Weather`], [`Terrain`] - Field conditions
//! - [`BoostStages`] - Accumulated stat stage changes
//! - [`ActiveState`] - One active slot's pokemon state
//! - [`FieldState`] - Global field plus per-side screens
//! - [`RevealTable`] - Moves/items/abilities/tera observed per pokemon
//!
//! ## State Tracking
//! - [`BattleTracker`] - Main entry point: feed it parsed lines, then
//!   take the recorded turns
//! - [`TurnRecord`], [`TurnAction`] - The per-turn output shape
//!
//! # Example Usage
//!
//! ```ignore
//! use pivot_battle::BattleTracker;
//! use pivot_protocol::parse_log_line;
//!
//! let mut tracker = BattleTracker::new();
//! for line in log.lines() {
//!     if let Ok(parsed) = parse_log_line(line) {
//!         tracker.apply(&parsed);
//!     }
//! }
//! tracker.finish();
//! let turns = tracker.recorder.records();
//! ```

pub mod tracking;
pub mod types;

pub use tracking::{ActionKind, BattleTracker, TurnAction, TurnRecord, TurnRecorder};
pub use types::{
    ActiveState, BoostStages, FieldState, PerSide, PlayerMeta, PreviewPokemon, RevealTable,
    RevealedInfo, Status, Terrain, Weather,
};
