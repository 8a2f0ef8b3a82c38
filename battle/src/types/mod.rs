mod active;
mod conditions;
mod field;
mod reveal;
mod side;
mod stats;

pub use active::ActiveState;
pub use conditions::{Status, Terrain, Weather};
pub use field::FieldState;
pub use reveal::{RevealTable, RevealedInfo};
pub use side::{PerSide, PlayerMeta, PreviewPokemon};
pub use stats::BoostStages;
