use thiserror::Error;

pub mod event;
pub mod ident;

pub use event::{LogEvent, ParsedLine, Tags, parse_log_line};
pub use ident::{HpStatus, PokemonDetails, PokemonRef, SideId, Slot, Stat};

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Missing required field: {0}")]
    MissingField(String),
}
