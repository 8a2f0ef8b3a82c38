//! Major battle action parsers: switches, moves, faints and the like

use anyhow::Result;

use super::LogEvent;
use crate::ident::{Slot, parse_details, parse_hp_status, parse_pokemon};

/// Parse |switch|POKEMON|DETAILS|HP STATUS
pub fn parse_switch(parts: &[&str]) -> Result<LogEvent> {
    let pokemon = parse_pokemon(parts, 2)?;
    let details = parse_details(parts, 3);
    let hp = parse_hp_status(parts, 4);

    Ok(LogEvent::Switch {
        pokemon,
        details,
        hp,
    })
}

/// Parse |drag|POKEMON|DETAILS|HP STATUS (forced switch)
pub fn parse_drag(parts: &[&str]) -> Result<LogEvent> {
    let pokemon = parse_pokemon(parts, 2)?;
    let details = parse_details(parts, 3);
    let hp = parse_hp_status(parts, 4);

    Ok(LogEvent::Drag {
        pokemon,
        details,
        hp,
    })
}

/// Parse |move|POKEMON|MOVE|TARGET
pub fn parse_move(parts: &[&str]) -> Result<LogEvent> {
    let pokemon = parse_pokemon(parts, 2)?;
    let move_name = parts
        .get(3)
        .map(|s| s.trim().to_string())
        .ok_or_else(|| anyhow::anyhow!("missing move name"))?;

    // The target field is only a slot reference when it carries a
    // "SLOT: NICK" form; spread markers and empty fields resolve to none.
    let target = parts
        .get(4)
        .filter(|s| s.contains(':'))
        .and_then(|s| s.split_once(':'))
        .and_then(|(slot, _)| Slot::parse(slot.trim()));

    Ok(LogEvent::Move {
        pokemon,
        move_name,
        target,
    })
}

/// Parse |cant|POKEMON|REASON
pub fn parse_cant(parts: &[&str]) -> Result<LogEvent> {
    let pokemon = parse_pokemon(parts, 2)?;
    let reason = parts
        .get(3)
        .map(|s| s.trim().to_string())
        .ok_or_else(|| anyhow::anyhow!("missing cant reason"))?;

    Ok(LogEvent::Cant { pokemon, reason })
}

/// Parse |faint|POKEMON
pub fn parse_faint(parts: &[&str]) -> Result<LogEvent> {
    let pokemon = parse_pokemon(parts, 2)?;
    Ok(LogEvent::Faint(pokemon))
}

/// Parse |swap|POKEMON|POSITION (Ally Switch style repositioning)
pub fn parse_swap(parts: &[&str]) -> Result<LogEvent> {
    let pokemon = parse_pokemon(parts, 2)?;
    Ok(LogEvent::Swap(pokemon))
}

/// Parse |detailschange|POKEMON|DETAILS (persistent form change)
pub fn parse_detailschange(parts: &[&str]) -> Result<LogEvent> {
    let pokemon = parse_pokemon(parts, 2)?;
    let details = parse_details(parts, 3);

    Ok(LogEvent::DetailsChange { pokemon, details })
}
