//! Minor battle action parsers: hp changes, statuses, field and side effects

use anyhow::Result;

use super::LogEvent;
use crate::ident::{SideId, Stat, parse_hp_status, parse_pokemon};

/// Parse |-damage|POKEMON|HP STATUS
pub fn parse_damage(parts: &[&str]) -> Result<LogEvent> {
    let pokemon = parse_pokemon(parts, 2)?;
    let hp = parse_hp_status(parts, 3)
        .ok_or_else(|| anyhow::anyhow!("missing hp in damage event"))?;

    Ok(LogEvent::Damage { pokemon, hp })
}

/// Parse |-heal|POKEMON|HP STATUS
pub fn parse_heal(parts: &[&str]) -> Result<LogEvent> {
    let pokemon = parse_pokemon(parts, 2)?;
    let hp =
        parse_hp_status(parts, 3).ok_or_else(|| anyhow::anyhow!("missing hp in heal event"))?;

    Ok(LogEvent::Heal { pokemon, hp })
}

/// Parse |-boost|POKEMON|STAT|AMOUNT
pub fn parse_boost(parts: &[&str]) -> Result<LogEvent> {
    let (pokemon, stat, amount) = parse_stat_change(parts)?;
    Ok(LogEvent::Boost {
        pokemon,
        stat,
        amount,
    })
}

/// Parse |-unboost|POKEMON|STAT|AMOUNT
pub fn parse_unboost(parts: &[&str]) -> Result<LogEvent> {
    let (pokemon, stat, amount) = parse_stat_change(parts)?;
    Ok(LogEvent::Unboost {
        pokemon,
        stat,
        amount,
    })
}

fn parse_stat_change(
    parts: &[&str],
) -> Result<(crate::ident::PokemonRef, Stat, i8)> {
    let pokemon = parse_pokemon(parts, 2)?;
    let stat = parts
        .get(3)
        .and_then(|s| Stat::parse(s.trim()))
        .ok_or_else(|| anyhow::anyhow!("missing stat"))?;
    let amount = parts
        .get(4)
        .and_then(|s| s.trim().parse().ok())
        .ok_or_else(|| anyhow::anyhow!("missing boost amount"))?;

    Ok((pokemon, stat, amount))
}

/// Parse |-status|POKEMON|STATUS
pub fn parse_status(parts: &[&str]) -> Result<LogEvent> {
    let pokemon = parse_pokemon(parts, 2)?;
    let status = parts
        .get(3)
        .map(|s| s.trim().to_string())
        .ok_or_else(|| anyhow::anyhow!("missing status"))?;

    Ok(LogEvent::Status { pokemon, status })
}

/// Parse |-curestatus|POKEMON|STATUS
pub fn parse_curestatus(parts: &[&str]) -> Result<LogEvent> {
    let pokemon = parse_pokemon(parts, 2)?;
    Ok(LogEvent::CureStatus(pokemon))
}

/// Parse |-terastallize|POKEMON|TYPE
pub fn parse_terastallize(parts: &[&str]) -> Result<LogEvent> {
    let pokemon = parse_pokemon(parts, 2)?;
    let tera_type = parts
        .get(3)
        .map(|s| s.trim().to_string())
        .ok_or_else(|| anyhow::anyhow!("missing tera type"))?;

    Ok(LogEvent::Terastallize { pokemon, tera_type })
}

/// Parse |-weather|WEATHER with optional [upkeep] tag (carried in Tags)
pub fn parse_weather(parts: &[&str]) -> Result<LogEvent> {
    let weather = parts
        .get(2)
        .map(|s| s.trim().to_string())
        .ok_or_else(|| anyhow::anyhow!("missing weather"))?;

    Ok(LogEvent::Weather { weather })
}

/// Parse |-fieldstart|CONDITION
pub fn parse_fieldstart(parts: &[&str]) -> Result<LogEvent> {
    let effect = parts
        .get(2)
        .map(|s| s.trim().to_string())
        .ok_or_else(|| anyhow::anyhow!("missing field condition"))?;

    Ok(LogEvent::FieldStart { effect })
}

/// Parse |-fieldend|CONDITION
pub fn parse_fieldend(parts: &[&str]) -> Result<LogEvent> {
    let effect = parts
        .get(2)
        .map(|s| s.trim().to_string())
        .ok_or_else(|| anyhow::anyhow!("missing field condition"))?;

    Ok(LogEvent::FieldEnd { effect })
}

/// Parse |-sidestart|SIDE|CONDITION
pub fn parse_sidestart(parts: &[&str]) -> Result<LogEvent> {
    let (side, effect) = parse_side_effect(parts)?;
    Ok(LogEvent::SideStart { side, effect })
}

/// Parse |-sideend|SIDE|CONDITION
pub fn parse_sideend(parts: &[&str]) -> Result<LogEvent> {
    let (side, effect) = parse_side_effect(parts)?;
    Ok(LogEvent::SideEnd { side, effect })
}

fn parse_side_effect(parts: &[&str]) -> Result<(SideId, String)> {
    let side = parts
        .get(2)
        .map(|s| SideId::from_side_token(s))
        .ok_or_else(|| anyhow::anyhow!("missing side"))?;
    let effect = parts
        .get(3)
        .map(|s| s.trim().to_string())
        .ok_or_else(|| anyhow::anyhow!("missing side condition"))?;

    Ok((side, effect))
}

/// Parse |-item|POKEMON|ITEM and |-enditem|POKEMON|ITEM
///
/// Both reveal the same fact for dataset purposes: this pokemon carried
/// this item.
pub fn parse_item(parts: &[&str]) -> Result<LogEvent> {
    let pokemon = parse_pokemon(parts, 2)?;
    let item = parts
        .get(3)
        .map(|s| s.trim().to_string())
        .ok_or_else(|| anyhow::anyhow!("missing item"))?;

    Ok(LogEvent::ItemReveal { pokemon, item })
}

/// Parse |-ability|POKEMON|ABILITY
pub fn parse_ability(parts: &[&str]) -> Result<LogEvent> {
    let pokemon = parse_pokemon(parts, 2)?;
    let ability = parts
        .get(3)
        .map(|s| s.trim().to_string())
        .ok_or_else(|| anyhow::anyhow!("missing ability"))?;

    Ok(LogEvent::AbilityReveal { pokemon, ability })
}
