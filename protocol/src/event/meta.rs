//! Metadata and battle-flow event parsers

use anyhow::Result;

use super::LogEvent;
use crate::ParseError;
use crate::ident::SideId;

/// Parse |player|SIDE|NAME|AVATAR|RATING
pub fn parse_player(parts: &[&str]) -> Result<LogEvent> {
    let side = parts
        .get(2)
        .and_then(|s| SideId::parse(s.trim()))
        .ok_or_else(|| ParseError::MissingField("player side".to_string()))?;

    let name = parts
        .get(3)
        .map(|s| s.trim().to_string())
        .ok_or_else(|| ParseError::MissingField("player name".to_string()))?;

    // Starting rating rides in the fifth field when the battle is rated
    let rating = parts.get(5).and_then(|s| s.trim().parse().ok());

    Ok(LogEvent::Player { side, name, rating })
}

/// Parse |poke|SIDE|DETAILS|ITEM
pub fn parse_poke(parts: &[&str]) -> Result<LogEvent> {
    let side = parts
        .get(2)
        .and_then(|s| SideId::parse(s.trim()))
        .ok_or_else(|| ParseError::MissingField("poke side".to_string()))?;

    let details = parts
        .get(3)
        .map(|s| crate::ident::PokemonDetails::parse(s))
        .ok_or_else(|| ParseError::MissingField("poke details".to_string()))?;

    Ok(LogEvent::Poke { side, details })
}

/// Parse |turn|NUMBER
pub fn parse_turn(parts: &[&str]) -> Result<LogEvent> {
    let turn = parts
        .get(2)
        .and_then(|s| s.trim().parse().ok())
        .ok_or_else(|| ParseError::MissingField("turn number".to_string()))?;

    Ok(LogEvent::Turn(turn))
}

/// Parse |win|NAME
pub fn parse_win(parts: &[&str]) -> Result<LogEvent> {
    let name = parts
        .get(2)
        .map(|s| s.trim().to_string())
        .ok_or_else(|| ParseError::MissingField("winner name".to_string()))?;

    Ok(LogEvent::Win { name })
}

/// Parse |raw|HTML, looking for the fixed rating-change pattern
/// "NAME's rating: 1305 &rarr; <strong>1333</strong>".
///
/// Anything else in a raw line is noise and falls through to Other.
pub fn parse_raw(parts: &[&str], line: &str) -> LogEvent {
    let text = parts.get(2).map(|s| s.trim()).unwrap_or("");

    match parse_rating_text(text) {
        Some((name, before, after)) => LogEvent::RatingUpdate {
            name,
            before,
            after,
        },
        None => LogEvent::Other(line.to_string()),
    }
}

fn parse_rating_text(text: &str) -> Option<(String, i32, i32)> {
    let (name, rest) = text.split_once("'s rating: ")?;
    let (before, rest) = rest.split_once(" &rarr; ")?;
    let after = rest.strip_prefix("<strong>")?;
    let (after, _) = after.split_once("</strong>")?;

    Some((name.to_string(), before.parse().ok()?, after.parse().ok()?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rating_text() {
        let (name, before, after) =
            parse_rating_text("Alice's rating: 1305 &rarr; <strong>1333</strong><br />").unwrap();
        assert_eq!(name, "Alice");
        assert_eq!(before, 1305);
        assert_eq!(after, 1333);
    }

    #[test]
    fn test_parse_rating_text_rejects_other_html() {
        assert!(parse_rating_text("Ladder updated").is_none());
        assert!(parse_rating_text("Bob's rating: abc &rarr; <strong>5</strong>").is_none());
    }
}
