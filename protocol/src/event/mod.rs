mod major;
mod meta;
mod minor;
mod tests;

use anyhow::Result;

use crate::ident::{HpStatus, PokemonDetails, PokemonRef, SideId, Slot, Stat};

/// One recognized battle log event.
///
/// The vocabulary is closed: every keyword the parser acts on has a
/// variant, and everything else lands in [`LogEvent::Other`]. Unknown
/// keywords are ignored by design, since the log format grows new
/// messages over time.
#[derive(Debug, Clone, PartialEq)]
pub enum LogEvent {
    // === Metadata ===
    Player {
        side: SideId,
        name: String,
        rating: Option<i32>,
    },
    Poke {
        side: SideId,
        details: PokemonDetails,
    },
    Turn(u32),
    Win {
        name: String,
    },
    /// Rating change announced in a trailing raw HTML line
    RatingUpdate {
        name: String,
        before: i32,
        after: i32,
    },

    // === Major actions ===
    Switch {
        pokemon: PokemonRef,
        details: PokemonDetails,
        hp: Option<HpStatus>,
    },
    Drag {
        pokemon: PokemonRef,
        details: PokemonDetails,
        hp: Option<HpStatus>,
    },
    Move {
        pokemon: PokemonRef,
        move_name: String,
        target: Option<Slot>,
    },
    Cant {
        pokemon: PokemonRef,
        reason: String,
    },
    Faint(PokemonRef),
    Swap(PokemonRef),
    DetailsChange {
        pokemon: PokemonRef,
        details: PokemonDetails,
    },

    // === Minor actions ===
    Damage {
        pokemon: PokemonRef,
        hp: HpStatus,
    },
    Heal {
        pokemon: PokemonRef,
        hp: HpStatus,
    },
    Boost {
        pokemon: PokemonRef,
        stat: Stat,
        amount: i8,
    },
    Unboost {
        pokemon: PokemonRef,
        stat: Stat,
        amount: i8,
    },
    Status {
        pokemon: PokemonRef,
        status: String,
    },
    CureStatus(PokemonRef),
    Terastallize {
        pokemon: PokemonRef,
        tera_type: String,
    },
    Weather {
        weather: String,
    },
    FieldStart {
        effect: String,
    },
    FieldEnd {
        effect: String,
    },
    SideStart {
        side: SideId,
        effect: String,
    },
    SideEnd {
        side: SideId,
        effect: String,
    },
    ItemReveal {
        pokemon: PokemonRef,
        item: String,
    },
    AbilityReveal {
        pokemon: PokemonRef,
        ability: String,
    },

    /// Unrecognized keyword or non-event line; carried for debugging only
    Other(String),
}

/// Bracketed qualifiers scanned from every field of a line.
///
/// These ride along on many different events ("[from] item: Leftovers",
/// "[of] p2a: Incineroar", "[upkeep]") and are meaningful independently
/// of which keyword the line carries.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Tags {
    pub upkeep: bool,
    pub from_ability: Option<String>,
    pub from_item: Option<String>,
    pub of: Option<PokemonRef>,
}

impl Tags {
    fn parse(parts: &[&str]) -> Self {
        let mut tags = Tags::default();

        for part in parts.iter().skip(2) {
            if *part == "[upkeep]" {
                tags.upkeep = true;
            } else if let Some(ability) = part.strip_prefix("[from] ability: ") {
                tags.from_ability = Some(ability.trim().to_string());
            } else if let Some(item) = part.strip_prefix("[from] item: ") {
                tags.from_item = Some(item.trim().to_string());
            } else if let Some(of) = part.strip_prefix("[of] ") {
                tags.of = PokemonRef::parse(of.trim());
            }
        }

        tags
    }
}

/// A tokenized log line: the event plus its side-channel qualifiers.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedLine {
    pub event: LogEvent,
    pub tags: Tags,
    /// Generic "SLOT: NICK" subject from the first data field, when one
    /// is present. Kept even for unrecognized keywords so tag-based
    /// reveals can still name their pokemon.
    pub subject: Option<PokemonRef>,
}

/// Tokenize a single log line into an event.
///
/// Lines that do not start with the field delimiter, and keywords the
/// vocabulary does not cover, come back as [`LogEvent::Other`]. A line
/// with a recognized keyword but malformed fields is an error; the
/// caller drops that line and continues with the rest of the log.
pub fn parse_log_line(line: &str) -> Result<ParsedLine> {
    let line = line.trim_end_matches(['\r']);

    if !line.starts_with('|') {
        return Ok(ParsedLine {
            event: LogEvent::Other(line.to_string()),
            tags: Tags::default(),
            subject: None,
        });
    }

    let parts: Vec<&str> = line.split('|').collect();

    // parts[0] is the empty string before the leading delimiter
    if parts.len() < 2 {
        return Ok(ParsedLine {
            event: LogEvent::Other(line.to_string()),
            tags: Tags::default(),
            subject: None,
        });
    }

    let event = match parts[1] {
        "player" => meta::parse_player(&parts)?,
        "poke" => meta::parse_poke(&parts)?,
        "turn" => meta::parse_turn(&parts)?,
        "win" => meta::parse_win(&parts)?,
        "raw" => meta::parse_raw(&parts, line),

        "switch" => major::parse_switch(&parts)?,
        "drag" => major::parse_drag(&parts)?,
        "move" => major::parse_move(&parts)?,
        "cant" => major::parse_cant(&parts)?,
        "faint" => major::parse_faint(&parts)?,
        "swap" => major::parse_swap(&parts)?,
        "detailschange" => major::parse_detailschange(&parts)?,

        "-damage" => minor::parse_damage(&parts)?,
        "-heal" => minor::parse_heal(&parts)?,
        "-boost" => minor::parse_boost(&parts)?,
        "-unboost" => minor::parse_unboost(&parts)?,
        "-status" => minor::parse_status(&parts)?,
        "-curestatus" => minor::parse_curestatus(&parts)?,
        "-terastallize" => minor::parse_terastallize(&parts)?,
        "-weather" => minor::parse_weather(&parts)?,
        "-fieldstart" => minor::parse_fieldstart(&parts)?,
        "-fieldend" => minor::parse_fieldend(&parts)?,
        "-sidestart" => minor::parse_sidestart(&parts)?,
        "-sideend" => minor::parse_sideend(&parts)?,
        "-item" | "-enditem" => minor::parse_item(&parts)?,
        "-ability" => minor::parse_ability(&parts)?,

        _ => LogEvent::Other(line.to_string()),
    };

    let tags = Tags::parse(&parts);
    let subject = parts.get(2).and_then(|s| PokemonRef::parse(s));

    Ok(ParsedLine {
        event,
        tags,
        subject,
    })
}
