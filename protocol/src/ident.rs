//! Shared field types for battle log events

use serde::{Serialize, Serializer};

use crate::ParseError;

/// Side of the battle (p1 or p2)
///
/// Replay logs in this corpus are always two-player; multi battles
/// never appear in the scraped formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SideId {
    P1,
    P2,
}

impl SideId {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "p1" => Some(SideId::P1),
            "p2" => Some(SideId::P2),
            _ => None,
        }
    }

    /// Resolve a side from a loose side token like "p1" or "p1: Alice".
    ///
    /// Substring match, mirroring how side conditions name their side in
    /// the log. Anything without "p1" in it is treated as p2.
    pub fn from_side_token(s: &str) -> Self {
        if s.contains("p1") { SideId::P1 } else { SideId::P2 }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SideId::P1 => "p1",
            SideId::P2 => "p2",
        }
    }

    pub fn opponent(&self) -> Self {
        match self {
            SideId::P1 => SideId::P2,
            SideId::P2 => SideId::P1,
        }
    }
}

impl std::fmt::Display for SideId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for SideId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// An active battle position: side plus position letter (e.g. "p1a")
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Slot {
    pub side: SideId,
    /// Position letter: 'a' or 'b' (doubles)
    pub pos: char,
}

impl Slot {
    pub fn new(side: SideId, pos: char) -> Self {
        Self { side, pos }
    }

    /// Parse a slot string like "p1a" or "p2b"
    pub fn parse(s: &str) -> Option<Self> {
        let side = SideId::parse(s.get(..2)?)?;
        let pos = s.chars().nth(2)?;
        if !pos.is_ascii_lowercase() {
            return None;
        }
        Some(Slot { side, pos })
    }
}

impl std::fmt::Display for Slot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.side.as_str(), self.pos)
    }
}

impl Serialize for Slot {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Pokemon identifier in the form "SLOT: NICKNAME" (e.g. "p1a: Sparky")
#[derive(Debug, Clone, PartialEq)]
pub struct PokemonRef {
    pub slot: Slot,
    /// Nickname as printed in the log (often just the species)
    pub nickname: String,
}

impl PokemonRef {
    /// Parse a pokemon ID string like "p1a: Sparky"
    pub fn parse(s: &str) -> Option<Self> {
        let (slot_part, name) = s.split_once(": ")?;
        let slot = Slot::parse(slot_part.trim())?;

        Some(PokemonRef {
            slot,
            nickname: name.trim().to_string(),
        })
    }
}

/// Pokemon details string (species, level, gender)
///
/// Shiny and "tera:" markers are recognized and discarded; they carry no
/// information the dataset uses.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PokemonDetails {
    pub species: String,
    pub level: Option<u8>,
    pub gender: Option<char>,
}

impl PokemonDetails {
    /// Parse a details string like "Lunala, L50, F" or "Pikachu, L50, M, shiny"
    pub fn parse(s: &str) -> Self {
        let mut details = PokemonDetails::default();
        let mut parts = s.split(',').map(str::trim);

        if let Some(species) = parts.next() {
            details.species = species.to_string();
        }

        for part in parts {
            if let Some(level_str) = part.strip_prefix('L') {
                if let Ok(level) = level_str.parse() {
                    details.level = Some(level);
                }
            } else if part == "M" {
                details.gender = Some('M');
            } else if part == "F" {
                details.gender = Some('F');
            }
        }

        details
    }
}

/// HP and status condition (e.g. "100/100", "50/100 par", "0 fnt")
///
/// HP is always on the replay's percentage scale, so a missing max is
/// normalized to 100.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HpStatus {
    pub current: u32,
    pub max: u32,
    /// Status code carried in the same field (par, brn, slp, psn, tox, frz)
    pub status: Option<String>,
}

impl HpStatus {
    /// Parse an HP status string like "100/100", "50/100 par", or "0 fnt"
    pub fn parse(s: &str) -> Option<Self> {
        let mut tokens = s.split_whitespace();
        let hp_part = tokens.next()?;
        let suffix = tokens.next();

        if suffix == Some("fnt") || hp_part == "fnt" {
            return Some(HpStatus {
                current: 0,
                max: 100,
                status: None,
            });
        }

        let (current, max) = if let Some((cur, max)) = hp_part.split_once('/') {
            (cur.parse().ok()?, max.parse().ok()?)
        } else {
            (hp_part.parse().ok()?, 100)
        };

        Some(HpStatus {
            current,
            max,
            status: suffix.map(|s| s.to_string()),
        })
    }
}

/// Stat abbreviation used by boost events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stat {
    Atk,
    Def,
    Spa,
    Spd,
    Spe,
    Accuracy,
    Evasion,
}

impl Stat {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "atk" => Some(Stat::Atk),
            "def" => Some(Stat::Def),
            "spa" => Some(Stat::Spa),
            "spd" => Some(Stat::Spd),
            "spe" => Some(Stat::Spe),
            "accuracy" => Some(Stat::Accuracy),
            "evasion" => Some(Stat::Evasion),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Stat::Atk => "atk",
            Stat::Def => "def",
            Stat::Spa => "spa",
            Stat::Spd => "spd",
            Stat::Spe => "spe",
            Stat::Accuracy => "accuracy",
            Stat::Evasion => "evasion",
        }
    }
}

/// Helper to parse a PokemonRef from line fields
pub(crate) fn parse_pokemon(parts: &[&str], index: usize) -> Result<PokemonRef, anyhow::Error> {
    parts
        .get(index)
        .and_then(|s| PokemonRef::parse(s))
        .ok_or_else(|| ParseError::MissingField("pokemon".to_string()).into())
}

/// Helper to parse PokemonDetails from line fields
pub(crate) fn parse_details(parts: &[&str], index: usize) -> PokemonDetails {
    parts
        .get(index)
        .map(|s| PokemonDetails::parse(s))
        .unwrap_or_default()
}

/// Helper to parse HpStatus from line fields
pub(crate) fn parse_hp_status(parts: &[&str], index: usize) -> Option<HpStatus> {
    parts.get(index).and_then(|s| HpStatus::parse(s))
}
