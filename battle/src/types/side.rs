//! Per-player data

use pivot_protocol::{PokemonDetails, SideId};

/// A value held once per player side
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PerSide<T> {
    pub p1: T,
    pub p2: T,
}

impl<T> PerSide<T> {
    pub fn get(&self, side: SideId) -> &T {
        match side {
            SideId::P1 => &self.p1,
            SideId::P2 => &self.p2,
        }
    }

    pub fn get_mut(&mut self, side: SideId) -> &mut T {
        match side {
            SideId::P1 => &mut self.p1,
            SideId::P2 => &mut self.p2,
        }
    }
}

/// Player identity and ladder rating as reported by the log
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PlayerMeta {
    pub name: String,

    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub rating_before: Option<i32>,

    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub rating_after: Option<i32>,
}

impl PlayerMeta {
    pub fn new(name: &str, rating: Option<i32>) -> Self {
        Self {
            name: name.to_string(),
            rating_before: rating,
            rating_after: None,
        }
    }
}

/// One team preview entry
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PreviewPokemon {
    pub species: String,
    pub level: u8,

    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub gender: Option<char>,
}

impl From<&PokemonDetails> for PreviewPokemon {
    fn from(details: &PokemonDetails) -> Self {
        Self {
            species: details.species.clone(),
            // Showdown omits the level token at the format default
            level: details.level.unwrap_or(50),
            gender: details.gender,
        }
    }
}
