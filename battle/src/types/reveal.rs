//! Information revealed about each pokemon over the battle

use std::collections::BTreeMap;

use pivot_protocol::SideId;

use super::side::PerSide;

/// Everything the log disclosed about one pokemon's build
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RevealedInfo {
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Vec::is_empty"))]
    pub moves: Vec<String>,

    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub item: Option<String>,

    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub ability: Option<String>,

    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub tera_type: Option<String>,
}

impl RevealedInfo {
    /// Record a move use, keeping insertion order and skipping repeats
    pub fn add_move(&mut self, name: &str) {
        if !self.moves.iter().any(|m| m == name) {
            self.moves.push(name.to_string());
        }
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
            && self.item.is_none()
            && self.ability.is_none()
            && self.tera_type.is_none()
    }
}

/// Revealed info per side, keyed by species name
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RevealTable {
    sides: PerSide<BTreeMap<String, RevealedInfo>>,
}

impl RevealTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get or create the entry for a species on one side
    pub fn entry(&mut self, side: SideId, species: &str) -> &mut RevealedInfo {
        self.sides
            .get_mut(side)
            .entry(species.to_string())
            .or_default()
    }

    pub fn get(&self, side: SideId, species: &str) -> Option<&RevealedInfo> {
        self.sides.get(side).get(species)
    }

    /// Copy of the table with empty entries dropped
    pub fn pruned(&self) -> PerSide<BTreeMap<String, RevealedInfo>> {
        let prune = |m: &BTreeMap<String, RevealedInfo>| {
            m.iter()
                .filter(|(_, info)| !info.is_empty())
                .map(|(species, info)| (species.clone(), info.clone()))
                .collect()
        };
        PerSide {
            p1: prune(&self.sides.p1),
            p2: prune(&self.sides.p2),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_moves_dedup_in_order() {
        let mut info = RevealedInfo::default();
        info.add_move("Protect");
        info.add_move("Flare Blitz");
        info.add_move("Protect");

        assert_eq!(info.moves, vec!["Protect", "Flare Blitz"]);
    }

    #[test]
    fn test_entry_creates_and_reuses() {
        let mut table = RevealTable::new();
        table.entry(SideId::P1, "Incineroar").add_move("Fake Out");
        table.entry(SideId::P1, "Incineroar").item = Some("Sitrus Berry".into());

        let info = table.get(SideId::P1, "Incineroar").unwrap();
        assert_eq!(info.moves, vec!["Fake Out"]);
        assert_eq!(info.item.as_deref(), Some("Sitrus Berry"));
        assert!(table.get(SideId::P2, "Incineroar").is_none());
    }

    #[test]
    fn test_pruned_drops_empty() {
        let mut table = RevealTable::new();
        table.entry(SideId::P1, "Incineroar").add_move("Fake Out");
        table.entry(SideId::P1, "Torkoal");

        let pruned = table.pruned();
        assert!(pruned.p1.contains_key("Incineroar"));
        assert!(!pruned.p1.contains_key("Torkoal"));
    }
}
