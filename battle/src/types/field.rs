//! Global field conditions and per-side screens

use pivot_protocol::SideId;

use super::conditions::{Terrain, Weather};

/// Field-wide conditions plus the per-side effects the dataset cares
/// about. Matching against effect names is by substring because the log
/// spells them several ways ("move: Tailwind", "Reflect", etc.).
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FieldState {
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub weather: Option<Weather>,

    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub terrain: Option<Terrain>,

    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "std::ops::Not::not"))]
    pub trick_room: bool,

    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "std::ops::Not::not"))]
    pub p1_tailwind: bool,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "std::ops::Not::not"))]
    pub p2_tailwind: bool,

    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "std::ops::Not::not"))]
    pub p1_reflect: bool,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "std::ops::Not::not"))]
    pub p2_reflect: bool,

    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "std::ops::Not::not"))]
    pub p1_light_screen: bool,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "std::ops::Not::not"))]
    pub p2_light_screen: bool,

    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "std::ops::Not::not"))]
    pub p1_aurora_veil: bool,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "std::ops::Not::not"))]
    pub p2_aurora_veil: bool,
}

impl FieldState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle a fieldstart effect (terrains and Trick Room)
    pub fn apply_field_start(&mut self, effect: &str) {
        let lower = effect.to_lowercase();
        if lower.contains("terrain") {
            self.terrain = Terrain::from_protocol(effect);
        } else if lower.contains("trick room") {
            self.trick_room = true;
        }
    }

    /// Handle a fieldend effect
    pub fn apply_field_end(&mut self, effect: &str) {
        let lower = effect.to_lowercase();
        if lower.contains("terrain") {
            self.terrain = None;
        } else if lower.contains("trick room") {
            self.trick_room = false;
        }
    }

    /// Handle a sidestart effect for one side
    pub fn apply_side_start(&mut self, side: SideId, effect: &str) {
        if let Some(flag) = self.side_flag(side, effect) {
            *flag = true;
        }
    }

    /// Handle a sideend effect for one side
    pub fn apply_side_end(&mut self, side: SideId, effect: &str) {
        if let Some(flag) = self.side_flag(side, effect) {
            *flag = false;
        }
    }

    fn side_flag(&mut self, side: SideId, effect: &str) -> Option<&mut bool> {
        let lower = effect.to_lowercase();
        match side {
            SideId::P1 => {
                if lower.contains("tailwind") {
                    Some(&mut self.p1_tailwind)
                } else if lower.contains("light screen") {
                    Some(&mut self.p1_light_screen)
                } else if lower.contains("aurora veil") {
                    Some(&mut self.p1_aurora_veil)
                } else if lower.contains("reflect") {
                    Some(&mut self.p1_reflect)
                } else {
                    None
                }
            }
            SideId::P2 => {
                if lower.contains("tailwind") {
                    Some(&mut self.p2_tailwind)
                } else if lower.contains("light screen") {
                    Some(&mut self.p2_light_screen)
                } else if lower.contains("aurora veil") {
                    Some(&mut self.p2_aurora_veil)
                } else if lower.contains("reflect") {
                    Some(&mut self.p2_reflect)
                } else {
                    None
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terrain_start_and_end() {
        let mut field = FieldState::new();
        field.apply_field_start("move: Psychic Terrain");
        assert_eq!(field.terrain, Some(Terrain::Psychic));

        field.apply_field_end("move: Psychic Terrain");
        assert_eq!(field.terrain, None);
    }

    #[test]
    fn test_trick_room() {
        let mut field = FieldState::new();
        field.apply_field_start("move: Trick Room");
        assert!(field.trick_room);

        field.apply_field_end("move: Trick Room");
        assert!(!field.trick_room);
    }

    #[test]
    fn test_side_screens() {
        let mut field = FieldState::new();
        field.apply_side_start(SideId::P1, "move: Tailwind");
        field.apply_side_start(SideId::P2, "Light Screen");
        assert!(field.p1_tailwind);
        assert!(field.p2_light_screen);
        assert!(!field.p2_tailwind);

        field.apply_side_end(SideId::P1, "move: Tailwind");
        assert!(!field.p1_tailwind);
    }

    #[test]
    fn test_unknown_side_effect_ignored() {
        let mut field = FieldState::new();
        field.apply_side_start(SideId::P1, "move: Stealth Rock");
        assert_eq!(field, FieldState::new());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_empty_field_serializes_empty() {
        let field = FieldState::new();
        assert_eq!(serde_json::to_string(&field).unwrap(), "{}");
    }
}
