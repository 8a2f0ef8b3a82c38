//! Active slot state

use pivot_protocol::HpStatus;

use super::conditions::Status;
use super::stats::BoostStages;

/// State of the pokemon occupying one active slot.
///
/// HP is on the replay's 0-100 percentage scale. Damage to 0 marks the
/// pokemon fainted, but a faint can also be announced on its own, so
/// fainted does not imply an hp event was seen.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ActiveState {
    pub species: String,

    #[cfg_attr(
        feature = "serde",
        serde(skip_serializing_if = "String::is_empty")
    )]
    pub nickname: String,

    pub hp: u32,

    pub max_hp: u32,

    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub status: Option<Status>,

    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "BoostStages::is_clear"))]
    pub boosts: BoostStages,

    /// Tera type, set permanently once the pokemon terastallizes
    #[cfg_attr(
        feature = "serde",
        serde(rename = "tera", skip_serializing_if = "Option::is_none")
    )]
    pub tera_type: Option<String>,

    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "std::ops::Not::not"))]
    pub fainted: bool,
}

impl ActiveState {
    /// Create state for a fresh switch-in
    pub fn switched_in(species: &str, nickname: &str, hp: Option<&HpStatus>) -> Self {
        let mut state = Self {
            species: species.to_string(),
            nickname: nickname.to_string(),
            hp: 100,
            max_hp: 100,
            status: None,
            boosts: BoostStages::new(),
            tera_type: None,
            fainted: false,
        };
        if let Some(hp) = hp {
            state.apply_hp_status(hp);
        }
        state
    }

    /// Apply an HP field, including any status suffix it carries.
    /// Fainting is decided by the caller; damage to 0 faints, but this
    /// method itself does not.
    pub fn apply_hp_status(&mut self, hp: &HpStatus) {
        self.hp = hp.current;
        self.max_hp = hp.max;
        if let Some(status) = hp.status.as_deref().and_then(Status::from_protocol) {
            self.status = Some(status);
        }
    }

    /// Force the fainted state (explicit faint event)
    pub fn faint(&mut self) {
        self.hp = 0;
        self.fainted = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_switched_in_with_hp() {
        let hp = HpStatus::parse("75/100 brn").unwrap();
        let state = ActiveState::switched_in("Incineroar", "Cat", Some(&hp));

        assert_eq!(state.species, "Incineroar");
        assert_eq!(state.nickname, "Cat");
        assert_eq!(state.hp, 75);
        assert_eq!(state.status, Some(Status::Burn));
        assert!(!state.fainted);
    }

    #[test]
    fn test_apply_hp_alone_does_not_faint() {
        let mut state = ActiveState::switched_in("Lunala", "", None);
        state.apply_hp_status(&HpStatus::parse("0 fnt").unwrap());

        assert_eq!(state.hp, 0);
        assert!(!state.fainted);
    }

    #[test]
    fn test_status_suffix_does_not_clear_existing() {
        let mut state = ActiveState::switched_in("Lunala", "", None);
        state.status = Some(Status::Paralysis);
        state.apply_hp_status(&HpStatus::parse("50/100").unwrap());

        // Plain hp field carries no status information either way
        assert_eq!(state.status, Some(Status::Paralysis));
    }

    #[test]
    fn test_faint() {
        let mut state = ActiveState::switched_in("Lunala", "", None);
        state.faint();
        assert_eq!(state.hp, 0);
        assert!(state.fainted);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_snapshot_shape_is_pruned() {
        let state = ActiveState::switched_in("Lunala", "", None);
        let json = serde_json::to_value(&state).unwrap();

        assert_eq!(json["species"], "Lunala");
        assert!(json.get("nickname").is_none());
        assert!(json.get("status").is_none());
        assert!(json.get("boosts").is_none());
        assert!(json.get("fainted").is_none());
    }
}
