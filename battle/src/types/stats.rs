//! Accumulated stat stage changes

use pivot_protocol::Stat;

/// Stat stages accumulated from boost/unboost events.
///
/// Unlike a simulator, this layer applies deltas without clamping:
/// effects that would reset or cap stages are not tracked here, and the
/// log itself never reports an out-of-range stage being applied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct BoostStages {
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "is_zero"))]
    pub atk: i8,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "is_zero"))]
    pub def: i8,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "is_zero"))]
    pub spa: i8,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "is_zero"))]
    pub spd: i8,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "is_zero"))]
    pub spe: i8,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "is_zero"))]
    pub accuracy: i8,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "is_zero"))]
    pub evasion: i8,
}

#[cfg(feature = "serde")]
fn is_zero(v: &i8) -> bool {
    *v == 0
}

impl BoostStages {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, stat: Stat) -> i8 {
        match stat {
            Stat::Atk => self.atk,
            Stat::Def => self.def,
            Stat::Spa => self.spa,
            Stat::Spd => self.spd,
            Stat::Spe => self.spe,
            Stat::Accuracy => self.accuracy,
            Stat::Evasion => self.evasion,
        }
    }

    /// Apply a signed stage delta to a stat
    pub fn apply(&mut self, stat: Stat, delta: i8) {
        let slot = match stat {
            Stat::Atk => &mut self.atk,
            Stat::Def => &mut self.def,
            Stat::Spa => &mut self.spa,
            Stat::Spd => &mut self.spd,
            Stat::Spe => &mut self.spe,
            Stat::Accuracy => &mut self.accuracy,
            Stat::Evasion => &mut self.evasion,
        };
        *slot += delta;
    }

    pub fn is_clear(&self) -> bool {
        *self == Self::default()
    }
}
