//! Bonus and penalty descriptors carried by characters.
//!
//! Both lists are ordered: penalties are removed first-in first-out by the
//! remove-effect action, and turn logs report effects in the order they were
//! gained. An effect without `turns_remaining` lasts until removed.

use core::fmt;

use super::ResourceKind;

/// Positive effects.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum BonusKind {
    /// Restores `amount` of `resource` at the start of each own turn.
    Regen { resource: ResourceKind, amount: i32 },
    /// Adds `amount` shield hit points at the start of each own turn.
    EternalShield { amount: u32 },
    /// Ignores hypnosis, immobilize, trance and sleep.
    ControlImmunity,
    /// Poison ticks deal less damage.
    PoisonResistance,
    /// Poison ticks deal no damage.
    PoisonImmunity,
    /// Magical hits restore mana instead of dealing damage.
    MagicAbsorption,
    /// Spell damage bonus.
    BattleMagic,
    /// Racial fury, spell damage bonus.
    Rage,
}

impl fmt::Display for BonusKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Regen { resource, amount } => write!(f, "+{amount} {resource}/turn"),
            Self::EternalShield { amount } => write!(f, "eternal shield (+{amount}/turn)"),
            Self::ControlImmunity => f.write_str("control immunity"),
            Self::PoisonResistance => f.write_str("poison resistance"),
            Self::PoisonImmunity => f.write_str("poison immunity"),
            Self::MagicAbsorption => f.write_str("magic absorption"),
            Self::BattleMagic => f.write_str("battle magic"),
            Self::Rage => f.write_str("rage"),
        }
    }
}

/// Negative effects.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "lowercase")]
pub enum PenaltyKind {
    Hypnosis,
    Immobilize,
    Trance,
    Sleep,
    /// Counted per stack: one stack costs an action, two cost the turn.
    Petrify,
    /// Discards every submitted action.
    Blind,
    Poison,
    Burn,
    /// Incoming spells hit harder.
    Vulnerable,
    /// Poison ticks hit harder.
    #[strum(to_string = "poison vulnerability")]
    PoisonVulnerability,
}

impl PenaltyKind {
    /// Penalties that cost the whole turn unless the holder has control immunity.
    pub const fn skips_turn(self) -> bool {
        matches!(
            self,
            Self::Hypnosis | Self::Immobilize | Self::Trance | Self::Sleep
        )
    }

    /// Penalties that deal damage every turn.
    pub const fn is_damage_over_time(self) -> bool {
        matches!(self, Self::Poison | Self::Burn)
    }
}

/// A bonus with an optional remaining duration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bonus {
    pub kind: BonusKind,
    pub turns_remaining: Option<u32>,
}

impl Bonus {
    pub const fn permanent(kind: BonusKind) -> Self {
        Self {
            kind,
            turns_remaining: None,
        }
    }

    pub const fn timed(kind: BonusKind, turns: u32) -> Self {
        Self {
            kind,
            turns_remaining: Some(turns),
        }
    }
}

/// A penalty with an optional remaining duration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Penalty {
    pub kind: PenaltyKind,
    pub turns_remaining: Option<u32>,
}

impl Penalty {
    pub const fn permanent(kind: PenaltyKind) -> Self {
        Self {
            kind,
            turns_remaining: None,
        }
    }

    pub const fn timed(kind: PenaltyKind, turns: u32) -> Self {
        Self {
            kind,
            turns_remaining: Some(turns),
        }
    }
}

impl fmt::Display for Penalty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.turns_remaining {
            Some(turns) => write!(f, "{} ({turns})", self.kind),
            None => write!(f, "{}", self.kind),
        }
    }
}

/// Decrements a duration counter. Returns true when the effect has run out.
///
/// Permanent effects (`None`) never run out.
pub(crate) fn tick_duration(turns: &mut Option<u32>) -> bool {
    match turns {
        Some(remaining) => {
            *remaining = remaining.saturating_sub(1);
            *remaining == 0
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skip_class_membership() {
        assert!(PenaltyKind::Hypnosis.skips_turn());
        assert!(PenaltyKind::Sleep.skips_turn());
        assert!(!PenaltyKind::Petrify.skips_turn());
        assert!(!PenaltyKind::Blind.skips_turn());
    }

    #[test]
    fn tick_expires_at_zero() {
        let mut turns = Some(2);
        assert!(!tick_duration(&mut turns));
        assert!(tick_duration(&mut turns));
        assert_eq!(turns, Some(0));

        let mut permanent = None;
        assert!(!tick_duration(&mut permanent));
    }

    #[test]
    fn labels_read_naturally() {
        assert_eq!(PenaltyKind::PoisonVulnerability.to_string(), "poison vulnerability");
        assert_eq!(Penalty::timed(PenaltyKind::Blind, 1).to_string(), "blind (1)");
        let regen = BonusKind::Regen {
            resource: ResourceKind::Health,
            amount: 3,
        };
        assert_eq!(regen.to_string(), "+3 health/turn");
    }
}
