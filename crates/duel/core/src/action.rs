//! Actions a player can submit for a turn.

use core::fmt;

use crate::race::RaceAbility;
use crate::state::{CooldownKey, Element};

/// Spell tier. Determines both the mana cost and the damage scale.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, strum::Display, strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "lowercase")]
pub enum Tier {
    Household,
    Small,
    Medium,
    Strong,
}

/// What a successful prayer grants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum PrayerEffect {
    #[strum(to_string = "eternal shield")]
    EternalShield,
    #[strum(to_string = "full health")]
    HealHealth,
    #[strum(to_string = "full mana")]
    RestoreMana,
}

/// A single submitted action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Action {
    /// Tiered damage spell.
    Cast { tier: Tier },
    /// Adds shield hit points. `None` raises a physical shield.
    Shield { element: Option<Element> },
    /// Attempt to halve the next incoming hit.
    Dodge,
    /// Consume the oldest inventory item.
    UseItem,
    Prayer { effect: PrayerEffect },
    /// Drop the oldest penalty.
    RemoveEffect,
    /// Recover action points at the end of the turn.
    Rest,
    RaceAbility { ability: RaceAbility },
}

impl Action {
    /// Cooldown consulted before the action runs and started after it runs.
    pub fn cooldown_key(&self) -> Option<CooldownKey> {
        match self {
            Action::Cast { tier: Tier::Strong } => Some(CooldownKey::StrongCast),
            Action::UseItem => Some(CooldownKey::Item),
            Action::Prayer { .. } => Some(CooldownKey::Prayer),
            Action::RaceAbility { ability } => Some(CooldownKey::Ability(*ability)),
            _ => None,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Cast { tier } => write!(f, "{tier} spell"),
            Action::Shield { element: Some(element) } => write!(f, "{element} shield"),
            Action::Shield { element: None } => f.write_str("physical shield"),
            Action::Dodge => f.write_str("dodge"),
            Action::UseItem => f.write_str("use item"),
            Action::Prayer { effect } => write!(f, "prayer for {effect}"),
            Action::RemoveEffect => f.write_str("remove effect"),
            Action::Rest => f.write_str("rest"),
            Action::RaceAbility { ability } => write!(f, "{ability}"),
        }
    }
}

/// Entry of a turn record's action list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum RecordedAction {
    Executed(Action),
    /// Marker for a turn lost to control effects or petrification.
    TurnSkipped,
}

impl fmt::Display for RecordedAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordedAction::Executed(action) => write!(f, "{action}"),
            RecordedAction::TurnSkipped => f.write_str("turn skipped"),
        }
    }
}
