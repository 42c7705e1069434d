//! Per-character cooldown tracking.

use core::fmt;

use crate::race::RaceAbility;

/// Identifies something that can be on cooldown.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum CooldownKey {
    StrongCast,
    Item,
    Prayer,
    Ability(RaceAbility),
}

impl fmt::Display for CooldownKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StrongCast => f.write_str("strong spell"),
            Self::Item => f.write_str("item"),
            Self::Prayer => f.write_str("prayer"),
            Self::Ability(ability) => write!(f, "{}", ability.spec().name),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cooldown {
    pub key: CooldownKey,
    pub turns_remaining: u32,
}

/// Remaining turns per cooldown key. Entries at zero are dropped.
///
/// Stored as an ordered list rather than a map so the serialized form stays
/// stable and JSON-friendly.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Cooldowns {
    entries: Vec<Cooldown>,
}

impl Cooldowns {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remaining turns for `key`, zero when ready.
    pub fn remaining(&self, key: CooldownKey) -> u32 {
        self.entries
            .iter()
            .find(|c| c.key == key)
            .map_or(0, |c| c.turns_remaining)
    }

    pub fn is_ready(&self, key: CooldownKey) -> bool {
        self.remaining(key) == 0
    }

    /// Starts (or restarts) a cooldown.
    pub fn set(&mut self, key: CooldownKey, turns: u32) {
        self.entries.retain(|c| c.key != key);
        if turns > 0 {
            self.entries.push(Cooldown {
                key,
                turns_remaining: turns,
            });
        }
    }

    /// Ticks every cooldown down by one turn, flooring at zero.
    pub fn tick(&mut self) {
        for cooldown in &mut self.entries {
            cooldown.turns_remaining = cooldown.turns_remaining.saturating_sub(1);
        }
        self.entries.retain(|c| c.turns_remaining > 0);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Cooldown> {
        self.entries.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tick_floors_and_drops_ready_entries() {
        let mut cooldowns = Cooldowns::new();
        cooldowns.set(CooldownKey::Prayer, 2);
        cooldowns.set(CooldownKey::Item, 1);

        cooldowns.tick();
        assert_eq!(cooldowns.remaining(CooldownKey::Prayer), 1);
        assert!(cooldowns.is_ready(CooldownKey::Item));

        cooldowns.tick();
        cooldowns.tick();
        assert!(cooldowns.is_empty());
    }

    #[test]
    fn set_restarts_existing_entry() {
        let mut cooldowns = Cooldowns::new();
        cooldowns.set(CooldownKey::StrongCast, 1);
        cooldowns.set(CooldownKey::StrongCast, 3);
        assert_eq!(cooldowns.remaining(CooldownKey::StrongCast), 3);
        assert_eq!(cooldowns.iter().count(), 1);
    }
}
