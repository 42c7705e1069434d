//! One combatant of a duel.

use core::fmt;

use super::{
    Bonus, BonusKind, Cooldowns, Inventory, InventoryFull, Item, Penalty, PenaltyKind,
    ResourcePool, ResourceSnapshot, Resources, Shield,
};
use crate::config::DuelConfig;
use crate::race::Race;

/// Opaque player identifier supplied by the identity collaborator.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct PlayerId(pub String);

impl PlayerId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Magical reserve rank, ordered from weakest to strongest.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Default,
    strum::Display,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "lowercase")]
pub enum PowerTier {
    Novice,
    Apprentice,
    #[default]
    Adept,
    Master,
    Archmage,
}

/// Display descriptor derived from the health percentage.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Condition {
    #[default]
    #[strum(to_string = "healthy")]
    Healthy,
    #[strum(to_string = "wounded")]
    Wounded,
    #[strum(to_string = "badly wounded")]
    BadlyWounded,
    #[strum(to_string = "exhausted")]
    Exhausted,
}

impl Condition {
    /// Bands: above 75% healthy, above 50% wounded, above 25% badly wounded.
    pub fn from_health(health: &ResourcePool) -> Self {
        // Compare in integer space: current/max > n/100  <=>  current*100 > n*max
        let scaled = i64::from(health.current) * 100;
        let max = i64::from(health.max);
        if scaled > 75 * max {
            Condition::Healthy
        } else if scaled > 50 * max {
            Condition::Wounded
        } else if scaled > 25 * max {
            Condition::BadlyWounded
        } else {
            Condition::Exhausted
        }
    }
}

/// Durable state of one combatant.
///
/// # Invariants (after every resolved turn)
///
/// - every pool in `resources` lies within `[0, max]`
/// - `shield.element` is `None` whenever `shield.hp == 0`
/// - no penalty or bonus has `turns_remaining == Some(0)`
/// - `inventory` never exceeds [`DuelConfig::MAX_INVENTORY`]
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Character {
    pub id: PlayerId,
    pub name: String,
    pub race: Race,
    pub power: PowerTier,
    /// Prayer faith level, `-1..=10`.
    pub faith: i8,
    pub resources: Resources,
    pub shield: Shield,
    pub bonuses: Vec<Bonus>,
    pub penalties: Vec<Penalty>,
    pub cooldowns: Cooldowns,
    pub inventory: Inventory,
    pub condition: Condition,
}

impl Character {
    /// Creates a character at full default resources with its racial bonuses.
    pub fn new(id: impl Into<String>, name: impl Into<String>, race: Race) -> Self {
        Self {
            id: PlayerId::new(id),
            name: name.into(),
            race,
            power: PowerTier::default(),
            faith: DuelConfig::DEFAULT_FAITH,
            resources: Resources::full(
                DuelConfig::DEFAULT_HEALTH,
                DuelConfig::DEFAULT_MANA,
                DuelConfig::DEFAULT_ACTION_POINTS,
            ),
            shield: Shield::NONE,
            bonuses: race.passive_bonuses(),
            penalties: Vec::new(),
            cooldowns: Cooldowns::new(),
            inventory: Inventory::empty(),
            condition: Condition::Healthy,
        }
    }

    #[must_use]
    pub fn with_power(mut self, power: PowerTier) -> Self {
        self.power = power;
        self
    }

    #[must_use]
    pub fn with_faith(mut self, faith: i8) -> Self {
        self.faith = faith.clamp(DuelConfig::FAITH_FAITHLESS, DuelConfig::FAITH_DEVOUT);
        self
    }

    /// Sets the maxima and fills every pool.
    #[must_use]
    pub fn with_maximums(mut self, health: i32, mana: i32, action_points: i32) -> Self {
        self.resources = Resources::full(health, mana, action_points);
        self
    }

    #[must_use]
    pub fn with_bonus(mut self, bonus: Bonus) -> Self {
        self.bonuses.push(bonus);
        self
    }

    /// Replaces the racial bonuses with an explicit list.
    #[must_use]
    pub fn with_bonuses(mut self, bonuses: Vec<Bonus>) -> Self {
        self.bonuses = bonuses;
        self
    }

    #[must_use]
    pub fn with_penalty(mut self, penalty: Penalty) -> Self {
        self.penalties.push(penalty);
        self
    }

    #[must_use]
    pub fn with_shield(mut self, shield: Shield) -> Self {
        self.shield = shield;
        self
    }

    pub fn with_item(mut self, item: Item) -> Result<Self, InventoryFull> {
        self.inventory.push(item)?;
        Ok(self)
    }

    pub fn has_bonus(&self, kind: BonusKind) -> bool {
        self.bonuses.iter().any(|b| b.kind == kind)
    }

    pub fn has_penalty(&self, kind: PenaltyKind) -> bool {
        self.penalties.iter().any(|p| p.kind == kind)
    }

    pub fn is_defeated(&self) -> bool {
        self.resources.health.is_depleted()
    }

    pub fn snapshot(&self) -> ResourceSnapshot {
        ResourceSnapshot {
            health: self.resources.health.current,
            mana: self.resources.mana.current,
            action_points: self.resources.action_points.current,
            shield: self.shield.hp,
        }
    }

    pub fn refresh_condition(&mut self) {
        self.condition = Condition::from_health(&self.resources.health);
    }
}
