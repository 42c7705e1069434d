//! Rule table: costs, cooldowns, damage scales, regen and probability tables.
//!
//! Pure data. The engine reads it and never mutates it. `RuleTable::default()`
//! is the built-in balance; content files may override any subset of fields.

use core::fmt::Write as _;

use crate::action::Tier;
use crate::error::{DuelError, ErrorSeverity};
use crate::state::PowerTier;

/// One value per spell tier.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TierTable {
    pub household: u32,
    pub small: u32,
    pub medium: u32,
    pub strong: u32,
}

impl TierTable {
    pub const fn new(household: u32, small: u32, medium: u32, strong: u32) -> Self {
        Self {
            household,
            small,
            medium,
            strong,
        }
    }

    pub const fn get(&self, tier: Tier) -> u32 {
        match tier {
            Tier::Household => self.household,
            Tier::Small => self.small,
            Tier::Medium => self.medium,
            Tier::Strong => self.strong,
        }
    }
}

/// Spell damage by caster power tier and spell tier.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DamageTable {
    pub novice: TierTable,
    pub apprentice: TierTable,
    pub adept: TierTable,
    pub master: TierTable,
    pub archmage: TierTable,
}

impl DamageTable {
    pub const fn get(&self, power: PowerTier, tier: Tier) -> u32 {
        let row = match power {
            PowerTier::Novice => &self.novice,
            PowerTier::Apprentice => &self.apprentice,
            PowerTier::Adept => &self.adept,
            PowerTier::Master => &self.master,
            PowerTier::Archmage => &self.archmage,
        };
        row.get(tier)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CooldownRules {
    pub strong: u32,
    pub item: u32,
    pub prayer: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RegenRules {
    /// Passive mana restored at the end of every own turn.
    pub mana: i32,
    /// Action points restored at the end of a turn that included a rest.
    pub rest_action_points: i32,
}

/// Base action-point prices.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActionCosts {
    pub dodge: i32,
    pub item: i32,
    pub prayer: i32,
}

/// Flat spell damage modifiers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DamageBonuses {
    pub vulnerable: u32,
    pub battle_magic: u32,
    pub rage: u32,
}

/// Damage-over-time amounts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DotRules {
    pub poison: i32,
    pub burn: i32,
    pub resistance_discount: i32,
    pub vulnerability_surcharge: i32,
}

/// Extra action-point cost applied while health is below a threshold.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WoundPenalty {
    pub below_health: i32,
    pub extra_cost: i32,
}

/// How to treat actions whose base cost exceeds the available resource.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case")]
pub enum Overspend {
    /// Let pools go negative during the turn and floor them at turn end.
    #[default]
    ClampAtTurnEnd,
    /// Reject the whole turn.
    Reject,
}

/// Complete balance table.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RuleTable {
    pub tier_costs: TierTable,
    pub tier_damage: DamageTable,
    pub cooldowns: CooldownRules,
    pub regen: RegenRules,
    pub costs: ActionCosts,
    pub bonuses: DamageBonuses,
    pub dot: DotRules,
    /// Sorted by ascending `below_health`; the first match wins.
    pub wound_penalties: Vec<WoundPenalty>,
    /// Prayer success chance out of 10 for faith levels 0 through 9.
    pub faith_chances: [u32; 10],
    pub shield_amount: u32,
    /// Minimum d10 roll that halves an incoming hit while dodging.
    pub dodge_success_min: u32,
    pub eternal_shield_amount: u32,
    pub eternal_shield_turns: u32,
    pub max_actions_per_turn: usize,
    pub overspend: Overspend,
}

impl Default for RuleTable {
    fn default() -> Self {
        Self {
            tier_costs: TierTable::new(5, 15, 30, 50),
            tier_damage: DamageTable {
                novice: TierTable::new(2, 5, 10, 20),
                apprentice: TierTable::new(3, 8, 15, 30),
                adept: TierTable::new(5, 10, 20, 40),
                master: TierTable::new(7, 15, 30, 55),
                archmage: TierTable::new(10, 20, 40, 75),
            },
            cooldowns: CooldownRules {
                strong: 3,
                item: 2,
                prayer: 3,
            },
            regen: RegenRules {
                mana: 25,
                rest_action_points: 30,
            },
            costs: ActionCosts {
                dodge: 20,
                item: 15,
                prayer: 25,
            },
            bonuses: DamageBonuses {
                vulnerable: 5,
                battle_magic: 5,
                rage: 10,
            },
            dot: DotRules {
                poison: 5,
                burn: 4,
                resistance_discount: 3,
                vulnerability_surcharge: 3,
            },
            wound_penalties: vec![
                WoundPenalty {
                    below_health: 25,
                    extra_cost: 15,
                },
                WoundPenalty {
                    below_health: 50,
                    extra_cost: 10,
                },
                WoundPenalty {
                    below_health: 75,
                    extra_cost: 5,
                },
            ],
            faith_chances: [1, 2, 2, 3, 4, 5, 6, 7, 8, 9],
            shield_amount: 25,
            dodge_success_min: 6,
            eternal_shield_amount: 10,
            eternal_shield_turns: 3,
            max_actions_per_turn: crate::DuelConfig::MAX_ACTIONS_PER_TURN,
            overspend: Overspend::ClampAtTurnEnd,
        }
    }
}

/// Problems detected by [`RuleTable::validate`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RulesError {
    #[error("wound penalty thresholds must be strictly ascending (found {previous} then {next})")]
    UnsortedWoundPenalties { previous: i32, next: i32 },

    #[error("faith chance for level {level} is {chance}, must be at most 10")]
    FaithChanceOutOfRange { level: usize, chance: u32 },

    #[error("dodge success roll must be within 1..=10, got {0}")]
    DodgeRollOutOfRange(u32),

    #[error("max actions per turn must be within 1..={max}, got {value}")]
    ActionLimitOutOfRange { value: usize, max: usize },
}

impl DuelError for RulesError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Configuration
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::UnsortedWoundPenalties { .. } => "RULES_UNSORTED_WOUNDS",
            Self::FaithChanceOutOfRange { .. } => "RULES_FAITH_CHANCE",
            Self::DodgeRollOutOfRange(_) => "RULES_DODGE_ROLL",
            Self::ActionLimitOutOfRange { .. } => "RULES_ACTION_LIMIT",
        }
    }
}

impl RuleTable {
    /// Extra action-point cost for the given current health.
    pub fn wound_penalty(&self, health: i32) -> i32 {
        self.wound_penalties
            .iter()
            .find(|w| health < w.below_health)
            .map_or(0, |w| w.extra_cost)
    }

    /// Prayer check: level 10 always passes, level -1 (or lower) always fails,
    /// anything else passes when the d10 roll is at most the table chance.
    pub fn prayer_succeeds(&self, faith: i8, roll: u32) -> bool {
        match faith {
            f if f >= crate::DuelConfig::FAITH_DEVOUT => true,
            f if f <= crate::DuelConfig::FAITH_FAITHLESS => false,
            f => roll <= self.faith_chances[f as usize],
        }
    }

    pub fn validate(&self) -> Result<(), RulesError> {
        for pair in self.wound_penalties.windows(2) {
            if pair[0].below_health >= pair[1].below_health {
                return Err(RulesError::UnsortedWoundPenalties {
                    previous: pair[0].below_health,
                    next: pair[1].below_health,
                });
            }
        }

        if let Some((level, &chance)) = self
            .faith_chances
            .iter()
            .enumerate()
            .find(|(_, chance)| **chance > 10)
        {
            return Err(RulesError::FaithChanceOutOfRange { level, chance });
        }

        if !(1..=10).contains(&self.dodge_success_min) {
            return Err(RulesError::DodgeRollOutOfRange(self.dodge_success_min));
        }

        let max = crate::DuelConfig::MAX_ACTIONS_PER_TURN;
        if !(1..=max).contains(&self.max_actions_per_turn) {
            return Err(RulesError::ActionLimitOutOfRange {
                value: self.max_actions_per_turn,
                max,
            });
        }

        Ok(())
    }

    /// Plain-text summary of the rules, handed to advisory collaborators.
    pub fn describe(&self) -> String {
        let mut text = String::new();
        let c = &self.tier_costs;
        let _ = writeln!(
            text,
            "Spell mana cost: household {}, small {}, medium {}, strong {} (strong cooldown {} turns).",
            c.household, c.small, c.medium, c.strong, self.cooldowns.strong
        );
        let d = &self.tier_damage.adept;
        let _ = writeln!(
            text,
            "Adept spell damage: household {}, small {}, medium {}, strong {}.",
            d.household, d.small, d.medium, d.strong
        );
        let _ = writeln!(
            text,
            "Shield: costs {} mana, adds {} shield points.",
            c.medium, self.shield_amount
        );
        let _ = writeln!(
            text,
            "Action points: dodge {}, item {}, prayer {}; rest restores {}.",
            self.costs.dodge, self.costs.item, self.costs.prayer, self.regen.rest_action_points
        );
        let _ = writeln!(text, "Passive mana regen: {} per turn.", self.regen.mana);
        for wound in &self.wound_penalties {
            let _ = writeln!(
                text,
                "Below {} health, action-point actions cost {} more.",
                wound.below_health, wound.extra_cost
            );
        }
        let _ = write!(
            text,
            "At most {} actions per turn.",
            self.max_actions_per_turn
        );
        text
    }
}
