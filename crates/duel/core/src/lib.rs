//! Deterministic duel rules and data types.
//!
//! `duel-core` resolves one turn of a two-character duel at a time. It owns
//! the canonical state model, the rule table and the race ability catalog,
//! and performs no I/O. All state transitions flow through
//! [`engine::DuelEngine`]; persistence and turn ownership live with the
//! caller.
pub mod action;
pub mod config;
pub mod engine;
pub mod error;
pub mod race;
pub mod rng;
pub mod rules;
pub mod state;
pub use action::{Action, PrayerEffect, RecordedAction, Tier};
pub use config::DuelConfig;
pub use engine::{ActionList, DamageReport, DuelEngine, TurnError, TurnOutcome};
pub use error::{DuelError, ErrorSeverity};
pub use race::{AbilityCost, AbilityDamage, AbilityEffect, AbilitySpec, Race, RaceAbility};
pub use rng::{FixedRoll, PcgRng, RngOracle, compute_seed};
pub use rules::{
    ActionCosts, CooldownRules, DamageBonuses, DamageTable, DotRules, Overspend, RegenRules,
    RuleTable, RulesError, TierTable, WoundPenalty,
};
pub use state::{
    Bonus, BonusKind, Character, Condition, Cooldown, CooldownKey, Cooldowns, DuelState, Element,
    Inventory, InventoryFull, Item, ItemKind, Penalty, PenaltyKind, PlayerId, PowerTier,
    ResourceKind, ResourcePool, ResourceSnapshot, Resources, Shield, Side, TurnFlags, TurnRecord,
};
