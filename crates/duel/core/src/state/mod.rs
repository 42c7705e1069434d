//! Duel state types.
//!
//! - [`Character`]: one combatant, its pools, effects, cooldowns and items
//! - [`DuelState`]: both characters plus history, turn counter and winner
//! - [`TurnRecord`]: immutable log entry appended once per resolved turn

pub mod character;
pub mod cooldowns;
pub mod duel;
pub mod effects;
pub mod inventory;
pub mod resources;

pub use character::{Character, Condition, PlayerId, PowerTier};
pub use cooldowns::{Cooldown, CooldownKey, Cooldowns};
pub use duel::{DuelState, Side, TurnFlags, TurnRecord};
pub use effects::{Bonus, BonusKind, Penalty, PenaltyKind};
pub use inventory::{Inventory, InventoryFull, Item, ItemKind};
pub use resources::{points, Element, ResourceKind, ResourcePool, ResourceSnapshot, Resources, Shield};
