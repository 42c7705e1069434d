//! Data-driven duel content and loaders.
//!
//! This crate houses the static inputs of a duel and loads them from disk:
//! - Rule tables (TOML, any subset of fields overrides the built-in balance)
//! - Character rosters (RON list of templates)
//! - Duel scripts (RON, two roster entries plus the actions of every turn)
//!
//! Content is turned into `duel-core` values before a duel starts and never
//! appears in duel state.

pub mod roster;
pub mod script;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use roster::{CharacterTemplate, Roster, RosterError};
pub use script::DuelScript;

#[cfg(feature = "loaders")]
pub use loaders::{ContentFactory, RosterLoader, RulesLoader, ScriptLoader};
