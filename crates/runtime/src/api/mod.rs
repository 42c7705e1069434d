//! Public runtime API surface.
//!
//! This module gathers the types exposed to consumers of the runtime crate so
//! the service and repository layers can stay focused on orchestration and
//! storage.

pub mod errors;
pub mod providers;

pub use errors::{Result, RuntimeError};
pub use providers::{
    AdvisoryError, AdvisoryProvider, AdvisoryRequest, CombatantView, HeuristicAdvisor, Suggestion,
};
