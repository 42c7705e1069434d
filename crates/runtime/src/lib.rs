//! Boundary layer around the duel engine.
//!
//! `duel-core` resolves turns but never stores them. This crate supplies the
//! collaborator around it: repositories that persist duel state, a service
//! that validates and serializes turn submissions, and an advisor that keeps
//! the optional suggestion provider from ever affecting a turn.
//!
//! Modules are organized by responsibility:
//! - [`service`] hosts [`DuelService`], the turn submission entry point
//! - [`api`] exposes errors and the advisory provider contract
//! - [`advisor`] runs providers under a deadline
//! - [`repository`] provides in-memory and JSON file storage
//! - [`config`] reads runtime settings from the environment
pub mod advisor;
pub mod api;
pub mod config;
pub mod repository;
pub mod service;

pub use advisor::{Advice, Advisor};
pub use api::{
    AdvisoryError, AdvisoryProvider, AdvisoryRequest, CombatantView, HeuristicAdvisor, Result,
    RuntimeError, Suggestion,
};
pub use config::RuntimeConfig;
pub use repository::{
    DuelId, DuelRepository, FileDuelRepo, InMemoryDuelRepo, RepositoryError,
};
pub use service::DuelService;
