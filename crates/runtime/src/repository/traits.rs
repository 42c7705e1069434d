//! Repository contract for saving and loading duels.

use duel_core::DuelState;

use super::{DuelId, Result};

/// Durable storage for duel states.
///
/// Implementations store only durable state: the turn-scoped flags on
/// [`DuelState::flags`] are never persisted and come back cleared.
pub trait DuelRepository: Send + Sync {
    /// Stores a new duel under a fresh id.
    fn create(&self, state: &DuelState) -> Result<DuelId>;

    /// Loads a duel, `None` if it does not exist.
    fn load(&self, id: DuelId) -> Result<Option<DuelState>>;

    /// Overwrites an existing or new duel.
    fn save(&self, id: DuelId, state: &DuelState) -> Result<()>;

    fn exists(&self, id: DuelId) -> bool;

    fn delete(&self, id: DuelId) -> Result<()>;

    /// All stored ids, ascending.
    fn list(&self) -> Result<Vec<DuelId>>;
}
