//! In-memory DuelRepository implementation for tests and local runs.

use std::collections::BTreeMap;
use std::sync::RwLock;
use std::sync::atomic::{AtomicU64, Ordering};

use duel_core::{DuelState, TurnFlags};

use crate::repository::{DuelId, DuelRepository, RepositoryError, Result};

/// In-memory implementation of DuelRepository.
pub struct InMemoryDuelRepo {
    duels: RwLock<BTreeMap<DuelId, DuelState>>,
    next_id: AtomicU64,
}

impl InMemoryDuelRepo {
    pub fn new() -> Self {
        Self {
            duels: RwLock::new(BTreeMap::new()),
            next_id: AtomicU64::new(1),
        }
    }
}

impl Default for InMemoryDuelRepo {
    fn default() -> Self {
        Self::new()
    }
}

/// Copy of `state` without turn-scoped flags.
fn durable(state: &DuelState) -> DuelState {
    DuelState {
        flags: TurnFlags::default(),
        ..state.clone()
    }
}

impl DuelRepository for InMemoryDuelRepo {
    fn create(&self, state: &DuelState) -> Result<DuelId> {
        let id = DuelId(self.next_id.fetch_add(1, Ordering::Relaxed));
        let mut duels = self
            .duels
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        if duels.contains_key(&id) {
            return Err(RepositoryError::AlreadyExists(id));
        }
        duels.insert(id, durable(state));
        Ok(id)
    }

    fn load(&self, id: DuelId) -> Result<Option<DuelState>> {
        let duels = self
            .duels
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(duels.get(&id).cloned())
    }

    fn save(&self, id: DuelId, state: &DuelState) -> Result<()> {
        let mut duels = self
            .duels
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        duels.insert(id, durable(state));
        Ok(())
    }

    fn exists(&self, id: DuelId) -> bool {
        self.duels
            .read()
            .map(|duels| duels.contains_key(&id))
            .unwrap_or(false)
    }

    fn delete(&self, id: DuelId) -> Result<()> {
        let mut duels = self
            .duels
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        duels.remove(&id);
        Ok(())
    }

    fn list(&self) -> Result<Vec<DuelId>> {
        let duels = self
            .duels
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(duels.keys().copied().collect())
    }
}
