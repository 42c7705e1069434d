//! Turn submission service.
//!
//! [`DuelService`] is the collaborator the engine expects: it loads the
//! current state, checks that the submitter owns the turn and is not acting
//! on an outdated view, runs [`DuelEngine`], and persists the result.
//! Submissions for the same duel are serialized by a per-duel lock; different
//! duels proceed independently.
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use duel_core::{
    Action, Character, DuelEngine, DuelState, PcgRng, PlayerId, RngOracle, RuleTable, TurnFlags,
    TurnRecord,
};

use crate::api::{AdvisoryRequest, Result, RuntimeError};
use crate::repository::{DuelId, DuelRepository};

/// Live session data kept beside a stored duel.
///
/// The turn-scoped flags never reach the repository, so the service holds
/// them here between two submissions. The mutex doubles as the per-duel lock.
type Session = Arc<Mutex<TurnFlags>>;

pub struct DuelService {
    repo: Arc<dyn DuelRepository>,
    rules: RuleTable,
    rng: Arc<dyn RngOracle>,
    sessions: Mutex<HashMap<DuelId, Session>>,
}

impl DuelService {
    /// Service using the default PCG oracle.
    pub fn new(repo: Arc<dyn DuelRepository>, rules: RuleTable) -> Self {
        Self::with_rng(repo, rules, Arc::new(PcgRng))
    }

    pub fn with_rng(
        repo: Arc<dyn DuelRepository>,
        rules: RuleTable,
        rng: Arc<dyn RngOracle>,
    ) -> Self {
        Self {
            repo,
            rules,
            rng,
            sessions: Mutex::new(HashMap::new()),
        }
    }

    pub fn rules(&self) -> &RuleTable {
        &self.rules
    }

    /// Starts a new duel. `first` acts first.
    pub fn create_duel(&self, first: Character, second: Character, seed: u64) -> Result<DuelId> {
        if first.id == second.id {
            return Err(RuntimeError::DuplicatePlayer(first.id));
        }
        let state = DuelState::new(first, second, seed);
        let id = self.repo.create(&state)?;
        tracing::info!(
            duel = %id,
            first = %state.players[0].name,
            second = %state.players[1].name,
            seed,
            "duel created"
        );
        Ok(id)
    }

    /// Current state, including the live flags of an ongoing session.
    pub fn load_duel(&self, id: DuelId) -> Result<DuelState> {
        let session = self.session(id)?;
        let flags = session.lock().map_err(|_| RuntimeError::LockPoisoned)?;
        let mut state = self.load_stored(id)?;
        state.flags = *flags;
        if state.is_finished() {
            self.retire(id)?;
        }
        Ok(state)
    }

    pub fn list_duels(&self) -> Result<Vec<DuelId>> {
        Ok(self.repo.list()?)
    }

    /// Advisory snapshot for whoever acts next.
    pub fn advisory_request(&self, id: DuelId) -> Result<AdvisoryRequest> {
        let state = self.load_duel(id)?;
        Ok(AdvisoryRequest::for_active(&state, &self.rules))
    }

    /// Resolves one turn and persists the new state.
    ///
    /// `expected_turn` is the turn number the submitter saw. A mismatch means
    /// another submission landed first and the request is rejected. Nothing
    /// is stored when any check or the engine fails.
    pub fn submit_turn(
        &self,
        id: DuelId,
        submitter: &PlayerId,
        expected_turn: u32,
        actions: &[Action],
    ) -> Result<TurnRecord> {
        let session = self.session(id)?;
        let mut flags = session.lock().map_err(|_| RuntimeError::LockPoisoned)?;

        let mut state = self.load_stored(id)?;
        if state.turn != expected_turn {
            return Err(RuntimeError::StaleTurn {
                expected: expected_turn,
                actual: state.turn,
            });
        }

        let active = &state.active_player().id;
        if active != submitter {
            return Err(RuntimeError::NotActivePlayer {
                submitter: submitter.clone(),
                active: active.clone(),
            });
        }

        state.flags = *flags;
        let engine = DuelEngine::new(&self.rules, self.rng.as_ref());
        let outcome = engine.resolve_turn(&state, actions)?;

        self.repo.save(id, &outcome.state)?;
        *flags = outcome.state.flags;
        if outcome.state.is_finished() {
            self.retire(id)?;
        }

        tracing::info!(
            duel = %id,
            turn = outcome.record.turn,
            actor = %outcome.record.actor_name,
            finished = outcome.state.is_finished(),
            "turn submitted"
        );
        Ok(outcome.record)
    }

    /// Removes a duel and its session.
    pub fn delete_duel(&self, id: DuelId) -> Result<()> {
        self.repo.delete(id)?;
        self.retire(id)
    }

    fn load_stored(&self, id: DuelId) -> Result<DuelState> {
        self.repo.load(id)?.ok_or(RuntimeError::DuelNotFound(id))
    }

    /// Session of a stored duel. Unknown ids never get an entry.
    fn session(&self, id: DuelId) -> Result<Session> {
        let mut sessions = self
            .sessions
            .lock()
            .map_err(|_| RuntimeError::LockPoisoned)?;
        if let Some(session) = sessions.get(&id) {
            return Ok(Arc::clone(session));
        }
        if !self.repo.exists(id) {
            return Err(RuntimeError::DuelNotFound(id));
        }
        Ok(Arc::clone(sessions.entry(id).or_default()))
    }

    /// Drops the session of a finished duel. Its flags can no longer matter.
    fn retire(&self, id: DuelId) -> Result<()> {
        self.sessions
            .lock()
            .map_err(|_| RuntimeError::LockPoisoned)?
            .remove(&id);
        Ok(())
    }
}
