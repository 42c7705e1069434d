//! Working copy and bookkeeping for a single turn resolution.

use super::errors::TurnError;
use crate::rng::{RngOracle, compute_seed};
use crate::rules::{Overspend, RuleTable};
use crate::state::{Character, DuelState, ResourceKind, Side};

/// Everything one `resolve_turn` call mutates. Dropped or returned whole, so a
/// failed resolution never leaks partial changes.
pub(super) struct TurnContext<'a> {
    pub rules: &'a RuleTable,
    rng: &'a dyn RngOracle,
    pub state: DuelState,
    pub actor: Side,
    pub events: Vec<String>,
    /// Set once a rest action has executed this turn.
    pub rested: bool,
    rolls: u32,
}

impl<'a> TurnContext<'a> {
    pub fn new(state: DuelState, rules: &'a RuleTable, rng: &'a dyn RngOracle) -> Self {
        let actor = state.active;
        Self {
            rules,
            rng,
            state,
            actor,
            events: Vec::new(),
            rested: false,
            rolls: 0,
        }
    }

    pub fn opponent(&self) -> Side {
        self.actor.opponent()
    }

    pub fn player(&self, side: Side) -> &Character {
        self.state.player(side)
    }

    pub fn player_mut(&mut self, side: Side) -> &mut Character {
        self.state.player_mut(side)
    }

    pub fn name(&self, side: Side) -> String {
        self.player(side).name.clone()
    }

    pub fn log(&mut self, event: String) {
        tracing::debug!(turn = self.state.turn, "{event}");
        self.events.push(event);
    }

    /// Draws a d10 for the next random check of this turn.
    pub fn roll_d10(&mut self) -> u32 {
        let seed = compute_seed(self.state.seed, self.state.turn, self.actor.index(), self.rolls);
        self.rolls += 1;
        self.rng.roll_d10(seed)
    }

    /// Extra action-point cost for the actor at its current health.
    pub fn wound_penalty(&self) -> i32 {
        self.rules
            .wound_penalty(self.player(self.actor).resources.health.current)
    }

    /// Charges the actor `base + surcharge` of a resource.
    ///
    /// Under [`Overspend::Reject`] the base cost must be available; otherwise
    /// the pool may go negative and is floored at turn end.
    pub fn pay(&mut self, resource: ResourceKind, base: i32, surcharge: i32) -> Result<(), TurnError> {
        let total = base.saturating_add(surcharge);
        if total <= 0 {
            return Ok(());
        }

        let strict = self.rules.overspend == Overspend::Reject;
        let actor = self.actor;
        let pool = self.player_mut(actor).resources.get_mut(resource);
        if strict && pool.current < base {
            return Err(TurnError::ResourceUnderflow {
                resource,
                required: base,
                available: pool.current,
            });
        }
        pool.spend(total);
        Ok(())
    }
}
