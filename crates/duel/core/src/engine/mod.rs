//! Turn resolution pipeline.
//!
//! The [`DuelEngine`] is the authoritative reducer for [`DuelState`]. One call
//! to [`DuelEngine::resolve_turn`] runs the whole turn on a private copy:
//!
//! 1. status processing (regen, penalty ticks, skip/petrify/blind, cooldowns, DoT)
//! 2. action resolution, in submission order
//! 3. finalization (mana and rest regen, clamping, win check, record)
//!
//! The input state is never touched. Failed submissions leave nothing behind.

mod actions;
mod context;
mod damage;
mod errors;
mod finalize;
mod status;

pub use damage::DamageReport;
pub use errors::TurnError;

use arrayvec::ArrayVec;

use self::context::TurnContext;
use crate::action::{Action, RecordedAction};
use crate::config::DuelConfig;
use crate::rng::RngOracle;
use crate::rules::RuleTable;
use crate::state::{DuelState, Side, TurnRecord};

/// Surviving actions of one turn.
pub type ActionList = ArrayVec<Action, { DuelConfig::MAX_ACTIONS_PER_TURN }>;

/// New state plus the record that was appended to its history.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnOutcome {
    pub state: DuelState,
    pub record: TurnRecord,
}

/// Stateless turn resolver over a rule table and an entropy source.
#[derive(Clone, Copy)]
pub struct DuelEngine<'a> {
    rules: &'a RuleTable,
    rng: &'a dyn RngOracle,
}

impl<'a> DuelEngine<'a> {
    pub fn new(rules: &'a RuleTable, rng: &'a dyn RngOracle) -> Self {
        Self { rules, rng }
    }

    pub fn rules(&self) -> &'a RuleTable {
        self.rules
    }

    /// Resolves the active player's turn.
    ///
    /// Rejects submissions for a finished duel and lists longer than the
    /// per-turn limit. Under the reject overspend policy, an action whose base
    /// cost exceeds the available resource fails the whole turn.
    pub fn resolve_turn(
        &self,
        state: &DuelState,
        submitted: &[Action],
    ) -> Result<TurnOutcome, TurnError> {
        if let Some(winner) = &state.winner {
            return Err(TurnError::DuelFinished {
                winner: winner.clone(),
            });
        }

        let max = self.rules.max_actions_per_turn.min(DuelConfig::MAX_ACTIONS_PER_TURN);
        if submitted.len() > max {
            return Err(TurnError::TooManyActions {
                submitted: submitted.len(),
                max,
            });
        }
        let mut queue: ActionList = submitted.iter().copied().collect();

        let actor = state.active;
        tracing::debug!(
            turn = state.turn,
            actor = %state.player(actor).name,
            actions = queue.len(),
            "resolving turn"
        );

        let before = Side::BOTH.map(|side| state.player(side).snapshot());
        let mut ctx = TurnContext::new(state.clone(), self.rules, self.rng);

        let status = status::process(&mut ctx);
        let recorded = if status.skipped {
            vec![RecordedAction::TurnSkipped]
        } else {
            if status.blinded {
                queue.clear();
            } else if status.lose_last_action {
                queue.pop();
            }

            let mut executed = Vec::with_capacity(queue.len());
            for action in queue {
                if actions::resolve(&mut ctx, action)? {
                    executed.push(RecordedAction::Executed(action));
                }
            }
            executed
        };

        let outcome = finalize::finish(ctx, recorded, before);
        tracing::info!(
            turn = outcome.record.turn,
            actor = %outcome.record.actor_name,
            winner = ?outcome.state.winner_name(),
            "turn resolved"
        );
        Ok(outcome)
    }
}
