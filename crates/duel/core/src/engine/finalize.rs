//! End-of-turn regeneration, clamping, win check and record assembly.

use super::TurnOutcome;
use super::context::TurnContext;
use crate::action::RecordedAction;
use crate::state::{ResourceSnapshot, Side, TurnRecord};

pub(super) fn finish(
    mut ctx: TurnContext<'_>,
    actions: Vec<RecordedAction>,
    before: [ResourceSnapshot; 2],
) -> TurnOutcome {
    let actor = ctx.actor;
    let opponent = ctx.opponent();
    let rules = ctx.rules;
    let name = ctx.name(actor);

    let regen = ctx
        .player_mut(actor)
        .resources
        .mana
        .restore(rules.regen.mana);
    if regen > 0 {
        ctx.log(format!("{name} regains {regen} mana"));
    }
    if ctx.rested {
        let regen = ctx
            .player_mut(actor)
            .resources
            .action_points
            .restore(rules.regen.rest_action_points);
        ctx.log(format!("{name} recovers {regen} action points from resting"));
    }

    for side in Side::BOTH {
        let player = ctx.player_mut(side);
        player.resources.clamp_all();
        player.refresh_condition();
    }

    // mutual KO: the later check wins, so the actor takes it
    let mut winner = None;
    if ctx.player(actor).is_defeated() {
        winner = Some(opponent);
    }
    if ctx.player(opponent).is_defeated() {
        winner = Some(actor);
    }
    if let Some(side) = winner {
        let winner_name = ctx.name(side);
        ctx.log(format!("{winner_name} wins the duel"));
        ctx.state.winner = Some(ctx.player(side).id.clone());
    }

    let TurnContext {
        mut state, events, ..
    } = ctx;

    let record = TurnRecord {
        turn: state.turn,
        actor: state.player(actor).id.clone(),
        actor_name: name,
        actions,
        events: events.clone(),
        actor_before: before[actor.index()],
        actor_after: state.player(actor).snapshot(),
        opponent_before: before[opponent.index()],
        opponent_after: state.player(opponent).snapshot(),
    };

    state.history.push(record.clone());
    state.last_events = events;
    state.turn += 1;
    if state.winner.is_none() {
        state.active = opponent;
    }

    TurnOutcome { state, record }
}
