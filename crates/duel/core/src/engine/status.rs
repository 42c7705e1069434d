//! Start-of-turn status processing for the active player.
//!
//! Decisions about skipping, petrify and blind read the penalties the player
//! held when the turn began, before any duration is decremented. A penalty
//! with one turn left therefore still takes effect on the turn it expires.

use super::context::TurnContext;
use crate::state::{BonusKind, PenaltyKind, ResourceKind, effects::tick_duration};

/// What status processing decided about the submitted actions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(super) struct StatusOutcome {
    /// Nothing runs; the record holds only the skip marker.
    pub skipped: bool,
    /// Every submitted action is discarded.
    pub blinded: bool,
    /// The last submitted action is discarded.
    pub lose_last_action: bool,
}

pub(super) fn process(ctx: &mut TurnContext<'_>) -> StatusOutcome {
    let side = ctx.actor;
    // the dodge window ends when the dodger acts again
    ctx.state.flags.set_dodging(side, false);

    let present: Vec<PenaltyKind> = ctx
        .player(side)
        .penalties
        .iter()
        .map(|p| p.kind)
        .collect();

    apply_passive_bonuses(ctx);
    let controlled = tick_penalties(ctx, &present);
    tick_bonuses(ctx);

    let petrify_stacks = present
        .iter()
        .filter(|&&kind| kind == PenaltyKind::Petrify)
        .count();
    let blinded = present.contains(&PenaltyKind::Blind);

    ctx.player_mut(side).cooldowns.tick();
    apply_damage_over_time(ctx, &present);

    let name = ctx.name(side);
    let outcome = StatusOutcome {
        skipped: controlled || petrify_stacks >= 2,
        blinded,
        lose_last_action: petrify_stacks == 1,
    };

    if petrify_stacks >= 2 {
        ctx.log(format!("{name} is turned to stone and loses the turn"));
    } else if outcome.skipped {
        ctx.log(format!("{name} loses the turn"));
    } else if blinded {
        ctx.log(format!("{name} is blinded and cannot act"));
    } else if outcome.lose_last_action {
        ctx.log(format!("{name} is partly petrified and loses an action"));
    }

    outcome
}

fn apply_passive_bonuses(ctx: &mut TurnContext<'_>) {
    let side = ctx.actor;
    let name = ctx.name(side);
    let kinds: Vec<BonusKind> = ctx.player(side).bonuses.iter().map(|b| b.kind).collect();

    for kind in kinds {
        match kind {
            BonusKind::Regen { resource, amount } => {
                let gained = ctx
                    .player_mut(side)
                    .resources
                    .get_mut(resource)
                    .restore(amount);
                if gained > 0 {
                    ctx.log(format!("{name} regenerates {gained} {resource}"));
                }
            }
            BonusKind::EternalShield { amount } => {
                let shield = &mut ctx.player_mut(side).shield;
                if shield.hp == 0 {
                    shield.element = None;
                }
                shield.hp = shield.hp.saturating_add(amount);
                ctx.log(format!("eternal shield grants {name} {amount} shield"));
            }
            _ => {}
        }
    }
}

/// Decrements penalty durations. Returns true if a control penalty takes the turn.
fn tick_penalties(ctx: &mut TurnContext<'_>, present: &[PenaltyKind]) -> bool {
    let side = ctx.actor;
    let name = ctx.name(side);
    let immune = ctx.player(side).has_bonus(BonusKind::ControlImmunity);

    let mut controlled = false;
    for kind in present.iter().copied().filter(|k| k.skips_turn()) {
        if immune {
            ctx.log(format!("{name} resists {kind}"));
        } else {
            controlled = true;
        }
    }

    let mut expired = Vec::new();
    ctx.player_mut(side).penalties.retain_mut(|penalty| {
        if tick_duration(&mut penalty.turns_remaining) {
            expired.push(penalty.kind);
            false
        } else {
            true
        }
    });
    for kind in expired {
        ctx.log(format!("{kind} on {name} has worn off"));
    }

    controlled
}

fn tick_bonuses(ctx: &mut TurnContext<'_>) {
    let side = ctx.actor;
    let name = ctx.name(side);

    let mut expired = Vec::new();
    ctx.player_mut(side).bonuses.retain_mut(|bonus| {
        if tick_duration(&mut bonus.turns_remaining) {
            expired.push(bonus.kind);
            false
        } else {
            true
        }
    });
    for kind in expired {
        ctx.log(format!("{kind} on {name} has ended"));
    }
}

fn apply_damage_over_time(ctx: &mut TurnContext<'_>, present: &[PenaltyKind]) {
    let side = ctx.actor;
    let name = ctx.name(side);
    let dot = ctx.rules.dot;
    let player = ctx.player(side);
    let immune = player.has_bonus(BonusKind::PoisonImmunity);
    let resistant = player.has_bonus(BonusKind::PoisonResistance);
    let vulnerable = present.contains(&PenaltyKind::PoisonVulnerability);

    for kind in present.iter().copied().filter(|k| k.is_damage_over_time()) {
        let amount = match kind {
            PenaltyKind::Poison if immune => {
                ctx.log(format!("{name} is immune to poison"));
                continue;
            }
            PenaltyKind::Poison => {
                let mut amount = dot.poison;
                if resistant {
                    amount = (amount - dot.resistance_discount).max(0);
                }
                if vulnerable {
                    amount = amount.saturating_add(dot.vulnerability_surcharge);
                }
                amount
            }
            _ => dot.burn,
        };

        ctx.player_mut(side)
            .resources
            .get_mut(ResourceKind::Health)
            .spend(amount);
        ctx.log(format!("{kind} deals {amount} damage to {name}"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::race::Race;
    use crate::rng::FixedRoll;
    use crate::rules::RuleTable;
    use crate::state::{Bonus, Character, CooldownKey, DuelState, Penalty, Side};

    fn run(actor: Character) -> (StatusOutcome, DuelState, Vec<String>) {
        let rules = RuleTable::default();
        let rng = FixedRoll(1);
        let state = DuelState::new(actor, Character::new("b", "Bran", Race::Human), 3);
        let mut ctx = TurnContext::new(state, &rules, &rng);
        let outcome = process(&mut ctx);
        (outcome, ctx.state, ctx.events)
    }

    #[test]
    fn regen_is_capped_at_max() {
        let mut human = Character::new("a", "Ada", Race::Human);
        human.resources.health.current = 99;
        let (_, state, _) = run(human);
        assert_eq!(state.player(Side::First).resources.health.current, 100);
    }

    #[test]
    fn control_penalty_skips_and_expires() {
        let elf = Character::new("a", "Ada", Race::Elf)
            .with_penalty(Penalty::timed(PenaltyKind::Sleep, 1));
        let (outcome, state, events) = run(elf);
        assert!(outcome.skipped);
        assert!(state.player(Side::First).penalties.is_empty());
        assert!(events.iter().any(|e| e.contains("worn off")));
    }

    #[test]
    fn control_immunity_resists() {
        let reaper = Character::new("a", "Mort", Race::Reaper)
            .with_penalty(Penalty::timed(PenaltyKind::Hypnosis, 2));
        let (outcome, state, _) = run(reaper);
        assert!(!outcome.skipped);
        assert_eq!(
            state.player(Side::First).penalties[0].turns_remaining,
            Some(1)
        );
    }

    #[test]
    fn petrify_stack_count_decides_loss() {
        let one = Character::new("a", "Ada", Race::Human)
            .with_penalty(Penalty::timed(PenaltyKind::Petrify, 2));
        let (outcome, _, _) = run(one);
        assert!(!outcome.skipped);
        assert!(outcome.lose_last_action);

        let two = Character::new("a", "Ada", Race::Human)
            .with_penalty(Penalty::timed(PenaltyKind::Petrify, 2))
            .with_penalty(Penalty::timed(PenaltyKind::Petrify, 1));
        let (outcome, _, _) = run(two);
        assert!(outcome.skipped);
    }

    #[test]
    fn blind_reads_penalty_before_decrement() {
        let blinded = Character::new("a", "Ada", Race::Human)
            .with_penalty(Penalty::timed(PenaltyKind::Blind, 1));
        let (outcome, state, _) = run(blinded);
        assert!(outcome.blinded);
        assert!(state.player(Side::First).penalties.is_empty());
    }

    #[test]
    fn poison_modifiers() {
        // base 5
        let human = Character::new("a", "Ada", Race::Human)
            .with_bonuses(Vec::new())
            .with_penalty(Penalty::timed(PenaltyKind::Poison, 3));
        let (_, state, _) = run(human);
        assert_eq!(state.player(Side::First).resources.health.current, 95);

        // dwarf resistance: 5 - 3
        let dwarf = Character::new("a", "Borin", Race::Dwarf)
            .with_penalty(Penalty::timed(PenaltyKind::Poison, 3));
        let (_, state, _) = run(dwarf);
        assert_eq!(state.player(Side::First).resources.health.current, 98);

        // vulnerability: 5 + 3
        let weak = Character::new("a", "Ada", Race::Faceless)
            .with_penalty(Penalty::timed(PenaltyKind::Poison, 3))
            .with_penalty(Penalty::permanent(PenaltyKind::PoisonVulnerability));
        let (_, state, _) = run(weak);
        assert_eq!(state.player(Side::First).resources.health.current, 92);

        // gorgon immunity
        let gorgon = Character::new("a", "Medea", Race::Gorgon)
            .with_penalty(Penalty::timed(PenaltyKind::Poison, 3));
        let (_, state, events) = run(gorgon);
        assert_eq!(state.player(Side::First).resources.health.current, 100);
        assert!(events.iter().any(|e| e.contains("immune")));
    }

    #[test]
    fn damage_over_time_stacks_per_instance() {
        let burning = Character::new("a", "Ada", Race::Faceless)
            .with_penalty(Penalty::timed(PenaltyKind::Burn, 3))
            .with_penalty(Penalty::timed(PenaltyKind::Burn, 1))
            .with_penalty(Penalty::timed(PenaltyKind::Poison, 2));
        let (_, state, _) = run(burning);
        assert_eq!(state.player(Side::First).resources.health.current, 100 - 4 - 4 - 5);
        assert_eq!(state.player(Side::First).penalties.len(), 2);
    }

    #[test]
    fn cooldowns_tick_down() {
        let mut elf = Character::new("a", "Ada", Race::Elf);
        elf.cooldowns.set(CooldownKey::Prayer, 2);
        elf.cooldowns.set(CooldownKey::Item, 1);
        let (_, state, _) = run(elf);
        let cooldowns = &state.player(Side::First).cooldowns;
        assert_eq!(cooldowns.remaining(CooldownKey::Prayer), 1);
        assert!(cooldowns.is_ready(CooldownKey::Item));
    }

    #[test]
    fn timed_bonus_expires() {
        let orc = Character::new("a", "Grom", Race::Orc)
            .with_bonus(Bonus::timed(BonusKind::Rage, 1));
        let (_, state, _) = run(orc);
        assert!(!state.player(Side::First).has_bonus(BonusKind::Rage));
    }

    #[test]
    fn eternal_shield_adds_hp() {
        let devout = Character::new("a", "Ada", Race::Human)
            .with_bonus(Bonus::timed(BonusKind::EternalShield { amount: 10 }, 3));
        let (_, state, _) = run(devout);
        let player = state.player(Side::First);
        assert_eq!(player.shield.hp, 10);
        assert_eq!(player.bonuses.last().and_then(|b| b.turns_remaining), Some(2));
    }
}
