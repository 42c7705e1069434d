//! Action resolver: one function per action kind plus the generic race
//! ability executor.

use super::context::TurnContext;
use super::damage::{self, Hit};
use super::errors::TurnError;
use crate::action::{Action, PrayerEffect, Tier};
use crate::race::{AbilityDamage, RaceAbility};
use crate::state::{
    Bonus, BonusKind, CooldownKey, Element, ItemKind, Penalty, PenaltyKind, ResourceKind, points,
};

/// Resolves one action for the active player.
///
/// Returns `Ok(false)` when the action was refused (cooldown still running,
/// or an ability from another race's catalog). Refused actions cost nothing
/// and are not recorded.
pub(super) fn resolve(ctx: &mut TurnContext<'_>, action: Action) -> Result<bool, TurnError> {
    let actor = ctx.actor;
    let name = ctx.name(actor);

    if let Some(key) = action.cooldown_key() {
        let remaining = ctx.player(actor).cooldowns.remaining(key);
        if remaining > 0 {
            ctx.log(format!(
                "{name} cannot use {action}: on cooldown for {remaining} more turns"
            ));
            return Ok(false);
        }
    }

    match action {
        Action::Cast { tier } => cast(ctx, tier)?,
        Action::Shield { element } => raise_shield(ctx, element)?,
        Action::Dodge => dodge(ctx)?,
        Action::UseItem => use_item(ctx)?,
        Action::Prayer { effect } => pray(ctx, effect)?,
        Action::RemoveEffect => remove_effect(ctx),
        Action::Rest => {
            ctx.rested = true;
            ctx.log(format!("{name} rests"));
        }
        Action::RaceAbility { ability } => {
            if ability.race() != ctx.player(actor).race {
                let race = ctx.player(actor).race;
                ctx.log(format!("{name} cannot use {ability}: not a {race} ability"));
                return Ok(false);
            }
            use_ability(ctx, ability)?;
        }
    }

    Ok(true)
}

fn cast(ctx: &mut TurnContext<'_>, tier: Tier) -> Result<(), TurnError> {
    let actor = ctx.actor;
    let opponent = ctx.opponent();
    let rules = ctx.rules;

    ctx.pay(ResourceKind::Mana, points(rules.tier_costs.get(tier)), 0)?;

    let caster = ctx.player(actor);
    let mut amount = rules.tier_damage.get(caster.power, tier);
    if ctx.player(opponent).has_penalty(PenaltyKind::Vulnerable) {
        amount = amount.saturating_add(rules.bonuses.vulnerable);
    }
    if caster.has_bonus(BonusKind::BattleMagic) {
        amount = amount.saturating_add(rules.bonuses.battle_magic);
    }
    if caster.has_bonus(BonusKind::Rage) {
        amount = amount.saturating_add(rules.bonuses.rage);
    }

    let name = ctx.name(actor);
    ctx.log(format!("{name} casts a {tier} spell for {amount}"));
    damage::apply(
        ctx,
        Hit {
            attacker: actor,
            target: opponent,
            amount,
            magical: true,
        },
    );

    if tier == Tier::Strong {
        ctx.player_mut(actor)
            .cooldowns
            .set(CooldownKey::StrongCast, rules.cooldowns.strong);
    }
    Ok(())
}

fn raise_shield(ctx: &mut TurnContext<'_>, element: Option<Element>) -> Result<(), TurnError> {
    let actor = ctx.actor;
    let rules = ctx.rules;
    ctx.pay(ResourceKind::Mana, points(rules.tier_costs.get(Tier::Medium)), 0)?;

    let shield = &mut ctx.player_mut(actor).shield;
    shield.hp = shield.hp.saturating_add(rules.shield_amount);
    shield.element = element;
    let total = *shield;

    let name = ctx.name(actor);
    ctx.log(format!(
        "{name} raises a shield (+{}), now {total}",
        rules.shield_amount
    ));
    Ok(())
}

fn dodge(ctx: &mut TurnContext<'_>) -> Result<(), TurnError> {
    let actor = ctx.actor;
    let wound = ctx.wound_penalty();
    ctx.pay(ResourceKind::ActionPoints, ctx.rules.costs.dodge, wound)?;
    ctx.state.flags.set_dodging(actor, true);

    let name = ctx.name(actor);
    ctx.log(format!("{name} prepares to dodge"));
    Ok(())
}

fn use_item(ctx: &mut TurnContext<'_>) -> Result<(), TurnError> {
    let actor = ctx.actor;
    let rules = ctx.rules;
    let wound = ctx.wound_penalty();
    ctx.pay(ResourceKind::ActionPoints, rules.costs.item, wound)?;

    let player = ctx.player_mut(actor);
    player.cooldowns.set(CooldownKey::Item, rules.cooldowns.item);
    let item = player.inventory.take_first();

    let name = ctx.name(actor);
    let Some(item) = item else {
        ctx.log(format!("{name} reaches for an item but the bag is empty"));
        return Ok(());
    };

    ctx.log(format!("{name} uses {item}"));
    match item.kind {
        ItemKind::Heal => {
            let healed = ctx
                .player_mut(actor)
                .resources
                .health
                .restore(points(item.amount));
            ctx.log(format!("{name} recovers {healed} health"));
        }
        ItemKind::Damage => {
            let opponent = ctx.opponent();
            damage::apply(
                ctx,
                Hit {
                    attacker: actor,
                    target: opponent,
                    amount: item.amount,
                    magical: false,
                },
            );
        }
    }
    Ok(())
}

fn pray(ctx: &mut TurnContext<'_>, effect: PrayerEffect) -> Result<(), TurnError> {
    let actor = ctx.actor;
    let rules = ctx.rules;
    let wound = ctx.wound_penalty();
    ctx.pay(ResourceKind::ActionPoints, rules.costs.prayer, wound)?;
    ctx.player_mut(actor)
        .cooldowns
        .set(CooldownKey::Prayer, rules.cooldowns.prayer);

    let roll = ctx.roll_d10();
    let faith = ctx.player(actor).faith;
    let name = ctx.name(actor);
    if !rules.prayer_succeeds(faith, roll) {
        ctx.log(format!(
            "{name} prays for {effect} but is not heard (faith {faith}, rolled {roll})"
        ));
        return Ok(());
    }

    let player = ctx.player_mut(actor);
    match effect {
        PrayerEffect::EternalShield => player.bonuses.push(Bonus::timed(
            BonusKind::EternalShield {
                amount: rules.eternal_shield_amount,
            },
            rules.eternal_shield_turns,
        )),
        PrayerEffect::HealHealth => {
            player.resources.health.refill();
        }
        PrayerEffect::RestoreMana => {
            player.resources.mana.refill();
        }
    }
    ctx.log(format!("{name}'s prayer for {effect} is answered (rolled {roll})"));
    Ok(())
}

fn remove_effect(ctx: &mut TurnContext<'_>) {
    let actor = ctx.actor;
    let name = ctx.name(actor);
    let penalties = &mut ctx.player_mut(actor).penalties;
    if penalties.is_empty() {
        ctx.log(format!("{name} has no effect to remove"));
        return;
    }
    let removed = penalties.remove(0);
    ctx.log(format!("{name} shakes off {removed}"));
}

/// Generic executor for catalog abilities.
///
/// Order: costs, cooldown, damage, inflicted penalty, self-heal, granted bonus.
fn use_ability(ctx: &mut TurnContext<'_>, ability: RaceAbility) -> Result<(), TurnError> {
    let actor = ctx.actor;
    let opponent = ctx.opponent();
    let spec = ability.spec();

    ctx.pay(ResourceKind::Mana, spec.cost.mana, 0)?;
    if spec.cost.action_points > 0 {
        let wound = ctx.wound_penalty();
        ctx.pay(ResourceKind::ActionPoints, spec.cost.action_points, wound)?;
    }
    ctx.pay(ResourceKind::Health, spec.cost.health, 0)?;
    if spec.cooldown > 0 {
        ctx.player_mut(actor)
            .cooldowns
            .set(CooldownKey::Ability(ability), spec.cooldown);
    }

    let name = ctx.name(actor);
    let target_name = ctx.name(opponent);
    ctx.log(format!("{name} uses {ability}"));

    let effect = spec.effect;
    match effect.damage {
        AbilityDamage::None => {}
        AbilityDamage::Flat(amount) => {
            damage::apply(
                ctx,
                Hit {
                    attacker: actor,
                    target: opponent,
                    amount,
                    magical: effect.magical,
                },
            );
        }
        AbilityDamage::Lethal => {
            ctx.player_mut(opponent).resources.health.current = 0;
            ctx.log(format!("{target_name} is struck down"));
        }
    }

    if let Some((kind, turns)) = effect.inflicts {
        let penalty = Penalty {
            kind,
            turns_remaining: turns,
        };
        ctx.player_mut(opponent).penalties.push(penalty);
        ctx.log(format!("{target_name} suffers {penalty}"));
    }

    if effect.self_heal > 0 {
        let healed = ctx
            .player_mut(actor)
            .resources
            .health
            .restore(points(effect.self_heal));
        ctx.log(format!("{name} recovers {healed} health"));
    }

    if let Some((kind, turns)) = effect.grants {
        ctx.player_mut(actor).bonuses.push(Bonus {
            kind,
            turns_remaining: turns,
        });
        ctx.log(format!("{name} gains {kind}"));
    }

    Ok(())
}
