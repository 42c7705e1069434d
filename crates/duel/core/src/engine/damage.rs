//! Shared damage application procedure.
//!
//! Every hit that is not lethal goes through [`apply`], in this order:
//!
//! 1. magic absorption turns a magical hit into mana and stops
//! 2. a pending dodge rolls a d10 and halves the hit on success
//! 3. an ether shield swallows magical hits whole; any other shield soaks
//!    what it can and breaks at zero
//! 4. the rest reaches health
//! 5. a reflective target mirrors the health damage onto the attacker

use super::context::TurnContext;
use crate::state::{BonusKind, Element, Side, points};

/// A single incoming hit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) struct Hit {
    pub attacker: Side,
    pub target: Side,
    pub amount: u32,
    pub magical: bool,
}

/// How a hit was distributed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DamageReport {
    /// Mana gained by a target with magic absorption.
    pub absorbed_as_mana: u32,
    pub dodged: bool,
    pub shielded: u32,
    pub to_health: u32,
    pub reflected: u32,
}

pub(super) fn apply(ctx: &mut TurnContext<'_>, hit: Hit) -> DamageReport {
    let mut report = DamageReport::default();
    let target_name = ctx.name(hit.target);

    if hit.magical && ctx.player(hit.target).has_bonus(BonusKind::MagicAbsorption) {
        let gained = ctx
            .player_mut(hit.target)
            .resources
            .mana
            .restore(points(hit.amount));
        report.absorbed_as_mana = hit.amount;
        ctx.log(format!(
            "{target_name} absorbs the spell and gains {gained} mana"
        ));
        return report;
    }

    let mut damage = hit.amount;
    if ctx.state.flags.take_dodging(hit.target) {
        let roll = ctx.roll_d10();
        if roll >= ctx.rules.dodge_success_min {
            // integer halving, rounding half up
            damage = damage.div_ceil(2);
            report.dodged = true;
            ctx.log(format!(
                "{target_name} dodges (rolled {roll}), damage halved to {damage}"
            ));
        } else {
            ctx.log(format!("{target_name} fails to dodge (rolled {roll})"));
        }
    }

    let shield = ctx.player(hit.target).shield;
    if shield.is_up() && hit.magical && shield.element == Some(Element::Ether) {
        report.shielded = damage;
        ctx.log(format!(
            "{target_name}'s ether shield swallows {damage} magical damage"
        ));
        return report;
    }

    let target = ctx.player_mut(hit.target);
    let absorbed = target.shield.absorb(damage);
    let remainder = damage - absorbed;
    target.resources.health.spend(points(remainder));
    let broken = absorbed > 0 && !target.shield.is_up();
    report.shielded = absorbed;
    report.to_health = remainder;

    if absorbed > 0 {
        ctx.log(format!("{target_name}'s shield absorbs {absorbed}"));
    }
    if broken {
        ctx.log(format!("{target_name}'s shield breaks"));
    }
    if remainder > 0 {
        ctx.log(format!("{target_name} takes {remainder} damage"));
    }

    if remainder > 0 && ctx.player(hit.target).race.is_reflective() {
        ctx.player_mut(hit.attacker)
            .resources
            .health
            .spend(points(remainder));
        report.reflected = remainder;
        let attacker_name = ctx.name(hit.attacker);
        ctx.log(format!(
            "{target_name} reflects {remainder} damage back onto {attacker_name}"
        ));
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::race::Race;
    use crate::rng::FixedRoll;
    use crate::rules::RuleTable;
    use crate::state::{Bonus, Character, DuelState, Shield};

    fn context<'a>(
        rules: &'a RuleTable,
        rng: &'a FixedRoll,
        first: Character,
        second: Character,
    ) -> TurnContext<'a> {
        TurnContext::new(DuelState::new(first, second, 9), rules, rng)
    }

    fn hit(amount: u32, magical: bool) -> Hit {
        Hit {
            attacker: Side::First,
            target: Side::Second,
            amount,
            magical,
        }
    }

    #[test]
    fn shield_soaks_before_health() {
        let rules = RuleTable::default();
        let rng = FixedRoll(1);
        let target = Character::new("b", "Bran", Race::Human).with_shield(Shield {
            hp: 25,
            element: None,
        });
        let mut ctx = context(&rules, &rng, Character::new("a", "Ada", Race::Human), target);

        let report = apply(&mut ctx, hit(40, true));

        assert_eq!(report.shielded, 25);
        assert_eq!(report.to_health, 15);
        let target = ctx.player(Side::Second);
        assert_eq!(target.shield, Shield::NONE);
        assert_eq!(target.resources.health.current, 85);
    }

    #[test]
    fn ether_shield_ignores_magic_without_losing_hp() {
        let rules = RuleTable::default();
        let rng = FixedRoll(1);
        let ether = Shield {
            hp: 5,
            element: Some(Element::Ether),
        };
        let target = Character::new("b", "Bran", Race::Human).with_shield(ether);
        let mut ctx = context(&rules, &rng, Character::new("a", "Ada", Race::Human), target);

        apply(&mut ctx, hit(50, true));
        assert_eq!(ctx.player(Side::Second).shield, ether);
        assert_eq!(ctx.player(Side::Second).resources.health.current, 100);

        // physical hits still chip the ether shield
        apply(&mut ctx, hit(8, false));
        assert_eq!(ctx.player(Side::Second).shield, Shield::NONE);
        assert_eq!(ctx.player(Side::Second).resources.health.current, 97);
    }

    #[test]
    fn magic_absorption_converts_to_mana() {
        let rules = RuleTable::default();
        let rng = FixedRoll(1);
        let mut target = Character::new("b", "Bran", Race::Human)
            .with_bonus(Bonus::permanent(BonusKind::MagicAbsorption));
        target.resources.mana.current = 50;
        let mut ctx = context(&rules, &rng, Character::new("a", "Ada", Race::Human), target);

        let report = apply(&mut ctx, hit(20, true));

        assert_eq!(report.absorbed_as_mana, 20);
        assert_eq!(report.to_health, 0);
        assert_eq!(ctx.player(Side::Second).resources.mana.current, 70);
        assert_eq!(ctx.player(Side::Second).resources.health.current, 100);
    }

    #[test]
    fn successful_dodge_halves_rounding_up_and_clears_flag() {
        let rules = RuleTable::default();
        let rng = FixedRoll(6);
        let mut ctx = context(
            &rules,
            &rng,
            Character::new("a", "Ada", Race::Human),
            Character::new("b", "Bran", Race::Human),
        );
        ctx.state.flags.set_dodging(Side::Second, true);

        let report = apply(&mut ctx, hit(15, false));
        assert!(report.dodged);
        assert_eq!(report.to_health, 8);
        assert!(!ctx.state.flags.is_dodging(Side::Second));

        let report = apply(&mut ctx, hit(15, false));
        assert!(!report.dodged);
        assert_eq!(report.to_health, 15);
    }

    #[test]
    fn failed_dodge_still_consumes_flag() {
        let rules = RuleTable::default();
        let rng = FixedRoll(5);
        let mut ctx = context(
            &rules,
            &rng,
            Character::new("a", "Ada", Race::Human),
            Character::new("b", "Bran", Race::Human),
        );
        ctx.state.flags.set_dodging(Side::Second, true);

        let report = apply(&mut ctx, hit(15, false));
        assert!(!report.dodged);
        assert_eq!(report.to_health, 15);
        assert!(!ctx.state.flags.is_dodging(Side::Second));
    }

    #[test]
    fn faceless_reflects_health_damage_only() {
        let rules = RuleTable::default();
        let rng = FixedRoll(1);
        let target = Character::new("b", "Nobody", Race::Faceless).with_shield(Shield {
            hp: 10,
            element: None,
        });
        let mut ctx = context(&rules, &rng, Character::new("a", "Ada", Race::Human), target);

        let report = apply(&mut ctx, hit(30, true));

        assert_eq!(report.to_health, 20);
        assert_eq!(report.reflected, 20);
        assert_eq!(ctx.player(Side::Second).resources.health.current, 80);
        assert_eq!(ctx.player(Side::First).resources.health.current, 80);
    }

    #[test]
    fn self_inflicted_reflection_doubles() {
        let rules = RuleTable::default();
        let rng = FixedRoll(1);
        let mut ctx = context(
            &rules,
            &rng,
            Character::new("a", "Nobody", Race::Faceless),
            Character::new("b", "Bran", Race::Human),
        );

        let report = apply(
            &mut ctx,
            Hit {
                attacker: Side::First,
                target: Side::First,
                amount: 12,
                magical: false,
            },
        );

        assert_eq!(report.reflected, 12);
        assert_eq!(ctx.player(Side::First).resources.health.current, 76);
    }

    #[test]
    fn fully_shielded_hit_is_not_reflected() {
        let rules = RuleTable::default();
        let rng = FixedRoll(1);
        let target = Character::new("b", "Nobody", Race::Faceless).with_shield(Shield {
            hp: 25,
            element: None,
        });
        let mut ctx = context(&rules, &rng, Character::new("a", "Ada", Race::Human), target);

        let report = apply(&mut ctx, hit(20, false));

        assert_eq!(report.reflected, 0);
        assert_eq!(ctx.player(Side::First).resources.health.current, 100);
        assert_eq!(ctx.player(Side::Second).shield.hp, 5);
    }
}
