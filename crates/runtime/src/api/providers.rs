//! Asynchronous abstraction for the optional advisory collaborator.
//!
//! Runtime users plug in [`AdvisoryProvider`] implementations so a duel can
//! offer hints from a text generator, a scripted fixture, or the built-in
//! [`HeuristicAdvisor`]. Nothing here feeds back into turn resolution.
use std::fmt::Write as _;

use async_trait::async_trait;
use duel_core::{
    Action, Bonus, Character, Condition, CooldownKey, Cooldowns, DuelState, Penalty, PowerTier,
    PrayerEffect, Race, ResourcePool, RuleTable, Shield, Tier,
};
use strum::IntoEnumIterator;
use thiserror::Error;

/// Read-only stats of one combatant handed to a provider.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct CombatantView {
    pub name: String,
    pub race: Race,
    pub power: PowerTier,
    pub faith: i8,
    pub health: ResourcePool,
    pub mana: ResourcePool,
    pub action_points: ResourcePool,
    pub shield: Shield,
    pub condition: Condition,
    pub bonuses: Vec<Bonus>,
    pub penalties: Vec<Penalty>,
    pub cooldowns: Cooldowns,
    pub items: usize,
}

impl From<&Character> for CombatantView {
    fn from(character: &Character) -> Self {
        Self {
            name: character.name.clone(),
            race: character.race,
            power: character.power,
            faith: character.faith,
            health: character.resources.health,
            mana: character.resources.mana,
            action_points: character.resources.action_points,
            shield: character.shield,
            condition: character.condition,
            bonuses: character.bonuses.clone(),
            penalties: character.penalties.clone(),
            cooldowns: character.cooldowns.clone(),
            items: character.inventory.len(),
        }
    }
}

/// Snapshot sent to an advisory provider: both combatants and the rules text.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct AdvisoryRequest {
    pub turn: u32,
    pub player: CombatantView,
    pub opponent: CombatantView,
    pub rules_text: String,
}

impl AdvisoryRequest {
    /// Builds a request from the point of view of the active player.
    pub fn for_active(state: &DuelState, rules: &RuleTable) -> Self {
        let active = state.active;
        Self {
            turn: state.turn,
            player: state.player(active).into(),
            opponent: state.player(active.opponent()).into(),
            rules_text: rules.describe(),
        }
    }

    /// Plain-text rendering for text-generation providers.
    pub fn prompt(&self) -> String {
        let mut text = String::new();
        for (label, view) in [("You", &self.player), ("Opponent", &self.opponent)] {
            let _ = writeln!(
                text,
                "{label}: {} ({}, {}), health {}/{}, mana {}/{}, action points {}/{}, shield {}.",
                view.name,
                view.race,
                view.power,
                view.health.current,
                view.health.max,
                view.mana.current,
                view.mana.max,
                view.action_points.current,
                view.action_points.max,
                view.shield.hp,
            );
        }
        let _ = writeln!(text, "Turn {}. Rules:", self.turn);
        text.push_str(&self.rules_text);
        text
    }
}

/// Free-form suggestion returned by a provider.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Suggestion {
    pub suggested_action: String,
    pub cost_estimate: String,
    pub predicted_effect: String,
}

#[derive(Debug, Error)]
pub enum AdvisoryError {
    #[error("advisory provider failed: {0}")]
    Provider(String),

    #[error("advisory provider did not answer within {0:?}")]
    Timeout(std::time::Duration),

    #[error("advisory provider task aborted")]
    Aborted(#[source] tokio::task::JoinError),
}

/// Trait for producing a suggestion from a duel snapshot.
///
/// Implementations may be slow, non-deterministic or absent altogether.
/// Callers go through [`crate::Advisor`], which bounds the wait and turns
/// every failure into "no suggestion available".
#[async_trait]
pub trait AdvisoryProvider: Send + Sync {
    async fn suggest(&self, request: &AdvisoryRequest) -> Result<Suggestion, AdvisoryError>;
}

/// Deterministic provider that picks a sensible action from the rule table.
///
/// Priorities: finish the opponent, pray when badly hurt, shield against a
/// caster, otherwise cast the strongest affordable spell or rest.
pub struct HeuristicAdvisor {
    rules: RuleTable,
}

impl HeuristicAdvisor {
    pub fn new(rules: RuleTable) -> Self {
        Self { rules }
    }

    fn damage(&self, view: &CombatantView, tier: Tier) -> u32 {
        self.rules.tier_damage.get(view.power, tier)
    }

    /// Strongest tier the player can pay for right now.
    fn best_cast(&self, view: &CombatantView) -> Option<Tier> {
        Tier::iter().rev().find(|&tier| {
            let cost = self.rules.tier_costs.get(tier) as i32;
            let ready = tier != Tier::Strong || view.cooldowns.is_ready(CooldownKey::StrongCast);
            ready && view.mana.current >= cost
        })
    }

    fn recommend(&self, request: &AdvisoryRequest) -> Suggestion {
        let me = &request.player;
        let foe = &request.opponent;
        let wound = self.rules.wound_penalty(me.health.current);

        if let Some(tier) = self.best_cast(me) {
            let damage = self.damage(me, tier);
            if damage as i32 >= foe.health.current + foe.shield.hp as i32 {
                return cast(&self.rules, tier, damage, &foe.name, " and should end the duel");
            }
        }

        let prayer_cost = self.rules.costs.prayer + wound;
        if me.health.percent() <= 25
            && me.faith > 0
            && me.cooldowns.is_ready(CooldownKey::Prayer)
            && me.action_points.current >= prayer_cost
        {
            return Suggestion {
                suggested_action: Action::Prayer {
                    effect: PrayerEffect::HealHealth,
                }
                .to_string(),
                cost_estimate: format!("{prayer_cost} action points"),
                predicted_effect: format!(
                    "restores health to {} if the prayer is heard",
                    me.health.max
                ),
            };
        }

        let shield_cost = self.rules.tier_costs.medium as i32;
        let threat = self.best_cast(foe).map(|tier| self.damage(foe, tier));
        if let Some(threat) = threat
            && !me.shield.is_up()
            && threat >= self.rules.shield_amount
            && me.mana.current >= shield_cost + self.rules.tier_costs.small as i32
        {
            return Suggestion {
                suggested_action: Action::Shield { element: None }.to_string(),
                cost_estimate: format!("{shield_cost} mana"),
                predicted_effect: format!(
                    "absorbs up to {} of the {threat} damage {} can deal",
                    self.rules.shield_amount, foe.name
                ),
            };
        }

        if let Some(tier) = self.best_cast(me) {
            let damage = self.damage(me, tier);
            return cast(&self.rules, tier, damage, &foe.name, "");
        }

        Suggestion {
            suggested_action: Action::Rest.to_string(),
            cost_estimate: "nothing".to_string(),
            predicted_effect: format!(
                "recovers {} action points and {} mana at the end of the turn",
                self.rules.regen.rest_action_points, self.rules.regen.mana
            ),
        }
    }
}

fn cast(rules: &RuleTable, tier: Tier, damage: u32, target: &str, suffix: &str) -> Suggestion {
    Suggestion {
        suggested_action: Action::Cast { tier }.to_string(),
        cost_estimate: format!("{} mana", rules.tier_costs.get(tier)),
        predicted_effect: format!("deals about {damage} damage to {target}{suffix}"),
    }
}

#[async_trait]
impl AdvisoryProvider for HeuristicAdvisor {
    async fn suggest(&self, request: &AdvisoryRequest) -> Result<Suggestion, AdvisoryError> {
        Ok(self.recommend(request))
    }
}

#[cfg(test)]
mod tests {
    use duel_core::{Character, Race};

    use super::*;

    fn request(player: Character, opponent: Character) -> AdvisoryRequest {
        let state = DuelState::new(player, opponent, 3);
        AdvisoryRequest::for_active(&state, &RuleTable::default())
    }

    #[tokio::test]
    async fn suggests_finishing_cast() {
        let mut foe = Character::new("b", "Bran", Race::Orc);
        foe.resources.health.current = 5;
        let advisor = HeuristicAdvisor::new(RuleTable::default());

        let suggestion = advisor
            .suggest(&request(Character::new("a", "Ada", Race::Human), foe))
            .await
            .unwrap();

        assert_eq!(suggestion.suggested_action, "strong spell");
        assert!(suggestion.predicted_effect.contains("end the duel"));
    }

    #[tokio::test]
    async fn rests_when_out_of_mana() {
        let mut me = Character::new("a", "Ada", Race::Human);
        me.resources.mana.current = 0;
        let advisor = HeuristicAdvisor::new(RuleTable::default());

        let suggestion = advisor
            .suggest(&request(me, Character::new("b", "Bran", Race::Orc)))
            .await
            .unwrap();

        assert_eq!(suggestion.suggested_action, "rest");
        assert_eq!(suggestion.cost_estimate, "nothing");
    }

    #[test]
    fn prompt_lists_both_sides_and_rules() {
        let req = request(
            Character::new("a", "Ada", Race::Human),
            Character::new("b", "Bran", Race::Orc),
        );
        let prompt = req.prompt();
        assert!(prompt.starts_with("You: Ada"));
        assert!(prompt.contains("Opponent: Bran"));
        assert!(prompt.contains("Passive mana regen"));
    }
}
