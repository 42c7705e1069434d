use duel_core::{
    Action, Character, DuelEngine, DuelState, PcgRng, PenaltyKind, PrayerEffect, Race, RaceAbility,
    RecordedAction, RuleTable, Side, Tier,
};
use strum::IntoEnumIterator;

/// Picks a plausible action pair for the active player from the turn number.
fn script(turn: u32, race: Race) -> Vec<Action> {
    let abilities = race.abilities();
    match turn % 5 {
        0 => vec![Action::Cast { tier: Tier::Medium }, Action::Dodge],
        1 => vec![
            Action::RaceAbility {
                ability: abilities[(turn as usize / 5) % abilities.len()],
            },
            Action::Cast { tier: Tier::Small },
        ],
        2 => vec![Action::Shield { element: None }, Action::Rest],
        3 => vec![
            Action::Prayer {
                effect: PrayerEffect::EternalShield,
            },
            Action::Cast { tier: Tier::Strong },
        ],
        _ => vec![Action::RemoveEffect, Action::Cast { tier: Tier::Household }],
    }
}

fn assert_pools_in_bounds(state: &DuelState) {
    for side in Side::BOTH {
        let player = state.player(side);
        for pool in [
            player.resources.health,
            player.resources.mana,
            player.resources.action_points,
        ] {
            assert!(
                (0..=pool.max).contains(&pool.current),
                "{} out of bounds: {pool}",
                player.name
            );
        }
        assert!(player.shield.is_up() || player.shield.element.is_none());
        assert!(player.penalties.iter().all(|p| p.turns_remaining != Some(0)));
        assert!(player.bonuses.iter().all(|b| b.turns_remaining != Some(0)));
    }
}

#[test]
fn every_race_pairing_keeps_pools_in_bounds() {
    let rules = RuleTable::default();
    let rng = PcgRng;
    let engine = DuelEngine::new(&rules, &rng);

    for (seed, (left, right)) in Race::iter()
        .flat_map(|l| Race::iter().map(move |r| (l, r)))
        .enumerate()
    {
        let mut state = DuelState::new(
            Character::new("left", "Left", left),
            Character::new("right", "Right", right),
            seed as u64,
        );

        for _ in 0..60 {
            if state.is_finished() {
                break;
            }
            let race = state.active_player().race;
            let outcome = engine
                .resolve_turn(&state, &script(state.turn, race))
                .expect("scripted turns are always valid");
            assert_pools_in_bounds(&outcome.state);
            assert_eq!(outcome.state.history.last(), Some(&outcome.record));
            state = outcome.state;
        }

        for (index, record) in state.history.iter().enumerate() {
            assert_eq!(record.turn, index as u32 + 1);
        }
    }
}

#[test]
fn stone_gaze_twice_costs_the_whole_next_turn() {
    let rules = RuleTable::default();
    let rng = PcgRng;
    let engine = DuelEngine::new(&rules, &rng);
    let gaze = Action::RaceAbility {
        ability: RaceAbility::StoneGaze,
    };
    let state = DuelState::new(
        Character::new("g", "Medea", Race::Gorgon),
        Character::new("h", "Hal", Race::Human),
        11,
    );

    let outcome = engine.resolve_turn(&state, &[gaze, gaze]).unwrap();
    let petrified = outcome
        .state
        .player(Side::Second)
        .penalties
        .iter()
        .filter(|p| p.kind == PenaltyKind::Petrify)
        .count();
    assert_eq!(petrified, 2);

    let outcome = engine
        .resolve_turn(&outcome.state, &[Action::Cast { tier: Tier::Small }])
        .unwrap();
    assert_eq!(outcome.record.actions, vec![RecordedAction::TurnSkipped]);
    assert_eq!(outcome.state.player(Side::First).resources.health.current, 100);
}

#[test]
fn single_stone_gaze_lasts_two_turns() {
    let rules = RuleTable::default();
    let rng = PcgRng;
    let engine = DuelEngine::new(&rules, &rng);
    let gaze = Action::RaceAbility {
        ability: RaceAbility::StoneGaze,
    };
    let pair = [Action::Cast { tier: Tier::Small }, Action::Rest];
    let mut state = DuelState::new(
        Character::new("g", "Medea", Race::Gorgon),
        Character::new("h", "Hal", Race::Human),
        12,
    );

    state = engine.resolve_turn(&state, &[gaze]).unwrap().state;
    for _ in 0..2 {
        let outcome = engine.resolve_turn(&state, &pair).unwrap();
        assert_eq!(
            outcome.record.actions,
            vec![RecordedAction::Executed(pair[0])]
        );
        state = engine.resolve_turn(&outcome.state, &[]).unwrap().state;
    }

    let outcome = engine.resolve_turn(&state, &pair).unwrap();
    assert_eq!(outcome.record.actions.len(), 2);
}

#[test]
fn dodge_flag_expires_when_dodger_acts_again() {
    let rules = RuleTable::default();
    let rng = PcgRng;
    let engine = DuelEngine::new(&rules, &rng);
    let state = DuelState::new(
        Character::new("a", "Ada", Race::Human),
        Character::new("b", "Bran", Race::Human),
        5,
    );

    let after_dodge = engine.resolve_turn(&state, &[Action::Dodge]).unwrap().state;
    assert!(after_dodge.flags.is_dodging(Side::First));

    let after_pass = engine.resolve_turn(&after_dodge, &[]).unwrap().state;
    assert!(after_pass.flags.is_dodging(Side::First));

    let back = engine.resolve_turn(&after_pass, &[]).unwrap().state;
    assert!(!back.flags.is_dodging(Side::First));
}

#[test]
fn hypnosis_from_mind_shatter_skips_exactly_one_turn() {
    let rules = RuleTable::default();
    let rng = PcgRng;
    let engine = DuelEngine::new(&rules, &rng);
    let shatter = Action::RaceAbility {
        ability: RaceAbility::MindShatter,
    };
    let state = DuelState::new(
        Character::new("f", "Nobody", Race::Faceless),
        Character::new("e", "Elra", Race::Elf),
        21,
    );

    let state = engine.resolve_turn(&state, &[shatter]).unwrap().state;
    let skipped = engine
        .resolve_turn(&state, &[Action::Cast { tier: Tier::Small }])
        .unwrap();
    assert!(skipped.record.was_skipped());

    let state = engine.resolve_turn(&skipped.state, &[]).unwrap().state;
    let acted = engine
        .resolve_turn(&state, &[Action::Cast { tier: Tier::Small }])
        .unwrap();
    assert!(!acted.record.was_skipped());
}

#[test]
fn engine_never_mutates_its_input() {
    let rules = RuleTable::default();
    let rng = PcgRng;
    let engine = DuelEngine::new(&rules, &rng);
    let state = DuelState::new(
        Character::new("d", "Azazel", Race::Demon),
        Character::new("o", "Grom", Race::Orc),
        99,
    );
    let copy = state.clone();

    let hellfire = Action::RaceAbility {
        ability: RaceAbility::Hellfire,
    };
    engine
        .resolve_turn(&state, &[hellfire, Action::Cast { tier: Tier::Strong }])
        .unwrap();
    assert_eq!(state, copy);
}
