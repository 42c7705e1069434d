//! Terminal rendering of duel state, turn records and advice.

use console::style;
use duel_core::{Character, DuelState, ResourceSnapshot, TurnRecord};
use duel_runtime::Advice;

pub fn print_header(title: &str) {
    println!("{}", style(format!("=== {title} ===")).bold().green());
    println!();
}

pub fn print_record(record: &TurnRecord) {
    let actions = if record.actions.is_empty() {
        "nothing".to_string()
    } else {
        record
            .actions
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    };

    println!(
        "{} {} {}",
        style(format!("Turn {}:", record.turn)).bold().cyan(),
        style(&record.actor_name).bold(),
        style(format!("({actions})")).dim()
    );
    for event in &record.events {
        println!("  {event}");
    }
    println!(
        "  {} {}",
        style("actor   ").yellow(),
        delta(&record.actor_before, &record.actor_after)
    );
    println!(
        "  {} {}",
        style("opponent").yellow(),
        delta(&record.opponent_before, &record.opponent_after)
    );
    println!();
}

fn delta(before: &ResourceSnapshot, after: &ResourceSnapshot) -> String {
    format!(
        "health {} -> {}, mana {} -> {}, action points {} -> {}, shield {} -> {}",
        before.health,
        after.health,
        before.mana,
        after.mana,
        before.action_points,
        after.action_points,
        before.shield,
        after.shield
    )
}

pub fn print_character(character: &Character) {
    let r = &character.resources;
    println!(
        "  {} ({}, {} {}) [{}]",
        style(&character.name).bold(),
        character.id,
        character.power,
        character.race,
        character.condition
    );
    println!(
        "    health {}/{}, mana {}/{}, action points {}/{}, shield {}",
        r.health.current,
        r.health.max,
        r.mana.current,
        r.mana.max,
        r.action_points.current,
        r.action_points.max,
        character.shield.hp
    );
    if !character.penalties.is_empty() {
        let penalties: Vec<_> = character.penalties.iter().map(ToString::to_string).collect();
        println!("    penalties: {}", penalties.join(", "));
    }
}

pub fn print_summary(state: &DuelState) {
    println!("{}", style("Combatants:").bold().yellow());
    for player in &state.players {
        print_character(player);
    }
    println!();
    match state.winner_name() {
        Some(name) => println!("{} {}", style("Winner:").bold().green(), name),
        None => println!(
            "{} turn {}, {} to act",
            style("In progress:").bold().yellow(),
            state.turn,
            state.active_player().name
        ),
    }
}

pub fn print_advice(advice: &Advice) {
    match advice {
        Advice::Available(suggestion) => println!(
            "  {} {} ({}): {}",
            style("hint").magenta(),
            suggestion.suggested_action,
            suggestion.cost_estimate,
            suggestion.predicted_effect
        ),
        Advice::Unavailable { reason } => {
            println!("  {} {}", style("hint").magenta().dim(), style(reason).dim())
        }
    }
}
