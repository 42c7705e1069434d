//! Character roster loader.

use std::path::Path;

use crate::loaders::{LoadResult, read_file};
use crate::roster::{CharacterTemplate, Roster};

/// Loader for character rosters from RON files.
pub struct RosterLoader;

impl RosterLoader {
    /// Load a roster from a RON file.
    ///
    /// RON format: `Vec<CharacterTemplate>`
    pub fn load(path: &Path) -> LoadResult<Roster> {
        let content = read_file(path)?;
        let roster = Self::parse(&content)?;
        tracing::debug!(path = %path.display(), templates = roster.len(), "loaded roster");
        Ok(roster)
    }

    pub fn parse(content: &str) -> LoadResult<Roster> {
        let templates: Vec<CharacterTemplate> = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse roster RON: {}", e))?;
        Roster::new(templates).map_err(|e| anyhow::anyhow!("Invalid roster: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use duel_core::{BonusKind, ItemKind, PowerTier, Race};

    use super::*;

    #[test]
    fn parses_minimal_and_full_templates() {
        let roster = RosterLoader::parse(
            r#"[
                (id: "ada", name: "Ada", race: human),
                (
                    id: "mort",
                    name: "Mort",
                    race: reaper,
                    power: archmage,
                    faith: 10,
                    health: Some(120),
                    bonuses: Some([(kind: magic_absorption, turns_remaining: None)]),
                    items: [(name: "salve", kind: heal, amount: 30)],
                ),
            ]"#,
        )
        .unwrap();

        let ada = roster.spawn("ada").unwrap();
        assert_eq!(ada.race, Race::Human);
        assert_eq!(ada.power, PowerTier::Adept);

        let mort = roster.spawn("mort").unwrap();
        assert_eq!(mort.power, PowerTier::Archmage);
        assert_eq!(mort.resources.health.max, 120);
        assert!(mort.has_bonus(BonusKind::MagicAbsorption));
        assert!(!mort.has_bonus(BonusKind::ControlImmunity));
        assert_eq!(mort.inventory.items[0].kind, ItemKind::Heal);
    }

    #[test]
    fn duplicate_ids_fail() {
        let err = RosterLoader::parse(
            r#"[(id: "a", name: "A", race: orc), (id: "a", name: "B", race: elf)]"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("more than once"));
    }
}
