//! Rule table loader.

use std::path::Path;

use duel_core::RuleTable;

use crate::loaders::{LoadResult, read_file};

/// Loader for rule tables from TOML files.
pub struct RulesLoader;

impl RulesLoader {
    /// Load a rule table from a TOML file.
    ///
    /// Missing top-level keys keep their built-in values; a nested table such
    /// as `[tier_costs]` must be given in full. The result is validated.
    pub fn load(path: &Path) -> LoadResult<RuleTable> {
        let content = read_file(path)?;
        let rules = Self::parse(&content)?;
        tracing::debug!(path = %path.display(), "loaded rule table");
        Ok(rules)
    }

    /// Parse and validate TOML text.
    pub fn parse(content: &str) -> LoadResult<RuleTable> {
        let rules: RuleTable = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse rules TOML: {}", e))?;
        rules
            .validate()
            .map_err(|e| anyhow::anyhow!("Invalid rule table: {}", e))?;
        Ok(rules)
    }
}

#[cfg(test)]
mod tests {
    use duel_core::{Overspend, Tier};

    use super::*;

    #[test]
    fn empty_document_is_the_default_table() {
        assert_eq!(RulesLoader::parse("").unwrap(), RuleTable::default());
    }

    #[test]
    fn partial_override_keeps_the_rest() {
        let rules = RulesLoader::parse(
            r#"
            shield_amount = 40
            overspend = "reject"

            [tier_costs]
            household = 1
            small = 2
            medium = 3
            strong = 4
            "#,
        )
        .unwrap();

        assert_eq!(rules.shield_amount, 40);
        assert_eq!(rules.overspend, Overspend::Reject);
        assert_eq!(rules.tier_costs.get(Tier::Strong), 4);
        assert_eq!(rules.regen, RuleTable::default().regen);
    }

    #[test]
    fn invalid_table_is_rejected() {
        let err = RulesLoader::parse("dodge_success_min = 11").unwrap_err();
        assert!(err.to_string().contains("Invalid rule table"));
    }
}
