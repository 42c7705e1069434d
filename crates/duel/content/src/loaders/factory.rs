//! Content factory for loading duel content from a data directory.

use std::path::{Path, PathBuf};

use duel_core::RuleTable;

use crate::loaders::{LoadResult, RosterLoader, RulesLoader, ScriptLoader};
use crate::roster::Roster;
use crate::script::DuelScript;

/// Content factory that loads all duel content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── rules.toml
/// ├── roster.ron
/// └── scripts/
///     ├── opening.ron
///     └── reaper.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Directory shipped with this crate.
    pub fn bundled() -> Self {
        Self::new(Path::new(env!("CARGO_MANIFEST_DIR")).join("data"))
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Load the rule table from `rules.toml`, or the built-in table if the
    /// file does not exist.
    pub fn load_rules(&self) -> LoadResult<RuleTable> {
        let path = self.data_dir.join("rules.toml");
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no rules file, using built-in table");
            return Ok(RuleTable::default());
        }
        RulesLoader::load(&path)
    }

    /// Load the roster from `roster.ron`.
    pub fn load_roster(&self) -> LoadResult<Roster> {
        RosterLoader::load(&self.data_dir.join("roster.ron"))
    }

    /// Load `scripts/<name>.ron`.
    pub fn load_script(&self, name: &str) -> LoadResult<DuelScript> {
        let path = self.data_dir.join("scripts").join(format!("{name}.ron"));
        ScriptLoader::load(&path)
    }
}
