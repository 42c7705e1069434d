//! Duel script loader.

use std::path::Path;

use crate::loaders::{LoadResult, read_file};
use crate::script::DuelScript;

/// Loader for scripted duels from RON files.
pub struct ScriptLoader;

impl ScriptLoader {
    pub fn load(path: &Path) -> LoadResult<DuelScript> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("{} ({})", e, path.display()))
    }

    pub fn parse(content: &str) -> LoadResult<DuelScript> {
        let script: DuelScript = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse duel script RON: {}", e))?;
        if script.first == script.second {
            anyhow::bail!("Duel script '{}' pits '{}' against itself", script.name, script.first);
        }
        Ok(script)
    }
}
