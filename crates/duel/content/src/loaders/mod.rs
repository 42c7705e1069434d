//! Content loaders for reading duel data from files.
//!
//! Rule tables come from TOML; rosters and scripts from RON.

pub mod factory;
pub mod roster;
pub mod rules;
pub mod script;

pub use factory::ContentFactory;
pub use roster::RosterLoader;
pub use rules::RulesLoader;
pub use script::ScriptLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
