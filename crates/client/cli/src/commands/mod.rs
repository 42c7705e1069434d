//! Command implementations for the duel CLI
//!
//! Each command is a separate module that implements its own CLI args and execution logic.

mod play;
mod roster;
mod rules;
mod show;

use std::path::PathBuf;

use anyhow::{Context, Result};
use duel_content::ContentFactory;
use duel_core::RuleTable;
use duel_runtime::RuntimeConfig;

pub use play::Play;
pub use roster::Roster;
pub use rules::Rules;
pub use show::Show;

/// Content directory given on the command line, or the bundled data.
fn content(dir: Option<PathBuf>) -> ContentFactory {
    match dir {
        Some(dir) => ContentFactory::new(dir),
        None => ContentFactory::bundled(),
    }
}

/// Rule table from `DUEL_RULES` if set, otherwise from the content directory.
fn load_rules(config: &RuntimeConfig, factory: &ContentFactory) -> Result<RuleTable> {
    match &config.rules_path {
        Some(path) => duel_content::RulesLoader::load(path)
            .with_context(|| format!("Failed to load rules from {}", path.display())),
        None => factory.load_rules(),
    }
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormat {
    /// Human-readable view
    Summary,
    /// Full JSON output
    Json,
}
