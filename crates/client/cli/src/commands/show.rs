//! Read and inspect saved duels.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use duel_runtime::{DuelId, DuelRepository, FileDuelRepo, RuntimeConfig};

use super::OutputFormat;
use crate::presentation;

/// Show a saved duel
#[derive(Parser)]
pub struct Show {
    /// Duel to show (e.g. 3 or duel-3). Lists saved duels when omitted.
    #[arg(value_name = "DUEL")]
    id: Option<DuelId>,

    /// Custom data directory (defaults to platform-specific location)
    #[arg(short, long, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "summary")]
    format: OutputFormat,
}

impl Show {
    pub fn execute(self) -> Result<()> {
        let data_dir = match self.data_dir {
            Some(dir) => dir,
            None => RuntimeConfig::from_env().data_dir,
        };
        let repo = FileDuelRepo::new(&data_dir)
            .with_context(|| format!("Failed to open data directory: {}", data_dir.display()))?;

        let Some(id) = self.id else {
            let ids = repo.list()?;
            if ids.is_empty() {
                println!("No saved duels in {}", data_dir.display());
            }
            for id in ids {
                println!("{id}");
            }
            return Ok(());
        };

        let Some(state) = repo.load(id)? else {
            anyhow::bail!(
                "{id} not found\n\nHint: Check available duels with `duel show`"
            );
        };

        match self.format {
            OutputFormat::Summary => {
                presentation::print_header(&id.to_string());
                for record in &state.history {
                    presentation::print_record(record);
                }
                presentation::print_summary(&state);
                println!("{} {}", style("Stored in").dim(), style(data_dir.display()).dim());
            }
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&state)?),
        }

        Ok(())
    }
}
