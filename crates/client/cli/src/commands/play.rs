//! Play a scripted duel through the turn submission service.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use duel_runtime::{
    Advisor, DuelRepository, DuelService, FileDuelRepo, HeuristicAdvisor, InMemoryDuelRepo,
    RuntimeConfig,
};

use super::{OutputFormat, content, load_rules};
use crate::presentation;

/// Play a scripted duel
#[derive(Parser)]
pub struct Play {
    /// Script name under `<content>/scripts/` (e.g. opening, reaper)
    #[arg(value_name = "SCRIPT", default_value = "opening")]
    script: String,

    /// Content directory (defaults to the bundled data)
    #[arg(short, long, value_name = "DIR")]
    content: Option<PathBuf>,

    /// Override the script's seed
    #[arg(long)]
    seed: Option<u64>,

    /// Persist the duel under the data directory
    #[arg(long)]
    save: bool,

    /// Skip the advisory hints
    #[arg(long)]
    no_advice: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value = "summary")]
    format: OutputFormat,
}

impl Play {
    pub async fn execute(self) -> Result<()> {
        let config = RuntimeConfig::from_env();
        let factory = content(self.content);
        let rules = load_rules(&config, &factory)?;
        let roster = factory.load_roster()?;
        let script = factory
            .load_script(&self.script)
            .with_context(|| format!("Unknown script: {}", self.script))?;
        tracing::debug!(script = %script.name, turns = script.turns.len(), "script loaded");

        let repo: Arc<dyn DuelRepository> = if self.save {
            Arc::new(FileDuelRepo::new(&config.data_dir).with_context(|| {
                format!("Failed to open data directory: {}", config.data_dir.display())
            })?)
        } else {
            Arc::new(InMemoryDuelRepo::new())
        };

        let show_advice = !self.no_advice && config.enable_advisory;
        let advisor = if show_advice {
            Advisor::new(
                Arc::new(HeuristicAdvisor::new(rules.clone())),
                config.advisory_timeout,
            )
        } else {
            Advisor::disabled()
        };

        let service = DuelService::new(repo, rules);
        let id = service.create_duel(
            roster.spawn(&script.first)?,
            roster.spawn(&script.second)?,
            self.seed.unwrap_or(script.seed),
        )?;

        let summary = matches!(self.format, OutputFormat::Summary);
        if summary {
            presentation::print_header(&format!("{} ({id})", script.name));
        }

        let mut records = Vec::with_capacity(script.turns.len());
        for actions in &script.turns {
            let state = service.load_duel(id)?;
            if state.is_finished() {
                break;
            }

            if summary && show_advice {
                let request = service.advisory_request(id)?;
                presentation::print_advice(&advisor.advise(&request).await);
            }

            let submitter = state.active_player().id.clone();
            let record = service.submit_turn(id, &submitter, state.turn, actions)?;
            if summary {
                presentation::print_record(&record);
            }
            records.push(record);
        }

        let state = service.load_duel(id)?;
        match self.format {
            OutputFormat::Summary => {
                presentation::print_summary(&state);
                if self.save {
                    println!(
                        "{} {}",
                        style("Saved as").bold().cyan(),
                        style(id).bold()
                    );
                }
            }
            OutputFormat::Json => {
                let json = serde_json::json!({
                    "duel": id,
                    "records": records,
                    "state": state,
                });
                println!("{}", serde_json::to_string_pretty(&json)?);
            }
        }

        Ok(())
    }
}
