//! Print the rule table a duel would be played with.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use duel_runtime::RuntimeConfig;

use super::{OutputFormat, content, load_rules};
use crate::presentation;

/// Print the active rule table
#[derive(Parser)]
pub struct Rules {
    /// Content directory (defaults to the bundled data)
    #[arg(short, long, value_name = "DIR")]
    content: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "summary")]
    format: OutputFormat,
}

impl Rules {
    pub fn execute(self) -> Result<()> {
        let config = RuntimeConfig::from_env();
        let rules = load_rules(&config, &content(self.content))?;

        match self.format {
            OutputFormat::Summary => {
                presentation::print_header("Rules");
                print!("{}", rules.describe());
            }
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&rules)?),
        }

        Ok(())
    }
}
