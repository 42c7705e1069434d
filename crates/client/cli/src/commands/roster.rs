//! List the characters available in a roster.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use console::style;

use super::content;
use crate::presentation;

/// List roster characters
#[derive(Parser)]
pub struct Roster {
    /// Content directory (defaults to the bundled data)
    #[arg(short, long, value_name = "DIR")]
    content: Option<PathBuf>,
}

impl Roster {
    pub fn execute(self) -> Result<()> {
        let factory = content(self.content);
        let roster = factory.load_roster()?;

        presentation::print_header(&format!("Roster ({} characters)", roster.len()));
        for template in roster.iter() {
            let character = roster.spawn(&template.id)?;
            presentation::print_character(&character);
            let abilities: Vec<_> = character
                .race
                .abilities()
                .iter()
                .map(ToString::to_string)
                .collect();
            println!(
                "    {} {}, faith {}, {} items",
                style("abilities:").dim(),
                abilities.join(", "),
                character.faith,
                character.inventory.len()
            );
        }

        Ok(())
    }
}
