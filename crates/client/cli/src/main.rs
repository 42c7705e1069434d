//! Command-line front end for the duel engine.
//!
//! Plays scripted duels through the runtime service and inspects content
//! and saved duels. Run with: `duel <command>`

mod commands;
mod presentation;

use anyhow::Result;
use clap::Parser;
use commands::{Play, Roster, Rules, Show};
use tracing_subscriber::EnvFilter;

/// Turn-based duel engine
#[derive(Parser)]
#[command(name = "duel")]
#[command(about = "Play and inspect turn-based duels", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Play a scripted duel turn by turn
    Play(Play),

    /// List the characters in a roster
    Roster(Roster),

    /// Print the active rule table
    Rules(Rules),

    /// Show a saved duel
    Show(Show),
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    setup_logging();

    let cli = Cli::parse();

    match cli.command {
        Command::Play(cmd) => cmd.execute().await,
        Command::Roster(cmd) => cmd.execute(),
        Command::Rules(cmd) => cmd.execute(),
        Command::Show(cmd) => cmd.execute(),
    }
}

/// Logs go to stderr so command output stays pipeable.
fn setup_logging() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn,duel=info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
