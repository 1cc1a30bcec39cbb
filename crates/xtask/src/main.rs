//! Development tasks for the armoury workspace
//!
//! This binary runs the item rules against the bundled (or a custom) fixture
//! directory using the cargo-xtask pattern.
//! Run with: `cargo xtask <command>`

mod commands;
mod dirs;
mod workbench;

use anyhow::Result;
use clap::Parser;
use commands::{ExpireRune, Inspect, RepairReport, RingTest};

/// Development tasks for the armoury workspace
#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Development tools for the armoury item rules", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Show actors and the damage on their items
    Inspect(Inspect),

    /// Post the repair report of an actor
    RepairReport(RepairReport),

    /// Disable a temporary rune and damage the item it came from
    ExpireRune(ExpireRune),

    /// Prepare casting the spell bound to a ring
    RingTest(RingTest),
}

fn main() -> Result<()> {
    // Load .env file if it exists (for ARMOURY_DATA_DIR and ARMOURY_LOCALE)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Inspect(cmd) => cmd.execute(),
        Command::RepairReport(cmd) => cmd.execute(),
        Command::ExpireRune(cmd) => cmd.execute(),
        Command::RingTest(cmd) => cmd.execute(),
    }
}
