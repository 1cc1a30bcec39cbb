//! Post the repair report of a fixture actor
//!
//! Dispatches a repair report request through the runtime; the report is
//! printed by the console notifier as a chat message.

use anyhow::Result;
use clap::Parser;
use console::style;

use armoury_runtime::{HookOutcome, InventoryEvent};

use crate::workbench::{FixtureArgs, Workbench};

/// Post the repair report of an actor
#[derive(Parser)]
pub struct RepairReport {
    /// Actor ID from the fixtures (e.g., gunther)
    #[arg(value_name = "ACTOR")]
    actor: String,

    #[command(flatten)]
    fixtures: FixtureArgs,
}

impl RepairReport {
    pub fn execute(self) -> Result<()> {
        tokio::runtime::Runtime::new()?.block_on(self.execute_async())
    }

    async fn execute_async(self) -> Result<()> {
        let bench = Workbench::start(&self.fixtures, None).await?;
        let actor = bench.actor(&self.actor.as_str().into())?;

        let results = bench
            .handle()
            .dispatch(InventoryEvent::RepairReportRequested {
                actor: actor.id.clone(),
            })
            .await?;

        for result in results {
            if let HookOutcome::RepairReport(report) = result.outcome {
                if report.is_empty() {
                    println!(
                        "{} {} has nothing to repair",
                        style("✓").green().bold(),
                        actor.name
                    );
                } else {
                    println!(
                        "{} {}",
                        style("Total repair cost:").bold().yellow(),
                        report.total()
                    );
                }
            }
        }

        bench.shutdown().await
    }
}
