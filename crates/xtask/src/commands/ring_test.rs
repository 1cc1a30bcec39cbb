//! Prepare a ring cast from the fixtures

use anyhow::Result;
use clap::Parser;
use console::style;

use armoury_core::ring::cast_label;

use crate::workbench::{FixtureArgs, Workbench};

/// Prepare casting the spell bound to a ring
#[derive(Parser)]
pub struct RingTest {
    /// Actor ID from the fixtures (e.g., gunther)
    #[arg(value_name = "ACTOR")]
    actor: String,

    /// Ring item ID (e.g., ring)
    #[arg(value_name = "ITEM")]
    item: String,

    /// Toggle the worn state before casting
    #[arg(long)]
    toggle: bool,

    #[command(flatten)]
    fixtures: FixtureArgs,
}

impl RingTest {
    pub fn execute(self) -> Result<()> {
        tokio::runtime::Runtime::new()?.block_on(self.execute_async())
    }

    async fn execute_async(self) -> Result<()> {
        let bench = Workbench::start(&self.fixtures, None).await?;
        let actor = bench.actor(&self.actor.as_str().into())?;
        let item: armoury_core::ItemId = self.item.as_str().into();

        {
            let handle = bench.handle();
            if self.toggle {
                let worn = handle.toggle_ring(actor.id.clone(), item.clone()).await?;
                println!("{} worn = {}", style("Toggled:").bold().cyan(), worn);
            }

            let properties = handle.ring_properties(actor.id.clone(), item.clone()).await?;
            println!("{} {}", style("Properties:").bold().cyan(), properties.join(", "));

            match handle.prepare_ring_test(actor.id.clone(), item).await? {
                Some(test) => {
                    println!("{}", style("=== Ring Test ===").bold().green());
                    println!("  {}", cast_label(&test.spell, bench.localizer.as_ref()));
                    println!("  CN: {}  SL: {}", test.spell.cn, test.sl_label());
                    println!("  Hit location: {}", test.hit_location);
                    for (label, effects) in [
                        ("Damage", &test.damage_effects),
                        ("Target", &test.target_effects),
                        ("Area", &test.area_effects),
                    ] {
                        for effect in effects {
                            println!("  {} effect: {} ({})", label, effect.name, effect.uuid);
                        }
                    }
                }
                None => println!("{} no test prepared", style("✗").red().bold()),
            }
        }

        bench.shutdown().await
    }
}
