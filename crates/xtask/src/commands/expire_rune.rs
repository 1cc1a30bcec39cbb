//! Expire a temporary rune from the fixtures
//!
//! Sends the "effect disabled" event a host would emit and shows how the
//! source item degrades. Repeat with `--times` to reapply and expire the rune
//! until the item is ruined.

use anyhow::{Result, bail};
use clap::Parser;
use console::style;

use armoury_core::{DamageDetail, evaluate};
use armoury_runtime::{EffectChange, EffectEvent, EffectOwner, HookOutcome};

use crate::workbench::{FixtureArgs, Workbench};

/// Disable a temporary rune and damage the item it came from
#[derive(Parser)]
pub struct ExpireRune {
    /// Actor ID from the fixtures (e.g., gunther)
    #[arg(value_name = "ACTOR")]
    actor: String,

    /// Effect ID on the actor (e.g., fury)
    #[arg(value_name = "EFFECT")]
    effect: String,

    /// How many times to apply and expire the rune
    #[arg(short, long, default_value_t = 1)]
    times: u32,

    /// Report the effect as deleted instead of disabled
    #[arg(long)]
    deleted: bool,

    /// Seed for the armour location pick
    #[arg(long)]
    seed: Option<u64>,

    #[command(flatten)]
    fixtures: FixtureArgs,
}

impl ExpireRune {
    pub fn execute(self) -> Result<()> {
        tokio::runtime::Runtime::new()?.block_on(self.execute_async())
    }

    async fn execute_async(self) -> Result<()> {
        let bench = Workbench::start(&self.fixtures, self.seed).await?;
        let actor = bench.actor(&self.actor.as_str().into())?;

        let Some(effect) = actor.effect(&self.effect.as_str().into()).cloned() else {
            bail!("Actor {} has no effect {}", actor.id, self.effect);
        };
        if !effect.is_temporary_rune() {
            bail!("Effect \"{}\" is not a temporary rune", effect.name);
        }

        {
            let handle = bench.handle();
            for round in 1..=self.times {
                // Each round applies the rune again before it expires.
                bench.host.grant_rune(&actor.id, &effect)?;
                let event = if self.deleted {
                    EffectEvent::Deleted {
                        owner: EffectOwner::Actor(actor.id.clone()),
                        effect: effect.clone(),
                    }
                } else {
                    EffectEvent::Updated {
                        owner: EffectOwner::Actor(actor.id.clone()),
                        effect: effect.clone(),
                        change: EffectChange::disabled(),
                    }
                };

                for result in handle.dispatch(event).await? {
                    let HookOutcome::RuneExpired(removal) = result.outcome else {
                        continue;
                    };
                    println!(
                        "{} {:?}",
                        style(format!("Round {round}:")).bold().cyan(),
                        removal.outcome
                    );

                    if let Some(item) = bench.host.item(&actor.id, &removal.item) {
                        let report = evaluate(&item);
                        if let DamageDetail::Durability { current, max } = &report.detail {
                            println!("  {} {}/{}", item.name, current, max);
                        } else {
                            for location in report.locations() {
                                println!(
                                    "  {} {}: {}/{}",
                                    item.name, location.location, location.damage, location.ap
                                );
                            }
                        }
                    }
                }
            }
        }

        bench.shutdown().await
    }
}
