//! Inspect actor fixtures
//!
//! Loads `actors.ron` and displays each item's damage and repair cost,
//! grouped into the inventory sections of the actor sheet.

use anyhow::{Context, Result};
use clap::Parser;
use console::style;

use armoury_core::{Actor, Catalog, Item, DamageDetail, Localizer, RingSettings, evaluate, quote};

use crate::dirs;
use crate::workbench::FixtureArgs;

/// Show actors and the damage on their items
#[derive(Parser)]
pub struct Inspect {
    /// Only show this actor
    #[arg(value_name = "ACTOR")]
    actor: Option<String>,

    #[command(flatten)]
    fixtures: FixtureArgs,

    /// Output format
    #[arg(short, long, value_enum, default_value = "summary")]
    format: OutputFormat,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormat {
    /// Summary view (items, damage, repair cost)
    Summary,
    /// Full JSON output
    Json,
    /// Pretty-printed debug format
    Debug,
}

impl Inspect {
    pub fn execute(self) -> Result<()> {
        let factory = self.fixtures.factory()?;
        let actors = factory
            .load_actors()
            .with_context(|| {
                format!("Failed to load actors from {}", factory.data_dir().display())
            })?;

        let actors: Vec<Actor> = match &self.actor {
            Some(id) => actors.into_iter().filter(|a| a.id.as_str() == id).collect(),
            None => actors,
        };
        if actors.is_empty() {
            anyhow::bail!("No matching actors in {}", factory.data_dir().display());
        }

        println!(
            "{} {}",
            style("Fixtures:").bold().cyan(),
            factory.data_dir().display()
        );
        println!();

        match self.format {
            OutputFormat::Summary => {
                let config = factory.load_config().context("Failed to load settings")?;
                let lang = dirs::locale(self.fixtures.lang.clone());
                let localizer = factory
                    .load_locale(&lang)
                    .with_context(|| format!("Failed to load locale {lang}"))?;
                for actor in &actors {
                    print_summary(actor, &config.rings, &localizer);
                }
            }
            OutputFormat::Json => print_json(&actors)?,
            OutputFormat::Debug => println!("{:#?}", actors),
        }

        Ok(())
    }
}

fn print_summary(actor: &Actor, rings: &RingSettings, localizer: &Catalog) {
    println!(
        "{} {} ({}, {})",
        style("Actor:").bold().green(),
        actor.name,
        actor.id,
        actor.kind
    );

    for (section, items) in actor.inventory(rings) {
        if items.is_empty() {
            continue;
        }
        println!("  {}", style(localizer.localize(section.label_key())).bold());
        for item in items {
            print_item(item);
        }
    }

    if !actor.effects.is_empty() {
        println!("  {}", style("Effects:").bold().yellow());
        for effect in &actor.effects {
            let rune = if effect.is_temporary_rune() { " [temporary rune]" } else { "" };
            println!(
                "    {} ({}){} <- {}",
                effect.name,
                effect.id,
                rune,
                effect.origin.as_deref().unwrap_or("-")
            );
        }
    }
    println!();
}

fn print_item(item: &Item) {
    let report = evaluate(item);
    let damage = match &report.detail {
        DamageDetail::Durability { current, max } => format!("{}/{}", current, max),
        DamageDetail::Locations(locations) => locations
            .iter()
            .map(|l| format!("{} {}/{}", l.location, l.damage, l.ap))
            .collect::<Vec<_>>()
            .join(", "),
    };
    let cost = quote(&report)
        .map(|q| format!(" repair {}", q.total))
        .unwrap_or_default();
    let marker = if report.is_damaged {
        style(damage).red()
    } else {
        style(damage).dim()
    };
    println!(
        "    {:<24} {:<9} {}{}",
        item.name, report.category, marker, cost
    );
}

fn print_json(actors: &[Actor]) -> Result<()> {
    let json =
        serde_json::to_string_pretty(actors).context("Failed to serialize actors to JSON")?;
    println!("{}", json);
    Ok(())
}
