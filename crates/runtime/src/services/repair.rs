//! Inventory repair report.
//!
//! Lists what is damaged on an actor and what fixing it would cost. Applying
//! the repair (paying and resetting damage) is left to the host.

use tracing::info;

use armoury_core::{
    Actor, ActorId, DamageReport, ItemCategory, Localizer, Money, RepairQuote, evaluate, quote,
};

use super::Services;
use crate::api::Result;
use crate::host::Notification;

/// Whether and how an item can be repaired.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RepairStatus {
    Undamaged,
    /// At capacity: the item is ruined and cannot normally be repaired.
    Unrepairable,
    Repairable(RepairQuote),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RepairEntry {
    pub damage: DamageReport,
    pub status: RepairStatus,
}

impl RepairEntry {
    fn from_report(damage: DamageReport) -> Self {
        let status = if !damage.is_damaged {
            RepairStatus::Undamaged
        } else if damage.is_at_capacity() {
            RepairStatus::Unrepairable
        } else {
            quote(&damage).map_or(RepairStatus::Undamaged, RepairStatus::Repairable)
        };
        Self { damage, status }
    }
}

/// Repair report of one actor's inventory.
///
/// Every weapon is listed; armour and trappings only when damaged.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RepairReport {
    pub actor: ActorId,
    pub weapons: Vec<RepairEntry>,
    pub armour: Vec<RepairEntry>,
    pub trappings: Vec<RepairEntry>,
}

impl RepairReport {
    pub fn build(actor: &Actor) -> Self {
        let entries = |category, keep_undamaged: bool| -> Vec<RepairEntry> {
            actor
                .items_of(category)
                .map(evaluate)
                .filter(|report| keep_undamaged || report.is_damaged)
                .map(RepairEntry::from_report)
                .collect()
        };

        Self {
            actor: actor.id.clone(),
            weapons: entries(ItemCategory::Weapon, true),
            armour: entries(ItemCategory::Armour, false),
            trappings: entries(ItemCategory::Trapping, false),
        }
    }

    pub fn entries(&self) -> impl Iterator<Item = &RepairEntry> {
        self.weapons
            .iter()
            .chain(&self.armour)
            .chain(&self.trappings)
    }

    /// Cost of repairing everything that can be repaired.
    pub fn total(&self) -> Money {
        let pennies = self
            .entries()
            .filter_map(|entry| match entry.status {
                RepairStatus::Repairable(quote) => Some(quote.total.pennies()),
                _ => None,
            })
            .sum();
        Money(pennies)
    }

    pub fn is_empty(&self) -> bool {
        self.entries().next().is_none()
    }

    /// Renders the report as chat text, one line per statement.
    pub fn render(&self, localizer: &dyn Localizer) -> String {
        let mut lines = Vec::new();
        for entry in self.entries() {
            render_entry(entry, localizer, &mut lines);
        }
        lines.join("\n")
    }
}

fn render_entry(entry: &RepairEntry, localizer: &dyn Localizer, lines: &mut Vec<String>) {
    let report = &entry.damage;
    lines.push(report.name.clone());

    let (kind_key, ruined_key) = match report.category {
        ItemCategory::Weapon => ("Armoury.Repair.Weapon", "Armoury.Repair.Mangled"),
        ItemCategory::Armour => ("Armoury.Repair.Armour", "Armoury.Repair.Ruined"),
        ItemCategory::Trapping => ("Armoury.Repair.Item", "Armoury.Repair.Ruined"),
    };

    let quote = match entry.status {
        RepairStatus::Undamaged => return,
        RepairStatus::Unrepairable => {
            lines.push(localizer.localize(ruined_key));
            return;
        }
        RepairStatus::Repairable(quote) => quote,
    };

    match report.max_damage() {
        Some(max) => lines.push(localizer.format(
            "Armoury.Repair.DamageLine",
            &[
                ("kind", &localizer.localize(kind_key)),
                ("damage", &quote.damage.to_string()),
                ("max", &max.to_string()),
            ],
        )),
        None => {
            for location in report.locations() {
                lines.push(localizer.format(
                    "Armoury.Repair.LocationLine",
                    &[
                        ("location", &localizer.localize(&location.location.label_key())),
                        ("damage", &location.damage.to_string()),
                        ("ap", &location.ap.to_string()),
                    ],
                ));
            }
        }
    }

    lines.push(localizer.format(
        "Armoury.Repair.CostLine",
        &[
            ("single", &quote.per_point.to_string()),
            ("total", &quote.total.to_string()),
        ],
    ));
}

impl Services {
    /// Builds the repair report of `actor` and posts it to the chat log.
    pub async fn repair_report(&self, actor: &ActorId) -> Result<RepairReport> {
        let actor = self.require_actor(actor).await?;
        let report = RepairReport::build(&actor);

        info!(
            target: "armoury::repair",
            actor = %actor.id,
            items = report.entries().count(),
            total = %report.total(),
            "Repair report built"
        );
        if !report.is_empty() {
            self.post(Notification::chat(report.render(self.localizer.as_ref())));
        }
        Ok(report)
    }
}
