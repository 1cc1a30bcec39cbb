//! Temporary runes.
//!
//! A temporary rune is an effect granted to an actor by an item. When the
//! effect is disabled (or deleted) the rune is spent: the effect is removed
//! from both documents and the item takes one point of damage.
//!
//! A rune is spent once. Removing the actor's effect makes the host report a
//! deletion, and hosts may redeliver a stale update. Such events find the
//! rune gone from both the actor and the item and change nothing.

use tracing::{debug, info, warn};

use armoury_core::{ActiveEffect, ActorId, DegradationOutcome, Item, ItemId, degrade};

use super::Services;
use crate::api::{Result, RuntimeError};
use crate::events::ItemEvent;
use crate::host::Notification;

/// What expiring a rune did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RuneRemoval {
    pub actor: ActorId,
    pub item: ItemId,
    pub effect: String,
    pub outcome: DegradationOutcome,
    /// Localized sentence posted to the user.
    pub summary: String,
}

impl Services {
    /// Removes a spent temporary rune and damages the item it came from.
    ///
    /// `on_actor` is false when the host already deleted the actor's effect.
    /// A missing item effect is skipped; a missing item fails with
    /// [`RuntimeError::ItemNotFound`] after warning the user. Returns `None`
    /// when the rune was already spent.
    pub async fn process_removing_rune(
        &self,
        actor_id: &ActorId,
        effect: &ActiveEffect,
        on_actor: bool,
    ) -> Result<Option<RuneRemoval>> {
        let actor = self.require_actor(actor_id).await?;
        let held_by_actor = on_actor && actor.effect(&effect.id).is_some();

        if on_actor {
            self.actors.delete_effect(actor_id, &effect.id).await?;
        }
        let partial_summary = self.localizer.format(
            "Armoury.Runes.RemovedFromActor",
            &[("effect", &effect.name), ("actor", &actor.name)],
        );

        let reference = effect.origin_item();
        let resolved = match &reference {
            Some(reference) => self.items.resolve_item(reference).await?,
            None => None,
        };
        let (Some(reference), Some(item)) = (reference, resolved) else {
            let origin = effect.origin.clone().unwrap_or_default();
            warn!(
                target: "armoury::runes",
                actor = %actor_id,
                effect = %effect.name,
                origin = %origin,
                "Rune origin item could not be resolved"
            );
            let text = self
                .localizer
                .format("Armoury.Runes.ItemMissing", &[("summary", &partial_summary)]);
            self.post(Notification::warning(text));
            return Err(RuntimeError::ItemNotFound {
                item: origin,
                partial_summary,
            });
        };
        let owner = reference.actor.as_ref();

        let linked = item.find_effect_named(&effect.name).map(|linked| linked.id.clone());
        if linked.is_none() && !held_by_actor {
            debug!(
                target: "armoury::runes",
                actor = %actor_id,
                item = %item.id,
                effect = %effect.name,
                "Rune already spent"
            );
            return Ok(None);
        }

        let mut working = item.clone();
        match &linked {
            Some(linked) => {
                working.remove_effect(linked);
            }
            None => debug!(
                target: "armoury::runes",
                item = %item.id,
                effect = %effect.name,
                "Item carries no matching rune effect"
            ),
        }

        // One write carries both the removed effect and the damage.
        let outcome = self.damage_from_rune(&mut working).await;
        if linked.is_some() || outcome.is_mutation() {
            self.items.update_item(owner, &working).await?;
        }
        self.bus.publish(ItemEvent::Degraded {
            actor: actor_id.clone(),
            item: item.id.clone(),
            outcome,
        });

        let summary = self.localizer.format(
            "Armoury.Runes.Removed",
            &[
                ("effect", &effect.name),
                ("actor", &actor.name),
                ("item", &item.name),
                ("outcome", &outcome.describe(self.localizer.as_ref())),
            ],
        );
        info!(
            target: "armoury::runes",
            actor = %actor_id,
            item = %item.id,
            effect = %effect.name,
            outcome = ?outcome,
            "Temporary rune expired"
        );
        self.post(Notification::info(summary.clone()).permanent());

        Ok(Some(RuneRemoval {
            actor: actor_id.clone(),
            item: item.id,
            effect: effect.name.clone(),
            outcome,
            summary,
        }))
    }

    /// Applies one point of rune damage to `item` in place.
    pub async fn damage_from_rune(&self, item: &mut Item) -> DegradationOutcome {
        let mut random = self.random.lock().await;
        degrade(item, &mut **random)
    }
}
