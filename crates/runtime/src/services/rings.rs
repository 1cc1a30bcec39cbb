//! Magic-ring operations against the host.

use tracing::{debug, info, warn};

use armoury_core::ring::{apply_creation_defaults, expand_properties, plan_rename, wants_rename};
use armoury_core::{ActorId, Item, ItemId, RingCastTest, RingError, Spell, SpellRef};

use super::Services;
use crate::api::Result;
use crate::host::Notification;

/// What happened after a ring's spell changed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RingRename {
    /// Renaming is disabled by settings.
    Skipped,
    /// The user refused the proposed name.
    Declined,
    Renamed { name: String },
}

impl Services {
    /// Fills in the defaults of a ring about to be created.
    ///
    /// `owner` is the actor receiving the ring, `None` for world items.
    pub async fn prepare_ring(&self, owner: Option<&ActorId>, mut ring: Item) -> Result<Item> {
        let kind = match owner {
            Some(owner) => Some(self.require_actor(owner).await?.kind),
            None => None,
        };
        apply_creation_defaults(&mut ring, kind, &self.config.rings, self.localizer.as_ref())?;
        debug!(
            target: "armoury::rings",
            item = %ring.id,
            name = %ring.name,
            "Ring creation defaults applied"
        );
        Ok(ring)
    }

    /// Proposes (and possibly applies) a new name after `spell` got linked.
    pub async fn on_spell_changed(
        &self,
        actor: &ActorId,
        item: &ItemId,
        spell: &SpellRef,
        skip_ask: bool,
    ) -> Result<RingRename> {
        let settings = &self.config.rings;
        if !wants_rename(settings.update_name, skip_ask) {
            return Ok(RingRename::Skipped);
        }

        let mut ring = self.require_item(actor, item).await?;
        if ring.ring().is_none() {
            return Err(RingError::NotARing(item.clone()).into());
        }
        let spell = self.require_spell(spell).await?;

        let Some(plan) = plan_rename(&spell, settings, skip_ask, self.localizer.as_ref()) else {
            return Ok(RingRename::Skipped);
        };
        if let Some(prompt) = &plan.prompt
            && !self.prompter.confirm(&prompt.title, &prompt.content).await
        {
            debug!(target: "armoury::rings", item = %item, "Ring rename declined");
            return Ok(RingRename::Declined);
        }

        plan.apply(&mut ring);
        self.items.update_item(Some(actor), &ring).await?;
        info!(
            target: "armoury::rings",
            actor = %actor,
            item = %item,
            name = %plan.name,
            "Ring renamed after its spell"
        );
        Ok(RingRename::Renamed { name: plan.name })
    }

    /// Flips the worn state of a ring and persists it. Returns the new state.
    pub async fn toggle_worn(&self, actor: &ActorId, item: &ItemId) -> Result<bool> {
        let mut ring = self.require_item(actor, item).await?;
        let worn = ring
            .ring_mut()
            .ok_or_else(|| RingError::NotARing(item.clone()))?
            .toggle_worn();
        self.items.update_item(Some(actor), &ring).await?;
        debug!(target: "armoury::rings", actor = %actor, item = %item, worn, "Ring toggled");
        Ok(worn)
    }

    /// Prepares the cast of a ring's spell.
    ///
    /// Returns `None` when the actor is gone or cannot use the ring; the
    /// latter also warns the user.
    pub async fn prepare_ring_test(
        &self,
        actor_id: &ActorId,
        item: &ItemId,
    ) -> Result<Option<RingCastTest>> {
        let Some(actor) = self.actors.load_actor(actor_id).await? else {
            debug!(target: "armoury::rings", actor = %actor_id, "Ring test without actor");
            return Ok(None);
        };
        let ring = self.require_item(actor_id, item).await?;
        let data = ring.ring().ok_or_else(|| RingError::NotARing(item.clone()))?;

        if !data.can_use() {
            let text = self.localizer.format(
                "Armoury.Rings.ActorCanNotUse",
                &[("actor", &actor.name), ("ring", &ring.name)],
            );
            warn!(target: "armoury::rings", actor = %actor_id, item = %item, "Ring cannot be used");
            self.post(Notification::warning(text));
            return Ok(None);
        }

        let bound = data
            .spell
            .as_ref()
            .ok_or_else(|| RingError::NoSpellBound(item.clone()))?;
        let spell = self.require_spell(bound).await?;
        let test = RingCastTest::prepare(actor_id.clone(), &ring, &spell)?;

        info!(
            target: "armoury::rings",
            actor = %actor_id,
            item = %item,
            spell = %spell.name,
            "Ring test prepared"
        );
        Ok(Some(test))
    }

    /// Property tags for a ring's summary.
    pub async fn ring_properties(&self, actor: &ActorId, item: &ItemId) -> Result<Vec<String>> {
        let ring = self.require_item(actor, item).await?;
        let data = ring.ring().ok_or_else(|| RingError::NotARing(item.clone()))?;
        let spell = match &data.spell {
            Some(spell) => self.items.load_spell(spell).await?,
            None => None,
        };
        Ok(expand_properties(&ring, spell.as_ref(), self.localizer.as_ref()))
    }

    async fn require_spell(&self, spell: &SpellRef) -> Result<Spell> {
        Ok(self
            .items
            .load_spell(spell)
            .await?
            .ok_or_else(|| RingError::SpellNotFound(spell.clone()))?)
    }
}
