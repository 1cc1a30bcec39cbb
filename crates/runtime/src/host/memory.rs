//! In-memory host for tests, fixtures and the developer tools.

use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, RwLock};

use async_trait::async_trait;
use tracing::{info, warn};

use armoury_core::{
    ActiveEffect, Actor, ActorId, EffectId, Item, ItemId, ItemRef, Spell, SpellRef,
};

use super::{
    ActorStore, ItemStore, Notification, NotificationKind, Notifier, Prompter, StoreError,
    StoreResult,
};

/// Host documents kept in process memory.
///
/// Besides the store ports it can be told to reject updates (to exercise
/// persistence failures) and to answer prompts from a script.
pub struct InMemoryHost {
    actors: RwLock<HashMap<ActorId, Actor>>,
    world_items: RwLock<HashMap<ItemId, Item>>,
    spells: RwLock<HashMap<SpellRef, Spell>>,
    reject_updates: AtomicBool,
    answers: Mutex<VecDeque<bool>>,
    default_answer: bool,
    prompts: Mutex<Vec<(String, String)>>,
}

impl InMemoryHost {
    pub fn new() -> Self {
        Self {
            actors: RwLock::new(HashMap::new()),
            world_items: RwLock::new(HashMap::new()),
            spells: RwLock::new(HashMap::new()),
            reject_updates: AtomicBool::new(false),
            answers: Mutex::new(VecDeque::new()),
            default_answer: false,
            prompts: Mutex::new(Vec::new()),
        }
    }

    #[must_use]
    pub fn with_actors(self, actors: impl IntoIterator<Item = Actor>) -> Self {
        if let Ok(mut stored) = self.actors.write() {
            stored.extend(actors.into_iter().map(|actor| (actor.id.clone(), actor)));
        }
        self
    }

    #[must_use]
    pub fn with_spells(self, spells: impl IntoIterator<Item = Spell>) -> Self {
        if let Ok(mut stored) = self.spells.write() {
            stored.extend(spells.into_iter().map(|spell| (spell.uuid.clone(), spell)));
        }
        self
    }

    #[must_use]
    pub fn with_world_item(self, item: Item) -> Self {
        if let Ok(mut stored) = self.world_items.write() {
            stored.insert(item.id.clone(), item);
        }
        self
    }

    /// Answer used once the prompt script is exhausted.
    #[must_use]
    pub fn with_default_answer(mut self, answer: bool) -> Self {
        self.default_answer = answer;
        self
    }

    pub fn insert_actor(&self, actor: Actor) -> StoreResult<()> {
        let mut actors = self.actors.write().map_err(|_| StoreError::LockPoisoned)?;
        actors.insert(actor.id.clone(), actor);
        Ok(())
    }

    /// Applies a temporary rune again: `effect` goes back on the actor and on
    /// the item it originates from, unless they already carry it.
    pub fn grant_rune(&self, actor: &ActorId, effect: &ActiveEffect) -> StoreResult<()> {
        let mut actors = self.actors.write().map_err(|_| StoreError::LockPoisoned)?;
        let holder = actors
            .get_mut(actor)
            .ok_or_else(|| StoreError::UnknownActor(actor.clone()))?;
        if holder.effect(&effect.id).is_none() {
            holder.effects.push(effect.clone());
        }

        let Some(origin) = effect.origin_item() else {
            return Ok(());
        };
        match &origin.actor {
            Some(owner) => {
                let item = actors
                    .get_mut(owner)
                    .and_then(|a| a.item_mut(&origin.item))
                    .ok_or_else(|| StoreError::UnknownItem {
                        actor: owner.clone(),
                        item: origin.item.clone(),
                    })?;
                attach_rune(item, effect);
            }
            None => {
                drop(actors);
                let mut items = self.world_items.write().map_err(|_| StoreError::LockPoisoned)?;
                let item = items
                    .get_mut(&origin.item)
                    .ok_or_else(|| StoreError::UnknownWorldItem(origin.item.clone()))?;
                attach_rune(item, effect);
            }
        }
        Ok(())
    }

    /// Snapshot of a stored actor.
    pub fn actor(&self, id: &ActorId) -> Option<Actor> {
        self.actors.read().ok()?.get(id).cloned()
    }

    /// Snapshot of a stored world item.
    pub fn world_item(&self, item: &ItemId) -> Option<Item> {
        self.world_items.read().ok()?.get(item).cloned()
    }

    /// Snapshot of a stored embedded item.
    pub fn item(&self, actor: &ActorId, item: &ItemId) -> Option<Item> {
        self.actors.read().ok()?.get(actor)?.item(item).cloned()
    }

    /// Makes every following `update_item` fail (or succeed again).
    pub fn reject_updates(&self, reject: bool) {
        self.reject_updates.store(reject, Ordering::SeqCst);
    }

    /// Queues answers for the next prompts, in order.
    pub fn script_answers(&self, answers: impl IntoIterator<Item = bool>) {
        if let Ok(mut queue) = self.answers.lock() {
            queue.extend(answers);
        }
    }

    /// Prompts shown so far as `(title, content)`.
    pub fn prompts(&self) -> Vec<(String, String)> {
        self.prompts.lock().map(|p| p.clone()).unwrap_or_default()
    }
}

fn attach_rune(item: &mut Item, effect: &ActiveEffect) {
    if item.find_effect_named(&effect.name).is_none() {
        item.effects.push(effect.clone());
    }
}

impl Default for InMemoryHost {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ItemStore for InMemoryHost {
    async fn resolve_item(&self, reference: &ItemRef) -> StoreResult<Option<Item>> {
        match &reference.actor {
            Some(actor) => {
                let actors = self.actors.read().map_err(|_| StoreError::LockPoisoned)?;
                Ok(actors
                    .get(actor)
                    .and_then(|a| a.item(&reference.item))
                    .cloned())
            }
            None => {
                let items = self.world_items.read().map_err(|_| StoreError::LockPoisoned)?;
                Ok(items.get(&reference.item).cloned())
            }
        }
    }

    async fn update_item(&self, owner: Option<&ActorId>, item: &Item) -> StoreResult<()> {
        if self.reject_updates.load(Ordering::SeqCst) {
            return Err(StoreError::Rejected(format!("update of item {} refused", item.id)));
        }

        let Some(owner) = owner else {
            let mut items = self.world_items.write().map_err(|_| StoreError::LockPoisoned)?;
            let slot = items
                .get_mut(&item.id)
                .ok_or_else(|| StoreError::UnknownWorldItem(item.id.clone()))?;
            *slot = item.clone();
            return Ok(());
        };

        let mut actors = self.actors.write().map_err(|_| StoreError::LockPoisoned)?;
        let actor = actors
            .get_mut(owner)
            .ok_or_else(|| StoreError::UnknownActor(owner.clone()))?;
        if !actor.replace_item(item.clone()) {
            return Err(StoreError::UnknownItem {
                actor: owner.clone(),
                item: item.id.clone(),
            });
        }
        Ok(())
    }

    async fn load_spell(&self, spell: &SpellRef) -> StoreResult<Option<Spell>> {
        let spells = self.spells.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(spells.get(spell).cloned())
    }
}

#[async_trait]
impl ActorStore for InMemoryHost {
    async fn load_actor(&self, actor: &ActorId) -> StoreResult<Option<Actor>> {
        let actors = self.actors.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(actors.get(actor).cloned())
    }

    async fn delete_effect(&self, owner: &ActorId, effect: &EffectId) -> StoreResult<()> {
        let mut actors = self.actors.write().map_err(|_| StoreError::LockPoisoned)?;
        let actor = actors
            .get_mut(owner)
            .ok_or_else(|| StoreError::UnknownActor(owner.clone()))?;
        actor.remove_effect(effect);
        Ok(())
    }
}

#[async_trait]
impl Prompter for InMemoryHost {
    async fn confirm(&self, title: &str, content: &str) -> bool {
        if let Ok(mut prompts) = self.prompts.lock() {
            prompts.push((title.to_string(), content.to_string()));
        }
        self.answers
            .lock()
            .ok()
            .and_then(|mut queue| queue.pop_front())
            .unwrap_or(self.default_answer)
    }
}

/// Notifier that keeps every notification for later inspection.
#[derive(Default)]
pub struct RecordingNotifier {
    notifications: Mutex<Vec<Notification>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notifications(&self) -> Vec<Notification> {
        self.notifications.lock().map(|n| n.clone()).unwrap_or_default()
    }

    pub fn of_kind(&self, kind: NotificationKind) -> Vec<Notification> {
        self.notifications()
            .into_iter()
            .filter(|n| n.kind == kind)
            .collect()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: Notification) {
        if let Ok(mut notifications) = self.notifications.lock() {
            notifications.push(notification);
        }
    }
}

/// Notifier that writes notifications to the log.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notification: Notification) {
        match notification.kind {
            NotificationKind::Warning => warn!(
                target: "armoury::notify",
                permanent = notification.permanent,
                "{}", notification.text
            ),
            NotificationKind::Info | NotificationKind::Chat => info!(
                target: "armoury::notify",
                kind = ?notification.kind,
                permanent = notification.permanent,
                "{}", notification.text
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use armoury_core::{ActiveEffect, ActorKind};

    fn host() -> InMemoryHost {
        InMemoryHost::new().with_actors([Actor::new("a", "Anna", ActorKind::Character)
            .with_item(Item::trapping("t", "Rope").with_effect(ActiveEffect::new("e", "Rune")))])
    }

    #[tokio::test]
    async fn rejected_updates_leave_store_untouched() {
        let host = host();
        let mut rope = host.item(&"a".into(), &"t".into()).unwrap();
        rope.name = "Frayed Rope".into();

        host.reject_updates(true);
        assert!(matches!(
            host.update_item(Some(&"a".into()), &rope).await,
            Err(StoreError::Rejected(_))
        ));
        assert_eq!(host.item(&"a".into(), &"t".into()).unwrap().name, "Rope");

        host.reject_updates(false);
        host.update_item(Some(&"a".into()), &rope).await.unwrap();
        assert_eq!(host.item(&"a".into(), &"t".into()).unwrap().name, "Frayed Rope");
    }

    #[tokio::test]
    async fn resolves_embedded_and_world_items() {
        let host = host().with_world_item(Item::trapping("w", "Loose Coin"));
        let embedded = ItemRef::embedded("a".into(), "t".into());
        assert!(host.resolve_item(&embedded).await.unwrap().is_some());
        assert!(host.resolve_item(&ItemRef::world("w".into())).await.unwrap().is_some());
        assert!(host.resolve_item(&ItemRef::world("t".into())).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn scripted_answers_then_default() {
        let host = host().with_default_answer(true);
        host.script_answers([false]);
        assert!(!host.confirm("t", "c").await);
        assert!(host.confirm("t", "c").await);
        assert_eq!(host.prompts().len(), 2);
    }

    #[tokio::test]
    async fn deletes_actor_effects() {
        let host = host();
        let mut anna = host.actor(&"a".into()).unwrap();
        anna.effects.push(ActiveEffect::new("fury", "Rune of Fury (Temporary)"));
        host.insert_actor(anna).unwrap();

        host.delete_effect(&"a".into(), &"fury".into()).await.unwrap();
        assert!(host.actor(&"a".into()).unwrap().effects.is_empty());
        // Deleting an effect that is already gone is not an error.
        host.delete_effect(&"a".into(), &"fury".into()).await.unwrap();
        assert!(host.delete_effect(&"x".into(), &"fury".into()).await.is_err());
    }

    #[tokio::test]
    async fn grant_rune_restores_both_sides_once() {
        let host = host();
        let rune = ActiveEffect::new("fury", "Rune").with_origin("Actor.a.Item.t");

        host.grant_rune(&"a".into(), &rune).unwrap();
        host.grant_rune(&"a".into(), &rune).unwrap();

        assert_eq!(host.actor(&"a".into()).unwrap().effects.len(), 1);
        // The rope already carried an effect named "Rune".
        assert_eq!(host.item(&"a".into(), &"t".into()).unwrap().effects.len(), 1);

        let stray = ActiveEffect::new("x", "Rune").with_origin("Actor.a.Item.ghost");
        assert!(matches!(
            host.grant_rune(&"a".into(), &stray),
            Err(StoreError::UnknownItem { .. })
        ));
    }
}
