//! Cloneable façade for issuing commands to the runtime.
//!
//! [`ArmouryHandle`] hides channel plumbing and offers async helpers for
//! dispatching host events, working with rings, or streaming events from
//! specific topics.
use tokio::sync::{broadcast, mpsc, oneshot};

use armoury_core::{ActorId, Item, ItemId, RingCastTest};

use super::errors::{Result, RuntimeError};
use crate::events::{Event, EventBus, Topic};
use crate::hooks::HookResult;
use crate::workers::Command;

/// Client-facing handle to interact with the runtime
#[derive(Clone)]
pub struct ArmouryHandle {
    command_tx: mpsc::Sender<Command>,
    event_bus: EventBus,
}

impl ArmouryHandle {
    pub(crate) fn new(command_tx: mpsc::Sender<Command>, event_bus: EventBus) -> Self {
        Self {
            command_tx,
            event_bus,
        }
    }

    async fn request<T>(
        &self,
        build: impl FnOnce(oneshot::Sender<Result<T>>) -> Command,
    ) -> Result<T> {
        let (reply_tx, reply_rx) = oneshot::channel();

        self.command_tx
            .send(build(reply_tx))
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)?;

        reply_rx.await.map_err(RuntimeError::ReplyChannelClosed)?
    }

    /// Dispatch a host event and return the outcomes of the hooks it triggered
    pub async fn dispatch(&self, event: impl Into<Event>) -> Result<Vec<HookResult>> {
        let event = event.into();
        self.request(|reply| Command::Dispatch { event, reply }).await
    }

    /// Fill in the defaults of a ring that is about to be created
    pub async fn prepare_ring(&self, owner: Option<ActorId>, item: Item) -> Result<Item> {
        self.request(|reply| Command::PrepareRing {
            owner,
            item: Box::new(item),
            reply,
        })
        .await
    }

    /// Flip a ring's worn state; returns the new state
    pub async fn toggle_ring(&self, actor: ActorId, item: ItemId) -> Result<bool> {
        self.request(|reply| Command::ToggleRing { actor, item, reply })
            .await
    }

    /// Prepare casting the spell bound to a ring
    pub async fn prepare_ring_test(
        &self,
        actor: ActorId,
        item: ItemId,
    ) -> Result<Option<RingCastTest>> {
        self.request(|reply| Command::PrepareRingTest { actor, item, reply })
            .await
    }

    /// Property tags of a ring for display
    pub async fn ring_properties(&self, actor: ActorId, item: ItemId) -> Result<Vec<String>> {
        self.request(|reply| Command::RingProperties { actor, item, reply })
            .await
    }

    /// Subscribe to events from a specific topic
    ///
    /// # Topics
    ///
    /// - `Topic::Effects` - Effect updates and deletions as dispatched
    /// - `Topic::Items` - Item updates and degradation results
    /// - `Topic::Inventory` - Repair report requests
    /// - `Topic::Notifications` - Messages delivered to the user
    pub fn subscribe(&self, topic: Topic) -> Option<broadcast::Receiver<Event>> {
        self.event_bus.subscribe(topic)
    }

    /// Subscribe to multiple topics at once
    pub fn subscribe_multiple(
        &self,
        topics: &[Topic],
    ) -> std::collections::HashMap<Topic, broadcast::Receiver<Event>> {
        self.event_bus.subscribe_multiple(topics)
    }

    /// Get a reference to the event bus for advanced usage
    pub fn event_bus(&self) -> &EventBus {
        &self.event_bus
    }
}
