//! Dispatch worker that runs hooks and ring commands sequentially.
//!
//! Receives commands from [`crate::ArmouryHandle`], runs them against
//! [`Services`], and replies through oneshot channels.

use std::sync::Arc;

use tokio::sync::{mpsc, oneshot};
use tracing::debug;

use armoury_core::{ActorId, Item, ItemId, RingCastTest};

use crate::api::Result;
use crate::events::Event;
use crate::hooks::{HookContext, HookRegistry, HookResult};
use crate::services::Services;

/// Commands that can be sent to the dispatch worker
pub enum Command {
    /// Publish an event and run every hook that accepts it.
    Dispatch {
        event: Event,
        reply: oneshot::Sender<Result<Vec<HookResult>>>,
    },
    PrepareRing {
        owner: Option<ActorId>,
        item: Box<Item>,
        reply: oneshot::Sender<Result<Item>>,
    },
    ToggleRing {
        actor: ActorId,
        item: ItemId,
        reply: oneshot::Sender<Result<bool>>,
    },
    PrepareRingTest {
        actor: ActorId,
        item: ItemId,
        reply: oneshot::Sender<Result<Option<RingCastTest>>>,
    },
    RingProperties {
        actor: ActorId,
        item: ItemId,
        reply: oneshot::Sender<Result<Vec<String>>>,
    },
}

/// Background task that processes commands.
pub struct DispatchWorker {
    services: Arc<Services>,
    hooks: HookRegistry,
    command_rx: mpsc::Receiver<Command>,
}

impl DispatchWorker {
    pub fn new(
        services: Arc<Services>,
        hooks: HookRegistry,
        command_rx: mpsc::Receiver<Command>,
    ) -> Self {
        Self {
            services,
            hooks,
            command_rx,
        }
    }

    /// Main worker loop. Ends when every handle has been dropped.
    pub async fn run(mut self) {
        while let Some(cmd) = self.command_rx.recv().await {
            self.handle_command(cmd).await;
        }
        debug!(target: "armoury::dispatch", "Dispatch worker stopped");
    }

    async fn handle_command(&self, cmd: Command) {
        match cmd {
            Command::Dispatch { event, reply } => {
                let result = self.dispatch(event).await;
                let _ = reply.send(result);
            }
            Command::PrepareRing { owner, item, reply } => {
                let result = self.services.prepare_ring(owner.as_ref(), *item).await;
                let _ = reply.send(result);
            }
            Command::ToggleRing { actor, item, reply } => {
                let result = self.services.toggle_worn(&actor, &item).await;
                let _ = reply.send(result);
            }
            Command::PrepareRingTest { actor, item, reply } => {
                let result = self.services.prepare_ring_test(&actor, &item).await;
                let _ = reply.send(result);
            }
            Command::RingProperties { actor, item, reply } => {
                let result = self.services.ring_properties(&actor, &item).await;
                let _ = reply.send(result);
            }
        }
    }

    async fn dispatch(&self, event: Event) -> Result<Vec<HookResult>> {
        self.services.bus().publish(event.clone());

        let ctx = HookContext::new(&event, &self.services);
        let results = self.hooks.execute_hooks(&ctx).await?;

        debug!(
            target: "armoury::dispatch",
            topic = ?event.topic(),
            hooks = results.len(),
            "Event dispatched"
        );
        Ok(results)
    }
}
