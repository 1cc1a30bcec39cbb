//! Services that carry out the item rules against the host.
//!
//! [`Services`] bundles the host ports with the settings and the event bus.
//! Each submodule adds one group of operations:
//! - [`runes`]: temporary-rune expiry and the resulting item damage
//! - [`repair`]: the inventory repair report
//! - [`rings`]: magic-ring creation, renaming, worn toggling and casting

pub mod repair;
pub mod rings;
pub mod runes;

pub use repair::{RepairEntry, RepairReport, RepairStatus};
pub use rings::RingRename;
pub use runes::RuneRemoval;

use std::sync::Arc;

use tokio::sync::Mutex;

use armoury_core::{Actor, ActorId, ArmouryConfig, Item, ItemId, ItemRef, Localizer, RandomSource};

use crate::api::{Result, RuntimeError};
use crate::events::{EventBus, NotificationEvent};
use crate::host::{ActorStore, ItemStore, Notification, Notifier, Prompter};

/// Host ports plus the state shared by every operation.
pub struct Services {
    items: Arc<dyn ItemStore>,
    actors: Arc<dyn ActorStore>,
    prompter: Arc<dyn Prompter>,
    notifier: Arc<dyn Notifier>,
    localizer: Arc<dyn Localizer>,
    random: Mutex<Box<dyn RandomSource>>,
    config: ArmouryConfig,
    bus: EventBus,
}

impl Services {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        items: Arc<dyn ItemStore>,
        actors: Arc<dyn ActorStore>,
        prompter: Arc<dyn Prompter>,
        notifier: Arc<dyn Notifier>,
        localizer: Arc<dyn Localizer>,
        random: Box<dyn RandomSource>,
        config: ArmouryConfig,
        bus: EventBus,
    ) -> Self {
        Self {
            items,
            actors,
            prompter,
            notifier,
            localizer,
            random: Mutex::new(random),
            config,
            bus,
        }
    }

    pub fn config(&self) -> &ArmouryConfig {
        &self.config
    }

    pub fn localizer(&self) -> &dyn Localizer {
        self.localizer.as_ref()
    }

    pub fn bus(&self) -> &EventBus {
        &self.bus
    }

    /// Delivers a notification to the host and mirrors it on the bus.
    pub(crate) fn post(&self, notification: Notification) {
        self.bus
            .publish(NotificationEvent::Posted(notification.clone()));
        self.notifier.notify(notification);
    }

    pub(crate) async fn require_actor(&self, actor: &ActorId) -> Result<Actor> {
        self.actors
            .load_actor(actor)
            .await?
            .ok_or_else(|| RuntimeError::ActorNotFound(actor.clone()))
    }

    pub(crate) async fn require_item(&self, actor: &ActorId, item: &ItemId) -> Result<Item> {
        let reference = ItemRef::embedded(actor.clone(), item.clone());
        self.items
            .resolve_item(&reference)
            .await?
            .ok_or_else(|| RuntimeError::UnknownItem {
                actor: actor.clone(),
                item: item.clone(),
            })
    }
}
