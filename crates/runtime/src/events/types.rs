//! Event types for different topics.

use serde::{Deserialize, Serialize};

use armoury_core::{ActiveEffect, ActorId, DegradationOutcome, ItemId, ItemRef, SpellRef};

use crate::host::Notification;

/// Document an effect is embedded in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum EffectOwner {
    Actor(ActorId),
    Item(ItemRef),
}

impl EffectOwner {
    pub fn actor(&self) -> Option<&ActorId> {
        match self {
            EffectOwner::Actor(actor) => Some(actor),
            EffectOwner::Item(_) => None,
        }
    }
}

/// Fields touched by an effect update. `None` means unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EffectChange {
    pub disabled: Option<bool>,
}

impl EffectChange {
    pub fn disabled() -> Self {
        Self {
            disabled: Some(true),
        }
    }
}

/// Lifecycle events of active effects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum EffectEvent {
    /// An effect was updated. `effect` is the record after the update.
    Updated {
        owner: EffectOwner,
        effect: ActiveEffect,
        change: EffectChange,
    },

    /// An effect was deleted.
    Deleted {
        owner: EffectOwner,
        effect: ActiveEffect,
    },
}

impl EffectEvent {
    pub fn owner(&self) -> &EffectOwner {
        match self {
            EffectEvent::Updated { owner, .. } | EffectEvent::Deleted { owner, .. } => owner,
        }
    }

    pub fn effect(&self) -> &ActiveEffect {
        match self {
            EffectEvent::Updated { effect, .. } | EffectEvent::Deleted { effect, .. } => effect,
        }
    }
}

/// Fields touched by an item update. `None` means unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemChange {
    pub spell: Option<SpellRef>,
}

/// Lifecycle events of items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemEvent {
    /// An item embedded in `actor` was updated.
    Updated {
        actor: ActorId,
        item: ItemId,
        change: ItemChange,
        /// Skip confirmation dialogs for follow-up changes.
        skip_ask: bool,
    },

    /// An item took a point of damage (or could not take any more).
    Degraded {
        actor: ActorId,
        item: ItemId,
        outcome: DegradationOutcome,
    },
}

/// Inventory-level requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum InventoryEvent {
    /// Someone asked for the repair report of an actor.
    RepairReportRequested { actor: ActorId },
}

/// Notifications handed to the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum NotificationEvent {
    Posted(Notification),
}
