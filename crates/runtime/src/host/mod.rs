//! Ports to the host application.
//!
//! The host owns every document: actors, their embedded items and effects,
//! and the spell compendium. The runtime reads and writes them only through
//! the traits below, so a virtual tabletop, a test fixture or a CLI can each
//! plug in their own storage.
//!
//! - [`ItemStore`] / [`ActorStore`]: document reads and writes (async)
//! - [`Prompter`]: yes/no confirmation dialogs (async)
//! - [`Notifier`]: fire-and-forget user notifications and chat posts
//!
//! Localization and randomness use the core traits
//! ([`armoury_core::Localizer`], [`armoury_core::RandomSource`]).

mod memory;
mod random;

pub use memory::{InMemoryHost, RecordingNotifier, TracingNotifier};
pub use random::{SeededRandom, ThreadRandom};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use armoury_core::{Actor, ActorId, EffectId, Item, ItemId, ItemRef, Spell, SpellRef};

/// Failures reported by host stores.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("host store lock was poisoned")]
    LockPoisoned,

    #[error("actor {0} does not exist")]
    UnknownActor(ActorId),

    #[error("actor {actor} owns no item {item}")]
    UnknownItem { actor: ActorId, item: ItemId },

    #[error("no world item {0}")]
    UnknownWorldItem(ItemId),

    #[error("host rejected the update: {0}")]
    Rejected(String),
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Access to item documents and the spell compendium.
#[async_trait]
pub trait ItemStore: Send + Sync {
    /// Resolves an item path. `Ok(None)` when nothing lives there.
    async fn resolve_item(&self, reference: &ItemRef) -> StoreResult<Option<Item>>;

    /// Replaces the stored copy of an item, embedded effects included. `owner`
    /// is `None` for world items.
    async fn update_item(&self, owner: Option<&ActorId>, item: &Item) -> StoreResult<()>;

    async fn load_spell(&self, spell: &SpellRef) -> StoreResult<Option<Spell>>;
}

/// Access to actor documents.
#[async_trait]
pub trait ActorStore: Send + Sync {
    async fn load_actor(&self, actor: &ActorId) -> StoreResult<Option<Actor>>;

    /// Deletes an effect embedded in an actor.
    async fn delete_effect(&self, owner: &ActorId, effect: &EffectId) -> StoreResult<()>;
}

/// Host confirmation dialog.
#[async_trait]
pub trait Prompter: Send + Sync {
    async fn confirm(&self, title: &str, content: &str) -> bool;
}

/// Prompter that answers every question the same way (headless hosts).
#[derive(Clone, Copy, Debug, Default)]
pub struct FixedAnswer(pub bool);

#[async_trait]
impl Prompter for FixedAnswer {
    async fn confirm(&self, _title: &str, _content: &str) -> bool {
        self.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NotificationKind {
    Info,
    Warning,
    /// Posted to the chat log instead of a transient toast.
    Chat,
}

/// Finished, localized message for the user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub kind: NotificationKind,
    pub text: String,
    /// Stays on screen until dismissed.
    pub permanent: bool,
}

impl Notification {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Info,
            text: text.into(),
            permanent: false,
        }
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Warning,
            text: text.into(),
            permanent: false,
        }
    }

    pub fn chat(text: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Chat,
            text: text.into(),
            permanent: false,
        }
    }

    #[must_use]
    pub fn permanent(mut self) -> Self {
        self.permanent = true;
        self
    }
}

/// Sink for user notifications. Delivery is best-effort.
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);
}
