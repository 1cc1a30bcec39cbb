//! Runtime orchestration for the item rules.
//!
//! This crate wires host ports, the event bus, hooks and services into a
//! runtime API. Hosts embed [`Armoury`] to dispatch document events (effects
//! disabled, spells linked, repair reports requested) and interact with rings
//! through [`ArmouryHandle`].
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts the orchestrator and builder
//! - [`api`] exposes the types downstream clients interact with
//! - [`events`] provides topic-based event bus for flexible event routing
//! - [`hooks`] decides which service reacts to a dispatched event
//! - [`services`] implements the operations against the host
//! - [`host`] defines the host ports and an in-memory host
pub mod api;
pub mod events;
pub mod hooks;
pub mod host;
pub mod runtime;
pub mod services;

mod workers;

pub use api::{ArmouryHandle, Result, RuntimeError};
pub use events::{
    EffectChange, EffectEvent, EffectOwner, Event, EventBus, InventoryEvent, ItemChange, ItemEvent,
    NotificationEvent, Topic,
};
pub use hooks::{
    ArmouryHook, HookContext, HookCriticality, HookOutcome, HookRegistry, HookResult,
    RepairReportHook, RingNameHook, TemporaryRuneHook,
};
pub use host::{
    ActorStore, FixedAnswer, InMemoryHost, ItemStore, Notification, NotificationKind, Notifier,
    Prompter, RecordingNotifier, SeededRandom, StoreError, ThreadRandom, TracingNotifier,
};
pub use runtime::{Armoury, ArmouryBuilder, ArmouryRuntimeConfig};
pub use services::{RepairEntry, RepairReport, RepairStatus, RingRename, RuneRemoval, Services};
