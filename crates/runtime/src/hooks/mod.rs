//! Event hooks for runtime orchestration.
//!
//! Hooks react to events dispatched through the runtime. Each hook decides
//! from the event alone whether it applies, then runs against the host
//! through [`crate::services::Services`].
//!
//! # Architecture
//!
//! - Hooks are registered in the [`crate::ArmouryBuilder`] and sorted by priority
//! - For each dispatched event, hooks are evaluated in priority order
//! - Failures are handled according to the hook's [`HookCriticality`]

mod context;
mod registry;
mod repair;
mod ring;
mod rune;

pub use context::HookContext;
pub use registry::{HookRegistry, HookResult};
pub use repair::RepairReportHook;
pub use ring::RingNameHook;
pub use rune::TemporaryRuneHook;

use async_trait::async_trait;

use armoury_core::{ActorId, EffectId};

use crate::api::Result;
use crate::services::{RepairReport, RingRename, RuneRemoval};

/// Defines the criticality level of a hook for error handling.
///
/// - Critical hooks must succeed or the dispatch fails
/// - Important hooks log errors but allow continuation
/// - Optional hooks can fail silently
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookCriticality {
    /// Hook failure fails the whole dispatch and is returned to the caller.
    Critical,

    /// Hook failure is logged as an error; remaining hooks still run.
    Important,

    /// Hook failure is logged at debug level.
    Optional,
}

/// What a hook did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HookOutcome {
    RuneExpired(RuneRemoval),
    /// The rune had already been spent by an earlier event.
    RuneAlreadySpent { actor: ActorId, effect: EffectId },
    RingRename(RingRename),
    RepairReport(RepairReport),
}

/// Hook run for every dispatched event it accepts.
///
/// # Execution Order
///
/// Hooks are sorted by priority (lower values execute first).
#[async_trait]
pub trait ArmouryHook: Send + Sync {
    /// Returns a human-readable name for this hook (used in logging and debugging).
    fn name(&self) -> &'static str;

    /// Returns the execution priority. Lower values execute first.
    fn priority(&self) -> i32 {
        0
    }

    fn criticality(&self) -> HookCriticality {
        HookCriticality::Important
    }

    /// Determines whether this hook applies to the dispatched event.
    fn should_trigger(&self, ctx: &HookContext<'_>) -> bool;

    async fn run(&self, ctx: &HookContext<'_>) -> Result<HookOutcome>;
}
