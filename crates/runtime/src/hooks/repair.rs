//! Repair report hook.

use async_trait::async_trait;

use super::{ArmouryHook, HookContext, HookCriticality, HookOutcome};
use crate::api::{Result, RuntimeError};
use crate::events::{Event, InventoryEvent};

/// Posts the repair report requested for an actor.
pub struct RepairReportHook;

#[async_trait]
impl ArmouryHook for RepairReportHook {
    fn name(&self) -> &'static str {
        "repair_report"
    }

    fn priority(&self) -> i32 {
        10
    }

    fn criticality(&self) -> HookCriticality {
        HookCriticality::Critical
    }

    fn should_trigger(&self, ctx: &HookContext<'_>) -> bool {
        matches!(ctx.event, Event::Inventory(InventoryEvent::RepairReportRequested { .. }))
    }

    async fn run(&self, ctx: &HookContext<'_>) -> Result<HookOutcome> {
        let Event::Inventory(InventoryEvent::RepairReportRequested { actor }) = ctx.event else {
            return Err(RuntimeError::UnexpectedEvent { hook: self.name() });
        };
        let report = ctx.services.repair_report(actor).await?;
        Ok(HookOutcome::RepairReport(report))
    }
}
