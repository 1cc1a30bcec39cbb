//! Ring rename hook.

use async_trait::async_trait;

use super::{ArmouryHook, HookContext, HookOutcome};
use crate::api::{Result, RuntimeError};
use crate::events::{Event, ItemEvent};

/// Proposes a new ring name when the ring's spell changes.
pub struct RingNameHook;

#[async_trait]
impl ArmouryHook for RingNameHook {
    fn name(&self) -> &'static str {
        "ring_name"
    }

    fn should_trigger(&self, ctx: &HookContext<'_>) -> bool {
        matches!(
            ctx.event,
            Event::Item(ItemEvent::Updated { change, .. }) if change.spell.is_some()
        )
    }

    async fn run(&self, ctx: &HookContext<'_>) -> Result<HookOutcome> {
        let Event::Item(ItemEvent::Updated {
            actor,
            item,
            change,
            skip_ask,
        }) = ctx.event
        else {
            return Err(RuntimeError::UnexpectedEvent { hook: self.name() });
        };
        let Some(spell) = &change.spell else {
            return Err(RuntimeError::UnexpectedEvent { hook: self.name() });
        };

        let rename = ctx
            .services
            .on_spell_changed(actor, item, spell, *skip_ask)
            .await?;
        Ok(HookOutcome::RingRename(rename))
    }
}
