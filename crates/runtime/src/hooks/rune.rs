//! Temporary-rune expiry hook.

use async_trait::async_trait;

use super::{ArmouryHook, HookContext, HookCriticality, HookOutcome};
use crate::api::{Result, RuntimeError};
use crate::events::{EffectEvent, Event};

/// Damages the source item when a temporary rune on an actor is disabled, or
/// deleted while its item still carries it.
pub struct TemporaryRuneHook;

#[async_trait]
impl ArmouryHook for TemporaryRuneHook {
    fn name(&self) -> &'static str {
        "temporary_rune"
    }

    fn priority(&self) -> i32 {
        -10
    }

    fn criticality(&self) -> HookCriticality {
        HookCriticality::Critical
    }

    fn should_trigger(&self, ctx: &HookContext<'_>) -> bool {
        let Event::Effect(event) = ctx.event else {
            return false;
        };
        if event.owner().actor().is_none() || !event.effect().is_temporary_rune() {
            return false;
        }
        match event {
            EffectEvent::Updated { change, .. } => change.disabled == Some(true),
            EffectEvent::Deleted { effect, .. } => effect.origin_item().is_some(),
        }
    }

    async fn run(&self, ctx: &HookContext<'_>) -> Result<HookOutcome> {
        let Event::Effect(event) = ctx.event else {
            return Err(RuntimeError::UnexpectedEvent { hook: self.name() });
        };
        let Some(actor) = event.owner().actor() else {
            return Err(RuntimeError::UnexpectedEvent { hook: self.name() });
        };
        let on_actor = matches!(event, EffectEvent::Updated { .. });

        let removal = ctx
            .services
            .process_removing_rune(actor, event.effect(), on_actor)
            .await?;
        Ok(match removal {
            Some(removal) => HookOutcome::RuneExpired(removal),
            None => HookOutcome::RuneAlreadySpent {
                actor: actor.clone(),
                effect: event.effect().id.clone(),
            },
        })
    }
}
