//! Hook registry for managing and executing event hooks.

use std::sync::Arc;

use tracing::{debug, error};

use super::{
    ArmouryHook, HookContext, HookCriticality, HookOutcome, RepairReportHook, RingNameHook,
    TemporaryRuneHook,
};
use crate::api::{Result, RuntimeError};

/// Outcome of one hook, tagged with the hook's name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HookResult {
    pub hook: &'static str,
    pub outcome: HookOutcome,
}

/// Registry that runs hooks in priority order.
pub struct HookRegistry {
    hooks: Arc<[Arc<dyn ArmouryHook>]>,
}

impl HookRegistry {
    /// Creates a registry. Hooks are sorted by priority (lower values first).
    pub fn new(mut hooks: Vec<Arc<dyn ArmouryHook>>) -> Self {
        hooks.sort_by_key(|h| h.priority());
        Self {
            hooks: hooks.into(),
        }
    }

    /// Creates a registry with the built-in hooks:
    /// - TemporaryRuneHook: damages items when their rune expires
    /// - RingNameHook: renames rings after their spell
    /// - RepairReportHook: posts inventory repair reports
    pub fn default_hooks() -> Self {
        Self::new(vec![
            Arc::new(TemporaryRuneHook) as Arc<dyn ArmouryHook>,
            Arc::new(RingNameHook) as Arc<dyn ArmouryHook>,
            Arc::new(RepairReportHook) as Arc<dyn ArmouryHook>,
        ])
    }

    /// Runs every hook that accepts the event.
    ///
    /// # Error Handling
    ///
    /// - `Critical`: returns the error immediately
    /// - `Important`: logs the error and continues (default)
    /// - `Optional`: logs at debug level and continues
    pub async fn execute_hooks(&self, ctx: &HookContext<'_>) -> Result<Vec<HookResult>> {
        let mut results = Vec::new();

        for hook in self.hooks.iter() {
            if !hook.should_trigger(ctx) {
                continue;
            }
            match hook.run(ctx).await {
                Ok(outcome) => results.push(HookResult {
                    hook: hook.name(),
                    outcome,
                }),
                Err(e) => self.handle_hook_error(hook.as_ref(), e)?,
            }
        }

        Ok(results)
    }

    pub fn len(&self) -> usize {
        self.hooks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hooks.is_empty()
    }

    /// Returns an iterator over hook names and priorities (for debugging).
    pub fn hooks(&self) -> impl Iterator<Item = (&'static str, i32)> + '_ {
        self.hooks.iter().map(|h| (h.name(), h.priority()))
    }

    /// Returns Ok(()) for Important/Optional hooks, Err for Critical hooks.
    fn handle_hook_error(&self, hook: &dyn ArmouryHook, error: RuntimeError) -> Result<()> {
        match hook.criticality() {
            HookCriticality::Critical => {
                error!(
                    target: "armoury::hooks",
                    hook = hook.name(),
                    criticality = "critical",
                    error = %error,
                    "Critical hook failed, aborting dispatch"
                );
                Err(error)
            }
            HookCriticality::Important => {
                error!(
                    target: "armoury::hooks",
                    hook = hook.name(),
                    criticality = "important",
                    error = %error,
                    "Hook failed, continuing"
                );
                Ok(())
            }
            HookCriticality::Optional => {
                debug!(
                    target: "armoury::hooks",
                    hook = hook.name(),
                    criticality = "optional",
                    error = %error,
                    "Optional hook failed"
                );
                Ok(())
            }
        }
    }
}

impl Default for HookRegistry {
    fn default() -> Self {
        Self::default_hooks()
    }
}
