//! Execution context provided to hooks during evaluation.

use crate::events::Event;
use crate::services::Services;

/// Context provided to hooks: the dispatched event and the services to act with.
pub struct HookContext<'a> {
    pub event: &'a Event,
    pub services: &'a Services,
}

impl<'a> HookContext<'a> {
    pub fn new(event: &'a Event, services: &'a Services) -> Self {
        Self { event, services }
    }
}
