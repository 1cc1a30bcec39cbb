//! Worker tasks that back the runtime orchestration.
//!
//! The dispatch worker owns the services and the hook registry and processes
//! commands one at a time, so each event runs to completion before the next.

mod dispatch;

pub use dispatch::{Command, DispatchWorker};
