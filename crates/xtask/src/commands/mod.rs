//! Command implementations for xtask
//!
//! Each command is a separate module that implements its own CLI args and execution logic.

mod expire_rune;
mod inspect;
mod repair_report;
mod ring_test;

pub use expire_rune::ExpireRune;
pub use inspect::Inspect;
pub use repair_report::RepairReport;
pub use ring_test::RingTest;
