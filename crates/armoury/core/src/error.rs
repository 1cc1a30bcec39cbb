//! Error types raised by the pure item rules.
//!
//! Degradation itself never fails: a saturated item is a normal outcome, not
//! an error. Errors here cover malformed input (currency strings) and ring
//! rules that refuse to run.

use crate::ids::{ItemId, SpellRef};

/// Failure to parse a coin string such as `"1 GC 4 SS"`.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CurrencyError {
    #[error("amount string is empty")]
    Empty,

    #[error("invalid coin count `{0}`")]
    InvalidAmount(String),

    #[error("coin count is missing its denomination")]
    MissingDenomination,

    #[error("unknown denomination `{0}`")]
    UnknownDenomination(String),

    #[error("amount does not fit into 64 bits")]
    Overflow,
}

/// Failures of ring-specific rules.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RingError {
    #[error("item {0} is not a magic ring")]
    NotARing(ItemId),

    #[error("ring {0} has no spell bound to it")]
    NoSpellBound(ItemId),

    #[error("spell {0} could not be resolved")]
    SpellNotFound(SpellRef),
}
