//! Repair-cost computation.
//!
//! Each point of damage costs a tenth of the item's price. Amounts are kept in
//! brass pennies and truncated toward zero, so the total is computed from the
//! full product (`price * damage / 10`) rather than from the rounded per-point
//! cost.

use crate::currency::Money;
use crate::damage::DamageReport;

/// Share of the price charged per point of damage, as a divisor.
pub const REPAIR_PRICE_DIVISOR: u64 = 10;

/// Cost of repairing one item.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RepairQuote {
    pub damage: u32,
    pub per_point: Money,
    pub total: Money,
}

/// Cost of repairing a single point of damage on an item worth `price` pennies.
pub fn per_point_cost(price: u64) -> Money {
    Money(price / REPAIR_PRICE_DIVISOR)
}

/// Cost of repairing `damage` points on an item worth `price` pennies.
pub fn total_cost(price: u64, damage: u32) -> Money {
    Money(price.saturating_mul(u64::from(damage)) / REPAIR_PRICE_DIVISOR)
}

/// Quotes the repair of a damaged item. Undamaged items get no quote.
pub fn quote(report: &DamageReport) -> Option<RepairQuote> {
    if !report.is_damaged {
        return None;
    }

    let damage = report.current_damage();
    Some(RepairQuote {
        damage,
        per_point: per_point_cost(report.price),
        total: total_cost(report.price, damage),
    })
}
