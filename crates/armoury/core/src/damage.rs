//! Damage-state evaluation.
//!
//! Turns an item record into a normalized [`DamageReport`]: how much damage it
//! has taken, how much it can take, and (for armour) which locations are hurt.
//!
//! # Capacity
//!
//! ```text
//! weapon   = first integer in the damage description + Durable
//! trapping = Durable
//! armour   = per location: AP + Durable
//! ```

use crate::ids::ItemId;
use crate::item::{ArmourData, Item, ItemCategory, ItemKind, WeaponData};
use crate::location::HitLocation;

/// Capacity of a weapon whose damage description carries no number and that
/// has no Durable quality.
pub const WEAPON_FALLBACK_CAPACITY: u32 = 999;

/// Reads the first run of digits (at most three) from a damage description.
///
/// `"+SB+4"` → 4, `"12"` → 12, `"1234"` → 123, `"SB"` → `None`.
pub fn parse_damage_rating(description: &str) -> Option<u32> {
    let digits: String = description
        .chars()
        .skip_while(|c| !c.is_ascii_digit())
        .take_while(char::is_ascii_digit)
        .take(3)
        .collect();
    digits.parse().ok()
}

/// Damage a weapon can absorb before it is ruined.
pub fn weapon_capacity(weapon: &WeaponData, durable: u32) -> u32 {
    match parse_damage_rating(&weapon.damage)
        .unwrap_or(0)
        .saturating_add(durable)
    {
        0 => WEAPON_FALLBACK_CAPACITY,
        capacity => capacity,
    }
}

/// Damage a trapping (or ring) can absorb before it is ruined.
pub const fn trapping_capacity(durable: u32) -> u32 {
    durable
}

/// Damage one armour location can absorb.
pub const fn location_capacity(ap: u32, durable: u32) -> u32 {
    ap.saturating_add(durable)
}

/// Damage absorbed by one armour location.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LocationDamage {
    pub location: HitLocation,
    pub ap: u32,
    pub damage: u32,
}

/// Category-specific part of a [`DamageReport`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DamageDetail {
    /// Single damage track (weapons, trappings, rings).
    Durability { current: u32, max: u32 },
    /// Damaged armour locations with positive AP.
    Locations(Vec<LocationDamage>),
}

/// Normalized damage state of one item.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DamageReport {
    pub item: ItemId,
    pub name: String,
    pub category: ItemCategory,
    pub is_damaged: bool,
    /// Item price in brass pennies.
    pub price: u64,
    pub detail: DamageDetail,
}

impl DamageReport {
    /// Damage on the single track, or the sum over armour locations.
    pub fn current_damage(&self) -> u32 {
        match &self.detail {
            DamageDetail::Durability { current, .. } => *current,
            DamageDetail::Locations(locations) => locations.iter().map(|l| l.damage).sum(),
        }
    }

    /// Capacity of the single track. Armour has none.
    pub fn max_damage(&self) -> Option<u32> {
        match &self.detail {
            DamageDetail::Durability { max, .. } => Some(*max),
            DamageDetail::Locations(_) => None,
        }
    }

    /// True when the single damage track is full.
    pub fn is_at_capacity(&self) -> bool {
        match self.detail {
            DamageDetail::Durability { current, max } => current >= max && current > 0,
            DamageDetail::Locations(_) => false,
        }
    }

    pub fn locations(&self) -> &[LocationDamage] {
        match &self.detail {
            DamageDetail::Locations(locations) => locations,
            DamageDetail::Durability { .. } => &[],
        }
    }
}

/// Computes the damage report of any item.
pub fn evaluate(item: &Item) -> DamageReport {
    let durable = item.durable_bonus();
    let detail = match &item.kind {
        ItemKind::Weapon(weapon) => DamageDetail::Durability {
            current: weapon.damage_to_item,
            max: weapon_capacity(weapon, durable),
        },
        ItemKind::Armour(armour) => DamageDetail::Locations(damaged_locations(armour)),
        ItemKind::Trapping(trapping) => DamageDetail::Durability {
            current: trapping.damage_to_item.unwrap_or(0),
            max: trapping_capacity(durable),
        },
        ItemKind::Ring(ring) => DamageDetail::Durability {
            current: ring.damage_to_item.unwrap_or(0),
            max: trapping_capacity(durable),
        },
    };

    let is_damaged = match &detail {
        DamageDetail::Durability { current, .. } => *current > 0,
        DamageDetail::Locations(locations) => !locations.is_empty(),
    };

    DamageReport {
        item: item.id.clone(),
        name: item.name.clone(),
        category: item.category(),
        is_damaged,
        price: item.price.in_pennies(),
        detail,
    }
}

/// Locations with positive AP that have absorbed damage, in location order.
pub fn damaged_locations(armour: &ArmourData) -> Vec<LocationDamage> {
    armour
        .locations
        .iter()
        .filter(|(_, protection)| protection.ap > 0 && protection.damage > 0)
        .map(|(location, protection)| LocationDamage {
            location: *location,
            ap: protection.ap,
            damage: protection.damage,
        })
        .collect()
}
