//! Degradation state machine.
//!
//! [`degrade`] applies exactly one point of damage to an item and reports what
//! happened. Per category:
//!
//! ```text
//! weapon    intact ──► damaged ──► ruined      (unequip + name marker on entry)
//! armour    per location: intact ──► damaged   (random eligible location)
//! trapping  intact ──► damaged ──► ruined      (no Durable: straight to ruined)
//! ```
//!
//! Ruined is terminal. An item that is already ruined is left untouched and
//! reported as such, so the name marker and the unequip happen exactly once.

use crate::damage::{location_capacity, trapping_capacity, weapon_capacity};
use crate::item::{ArmourData, Item, ItemKind};
use crate::localize::Localizer;
use crate::location::HitLocation;
use crate::random::RandomSource;

/// Result of one degradation event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DegradationOutcome {
    /// Weapon took one point of damage; `ruined` when it reached capacity now.
    WeaponDamaged { damage: u32, max: u32, ruined: bool },
    /// Weapon was already at capacity.
    WeaponAlreadyRuined,
    /// One armour location took a point of damage.
    ArmourDamaged {
        location: HitLocation,
        damage: u32,
        capacity: u32,
    },
    /// No armour location could absorb more damage.
    ArmourSaturated,
    /// Trapping with Durable took one point of damage.
    ItemDamaged {
        damage: u32,
        max: u32,
        ruined: bool,
        unequipped: bool,
    },
    /// Trapping without spare Durable was ruined outright.
    ItemBroken { unequipped: bool },
    /// Trapping already carries the damaged marker.
    ItemAlreadyRuined,
}

impl DegradationOutcome {
    /// Whether the item record changed and needs to be persisted.
    pub const fn is_mutation(&self) -> bool {
        !matches!(
            self,
            Self::WeaponAlreadyRuined | Self::ArmourSaturated | Self::ItemAlreadyRuined
        )
    }

    /// Whether the item entered the ruined state during this event.
    pub const fn ruined_now(&self) -> bool {
        match self {
            Self::WeaponDamaged { ruined, .. } | Self::ItemDamaged { ruined, .. } => *ruined,
            Self::ItemBroken { .. } => true,
            _ => false,
        }
    }

    /// Localization key of the summary sentence.
    pub const fn message_key(&self) -> &'static str {
        match self {
            Self::WeaponDamaged { ruined: false, .. } => "Armoury.Damage.WeaponDamaged",
            Self::WeaponDamaged { ruined: true, .. } => "Armoury.Damage.WeaponRuined",
            Self::WeaponAlreadyRuined => "Armoury.Damage.WeaponAlreadyRuined",
            Self::ArmourDamaged { .. } => "Armoury.Damage.ArmourDamaged",
            Self::ArmourSaturated => "Armoury.Damage.ArmourSaturated",
            Self::ItemDamaged {
                unequipped: false, ..
            } => "Armoury.Damage.ItemDamaged",
            Self::ItemDamaged {
                unequipped: true, ..
            } => "Armoury.Damage.ItemDamagedUnequipped",
            Self::ItemBroken { unequipped: false } => "Armoury.Damage.ItemBroken",
            Self::ItemBroken { unequipped: true } => "Armoury.Damage.ItemBrokenUnequipped",
            Self::ItemAlreadyRuined => "Armoury.Damage.ItemAlreadyRuined",
        }
    }

    /// Human-readable sentence describing the outcome.
    pub fn describe(&self, localizer: &dyn Localizer) -> String {
        match self {
            Self::ArmourDamaged { location, .. } => {
                let name = localizer.localize(&location.label_key());
                localizer.format(self.message_key(), &[("location", &name)])
            }
            _ => localizer.localize(self.message_key()),
        }
    }
}

/// Applies one point of damage to `item`.
///
/// `random` is consulted once, and only for armour with an eligible location.
pub fn degrade(item: &mut Item, random: &mut dyn RandomSource) -> DegradationOutcome {
    let durable = item.durable_bonus();
    let already_marked = item.is_marked_damaged();

    let outcome = match &mut item.kind {
        ItemKind::Weapon(weapon) => {
            let max = weapon_capacity(weapon, durable);
            if weapon.damage_to_item >= max {
                return DegradationOutcome::WeaponAlreadyRuined;
            }

            weapon.damage_to_item = weapon.damage_to_item.saturating_add(1).min(max);
            let ruined = weapon.damage_to_item == max;
            if ruined {
                weapon.equipped = false;
            }
            DegradationOutcome::WeaponDamaged {
                damage: weapon.damage_to_item,
                max,
                ruined,
            }
        }
        ItemKind::Armour(armour) => return degrade_armour(armour, durable, random),
        ItemKind::Trapping(trapping) => {
            if already_marked {
                return DegradationOutcome::ItemAlreadyRuined;
            }
            degrade_track(&mut trapping.damage_to_item, &mut trapping.worn, durable)
        }
        ItemKind::Ring(ring) => {
            if already_marked {
                return DegradationOutcome::ItemAlreadyRuined;
            }
            degrade_track(&mut ring.damage_to_item, &mut ring.worn, durable)
        }
    };

    if outcome.ruined_now() {
        item.mark_damaged();
    }
    outcome
}

fn degrade_track(slot: &mut Option<u32>, worn: &mut bool, durable: u32) -> DegradationOutcome {
    let max = trapping_capacity(durable);
    let current = slot.get_or_insert(0);

    let counted = max > 0 && *current < max;
    if counted {
        *current = current.saturating_add(1).min(max);
    }

    let ruined = *current >= max;
    let unequipped = ruined && *worn;
    if unequipped {
        *worn = false;
    }

    if counted {
        DegradationOutcome::ItemDamaged {
            damage: *current,
            max,
            ruined,
            unequipped,
        }
    } else {
        DegradationOutcome::ItemBroken { unequipped }
    }
}

/// Locations that can still absorb damage: positive AP and spare capacity.
pub fn eligible_locations(armour: &ArmourData, durable: u32) -> Vec<HitLocation> {
    armour
        .locations
        .iter()
        .filter(|(_, p)| p.ap > 0 && p.damage < location_capacity(p.ap, durable))
        .map(|(location, _)| *location)
        .collect()
}

fn degrade_armour(
    armour: &mut ArmourData,
    durable: u32,
    random: &mut dyn RandomSource,
) -> DegradationOutcome {
    let eligible = eligible_locations(armour, durable);
    if eligible.is_empty() {
        return DegradationOutcome::ArmourSaturated;
    }

    let location = eligible[random.pick_index(eligible.len()) % eligible.len()];
    match armour.locations.get_mut(&location) {
        Some(protection) => {
            let capacity = location_capacity(protection.ap, durable);
            protection.damage = protection.damage.saturating_add(1).min(capacity);
            DegradationOutcome::ArmourDamaged {
                location,
                damage: protection.damage,
                capacity,
            }
        }
        None => DegradationOutcome::ArmourSaturated,
    }
}
