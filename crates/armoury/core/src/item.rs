//! Item records and their category-specific data.
//!
//! # Design: Base + Kind Pattern
//!
//! - [`Item`] holds what every physical item has (name, price, qualities, effects)
//! - [`ItemKind`] holds the data only one category carries (weapon damage,
//!   armour locations, ring spell)
//!
//! Degradation and repair rules match on [`ItemKind`] instead of probing for
//! optional fields.

use std::collections::BTreeMap;

use strum::{AsRefStr, Display};

use crate::currency::Price;
use crate::ids::{EffectId, ItemId, ItemRef};
use crate::location::HitLocation;
use crate::ring::RingData;

/// Suffix appended to the name of an item that has been ruined.
pub const DAMAGED_MARKER: &str = " (damaged)";

/// Degradation category of an item.
///
/// Rings and every other physical item fall back to [`ItemCategory::Trapping`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, AsRefStr, Display)]
#[strum(serialize_all = "lowercase")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ItemCategory {
    Weapon,
    Armour,
    Trapping,
}

/// A piece of equipment owned by an actor (or lying in the world).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub img: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub price: Price,
    #[cfg_attr(feature = "serde", serde(default))]
    pub properties: ItemProperties,
    #[cfg_attr(feature = "serde", serde(default))]
    pub effects: Vec<ActiveEffect>,
    pub kind: ItemKind,
}

/// Qualities and flaws attached to an item.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemProperties {
    /// Rating of the Durable quality, if the item has it.
    #[cfg_attr(feature = "serde", serde(default))]
    pub durable: Option<u32>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub qualities: Vec<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub flaws: Vec<String>,
}

/// Category-specific item data.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ItemKind {
    Weapon(WeaponData),
    Armour(ArmourData),
    Trapping(TrappingData),
    Ring(RingData),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeaponData {
    /// Damage description, e.g. `"+SB+4"`.
    pub damage: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub equipped: bool,
    #[cfg_attr(feature = "serde", serde(default))]
    pub damage_to_item: u32,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArmourData {
    #[cfg_attr(feature = "serde", serde(default))]
    pub worn: bool,
    #[cfg_attr(feature = "serde", serde(default))]
    pub locations: BTreeMap<HitLocation, LocationProtection>,
}

/// Protection of one armour location and the damage it has absorbed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LocationProtection {
    pub ap: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub damage: u32,
}

impl LocationProtection {
    pub const fn new(ap: u32, damage: u32) -> Self {
        Self { ap, damage }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrappingData {
    #[cfg_attr(feature = "serde", serde(default))]
    pub worn: bool,
    /// Absent until the item is damaged for the first time.
    #[cfg_attr(feature = "serde", serde(default))]
    pub damage_to_item: Option<u32>,
}

/// Effect embedded in an actor or an item.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActiveEffect {
    pub id: EffectId,
    pub name: String,
    /// Document path of the item that granted this effect.
    #[cfg_attr(feature = "serde", serde(default))]
    pub origin: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub disabled: bool,
}

impl ActiveEffect {
    pub fn new(id: impl Into<EffectId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            origin: None,
            disabled: false,
        }
    }

    pub fn with_origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    /// True for effects named like `"Rune of Fury (Temporary)"`.
    pub fn is_temporary_rune(&self) -> bool {
        let name = self.name.to_lowercase();
        name.contains("rune of") && name.contains("temporary")
    }

    /// Parses the origin into an item path, if it points at an item.
    pub fn origin_item(&self) -> Option<ItemRef> {
        self.origin.as_deref()?.parse().ok()
    }
}

impl Item {
    pub fn new(id: impl Into<ItemId>, name: impl Into<String>, kind: ItemKind) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            img: None,
            description: String::new(),
            price: Price::default(),
            properties: ItemProperties::default(),
            effects: Vec::new(),
            kind,
        }
    }

    pub fn weapon(id: impl Into<ItemId>, name: impl Into<String>, damage: &str) -> Self {
        Self::new(
            id,
            name,
            ItemKind::Weapon(WeaponData {
                damage: damage.to_string(),
                equipped: true,
                damage_to_item: 0,
            }),
        )
    }

    pub fn armour(
        id: impl Into<ItemId>,
        name: impl Into<String>,
        locations: impl IntoIterator<Item = (HitLocation, LocationProtection)>,
    ) -> Self {
        Self::new(
            id,
            name,
            ItemKind::Armour(ArmourData {
                worn: true,
                locations: locations.into_iter().collect(),
            }),
        )
    }

    pub fn trapping(id: impl Into<ItemId>, name: impl Into<String>) -> Self {
        Self::new(id, name, ItemKind::Trapping(TrappingData::default()))
    }

    #[must_use]
    pub fn with_price(mut self, price: Price) -> Self {
        self.price = price;
        self
    }

    #[must_use]
    pub fn with_durable(mut self, rating: u32) -> Self {
        self.properties.durable = Some(rating);
        self
    }

    #[must_use]
    pub fn with_effect(mut self, effect: ActiveEffect) -> Self {
        self.effects.push(effect);
        self
    }

    #[must_use]
    pub fn with_equipped(mut self, equipped: bool) -> Self {
        self.set_equipped(equipped);
        self
    }

    pub fn category(&self) -> ItemCategory {
        match self.kind {
            ItemKind::Weapon(_) => ItemCategory::Weapon,
            ItemKind::Armour(_) => ItemCategory::Armour,
            ItemKind::Trapping(_) | ItemKind::Ring(_) => ItemCategory::Trapping,
        }
    }

    /// Durable quality rating, 0 when absent.
    pub fn durable_bonus(&self) -> u32 {
        self.properties.durable.unwrap_or(0)
    }

    /// Whether the item is equipped (weapons) or worn (everything else).
    pub fn is_equipped(&self) -> bool {
        match &self.kind {
            ItemKind::Weapon(data) => data.equipped,
            ItemKind::Armour(data) => data.worn,
            ItemKind::Trapping(data) => data.worn,
            ItemKind::Ring(data) => data.worn,
        }
    }

    pub fn set_equipped(&mut self, equipped: bool) {
        match &mut self.kind {
            ItemKind::Weapon(data) => data.equipped = equipped,
            ItemKind::Armour(data) => data.worn = equipped,
            ItemKind::Trapping(data) => data.worn = equipped,
            ItemKind::Ring(data) => data.worn = equipped,
        }
    }

    pub fn is_marked_damaged(&self) -> bool {
        self.name.ends_with(DAMAGED_MARKER)
    }

    /// Appends the damaged marker once. Returns false if it was already present.
    pub fn mark_damaged(&mut self) -> bool {
        if self.is_marked_damaged() {
            return false;
        }
        self.name.push_str(DAMAGED_MARKER);
        true
    }

    pub fn ring(&self) -> Option<&RingData> {
        match &self.kind {
            ItemKind::Ring(data) => Some(data),
            _ => None,
        }
    }

    pub fn ring_mut(&mut self) -> Option<&mut RingData> {
        match &mut self.kind {
            ItemKind::Ring(data) => Some(data),
            _ => None,
        }
    }

    pub fn find_effect_named(&self, name: &str) -> Option<&ActiveEffect> {
        self.effects.iter().find(|effect| effect.name == name)
    }

    pub fn remove_effect(&mut self, id: &EffectId) -> Option<ActiveEffect> {
        let index = self.effects.iter().position(|effect| &effect.id == id)?;
        Some(self.effects.remove(index))
    }
}
