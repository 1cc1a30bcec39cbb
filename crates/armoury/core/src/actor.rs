//! Actors that own items and carry effects.

use strum::{AsRefStr, Display, EnumString};

use crate::config::RingSettings;
use crate::ids::{ActorId, EffectId, ItemId};
use crate::item::{ActiveEffect, Item, ItemCategory, ItemKind};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, AsRefStr, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ActorKind {
    Character,
    Npc,
    Creature,
    Vehicle,
}

impl ActorKind {
    pub const fn is_character(self) -> bool {
        matches!(self, Self::Character)
    }
}

/// Section of the inventory an item is listed under.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, AsRefStr, Display)]
pub enum InventorySection {
    Weapons,
    Armour,
    ClothingAccessories,
    MagicRings,
}

impl InventorySection {
    pub const fn label_key(self) -> &'static str {
        match self {
            Self::Weapons => "Armoury.Inventory.Weapons",
            Self::Armour => "Armoury.Inventory.Armour",
            Self::ClothingAccessories => "Armoury.Inventory.ClothingAccessories",
            Self::MagicRings => "Armoury.Rings.MagicRings",
        }
    }
}

/// An actor with its embedded items and effects.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Actor {
    pub id: ActorId,
    pub name: String,
    pub kind: ActorKind,
    #[cfg_attr(feature = "serde", serde(default))]
    pub items: Vec<Item>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub effects: Vec<ActiveEffect>,
}

impl Actor {
    pub fn new(id: impl Into<ActorId>, name: impl Into<String>, kind: ActorKind) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind,
            items: Vec::new(),
            effects: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_item(mut self, item: Item) -> Self {
        self.items.push(item);
        self
    }

    #[must_use]
    pub fn with_effect(mut self, effect: ActiveEffect) -> Self {
        self.effects.push(effect);
        self
    }

    pub fn item(&self, id: &ItemId) -> Option<&Item> {
        self.items.iter().find(|item| &item.id == id)
    }

    pub fn item_mut(&mut self, id: &ItemId) -> Option<&mut Item> {
        self.items.iter_mut().find(|item| &item.id == id)
    }

    pub fn effect(&self, id: &EffectId) -> Option<&ActiveEffect> {
        self.effects.iter().find(|effect| &effect.id == id)
    }

    pub fn remove_effect(&mut self, id: &EffectId) -> Option<ActiveEffect> {
        let index = self.effects.iter().position(|effect| &effect.id == id)?;
        Some(self.effects.remove(index))
    }

    /// Replaces the stored copy of `item`. Returns false if the actor does not own it.
    pub fn replace_item(&mut self, item: Item) -> bool {
        match self.item_mut(&item.id) {
            Some(slot) => {
                *slot = item;
                true
            }
            None => false,
        }
    }

    /// Items of one degradation category. Rings count as trappings.
    pub fn items_of(&self, category: ItemCategory) -> impl Iterator<Item = &Item> {
        self.items.iter().filter(move |item| item.category() == category)
    }

    pub fn rings(&self) -> impl Iterator<Item = &Item> {
        self.items
            .iter()
            .filter(|item| matches!(item.kind, ItemKind::Ring(_)))
    }

    /// Groups the inventory into display sections.
    ///
    /// Rings get a "Magic Rings" section of their own when
    /// [`RingSettings::own_category`] is set. Otherwise they are listed after
    /// the other clothing and accessories.
    pub fn inventory(&self, rings: &RingSettings) -> Vec<(InventorySection, Vec<&Item>)> {
        let of_kind = |matches: fn(&ItemKind) -> bool| -> Vec<&Item> {
            self.items.iter().filter(|item| matches(&item.kind)).collect()
        };
        let weapons = of_kind(|kind| matches!(kind, ItemKind::Weapon(_)));
        let armour = of_kind(|kind| matches!(kind, ItemKind::Armour(_)));
        let mut accessories = of_kind(|kind| matches!(kind, ItemKind::Trapping(_)));
        let ring_items: Vec<&Item> = self.rings().collect();

        let mut sections = vec![
            (InventorySection::Weapons, weapons),
            (InventorySection::Armour, armour),
        ];
        if rings.own_category {
            sections.push((InventorySection::ClothingAccessories, accessories));
            sections.push((InventorySection::MagicRings, ring_items));
        } else {
            accessories.extend(ring_items);
            sections.push((InventorySection::ClothingAccessories, accessories));
        }
        sections
    }
}
