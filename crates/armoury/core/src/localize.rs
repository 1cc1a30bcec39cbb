//! Localization of user-facing strings.
//!
//! Every message the engine produces goes through a [`Localizer`], which the
//! host injects. [`Catalog`] is the in-process implementation: a key → template
//! table with `{param}` placeholders, pre-filled with English strings.

use std::collections::HashMap;

/// Formats localized strings by key.
pub trait Localizer: Send + Sync {
    /// Formats the template stored under `key`, substituting `{name}` placeholders.
    ///
    /// Unknown keys must fall back to something displayable (the key itself).
    fn format(&self, key: &str, params: &[(&str, &str)]) -> String;

    /// Localizes a key that takes no parameters.
    fn localize(&self, key: &str) -> String {
        self.format(key, &[])
    }
}

/// Key → template table.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Catalog {
    entries: HashMap<String, String>,
}

impl Catalog {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Catalog with the built-in English strings.
    pub fn english() -> Self {
        let entries = ENGLISH
            .iter()
            .map(|(key, template)| (key.to_string(), template.to_string()))
            .collect();
        Self { entries }
    }

    pub fn insert(&mut self, key: impl Into<String>, template: impl Into<String>) {
        self.entries.insert(key.into(), template.into());
    }

    /// Overrides entries of `self` with the entries of `other`.
    pub fn merge(&mut self, other: Catalog) {
        self.entries.extend(other.entries);
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, String)> for Catalog {
    fn from_iter<T: IntoIterator<Item = (String, String)>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl Localizer for Catalog {
    fn format(&self, key: &str, params: &[(&str, &str)]) -> String {
        let template = self.get(key).unwrap_or(key);
        substitute(template, params)
    }
}

/// Replaces every `{name}` in `template` with the matching parameter.
pub fn substitute(template: &str, params: &[(&str, &str)]) -> String {
    let mut out = template.to_string();
    for (name, value) in params {
        out = out.replace(&format!("{{{}}}", name), value);
    }
    out
}

const ENGLISH: &[(&str, &str)] = &[
    // Locations
    ("Armoury.Locations.head", "Head"),
    ("Armoury.Locations.lArm", "Left Arm"),
    ("Armoury.Locations.rArm", "Right Arm"),
    ("Armoury.Locations.body", "Body"),
    ("Armoury.Locations.lLeg", "Left Leg"),
    ("Armoury.Locations.rLeg", "Right Leg"),
    // Degradation
    ("Armoury.Damage.WeaponDamaged", "Weapon received 1 Damage."),
    (
        "Armoury.Damage.WeaponRuined",
        "Weapon received 1 Damage and got unequipped because of it \
         (it's now considered an Improvised Weapon).",
    ),
    (
        "Armoury.Damage.WeaponAlreadyRuined",
        "Weapon is already ruined and can't be damaged more.",
    ),
    ("Armoury.Damage.ArmourDamaged", "Armour received 1 Damage on {location}."),
    ("Armoury.Damage.ArmourSaturated", "Armour couldn't be damaged more."),
    ("Armoury.Damage.ItemDamaged", "Item received 1 Damage."),
    (
        "Armoury.Damage.ItemDamagedUnequipped",
        "Item received 1 Damage and got unequipped because of it.",
    ),
    ("Armoury.Damage.ItemBroken", "Item got Damaged."),
    (
        "Armoury.Damage.ItemBrokenUnequipped",
        "Item got Damaged and got unequipped because of it.",
    ),
    (
        "Armoury.Damage.ItemAlreadyRuined",
        "Item is already ruined and can't be damaged more.",
    ),
    // Temporary runes
    (
        "Armoury.Runes.Removed",
        "Removed \"{effect}\" effect from Actor \"{actor}\" and Item \"{item}\". \
         It was Temporary Rune that got disabled. {outcome}",
    ),
    (
        "Armoury.Runes.RemovedFromActor",
        "Removed \"{effect}\" effect from Actor \"{actor}\".",
    ),
    (
        "Armoury.Runes.ItemMissing",
        "{summary} The item it came from could not be found, so nothing was damaged.",
    ),
    // Repair report
    ("Armoury.Repair.Weapon", "Weapon"),
    ("Armoury.Repair.Item", "Item"),
    ("Armoury.Repair.Armour", "Armour"),
    (
        "Armoury.Repair.Mangled",
        "Weapon is mangled beyond recognition. \
         It's treated now as an Improvised Weapon and can't normally be repaired.",
    ),
    (
        "Armoury.Repair.Ruined",
        "Item is ruined and can't normally be repaired.",
    ),
    (
        "Armoury.Repair.DamageLine",
        "{kind} has received {damage} points of damage out of maximum {max} it can sustain.",
    ),
    (
        "Armoury.Repair.LocationLine",
        "{location}: {damage} points of damage on {ap} AP.",
    ),
    (
        "Armoury.Repair.CostLine",
        "Repairing it will cost {single} per damage for a total of {total}.",
    ),
    // Inventory sections
    ("Armoury.Inventory.Weapons", "Weapons"),
    ("Armoury.Inventory.Armour", "Armour"),
    ("Armoury.Inventory.ClothingAccessories", "Clothing & Accessories"),
    // Rings
    ("Armoury.Rings.MagicRings", "Magic Rings"),
    ("Armoury.Rings.RingTest", "Ring Test"),
    ("Armoury.Rings.RingOf", "Ring of {spell}"),
    ("Armoury.Rings.NewRingDefaultName", "New Ring"),
    ("Armoury.Rings.CastFromRing", "Cast {spell}"),
    ("Armoury.Rings.ChangeRingNameTitle", "Change Ring Name"),
    (
        "Armoury.Rings.ChangeRingNameContent",
        "Do you want to change the ring's name to \"{name}\"?",
    ),
    (
        "Armoury.Rings.ChangeRingDescription",
        "The ring's description will be replaced with the spell's description.",
    ),
    (
        "Armoury.Rings.ActorCanNotUse",
        "{actor} can't use {ring}. The ring has to be worn first.",
    ),
    ("Armoury.Spell.Ritual", "Ritual"),
    ("Armoury.Spell.MagicMissile", "Magic Missile"),
    ("Armoury.Spell.AoE", "AoE"),
    ("Armoury.Spell.RandomVortex", "Random Vortex"),
];
