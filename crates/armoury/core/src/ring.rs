//! Magic rings: items that cast a bound spell without a casting roll.
//!
//! A ring stores a reference to a spell. Linking a spell may rename the ring
//! ([`plan_rename`]), and using a worn ring prepares a pre-resolved
//! [`RingCastTest`]: the spell is cast as memorized, with CN 0 and a fixed
//! success of SL +0.

use strum::{AsRefStr, Display, EnumString};

use crate::actor::ActorKind;
use crate::config::{NameChangePolicy, RingSettings};
use crate::error::RingError;
use crate::ids::{ActorId, EffectId, ItemId, SpellRef};
use crate::item::Item;
use crate::localize::Localizer;

/// Icon given to rings created with a placeholder image.
pub const RING_ICON: &str = "icons/equipment/finger/ring-cabochon-gold-green.webp";

/// Placeholder images the host assigns to new items.
pub const PLACEHOLDER_ICONS: [&str; 2] =
    ["icons/svg/item-bag.svg", "systems/wfrp4e/icons/blank.png"];

/// How easy an item is to buy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, AsRefStr, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Availability {
    #[default]
    None,
    Common,
    Scarce,
    Rare,
    Exotic,
}

/// Ring-specific item data.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RingData {
    pub spell: Option<SpellRef>,
    pub worn: bool,
    pub quantity: u32,
    pub encumbrance: Option<u32>,
    pub availability: Option<Availability>,
    pub damage_to_item: Option<u32>,
}

impl Default for RingData {
    fn default() -> Self {
        Self {
            spell: None,
            worn: false,
            quantity: 1,
            encumbrance: None,
            availability: None,
            damage_to_item: None,
        }
    }
}

impl RingData {
    pub fn with_spell(spell: impl Into<SpellRef>) -> Self {
        Self {
            spell: Some(spell.into()),
            ..Self::default()
        }
    }

    /// A ring can be used while at least one is carried and it is worn.
    pub fn can_use(&self) -> bool {
        self.quantity > 0 && self.worn
    }

    /// Flips the worn state and returns the new value.
    pub fn toggle_worn(&mut self) -> bool {
        self.worn = !self.worn;
        self.worn
    }
}

/// How a spell effect is applied when the spell resolves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, AsRefStr, Display)]
#[strum(serialize_all = "lowercase")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum EffectApplication {
    Damage,
    Target,
    Area,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpellEffect {
    pub id: EffectId,
    pub name: String,
    pub application: EffectApplication,
}

/// Spell as loaded from the host's compendium.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Spell {
    pub uuid: SpellRef,
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: String,
    /// Casting number.
    #[cfg_attr(feature = "serde", serde(default))]
    pub cn: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub memorized: bool,
    #[cfg_attr(feature = "serde", serde(default))]
    pub ritual: bool,
    #[cfg_attr(feature = "serde", serde(default))]
    pub magic_missile: bool,
    #[cfg_attr(feature = "serde", serde(default))]
    pub aoe: bool,
    #[cfg_attr(feature = "serde", serde(default))]
    pub vortex: bool,
    /// Damage formula, if the spell deals damage.
    #[cfg_attr(feature = "serde", serde(default))]
    pub damage: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub effects: Vec<SpellEffect>,
}

impl Spell {
    pub fn new(uuid: impl Into<SpellRef>, name: impl Into<String>) -> Self {
        Self {
            uuid: uuid.into(),
            name: name.into(),
            description: String::new(),
            cn: 0,
            memorized: false,
            ritual: false,
            magic_missile: false,
            aoe: false,
            vortex: false,
            damage: None,
            effects: Vec::new(),
        }
    }

    pub fn deals_damage(&self) -> bool {
        self.damage.as_deref().is_some_and(|d| !d.trim().is_empty())
    }

    fn effects_applied_as(
        &self,
        application: EffectApplication,
    ) -> impl Iterator<Item = &SpellEffect> {
        self.effects.iter().filter(move |e| e.application == application)
    }
}

// ============================================================================
// Creation
// ============================================================================

/// Fills in the defaults of a ring that is about to be created.
///
/// `owner` is the kind of the actor receiving the ring, `None` for rings
/// created in the world.
pub fn apply_creation_defaults(
    item: &mut Item,
    owner: Option<ActorKind>,
    settings: &RingSettings,
    localizer: &dyn Localizer,
) -> Result<(), RingError> {
    let placeholder = item
        .img
        .as_deref()
        .is_none_or(|img| img.is_empty() || PLACEHOLDER_ICONS.contains(&img));

    if placeholder {
        item.img = Some(RING_ICON.to_string());
        if let Some(number) = copy_number(&item.name) {
            let base = localizer.localize("Armoury.Rings.NewRingDefaultName");
            item.name = format!("{base} {number}");
        }
    }

    let item_id = item.id.clone();
    let ring = item.ring_mut().ok_or(RingError::NotARing(item_id))?;

    if owner.is_some_and(|kind| !kind.is_character() && kind != ActorKind::Vehicle) {
        ring.worn = true;
    }
    if ring.encumbrance.is_none_or(|value| value == 0) {
        ring.encumbrance = Some(settings.default_encumbrance);
    }
    if ring.availability.is_none_or(|value| value == Availability::None) {
        ring.availability = Some(settings.default_availability);
    }
    Ok(())
}

/// Finds a `(<digits>)` copy counter in a name, parentheses included.
fn copy_number(name: &str) -> Option<&str> {
    let mut rest = name;
    while let Some(open) = rest.find('(') {
        let candidate = &rest[open..];
        if let Some(close) = candidate.find(')') {
            let digits = &candidate[1..close];
            if !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit()) {
                return Some(&candidate[..=close]);
            }
        }
        rest = &candidate[1..];
    }
    None
}

// ============================================================================
// Renaming
// ============================================================================

/// Host confirmation needed before a rename is applied.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenamePrompt {
    pub title: String,
    pub content: String,
}

/// Name (and optionally description) proposed after a spell is linked.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenamePlan {
    pub name: String,
    pub description: Option<String>,
    /// Present when the user has to agree first.
    pub prompt: Option<RenamePrompt>,
}

impl RenamePlan {
    pub fn apply(&self, item: &mut Item) {
        item.name.clone_from(&self.name);
        if let Some(description) = &self.description {
            item.description.clone_from(description);
        }
    }
}

/// Whether a spell change needs a rename plan at all. The spell is only
/// loaded when this returns true.
pub fn wants_rename(policy: NameChangePolicy, skip_ask: bool) -> bool {
    skip_ask || policy != NameChangePolicy::Never
}

/// Plans the rename of a ring after `spell` got linked to it.
///
/// `skip_ask` comes from callers that already decided (e.g. a ring created
/// from a spell): no prompt, and the description is always replaced.
pub fn plan_rename(
    spell: &Spell,
    settings: &RingSettings,
    skip_ask: bool,
    localizer: &dyn Localizer,
) -> Option<RenamePlan> {
    if !wants_rename(settings.update_name, skip_ask) {
        return None;
    }

    let name = localizer.format("Armoury.Rings.RingOf", &[("spell", &spell.name)]);
    let mut content = localizer.format("Armoury.Rings.ChangeRingNameContent", &[("name", &name)]);

    let description = (skip_ask || settings.replace_description).then(|| {
        content.push('\n');
        content.push_str(&localizer.localize("Armoury.Rings.ChangeRingDescription"));
        spell.description.clone()
    });

    let prompt = (!skip_ask && settings.update_name == NameChangePolicy::Ask).then(|| RenamePrompt {
        title: localizer.localize("Armoury.Rings.ChangeRingNameTitle"),
        content,
    });

    Some(RenamePlan {
        name,
        description,
        prompt,
    })
}

// ============================================================================
// Casting
// ============================================================================

/// Outcome of a test.
#[derive(Clone, Copy, Debug, PartialEq, Eq, AsRefStr, Display)]
#[strum(serialize_all = "lowercase")]
pub enum TestOutcome {
    Success,
    Failure,
}

/// Spell effect re-addressed through the ring's spell reference.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RingEffect {
    pub id: EffectId,
    pub name: String,
    pub uuid: String,
}

/// A spell cast from a ring. No dice are rolled: the result is fixed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RingCastTest {
    pub actor: ActorId,
    pub ring: ItemId,
    /// Copy of the bound spell with `memorized = true` and `cn = 0`.
    pub spell: Spell,
    pub roll: i32,
    pub target: i32,
    pub outcome: TestOutcome,
    pub sl: i32,
    pub sl_over: i32,
    /// Whether the test rolls a hit location (the spell deals damage).
    pub hit_location: bool,
    pub damage_effects: Vec<RingEffect>,
    pub target_effects: Vec<RingEffect>,
    pub area_effects: Vec<RingEffect>,
}

impl RingCastTest {
    /// Sentinel used for the roll and the target of a pre-resolved test.
    pub const UNROLLED: i32 = -1;

    /// Prepares the cast of `spell` from `ring` by `actor`.
    ///
    /// The caller checks [`RingData::can_use`] first; this only validates the
    /// ring and its spell binding.
    pub fn prepare(actor: ActorId, ring: &Item, spell: &Spell) -> Result<Self, RingError> {
        let data = ring.ring().ok_or_else(|| RingError::NotARing(ring.id.clone()))?;
        let bound = data
            .spell
            .as_ref()
            .ok_or_else(|| RingError::NoSpellBound(ring.id.clone()))?;

        let mut cast = spell.clone();
        cast.memorized = true;
        cast.cn = 0;

        let map = |application| {
            spell
                .effects_applied_as(application)
                .map(|effect| RingEffect {
                    id: effect.id.clone(),
                    name: effect.name.clone(),
                    uuid: effect_uuid(bound, &effect.id),
                })
                .collect()
        };

        Ok(Self {
            actor,
            ring: ring.id.clone(),
            hit_location: cast.deals_damage(),
            damage_effects: map(EffectApplication::Damage),
            target_effects: map(EffectApplication::Target),
            area_effects: map(EffectApplication::Area),
            spell: cast,
            roll: Self::UNROLLED,
            target: Self::UNROLLED,
            outcome: TestOutcome::Success,
            sl: 0,
            sl_over: 0,
        })
    }

    /// Success level as displayed, e.g. `"+0"`.
    pub fn sl_label(&self) -> String {
        format!("{:+}", self.sl)
    }
}

/// Document path of a spell effect reached through the ring's spell.
pub fn effect_uuid(spell: &SpellRef, effect: &EffectId) -> String {
    format!("{spell}.ActiveEffect.{effect}")
}

// ============================================================================
// Display
// ============================================================================

/// Property tags shown on a ring's summary: spell name and flags, then the
/// ring's own qualities and flaws.
pub fn expand_properties(
    ring: &Item,
    spell: Option<&Spell>,
    localizer: &dyn Localizer,
) -> Vec<String> {
    let mut properties = Vec::new();

    if let Some(spell) = spell {
        properties.push(spell.name.clone());
        let flags = [
            (spell.ritual, "Armoury.Spell.Ritual"),
            (spell.magic_missile, "Armoury.Spell.MagicMissile"),
            (spell.aoe, "Armoury.Spell.AoE"),
            (spell.vortex, "Armoury.Spell.RandomVortex"),
        ];
        properties.extend(
            flags
                .into_iter()
                .filter(|(set, _)| *set)
                .map(|(_, key)| localizer.localize(key)),
        );
    }

    properties.extend(ring.properties.qualities.iter().cloned());
    properties.extend(ring.properties.flaws.iter().cloned());
    properties.retain(|p| !p.is_empty());
    properties
}

/// Label of the "cast" action on a ring bound to `spell`.
pub fn cast_label(spell: &Spell, localizer: &dyn Localizer) -> String {
    localizer.format("Armoury.Rings.CastFromRing", &[("spell", &spell.name)])
}
