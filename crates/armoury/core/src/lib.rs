//! Deterministic item rules shared by the runtime and the developer tools.
//!
//! `armoury-core` tracks damage on equipment, decides when an item is ruined,
//! prices repairs and implements the magic-ring rules. It performs no I/O:
//! persistence, localization and randomness are reached through the traits
//! defined here ([`Localizer`], [`RandomSource`]) or through the runtime's host
//! ports.
pub mod actor;
pub mod config;
pub mod currency;
pub mod damage;
pub mod degradation;
pub mod error;
pub mod ids;
pub mod item;
pub mod localize;
pub mod location;
pub mod random;
pub mod repair;
pub mod ring;

pub use actor::{Actor, ActorKind, InventorySection};
pub use config::{ArmouryConfig, NameChangePolicy, RingSettings};
pub use currency::{Denomination, Money, Price, format_pennies, parse_pennies, to_pennies};
pub use damage::{DamageDetail, DamageReport, LocationDamage, evaluate};
pub use degradation::{DegradationOutcome, degrade};
pub use error::{CurrencyError, RingError};
pub use ids::{ActorId, EffectId, InvalidItemRef, ItemId, ItemRef, SpellRef};
pub use item::{
    ActiveEffect, ArmourData, DAMAGED_MARKER, Item, ItemCategory, ItemKind, ItemProperties,
    LocationProtection, TrappingData, WeaponData,
};
pub use localize::{Catalog, Localizer};
pub use location::HitLocation;
pub use random::{RandomSource, ScriptedRandom};
pub use repair::{RepairQuote, quote};
pub use ring::{
    Availability, EffectApplication, RenamePlan, RenamePrompt, RingCastTest, RingData, RingEffect,
    Spell, SpellEffect, TestOutcome,
};
