//! Settings that tune the item rules.

use strum::{AsRefStr, Display, EnumString};

use crate::ring::Availability;

/// Whether a ring is renamed after its spell changes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, AsRefStr, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum NameChangePolicy {
    Never,
    #[default]
    Ask,
    Always,
}

/// Ring settings.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RingSettings {
    /// List rings in their own inventory category instead of with clothing.
    pub own_category: bool,
    pub default_encumbrance: u32,
    pub default_availability: Availability,
    pub update_name: NameChangePolicy,
    /// Replace the ring's description with the spell's when renaming.
    pub replace_description: bool,
}

impl RingSettings {
    pub const DEFAULT_ENCUMBRANCE: u32 = 0;
    pub const DEFAULT_AVAILABILITY: Availability = Availability::Exotic;
}

impl Default for RingSettings {
    fn default() -> Self {
        Self {
            own_category: true,
            default_encumbrance: Self::DEFAULT_ENCUMBRANCE,
            default_availability: Self::DEFAULT_AVAILABILITY,
            update_name: NameChangePolicy::default(),
            replace_description: true,
        }
    }
}

/// Top-level settings of the item rules.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ArmouryConfig {
    pub rings: RingSettings,
}

impl ArmouryConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rings(rings: RingSettings) -> Self {
        Self { rings }
    }
}
