//! Body locations covered by armour.

use strum::{AsRefStr, Display, EnumIter, EnumString, IntoEnumIterator};

/// Hit location on a humanoid body.
///
/// String forms match the keys the host uses on armour records
/// (`head`, `lArm`, `rArm`, `body`, `lLeg`, `rLeg`).
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    AsRefStr,
    Display,
    EnumIter,
    EnumString,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HitLocation {
    #[strum(serialize = "head")]
    #[cfg_attr(feature = "serde", serde(rename = "head"))]
    Head,
    #[strum(serialize = "lArm")]
    #[cfg_attr(feature = "serde", serde(rename = "lArm"))]
    LeftArm,
    #[strum(serialize = "rArm")]
    #[cfg_attr(feature = "serde", serde(rename = "rArm"))]
    RightArm,
    #[strum(serialize = "body")]
    #[cfg_attr(feature = "serde", serde(rename = "body"))]
    Body,
    #[strum(serialize = "lLeg")]
    #[cfg_attr(feature = "serde", serde(rename = "lLeg"))]
    LeftLeg,
    #[strum(serialize = "rLeg")]
    #[cfg_attr(feature = "serde", serde(rename = "rLeg"))]
    RightLeg,
}

impl HitLocation {
    /// Localization key of the location's display name.
    pub fn label_key(self) -> String {
        format!("Armoury.Locations.{}", self.as_ref())
    }

    pub fn all() -> impl Iterator<Item = HitLocation> {
        Self::iter()
    }
}
