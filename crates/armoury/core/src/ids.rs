//! Identifiers of host documents.
//!
//! The host addresses documents by opaque string ids. Embedded items are
//! additionally reachable through a document path of the form
//! `Actor.<actor>.Item.<item>`, which is what effect origins point at.

use core::fmt;
use core::str::FromStr;

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[cfg_attr(feature = "serde", serde(transparent))]
        pub struct $name(pub String);

        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_string())
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }
    };
}

string_id!(
    /// Id of an actor document.
    ActorId
);
string_id!(
    /// Id of an item document, unique within its owning actor.
    ItemId
);
string_id!(
    /// Id of an active effect, unique within its parent document.
    EffectId
);
string_id!(
    /// Document path of a spell (usually inside a compendium).
    SpellRef
);

/// Path to an item, optionally embedded in an actor.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemRef {
    pub actor: Option<ActorId>,
    pub item: ItemId,
}

impl ItemRef {
    pub fn embedded(actor: ActorId, item: ItemId) -> Self {
        Self {
            actor: Some(actor),
            item,
        }
    }

    pub fn world(item: ItemId) -> Self {
        Self { actor: None, item }
    }
}

impl fmt::Display for ItemRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.actor {
            Some(actor) => write!(f, "Actor.{}.Item.{}", actor, self.item),
            None => write!(f, "Item.{}", self.item),
        }
    }
}

/// Error returned when a document path is not an item path.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("`{0}` is not an item document path")]
pub struct InvalidItemRef(pub String);

impl FromStr for ItemRef {
    type Err = InvalidItemRef;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split('.').collect();
        let invalid = || InvalidItemRef(s.to_string());

        match parts.as_slice() {
            ["Actor", actor, "Item", item] if !actor.is_empty() && !item.is_empty() => Ok(
                ItemRef::embedded(ActorId::from(*actor), ItemId::from(*item)),
            ),
            ["Item", item] if !item.is_empty() => Ok(ItemRef::world(ItemId::from(*item))),
            _ => Err(invalid()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_embedded_item_paths() {
        let parsed: ItemRef = "Actor.a1.Item.sword".parse().unwrap();
        assert_eq!(parsed, ItemRef::embedded("a1".into(), "sword".into()));
        assert_eq!(parsed.to_string(), "Actor.a1.Item.sword");
    }

    #[test]
    fn parses_world_item_paths() {
        let parsed: ItemRef = "Item.ring".parse().unwrap();
        assert_eq!(parsed, ItemRef::world("ring".into()));
    }

    #[test]
    fn rejects_other_documents() {
        assert!("Actor.a1".parse::<ItemRef>().is_err());
        assert!("Actor.a1.ActiveEffect.e1".parse::<ItemRef>().is_err());
        assert!("Actor..Item.x".parse::<ItemRef>().is_err());
    }
}
