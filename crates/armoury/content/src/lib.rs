//! Data files for the item rules.
//!
//! Loaders for the files a host (or the developer tools) feeds into the
//! runtime:
//! - Settings (TOML)
//! - Locale catalogs (TOML, merged over the built-in English strings)
//! - Actor fixtures with their embedded items (RON)
//! - Spell catalogs referenced by magic rings (RON)
//!
//! All loaders deserialize `armoury-core` types directly.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{ActorLoader, ConfigLoader, ContentFactory, LoadResult, LocaleLoader, SpellLoader};
