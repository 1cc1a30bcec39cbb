//! Spell catalog loader.

use std::path::Path;

use armoury_core::Spell;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Spell catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpellCatalog {
    pub spells: Vec<Spell>,
}

/// Loader for the spells rings can be bound to.
pub struct SpellLoader;

impl SpellLoader {
    pub fn load(path: &Path) -> LoadResult<Vec<Spell>> {
        let content = read_file(path)?;
        let catalog: SpellCatalog = ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse spell catalog RON: {}", e))?;

        Ok(catalog.spells)
    }
}
