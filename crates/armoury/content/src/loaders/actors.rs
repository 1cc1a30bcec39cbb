//! Actor fixture loader.

use std::path::Path;

use armoury_core::Actor;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Actor catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActorCatalog {
    pub actors: Vec<Actor>,
}

/// Loader for actors (with embedded items and effects) from RON files.
pub struct ActorLoader;

impl ActorLoader {
    pub fn load(path: &Path) -> LoadResult<Vec<Actor>> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<Vec<Actor>> {
        let catalog: ActorCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse actor catalog RON: {}", e))?;

        for actor in &catalog.actors {
            let mut seen = std::collections::HashSet::new();
            for item in &actor.items {
                if !seen.insert(&item.id) {
                    anyhow::bail!("Actor {} has duplicate item id {}", actor.id, item.id);
                }
            }
        }
        Ok(catalog.actors)
    }
}
