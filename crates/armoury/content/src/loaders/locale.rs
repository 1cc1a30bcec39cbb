//! Locale catalog loader.
//!
//! Catalogs are TOML tables. Nested tables are flattened with dots, so both
//! forms below define `Armoury.Locations.head`:
//!
//! ```toml
//! "Armoury.Locations.head" = "Kopf"
//!
//! [Armoury.Locations]
//! head = "Kopf"
//! ```

use std::path::Path;

use armoury_core::Catalog;

use crate::loaders::{LoadResult, read_file};

/// Loader for locale catalogs from TOML files.
pub struct LocaleLoader;

impl LocaleLoader {
    /// Load a catalog merged over the built-in English strings.
    pub fn load(path: &Path) -> LoadResult<Catalog> {
        let mut catalog = Catalog::english();
        catalog.merge(Self::load_overrides(path)?);
        Ok(catalog)
    }

    /// Load only the entries defined in the file.
    pub fn load_overrides(path: &Path) -> LoadResult<Catalog> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<Catalog> {
        let table: toml::Table = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse locale TOML: {}", e))?;

        let mut entries = Vec::new();
        flatten("", &table, &mut entries)?;
        Ok(entries.into_iter().collect())
    }
}

fn flatten(prefix: &str, table: &toml::Table, out: &mut Vec<(String, String)>) -> LoadResult<()> {
    for (key, value) in table {
        let path = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{}.{}", prefix, key)
        };
        match value {
            toml::Value::String(template) => out.push((path, template.clone())),
            toml::Value::Table(nested) => flatten(&path, nested, out)?,
            other => anyhow::bail!(
                "Locale entry {} must be a string, found {}",
                path,
                other.type_str()
            ),
        }
    }
    Ok(())
}
