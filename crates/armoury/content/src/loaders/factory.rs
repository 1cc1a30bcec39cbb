//! Content factory for loading every data file from one directory.

use std::path::{Path, PathBuf};

use armoury_core::{Actor, ArmouryConfig, Catalog, Spell};

use crate::loaders::{ActorLoader, ConfigLoader, LoadResult, LocaleLoader, SpellLoader};

/// Content factory that loads armoury content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── actors.ron
/// ├── spells.ron
/// └── locales/
///     └── de.toml
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load settings from `config.toml`, or the defaults when the file is absent.
    pub fn load_config(&self) -> LoadResult<ArmouryConfig> {
        let path = self.data_dir.join("config.toml");
        if !path.exists() {
            return Ok(ArmouryConfig::default());
        }
        ConfigLoader::load(&path)
    }

    /// Load actors from `actors.ron`.
    pub fn load_actors(&self) -> LoadResult<Vec<Actor>> {
        ActorLoader::load(&self.data_dir.join("actors.ron"))
    }

    /// Load spells from `spells.ron`, or none when the file is absent.
    pub fn load_spells(&self) -> LoadResult<Vec<Spell>> {
        let path = self.data_dir.join("spells.ron");
        if !path.exists() {
            return Ok(Vec::new());
        }
        SpellLoader::load(&path)
    }

    /// Load `locales/{language}.toml` over the English strings. `"en"` needs no file.
    pub fn load_locale(&self, language: &str) -> LoadResult<Catalog> {
        let path = self.data_dir.join("locales").join(format!("{}.toml", language));
        if language == "en" && !path.exists() {
            return Ok(Catalog::english());
        }
        LocaleLoader::load(&path)
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use armoury_core::Localizer;

    fn bundled() -> ContentFactory {
        ContentFactory::new(Path::new(env!("CARGO_MANIFEST_DIR")).join("data"))
    }

    #[test]
    fn loads_bundled_data() {
        let factory = bundled();
        assert!(factory.load_config().is_ok());
        assert!(!factory.load_actors().unwrap().is_empty());
        assert!(!factory.load_spells().unwrap().is_empty());

        let german = factory.load_locale("de").unwrap();
        assert_eq!(german.localize("Armoury.Locations.head"), "Kopf");
        assert_eq!(factory.load_locale("en").unwrap(), Catalog::english());
    }

    #[test]
    fn missing_optional_files_use_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let factory = ContentFactory::new(dir.path());
        assert_eq!(factory.load_config().unwrap(), ArmouryConfig::default());
        assert!(factory.load_spells().unwrap().is_empty());
        assert!(factory.load_actors().is_err());
        assert!(factory.load_locale("fr").is_err());
    }
}
