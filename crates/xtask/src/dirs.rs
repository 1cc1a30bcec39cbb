//! Fixture directory resolution
//!
//! Commands read their fixtures from the first directory found in:
//! 1. `--data-dir`
//! 2. `$ARMOURY_DATA_DIR`
//! 3. the platform data directory, when it holds an `actors.ron`
//!    - macOS: `~/Library/Application Support/armoury`
//!    - Linux: `~/.local/share/armoury` (or `$XDG_DATA_HOME/armoury`)
//!    - Windows: `%APPDATA%\armoury`
//! 4. the fixtures bundled with `armoury-content`

use std::path::{Path, PathBuf};

use anyhow::{Result, bail};

pub const DATA_DIR_ENV: &str = "ARMOURY_DATA_DIR";
pub const LOCALE_ENV: &str = "ARMOURY_LOCALE";

/// Fixtures shipped with the workspace.
pub fn bundled_data_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../armoury/content/data")
}

/// Platform-specific data directory for armoury fixtures.
pub fn platform_data_dir() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", "armoury").map(|dirs| dirs.data_dir().to_path_buf())
}

/// Resolves the fixture directory, see the module docs for the order.
pub fn data_dir(explicit: Option<PathBuf>) -> Result<PathBuf> {
    let dir = explicit
        .or_else(|| std::env::var_os(DATA_DIR_ENV).map(PathBuf::from))
        .or_else(|| platform_data_dir().filter(|dir| dir.join("actors.ron").exists()))
        .unwrap_or_else(bundled_data_dir);

    if !dir.is_dir() {
        bail!("Data directory not found: {}", dir.display());
    }
    Ok(dir)
}

/// Locale from `--lang`, then `$ARMOURY_LOCALE`, then English.
pub fn locale(explicit: Option<String>) -> String {
    explicit
        .or_else(|| std::env::var(LOCALE_ENV).ok())
        .unwrap_or_else(|| "en".to_string())
}
