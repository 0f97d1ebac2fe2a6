//! Content factory for loading genesis documents from a data directory.

use std::path::{Path, PathBuf};

use genesis_core::{GenesisConfig, GenesisNode, HookRegistry};

use crate::format::GenesisFormat;
use crate::loaders::{ConfigLoader, GenesisLoader, LoadResult};

/// Content factory that loads genesis content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml        (optional)
/// ├── chat.ron
/// ├── widget.toml
/// └── session.json
/// ```
///
/// Documents are addressed by file stem; the first existing extension in
/// RON, TOML, JSON order wins.
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Load transformer configuration from `config.toml`, or the default
    /// configuration when the file does not exist.
    pub fn load_config(&self) -> LoadResult<GenesisConfig> {
        let path = self.data_dir.join("config.toml");
        if !path.exists() {
            tracing::debug!("No config.toml in {}, using defaults", self.data_dir.display());
            return Ok(GenesisConfig::default());
        }
        ConfigLoader::load(&path)
    }

    /// Path of the genesis document named `name`, if one exists.
    ///
    /// Extensions match case-insensitively, like [`Self::document_names`].
    pub fn document_path(&self, name: &str) -> Option<PathBuf> {
        let entries = std::fs::read_dir(&self.data_dir).ok()?;
        entries
            .filter_map(|entry| entry.ok().map(|entry| entry.path()))
            .filter(|path| path.is_file() && !is_config_file(path))
            .filter(|path| path.file_stem().is_some_and(|stem| stem == name))
            .filter_map(|path| GenesisFormat::from_path(&path).map(|format| (format, path)))
            .min_by_key(|(format, _)| GenesisFormat::ALL.iter().position(|known| known == format))
            .map(|(_, path)| path)
    }

    /// Load the genesis document named `name` with the directory's config.
    pub fn load_genesis<C>(&self, name: &str, hooks: &HookRegistry<C>) -> LoadResult<GenesisNode<C>> {
        let path = self.document_path(name).ok_or_else(|| {
            anyhow::anyhow!(
                "No genesis document named {} in {}",
                name,
                self.data_dir.display()
            )
        })?;
        let config = self.load_config()?;
        GenesisLoader::load_with_config(&path, hooks, &config)
    }

    /// Names (file stems) of every genesis document in the directory, sorted.
    pub fn document_names(&self) -> LoadResult<Vec<String>> {
        let entries = std::fs::read_dir(&self.data_dir).map_err(|e| {
            anyhow::anyhow!("Failed to read directory {}: {}", self.data_dir.display(), e)
        })?;

        let mut names = Vec::new();
        for entry in entries {
            let path = entry?.path();
            if !path.is_file() || is_config_file(&path) {
                continue;
            }
            if GenesisFormat::from_path(&path).is_none() {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) {
                names.push(stem.to_owned());
            }
        }
        names.sort();
        names.dedup();
        Ok(names)
    }
}

fn is_config_file(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.eq_ignore_ascii_case("config.toml"))
}
