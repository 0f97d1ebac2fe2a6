//! Transformer configuration loader.

use std::path::Path;

use genesis_core::GenesisConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for transformer configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Missing fields fall back to [`GenesisConfig::default`].
    pub fn load(path: &Path) -> LoadResult<GenesisConfig> {
        let content = read_file(path)?;
        let config = Self::from_str(&content)?;
        tracing::debug!(
            "Loaded genesis config from {} (separator {:?}, meta key {:?})",
            path.display(),
            config.separator,
            config.meta_key
        );
        Ok(config)
    }

    /// Parse config data from TOML text.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> LoadResult<GenesisConfig> {
        toml::from_str(content).map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_config_uses_defaults() {
        let config = ConfigLoader::from_str("separator = \"/\"").expect("valid TOML");
        assert_eq!(config.separator, '/');
        assert_eq!(config.meta_key, GenesisConfig::DEFAULT_META_KEY);

        let config = ConfigLoader::from_str("").expect("empty TOML");
        assert_eq!(config, GenesisConfig::default());
    }

    #[test]
    fn rejects_multi_character_separator() {
        assert!(ConfigLoader::from_str("separator = \"::\"").is_err());
    }
}
