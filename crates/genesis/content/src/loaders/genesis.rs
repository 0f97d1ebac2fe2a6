//! Genesis document loader.
//!
//! RON documents use map syntax so that keys keep their authored order:
//!
//! ```ron
//! {
//!     "userMsg": {
//!         "actionMeta": { "traits": ["msg"] },
//!     },
//! }
//! ```

use std::path::Path;

use anyhow::Context;
use genesis_core::{GenesisConfig, GenesisNode, HookRegistry, parse_document};
use serde_json::Value;

use crate::format::GenesisFormat;
use crate::loaders::{LoadResult, read_file};

/// Loader for genesis documents from RON, TOML or JSON files.
pub struct GenesisLoader;

impl GenesisLoader {
    /// Load a genesis tree from a file, using the default [`GenesisConfig`].
    ///
    /// The format is selected from the file extension.
    pub fn load<C>(path: &Path, hooks: &HookRegistry<C>) -> LoadResult<GenesisNode<C>> {
        Self::load_with_config(path, hooks, &GenesisConfig::default())
    }

    /// Load a genesis tree from a file with an explicit configuration.
    pub fn load_with_config<C>(
        path: &Path,
        hooks: &HookRegistry<C>,
        config: &GenesisConfig,
    ) -> LoadResult<GenesisNode<C>> {
        let format = GenesisFormat::from_path(path).ok_or_else(|| {
            anyhow::anyhow!(
                "Unsupported genesis document {}: expected a .ron, .toml or .json file",
                path.display()
            )
        })?;

        let content = read_file(path)?;
        let node = Self::parse(format, &content, hooks, config)
            .with_context(|| format!("Invalid genesis document {}", path.display()))?;

        tracing::debug!("Loaded {} genesis document {}", format, path.display());
        Ok(node)
    }

    /// Parse a genesis tree from text in the given format.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str<C>(
        format: GenesisFormat,
        content: &str,
        hooks: &HookRegistry<C>,
    ) -> LoadResult<GenesisNode<C>> {
        Self::parse(format, content, hooks, &GenesisConfig::default())
    }

    /// Parse a genesis tree from text with an explicit configuration.
    pub fn parse<C>(
        format: GenesisFormat,
        content: &str,
        hooks: &HookRegistry<C>,
        config: &GenesisConfig,
    ) -> LoadResult<GenesisNode<C>> {
        let document = Self::document(format, content)?;
        parse_document(&document, hooks, config).map_err(|error| {
            tracing::warn!("Rejected genesis document: {}", error);
            anyhow::Error::new(error)
        })
    }

    /// Parse text into the intermediate JSON document without interpreting it.
    pub fn document(format: GenesisFormat, content: &str) -> LoadResult<Value> {
        match format {
            GenesisFormat::Ron => ron::from_str(content)
                .map_err(|e| anyhow::anyhow!("Failed to parse genesis RON: {}", e)),
            GenesisFormat::Toml => toml::from_str(content)
                .map_err(|e| anyhow::anyhow!("Failed to parse genesis TOML: {}", e)),
            GenesisFormat::Json => serde_json::from_str(content)
                .map_err(|e| anyhow::anyhow!("Failed to parse genesis JSON: {}", e)),
        }
    }
}
