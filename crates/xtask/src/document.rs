//! Loading genesis documents for inspection.
//!
//! Hooks are application code and cannot be loaded from a file, so every
//! hook a document names is bound to a stand-in: an identity ratify or a
//! thunk that does nothing. Shapes, traits and action types are unaffected.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use genesis_content::{ConfigLoader, GenesisFormat, GenesisLoader};
use genesis_core::{
    Action, GenesisConfig, GenesisNode, HookError, HookKind, HookRegistry, MetaField, Thunk,
    Transformer, parse_document,
};
use serde_json::Value;

/// Context the stand-in thunks run against.
pub type DispatchLog = Vec<Action>;

/// A genesis document parsed with stand-in hooks.
pub struct Document {
    pub path: PathBuf,
    pub config: GenesisConfig,
    pub genesis: GenesisNode<DispatchLog>,
    pub hooks: BTreeSet<(HookKind, String)>,
}

impl Document {
    pub fn load(path: &Path, config_path: Option<&Path>) -> Result<Self> {
        let config = match config_path {
            Some(config_path) => ConfigLoader::load(config_path)?,
            None => GenesisConfig::default(),
        };

        let format = GenesisFormat::from_path(path).with_context(|| {
            format!(
                "Unsupported genesis document {} (expected .ron, .toml or .json)",
                path.display()
            )
        })?;
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read file {}", path.display()))?;
        let value = GenesisLoader::document(format, &text)?;

        let mut hooks = BTreeSet::new();
        collect_hooks(&value, &config.meta_key, &mut hooks);
        let registry = stand_in_registry(&hooks);

        let genesis = parse_document(&value, &registry, &config)
            .with_context(|| format!("Invalid genesis document {}", path.display()))?;

        tracing::debug!(
            "Loaded {} with {} stand-in hooks",
            path.display(),
            hooks.len()
        );

        Ok(Self {
            path: path.to_path_buf(),
            config,
            genesis,
            hooks,
        })
    }

    /// Transformer using the document's configuration.
    pub fn transformer(&self) -> Transformer {
        Transformer::new(self.config.clone())
    }
}

/// Collects `(kind, name)` for every string-valued `ratify`/`thunk` field
/// found under a metadata key.
fn collect_hooks(value: &Value, meta_key: &str, hooks: &mut BTreeSet<(HookKind, String)>) {
    let Value::Object(map) = value else {
        return;
    };

    for (key, child) in map {
        if key == meta_key {
            let Value::Object(meta) = child else {
                continue;
            };
            for (field, kind) in [
                (MetaField::Ratify, HookKind::Ratify),
                (MetaField::Thunk, HookKind::Thunk),
            ] {
                if let Some(Value::String(name)) = meta.get(field.as_str()) {
                    hooks.insert((kind, name.clone()));
                }
            }
        } else {
            collect_hooks(child, meta_key, hooks);
        }
    }
}

fn stand_in_registry(hooks: &BTreeSet<(HookKind, String)>) -> HookRegistry<DispatchLog> {
    let mut registry = HookRegistry::new();
    for (kind, name) in hooks {
        match kind {
            HookKind::Ratify => registry.register_ratify(
                name.clone(),
                |args: Vec<Value>| -> Result<Vec<Value>, HookError> { Ok(args) },
            ),
            HookKind::Thunk => registry.register_thunk(
                name.clone(),
                |_args: Vec<Value>| -> Thunk<DispatchLog> { Box::new(|_log: &mut DispatchLog| {}) },
            ),
        }
    }
    registry
}
