//! The genesis transformer.
//!
//! A single recursive walk mirrors a [`GenesisNode`] tree into a
//! [`RuntimeNode`] tree. Each node's path is accumulated on the way down and
//! becomes the action type of every action creator generated along it.
//!
//! Construction is all-or-nothing: the first [`ConfigError`] aborts the walk.

use crate::config::GenesisConfig;
use crate::error::ConfigError;
use crate::genesis::{ActionSpec, GenesisChild, GenesisNode};
use crate::path::NodePath;
use crate::runtime::{NodeKind, RecordCreator, RuntimeChild, RuntimeNode, ThunkCreator};

/// Transforms genesis trees using a fixed [`GenesisConfig`].
#[derive(Clone, Debug, Default)]
pub struct Transformer {
    config: GenesisConfig,
}

impl Transformer {
    pub fn new(config: GenesisConfig) -> Self {
        Self { config }
    }

    /// Mirrors `genesis` into a runtime tree whose root is organizational.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::MetaAtRoot`] if the root carries action metadata
    /// - any structural violation found while walking the tree
    pub fn transform<C>(&self, genesis: &GenesisNode<C>) -> Result<RuntimeNode<C>, ConfigError> {
        if genesis.is_action() {
            return Err(ConfigError::MetaAtRoot);
        }

        let runtime = self.walk(genesis, NodePath::root())?;
        tracing::debug!(
            "Generated {} action creators from genesis tree",
            runtime.action_types().len()
        );
        Ok(runtime)
    }

    /// Like [`Self::transform`], but returns the single top-level node itself.
    ///
    /// Useful when an application assembles its actions from independently
    /// authored genesis fragments, one root per fragment.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::NotSingleRoot`] unless the top level has exactly one key
    /// - [`ConfigError::RootNotANode`] if that key holds application data
    /// - anything [`Self::transform`] reports
    pub fn transform_root<C>(
        &self,
        genesis: &GenesisNode<C>,
    ) -> Result<RuntimeNode<C>, ConfigError> {
        if genesis.children().count() != 1 {
            return Err(ConfigError::NotSingleRoot {
                roots: genesis.children().map(|(key, _)| key.to_owned()).collect(),
            });
        }

        match self.transform(genesis)?.into_sole_child() {
            Some((_, RuntimeChild::Node(root))) => Ok(root),
            Some((key, RuntimeChild::Data(_))) => Err(ConfigError::RootNotANode { key }),
            None => Err(ConfigError::NotSingleRoot { roots: Vec::new() }),
        }
    }

    fn walk<C>(
        &self,
        node: &GenesisNode<C>,
        path: NodePath,
    ) -> Result<RuntimeNode<C>, ConfigError> {
        if node.is_empty() {
            return Err(ConfigError::EmptyNode { path });
        }

        let kind = match node.meta() {
            Some(meta) => match meta.validate(&path)? {
                ActionSpec::Record { traits, ratify } => {
                    tracing::debug!("Action creator {}({})", path, traits.join(", "));
                    NodeKind::Record(RecordCreator::new(path.clone(), traits, ratify))
                }
                ActionSpec::Thunk(factory) => {
                    tracing::debug!("Thunk action creator {}", path);
                    NodeKind::Thunk(ThunkCreator::new(factory))
                }
            },
            None => {
                tracing::trace!("Organizational node {}", path);
                NodeKind::Organizational
            }
        };

        let mut runtime = RuntimeNode::new(path, kind, self.config.separator);

        for (key, child) in node.children() {
            self.check_key(runtime.path(), key)?;
            let child = match child {
                GenesisChild::Node(inner) => {
                    let child_path = runtime.path().join(key, self.config.separator);
                    RuntimeChild::Node(self.walk(inner, child_path)?)
                }
                GenesisChild::Data(data) => RuntimeChild::Data(data.clone()),
            };
            runtime.push_child(key.to_owned(), child);
        }

        Ok(runtime)
    }

    /// Keys become path segments, so they must be non-empty and free of the
    /// separator; otherwise two distinct nodes could share an action type.
    fn check_key(&self, path: &NodePath, key: &str) -> Result<(), ConfigError> {
        if key.is_empty() || key.contains(self.config.separator) {
            return Err(ConfigError::InvalidKey {
                path: path.clone(),
                key: key.to_owned(),
                separator: self.config.separator,
            });
        }
        Ok(())
    }
}

/// Mirrors `genesis` with the default configuration.
///
/// See [`Transformer::transform`].
pub fn transform<C>(genesis: &GenesisNode<C>) -> Result<RuntimeNode<C>, ConfigError> {
    Transformer::default().transform(genesis)
}

/// Returns the single root node of `genesis` with the default configuration.
///
/// See [`Transformer::transform_root`].
pub fn transform_root<C>(genesis: &GenesisNode<C>) -> Result<RuntimeNode<C>, ConfigError> {
    Transformer::default().transform_root(genesis)
}
