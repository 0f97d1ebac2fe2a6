//! Genesis trees: the authored description of an action hierarchy.
//!
//! A [`GenesisNode`] is either organizational (children only) or an action
//! node (it carries [`ActionMeta`]). Children keep insertion order and are
//! either sub-trees or opaque [`AppData`].
//!
//! # Example
//!
//! ```
//! use genesis_core::{ActionMeta, GenesisNode};
//!
//! let genesis: GenesisNode<()> = GenesisNode::new().node(
//!     "widget",
//!     GenesisNode::new().node(
//!         "fetch",
//!         GenesisNode::action(ActionMeta::new().traits(["selCrit"]))
//!             .node("complete", GenesisNode::action(ActionMeta::new().traits(["widget"])))
//!             .node("fail", GenesisNode::action(ActionMeta::new().traits(["err"]))),
//!     ),
//! );
//! assert_eq!(genesis.len(), 1);
//! ```

mod meta;
pub mod parse;

pub use meta::{ActionMeta, ActionSpec, MetaField, TYPE_FIELD};

use std::any::Any;
use std::fmt;

use crate::data::AppData;

/// A child entry of a genesis node.
pub enum GenesisChild<C> {
    /// Nested structure, transformed recursively.
    Node(GenesisNode<C>),
    /// Application data, copied verbatim into the runtime tree.
    Data(AppData),
}

/// A node of the genesis tree.
pub struct GenesisNode<C> {
    meta: Option<ActionMeta<C>>,
    children: Vec<(String, GenesisChild<C>)>,
}

impl<C> GenesisNode<C> {
    /// Creates an empty organizational node.
    pub fn new() -> Self {
        Self {
            meta: None,
            children: Vec::new(),
        }
    }

    /// Creates an action node described by `meta`.
    pub fn action(meta: ActionMeta<C>) -> Self {
        Self::new().with_meta(meta)
    }

    /// Marks this node as an action node (builder pattern).
    #[must_use]
    pub fn with_meta(mut self, meta: ActionMeta<C>) -> Self {
        self.meta = Some(meta);
        self
    }

    /// Adds a nested node under `key` (builder pattern).
    #[must_use]
    pub fn node(self, key: impl Into<String>, node: GenesisNode<C>) -> Self {
        self.child(key, GenesisChild::Node(node))
    }

    /// Adds application data under `key` (builder pattern).
    #[must_use]
    pub fn data<T: Any + Send + Sync>(self, key: impl Into<String>, value: T) -> Self {
        self.shared_data(key, AppData::new(value))
    }

    /// Adds an existing [`AppData`] handle under `key` without re-wrapping it.
    #[must_use]
    pub fn shared_data(self, key: impl Into<String>, data: AppData) -> Self {
        self.child(key, GenesisChild::Data(data))
    }

    #[must_use]
    pub fn child(mut self, key: impl Into<String>, child: GenesisChild<C>) -> Self {
        self.insert(key, child);
        self
    }

    /// Inserts a child. Re-using a key replaces the earlier child in place.
    pub fn insert(&mut self, key: impl Into<String>, child: GenesisChild<C>) {
        let key = key.into();
        match self.children.iter_mut().find(|(existing, _)| *existing == key) {
            Some((_, slot)) => *slot = child,
            None => self.children.push((key, child)),
        }
    }

    pub fn meta(&self) -> Option<&ActionMeta<C>> {
        self.meta.as_ref()
    }

    pub fn is_action(&self) -> bool {
        self.meta.is_some()
    }

    pub fn get(&self, key: &str) -> Option<&GenesisChild<C>> {
        self.children
            .iter()
            .find_map(|(existing, child)| (existing == key).then_some(child))
    }

    /// Children in insertion order.
    pub fn children(&self) -> impl Iterator<Item = (&str, &GenesisChild<C>)> {
        self.children
            .iter()
            .map(|(key, child)| (key.as_str(), child))
    }

    /// Number of keys, counting the action metadata as one.
    pub fn len(&self) -> usize {
        self.children.len() + usize::from(self.meta.is_some())
    }

    /// True when the node has neither metadata nor children.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<C> Default for GenesisNode<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> Clone for GenesisNode<C> {
    fn clone(&self) -> Self {
        Self {
            meta: self.meta.clone(),
            children: self.children.clone(),
        }
    }
}

impl<C> Clone for GenesisChild<C> {
    fn clone(&self) -> Self {
        match self {
            Self::Node(node) => Self::Node(node.clone()),
            Self::Data(data) => Self::Data(data.clone()),
        }
    }
}

impl<C> fmt::Debug for GenesisNode<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GenesisNode")
            .field("meta", &self.meta)
            .field("children", &self.children)
            .finish()
    }
}

impl<C> fmt::Debug for GenesisChild<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Node(node) => node.fmt(f),
            Self::Data(data) => data.fmt(f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insertion_order_is_kept_and_keys_replace_in_place() {
        let node: GenesisNode<()> = GenesisNode::new()
            .data("b", 1_u8)
            .node("a", GenesisNode::action(ActionMeta::new()))
            .data("b", 2_u8);

        let keys: Vec<&str> = node.children().map(|(key, _)| key).collect();
        assert_eq!(keys, ["b", "a"]);
        match node.get("b") {
            Some(GenesisChild::Data(data)) => assert_eq!(data.downcast_ref::<u8>(), Some(&2)),
            other => panic!("unexpected child: {other:?}"),
        }
    }

    #[test]
    fn metadata_counts_as_a_key() {
        assert!(GenesisNode::<()>::new().is_empty());
        assert_eq!(GenesisNode::<()>::action(ActionMeta::new()).len(), 1);
    }
}
