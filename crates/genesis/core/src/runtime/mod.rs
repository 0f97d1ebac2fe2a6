//! The runtime tree: a mirror of the genesis tree with action creators.
//!
//! Every [`RuntimeNode`] is one of three kinds:
//!
//! - **Organizational**: groups children; it has no action type and cannot be
//!   invoked.
//! - **Record**: an action creator producing an [`Action`] record.
//! - **Thunk**: an action creator producing the application's deferred
//!   [`Thunk`](crate::hooks::Thunk).
//!
//! Action types are read through [`RuntimeNode::action_type`], which fails for
//! organizational nodes. Any node, including an action creator, may have
//! children of its own (`widget.fetch` and `widget.fetch.complete`).

mod creator;

pub use creator::{RecordCreator, ThunkCreator};

use std::fmt;

use serde_json::Value;

use crate::action::{Action, Dispatchable};
use crate::data::AppData;
use crate::error::{ConfigError, InvokeError};
use crate::path::NodePath;

/// Kind of a runtime node.
pub enum NodeKind<C> {
    Organizational,
    Record(RecordCreator),
    Thunk(ThunkCreator<C>),
}

/// A child entry of a runtime node.
pub enum RuntimeChild<C> {
    Node(RuntimeNode<C>),
    /// Application data copied from the genesis tree (same allocation).
    Data(AppData),
}

/// A node of the runtime tree.
pub struct RuntimeNode<C> {
    path: NodePath,
    kind: NodeKind<C>,
    /// Separator the transformer joined this node's path with.
    separator: char,
    children: Vec<(String, RuntimeChild<C>)>,
}

impl<C> RuntimeNode<C> {
    pub(crate) fn new(path: NodePath, kind: NodeKind<C>, separator: char) -> Self {
        Self {
            path,
            kind,
            separator,
            children: Vec::new(),
        }
    }

    pub(crate) fn push_child(&mut self, key: String, child: RuntimeChild<C>) {
        self.children.push((key, child));
    }

    /// Removes and returns the only child. Used to unwrap a single-root tree.
    pub(crate) fn into_sole_child(mut self) -> Option<(String, RuntimeChild<C>)> {
        if self.children.len() == 1 {
            self.children.pop()
        } else {
            None
        }
    }

    pub fn path(&self) -> &NodePath {
        &self.path
    }

    pub fn kind(&self) -> &NodeKind<C> {
        &self.kind
    }

    pub fn is_action(&self) -> bool {
        !matches!(self.kind, NodeKind::Organizational)
    }

    /// The action type of this action creator.
    ///
    /// # Errors
    ///
    /// [`ConfigError::NotAnActionType`] for organizational nodes.
    pub fn action_type(&self) -> Result<&str, ConfigError> {
        if self.is_action() {
            Ok(self.path.as_str())
        } else {
            Err(ConfigError::NotAnActionType {
                path: self.path.clone(),
            })
        }
    }

    /// Invokes this action creator with positional arguments.
    ///
    /// # Errors
    ///
    /// - [`InvokeError::NotCallable`] for organizational nodes
    /// - [`InvokeError::Ratify`] when the ratify hook rejects the arguments
    /// - [`InvokeError::ArityMismatch`] when the ratified argument count differs
    ///   from the trait count
    pub fn invoke(&self, args: Vec<Value>) -> Result<Dispatchable<C>, InvokeError> {
        match &self.kind {
            NodeKind::Organizational => Err(InvokeError::NotCallable {
                path: self.path.clone(),
            }),
            NodeKind::Record(creator) => creator.create(args).map(Dispatchable::Action),
            NodeKind::Thunk(creator) => Ok(Dispatchable::Thunk(creator.create(args))),
        }
    }

    /// Invokes a record creator and returns the record directly.
    ///
    /// Thunk creators have no record to return; they report
    /// [`InvokeError::NotCallable`] here and must go through [`Self::invoke`].
    pub fn create(&self, args: Vec<Value>) -> Result<Action, InvokeError> {
        match &self.kind {
            NodeKind::Record(creator) => creator.create(args),
            _ => Err(InvokeError::NotCallable {
                path: self.path.clone(),
            }),
        }
    }

    pub fn get(&self, key: &str) -> Option<&RuntimeChild<C>> {
        self.children
            .iter()
            .find_map(|(existing, child)| (existing == key).then_some(child))
    }

    /// The nested node under `key`, if that child is a node.
    pub fn child(&self, key: &str) -> Option<&RuntimeNode<C>> {
        match self.get(key)? {
            RuntimeChild::Node(node) => Some(node),
            RuntimeChild::Data(_) => None,
        }
    }

    /// The application data under `key`, if that child is data.
    pub fn data(&self, key: &str) -> Option<&AppData> {
        match self.get(key)? {
            RuntimeChild::Data(data) => Some(data),
            RuntimeChild::Node(_) => None,
        }
    }

    /// Follows `keys` one child at a time.
    pub fn descend<'a>(&self, keys: impl IntoIterator<Item = &'a str>) -> Option<&RuntimeNode<C>> {
        keys.into_iter().try_fold(self, |node, key| node.child(key))
    }

    /// Walks a separator-joined path relative to this node
    /// (`lookup("fetch.complete")` on `widget`). The empty path is `self`.
    pub fn lookup(&self, path: &str) -> Option<&RuntimeNode<C>> {
        if path.is_empty() {
            return Some(self);
        }
        self.descend(path.split(self.separator))
    }

    /// Finds the descendant (or self) whose full path is `path`.
    pub fn find(&self, path: &str) -> Option<&RuntimeNode<C>> {
        if self.path.as_str() == path {
            return Some(self);
        }
        self.nodes()
            .filter(|node| path.starts_with(node.path.as_str()))
            .find_map(|node| node.find(path))
    }

    /// Children in genesis insertion order.
    pub fn children(&self) -> impl Iterator<Item = (&str, &RuntimeChild<C>)> {
        self.children
            .iter()
            .map(|(key, child)| (key.as_str(), child))
    }

    /// Nested nodes, skipping application data.
    pub fn nodes(&self) -> impl Iterator<Item = &RuntimeNode<C>> {
        self.children.iter().filter_map(|(_, child)| match child {
            RuntimeChild::Node(node) => Some(node),
            RuntimeChild::Data(_) => None,
        })
    }

    /// Every action type in this subtree (self first, then depth-first in
    /// insertion order).
    pub fn action_types(&self) -> Vec<&str> {
        let mut types = Vec::new();
        self.collect_action_types(&mut types);
        types
    }

    fn collect_action_types<'a>(&'a self, types: &mut Vec<&'a str>) {
        if self.is_action() {
            types.push(self.path.as_str());
        }
        for node in self.nodes() {
            node.collect_action_types(types);
        }
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl<C> Clone for NodeKind<C> {
    fn clone(&self) -> Self {
        match self {
            Self::Organizational => Self::Organizational,
            Self::Record(creator) => Self::Record(creator.clone()),
            Self::Thunk(creator) => Self::Thunk(creator.clone()),
        }
    }
}

impl<C> Clone for RuntimeChild<C> {
    fn clone(&self) -> Self {
        match self {
            Self::Node(node) => Self::Node(node.clone()),
            Self::Data(data) => Self::Data(data.clone()),
        }
    }
}

impl<C> Clone for RuntimeNode<C> {
    fn clone(&self) -> Self {
        Self {
            path: self.path.clone(),
            kind: self.kind.clone(),
            separator: self.separator,
            children: self.children.clone(),
        }
    }
}

impl<C> fmt::Debug for NodeKind<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Organizational => f.write_str("Organizational"),
            Self::Record(creator) => creator.fmt(f),
            Self::Thunk(creator) => creator.fmt(f),
        }
    }
}

impl<C> fmt::Debug for RuntimeChild<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Node(node) => node.fmt(f),
            Self::Data(data) => data.fmt(f),
        }
    }
}

impl<C> fmt::Debug for RuntimeNode<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuntimeNode")
            .field("path", &self.path)
            .field("kind", &self.kind)
            .field("children", &self.children)
            .finish()
    }
}
