//! Accumulated node paths.
//!
//! A [`NodePath`] is the dot-joined list of keys leading from the genesis root
//! to a node. For action nodes the path *is* the action type.

use core::fmt;

/// Path of a node inside a genesis (or runtime) tree.
///
/// The root path is empty. It displays as `root` so error messages can always
/// name the offending node.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodePath(String);

impl NodePath {
    /// The unnamed root path.
    pub const fn root() -> Self {
        Self(String::new())
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the path of the child named `key`.
    ///
    /// No separator is emitted when `self` is the root.
    #[must_use]
    pub fn join(&self, key: &str, separator: char) -> Self {
        if self.is_root() {
            Self(key.to_owned())
        } else {
            let mut joined = String::with_capacity(self.0.len() + 1 + key.len());
            joined.push_str(&self.0);
            joined.push(separator);
            joined.push_str(key);
            Self(joined)
        }
    }

    /// The raw accumulated identifier (empty for the root).
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_root() {
            f.write_str("root")
        } else {
            f.write_str(&self.0)
        }
    }
}

impl From<&str> for NodePath {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}
