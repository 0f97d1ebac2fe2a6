//! Error types for genesis transformation and action creation.
//!
//! Two error families exist:
//!
//! - [`ConfigError`]: the genesis tree is malformed. Raised eagerly while the
//!   runtime tree is built (construction is all-or-nothing), and also when an
//!   organizational node is asked for its action type.
//! - [`InvokeError`]: a generated action creator was called incorrectly, or the
//!   application's ratify hook rejected the arguments.
//!
//! Every variant names the path of the offending node so failures can be
//! matched exactly in tests.

use crate::genesis::MetaField;
use crate::hooks::{HookError, HookKind};
use crate::path::NodePath;

/// Common trait for all genesis errors.
pub trait GenesisError: core::fmt::Display + core::fmt::Debug {
    /// Returns a static string identifier for this error variant.
    fn error_code(&self) -> &'static str;

    /// Returns the path of the node the error is attributed to, if any.
    fn path(&self) -> Option<&NodePath> {
        None
    }
}

// ============================================================================
// Configuration Errors
// ============================================================================

/// Reason a declared trait name was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
pub enum TraitRule {
    #[strum(serialize = "trait names must be non-empty")]
    Empty,
    #[strum(serialize = "trait is declared more than once")]
    Duplicate,
    #[strum(serialize = "`type` is reserved for the action discriminator")]
    Reserved,
}

/// The genesis tree violates a structural rule.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A node (or the whole document) is not a key/value mapping.
    #[error("genesis node {path} is NOT a mapping")]
    NotAMapping { path: NodePath },

    /// A node has neither action metadata nor children.
    #[error(
        "genesis node {path} must contain at least ONE sub-node (either an app-specific or an action metadata node)"
    )]
    EmptyNode { path: NodePath },

    /// The unnamed root carries action metadata.
    #[error(
        "genesis argument CANNOT have action metadata in the root (the root cannot be an action node, because it is unnamed)"
    )]
    MetaAtRoot,

    #[error("genesis node {path} action metadata is NOT a mapping")]
    MetaNotAMapping { path: NodePath },

    #[error(
        "genesis node {path} action metadata contains unrecognized fields: {} (supported: traits, ratify, thunk)",
        .fields.join(", ")
    )]
    UnrecognizedMetaFields { path: NodePath, fields: Vec<String> },

    #[error("genesis node {path} action metadata traits is NOT a string[]")]
    TraitsNotStrings { path: NodePath },

    #[error("genesis node {path} declares invalid trait {name:?}: {rule}")]
    InvalidTrait {
        path: NodePath,
        name: String,
        rule: TraitRule,
    },

    #[error("genesis node {path} action metadata ratify is NOT a function")]
    RatifyNotCallable { path: NodePath },

    #[error("genesis node {path} action metadata thunk is NOT a function")]
    ThunkNotCallable { path: NodePath },

    /// `thunk` was combined with another recognized metadata field.
    #[error(
        "genesis node {path} action metadata thunk is mutually exclusive with all other fields, but also found: {}",
        .conflicts.iter().map(ToString::to_string).collect::<Vec<_>>().join(", ")
    )]
    ThunkNotExclusive {
        path: NodePath,
        conflicts: Vec<MetaField>,
    },

    #[error("genesis node {path} references unknown {kind} hook {name:?}")]
    UnknownHook {
        path: NodePath,
        kind: HookKind,
        name: String,
    },

    #[error(
        "genesis node {path} has invalid child key {key:?}: keys must be non-empty and may not contain {separator:?}"
    )]
    InvalidKey {
        path: NodePath,
        key: String,
        separator: char,
    },

    #[error(
        "genesis argument may ONLY contain a single root node (what will be returned), found: [{}]",
        .roots.join(", ")
    )]
    NotSingleRoot { roots: Vec<String> },

    #[error("genesis root entry {key} is app data, NOT a node")]
    RootNotANode { key: String },

    /// An organizational node was asked for its action type.
    #[error("{path} is NOT an action type, RATHER an app-level node")]
    NotAnActionType { path: NodePath },
}

impl GenesisError for ConfigError {
    fn error_code(&self) -> &'static str {
        use ConfigError::*;
        match self {
            NotAMapping { .. } => "GENESIS_NOT_A_MAPPING",
            EmptyNode { .. } => "GENESIS_EMPTY_NODE",
            MetaAtRoot => "GENESIS_META_AT_ROOT",
            MetaNotAMapping { .. } => "GENESIS_META_NOT_A_MAPPING",
            UnrecognizedMetaFields { .. } => "GENESIS_UNRECOGNIZED_META_FIELDS",
            TraitsNotStrings { .. } => "GENESIS_TRAITS_NOT_STRINGS",
            InvalidTrait { .. } => "GENESIS_INVALID_TRAIT",
            RatifyNotCallable { .. } => "GENESIS_RATIFY_NOT_CALLABLE",
            ThunkNotCallable { .. } => "GENESIS_THUNK_NOT_CALLABLE",
            ThunkNotExclusive { .. } => "GENESIS_THUNK_NOT_EXCLUSIVE",
            UnknownHook { .. } => "GENESIS_UNKNOWN_HOOK",
            InvalidKey { .. } => "GENESIS_INVALID_KEY",
            NotSingleRoot { .. } => "GENESIS_NOT_SINGLE_ROOT",
            RootNotANode { .. } => "GENESIS_ROOT_NOT_A_NODE",
            NotAnActionType { .. } => "GENESIS_NOT_AN_ACTION_TYPE",
        }
    }

    fn path(&self) -> Option<&NodePath> {
        use ConfigError::*;
        match self {
            NotAMapping { path }
            | EmptyNode { path }
            | MetaNotAMapping { path }
            | UnrecognizedMetaFields { path, .. }
            | TraitsNotStrings { path }
            | InvalidTrait { path, .. }
            | RatifyNotCallable { path }
            | ThunkNotCallable { path }
            | ThunkNotExclusive { path, .. }
            | UnknownHook { path, .. }
            | InvalidKey { path, .. }
            | NotAnActionType { path } => Some(path),
            MetaAtRoot | NotSingleRoot { .. } | RootNotANode { .. } => None,
        }
    }
}

// ============================================================================
// Invocation Errors
// ============================================================================

/// An action creator could not produce its action.
#[derive(Debug, thiserror::Error)]
pub enum InvokeError {
    /// Positional argument count (after ratify) differs from the trait count.
    #[error(
        "action creator: {action_type}({}) expecting {expected} parameters, but received {received}",
        .traits.join(", ")
    )]
    ArityMismatch {
        action_type: String,
        traits: Vec<String>,
        expected: usize,
        received: usize,
    },

    /// An organizational node was invoked as if it were an action creator.
    #[error("{path} is NOT an action creator, RATHER an app-level node")]
    NotCallable { path: NodePath },

    /// The application's ratify hook rejected the arguments.
    #[error(transparent)]
    Ratify(HookError),
}

impl InvokeError {
    /// Returns the ratify hook's own error, when that is what failed.
    pub fn as_ratify(&self) -> Option<&(dyn std::error::Error + Send + Sync + 'static)> {
        match self {
            Self::Ratify(error) => Some(error.as_ref()),
            _ => None,
        }
    }
}

impl GenesisError for InvokeError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::ArityMismatch { .. } => "INVOKE_ARITY_MISMATCH",
            Self::NotCallable { .. } => "INVOKE_NOT_CALLABLE",
            Self::Ratify(_) => "INVOKE_RATIFY_REJECTED",
        }
    }

    fn path(&self) -> Option<&NodePath> {
        match self {
            Self::NotCallable { path } => Some(path),
            _ => None,
        }
    }
}
