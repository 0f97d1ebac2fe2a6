//! Action creators and action types generated from one declarative tree.
//!
//! Reducer-based applications normally declare every action twice: once as a
//! type constant and once as the function that builds it. `genesis-core`
//! removes the duplication. The application describes its actions as a
//! [`GenesisNode`] tree, and [`transform()`] mirrors it into a [`RuntimeNode`]
//! tree where:
//!
//! - nodes carrying [`ActionMeta`] become action creators, whose action type
//!   is the dot-joined path to the node (`widget.fetch.complete`),
//! - all other nodes stay organizational,
//! - application data placed in the tree is carried over untouched.
//!
//! # Architecture
//!
//! - [`genesis`]: input tree, action metadata, dynamic document parser
//! - [`transform`](mod@transform): the recursive walk
//! - [`runtime`]: generated tree, record and thunk creators
//! - [`action`]: the `{ type, ...traits }` record
//! - [`hooks`]: ratify hooks, thunk factories and their registry
//! - [`error`]: [`ConfigError`] (malformed trees) and [`InvokeError`] (bad calls)

pub mod action;
pub mod config;
pub mod data;
pub mod error;
pub mod genesis;
pub mod hooks;
pub mod path;
pub mod runtime;
pub mod transform;

pub use action::{Action, Dispatchable};
pub use config::GenesisConfig;
pub use data::AppData;
pub use error::{ConfigError, GenesisError, InvokeError, TraitRule};
pub use genesis::parse::parse_document;
pub use genesis::{ActionMeta, GenesisChild, GenesisNode, MetaField};
pub use hooks::{HookError, HookKind, HookRegistry, Ratify, Thunk, ThunkFactory};
pub use path::NodePath;
pub use runtime::{NodeKind, RecordCreator, RuntimeChild, RuntimeNode, ThunkCreator};
pub use transform::{Transformer, transform, transform_root};
