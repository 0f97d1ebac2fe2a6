//! Data-driven genesis documents and loaders.
//!
//! Genesis trees can be authored as data files instead of Rust builders:
//! - Genesis documents (RON, TOML or JSON, selected by file extension)
//! - Transformer configuration (TOML)
//!
//! Documents are parsed into a [`serde_json::Value`] first and then handed to
//! [`genesis_core::parse_document`], so all three formats share one set of
//! shape checks. Hooks cannot live in data; documents name entries of a
//! [`genesis_core::HookRegistry`] instead.

pub mod format;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use format::GenesisFormat;

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, ContentFactory, GenesisLoader, LoadResult};
