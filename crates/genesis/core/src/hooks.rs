//! Application-supplied hooks attached to action nodes.
//!
//! - [`Ratify`]: validates and/or defaults the positional arguments of a
//!   record-producing action creator before the record is built.
//! - [`ThunkFactory`]: turns positional arguments into a deferred [`Thunk`],
//!   which an external dispatch mechanism later runs against its own context
//!   `C` (typically a dispatcher plus a state accessor).
//!
//! Hooks are reference counted so one genesis tree can be transformed any
//! number of times; every runtime tree shares the same hook instances.

use std::collections::HashMap;
use std::sync::Arc;

use serde_json::Value;

/// Error raised by an application hook. Passed through to callers untouched.
pub type HookError = Box<dyn std::error::Error + Send + Sync>;

/// Validation/defaulting hook: receives the positional arguments and returns
/// the (possibly defaulted) list the action record is built from.
pub type Ratify = Arc<dyn Fn(Vec<Value>) -> Result<Vec<Value>, HookError> + Send + Sync>;

/// Deferred, side-effecting operation produced by a thunk action creator.
pub type Thunk<C> = Box<dyn FnOnce(&mut C) + Send>;

/// Factory producing a [`Thunk`] from positional arguments.
pub type ThunkFactory<C> = Arc<dyn Fn(Vec<Value>) -> Thunk<C> + Send + Sync>;

/// The ratify used when an action node declares none.
pub fn identity_ratify() -> Ratify {
    Arc::new(|args: Vec<Value>| -> Result<Vec<Value>, HookError> { Ok(args) })
}

/// Kind of hook referenced by a genesis document.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, strum::Display, strum::AsRefStr,
)]
#[strum(serialize_all = "snake_case")]
pub enum HookKind {
    Ratify,
    Thunk,
}

/// Named hooks that dynamic genesis documents refer to by string.
///
/// Documents loaded from RON/TOML/JSON cannot hold functions, so their
/// `ratify` and `thunk` fields name an entry registered here instead.
pub struct HookRegistry<C> {
    ratify: HashMap<String, Ratify>,
    thunks: HashMap<String, ThunkFactory<C>>,
}

impl<C> HookRegistry<C> {
    pub fn new() -> Self {
        Self {
            ratify: HashMap::new(),
            thunks: HashMap::new(),
        }
    }

    /// Registers a ratify hook under `name` (builder pattern).
    #[must_use]
    pub fn with_ratify<F>(mut self, name: impl Into<String>, ratify: F) -> Self
    where
        F: Fn(Vec<Value>) -> Result<Vec<Value>, HookError> + Send + Sync + 'static,
    {
        self.register_ratify(name, ratify);
        self
    }

    /// Registers a thunk factory under `name` (builder pattern).
    #[must_use]
    pub fn with_thunk<F>(mut self, name: impl Into<String>, factory: F) -> Self
    where
        F: Fn(Vec<Value>) -> Thunk<C> + Send + Sync + 'static,
    {
        self.register_thunk(name, factory);
        self
    }

    pub fn register_ratify<F>(&mut self, name: impl Into<String>, ratify: F)
    where
        F: Fn(Vec<Value>) -> Result<Vec<Value>, HookError> + Send + Sync + 'static,
    {
        self.ratify.insert(name.into(), Arc::new(ratify));
    }

    pub fn register_thunk<F>(&mut self, name: impl Into<String>, factory: F)
    where
        F: Fn(Vec<Value>) -> Thunk<C> + Send + Sync + 'static,
    {
        self.thunks.insert(name.into(), Arc::new(factory));
    }

    pub fn ratify(&self, name: &str) -> Option<Ratify> {
        self.ratify.get(name).cloned()
    }

    pub fn thunk(&self, name: &str) -> Option<ThunkFactory<C>> {
        self.thunks.get(name).cloned()
    }
}

impl<C> Default for HookRegistry<C> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn identity_ratify_returns_arguments_unchanged() {
        let ratify = identity_ratify();
        let args = vec![json!("a"), json!(2)];
        assert_eq!(ratify(args.clone()).expect("identity never fails"), args);
    }

    #[test]
    fn registry_separates_hook_kinds() {
        let registry = HookRegistry::<()>::new()
            .with_ratify("nonEmpty", |args| Ok(args))
            .with_thunk("noop", |_args| Box::new(|_ctx: &mut ()| {}));

        assert!(registry.ratify("nonEmpty").is_some());
        assert!(registry.thunk("nonEmpty").is_none());
        assert!(registry.thunk("noop").is_some());
        assert!(registry.ratify("missing").is_none());
    }
}
