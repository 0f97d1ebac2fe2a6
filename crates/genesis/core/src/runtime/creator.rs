//! Generated action creators.

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::action::Action;
use crate::error::InvokeError;
use crate::hooks::{Ratify, Thunk, ThunkFactory};
use crate::path::NodePath;

/// Builds `{ type, trait_1: arg_1, ... }` records.
pub struct RecordCreator {
    action_type: NodePath,
    traits: Arc<[String]>,
    ratify: Ratify,
}

impl RecordCreator {
    pub(crate) fn new(action_type: NodePath, traits: Arc<[String]>, ratify: Ratify) -> Self {
        Self {
            action_type,
            traits,
            ratify,
        }
    }

    pub fn traits(&self) -> &[String] {
        &self.traits
    }

    /// Ratifies `args`, checks them against the declared traits and builds
    /// the record.
    ///
    /// Errors returned by the ratify hook are passed through untouched as
    /// [`InvokeError::Ratify`].
    pub fn create(&self, args: Vec<Value>) -> Result<Action, InvokeError> {
        let args = (self.ratify)(args).map_err(InvokeError::Ratify)?;

        if args.len() != self.traits.len() {
            return Err(InvokeError::ArityMismatch {
                action_type: self.action_type.as_str().to_owned(),
                traits: self.traits.to_vec(),
                expected: self.traits.len(),
                received: args.len(),
            });
        }

        Ok(self
            .traits
            .iter()
            .zip(args)
            .fold(Action::new(self.action_type.as_str()), |action, (name, value)| {
                action.with_trait(name.as_str(), value)
            }))
    }
}

impl Clone for RecordCreator {
    fn clone(&self) -> Self {
        Self {
            action_type: self.action_type.clone(),
            traits: Arc::clone(&self.traits),
            ratify: Arc::clone(&self.ratify),
        }
    }
}

impl fmt::Debug for RecordCreator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecordCreator")
            .field("action_type", &self.action_type.as_str())
            .field("traits", &self.traits)
            .finish_non_exhaustive()
    }
}

/// Hands positional arguments straight to the application's thunk factory.
pub struct ThunkCreator<C> {
    factory: ThunkFactory<C>,
}

impl<C> ThunkCreator<C> {
    pub(crate) fn new(factory: ThunkFactory<C>) -> Self {
        Self { factory }
    }

    /// Returns exactly what the factory produces; no ratify, no arity check.
    pub fn create(&self, args: Vec<Value>) -> Thunk<C> {
        (self.factory)(args)
    }
}

impl<C> Clone for ThunkCreator<C> {
    fn clone(&self) -> Self {
        Self {
            factory: Arc::clone(&self.factory),
        }
    }
}

impl<C> fmt::Debug for ThunkCreator<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ThunkCreator(..)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hooks::{HookError, identity_ratify};
    use serde_json::json;

    fn creator(traits: &[&str], ratify: Ratify) -> RecordCreator {
        let traits: Vec<String> = traits.iter().map(|name| (*name).to_owned()).collect();
        RecordCreator::new("userMsg.display".into(), traits.into(), ratify)
    }

    #[test]
    fn builds_record_in_trait_order() {
        let display = creator(&["msg", "level"], identity_ratify());
        let action = display
            .create(vec![json!("Hello"), json!("info")])
            .expect("matching arity");
        assert_eq!(
            action.to_value(),
            json!({ "type": "userMsg.display", "msg": "Hello", "level": "info" })
        );
    }

    #[test]
    fn arity_is_checked_after_ratify() {
        let defaulting: Ratify = Arc::new(|mut args: Vec<Value>| -> Result<Vec<Value>, HookError> {
            if args.is_empty() {
                args.push(json!("app-default"));
            }
            Ok(args)
        });
        let display = creator(&["msg"], defaulting);

        let action = display.create(Vec::new()).expect("ratify supplies the default");
        assert_eq!(action.get("msg"), Some(&json!("app-default")));

        let error = display
            .create(vec![json!("msg"), json!("unexpected parameter")])
            .err()
            .expect("too many arguments");
        assert!(
            error
                .to_string()
                .contains("userMsg.display(msg) expecting 1 parameters, but received 2")
        );
    }
}
