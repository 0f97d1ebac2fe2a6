//! Action metadata: the marker that turns a genesis node into an action node.
//!
//! [`ActionMeta`] is a configuration struct whose recognized fields are all
//! optional. [`ActionMeta::validate`] runs the ordered validation pipeline and
//! yields the [`ActionSpec`] the transformer builds a creator from.

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::error::{ConfigError, TraitRule};
use crate::hooks::{HookError, Ratify, Thunk, ThunkFactory, identity_ratify};
use crate::path::NodePath;

/// Field name reserved for the action discriminator in produced records.
pub const TYPE_FIELD: &str = "type";

/// Recognized action metadata fields.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::IntoStaticStr,
)]
#[strum(serialize_all = "snake_case")]
pub enum MetaField {
    Traits,
    Ratify,
    Thunk,
}

impl MetaField {
    pub const ALL: [MetaField; 3] = [MetaField::Traits, MetaField::Ratify, MetaField::Thunk];

    /// Field name as written in genesis documents.
    pub fn as_str(self) -> &'static str {
        self.into()
    }
}

/// Declares a genesis node to be an action node.
///
/// - `traits`: names that are both the creator's positional parameters and
///   the produced record's fields. Defaults to none.
/// - `ratify`: validates/defaults arguments before the record is built.
///   Defaults to the identity.
/// - `thunk`: produce a deferred operation instead of a record. Exclusive with
///   every other field.
pub struct ActionMeta<C> {
    traits: Option<Vec<String>>,
    ratify: Option<Ratify>,
    thunk: Option<ThunkFactory<C>>,
}

impl<C> ActionMeta<C> {
    /// Metadata with no fields: a creator taking no arguments.
    pub fn new() -> Self {
        Self {
            traits: None,
            ratify: None,
            thunk: None,
        }
    }

    #[must_use]
    pub fn traits<I, S>(mut self, traits: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.traits = Some(traits.into_iter().map(Into::into).collect());
        self
    }

    #[must_use]
    pub fn ratify<F>(self, ratify: F) -> Self
    where
        F: Fn(Vec<Value>) -> Result<Vec<Value>, HookError> + Send + Sync + 'static,
    {
        self.ratify_hook(Arc::new(ratify))
    }

    /// Attaches an already shared ratify hook (e.g. from a [`HookRegistry`]).
    ///
    /// [`HookRegistry`]: crate::hooks::HookRegistry
    #[must_use]
    pub fn ratify_hook(mut self, ratify: Ratify) -> Self {
        self.ratify = Some(ratify);
        self
    }

    #[must_use]
    pub fn thunk<F>(self, factory: F) -> Self
    where
        F: Fn(Vec<Value>) -> Thunk<C> + Send + Sync + 'static,
    {
        self.thunk_hook(Arc::new(factory))
    }

    #[must_use]
    pub fn thunk_hook(mut self, factory: ThunkFactory<C>) -> Self {
        self.thunk = Some(factory);
        self
    }

    /// Recognized fields that were explicitly supplied, in declaration order.
    pub fn present_fields(&self) -> Vec<MetaField> {
        MetaField::ALL
            .into_iter()
            .filter(|field| match field {
                MetaField::Traits => self.traits.is_some(),
                MetaField::Ratify => self.ratify.is_some(),
                MetaField::Thunk => self.thunk.is_some(),
            })
            .collect()
    }

    /// Validates the metadata of the node at `path`.
    pub fn validate(&self, path: &NodePath) -> Result<ActionSpec<C>, ConfigError> {
        if let Some(factory) = &self.thunk {
            let conflicts: Vec<MetaField> = self
                .present_fields()
                .into_iter()
                .filter(|field| *field != MetaField::Thunk)
                .collect();
            if !conflicts.is_empty() {
                return Err(ConfigError::ThunkNotExclusive {
                    path: path.clone(),
                    conflicts,
                });
            }
            return Ok(ActionSpec::Thunk(Arc::clone(factory)));
        }

        let traits = self.traits.clone().unwrap_or_default();
        validate_traits(&traits, path)?;

        let ratify = self.ratify.clone().unwrap_or_else(identity_ratify);

        Ok(ActionSpec::Record {
            traits: traits.into(),
            ratify,
        })
    }
}

fn validate_traits(traits: &[String], path: &NodePath) -> Result<(), ConfigError> {
    let mut seen = HashSet::with_capacity(traits.len());
    for name in traits {
        let rule = if name.is_empty() {
            Some(TraitRule::Empty)
        } else if name == TYPE_FIELD {
            Some(TraitRule::Reserved)
        } else if !seen.insert(name.as_str()) {
            Some(TraitRule::Duplicate)
        } else {
            None
        };

        if let Some(rule) = rule {
            return Err(ConfigError::InvalidTrait {
                path: path.clone(),
                name: name.clone(),
                rule,
            });
        }
    }
    Ok(())
}

impl<C> Default for ActionMeta<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> Clone for ActionMeta<C> {
    fn clone(&self) -> Self {
        Self {
            traits: self.traits.clone(),
            ratify: self.ratify.clone(),
            thunk: self.thunk.clone(),
        }
    }
}

impl<C> fmt::Debug for ActionMeta<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActionMeta")
            .field("traits", &self.traits)
            .field("ratify", &self.ratify.is_some())
            .field("thunk", &self.thunk.is_some())
            .finish()
    }
}

/// Validated action metadata.
pub enum ActionSpec<C> {
    /// Produces a tagged record from positional arguments.
    Record { traits: Arc<[String]>, ratify: Ratify },
    /// Hands positional arguments to the thunk factory untouched.
    Thunk(ThunkFactory<C>),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path() -> NodePath {
        NodePath::from("userMsg")
    }

    #[test]
    fn empty_meta_is_a_zero_trait_record() {
        let spec = ActionMeta::<()>::new().validate(&path()).expect("valid");
        match spec {
            ActionSpec::Record { traits, .. } => assert!(traits.is_empty()),
            ActionSpec::Thunk(_) => panic!("expected a record spec"),
        }
    }

    #[test]
    fn thunk_with_traits_is_rejected() {
        let meta = ActionMeta::<()>::new()
            .traits(["selCrit"])
            .thunk(|_args| Box::new(|_ctx: &mut ()| {}));
        let error = meta.validate(&path()).err().expect("must fail");
        assert_eq!(
            error,
            ConfigError::ThunkNotExclusive {
                path: path(),
                conflicts: vec![MetaField::Traits],
            }
        );
        assert!(error.to_string().contains("mutually exclusive"));
    }

    #[test]
    fn thunk_with_empty_traits_is_still_a_conflict() {
        let meta = ActionMeta::<()>::new()
            .traits(Vec::<String>::new())
            .ratify(|args| Ok(args))
            .thunk(|_args| Box::new(|_ctx: &mut ()| {}));
        let error = meta.validate(&path()).err().expect("must fail");
        assert!(matches!(
            error,
            ConfigError::ThunkNotExclusive { ref conflicts, .. }
                if conflicts == &[MetaField::Traits, MetaField::Ratify]
        ));
    }

    #[test]
    fn trait_rules() {
        let cases = [
            (vec!["msg", ""], TraitRule::Empty),
            (vec!["type"], TraitRule::Reserved),
            (vec!["msg", "msg"], TraitRule::Duplicate),
        ];
        for (traits, expected) in cases {
            let error = ActionMeta::<()>::new()
                .traits(traits)
                .validate(&path())
                .err()
                .expect("must fail");
            assert!(
                matches!(error, ConfigError::InvalidTrait { rule, .. } if rule == expected),
                "unexpected error: {error}"
            );
        }
    }

    #[test]
    fn meta_field_names() {
        assert_eq!(MetaField::Traits.as_str(), "traits");
        assert_eq!("thunk".parse::<MetaField>().ok(), Some(MetaField::Thunk));
        assert!("actionMeta".parse::<MetaField>().is_err());
    }
}
