//! Actions produced by generated action creators.
//!
//! An [`Action`] is the plain, Redux-style record `{ type, ...traits }`. A thunk
//! action creator produces a deferred [`Thunk`] instead; [`Dispatchable`] holds
//! whichever of the two a creator returned.

use std::fmt;

use serde::de::Error as _;
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

use crate::genesis::TYPE_FIELD;
use crate::hooks::Thunk;

/// A tagged data record: an action type plus one field per trait.
#[derive(Clone, Debug, PartialEq)]
pub struct Action {
    action_type: String,
    traits: Map<String, Value>,
}

impl Action {
    /// Creates an action of `action_type` with no traits.
    pub fn new(action_type: impl Into<String>) -> Self {
        Self {
            action_type: action_type.into(),
            traits: Map::new(),
        }
    }

    /// Sets a trait (builder pattern).
    #[must_use]
    pub fn with_trait(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.traits.insert(name.into(), value.into());
        self
    }

    pub fn action_type(&self) -> &str {
        &self.action_type
    }

    /// Returns true if this action was created by the creator of `action_type`.
    pub fn is(&self, action_type: &str) -> bool {
        self.action_type == action_type
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.traits.get(name)
    }

    /// Traits in declaration order.
    pub fn traits(&self) -> &Map<String, Value> {
        &self.traits
    }

    /// Renders the action as a flat JSON object, `type` first.
    pub fn to_value(&self) -> Value {
        let mut object = Map::with_capacity(self.traits.len() + 1);
        object.insert(TYPE_FIELD.to_owned(), Value::String(self.action_type.clone()));
        object.extend(self.traits.clone());
        Value::Object(object)
    }
}

impl Serialize for Action {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.traits.len() + 1))?;
        map.serialize_entry(TYPE_FIELD, &self.action_type)?;
        for (name, value) in &self.traits {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Action {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let object = Map::<String, Value>::deserialize(deserializer)?;

        let mut action_type = None;
        let mut traits = Map::new();
        for (key, value) in object {
            if key == TYPE_FIELD {
                action_type = Some(value);
            } else {
                traits.insert(key, value);
            }
        }

        match action_type {
            Some(Value::String(action_type)) => Ok(Self {
                action_type,
                traits,
            }),
            Some(_) => Err(D::Error::custom("action `type` must be a string")),
            None => Err(D::Error::missing_field(TYPE_FIELD)),
        }
    }
}

/// What an action creator returns.
pub enum Dispatchable<C> {
    /// Plain record, ready for a reducer.
    Action(Action),
    /// Deferred operation for a middleware-style dispatcher.
    Thunk(Thunk<C>),
}

impl<C> Dispatchable<C> {
    pub fn into_action(self) -> Option<Action> {
        match self {
            Self::Action(action) => Some(action),
            Self::Thunk(_) => None,
        }
    }

    pub fn into_thunk(self) -> Option<Thunk<C>> {
        match self {
            Self::Thunk(thunk) => Some(thunk),
            Self::Action(_) => None,
        }
    }
}

impl<C> fmt::Debug for Dispatchable<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Action(action) => f.debug_tuple("Action").field(action).finish(),
            Self::Thunk(_) => f.write_str("Thunk(..)"),
        }
    }
}
