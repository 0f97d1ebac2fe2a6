//! Builds genesis trees from dynamic documents.
//!
//! Genesis trees authored as data (RON, TOML, JSON, ...) arrive as a
//! [`serde_json::Value`]. Objects become nodes, every other value becomes
//! [`AppData`] holding the JSON value itself, and the configured metadata key
//! (`actionMeta` by default) marks action nodes. Hooks cannot be expressed in
//! data, so `ratify` and `thunk` name entries of a [`HookRegistry`].
//!
//! ```json
//! {
//!   "userMsg": {
//!     "actionMeta": { "traits": ["msg"], "ratify": "defaultMsg" },
//!     "close": { "actionMeta": {} }
//!   }
//! }
//! ```

use serde_json::{Map, Value};

use super::{ActionMeta, GenesisChild, GenesisNode, MetaField};
use crate::config::GenesisConfig;
use crate::data::AppData;
use crate::error::ConfigError;
use crate::hooks::{HookKind, HookRegistry};
use crate::path::NodePath;

impl<C> GenesisNode<C> {
    /// Parses `document` with the default [`GenesisConfig`].
    pub fn from_document(document: &Value, hooks: &HookRegistry<C>) -> Result<Self, ConfigError> {
        parse_document(document, hooks, &GenesisConfig::default())
    }
}

/// Parses a genesis document into a typed [`GenesisNode`].
///
/// Only the document's shape is checked here (mappings, metadata fields,
/// hook references). Structural rules that apply to every genesis tree are
/// enforced by the transformer.
pub fn parse_document<C>(
    document: &Value,
    hooks: &HookRegistry<C>,
    config: &GenesisConfig,
) -> Result<GenesisNode<C>, ConfigError> {
    let Value::Object(root) = document else {
        return Err(ConfigError::NotAMapping {
            path: NodePath::root(),
        });
    };

    if root.contains_key(&config.meta_key) {
        return Err(ConfigError::MetaAtRoot);
    }

    parse_node(root, &NodePath::root(), hooks, config)
}

fn parse_node<C>(
    map: &Map<String, Value>,
    path: &NodePath,
    hooks: &HookRegistry<C>,
    config: &GenesisConfig,
) -> Result<GenesisNode<C>, ConfigError> {
    let mut node = GenesisNode::new();

    for (key, value) in map {
        if *key == config.meta_key {
            node = node.with_meta(parse_meta(value, path, hooks)?);
            continue;
        }

        let child = match value {
            Value::Object(inner) => {
                let child_path = path.join(key, config.separator);
                GenesisChild::Node(parse_node(inner, &child_path, hooks, config)?)
            }
            other => GenesisChild::Data(AppData::new(other.clone())),
        };
        node.insert(key.clone(), child);
    }

    Ok(node)
}

fn parse_meta<C>(
    value: &Value,
    path: &NodePath,
    hooks: &HookRegistry<C>,
) -> Result<ActionMeta<C>, ConfigError> {
    let Value::Object(fields) = value else {
        return Err(ConfigError::MetaNotAMapping { path: path.clone() });
    };

    let unrecognized: Vec<String> = fields
        .keys()
        .filter(|key| key.parse::<MetaField>().is_err())
        .cloned()
        .collect();
    if !unrecognized.is_empty() {
        return Err(ConfigError::UnrecognizedMetaFields {
            path: path.clone(),
            fields: unrecognized,
        });
    }

    let mut meta = ActionMeta::new();

    if let Some(traits) = fields.get(MetaField::Traits.as_str()) {
        meta = meta.traits(parse_traits(traits, path)?);
    }

    if let Some(ratify) = fields.get(MetaField::Ratify.as_str()) {
        let name = hook_name(ratify, HookKind::Ratify, path)?;
        let hook = hooks.ratify(name).ok_or_else(|| unknown_hook(path, HookKind::Ratify, name))?;
        meta = meta.ratify_hook(hook);
    }

    if let Some(thunk) = fields.get(MetaField::Thunk.as_str()) {
        let name = hook_name(thunk, HookKind::Thunk, path)?;
        let hook = hooks.thunk(name).ok_or_else(|| unknown_hook(path, HookKind::Thunk, name))?;
        meta = meta.thunk_hook(hook);
    }

    Ok(meta)
}

fn parse_traits(value: &Value, path: &NodePath) -> Result<Vec<String>, ConfigError> {
    let not_strings = || ConfigError::TraitsNotStrings { path: path.clone() };

    value
        .as_array()
        .ok_or_else(not_strings)?
        .iter()
        .map(|item| item.as_str().map(str::to_owned).ok_or_else(not_strings))
        .collect()
}

/// A hook reference must be a string; anything else is "not a function".
fn hook_name<'a>(
    value: &'a Value,
    kind: HookKind,
    path: &NodePath,
) -> Result<&'a str, ConfigError> {
    value.as_str().ok_or_else(|| match kind {
        HookKind::Ratify => ConfigError::RatifyNotCallable { path: path.clone() },
        HookKind::Thunk => ConfigError::ThunkNotCallable { path: path.clone() },
    })
}

fn unknown_hook(path: &NodePath, kind: HookKind, name: &str) -> ConfigError {
    ConfigError::UnknownHook {
        path: path.clone(),
        kind,
        name: name.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GenesisError;
    use serde_json::json;

    fn registry() -> HookRegistry<()> {
        HookRegistry::<()>::new()
            .with_ratify("passThrough", |args| Ok(args))
            .with_thunk("noop", |_args| Box::new(|_ctx: &mut ()| {}))
    }

    fn parse(document: Value) -> Result<GenesisNode<()>, ConfigError> {
        GenesisNode::from_document(&document, &registry())
    }

    #[test]
    fn objects_become_nodes_and_everything_else_app_data() {
        let node = parse(json!({
            "userMsg": {
                "display": { "actionMeta": { "traits": ["msg"], "ratify": "passThrough" } },
                "appData1": 123,
                "appData2": "this is app data",
                "close": { "actionMeta": {} }
            }
        }))
        .expect("valid document");

        let Some(GenesisChild::Node(user_msg)) = node.get("userMsg") else {
            panic!("userMsg must be a node");
        };
        let keys: Vec<&str> = user_msg.children().map(|(key, _)| key).collect();
        assert_eq!(keys, ["display", "appData1", "appData2", "close"]);

        match user_msg.get("appData1") {
            Some(GenesisChild::Data(data)) => {
                assert_eq!(data.downcast_ref::<Value>(), Some(&json!(123)));
            }
            other => panic!("unexpected child: {other:?}"),
        }
        match user_msg.get("display") {
            Some(GenesisChild::Node(display)) => {
                let meta = display.meta().expect("display is an action");
                assert_eq!(meta.present_fields(), [MetaField::Traits, MetaField::Ratify]);
            }
            other => panic!("unexpected child: {other:?}"),
        }
    }

    #[test]
    fn document_must_be_an_object() {
        for document in [json!(123), json!("genesis"), json!([1, 2]), Value::Null] {
            let error = parse(document).err().expect("must fail");
            assert_eq!(error.to_string(), "genesis node root is NOT a mapping");
        }
    }

    #[test]
    fn metadata_in_root_is_rejected() {
        let error = parse(json!({ "actionMeta": {} })).err().expect("must fail");
        assert_eq!(error, ConfigError::MetaAtRoot);
        assert!(error.to_string().contains("CANNOT have action metadata in the root"));
    }

    #[test]
    fn metadata_shape_errors() {
        let cases = [
            (json!({ "userMsg": { "actionMeta": "ouch" } }), "action metadata is NOT a mapping"),
            (json!({ "userMsg": { "actionMeta": { "traits": 123 } } }), "traits is NOT a string[]"),
            (json!({ "userMsg": { "actionMeta": { "traits": ["a", 1] } } }), "traits is NOT a string[]"),
            (json!({ "userMsg": { "actionMeta": { "ratify": 5 } } }), "ratify is NOT a function"),
            (json!({ "userMsg": { "actionMeta": { "thunk": [] } } }), "thunk is NOT a function"),
            (
                json!({ "userMsg": { "actionMeta": { "traits": [], "payload": 1, "meta": 2 } } }),
                "unrecognized fields: payload, meta",
            ),
        ];

        for (document, expected) in cases {
            let error = parse(document).err().expect("must fail");
            assert!(
                error.to_string().contains(expected),
                "`{error}` should contain `{expected}`"
            );
            assert!(error.to_string().contains("userMsg"));
        }
    }

    #[test]
    fn unknown_hook_names_are_reported() {
        let error = parse(json!({ "a": { "b": { "actionMeta": { "ratify": "missing" } } } }))
            .err()
            .expect("must fail");
        assert_eq!(
            error,
            ConfigError::UnknownHook {
                path: "a.b".into(),
                kind: HookKind::Ratify,
                name: "missing".into(),
            }
        );
    }

    #[test]
    fn custom_meta_key_and_separator() {
        let config = GenesisConfig::default()
            .with_meta_key("$action")
            .with_separator('/');
        let document = json!({ "a": { "b": { "$action": { "ratify": "missing" } } } });
        let error = parse_document(&document, &registry(), &config)
            .err()
            .expect("must fail");
        assert_eq!(error.path().map(NodePath::as_str), Some("a/b"));
    }
}
