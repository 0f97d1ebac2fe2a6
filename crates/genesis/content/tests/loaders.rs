//! Loader tests against the bundled data directory and temporary files.

use std::path::PathBuf;

use genesis_content::{ConfigLoader, ContentFactory, GenesisLoader};
use genesis_core::{
    Action, ConfigError, HookError, HookRegistry, Thunk, Transformer, transform, transform_root,
};
use serde_json::{Value, json};

fn data_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
}

fn hooks() -> HookRegistry<Vec<Action>> {
    HookRegistry::new()
        .with_ratify(
            "defaultMsg",
            |mut args: Vec<Value>| -> Result<Vec<Value>, HookError> {
                if args.is_empty() {
                    args.push(json!("(no message)"));
                }
                Ok(args)
            },
        )
        .with_thunk("loadWidget", |args: Vec<Value>| -> Thunk<Vec<Action>> {
            let id = args.into_iter().next().unwrap_or(Value::Null);
            Box::new(move |log: &mut Vec<Action>| {
                log.push(Action::new("widget.fetch").with_trait("id", id));
            })
        })
}

#[test]
fn factory_lists_bundled_documents() {
    let factory = ContentFactory::new(data_dir());
    let names = factory.document_names().expect("readable data dir");
    assert_eq!(names, ["chat", "session", "widget"]);
}

#[test]
fn ron_document_with_ratify_and_app_data() {
    let factory = ContentFactory::new(data_dir());
    let genesis = factory.load_genesis("chat", &hooks()).expect("chat.ron");
    let user_msg = transform_root(&genesis).expect("single root");

    assert_eq!(user_msg.action_type(), Ok("userMsg"));
    let defaulted = user_msg.create(vec![]).expect("ratify fills the message");
    assert_eq!(
        defaulted.to_value(),
        json!({ "type": "userMsg", "msg": "(no message)" })
    );

    let close = user_msg.child("close").expect("close");
    assert_eq!(close.action_type(), Ok("userMsg.close"));

    let max_length = user_msg.data("maxLength").expect("app data");
    assert_eq!(max_length.downcast_ref::<Value>(), Some(&json!(280)));
}

#[test]
fn toml_document_with_thunk() {
    let factory = ContentFactory::new(data_dir());
    let genesis = factory.load_genesis("widget", &hooks()).expect("widget.toml");
    let runtime = transform(&genesis).expect("valid genesis");

    assert_eq!(
        runtime.action_types(),
        [
            "widget.fetch",
            "widget.fetch.complete",
            "widget.fetch.fail",
            "widget.load"
        ]
    );

    let load = runtime.find("widget.load").expect("load");
    let thunk = load
        .invoke(vec![json!(42)])
        .expect("thunk")
        .into_thunk()
        .expect("thunk dispatchable");
    let mut log = Vec::new();
    thunk(&mut log);
    assert_eq!(log, [Action::new("widget.fetch").with_trait("id", 42)]);
}

#[test]
fn json_document_arity() {
    let path = data_dir().join("session.json");
    let genesis = GenesisLoader::load(&path, &hooks()).expect("session.json");
    let session = transform_root(&genesis).expect("single root");

    let login = session.child("login").expect("login");
    let error = login.create(vec![json!("ada")]).err().expect("one arg short");
    assert!(
        error
            .to_string()
            .contains("expecting 2 parameters, but received 1")
    );
}

#[test]
fn unknown_hook_is_reported_with_path() {
    let error = GenesisLoader::load(&data_dir().join("chat.ron"), &HookRegistry::<()>::new())
        .err()
        .expect("defaultMsg is not registered");

    let config_error = error.downcast_ref::<ConfigError>().expect("config error");
    assert!(matches!(config_error, ConfigError::UnknownHook { .. }));
    assert!(format!("{error:#}").contains("chat.ron"));
}

#[test]
fn unsupported_extension_and_missing_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let yaml = dir.path().join("actions.yaml");
    std::fs::write(&yaml, "userMsg: {}").expect("write");

    let error = GenesisLoader::load(&yaml, &HookRegistry::<()>::new())
        .err()
        .expect("yaml is unsupported");
    assert!(error.to_string().contains("Unsupported genesis document"));

    let missing = dir.path().join("missing.json");
    let error = GenesisLoader::load(&missing, &HookRegistry::<()>::new())
        .err()
        .expect("missing file");
    assert!(error.to_string().contains("Failed to read file"));
}

#[test]
fn directory_config_changes_separator_and_meta_key() {
    let dir = tempfile::tempdir().expect("tempdir");
    std::fs::write(
        dir.path().join("config.toml"),
        "separator = \"/\"\nmeta_key = \"$action\"\n",
    )
    .expect("write config");
    std::fs::write(
        dir.path().join("todo.json"),
        r#"{ "todo": { "add": { "$action": { "traits": ["text"] } } } }"#,
    )
    .expect("write document");

    let factory = ContentFactory::new(dir.path());
    assert_eq!(factory.document_names().expect("names"), ["todo"]);

    let config = factory.load_config().expect("config");
    let genesis = factory
        .load_genesis("todo", &HookRegistry::<()>::new())
        .expect("todo.json");
    let runtime = Transformer::new(config).transform(&genesis).expect("valid");

    let add = runtime.find("todo/add").expect("add");
    let action = add.create(vec![json!("milk")]).expect("action");
    assert_eq!(action.to_value(), json!({ "type": "todo/add", "text": "milk" }));
}

#[test]
fn listed_documents_load_whatever_the_extension_case() {
    let dir = tempfile::tempdir().expect("tempdir");
    std::fs::write(
        dir.path().join("todo.JSON"),
        r#"{ "todo": { "add": { "actionMeta": { "traits": ["text"] } } } }"#,
    )
    .expect("write document");

    let factory = ContentFactory::new(dir.path());
    assert_eq!(factory.document_names().expect("names"), ["todo"]);
    assert_eq!(
        factory.document_path("todo"),
        Some(dir.path().join("todo.JSON"))
    );

    let genesis = factory
        .load_genesis("todo", &HookRegistry::<()>::new())
        .expect("todo.JSON");
    let runtime = transform(&genesis).expect("valid");
    assert_eq!(runtime.action_types(), ["todo.add"]);
}

#[test]
fn document_lookup_prefers_ron_then_toml_then_json() {
    let dir = tempfile::tempdir().expect("tempdir");
    std::fs::write(dir.path().join("chat.json"), "{}").expect("write json");
    std::fs::write(dir.path().join("chat.toml"), "").expect("write toml");

    let factory = ContentFactory::new(dir.path());
    assert_eq!(
        factory.document_path("chat"),
        Some(dir.path().join("chat.toml"))
    );
    assert_eq!(factory.document_path("config"), None);
    assert_eq!(factory.document_path("missing"), None);
}

#[test]
fn config_loader_reads_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("genesis.toml");
    std::fs::write(&path, "meta_key = \"meta\"\n").expect("write");

    let config = ConfigLoader::load(&path).expect("config");
    assert_eq!(config.meta_key, "meta");
    assert_eq!(config.separator, '.');
}
