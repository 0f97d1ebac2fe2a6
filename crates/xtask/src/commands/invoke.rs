//! Build an action from a genesis document.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use serde_json::Value;

use crate::document::Document;

/// Invoke the action creator for TYPE and print the resulting action
#[derive(Parser)]
pub struct Invoke {
    /// Genesis document (.ron, .toml or .json)
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Action type to invoke (e.g., widget.fetch.complete)
    #[arg(value_name = "TYPE")]
    action_type: String,

    /// Positional arguments as a JSON array (e.g., '["hello", 3]')
    #[arg(value_name = "ARGS_JSON", default_value = "[]")]
    args: String,
}

impl Invoke {
    pub fn execute(self, config: Option<&Path>) -> Result<()> {
        let args = parse_args(&self.args)?;

        let document = Document::load(&self.file, config)?;
        let runtime = document
            .transformer()
            .transform(&document.genesis)
            .with_context(|| format!("Invalid genesis tree in {}", self.file.display()))?;

        let node = runtime.lookup(&self.action_type).with_context(|| {
            format!(
                "No node {} in {} (known action types: {})",
                self.action_type,
                self.file.display(),
                runtime.action_types().join(", ")
            )
        })?;

        match node.invoke(args)?.into_action() {
            Some(action) => {
                println!("{}", serde_json::to_string_pretty(&action)?);
            }
            None => {
                println!(
                    "{} {} is a thunk action creator; its thunk is application code",
                    style("note:").bold().yellow(),
                    self.action_type
                );
            }
        }

        Ok(())
    }
}

fn parse_args(text: &str) -> Result<Vec<Value>> {
    match serde_json::from_str(text).context("ARGS_JSON is not valid JSON")? {
        Value::Array(args) => Ok(args),
        other => anyhow::bail!("ARGS_JSON must be a JSON array, got {}", other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn args_must_be_a_json_array() {
        assert_eq!(
            parse_args(r#"["hi", 3]"#).expect("array"),
            vec![json!("hi"), json!(3)]
        );
        assert!(parse_args("[]").expect("empty").is_empty());
        assert!(parse_args(r#"{"msg": "hi"}"#).is_err());
        assert!(parse_args("not json").is_err());
    }
}
