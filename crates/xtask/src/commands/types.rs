//! List every action type a genesis document generates.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use console::style;

use crate::document::Document;

/// List the action types generated from a genesis document
#[derive(Parser)]
pub struct Types {
    /// Genesis document (.ron, .toml or .json)
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value = "list")]
    format: OutputFormat,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormat {
    /// One action type per line
    List,
    /// JSON array of action types
    Json,
}

impl Types {
    pub fn execute(self, config: Option<&Path>) -> Result<()> {
        let document = Document::load(&self.file, config)?;
        let runtime = document
            .transformer()
            .transform(&document.genesis)
            .with_context(|| format!("Invalid genesis tree in {}", self.file.display()))?;
        let types = runtime.action_types();

        match self.format {
            OutputFormat::List => {
                println!(
                    "{} {}",
                    style("Document:").bold().cyan(),
                    document.path.display()
                );
                println!("{} {}", style("Action Types:").bold().cyan(), types.len());
                println!();
                for action_type in types {
                    println!("  {}", action_type);
                }
            }
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(&types)?);
            }
        }

        Ok(())
    }
}
