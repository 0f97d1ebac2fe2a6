//! Validate a genesis document.

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Parser;
use console::style;
use genesis_core::{ConfigError, GenesisError, RuntimeNode};

use crate::document::{DispatchLog, Document};

/// Validate a genesis document and report the first configuration error
#[derive(Parser)]
pub struct Check {
    /// Genesis document (.ron, .toml or .json)
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Also require exactly one top-level node
    #[arg(long)]
    single_root: bool,
}

impl Check {
    pub fn execute(self, config: Option<&Path>) -> Result<()> {
        let result = Document::load(&self.file, config).and_then(|document| {
            let transformer = document.transformer();
            let runtime = if self.single_root {
                transformer.transform_root(&document.genesis)
            } else {
                transformer.transform(&document.genesis)
            };
            Ok((document, runtime?))
        });

        match result {
            Ok((document, runtime)) => {
                report_valid(&document, &runtime);
                Ok(())
            }
            Err(error) => {
                match error.downcast_ref::<ConfigError>() {
                    Some(config_error) => println!(
                        "{} {} [{}]",
                        style("✗").bold().red(),
                        self.file.display(),
                        style(config_error.error_code()).yellow()
                    ),
                    None => println!("{} {}", style("✗").bold().red(), self.file.display()),
                }
                Err(error)
            }
        }
    }
}

fn report_valid(document: &Document, runtime: &RuntimeNode<DispatchLog>) {
    let (actions, organizational) = count_nodes(runtime);
    println!(
        "{} {}",
        style("✓").bold().green(),
        style(document.path.display()).bold()
    );
    println!("  {} {}", style("Action creators:").cyan(), actions);
    println!("  {} {}", style("Organizational nodes:").cyan(), organizational);
    if !document.hooks.is_empty() {
        println!("  {} (bound to stand-ins)", style("Hooks:").cyan());
        for (kind, name) in &document.hooks {
            println!("    {} {}", style(kind).dim(), name);
        }
    }
}

/// Counts (action creators, organizational nodes) in the subtree.
fn count_nodes(node: &RuntimeNode<DispatchLog>) -> (usize, usize) {
    let own = if node.is_action() { (1, 0) } else { (0, 1) };
    node.nodes().fold(own, |(actions, organizational), child| {
        let (a, o) = count_nodes(child);
        (actions + a, organizational + o)
    })
}
