//! Development tasks for the genesis workspace
//!
//! This binary provides development utilities using the cargo-xtask pattern.
//! Run with: `cargo xtask <command>`

mod commands;
mod document;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use commands::{Check, Invoke, Types};

/// Development tasks for genesis documents
#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Inspect and validate genesis documents", long_about = None)]
#[command(version)]
struct Cli {
    /// Transformer configuration (TOML: separator, meta_key)
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// List every action type a document generates
    Types(Types),

    /// Validate a document
    Check(Check),

    /// Build an action from a document
    Invoke(Invoke),
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.config.as_deref();

    match cli.command {
        Command::Types(cmd) => cmd.execute(config),
        Command::Check(cmd) => cmd.execute(config),
        Command::Invoke(cmd) => cmd.execute(config),
    }
}
