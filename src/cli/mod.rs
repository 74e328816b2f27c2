//! cli
//!
//! Command-line interface layer for Ahnentafel.
//!
//! # Responsibilities
//!
//! - Parse command-line arguments and global flags
//! - Delegate to command handlers
//!
//! # Architecture
//!
//! The CLI layer is thin. It parses arguments via clap and dispatches to
//! handlers in [`commands`], which call the engines and format results
//! through [`crate::ui::output`]. The engines never depend on this layer.

pub mod args;
pub mod commands;

pub use args::{Cli, Shell};

use std::path::PathBuf;

use anyhow::Result;

use crate::ui::output::Verbosity;

/// Shared invocation context for command handlers.
#[derive(Debug, Clone)]
pub struct Context {
    /// Output verbosity derived from --quiet/--debug
    pub verbosity: Verbosity,
    /// Machine-readable output
    pub json: bool,
    /// Explicit config file path from --config
    pub config: Option<PathBuf>,
}

/// Run the CLI application.
///
/// This is the main entry point called from `main.rs`.
pub fn run() -> Result<()> {
    let cli = Cli::parse_args();

    let ctx = Context {
        verbosity: Verbosity::from_flags(cli.quiet, cli.debug),
        json: cli.json,
        config: cli.config.clone(),
    };

    commands::dispatch(cli.command, &ctx)
}
