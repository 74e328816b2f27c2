//! cli::commands
//!
//! Command dispatch and handlers.
//!
//! # Architecture
//!
//! Each command handler:
//! 1. Validates command-specific arguments
//! 2. Calls the engines to compute the result
//! 3. Formats and displays output (human-readable or `--json`)
//!
//! Tradition and locale resolution is shared: an explicit flag wins,
//! otherwise the configured default applies.

mod completion;
mod config_cmd;
mod daboville_cmd;
mod names;
mod sosa_cmd;
mod traditions;

pub use completion::completion;
pub use config_cmd::{get as config_get, list as config_list, set as config_set};
pub use daboville_cmd::run as daboville;
pub use names::{child, parent, spouse};
pub use sosa_cmd::run as sosa;
pub use traditions::list as traditions;

use anyhow::Result;

use crate::cli::args::{Command, ConfigAction};
use crate::cli::Context;
use crate::core::config::Config;
use crate::kinship::KinshipNamer;
use crate::tradition::{create_tradition, SurnameTradition};
use crate::ui::output;

/// Dispatch a command to its handler.
pub fn dispatch(command: Command, ctx: &Context) -> Result<()> {
    match command {
        Command::Child {
            father,
            mother,
            sex,
            tradition,
        } => names::child(ctx, &father, &mother, sex.into(), tradition.as_deref()),
        Command::Parent {
            child,
            sex,
            tradition,
        } => names::parent(ctx, &child, sex.into(), tradition.as_deref()),
        Command::Spouse {
            partner,
            sex,
            tradition,
        } => names::spouse(ctx, &partner, sex.into(), tradition.as_deref()),
        Command::Sosa { action } => sosa_cmd::run(ctx, action),
        Command::Daboville { action } => daboville_cmd::run(ctx, action),
        Command::Traditions => traditions::list(ctx),
        Command::Config { action } => match action {
            ConfigAction::Get { key } => config_cmd::get(ctx, &key),
            ConfigAction::Set { key, value } => config_cmd::set(ctx, &key, &value),
            ConfigAction::List => config_cmd::list(ctx),
        },
        Command::Completion { shell } => completion::completion(shell),
    }
}

/// Resolve the surname tradition: explicit flag, else configuration.
pub(crate) fn resolve_tradition(
    ctx: &Context,
    flag: Option<&str>,
) -> Result<Box<dyn SurnameTradition>> {
    let tag = match flag {
        Some(tag) => tag.to_string(),
        None => Config::load(ctx.config.as_deref())?.tradition().to_string(),
    };
    let tradition = create_tradition(&tag)?;
    output::debug(
        format!("using surname tradition '{}'", tradition.name()),
        ctx.verbosity,
    );
    Ok(tradition)
}

/// Resolve the kinship namer: explicit flag, else configuration.
pub(crate) fn resolve_namer(ctx: &Context, flag: Option<&str>) -> Result<Box<dyn KinshipNamer>> {
    let tag = match flag {
        Some(tag) => tag.to_string(),
        None => Config::load(ctx.config.as_deref())?.locale().to_string(),
    };
    let namer = crate::kinship::for_locale(&tag)?;
    output::debug(
        format!("using kinship locale '{}'", namer.locale()),
        ctx.verbosity,
    );
    Ok(namer)
}
