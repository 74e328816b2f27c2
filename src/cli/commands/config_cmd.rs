//! config command - Get, set, or list configuration values

use std::path::PathBuf;

use anyhow::{Context as _, Result};

use crate::cli::Context;
use crate::core::config::Config;
use crate::ui::output;

/// Get a configuration value.
pub fn get(ctx: &Context, key: &str) -> Result<()> {
    let config = Config::load(ctx.config.as_deref()).context("Failed to load config")?;
    match config.global.get(key)? {
        // Key exists but has no value - exit silently
        None => Ok(()),
        Some(value) => {
            println!("{}", value);
            Ok(())
        }
    }
}

/// Set a configuration value.
pub fn set(ctx: &Context, key: &str, value: &str) -> Result<()> {
    let path = write_path(ctx)?;

    let mut global = Config::load(Some(&path))
        .context("Failed to load config")?
        .global;
    global.set(key, value)?;
    Config::write_to(&path, &global).context("Failed to write config")?;

    output::print(format!("Set {} = {}", key, value), ctx.verbosity);
    Ok(())
}

/// List all configuration values.
pub fn list(ctx: &Context) -> Result<()> {
    let config = Config::load(ctx.config.as_deref()).context("Failed to load config")?;

    if ctx.json {
        let entries: serde_json::Map<String, serde_json::Value> = config
            .global
            .entries()
            .into_iter()
            .map(|(key, value)| (key.to_string(), value.into()))
            .collect();
        println!("{}", serde_json::Value::Object(entries));
        return Ok(());
    }

    for (key, value) in config.global.entries() {
        match value {
            Some(value) => println!("{} = {}", key, value),
            None => println!("{} = (not set)", key),
        }
    }
    Ok(())
}

/// Where `config set` writes: the --config path if given, otherwise the
/// canonical global location.
fn write_path(ctx: &Context) -> Result<PathBuf> {
    match &ctx.config {
        Some(path) => Ok(path.clone()),
        None => Ok(Config::global_config_path()?),
    }
}
