//! daboville command - d'Aboville descendant numbering

use std::num::NonZeroU32;

use anyhow::{anyhow, bail, Result};

use crate::cli::args::DabovilleAction;
use crate::cli::Context;
use crate::core::types::Daboville;

/// Run a daboville subcommand.
pub fn run(ctx: &Context, action: DabovilleAction) -> Result<()> {
    match action {
        DabovilleAction::Parent { path } => {
            let path: Daboville = path.parse()?;
            match path.parent() {
                Some(parent) => {
                    if ctx.json {
                        println!(
                            "{}",
                            serde_json::json!({ "path": path, "parent": parent })
                        );
                    } else {
                        println!("{parent}");
                    }
                    Ok(())
                }
                None => bail!("'{path}' is a single-segment path; it has no parent"),
            }
        }
        DabovilleAction::Child { path, position } => {
            let path: Daboville = path.parse()?;
            let position = NonZeroU32::new(position)
                .ok_or_else(|| anyhow!("birth-order positions start at 1"))?;
            let child = path.child(position);
            if ctx.json {
                println!("{}", serde_json::json!({ "path": path, "child": child }));
            } else {
                println!("{child}");
            }
            Ok(())
        }
        DabovilleAction::Generation { path } => {
            let path: Daboville = path.parse()?;
            if ctx.json {
                println!(
                    "{}",
                    serde_json::json!({ "path": path, "generation": path.generation() })
                );
            } else {
                println!("{}", path.generation());
            }
            Ok(())
        }
    }
}
