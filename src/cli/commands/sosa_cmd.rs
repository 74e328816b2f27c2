//! sosa command - Sosa-Stradonitz ancestor numbering

use anyhow::{bail, Result};

use crate::cli::args::SosaAction;
use crate::cli::Context;
use crate::core::types::Sosa;
use crate::kinship::relationship_name;
use crate::numbering::Step;

use super::resolve_namer;

/// Run a sosa subcommand.
pub fn run(ctx: &Context, action: SosaAction) -> Result<()> {
    match action {
        SosaAction::Father { number } => {
            let sosa = Sosa::new(number)?;
            emit_relative(ctx, sosa, "father", sosa.father())
        }
        SosaAction::Mother { number } => {
            let sosa = Sosa::new(number)?;
            emit_relative(ctx, sosa, "mother", sosa.mother())
        }
        SosaAction::Child { number } => {
            let sosa = Sosa::new(number)?;
            match sosa.child() {
                Some(child) => emit_relative(ctx, sosa, "child", child),
                None => bail!("sosa 1 is the root individual; it is nobody's ancestor"),
            }
        }
        SosaAction::Path { number } => path(ctx, number),
        SosaAction::Name { number, locale } => name(ctx, number, locale.as_deref()),
        SosaAction::Generation { number } => {
            let sosa = Sosa::new(number)?;
            if ctx.json {
                println!(
                    "{}",
                    serde_json::json!({ "sosa": sosa, "generation": sosa.generation() })
                );
            } else {
                println!("{}", sosa.generation());
            }
            Ok(())
        }
    }
}

fn emit_relative(ctx: &Context, sosa: Sosa, relation: &str, result: Sosa) -> Result<()> {
    if ctx.json {
        println!(
            "{}",
            serde_json::json!({ "sosa": sosa, "relation": relation, "result": result })
        );
    } else {
        println!("{result}");
    }
    Ok(())
}

fn path(ctx: &Context, number: u64) -> Result<()> {
    let sosa = Sosa::new(number)?;
    let steps: Vec<Step> = sosa.ancestry().collect();
    if ctx.json {
        println!("{}", serde_json::json!({ "sosa": sosa, "steps": steps }));
    } else {
        println!(
            "{}",
            steps.iter().map(Step::name).collect::<Vec<_>>().join(" ")
        );
    }
    Ok(())
}

fn name(ctx: &Context, number: u64, locale: Option<&str>) -> Result<()> {
    let sosa = Sosa::new(number)?;
    let namer = resolve_namer(ctx, locale)?;
    let relationship = relationship_name(sosa, namer.as_ref());
    if ctx.json {
        println!(
            "{}",
            serde_json::json!({
                "sosa": sosa,
                "locale": namer.locale(),
                "relationship": relationship,
            })
        );
    } else {
        println!("{relationship}");
    }
    Ok(())
}
