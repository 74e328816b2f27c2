//! traditions command - List surname traditions and capabilities

use anyhow::Result;

use crate::cli::Context;
use crate::tradition::Tradition;

/// List all registered surname traditions.
pub fn list(ctx: &Context) -> Result<()> {
    if ctx.json {
        let entries: Vec<serde_json::Value> = Tradition::all()
            .iter()
            .map(|tradition| {
                let rules = tradition.create();
                serde_json::json!({
                    "tag": tradition.name(),
                    "surnames": rules.has_surnames(),
                    "married_names": rules.has_married_names(),
                })
            })
            .collect();
        println!("{}", serde_json::to_string(&entries)?);
    } else {
        for tradition in Tradition::all() {
            let rules = tradition.create();
            println!(
                "{:<12} surnames: {:<4} married names: {}",
                tradition.name(),
                yes_no(rules.has_surnames()),
                yes_no(rules.has_married_names())
            );
        }
    }
    Ok(())
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}
