//! child/parent/spouse commands - Derive name fields under a tradition

use anyhow::Result;

use crate::cli::Context;
use crate::core::name::GedcomName;
use crate::core::types::Sex;
use crate::tradition::NameTemplate;
use crate::ui::output;

use super::resolve_tradition;

/// Derive a child's name fields from its parents' names.
pub fn child(
    ctx: &Context,
    father: &str,
    mother: &str,
    sex: Sex,
    tradition: Option<&str>,
) -> Result<()> {
    let tradition = resolve_tradition(ctx, tradition)?;
    let template = tradition.new_child_names(
        &GedcomName::parse(father),
        &GedcomName::parse(mother),
        sex,
    );
    emit(ctx, &template)
}

/// Derive a parent's name fields from a child's name.
pub fn parent(ctx: &Context, child: &str, sex: Sex, tradition: Option<&str>) -> Result<()> {
    let tradition = resolve_tradition(ctx, tradition)?;
    let template = tradition.new_parent_names(&GedcomName::parse(child), sex);
    emit(ctx, &template)
}

/// Derive a spouse's name fields from the other spouse's name.
pub fn spouse(ctx: &Context, partner: &str, sex: Sex, tradition: Option<&str>) -> Result<()> {
    let tradition = resolve_tradition(ctx, tradition)?;
    let template = tradition.new_spouse_names(&GedcomName::parse(partner), sex);
    emit(ctx, &template)
}

fn emit(ctx: &Context, template: &NameTemplate) -> Result<()> {
    if ctx.json {
        println!("{}", serde_json::to_string(template)?);
    } else {
        println!("{}", output::format_template(template));
    }
    Ok(())
}
