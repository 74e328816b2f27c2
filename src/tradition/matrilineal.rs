//! tradition::matrilineal
//!
//! Children take their mother's surname.

use crate::core::name::GedcomName;
use crate::core::types::Sex;

use super::traits::{NameTemplate, SurnameTradition};

/// The mirror image of the patrilineal rule: children inherit the
/// mother's first surname token, and only mothers can be derived from a
/// child's name.
#[derive(Debug, Clone, Copy, Default)]
pub struct MatrilinealTradition;

impl SurnameTradition for MatrilinealTradition {
    fn name(&self) -> &'static str {
        "matrilineal"
    }

    fn new_child_names(
        &self,
        _father: &GedcomName,
        mother: &GedcomName,
        _sex: Sex,
    ) -> NameTemplate {
        match mother.surname(0) {
            Some(token) => NameTemplate::for_surname(token),
            None => NameTemplate::unknown(),
        }
    }

    fn new_parent_names(&self, child: &GedcomName, sex: Sex) -> NameTemplate {
        match (sex, child.surname(0)) {
            (Sex::Female, Some(token)) => NameTemplate::for_surname(token),
            _ => NameTemplate::unknown(),
        }
    }

    fn new_spouse_names(&self, _spouse: &GedcomName, _sex: Sex) -> NameTemplate {
        NameTemplate::unknown()
    }
}
