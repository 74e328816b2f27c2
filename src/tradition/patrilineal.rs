//! tradition::patrilineal
//!
//! Children take their father's surname.

use crate::core::name::GedcomName;
use crate::core::types::Sex;

use super::traits::{NameTemplate, SurnameTradition};

/// Children inherit the father's first surname token whole, particle
/// included. Only fathers can be derived from a child's name.
#[derive(Debug, Clone, Copy, Default)]
pub struct PatrilinealTradition;

impl SurnameTradition for PatrilinealTradition {
    fn name(&self) -> &'static str {
        "patrilineal"
    }

    fn new_child_names(
        &self,
        father: &GedcomName,
        _mother: &GedcomName,
        _sex: Sex,
    ) -> NameTemplate {
        match father.surname(0) {
            Some(token) => NameTemplate::for_surname(token),
            None => NameTemplate::unknown(),
        }
    }

    fn new_parent_names(&self, child: &GedcomName, sex: Sex) -> NameTemplate {
        match (sex, child.surname(0)) {
            (Sex::Male, Some(token)) => NameTemplate::for_surname(token),
            _ => NameTemplate::unknown(),
        }
    }

    fn new_spouse_names(&self, _spouse: &GedcomName, _sex: Sex) -> NameTemplate {
        NameTemplate::unknown()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn child_takes_fathers_surname() {
        let father = GedcomName::parse("Vincent /van Gogh/");
        let mother = GedcomName::parse("Anna /Carbentus/");
        let template = PatrilinealTradition.new_child_names(&father, &mother, Sex::Female);
        assert_eq!(template.name, "/van Gogh/");
        assert_eq!(template.spfx.as_deref(), Some("van"));
        assert_eq!(template.surn.as_deref(), Some("Gogh"));
    }

    #[test]
    fn missing_father_derives_nothing() {
        let father = GedcomName::parse("");
        let mother = GedcomName::parse("Anna /Carbentus/");
        assert_eq!(
            PatrilinealTradition.new_child_names(&father, &mother, Sex::Male),
            NameTemplate::unknown()
        );
    }

    #[test]
    fn father_derived_from_child() {
        let child = GedcomName::parse("Theo /van Gogh/");
        let template = PatrilinealTradition.new_parent_names(&child, Sex::Male);
        assert_eq!(template.name, "/van Gogh/");
    }

    #[test]
    fn mother_not_derivable() {
        let child = GedcomName::parse("Theo /van Gogh/");
        assert_eq!(
            PatrilinealTradition.new_parent_names(&child, Sex::Female),
            NameTemplate::unknown()
        );
        assert_eq!(
            PatrilinealTradition.new_parent_names(&child, Sex::Unknown),
            NameTemplate::unknown()
        );
    }

    #[test]
    fn no_married_names() {
        let spouse = GedcomName::parse("Johanna /Bonger/");
        assert!(!PatrilinealTradition.has_married_names());
        assert_eq!(
            PatrilinealTradition.new_spouse_names(&spouse, Sex::Female),
            NameTemplate::unknown()
        );
    }
}
