//! tradition::paternal
//!
//! Patrilineal descent, plus wives taking their husband's surname.

use crate::core::name::GedcomName;
use crate::core::types::Sex;

use super::patrilineal::PatrilinealTradition;
use super::traits::{NameTemplate, SurnameTradition};

/// Children follow the patrilineal rule; a wife additionally gains her
/// husband's surname as a married name (`_MARNM`).
#[derive(Debug, Clone, Copy, Default)]
pub struct PaternalTradition;

impl SurnameTradition for PaternalTradition {
    fn name(&self) -> &'static str {
        "paternal"
    }

    fn has_married_names(&self) -> bool {
        true
    }

    fn new_child_names(
        &self,
        father: &GedcomName,
        mother: &GedcomName,
        sex: Sex,
    ) -> NameTemplate {
        PatrilinealTradition.new_child_names(father, mother, sex)
    }

    fn new_parent_names(&self, child: &GedcomName, sex: Sex) -> NameTemplate {
        PatrilinealTradition.new_parent_names(child, sex)
    }

    fn new_spouse_names(&self, spouse: &GedcomName, sex: Sex) -> NameTemplate {
        match (sex, spouse.surname(0)) {
            (Sex::Female, Some(token)) => {
                NameTemplate::unknown().with_marnm(format!("/{token}/"))
            }
            _ => NameTemplate::unknown(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn children_follow_the_father() {
        let father = GedcomName::parse("John /Smith/");
        let mother = GedcomName::parse("Mary /Jones/");
        let template = PaternalTradition.new_child_names(&father, &mother, Sex::Female);
        assert_eq!(template.name, "/Smith/");
    }

    #[test]
    fn wife_gains_married_name() {
        let husband = GedcomName::parse("John /Smith/");
        let template = PaternalTradition.new_spouse_names(&husband, Sex::Female);
        assert_eq!(template.name, "//");
        assert_eq!(template.marnm.as_deref(), Some("/Smith/"));
    }

    #[test]
    fn husband_keeps_his_name() {
        let wife = GedcomName::parse("Mary /Jones/");
        assert_eq!(
            PaternalTradition.new_spouse_names(&wife, Sex::Male),
            NameTemplate::unknown()
        );
    }

    #[test]
    fn capabilities() {
        assert!(PaternalTradition.has_surnames());
        assert!(PaternalTradition.has_married_names());
    }
}
