//! tradition::lithuanian
//!
//! Paternal descent with Lithuanian suffix inflection.
//!
//! A man's surname ends in -as/-is/-ys/-ius/-us. His daughter's unmarried
//! form replaces the ending (-aitė/-ytė/-iūtė/-utė) and his wife's married
//! form ends in -ienė.

use crate::core::name::GedcomName;
use crate::core::types::Sex;

use super::inflect;
use super::traits::{NameTemplate, SurnameTradition};

/// Masculine endings and their unmarried-daughter forms.
/// `-ius` must precede `-us` and `-is` so the longer suffix wins.
const TO_DAUGHTER: &[(&str, &str)] = &[
    ("ius", "iūtė"),
    ("ys", "ytė"),
    ("is", "ytė"),
    ("us", "utė"),
    ("as", "aitė"),
];

/// Daughter endings and the masculine forms they came from.
const TO_FATHER: &[(&str, &str)] = &[
    ("iūtė", "ius"),
    ("ytė", "is"),
    ("utė", "us"),
    ("aitė", "as"),
];

/// Masculine endings and the married-woman form.
const TO_WIFE: &[(&str, &str)] = &[
    ("ius", "ienė"),
    ("ys", "ienė"),
    ("is", "ienė"),
    ("us", "ienė"),
    ("as", "ienė"),
];

/// Lithuanian surnames: paternal descent, suffixes inflected by sex and
/// marital status.
#[derive(Debug, Clone, Copy, Default)]
pub struct LithuanianTradition;

impl SurnameTradition for LithuanianTradition {
    fn name(&self) -> &'static str {
        "lithuanian"
    }

    fn has_married_names(&self) -> bool {
        true
    }

    fn new_child_names(
        &self,
        father: &GedcomName,
        _mother: &GedcomName,
        sex: Sex,
    ) -> NameTemplate {
        match father.surname(0) {
            Some(token) => {
                let token = match sex {
                    Sex::Female => inflect(token, TO_DAUGHTER),
                    Sex::Male | Sex::Unknown => token.to_string(),
                };
                NameTemplate::for_surname(&token)
            }
            None => NameTemplate::unknown(),
        }
    }

    fn new_parent_names(&self, child: &GedcomName, sex: Sex) -> NameTemplate {
        match (sex, child.surname(0)) {
            (Sex::Male, Some(token)) => {
                NameTemplate::for_surname(&inflect(token, TO_FATHER))
            }
            _ => NameTemplate::unknown(),
        }
    }

    fn new_spouse_names(&self, spouse: &GedcomName, sex: Sex) -> NameTemplate {
        match (sex, spouse.surname(0)) {
            (Sex::Female, Some(token)) => {
                let married = inflect(token, TO_WIFE);
                NameTemplate::unknown().with_marnm(format!("/{married}/"))
            }
            _ => NameTemplate::unknown(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name(raw: &str) -> GedcomName {
        GedcomName::parse(raw)
    }

    #[test]
    fn son_keeps_fathers_surname() {
        let template = LithuanianTradition.new_child_names(
            &name("Jonas /Kazlauskas/"),
            &name("Ona /Petrauskienė/"),
            Sex::Male,
        );
        assert_eq!(template.name, "/Kazlauskas/");
    }

    #[test]
    fn daughter_endings() {
        for (father, daughter) in [
            ("Kazlauskas", "Kazlauskaitė"),
            ("Paulius", "Pauliūtė"),
            ("Butkus", "Butkutė"),
            ("Stonys", "Stonytė"),
            ("Balsys", "Balsytė"),
        ] {
            let template = LithuanianTradition.new_child_names(
                &name(&format!("Jonas /{father}/")),
                &name(""),
                Sex::Female,
            );
            assert_eq!(template.name, format!("/{daughter}/"));
        }
    }

    #[test]
    fn father_recovered_from_daughter() {
        let template = LithuanianTradition
            .new_parent_names(&name("Ona /Kazlauskaitė/"), Sex::Male);
        assert_eq!(template.name, "/Kazlauskas/");
    }

    #[test]
    fn mother_not_derivable() {
        assert_eq!(
            LithuanianTradition.new_parent_names(&name("Ona /Kazlauskaitė/"), Sex::Female),
            NameTemplate::unknown()
        );
    }

    #[test]
    fn wife_takes_married_form() {
        let template = LithuanianTradition
            .new_spouse_names(&name("Jonas /Kazlauskas/"), Sex::Female);
        assert_eq!(template.marnm.as_deref(), Some("/Kazlauskienė/"));
    }

    #[test]
    fn foreign_surnames_pass_through() {
        let template = LithuanianTradition.new_child_names(
            &name("Jonas /Smith/"),
            &name(""),
            Sex::Female,
        );
        assert_eq!(template.name, "/Smith/");
    }
}
