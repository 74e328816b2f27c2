//! tradition::polish
//!
//! Paternal descent with sex-inflected surname endings.
//!
//! Polish adjectival surnames decline by sex: Kowalski / Kowalska,
//! Zawadzki / Zawadzka. Children and derived parents receive the form
//! matching their sex, and a wife's married name is the feminine form of
//! her husband's surname.

use crate::core::name::GedcomName;
use crate::core::types::Sex;

use super::inflect;
use super::traits::{NameTemplate, SurnameTradition};

/// Masculine endings and their feminine forms.
const TO_FEMININE: &[(&str, &str)] = &[
    ("cki", "cka"),
    ("dzki", "dzka"),
    ("ski", "ska"),
    ("żki", "żka"),
];

/// Feminine endings and their masculine forms.
const TO_MASCULINE: &[(&str, &str)] = &[
    ("cka", "cki"),
    ("dzka", "dzki"),
    ("ska", "ski"),
    ("żka", "żki"),
];

/// Polish surnames: paternal descent, endings declined by sex.
#[derive(Debug, Clone, Copy, Default)]
pub struct PolishTradition;

impl SurnameTradition for PolishTradition {
    fn name(&self) -> &'static str {
        "polish"
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
                    Sex::Female => inflect(token, TO_FEMININE),
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
                NameTemplate::for_surname(&inflect(token, TO_MASCULINE))
            }
            (Sex::Female, Some(token)) => {
                NameTemplate::for_surname(&inflect(token, TO_FEMININE))
            }
            _ => NameTemplate::unknown(),
        }
    }

    fn new_spouse_names(&self, spouse: &GedcomName, sex: Sex) -> NameTemplate {
        match (sex, spouse.surname(0)) {
            (Sex::Female, Some(token)) => {
                let married = inflect(token, TO_FEMININE);
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
    fn son_keeps_masculine_form() {
        let template = PolishTradition.new_child_names(
            &name("Jan /Kowalski/"),
            &name("Anna /Nowak/"),
            Sex::Male,
        );
        assert_eq!(template.name, "/Kowalski/");
    }

    #[test]
    fn daughter_gets_feminine_form() {
        let template = PolishTradition.new_child_names(
            &name("Jan /Kowalski/"),
            &name("Anna /Nowak/"),
            Sex::Female,
        );
        assert_eq!(template.name, "/Kowalska/");
        assert_eq!(template.surn.as_deref(), Some("Kowalska"));
    }

    #[test]
    fn all_adjectival_endings_decline() {
        for (masculine, feminine) in [
            ("Kowalski", "Kowalska"),
            ("Sawicki", "Sawicka"),
            ("Zawadzki", "Zawadzka"),
        ] {
            let template = PolishTradition.new_child_names(
                &name(&format!("Jan /{masculine}/")),
                &name(""),
                Sex::Female,
            );
            assert_eq!(template.name, format!("/{feminine}/"));
        }
    }

    #[test]
    fn non_adjectival_surnames_pass_through() {
        let template = PolishTradition.new_child_names(
            &name("Jan /Nowak/"),
            &name(""),
            Sex::Female,
        );
        assert_eq!(template.name, "/Nowak/");
    }

    #[test]
    fn father_masculinized_from_daughter() {
        let template =
            PolishTradition.new_parent_names(&name("Maria /Kowalska/"), Sex::Male);
        assert_eq!(template.name, "/Kowalski/");
    }

    #[test]
    fn mother_feminized_from_son() {
        let template =
            PolishTradition.new_parent_names(&name("Jan /Kowalski/"), Sex::Female);
        assert_eq!(template.name, "/Kowalska/");
    }

    #[test]
    fn wife_takes_feminine_married_name() {
        let template =
            PolishTradition.new_spouse_names(&name("Jan /Zawadzki/"), Sex::Female);
        assert_eq!(template.name, "//");
        assert_eq!(template.marnm.as_deref(), Some("/Zawadzka/"));
    }

    #[test]
    fn husband_keeps_his_name() {
        assert_eq!(
            PolishTradition.new_spouse_names(&name("Maria /Kowalska/"), Sex::Male),
            NameTemplate::unknown()
        );
    }
}
