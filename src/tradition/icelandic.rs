//! tradition::icelandic
//!
//! Patronymics: children are named for their father's given name, and
//! there are no family surnames at all.

use crate::core::name::{first_word, last_word, GedcomName};
use crate::core::types::Sex;

use super::traits::{NameTemplate, SurnameTradition};

/// Icelandic patronymics: a son of Einar is Einarsson, a daughter is
/// Einarsdóttir. Patronyms are not surnames, so derived `NAME` values
/// carry no slashes and no `SURN` field; underivable cases yield an
/// empty `NAME`.
#[derive(Debug, Clone, Copy, Default)]
pub struct IcelandicTradition;

impl IcelandicTradition {
    /// The child's patronym token: the surname slot if the record has
    /// one, otherwise the last word of the given part.
    fn patronym<'a>(child: &'a GedcomName) -> &'a str {
        child
            .surname(0)
            .unwrap_or_else(|| last_word(child.given()))
    }
}

impl SurnameTradition for IcelandicTradition {
    fn name(&self) -> &'static str {
        "icelandic"
    }

    fn has_surnames(&self) -> bool {
        false
    }

    fn new_child_names(
        &self,
        father: &GedcomName,
        _mother: &GedcomName,
        sex: Sex,
    ) -> NameTemplate {
        let givn = first_word(father.given());
        if givn.is_empty() {
            return NameTemplate::new("");
        }
        match sex {
            Sex::Male => NameTemplate::new(format!("{givn}sson")),
            Sex::Female => NameTemplate::new(format!("{givn}sdóttir")),
            Sex::Unknown => NameTemplate::new(""),
        }
    }

    fn new_parent_names(&self, child: &GedcomName, sex: Sex) -> NameTemplate {
        if sex == Sex::Male {
            let patronym = Self::patronym(child);
            let base = patronym
                .strip_suffix("sson")
                .or_else(|| patronym.strip_suffix("sdóttir"));
            if let Some(givn) = base.filter(|g| !g.is_empty()) {
                return NameTemplate::new(givn).with_givn(givn);
            }
        }
        NameTemplate::new("")
    }

    fn new_spouse_names(&self, _spouse: &GedcomName, _sex: Sex) -> NameTemplate {
        NameTemplate::new("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name(raw: &str) -> GedcomName {
        GedcomName::parse(raw)
    }

    #[test]
    fn capabilities() {
        assert!(!IcelandicTradition.has_surnames());
        assert!(!IcelandicTradition.has_married_names());
    }

    #[test]
    fn son_of_einar_is_einarsson() {
        let template = IcelandicTradition.new_child_names(
            &name("Einar Jónsson"),
            &name("Guðrún Halldórsdóttir"),
            Sex::Male,
        );
        assert_eq!(template, NameTemplate::new("Einarsson"));
    }

    #[test]
    fn daughter_of_einar_is_einarsdottir() {
        let template = IcelandicTradition.new_child_names(
            &name("Einar Jónsson"),
            &name("Guðrún Halldórsdóttir"),
            Sex::Female,
        );
        assert_eq!(template, NameTemplate::new("Einarsdóttir"));
    }

    #[test]
    fn unknown_sex_derives_nothing() {
        let template = IcelandicTradition.new_child_names(
            &name("Einar Jónsson"),
            &name(""),
            Sex::Unknown,
        );
        assert_eq!(template, NameTemplate::new(""));
    }

    #[test]
    fn father_recovered_from_patronym() {
        let from_son = IcelandicTradition.new_parent_names(&name("Björn Einarsson"), Sex::Male);
        assert_eq!(from_son, NameTemplate::new("Einar").with_givn("Einar"));

        let from_daughter =
            IcelandicTradition.new_parent_names(&name("Helga Einarsdóttir"), Sex::Male);
        assert_eq!(from_daughter, NameTemplate::new("Einar").with_givn("Einar"));
    }

    #[test]
    fn mother_not_encoded_in_patronym() {
        assert_eq!(
            IcelandicTradition.new_parent_names(&name("Björn Einarsson"), Sex::Female),
            NameTemplate::new("")
        );
    }

    #[test]
    fn marriage_changes_nothing() {
        assert_eq!(
            IcelandicTradition.new_spouse_names(&name("Einar Jónsson"), Sex::Female),
            NameTemplate::new("")
        );
    }
}
